//! Fixed user-facing messages. Failure responses never carry internal detail.

pub const BEM_VINDO: &str = "Olá, seja bem-vindo!";

pub const LISTA_CLIENTES_FALHOU: &str = "Não foi possivel acessar a lista de clientes.";
pub const CLIENTE_CADASTRADO: &str = "Cliente cadastrado com sucesso.";
pub const CADASTRO_FALHOU: &str = "Erro ao cadastrar cliente.";
pub const INSERCAO_FALHOU: &str = "Não foi possível inserir o cliente";
pub const CPF_INVALIDO: &str = "CPF inválido.";
pub const CLIENTE_NAO_ENCONTRADO: &str = "Nenhum cliente encontrado com o CPF fornecido.";
pub const RECUPERACAO_FALHOU: &str = "Não foi possível recuperar o cliente.";

pub const LISTA_MEDICAMENTOS_FALHOU: &str = "Não foi possivel acessar a lista de medicamentos.";
