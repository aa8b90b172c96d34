//! API route configuration.

use axum::Router;
use axum::routing::{get, post};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use super::handlers::{
    self, ClienteLookupResponse, ClienteResponse, CreateClienteRequest, HealthResponse,
    MedicamentoResponse, MessageResponse,
};
use super::state::AppState;
use crate::db::Database;

/// Build routes with generic database type.
///
/// Registers handlers that are generic over the Database trait, applying the
/// turbofish automatically.
macro_rules! routes {
    ($D:ty => {
        $($method:ident $path:literal => $($handler:ident)::+),* $(,)?
    }) => {{
        let router = Router::new();
        $(
            let router = router.route($path, $method($($handler)::+::<$D>));
        )*
        router
    }};
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Farmácia API",
        version = "0.1.0",
        description = "Clients and medications of a pharmacy",
        license(name = "GPL-2.0")
    ),
    paths(
        handlers::root,
        handlers::health,
        handlers::list_clientes,
        handlers::create_cliente,
        handlers::get_cliente,
        handlers::list_medicamentos,
    ),
    components(
        schemas(
            MessageResponse,
            HealthResponse,
            ClienteResponse,
            CreateClienteRequest,
            ClienteLookupResponse,
            MedicamentoResponse,
        )
    ),
    tags(
        (name = "system", description = "Greeting and health endpoints"),
        (name = "clientes", description = "Client registration and lookup"),
        (name = "medicamentos", description = "Medication catalogue")
    )
)]
pub struct ApiDoc;

/// Create the API router, optionally serving OpenAPI docs at /docs
pub fn create_router<D: Database + 'static>(state: AppState<D>, enable_docs: bool) -> Router {
    let system_routes = Router::new().route("/api", get(handlers::root));

    let health_routes = routes!(D => {
        get "/health" => handlers::health,
    });

    let cliente_routes = routes!(D => {
        get "/api/clientes" => handlers::list_clientes,
        post "/api/clientes" => handlers::create_cliente,
        get "/api/clientes/{cpf}" => handlers::get_cliente,
    });

    let medicamento_routes = routes!(D => {
        get "/api/medicamentos" => handlers::list_medicamentos,
    });

    let router = system_routes
        .merge(health_routes)
        .merge(cliente_routes)
        .merge(medicamento_routes);

    let router = if enable_docs {
        router.merge(Scalar::with_url("/docs", ApiDoc::openapi()))
    } else {
        router
    };

    router.with_state(state)
}
