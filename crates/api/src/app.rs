use async_graphql::http::GraphiQLSource;
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{
    extract::State,
    http::{
        header::{HeaderValue, CONTENT_TYPE},
        Method, StatusCode,
    },
    response::{Html, IntoResponse},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, timeout::TimeoutLayer, trace::TraceLayer};

use crate::config::ServerConfig;
use crate::error::AppError;
use crate::gql::CatalogSchema;
use crate::state::AppState;

/// Build the Axum router with health endpoint and GraphQL.
pub fn build_router(state: AppState, schema: CatalogSchema, server: &ServerConfig) -> Router {
    let mut graphql_route = post({
        let schema_clone = schema.clone();
        move |req| graphql_handler(req, schema_clone)
    });
    if state.graphql().playground {
        graphql_route = graphql_route.get(graphiql);
    }

    let origins: Vec<HeaderValue> = server
        .allowed_origins
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();

    Router::new()
        // Simple liveness check; also proves store connectivity.
        .route("/health", get(health))
        .route("/graphql", graphql_route)
        .with_state(state)
        // Useful default middlewares
        .layer(TraceLayer::new_for_http())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server.request_timeout,
        ))
        .layer(
            CorsLayer::new()
                .allow_origin(origins)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        )
}

async fn graphql_handler(req: GraphQLRequest, schema: CatalogSchema) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn graphiql() -> impl IntoResponse {
    Html(GraphiQLSource::build().endpoint("/graphql").finish())
}

/// Liveness + quick store probe.
async fn health(State(state): State<AppState>) -> Result<&'static str, AppError> {
    state.store.ping().await?;
    Ok("ok")
}
