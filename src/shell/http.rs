use axum::{Extension, Router, routing::get};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::modules::equipment::use_cases::get_equipment_summaries::inbound::http as summaries_http;
use crate::modules::equipment::use_cases::get_equipment_summary::inbound::http as summary_http;
use crate::modules::equipment::use_cases::get_map_data::inbound::http as map_data_http;
use crate::modules::equipment::use_cases::get_utilization_overview::inbound::http as overview_http;
use crate::shell::graphql::{self, graphiql};
use crate::shell::state::AppState;

pub fn router(state: AppState) -> Router {
    let schema = graphql::schema(state.clone());

    Router::new()
        .route("/health", get(health))
        .route("/equipment", get(summaries_http::handle))
        .route("/equipment/{equipment_id}", get(summary_http::handle))
        .route("/equipment-utilization", get(overview_http::handle))
        .route("/equipment-map-data", get(map_data_http::handle))
        .route("/gql", get(graphiql).post(graphql::graphql))
        .layer(Extension(schema))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
