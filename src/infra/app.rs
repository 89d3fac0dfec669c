use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{self};
use axum::routing::get;
use axum::{middleware, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use uuid::Uuid;

use crate::adapter::http::docs::{docs_ui, openapi_json};
use crate::adapter::http::middleware::auth::auth_middleware;
use crate::adapter::http::routes::education::{create_education, delete_education, list_educations, update_education};
use crate::adapter::http::routes::experience::{
    create_work_experience, delete_work_experience, list_work_experiences, update_work_experience,
};
use crate::adapter::http::routes::profile::{create_about, delete_about, get_about, update_about};
use crate::infra::config::AppConfig;
use crate::infra::state::AppState;

fn build_cors(config: &AppConfig) -> CorsLayer {
    let has_wildcard = config.application.allow_origins.iter().any(|s| s == "*");

    if has_wildcard {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([
                http::Method::POST,
                http::Method::GET,
                http::Method::PUT,
                http::Method::DELETE,
            ])
            .allow_headers([CONTENT_TYPE, AUTHORIZATION]);
    }
    let origins: Vec<http::HeaderValue> = config
        .application
        .allow_origins
        .iter()
        .filter_map(|s| {
            s.parse::<http::HeaderValue>()
                .map_err(|e| {
                    tracing::warn!("Failed to parse origin '{}': {}", s, e);
                })
                .ok()
        })
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            http::Method::POST,
            http::Method::GET,
            http::Method::PUT,
            http::Method::DELETE,
        ])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
}

pub fn about_router(state: AppState) -> Router<AppState> {
    // TODO: per-entry routes for skills and values, mirroring work experience.
    Router::new()
        .route(
            "/",
            get(get_about).post(create_about).put(update_about).delete(delete_about),
        )
        .route(
            "/work-experiences",
            get(list_work_experiences).post(create_work_experience),
        )
        .route(
            "/work-experiences/{id}",
            axum::routing::put(update_work_experience).delete(delete_work_experience),
        )
        .route("/educations", get(list_educations).post(create_education))
        .route(
            "/educations/{id}",
            axum::routing::put(update_education).delete(delete_education),
        )
        .route_layer(middleware::from_fn_with_state(state.clone(), auth_middleware))
}

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .nest("/about", about_router(state))
        .route("/openapi.json", get(openapi_json))
        .route("/docs", get(docs_ui))
}

pub fn create_app(config: &AppConfig, state: AppState) -> Router {
    let cors = build_cors(config);
    Router::new()
        .merge(router(state.clone()))
        .with_state(state.clone())
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &http::Request<_>| {
                    let request_id = Uuid::now_v7();
                    tracing::info_span!(
                        "http-request",
                        method = %request.method(),
                        uri = %request.uri(),
                        version = ?request.version(),
                        request_id = %request_id
                    )
                })
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
}
