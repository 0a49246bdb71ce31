use super::open_api;
use crate::{
    config::app_config,
    modules::{
        auth::{self, service::AuthService},
        booking, car, car_inspection, driver_license, notification, parking_address,
        rental_service, report, role, status, user,
    },
};
use axum::{body::Body, routing::get, Router};
use http::{header, HeaderValue, Method, Request, StatusCode};
use rand_chacha::ChaCha8Rng;
use rand_core::{OsRng, RngCore, SeedableRng};
use sea_orm::DatabaseConnection;
use tower::ServiceBuilder;
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultOnResponse, TraceLayer},
};
use tracing::{Level, Span};

/// The main application state, this is cloned for every HTTP
/// request and thus its fields should contain types that are cheap
/// to clone.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub auth_service: AuthService,
}

/// Creates the main axum router/controller to be served over http
pub fn new(db: DatabaseConnection) -> Router {
    let rng = ChaCha8Rng::seed_from_u64(OsRng.next_u64());

    let state = AppState {
        db: db.clone(),
        auth_service: AuthService::new(db, rng),
    };

    let frontend_origin = app_config().frontend_origin.trim_end_matches('/');

    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::PUT,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_origin(
            frontend_origin
                .parse::<HeaderValue>()
                .expect("failed to parse CORS allowed origins"),
        )
        .allow_credentials(true)
        .allow_headers([header::ACCEPT, header::AUTHORIZATION, header::CONTENT_TYPE]);

    let tracing_layer = TraceLayer::new_for_http()
        .on_request(|request: &Request<Body>, _span: &Span| {
            tracing::info!("request: {} {}", request.method(), request.uri().path())
        })
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let global_middlewares = ServiceBuilder::new().layer(tracing_layer).layer(cors);

    Router::new()
        .merge(open_api::create_openapi_router())
        .route("/healthcheck", get(healthcheck))
        .nest("/auth", auth::routes::create_router())
        .nest("/role", role::create_router())
        .nest("/driver-license", driver_license::create_router())
        .nest("/user", user::create_router())
        .nest("/parking-address", parking_address::create_router())
        .nest("/status", status::create_router())
        .nest("/car", car::create_router())
        .nest("/rental-service", rental_service::create_router())
        .nest("/booking", booking::routes::create_router())
        .nest("/car-inspection", car_inspection::create_router())
        .nest("/notification", notification::create_router())
        .nest("/report", report::routes::create_router())
        .layer(global_middlewares)
        .with_state(state)
}

#[utoipa::path(
    get,
    tag = "meta",
    path = "/healthcheck",
    responses((status = OK)),
)]
pub async fn healthcheck() -> StatusCode {
    StatusCode::OK
}
