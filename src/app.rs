use axum::Router;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::api_routes::{self, AppState};

pub fn create_app(state: AppState, assets_path: Option<&str>) -> Router {
    let mut app = Router::new()
        .nest("/api", api_routes::routes(state))
        .layer(TraceLayer::new_for_http());

    if let Some(assets_path) = assets_path {
        log::debug!("serving assets from {}", assets_path);
        app = app.fallback_service(ServeDir::new(assets_path));
    }
    app
}
