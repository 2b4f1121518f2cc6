use crate::handlers;
use crate::state::AppState;
use axum::{routing::{get, post, put}, Router};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/api/categories", get(handlers::get_categories))
        .route("/api/logs", get(handlers::list_logs).post(handlers::create_log))
        .route("/api/logs/delete", post(handlers::delete_logs))
        .route("/api/logs/:id", put(handlers::update_log).delete(handlers::delete_log))
        .route("/api/report", get(handlers::get_report))
        .route("/api/day", get(handlers::get_day))
        .with_state(state)
}
