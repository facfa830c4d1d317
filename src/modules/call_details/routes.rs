use axum::{routing::get, Router};

use crate::modules::call_details::controller;
use crate::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/call-details", get(controller::get_call_details))
}
