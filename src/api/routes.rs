/*
 * Responsibility
 * - URL 構造を定義 (path は Config から渡される、1 route のみ)
 * - OPTIONS は preflight、それ以外の method は全部 auth_done に落とす
 */
use axum::{Router, routing::options};

use crate::api::handlers::auth_done::{auth_done, preflight};
use crate::state::AppState;

pub fn routes(auth_done_path: &str) -> Router<AppState> {
    Router::new().route(auth_done_path, options(preflight).fallback(auth_done))
}
