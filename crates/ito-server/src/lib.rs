//! ito-server — HTTP層
//!
//! axumルーター、ハンドラー、ダッシュボードのHTML描画を提供します。
//!
//! ルーティング:
//! - `GET /` ダッシュボード（リンク一覧 + 登録フォーム）
//! - `GET /favicon.ico` 204
//! - `GET /{alias}` ターゲットURLへリダイレクト
//! - `POST /links` リンク登録（フォーム）
//! - `DELETE /links/{id}` リンク削除

pub mod error;
pub mod handlers;
pub mod templates;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use axum::routing::{delete, get, post};
use ito_core::LinkStore;
use tera::Tera;
use tokio::net::TcpListener;
use tracing::info;

/// 全ハンドラーで共有される状態
#[derive(Clone)]
pub struct AppState {
    pub store: LinkStore,
    pub templates: Arc<Tera>,
}

/// ルーターを構築
///
/// `/{alias}` はワイルドカードなので固定ルートより後に解決されますが、
/// エイリアスのバリデーション（予約語）でも衝突を防いでいます。
pub fn build_router(store: LinkStore) -> anyhow::Result<Router> {
    let templates = Arc::new(templates::build_templates()?);
    let state = AppState { store, templates };

    Ok(Router::new()
        .route("/", get(handlers::dashboard))
        .route("/favicon.ico", get(handlers::favicon))
        .route("/{alias}", get(handlers::redirect_to_target))
        .route("/links", post(handlers::create_link))
        .route("/links/{id}", delete(handlers::delete_link))
        .with_state(state))
}

/// HTTPサーバーを起動
///
/// Ctrl-Cでグレースフルシャットダウンします。
pub async fn serve(store: LinkStore, addr: SocketAddr) -> anyhow::Result<()> {
    let app = build_router(store)?;
    let listener = TcpListener::bind(addr).await?;
    info!(%addr, "ito server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    // シグナルハンドラーの登録に失敗した場合はシャットダウン契機なしで動き続ける
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}
