//! ルートハンドラー

use axum::extract::{Form, Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect};
use ito_core::NewLink;
use serde::Deserialize;
use tera::Context;
use tracing::{debug, instrument};

use crate::AppState;
use crate::error::ApiError;
use crate::templates::DASHBOARD;

/// ダッシュボード（リンク一覧 + 登録フォーム）
pub async fn dashboard(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let links = state.store.list()?;
    debug!(count = links.len(), "Rendering dashboard");

    let mut context = Context::new();
    context.insert("links", &links);
    let html = state.templates.render(DASHBOARD, &context)?;
    Ok(Html(html))
}

/// リンク登録フォームの入力
#[derive(Deserialize, Debug)]
pub struct CreateLinkForm {
    pub alias: String,
    pub target_url: String,
}

/// リンクを登録してダッシュボードへ戻る
///
/// URLはここでパースします。フォームのデシリアライズに任せると
/// 不正なURLがaxumの422になり、バリデーション違反（400）と揃わないため。
#[instrument(skip(state, input), fields(alias = %input.alias))]
pub async fn create_link(
    State(state): State<AppState>,
    Form(input): Form<CreateLinkForm>,
) -> Result<impl IntoResponse, ApiError> {
    let new = NewLink::parse(input.alias, &input.target_url)?;
    state.store.create(new)?;
    Ok(Redirect::to("/"))
}

/// リンクをIDで削除
#[instrument(skip(state))]
pub async fn delete_link(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<(), ApiError> {
    state.store.delete(id)?;
    Ok(())
}

/// エイリアスからターゲットURLへリダイレクト
#[instrument(skip(state))]
pub async fn redirect_to_target(
    State(state): State<AppState>,
    Path(alias): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let target = state.store.resolve(&alias)?;
    Ok(Redirect::to(target.as_str()))
}

pub async fn favicon() -> StatusCode {
    StatusCode::NO_CONTENT
}
