//! HTTPエラーマッピング

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use ito_core::CoreError;

/// HTTPレスポンスに変換可能なエラー
///
/// ストアのエラーをクライアント向けのステータスコードに対応付けます:
/// - バリデーション違反・エイリアス重複 → 400
/// - 未登録のエイリアス・存在しないID → 404
/// - それ以外（プール、SQLite、テンプレート） → 500
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let status = match &err {
            CoreError::InvalidAlias { .. }
            | CoreError::AliasTaken(_)
            | CoreError::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            CoreError::AliasNotFound(_) | CoreError::LinkNotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl From<tera::Error> for ApiError {
    fn from(err: tera::Error) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: format!("テンプレート描画エラー: {err}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, format!("Error: {}", self.message)).into_response()
    }
}
