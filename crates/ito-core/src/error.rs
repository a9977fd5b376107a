//! ito-core エラー型

use thiserror::Error;

/// ito-core のエラー
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("無効なエイリアス '{alias}': {reason}")]
    InvalidAlias { alias: String, reason: String },

    #[error("エイリアス '{0}' は既に使用されています")]
    AliasTaken(String),

    #[error("エイリアス '{0}' が見つかりません")]
    AliasNotFound(String),

    #[error("リンク (id={0}) が見つかりません")]
    LinkNotFound(i64),

    #[error("URLパースエラー: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("SQLiteエラー: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("コネクションプールエラー: {0}")]
    Pool(#[from] r2d2::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CoreError>;
