//! リンク定義

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::error::{CoreError, Result};

/// エイリアスの最大長
pub const MAX_ALIAS_LENGTH: usize = 64;

/// 固定ルートと衝突するため使用できないエイリアス
const RESERVED_ALIASES: &[&str] = &["links", "favicon.ico"];

/// Link - 登録済みの短縮リンク
///
/// エイリアス（`/{alias}` でアクセスされる短い名前）と
/// リダイレクト先のターゲットURLの対応を表します。
#[derive(Debug, Clone, Serialize)]
pub struct Link {
    /// リンクID（ストアが採番）
    pub id: i64,
    /// 短縮名
    pub alias: String,
    /// リダイレクト先URL
    pub target_url: Url,
    /// 登録日時
    pub created_at: DateTime<Utc>,
}

/// 新規リンクの入力
#[derive(Debug, Clone)]
pub struct NewLink {
    pub alias: String,
    pub target_url: Url,
}

impl NewLink {
    /// エイリアスとターゲットURL（文字列）から新規リンクを作成
    ///
    /// エイリアスのバリデーションとURLのパースをここで行うため、
    /// 返ってきた `NewLink` はそのままストアに渡せます。
    pub fn parse(alias: impl Into<String>, target_url: &str) -> Result<Self> {
        let alias = alias.into();
        validate_alias(&alias)?;
        let target_url = Url::parse(target_url)?;
        Ok(Self { alias, target_url })
    }
}

/// エイリアスを検証
///
/// ルール:
/// - 1〜64文字
/// - ASCII英数字と `-` `_` のみ
/// - 固定ルート（links, favicon.ico）と同名は不可
pub fn validate_alias(alias: &str) -> Result<()> {
    if alias.is_empty() {
        return Err(CoreError::InvalidAlias {
            alias: alias.to_string(),
            reason: "空文字は使用できません".to_string(),
        });
    }

    if alias.len() > MAX_ALIAS_LENGTH {
        return Err(CoreError::InvalidAlias {
            alias: alias.to_string(),
            reason: format!("{MAX_ALIAS_LENGTH}文字以内で指定してください"),
        });
    }

    if !alias
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(CoreError::InvalidAlias {
            alias: alias.to_string(),
            reason: "使用できるのはASCII英数字と - _ のみです".to_string(),
        });
    }

    if RESERVED_ALIASES.contains(&alias) {
        return Err(CoreError::InvalidAlias {
            alias: alias.to_string(),
            reason: "予約語のため使用できません".to_string(),
        });
    }

    Ok(())
}
