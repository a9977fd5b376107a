//! 実行時設定の解決
//!
//! 優先順位: CLIフラグ > 環境変数 > デフォルト値
//! （フラグと環境変数の対応はclapの `env` 属性が担う。ここでは
//! サブコマンド省略時のアドレス解決を行う）

use std::net::SocketAddr;

use anyhow::Context;

/// デフォルトのデータベースパス
pub const DEFAULT_DB_PATH: &str = "./data/ito.db";

/// デフォルトのリッスンアドレス
pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// リッスンアドレスを解決
///
/// `ITO_ADDR` 環境変数があればそれを、なければデフォルトを使います。
pub fn resolve_addr() -> anyhow::Result<SocketAddr> {
    let raw = std::env::var("ITO_ADDR").unwrap_or_else(|_| DEFAULT_ADDR.to_string());
    raw.parse()
        .with_context(|| format!("リッスンアドレスをパースできません: {raw}"))
}
