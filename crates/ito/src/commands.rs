//! CLIコマンド実装
//!
//! serve以外はサーバーを経由せず、データベースを直接操作します。

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Context;
use colored::Colorize;
use ito_core::{LinkStore, NewLink};
use tracing::{info, instrument};

fn open_store(db_path: &Path) -> anyhow::Result<LinkStore> {
    LinkStore::open(db_path)
        .with_context(|| format!("データベースを開けませんでした: {}", db_path.display()))
}

/// HTTPサーバーを起動
#[instrument(skip_all, fields(db_path = %db_path.display(), %addr))]
pub async fn serve(db_path: &Path, addr: SocketAddr) -> anyhow::Result<()> {
    info!("Starting ito server");
    let store = open_store(db_path)?;
    ito_server::serve(store, addr).await
}

/// リンクを登録
pub fn add(db_path: &Path, alias: &str, target_url: &str) -> anyhow::Result<()> {
    let store = open_store(db_path)?;
    let link = store.create(NewLink::parse(alias, target_url)?)?;
    info!(id = link.id, alias = %link.alias, "Link registered");

    println!(
        "{} /{} → {}",
        "✓".green(),
        link.alias.bold(),
        link.target_url
    );
    Ok(())
}

/// リンク一覧を表示
pub fn list(db_path: &Path) -> anyhow::Result<()> {
    let store = open_store(db_path)?;
    let links = store.list()?;

    if links.is_empty() {
        println!("リンクは登録されていません");
        return Ok(());
    }

    for link in links {
        println!(
            "{:>4}  /{}  {}  ({})",
            link.id,
            link.alias.bold(),
            link.target_url,
            link.created_at.format("%Y-%m-%d %H:%M")
        );
    }
    Ok(())
}

/// リンクをIDで削除
pub fn rm(db_path: &Path, id: i64) -> anyhow::Result<()> {
    let store = open_store(db_path)?;
    store.delete(id)?;
    info!(id, "Link removed");

    println!("{} リンク (id={id}) を削除しました", "✓".green());
    Ok(())
}
