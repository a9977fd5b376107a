//! SQLiteリンクストア
//!
//! r2d2コネクションプール経由でSQLiteに永続化します。
//! スキーマはオープン時に冪等に適用されます。

use std::path::Path;

use chrono::Utc;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{OptionalExtension, params};
use tracing::{debug, info, instrument};
use url::Url;

use crate::error::{CoreError, Result};
use crate::model::{Link, NewLink, validate_alias};

/// スキーマSQL（コンパイル時に埋め込み）
const SCHEMA_SQL: &str = include_str!("schema.sql");

/// リンクストア
///
/// Cloneしても同じプールを共有します。
#[derive(Clone)]
pub struct LinkStore {
    pool: Pool<SqliteConnectionManager>,
}

impl LinkStore {
    /// 指定パスのデータベースを開く
    ///
    /// 親ディレクトリが存在しない場合は作成します。
    /// スキーマ適用は冪等なので、既存のデータベースもそのまま開けます。
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let manager = SqliteConnectionManager::file(path);
        let pool = Pool::new(manager)?;

        let store = Self { pool };
        store.apply_schema()?;
        info!("Link store opened");
        Ok(store)
    }

    /// インメモリのデータベースを開く（テスト用）
    ///
    /// `:memory:` はコネクションごとに別のデータベースになるため、
    /// プールサイズを1に固定しています。
    pub fn open_in_memory() -> Result<Self> {
        let manager = SqliteConnectionManager::memory();
        let pool = Pool::builder().max_size(1).build(manager)?;

        let store = Self { pool };
        store.apply_schema()?;
        Ok(store)
    }

    fn apply_schema(&self) -> Result<()> {
        debug!("Applying schema");
        self.pool.get()?.execute_batch(SCHEMA_SQL)?;
        Ok(())
    }

    /// リンクを登録
    ///
    /// エイリアスが既に使われている場合は [`CoreError::AliasTaken`] を返します。
    #[instrument(skip(self), fields(alias = %new.alias))]
    pub fn create(&self, new: NewLink) -> Result<Link> {
        validate_alias(&new.alias)?;

        let conn = self.pool.get()?;
        let created_at = Utc::now();
        conn.execute(
            "INSERT INTO links (alias, target_url, created_at) VALUES (?1, ?2, ?3)",
            params![new.alias, new.target_url, created_at],
        )
        .map_err(|e| match &e {
            rusqlite::Error::SqliteFailure(inner, _)
                if inner.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                CoreError::AliasTaken(new.alias.clone())
            }
            _ => CoreError::Database(e),
        })?;

        let link = Link {
            id: conn.last_insert_rowid(),
            alias: new.alias,
            target_url: new.target_url,
            created_at,
        };
        info!(id = link.id, "Link created");
        Ok(link)
    }

    /// 全リンクを取得（新しい順）
    pub fn list(&self) -> Result<Vec<Link>> {
        let conn = self.pool.get()?;
        let mut statement = conn.prepare(
            "SELECT id, alias, target_url, created_at FROM links
             ORDER BY created_at DESC, id DESC",
        )?;
        let rows = statement.query_map([], |row| {
            Ok(Link {
                id: row.get(0)?,
                alias: row.get(1)?,
                target_url: row.get(2)?,
                created_at: row.get(3)?,
            })
        })?;

        let mut links = Vec::new();
        for link in rows {
            links.push(link?);
        }
        Ok(links)
    }

    /// エイリアスからターゲットURLを解決
    ///
    /// 未登録のエイリアスは [`CoreError::AliasNotFound`] を返します。
    #[instrument(skip(self))]
    pub fn resolve(&self, alias: &str) -> Result<Url> {
        let conn = self.pool.get()?;
        let target_url: Option<Url> = conn
            .query_row(
                "SELECT target_url FROM links WHERE alias = ?1",
                [alias],
                |row| row.get(0),
            )
            .optional()?;

        target_url.ok_or_else(|| CoreError::AliasNotFound(alias.to_string()))
    }

    /// リンクをIDで削除
    ///
    /// 該当行がない場合は [`CoreError::LinkNotFound`] を返します。
    #[instrument(skip(self))]
    pub fn delete(&self, id: i64) -> Result<()> {
        let conn = self.pool.get()?;
        let affected = conn.execute("DELETE FROM links WHERE id = ?1", [id])?;
        if affected == 0 {
            return Err(CoreError::LinkNotFound(id));
        }
        info!(id, "Link deleted");
        Ok(())
    }
}
