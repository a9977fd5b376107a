//! ito-core — リンクのモデルとSQLiteストア
//!
//! itoは短縮リンク（エイリアス → ターゲットURL）を管理します。
//! このクレートはドメインモデル、エイリアスのバリデーション、
//! SQLiteを使った永続化層を提供します。

pub mod error;
pub mod model;
pub mod store;

pub use error::*;
pub use model::*;
pub use store::*;
