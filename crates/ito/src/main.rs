mod commands;
mod config;

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "ito")]
#[command(about = "糸を張るように、URLをつなぐ。セルフホスト型リンク短縮サービス", long_about = None)]
struct Cli {
    /// データベースファイルのパス
    #[arg(
        long,
        env = "ITO_DB_PATH",
        global = true,
        default_value = config::DEFAULT_DB_PATH
    )]
    db_path: PathBuf,

    /// サブコマンド省略時は serve として動作（コンテナのENTRYPOINT向け）
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// HTTPサーバーを起動
    Serve {
        /// リッスンアドレス
        #[arg(long, env = "ITO_ADDR", default_value = config::DEFAULT_ADDR)]
        addr: SocketAddr,
    },
    /// リンクを登録
    Add {
        /// 短縮名
        alias: String,
        /// リダイレクト先URL
        target_url: String,
    },
    /// リンク一覧を表示
    List,
    /// リンクをIDで削除
    Rm {
        /// リンクID（`ito list` で確認）
        id: i64,
    },
    /// バージョン情報を表示
    Version,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // ログはstderrへ。RUST_LOG 未設定時は info
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        // 引数なしの `ito` はサーバー起動（ITO_ADDR があればそれを使う）
        None => commands::serve(&cli.db_path, config::resolve_addr()?).await,
        Some(Commands::Serve { addr }) => commands::serve(&cli.db_path, addr).await,
        Some(Commands::Add { alias, target_url }) => {
            commands::add(&cli.db_path, &alias, &target_url)
        }
        Some(Commands::List) => commands::list(&cli.db_path),
        Some(Commands::Rm { id }) => commands::rm(&cli.db_path, id),
        Some(Commands::Version) => {
            println!("ito {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}
