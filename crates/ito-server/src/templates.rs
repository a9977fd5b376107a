//! ダッシュボードテンプレート
//!
//! Teraテンプレートはコンパイル時に埋め込み、バイナリ単体で動くようにします。

use tera::Tera;

/// ダッシュボードのテンプレート名
pub const DASHBOARD: &str = "links.html";

/// テンプレートエンジンを構築
pub fn build_templates() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_template(DASHBOARD, include_str!("../templates/links.html"))?;
    Ok(tera)
}
