pub mod markdown;
pub mod fountain;
pub mod html;
pub mod liner;

pub use markdown::export_markdown;
pub use fountain::export_fountain;
pub use html::{generate_html, generate_title_html};
pub use liner::{Liner, PrintLine};

use crate::models::{Conf, TitlePage};

/// 导出文件名：非字母数字替换为 `_` 并转小写，为空时用 `script`
pub fn safe_file_stem(title: &str) -> String {
    let stem: String = title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    if stem.is_empty() {
        "script".to_string()
    } else {
        stem
    }
}

/// 导出时使用的标题
pub(crate) fn display_title<'a>(title_page: Option<&'a TitlePage>, config: &'a Conf) -> &'a str {
    match title_page.map(|t| t.title.trim()) {
        Some(title) if !title.is_empty() => title,
        _ => config.untitled_name.as_str(),
    }
}
