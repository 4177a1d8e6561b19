use crate::export::display_title;
use crate::models::{ClassifiedLine, Conf, LineType, TitlePage};

/// 导出 Markdown
pub fn export_markdown(lines: &[ClassifiedLine], title_page: Option<&TitlePage>, config: &Conf) -> String {
    let mut markdown = format!("# {}\n\n", display_title(title_page, config));

    for line in lines {
        let text = line.text.trim();
        match line.line_type {
            LineType::Empty => markdown.push('\n'),
            LineType::Scene => markdown.push_str(&format!("## {}\n\n", text)),
            LineType::Action => markdown.push_str(&format!("{}\n\n", text)),
            LineType::Character => markdown.push_str(&format!("**{}**\n", text)),
            LineType::Dialogue => markdown.push_str(&format!("> {}\n\n", text)),
            LineType::Parenthetical => markdown.push_str(&format!("_{}_\n", text)),
            LineType::Transition => markdown.push_str(&format!("**{}**\n\n", text)),
        }
    }

    markdown
}
