use crate::models::{ClassifiedLine, Conf, LineType, TitlePage};

/// 导出 Fountain 纯文本
pub fn export_fountain(lines: &[ClassifiedLine], title_page: Option<&TitlePage>, config: &Conf) -> String {
    let mut out: Vec<String> = Vec::new();

    if config.print_title_page {
        if let Some(page) = title_page.filter(|p| !p.is_empty()) {
            push_title_page(&mut out, page);
        }
    }
    let body_start = out.len();

    for line in lines {
        // 当前输出末尾是否为空行（正文开头视为空行）
        let last_blank = out.len() == body_start || out.last().map_or(true, |l| l.is_empty());
        match line.line_type {
            LineType::Empty => {
                if !(config.merge_empty_lines && last_blank) {
                    out.push(String::new());
                }
            }
            LineType::Scene | LineType::Character => {
                if !last_blank {
                    out.push(String::new());
                }
                out.push(line.text.trim().to_uppercase());
            }
            LineType::Transition => out.push(format!("> {}", line.text.trim().to_uppercase())),
            LineType::Action | LineType::Dialogue | LineType::Parenthetical => {
                out.push(line.text.clone())
            }
        }
    }

    let mut fountain = out.join("\n");
    if !fountain.ends_with('\n') {
        fountain.push('\n');
    }
    fountain
}

fn push_title_page(out: &mut Vec<String>, page: &TitlePage) {
    let title = page.title.trim();
    if !title.is_empty() {
        out.push(format!("Title: {}", title));
    }
    let author = page.author.trim();
    if !author.is_empty() {
        out.push("Credit: Written by".to_string());
        out.push(format!("Author: {}", author));
    }
    let contact: Vec<&str> = page
        .contact
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();
    if !contact.is_empty() {
        // 多行值需缩进
        out.push("Contact:".to_string());
        out.extend(contact.iter().map(|l| format!("    {}", l)));
    }
    if let Some(date) = page.draft_date_label() {
        out.push(format!("Draft date: {}", date));
    }
    out.push(String::new());
}
