use crate::models::{ClassifiedLine, LineType, TitlePage};

// 转义 HTML 特殊字符
fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

// 单行转换为HTML格式
fn line_to_html(line: &ClassifiedLine) -> String {
    match line.line_type {
        LineType::Empty => "<br />".to_string(),
        _ => format!(
            "<div class=\"{}\">{}</div>",
            line.line_type.css_class(),
            escape_html(&line.text)
        ),
    }
}

/// 生成打印预览 HTML，每行一个元素
pub fn generate_html(lines: &[ClassifiedLine], title_page: Option<&TitlePage>) -> String {
    let mut buffer = String::from("<div id=\"print-area\">\n");
    if let Some(page) = title_page.filter(|p| !p.is_empty()) {
        buffer.push_str(&generate_title_html(page));
    }
    for line in lines {
        buffer.push_str(&line_to_html(line));
        buffer.push('\n');
    }
    buffer.push_str("</div>\n");
    buffer
}

/// 生成标题页 HTML
pub fn generate_title_html(page: &TitlePage) -> String {
    let mut buffer = String::from("<div class=\"print-title-page\">\n");
    if !page.title.trim().is_empty() {
        buffer.push_str(&format!(
            "<div class=\"print-title\">{}</div>\n",
            escape_html(page.title.trim())
        ));
    }
    if !page.author.trim().is_empty() {
        buffer.push_str(&format!(
            "<div class=\"print-author\">Written by<br />{}</div>\n",
            escape_html(page.author.trim())
        ));
    }
    if !page.contact.trim().is_empty() {
        let contact: Vec<String> = page.contact.trim().lines().map(escape_html).collect();
        buffer.push_str(&format!(
            "<div class=\"print-contact\">{}</div>\n",
            contact.join("<br />")
        ));
    }
    if let Some(date) = page.draft_date_label() {
        buffer.push_str(&format!("<div class=\"print-draft-date\">{}</div>\n", date));
    }
    buffer.push_str("</div>\n");
    buffer
}
