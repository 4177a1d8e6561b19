use std::ops::Range;
use regex::{Regex, RegexBuilder};

// 构造字面量查询的正则，空查询返回 None
fn literal_regex(query: &str, case_sensitive: bool) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    RegexBuilder::new(&regex::escape(query))
        .case_insensitive(!case_sensitive)
        .build()
        .ok()
}

/// 查找所有匹配（字节区间）
pub fn find_matches(text: &str, query: &str, case_sensitive: bool) -> Vec<Range<usize>> {
    match literal_regex(query, case_sensitive) {
        Some(re) => re.find_iter(text).map(|m| m.range()).collect(),
        None => Vec::new(),
    }
}

/// 从 `from` 开始查找下一个匹配，到文末后从头继续
pub fn find_next(text: &str, query: &str, from: usize, case_sensitive: bool) -> Option<Range<usize>> {
    let matches = find_matches(text, query, case_sensitive);
    matches
        .iter()
        .find(|m| m.start >= from)
        .or_else(|| matches.first())
        .cloned()
}

/// 全部替换，返回新文本和替换次数
pub fn replace_all(text: &str, query: &str, replacement: &str, case_sensitive: bool) -> (String, usize) {
    match literal_regex(query, case_sensitive) {
        Some(re) => {
            let count = re.find_iter(text).count();
            let replaced = re.replace_all(text, regex::NoExpand(replacement)).into_owned();
            (replaced, count)
        }
        None => (text.to_string(), 0),
    }
}
