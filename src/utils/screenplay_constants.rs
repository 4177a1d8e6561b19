use lazy_static::lazy_static;
use regex::Regex;

/// 每页行数（行业惯例）
pub const LINES_PER_PAGE: usize = 55;

/// 转场短语前缀
pub const TRANSITION_PHRASES: [&str; 5] = [
    "CUT TO",
    "DISSOLVE TO",
    "FADE IN",
    "FADE OUT",
    "FADE TO BLACK",
];

/// 以冒号结尾的转场最多允许的单词数（不含）
pub const TRANSITION_MAX_WORDS: usize = 4;

/// 输入时被视为角色名的最多单词数（含）
pub const CUE_MAX_WORDS: usize = 5;

/// 场景为空时的大纲摘要
pub const EMPTY_SCENE_SUMMARY: &str = "Scene is empty.";

lazy_static! {
    // 块级正则
    pub static ref BLOCK_REGEX: std::collections::HashMap<&'static str, Regex> = {
        let mut map = std::collections::HashMap::new();
        // 场景标题：INT. / EXT.，大小写不敏感
        map.insert("scene_heading", Regex::new(r"(?i)^\s*(?:INT|EXT)\.").unwrap());
        // 去掉场景标题的 INT./EXT. 前缀及其后空白
        map.insert("scene_prefix", Regex::new(r"(?i)^\s*(?:INT|EXT)\.\s*").unwrap());
        // 角色名后的扩展部分，如 (V.O.)
        map.insert("character_extension", Regex::new(r"[ \t]*(\(.*\)|（.*）)[ \t]*$").unwrap());
        map
    };
}
