pub mod screenplay_constants;
pub mod ordered_set;
pub mod search;

pub use ordered_set::OrderedSet;
pub use screenplay_constants::{BLOCK_REGEX, LINES_PER_PAGE};

/// 是否为场景标题（INT. / EXT. 开头，忽略大小写与前导空白）
pub fn is_scene_heading(text: &str) -> bool {
    BLOCK_REGEX["scene_heading"].is_match(text)
}

/// 文本是否全部为大写（转大写后不变）
pub fn is_all_uppercase(text: &str) -> bool {
    text.to_uppercase() == text
}

/// 去除角色名后的扩展部分，如 `JOHN (V.O.)` -> `JOHN`
pub fn strip_character_extension(text: &str) -> String {
    BLOCK_REGEX["character_extension"]
        .replace(text, "")
        .trim()
        .to_string()
}

/// 去掉场景标题前缀，取 " - " 之前的地点部分
pub fn location_of_heading(heading: &str) -> String {
    let rest = BLOCK_REGEX["scene_prefix"].replace(heading, "");
    rest.split(" - ").next().unwrap_or("").trim().to_string()
}

/// 按行拆分文档，`\r\n` 视为一个换行符；末尾换行会产生最后一个空行
pub fn split_lines(document: &str) -> Vec<&str> {
    document
        .split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
