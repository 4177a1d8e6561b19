use serde::{Deserialize, Serialize};

/// 场景：从场景标题（含）到下一个场景标题（不含）或文末
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scene {
    /// 场景标题（已修剪）
    pub heading: String,
    /// 标题之后的正文，整体去除首尾空白
    pub content: String,
    /// 仅由 content 推导出的角色，按首次出现排序
    pub characters: Vec<String>,
}

impl Scene {
    pub fn new(heading: String, content: String, characters: Vec<String>) -> Self {
        Scene {
            heading,
            content,
            characters,
        }
    }
}

/// 大纲视图中的场景卡片
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutlineCard {
    /// 从 0 开始的场景序号
    pub index: usize,
    pub heading: String,
    /// 正文前几行非空文本
    pub summary: String,
    pub characters: Vec<String>,
    /// 八分之一页长度标签，空字符串表示不显示
    pub length: String,
}
