use serde::{Deserialize, Serialize};

/// 整个文档推导出的结构信息（侧边栏和页脚使用）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptProperties {
    pub scenes: Vec<String>,
    pub characters: Vec<String>,
    pub locations: Vec<String>,
    pub page_count: usize,
    pub word_count: usize,
    /// 一页约等于一分钟
    pub screen_time_minutes: usize,
}
