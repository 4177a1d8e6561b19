use serde::{Deserialize, Serialize};
use crate::models::line_type::LineType;

/// 分类后的物理行
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifiedLine {
    /// 原始行文本（未修剪）
    pub text: String,
    /// 行类型
    #[serde(rename = "type")]
    pub line_type: LineType,
}

impl ClassifiedLine {
    pub fn new(text: impl Into<String>, line_type: LineType) -> Self {
        ClassifiedLine {
            text: text.into(),
            line_type,
        }
    }

    // 检查行类型是否匹配
    pub fn is_type(&self, types: &[LineType]) -> bool {
        types.contains(&self.line_type)
    }
}
