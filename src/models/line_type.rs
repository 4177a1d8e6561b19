use std::fmt;
use serde::{Deserialize, Serialize};

/// 剧本元素类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineType {
    Scene,
    Action,
    Character,
    Dialogue,
    Parenthetical,
    Transition,
    Empty,
}

/// 可直接选择的输入格式，按 Tab 循环顺序排列（不含 Empty）
pub const FORMAT_CYCLE: [LineType; 6] = [
    LineType::Scene,
    LineType::Action,
    LineType::Character,
    LineType::Dialogue,
    LineType::Parenthetical,
    LineType::Transition,
];

impl LineType {
    /// 小写名称，与序列化结果一致
    pub fn as_str(&self) -> &'static str {
        match self {
            LineType::Scene => "scene",
            LineType::Action => "action",
            LineType::Character => "character",
            LineType::Dialogue => "dialogue",
            LineType::Parenthetical => "parenthetical",
            LineType::Transition => "transition",
            LineType::Empty => "empty",
        }
    }

    /// 打印样式类名
    pub fn css_class(&self) -> String {
        format!("print-{}", self.as_str())
    }

    /// 是否可作为输入格式被选择
    pub fn is_selectable(&self) -> bool {
        !matches!(self, LineType::Empty)
    }

    /// 在 FORMAT_CYCLE 中的位置
    pub fn cycle_index(&self) -> Option<usize> {
        FORMAT_CYCLE.iter().position(|t| t == self)
    }
}

impl fmt::Display for LineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
