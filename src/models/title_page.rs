use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 标题页内容
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitlePage {
    pub title: String,
    pub author: String,
    /// 联系方式，可多行
    pub contact: String,
    #[serde(default)]
    pub draft_date: Option<NaiveDate>,
}

impl TitlePage {
    pub fn new(title: impl Into<String>) -> Self {
        TitlePage {
            title: title.into(),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.trim().is_empty()
            && self.author.trim().is_empty()
            && self.contact.trim().is_empty()
            && self.draft_date.is_none()
    }

    /// 草稿日期，格式 YYYY-MM-DD
    pub fn draft_date_label(&self) -> Option<String> {
        self.draft_date.map(|d| d.format("%Y-%m-%d").to_string())
    }
}
