use std::fs;
use std::path::Path;
use serde::{Deserialize, Serialize};
use tracing::warn;
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::utils::screenplay_constants::LINES_PER_PAGE;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Conf {
    /// 每页行数，行业惯例为 55
    pub lines_per_page: usize,
    /// 导出与打印时合并连续空行
    pub merge_empty_lines: bool,
    /// 未命名剧本的标题
    pub untitled_name: String,
    /// 大纲卡片摘要的行数
    pub outline_summary_lines: usize,
    /// 是否输出标题页
    pub print_title_page: bool,
    /// 解析时是否同时生成打印 HTML
    pub generate_html: bool,
}

impl Default for Conf {
    fn default() -> Self {
        Conf {
            lines_per_page: LINES_PER_PAGE,
            merge_empty_lines: true,
            untitled_name: "Untitled Screenplay".to_string(),
            outline_summary_lines: 3,
            print_title_page: true,
            generate_html: false,
        }
    }
}

impl Conf {
    /// 从 JSON 文件读取配置，缺省字段使用默认值
    pub fn from_file(path: impl AsRef<Path>) -> ScreenplayResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> ScreenplayResult<Self> {
        let conf: Conf = serde_json::from_str(text)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn validate(&self) -> ScreenplayResult<()> {
        if self.lines_per_page == 0 {
            warn!("rejected configuration with lines_per_page = 0");
            return Err(ScreenplayError::InvalidConfig(
                "lines_per_page must be greater than 0".to_string(),
            ));
        }
        Ok(())
    }
}
