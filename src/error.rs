use thiserror::Error;
use crate::models::LineType;

#[derive(Error, Debug)]
pub enum ScreenplayError {
    #[error("IO错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("配置无效: {0}")]
    InvalidConfig(String),

    #[error("场景索引越界: {index} (共 {len} 个)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("{0} 不能作为输入格式")]
    NotSelectable(LineType),

    #[error("未知导出格式: {0}")]
    UnknownFormat(String),
}

pub type ScreenplayResult<T> = Result<T, ScreenplayError>;
