//! 对外 API
//!
//! 编辑器外壳通过这些函数拿到解析与导出结果。

use std::fs;
use std::str::FromStr;
use tracing::{error, info};
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::export::{export_fountain, export_markdown, generate_html, safe_file_stem};
use crate::models::{Conf, TitlePage};
use crate::parser::{SceneSegmenter, ScriptParser};

/// 导出格式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Markdown,
    Fountain,
    Html,
    Json,
    Outline,
}

impl ExportFormat {
    /// 文件扩展名
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Markdown => "md",
            ExportFormat::Fountain => "fountain",
            ExportFormat::Html => "html",
            ExportFormat::Json | ExportFormat::Outline => "json",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = ScreenplayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "markdown" | "md" => Ok(ExportFormat::Markdown),
            "fountain" => Ok(ExportFormat::Fountain),
            "html" => Ok(ExportFormat::Html),
            "json" => Ok(ExportFormat::Json),
            "outline" => Ok(ExportFormat::Outline),
            other => Err(ScreenplayError::UnknownFormat(other.to_string())),
        }
    }
}

/// 导出结果
#[derive(Debug, Clone)]
pub struct ExportResult {
    pub success: bool,
    pub message: String,
    pub file_path: Option<String>,
}

/// 解析剧本文本，返回 JSON
pub fn parse_script_json(text: &str, config: &Conf) -> ScreenplayResult<String> {
    let output = ScriptParser::new().analyze(text, config);
    Ok(serde_json::to_string(&output)?)
}

/// 按格式导出为字符串
pub fn export_script(
    text: &str,
    format: ExportFormat,
    config: &Conf,
    title_page: Option<&TitlePage>,
) -> ScreenplayResult<String> {
    let parser = ScriptParser::new();
    // Markdown 标题始终使用剧本标题；print_title_page 只控制标题页块
    let exported = match format {
        ExportFormat::Markdown => export_markdown(&parser.parse(text), title_page, config),
        ExportFormat::Fountain => export_fountain(&parser.parse(text), title_page, config),
        ExportFormat::Html => generate_html(
            &parser.parse(text),
            title_page.filter(|_| config.print_title_page),
        ),
        ExportFormat::Json => serde_json::to_string_pretty(&parser.analyze(text, config))?,
        ExportFormat::Outline => {
            serde_json::to_string_pretty(&SceneSegmenter::outline(text, config))?
        }
    };
    Ok(exported)
}

/// 默认导出文件名，如 `my_script.md`
pub fn default_file_name(title_page: Option<&TitlePage>, format: ExportFormat) -> String {
    let title = title_page.map(|t| t.title.as_str()).unwrap_or("");
    format!("{}.{}", safe_file_stem(title), format.extension())
}

/// 导出到文件
pub fn export_to_file(
    text: &str,
    output_path: &str,
    format: ExportFormat,
    config: &Conf,
    title_page: Option<&TitlePage>,
) -> ExportResult {
    let written = export_script(text, format, config, title_page)
        .and_then(|content| fs::write(output_path, content).map_err(ScreenplayError::from));

    match written {
        Ok(()) => {
            info!(path = output_path, ?format, "exported screenplay");
            ExportResult {
                success: true,
                message: "导出成功".to_string(),
                file_path: Some(output_path.to_string()),
            }
        }
        Err(e) => {
            error!(path = output_path, error = %e, "export failed");
            ExportResult {
                success: false,
                message: format!("导出失败: {}", e),
                file_path: None,
            }
        }
    }
}
