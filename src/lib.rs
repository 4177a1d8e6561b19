pub mod error;
pub mod models;
pub mod utils;
pub mod parser;
pub mod export;
pub mod api;

pub use error::{ScreenplayError, ScreenplayResult};

pub use models::{
    LineType,
    ClassifiedLine,
    Scene,
    OutlineCard,
    ScriptProperties,
    TitlePage,
    Conf,
    FORMAT_CYCLE
};

pub use parser::{
    LineClassifier,
    ScriptParser,
    ParseOutput,
    SceneSegmenter,
    EntityExtractor,
    LengthEstimator,
    FormatState,
    FormatEvent,
    parse_script,
    page_count,
    scene_length,
    transition
};

pub use export::{
    Liner,
    PrintLine,
    export_markdown,
    export_fountain,
    generate_html
};

pub use api::{
    ExportFormat,
    ExportResult,
    parse_script_json,
    export_script,
    export_to_file
};

/// 解析剧本文本
///
/// # Arguments
///
/// * `script` - 剧本纯文本
/// * `config` - 配置对象
///
/// # Returns
///
/// 分类行、场景、文档级实体与页数等结构信息
pub fn parse(script: &str, config: &Conf) -> ParseOutput {
    ScriptParser::new().analyze(script, config)
}
