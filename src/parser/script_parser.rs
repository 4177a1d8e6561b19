use std::time::Instant;
use serde::Serialize;
use tracing::debug;
use crate::export::html::generate_html;
use crate::models::{ClassifiedLine, Conf, LineType, Scene, ScriptProperties};
use crate::parser::entity_extractor::EntityExtractor;
use crate::parser::length_estimator::{word_count, LengthEstimator};
use crate::parser::line_classifier::LineClassifier;
use crate::parser::scene_segmenter::SceneSegmenter;
use crate::utils::split_lines;

/// 完整解析结果
#[derive(Debug, Clone, Serialize)]
pub struct ParseOutput {
    /// 与原文逐行对应的分类结果
    pub lines: Vec<ClassifiedLine>,
    pub scenes: Vec<Scene>,
    pub properties: ScriptProperties,
    /// 解析耗时(毫秒)
    pub parse_time: u64,
    pub script_html: Option<String>,
}

/// 剧本解析器
///
/// 无内部状态，可对不断变化的文本反复调用。
#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptParser;

impl ScriptParser {
    pub fn new() -> Self {
        ScriptParser
    }

    /// 逐行分类整个文档
    ///
    /// 单次正向扫描，把上一行确定的类型传给下一行的判断。
    /// 每个换行符都会产生一行，末尾换行得到最后一个空行。
    pub fn parse(&self, document: &str) -> Vec<ClassifiedLine> {
        let lines = split_lines(document);
        let mut parsed: Vec<ClassifiedLine> = Vec::with_capacity(lines.len());
        let mut previous: Option<LineType> = None;

        for (i, text) in lines.iter().enumerate() {
            let line_type = LineClassifier::classify(&lines, i, previous);
            previous = Some(line_type);
            parsed.push(ClassifiedLine::new(*text, line_type));
        }

        parsed
    }

    /// 解析并推导全部结构信息
    pub fn analyze(&self, document: &str, config: &Conf) -> ParseOutput {
        let start = Instant::now();

        let lines = self.parse(document);
        let scenes = SceneSegmenter::segment(document);
        let estimator = LengthEstimator::from_conf(config);
        let page_count = estimator.page_count(document);

        let properties = ScriptProperties {
            scenes: EntityExtractor::scenes(document),
            characters: EntityExtractor::characters(document),
            locations: EntityExtractor::locations(document),
            page_count,
            word_count: word_count(document),
            screen_time_minutes: LengthEstimator::screen_time_minutes(page_count),
        };

        let script_html = if config.generate_html {
            Some(generate_html(&lines, None))
        } else {
            None
        };

        let parse_time = start.elapsed().as_millis() as u64;
        debug!(
            lines = lines.len(),
            scenes = scenes.len(),
            characters = properties.characters.len(),
            pages = page_count,
            parse_time,
            "parsed screenplay"
        );

        ParseOutput {
            lines,
            scenes,
            properties,
            parse_time,
            script_html,
        }
    }
}

/// 解析文档为分类行
pub fn parse_script(document: &str) -> Vec<ClassifiedLine> {
    ScriptParser::new().parse(document)
}
