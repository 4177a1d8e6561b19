use tracing::debug;
use crate::error::{ScreenplayError, ScreenplayResult};
use crate::models::{Conf, OutlineCard, Scene};
use crate::parser::entity_extractor::EntityExtractor;
use crate::parser::length_estimator::LengthEstimator;
use crate::utils::screenplay_constants::EMPTY_SCENE_SUMMARY;
use crate::utils::{is_scene_heading, split_lines};

/// 场景切分与重排
pub struct SceneSegmenter;

impl SceneSegmenter {
    /// 按场景标题切分文档
    ///
    /// 第一个场景标题之前的文本被丢弃。
    pub fn segment(document: &str) -> Vec<Scene> {
        let mut scenes = Vec::new();
        let mut current: Option<(&str, Vec<&str>)> = None;

        for line in split_lines(document) {
            let trimmed = line.trim();
            if is_scene_heading(trimmed) {
                if let Some((heading, body)) = current.take() {
                    scenes.push(Self::build_scene(heading, &body));
                }
                current = Some((trimmed, Vec::new()));
            } else if let Some((_, body)) = current.as_mut() {
                body.push(line);
            }
        }
        if let Some((heading, body)) = current {
            scenes.push(Self::build_scene(heading, &body));
        }

        scenes
    }

    fn build_scene(heading: &str, body: &[&str]) -> Scene {
        let content = body.join("\n").trim().to_string();
        let characters = EntityExtractor::characters(&content);
        Scene::new(heading.to_string(), content, characters)
    }

    /// 在每个场景标题行的行首切开文档，文本不做任何修改
    ///
    /// 标题之前若有文本，它是第一个块。空文档没有块。
    pub fn split_into_chunks(document: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        let mut chunk_start = 0;
        let mut offset = 0;

        for piece in document.split_inclusive('\n') {
            if offset > chunk_start && is_scene_heading(piece) {
                chunks.push(document[chunk_start..offset].to_string());
                chunk_start = offset;
            }
            offset += piece.len();
        }
        if chunk_start < document.len() {
            chunks.push(document[chunk_start..].to_string());
        }

        chunks
    }

    /// 数组移动：取出 `old_index` 处的块，插入到 `new_index`
    pub fn move_chunk(mut chunks: Vec<String>, old_index: usize, new_index: usize) -> ScreenplayResult<Vec<String>> {
        let len = chunks.len();
        for index in [old_index, new_index] {
            if index >= len {
                return Err(ScreenplayError::IndexOutOfRange { index, len });
            }
        }
        let chunk = chunks.remove(old_index);
        chunks.insert(new_index, chunk);
        Ok(chunks)
    }

    /// 拼接块；不以换行结尾的块后面若还有块，补一个换行
    pub fn join_chunks(chunks: &[String]) -> String {
        let mut document = String::new();
        for (i, chunk) in chunks.iter().enumerate() {
            document.push_str(chunk);
            if i + 1 < chunks.len() && !chunk.ends_with('\n') {
                document.push('\n');
            }
        }
        document
    }

    /// 按场景序号重排，标题前的文本保持在开头
    pub fn reorder_scenes(document: &str, old_index: usize, new_index: usize) -> ScreenplayResult<String> {
        let mut chunks = Self::split_into_chunks(document);
        let preamble = match chunks.first() {
            Some(first) if !is_scene_heading(first) => Some(chunks.remove(0)),
            _ => None,
        };

        let chunks = Self::move_chunk(chunks, old_index, new_index)?;
        debug!(old_index, new_index, scenes = chunks.len(), "reordered scenes");

        let mut all = Vec::with_capacity(chunks.len() + 1);
        all.extend(preamble);
        all.extend(chunks);
        Ok(Self::join_chunks(&all))
    }

    /// 大纲卡片
    pub fn outline(document: &str, config: &Conf) -> Vec<OutlineCard> {
        let estimator = LengthEstimator::from_conf(config);
        Self::segment(document)
            .into_iter()
            .enumerate()
            .map(|(index, scene)| OutlineCard {
                index,
                summary: summarize(&scene.content, config.outline_summary_lines),
                length: estimator.scene_length(&scene.content),
                heading: scene.heading,
                characters: scene.characters,
            })
            .collect()
    }
}

// 取前几行非空文本作为摘要
fn summarize(content: &str, max_lines: usize) -> String {
    let summary = content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .take(max_lines)
        .collect::<Vec<_>>()
        .join("\n");
    if summary.is_empty() {
        EMPTY_SCENE_SUMMARY.to_string()
    } else {
        summary
    }
}
