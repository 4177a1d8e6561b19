pub mod line_classifier;
pub mod script_parser;
pub mod scene_segmenter;
pub mod entity_extractor;
pub mod length_estimator;
pub mod format_automaton;

pub use line_classifier::LineClassifier;
pub use script_parser::{parse_script, ParseOutput, ScriptParser};
pub use scene_segmenter::SceneSegmenter;
pub use entity_extractor::EntityExtractor;
pub use length_estimator::{line_count, page_count, scene_length, word_count, LengthEstimator};
pub use format_automaton::{transition, FormatEvent, FormatState};
