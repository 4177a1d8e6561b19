pub mod line_type;
pub mod classified_line;
pub mod scene;
pub mod script_properties;
pub mod title_page;
pub mod conf;

pub use line_type::{LineType, FORMAT_CYCLE};
pub use classified_line::ClassifiedLine;
pub use scene::{Scene, OutlineCard};
pub use script_properties::ScriptProperties;
pub use title_page::TitlePage;
pub use conf::Conf;
