pub mod document;
pub mod format;
pub mod json_parser;
pub mod loader;
pub mod yaml_parser;

pub use document::Node;
pub use format::DocumentFormat;
pub use json_parser::JsonParser;
pub use loader::{load_document, load_translations};
pub use yaml_parser::YamlParser;
