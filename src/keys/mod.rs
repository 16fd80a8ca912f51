pub mod comparison;
pub mod key_extractor;

pub use comparison::Comparison;
pub use key_extractor::{extract_key_paths, KeyExtractor, KeyMode, KeySet, KEY_SEPARATOR};
