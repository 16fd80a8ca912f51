pub mod languages;
pub mod settings;

pub use languages::{default_languages, default_reference, Language, DEFAULT_LANGUAGES};
pub use settings::{CheckConfig, DEFAULT_TRANSLATIONS_DIR};
