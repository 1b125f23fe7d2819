pub mod language;
pub mod preprocess;

pub use language::{Language, LanguageError, LanguagePair, LANGUAGES};
pub use preprocess::{DefaultPreprocessor, Preprocessor, slugify};
