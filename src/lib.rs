pub mod io;
pub mod models;
pub mod pipeline;
pub mod rules;
pub mod stages;
pub mod tagger;
pub mod translate;

pub use io::{RewriteReport, load_tables_file, read_input_text, write_tables_file};
pub use models::{PartOfSpeech, Replacement, RuleTables, TableError, TableFile, TaggedToken};
pub use pipeline::{
    PostprocessConfig, PostprocessError, PostprocessResult, Postprocessor, decode_input,
};
pub use rules::builtin_tables;
pub use stages::{
    ContractionNormalizer, LexicalConfig, PhraseReplacer, inject_starter, reassemble,
    substitute_words,
};
pub use tagger::{LexiconTagger, TagError, Tagger};
pub use translate::{HuggingFaceClient, TranslatorConfig};
