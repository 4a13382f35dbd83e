use rand::Rng;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::models::{RuleTables, TableError};
use crate::rules::builtin_tables;
use crate::stages::{
    ContractionNormalizer, LexicalConfig, PhraseReplacer, inject_starter, reassemble,
    substitute_words,
};
use crate::tagger::{TagError, Tagger};

/// Errors surfaced by the post-processing pipeline
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PostprocessError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error(transparent)]
    Tagger(#[from] TagError),
}

/// Interpret raw input as text, failing fast when it is not UTF-8
pub fn decode_input(input: &[u8]) -> Result<&str, PostprocessError> {
    std::str::from_utf8(input)
        .map_err(|e| PostprocessError::InvalidArgument(format!("input is not UTF-8 text: {}", e)))
}

/// Configuration for a single post-processing run
#[derive(Debug, Clone)]
pub struct PostprocessConfig {
    /// Prefix to remove (with surrounding whitespace) when the text starts with it
    pub strip_prefix: Option<String>,
    /// Whether to prepend an archaic interjection
    pub add_starter: bool,
    /// Word substitution settings
    pub lexical: LexicalConfig,
}

impl Default for PostprocessConfig {
    fn default() -> Self {
        Self {
            strip_prefix: None,
            add_starter: true,
            lexical: LexicalConfig::default(),
        }
    }
}

/// Text as it stood after each stage
#[derive(Debug, Clone, Serialize)]
pub struct StageTexts {
    pub stripped: String,
    pub normalized: String,
    pub phrased: String,
    pub substituted: Vec<String>,
    pub reassembled: String,
}

/// Full outcome of a post-processing run
#[derive(Debug, Clone, Serialize)]
pub struct PostprocessResult {
    /// Final rewritten text
    pub text: String,
    /// Intermediate texts
    pub stages: StageTexts,
    pub contractions_expanded: usize,
    pub phrases_replaced: usize,
    pub words_substituted: usize,
    /// Interjection prepended by the starter stage, if any
    pub starter: Option<String>,
}

/// Rewrites English into pseudo-archaic English.
///
/// Stages run strictly in order: prefix strip, contraction expansion, phrase
/// replacement, tagging and word substitution, reassembly, starter injection.
/// Tables are read-only once built, so one instance can serve many threads as
/// long as each call brings its own random source.
pub struct Postprocessor<T> {
    tables: RuleTables,
    contractions: ContractionNormalizer,
    phrases: PhraseReplacer,
    tagger: T,
}

impl<T: Tagger> Postprocessor<T> {
    pub fn new(tables: RuleTables, tagger: T) -> Result<Self, TableError> {
        let contractions = ContractionNormalizer::new(&tables.contractions)?;
        let phrases = PhraseReplacer::new(&tables.phrases)?;
        Ok(Self {
            tables,
            contractions,
            phrases,
            tagger,
        })
    }

    /// Build with the embedded rule tables
    pub fn with_builtin_tables(tagger: T) -> Result<Self, TableError> {
        Self::new(builtin_tables()?, tagger)
    }

    /// Rewrite `text`, returning only the final string
    pub fn postprocess<R: Rng + ?Sized>(
        &self,
        text: &str,
        config: &PostprocessConfig,
        rng: &mut R,
    ) -> Result<String, PostprocessError> {
        self.run(text, config, rng).map(|result| result.text)
    }

    /// Rewrite raw bytes, rejecting anything that is not UTF-8 text
    pub fn postprocess_bytes<R: Rng + ?Sized>(
        &self,
        input: &[u8],
        config: &PostprocessConfig,
        rng: &mut R,
    ) -> Result<String, PostprocessError> {
        self.postprocess(decode_input(input)?, config, rng)
    }

    /// Rewrite `text`, keeping every intermediate stage and the counts
    pub fn run<R: Rng + ?Sized>(
        &self,
        text: &str,
        config: &PostprocessConfig,
        rng: &mut R,
    ) -> Result<PostprocessResult, PostprocessError> {
        let stripped = match config.strip_prefix.as_deref() {
            Some("") => {
                return Err(PostprocessError::InvalidArgument(
                    "strip prefix must not be empty".to_string(),
                ));
            }
            Some(prefix) => match text.strip_prefix(prefix) {
                Some(rest) => rest.trim().to_string(),
                None => text.to_string(),
            },
            None => text.to_string(),
        };

        let normalized = self.contractions.normalize(&stripped);
        let phrased = self.phrases.replace(&normalized.text, rng);

        // A tagger failure aborts the run; no degraded tagging is substituted
        let tokens = self.tagger.tag(&phrased.text)?;
        let lexical = substitute_words(&tokens, &self.tables.lexicon, &config.lexical, rng);

        let reassembled = reassemble(lexical.words.as_slice());
        let started = inject_starter(&reassembled, config.add_starter, &self.tables.starters);

        debug!(
            "Postprocessed: {} contractions, {} phrases, {} words, starter={:?}",
            normalized.expanded, phrased.replaced, lexical.substituted, started.starter
        );

        Ok(PostprocessResult {
            text: started.text,
            contractions_expanded: normalized.expanded,
            phrases_replaced: phrased.replaced,
            words_substituted: lexical.substituted,
            starter: started.starter,
            stages: StageTexts {
                stripped,
                normalized: normalized.text,
                phrased: phrased.text,
                substituted: lexical.words,
                reassembled,
            },
        })
    }
}
