use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use crate::models::{RuleTables, TableFile};
use crate::pipeline::{PostprocessResult, StageTexts};

/// Machine-readable record of one rewrite
#[derive(Debug, Clone, Serialize)]
pub struct RewriteReport {
    pub input: String,
    pub output: String,
    pub stages: StageTexts,
    pub counts: RewriteCounts,
    pub starter: Option<String>,
    /// Seed used for candidate selection, when one was given
    pub seed: Option<u64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RewriteCounts {
    pub contractions_expanded: usize,
    pub phrases_replaced: usize,
    pub words_substituted: usize,
}

impl RewriteReport {
    pub fn from_result(input: &str, result: &PostprocessResult, seed: Option<u64>) -> Self {
        Self {
            input: input.to_string(),
            output: result.text.clone(),
            stages: result.stages.clone(),
            counts: RewriteCounts {
                contractions_expanded: result.contractions_expanded,
                phrases_replaced: result.phrases_replaced,
                words_substituted: result.words_substituted,
            },
            starter: result.starter.clone(),
            seed,
        }
    }

    /// Write to a JSON file
    pub fn write_json(&self, path: &Path) -> Result<()> {
        write_pretty_json(path, self)
    }

    /// Format the stage-by-stage trace as text
    pub fn format_stages(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("input:         {}\n", self.input));
        output.push_str(&format!("stripped:      {}\n", self.stages.stripped));
        output.push_str(&format!(
            "contractions:  {} ({} expanded)\n",
            self.stages.normalized, self.counts.contractions_expanded
        ));
        output.push_str(&format!(
            "phrases:       {} ({} replaced)\n",
            self.stages.phrased, self.counts.phrases_replaced
        ));
        output.push_str(&format!(
            "words:         {} ({} substituted)\n",
            self.stages.substituted.join(" | "),
            self.counts.words_substituted
        ));
        output.push_str(&format!("reassembled:   {}\n", self.stages.reassembled));
        output.push_str(&format!(
            "starter:       {}\n",
            self.starter.as_deref().unwrap_or("-")
        ));
        output
    }
}

/// Export rule tables in the file format accepted by `--tables`
pub fn write_tables_file(path: &Path, tables: &RuleTables) -> Result<()> {
    write_pretty_json(path, &TableFile::from_tables(tables))
}

fn write_pretty_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, value).context("Failed to write JSON")?;
    Ok(())
}
