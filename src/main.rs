use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{Level, info, warn};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

use bardic::translate::{FRENCH_TO_ENGLISH_MODEL, SHAKESPEARE_MODEL, SHAKESPEARE_PREFIX};
use bardic::{
    HuggingFaceClient, LexiconTagger, PostprocessConfig, Postprocessor, RewriteReport, RuleTables,
    TranslatorConfig, builtin_tables, decode_input, load_tables_file, read_input_text,
    write_tables_file,
};

#[derive(Parser)]
#[command(name = "bardic")]
#[command(author, version, about = "Rewrite English into Shakespearean English", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite English text with the rule-based post-processor
    Rewrite {
        /// Text to rewrite (reads --input or stdin when omitted)
        text: Option<String>,

        /// Read the text from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Do not prepend an archaic interjection
        #[arg(long)]
        no_starter: bool,

        /// Remove this prefix when the text starts with it
        #[arg(long)]
        strip_prefix: Option<String>,

        /// Seed for choosing among replacement candidates
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file replacing some or all of the built-in tables
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Write a JSON report of every stage to this file
        #[arg(long)]
        report: Option<PathBuf>,

        /// Print the text after each stage
        #[arg(long)]
        show_stages: bool,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Translate French (or English) through hosted models, then rewrite
    Translate {
        /// Text to translate
        text: String,

        /// Input is already English; skip the French to English model
        #[arg(long)]
        from_english: bool,

        /// Model producing Shakespearean English
        #[arg(long, default_value = SHAKESPEARE_MODEL)]
        model: String,

        /// Do not prepend an archaic interjection
        #[arg(long)]
        no_starter: bool,

        /// Seed for choosing among replacement candidates
        #[arg(long)]
        seed: Option<u64>,

        /// JSON file replacing some or all of the built-in tables
        #[arg(long)]
        tables: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Export the built-in rule tables as JSON
    Tables {
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Rewrite {
            text,
            input,
            no_starter,
            strip_prefix,
            seed,
            tables,
            report,
            show_stages,
            verbose,
        } => {
            setup_logging(verbose);
            let config = PostprocessConfig {
                strip_prefix,
                add_starter: !no_starter,
                ..Default::default()
            };
            rewrite(
                text.as_deref(),
                input.as_deref(),
                &config,
                seed,
                tables.as_deref(),
                report.as_deref(),
                show_stages,
            )
        }
        Commands::Translate {
            text,
            from_english,
            model,
            no_starter,
            seed,
            tables,
            verbose,
        } => {
            setup_logging(verbose);
            translate(&text, from_english, &model, !no_starter, seed, tables.as_deref()).await
        }
        Commands::Tables { output } => {
            setup_logging(false);
            let tables = builtin_tables()?;
            write_tables_file(&output, &tables)?;
            info!("Built-in tables written to {:?}", output);
            Ok(())
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase()));
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn load_tables(path: Option<&Path>) -> Result<RuleTables> {
    let builtin = builtin_tables().context("Built-in tables are invalid")?;
    match path {
        Some(path) => {
            info!("Loading rule tables from {:?}", path);
            load_tables_file(path, &builtin)
        }
        None => Ok(builtin),
    }
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn rewrite(
    text: Option<&str>,
    input: Option<&Path>,
    config: &PostprocessConfig,
    seed: Option<u64>,
    tables: Option<&Path>,
    report: Option<&Path>,
    show_stages: bool,
) -> Result<()> {
    let processor = Postprocessor::new(load_tables(tables)?, LexiconTagger::new())?;
    let mut rng = make_rng(seed);

    let raw = read_input_text(text, input)?;
    let source = decode_input(&raw)?;
    if source.trim().is_empty() {
        warn!("Input is empty; nothing to rewrite");
        return Ok(());
    }

    let result = processor.run(source, config, &mut rng)?;
    info!(
        "Rewrote {} contractions, {} phrases, {} words",
        result.contractions_expanded, result.phrases_replaced, result.words_substituted
    );

    let record = RewriteReport::from_result(source, &result, seed);
    if show_stages {
        eprint!("{}", record.format_stages());
    }
    if let Some(path) = report {
        record.write_json(path)?;
        info!("Report written to {:?}", path);
    }

    println!("{}", result.text);
    Ok(())
}

async fn translate(
    text: &str,
    from_english: bool,
    model: &str,
    add_starter: bool,
    seed: Option<u64>,
    tables: Option<&Path>,
) -> Result<()> {
    if text.trim().is_empty() {
        warn!("Please enter some text to translate");
        return Ok(());
    }

    let processor = Postprocessor::new(load_tables(tables)?, LexiconTagger::new())?;
    let client = HuggingFaceClient::new(TranslatorConfig::from_env()?);

    let english = if from_english {
        text.to_string()
    } else {
        info!("Translating French to English with {}", FRENCH_TO_ENGLISH_MODEL);
        client.translate(text, FRENCH_TO_ENGLISH_MODEL, None).await?
    };
    info!("English: {}", english);

    info!("Translating to Shakespearean English with {}", model);
    let generated = client
        .translate(&english, model, Some(SHAKESPEARE_PREFIX))
        .await?;

    let config = PostprocessConfig {
        strip_prefix: Some(SHAKESPEARE_PREFIX.to_string()),
        add_starter,
        ..Default::default()
    };
    let result = processor.run(&generated, &config, &mut make_rng(seed))?;

    println!("{}", result.text);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rewrite_skips_blank_input() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.json");
        let config = PostprocessConfig::default();

        rewrite(
            Some("   \n"),
            None,
            &config,
            Some(1),
            None,
            Some(report.as_path()),
            false,
        )
        .unwrap();
        assert!(!report.exists());
    }

    #[test]
    fn test_rewrite_writes_report() {
        let dir = tempfile::tempdir().unwrap();
        let report = dir.path().join("report.json");
        let config = PostprocessConfig::default();

        rewrite(
            Some("hello"),
            None,
            &config,
            Some(1),
            None,
            Some(report.as_path()),
            false,
        )
        .unwrap();
        assert!(report.exists());
    }
}
