//! `rotbench` binary: configure a run, fail fast on a missing credential,
//! grow the corpus, drive the runner, print the report.

use anyhow::Result;
use clap::Parser;
use rotbench_core::config::EvalConfig;
use rotbench_core::corpus::Corpus;
use rotbench_core::engine::runner::Runner;
use rotbench_core::providers::anthropic::AnthropicOracle;
use rotbench_core::providers::Oracle;
use rotbench_core::report::console::print_report;
use rotbench_core::report::progress::{OutcomeEvent, OutcomeSink};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "rotbench", version, about = "Caesar-cipher decode evaluation harness")]
struct Cli {
    /// YAML config file; flags below override its values.
    #[arg(long, env = "ROTBENCH_CONFIG")]
    config: Option<PathBuf>,

    /// Model identifier for both oracle capabilities.
    #[arg(long, env = "ROTBENCH_MODEL")]
    model: Option<String>,

    /// Corpus file, one phrase per line.
    #[arg(long)]
    corpus: Option<PathBuf>,

    /// Minimum corpus size; the deficit is generated at startup.
    #[arg(long)]
    min_corpus: Option<usize>,

    /// Approximate character length for generated phrases.
    #[arg(long)]
    phrase_len: Option<usize>,

    /// Lowest shift strength to test.
    #[arg(long)]
    min_strength: Option<i32>,

    /// Highest shift strength to test.
    #[arg(long)]
    max_strength: Option<i32>,

    /// Phrases sampled per strength.
    #[arg(long)]
    samples: Option<usize>,

    /// Cap on concurrent in-flight oracle calls.
    #[arg(long)]
    parallel: Option<usize>,

    /// Sampling seed for reproducible runs.
    #[arg(long)]
    seed: Option<u64>,
}

impl Cli {
    fn into_config(self) -> Result<EvalConfig> {
        let mut cfg = match &self.config {
            Some(path) => EvalConfig::load(path)?,
            None => EvalConfig::default(),
        };
        if let Some(v) = self.model {
            cfg.model = v;
        }
        if let Some(v) = self.corpus {
            cfg.corpus_path = v;
        }
        if let Some(v) = self.min_corpus {
            cfg.min_corpus = v;
        }
        if let Some(v) = self.phrase_len {
            cfg.phrase_len = v;
        }
        if let Some(v) = self.min_strength {
            cfg.min_strength = v;
        }
        if let Some(v) = self.max_strength {
            cfg.max_strength = v;
        }
        if let Some(v) = self.samples {
            cfg.samples_per_strength = v;
        }
        if let Some(v) = self.parallel {
            cfg.parallel = v;
        }
        if let Some(v) = self.seed {
            cfg.seed = Some(v);
        }
        Ok(cfg)
    }
}

fn progress_sink(total_per_strength: usize) -> OutcomeSink {
    let done = AtomicUsize::new(0);
    Arc::new(move |ev: OutcomeEvent| {
        let n = done.fetch_add(1, Ordering::SeqCst) + 1;
        let within = (n - 1) % total_per_strength.max(1) + 1;
        eprintln!(
            "  strength {}: {}/{} {}",
            ev.strength,
            within,
            total_per_strength,
            if ev.call_failed { "(call failed)" } else { "" }
        );
    })
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cfg = Cli::parse().into_config()?;
    tracing::info!(
        model = %cfg.model,
        strengths = ?cfg.strengths(),
        samples = cfg.samples_per_strength,
        parallel = cfg.parallel,
        "starting evaluation"
    );

    // Credential check comes before any corpus or network activity.
    let oracle: Arc<dyn Oracle> = Arc::new(AnthropicOracle::from_env(&cfg)?);

    let corpus = Corpus::ensure(
        &cfg.corpus_path,
        oracle.clone(),
        cfg.min_corpus,
        cfg.phrase_len,
    )
    .await?;

    let sink = progress_sink(cfg.samples_per_strength);
    let runner = Runner {
        oracle,
        corpus,
        cfg,
        sink: Some(sink),
    };

    let report = runner.run().await?;
    print_report(&report);
    Ok(())
}
