//! Embedscope CLI
//!
//! # Usage
//!
//! ```bash
//! # Structural facts for the reference corpus
//! cargo run --bin embedscope -- analyze
//!
//! # Token stream of one snippet
//! cargo run --bin embedscope -- tokens --snippet 2
//!
//! # Full comparison with offline hashing backends, SVG plot + JSON report
//! cargo run --bin embedscope --release -- compare --dims 384,768 --output plot.svg --format json
//!
//! # Pretrained models (downloads on first use)
//! cargo run --bin embedscope --release --features fastembed -- compare --fastembed
//! ```

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use codegraph_embedscope::config::{PipelineConfig, Preset, ValidatedConfig};
use codegraph_embedscope::{
    tokenize, ComparisonPipeline, Corpus, EmbeddingBackend, HashingBackend, PipelineReport,
    PythonAnalyzer, StructuralAnalyzer, SvgScatterSink,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[derive(Parser)]
#[command(name = "embedscope")]
#[command(about = "Compare how embedding models represent code snippets", long_about = None)]
struct Cli {
    /// Log filter (trace, debug, info, warn, error); defaults to RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print structural facts per snippet
    Analyze {
        /// Also record `from m import a` statements
        #[arg(long)]
        from_imports: bool,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print token streams
    Tokens {
        /// Only this snippet (1-based)
        #[arg(short, long)]
        snippet: Option<usize>,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Embed, project and plot the corpus with every backend
    Compare {
        /// YAML v1 configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Preset used when no config file is given
        #[arg(long, default_value = "balanced")]
        preset: String,

        /// SVG output path
        #[arg(short, long, default_value = "embeddings_pca.svg")]
        output: PathBuf,

        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,

        /// Hashing backend dimensions, one backend per value
        #[arg(long, value_delimiter = ',', default_value = "384,768,512")]
        dims: Vec<usize>,

        /// Use pretrained fastembed models instead of hashing backends
        #[arg(long)]
        fastembed: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logger(cli.log_level.as_deref())?;

    let corpus = Corpus::reference();

    match cli.command {
        Commands::Analyze {
            from_imports,
            format,
        } => run_analyze(&corpus, from_imports, format),
        Commands::Tokens { snippet, format } => run_tokens(&corpus, snippet, format),
        Commands::Compare {
            config,
            preset,
            output,
            format,
            dims,
            fastembed,
        } => {
            let config = load_config(config, &preset)?;
            let backends = build_backends(&dims, fastembed)?;
            run_compare(&corpus, config, &backends, output, format)
        }
    }
}

/// Log to stderr so JSON on stdout stays parseable
fn init_logger(log_level: Option<&str>) -> Result<()> {
    let env_filter = match log_level {
        Some(level) => EnvFilter::try_new(level)?,
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("info,codegraph_embedscope=debug")),
    };

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true)
        .compact();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
    Ok(())
}

fn run_analyze(corpus: &Corpus, from_imports: bool, format: OutputFormat) -> Result<()> {
    let analyzer = PythonAnalyzer::new().with_from_imports(from_imports);

    for snippet in corpus {
        let result = analyzer.analyze(snippet);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
            OutputFormat::Text => match result {
                Ok(facts) => println!(
                    "[{}] {}: functions={:?} classes={:?} imports={:?} patterns={:?}",
                    snippet.index,
                    snippet.label,
                    facts.functions,
                    facts.classes,
                    facts.imports,
                    facts.pattern_names()
                ),
                Err(e) => println!("[{}] {}: {}", snippet.index, snippet.label, e),
            },
        }
    }
    Ok(())
}

fn run_tokens(corpus: &Corpus, only: Option<usize>, format: OutputFormat) -> Result<()> {
    let selected: Vec<_> = match only {
        Some(index) => vec![corpus
            .get(index)
            .with_context(|| format!("no snippet {index} (corpus has {})", corpus.len()))?],
        None => corpus.iter().collect(),
    };

    for snippet in selected {
        let result = tokenize(snippet);
        match format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&result)?),
            OutputFormat::Text => {
                println!("[{}] {}", snippet.index, snippet.label);
                match result {
                    Ok(stream) => {
                        for token in stream.iter() {
                            println!(
                                "  {:>3}:{:<3} {:<10} {:?}",
                                token.span.start_line,
                                token.span.start_col,
                                token.kind.as_str(),
                                token.text
                            );
                        }
                    }
                    Err(e) => println!("  {}", e),
                }
            }
        }
    }
    Ok(())
}

fn load_config(path: Option<PathBuf>, preset: &str) -> Result<ValidatedConfig> {
    match path {
        Some(path) => PipelineConfig::from_yaml(&path)
            .with_context(|| format!("loading {}", path.display())),
        None => {
            let preset: Preset = preset.parse()?;
            Ok(PipelineConfig::preset(preset).build()?)
        }
    }
}

fn build_backends(dims: &[usize], fastembed: bool) -> Result<Vec<Arc<dyn EmbeddingBackend>>> {
    if fastembed {
        return fastembed_backends();
    }

    if dims.is_empty() {
        bail!("at least one backend dimension is required");
    }

    Ok(dims
        .iter()
        .enumerate()
        .map(|(i, &dim)| {
            Arc::new(HashingBackend::new(format!("hashing-{dim}-s{i}"), dim).with_seed(i as u64))
                as Arc<dyn EmbeddingBackend>
        })
        .collect())
}

#[cfg(feature = "fastembed")]
fn fastembed_backends() -> Result<Vec<Arc<dyn EmbeddingBackend>>> {
    use codegraph_embedscope::features::embedding::FastEmbedBackend;

    // Models that fail to load stay in the set and are reported as failed
    Ok(FastEmbedBackend::load_all())
}

#[cfg(not(feature = "fastembed"))]
fn fastembed_backends() -> Result<Vec<Arc<dyn EmbeddingBackend>>> {
    bail!("embedscope was built without the `fastembed` feature")
}

fn run_compare(
    corpus: &Corpus,
    config: ValidatedConfig,
    backends: &[Arc<dyn EmbeddingBackend>],
    output: PathBuf,
    format: OutputFormat,
) -> Result<()> {
    let pipeline = ComparisonPipeline::new(config);
    let mut sink = SvgScatterSink::new(output);
    let report = pipeline.run_with_sink(corpus, backends, &mut sink)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_report(&report),
    }
    Ok(())
}

fn print_report(report: &PipelineReport) {
    println!("Snippets:");
    for snippet in &report.snippets {
        let facts = match &snippet.facts {
            Ok(facts) => format!(
                "{} functions, {} classes, {} imports, {} patterns",
                facts.functions.len(),
                facts.classes.len(),
                facts.imports.len(),
                facts.control_patterns.len()
            ),
            Err(e) => e.to_string(),
        };
        let tokens = match &snippet.tokens {
            Ok(stream) => format!("{} tokens", stream.len()),
            Err(e) => e.to_string(),
        };
        println!("  [{}] {:<14} {} | {}", snippet.index, snippet.label, facts, tokens);
    }

    println!("Backends:");
    for backend in &report.backends {
        match &backend.outcome {
            Ok(cloud) => println!(
                "  {:<40} shape={:?} explained variance=({:.3}, {:.3})",
                backend.backend,
                backend.shape,
                cloud.explained_variance_ratio[0],
                cloud.explained_variance_ratio[1]
            ),
            Err(e) => println!("  {:<40} FAILED: {}", backend.backend, e),
        }
    }

    println!("{}", report.summary());
}
