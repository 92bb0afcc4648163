use anyhow::Result;
use clap::Parser;
use lcrail_bench::aggregator::Aggregator;
use lcrail_bench::config::AppConfig;
use lcrail_bench::summary::{Layout, summarize};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::time::FormatTime;

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f%:z")
        )
    }
}

/// Aggregate LCRail benchmark results and print chart input as JSON.
#[derive(Parser, Debug)]
#[command(name = "lcrail-bench", version, about, long_about = None)]
struct Cli {
    /// Benchmarked process name, as in <process>-top-<name>.txt
    process: Option<String>,

    /// Results root (<root>/<benchmark>/<part>/<device>/<file>)
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Config file (overrides CONFIG_FILE)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Write JSON here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Emit the full parsed result tree instead of the summary
    #[arg(long)]
    tree: bool,
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_timer(LocalTimer)
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let app_config = match &cli.config {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };

    let process = cli
        .process
        .or_else(|| app_config.input.process.clone())
        .ok_or_else(|| anyhow::anyhow!("no process name given (argument or input.process)"))?;
    anyhow::ensure!(!process.is_empty(), "process name must be non-empty");
    let root = cli
        .root
        .unwrap_or_else(|| PathBuf::from(&app_config.input.root));

    tracing::info!(process = %process, root = %root.display(), "benchmarking process");
    let aggregation = Aggregator::from_config(&app_config, process).scan(&root);
    if !aggregation.issues.is_empty() {
        let io = aggregation.issues.iter().filter(|i| i.is_io()).count();
        tracing::warn!(
            total = aggregation.issues.len(),
            unreadable_files = io,
            malformed_lines = aggregation.issues.len() - io,
            "finished parsing with issues"
        );
    }

    let json = if cli.tree {
        serde_json::to_string_pretty(&aggregation.tree)?
    } else {
        let layout = Layout::from(&app_config.layout);
        serde_json::to_string_pretty(&summarize(&aggregation.tree, &layout)?)?
    };

    match &cli.output {
        Some(path) => {
            std::fs::write(path, json)
                .map_err(|e| anyhow::anyhow!("write {}: {}", path.display(), e))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => println!("{}", json),
    }
    Ok(())
}
