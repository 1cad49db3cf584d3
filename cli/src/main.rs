//! # officewise
//!
//! Renders the OfficeWise AI landing page to a static HTML file and lints
//! its content.
//!
//! ```bash
//! # Write dist/index.html
//! officewise build
//!
//! # Custom copy and endpoints
//! officewise --config officewise.toml --content content.toml build --out public
//!
//! # CI gate
//! officewise check --json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use officewise_site::config::CONFIG_FILE;
use officewise_site::lint::{self, Issue};
use officewise_site::types::SiteContent;
use officewise_site::{SiteConfig, render_site, write_site};
use tracing::{debug, info, warn};

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "officewise")]
#[command(about = "Build and lint the OfficeWise AI landing page")]
#[command(version)]
struct Args {
    /// Site config (default: ./officewise.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// TOML file overriding the published page copy
    #[arg(long, global = true)]
    content: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page and write <OUT>/index.html
    Build {
        /// Output directory
        #[arg(short, long, default_value = "dist")]
        out: PathBuf,
    },
    /// Render the page to stdout
    Print,
    /// Lint config and content
    Check {
        /// Emit issues as JSON
        #[arg(long)]
        json: bool,
    },
}

// ============================================================================
// Input loading
// ============================================================================

/// Explicit `--config`, else `./officewise.toml` when present, else defaults.
///
/// A config file that exists but fails to load is always an error here.
fn load_config(path: Option<&Path>) -> Result<SiteConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("Failed to read working directory")?;
            let candidate = cwd.join(CONFIG_FILE);
            if !candidate.exists() {
                debug!("no {} in {}, using defaults", CONFIG_FILE, cwd.display());
                return Ok(SiteConfig::default());
            }
            candidate
        }
    };

    debug!("loading config {}", path.display());
    SiteConfig::from_path(&path)
        .with_context(|| format!("Failed to load config {}", path.display()))
}

fn load_content(path: Option<&Path>) -> Result<SiteContent> {
    match path {
        Some(path) => SiteContent::from_path(path)
            .with_context(|| format!("Failed to load content {}", path.display())),
        None => Ok(SiteContent::default()),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn build(config: &SiteConfig, content: &SiteContent, out: &Path) -> Result<()> {
    let issues = lint::check(config, content);
    report_warnings(&issues);
    if lint::has_errors(&issues) {
        for issue in issues.iter().filter(|i| i.severity == lint::Severity::Error) {
            eprintln!("{issue}");
        }
        bail!("refusing to build: content has errors (run `officewise check`)");
    }

    let path = write_site(config, content, out)
        .with_context(|| format!("Failed to write site to {}", out.display()))?;
    println!("{}", path.display());
    Ok(())
}

fn check(config: &SiteConfig, content: &SiteContent, json: bool) -> Result<bool> {
    let issues = lint::check(config, content);

    if json {
        let out = serde_json::to_string_pretty(&issues).context("Failed to serialize issues")?;
        println!("{out}");
    } else if issues.is_empty() {
        println!("no issues");
    } else {
        for issue in &issues {
            println!("{issue}");
        }
    }

    Ok(!lint::has_errors(&issues))
}

fn report_warnings(issues: &[Issue]) {
    for issue in issues.iter().filter(|i| i.severity == lint::Severity::Warning) {
        warn!("{}: {}", issue.location, issue.message);
    }
}

// ============================================================================
// Main
// ============================================================================

fn run(args: Args) -> Result<bool> {
    let config = load_config(args.config.as_deref())?;
    let content = load_content(args.content.as_deref())?;

    match args.command {
        Command::Build { out } => build(&config, &content, &out).map(|()| true),
        Command::Print => {
            print!("{}", render_site(&config, &content));
            Ok(true)
        }
        Command::Check { json } => check(&config, &content, json),
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    // stdout carries the page or lint output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .init();

    info!("officewise v{}", env!("CARGO_PKG_VERSION"));

    match run(args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
