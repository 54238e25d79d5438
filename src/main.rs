mod backend;
mod config;
mod extract;
mod git;
mod pipeline;
mod report;
mod source;

use std::error::Error;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::backend::BackendClient;
use crate::config::Config;
use crate::pipeline::RunOutcome;

#[derive(Parser)]
#[command(
    name = "testforge",
    version,
    about = "AI-assisted unit test generation for files changed in a pull request"
)]
struct Cli {
    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand)]
enum CliCommand {
    /// Generate tests for files changed since the previous commit
    Generate(GenerateArgs),
    /// Regenerate tests for one file, steering the backend with feedback
    Regenerate(RegenerateArgs),
    /// Show or persist default configuration
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long, help = "Base URL of the generation backend")]
    backend_url: Option<String>,

    #[arg(long, help = "Directory for generated test artifacts")]
    out_dir: Option<PathBuf>,

    #[arg(long, help = "Path of the summary report")]
    report: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Repository root to scan")]
    repo: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct RegenerateArgs {
    #[arg(long, help = "Source file to regenerate tests for")]
    file: PathBuf,

    #[arg(long, help = "Feedback for the backend to incorporate")]
    feedback: String,

    #[arg(long, help = "Base URL of the generation backend")]
    backend_url: Option<String>,

    #[arg(long, help = "Directory for generated test artifacts")]
    out_dir: Option<PathBuf>,

    #[arg(long, default_value = ".", help = "Repository root")]
    repo: PathBuf,
}

#[derive(Args, Debug, Clone)]
struct ConfigArgs {
    #[arg(long, help = "Base URL of the generation backend")]
    backend_url: Option<String>,

    #[arg(long, help = "Directory for generated test artifacts")]
    out_dir: Option<PathBuf>,

    #[arg(long, help = "Path of the summary report")]
    report: Option<PathBuf>,

    #[arg(long, help = "Backend request timeout in seconds")]
    timeout_secs: Option<u64>,
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        CliCommand::Generate(args) => run_generate(args),
        CliCommand::Regenerate(args) => run_regenerate(args),
        CliCommand::Config(args) => run_config(args),
    };

    if let Err(e) = result {
        eprintln!("testforge: {e}");
        std::process::exit(1);
    }
}

/* ============================================================
   Command Implementations
   ============================================================ */

fn assemble_config(
    backend_url: Option<String>,
    out_dir: Option<PathBuf>,
    report: Option<PathBuf>,
) -> Config {
    let mut cfg = config::load_config().unwrap_or_default();

    if let Some(url) = backend_url {
        cfg.backend_url = url;
    }
    if let Some(dir) = out_dir {
        cfg.out_dir = dir;
    }
    if let Some(path) = report {
        cfg.report_path = path;
    }

    cfg
}

fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn Error>> {
    let cfg = assemble_config(args.backend_url, args.out_dir, args.report);
    let client = BackendClient::new(&cfg.backend_url, cfg.timeout())?;

    let outcome = pipeline::run(&cfg, &args.repo, |code, framework| {
        client.generate_tests(code, framework)
    })?;

    if let RunOutcome::Written { records, report } = outcome {
        println!(
            "{records} test file(s) generated; report written to {}",
            report.display()
        );
    }

    Ok(())
}

fn run_regenerate(args: RegenerateArgs) -> Result<(), Box<dyn Error>> {
    let cfg = assemble_config(args.backend_url, args.out_dir, None);
    let client = BackendClient::new(&cfg.backend_url, cfg.timeout())?;

    let artifact = pipeline::regenerate(&cfg, &args.repo, &args.file, |code, framework| {
        client.regenerate_with_feedback(code, framework, &args.feedback)
    })?;

    println!("regenerated tests written to {}", artifact.display());
    Ok(())
}

fn run_config(args: ConfigArgs) -> Result<(), Box<dyn Error>> {
    let mut cfg = config::load_config().unwrap_or_default();

    let changed = args.backend_url.is_some()
        || args.out_dir.is_some()
        || args.report.is_some()
        || args.timeout_secs.is_some();

    if let Some(url) = args.backend_url {
        cfg.backend_url = url;
    }
    if let Some(dir) = args.out_dir {
        cfg.out_dir = dir;
    }
    if let Some(path) = args.report {
        cfg.report_path = path;
    }
    if let Some(secs) = args.timeout_secs {
        cfg.timeout_secs = secs;
    }

    if changed {
        config::save_config(&cfg)?;
        println!("configuration saved");
    }

    println!("backend_url: {}", cfg.backend_url);
    println!("out_dir: {}", cfg.out_dir.display());
    println!("report_path: {}", cfg.report_path.display());
    println!("timeout_secs: {}", cfg.timeout_secs);

    Ok(())
}
