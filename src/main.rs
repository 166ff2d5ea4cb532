use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use rayon::prelude::*;
use sfx::output::Printer;
use sfx::report::{build_report, Report, ReportKind};
use sfx::tree::TreeConfig;
use sfx::utils::progress::input_progress;
use sfx::utils::{get_config_path, AppConfig, InputSource};
use std::path::PathBuf;
use termcolor::ColorChoice;

#[derive(Parser)]
#[command(name = "sfx")]
#[command(about = "Online suffix trees: suffix enumeration and Burrows-Wheeler transform")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every suffix in alphabetical order
    Suffixes(InputArgs),
    /// Print suffix lengths in alphabetical order of the suffixes
    Lengths(InputArgs),
    /// Print the Burrows-Wheeler transform
    Bwt(InputArgs),
    /// Dump every edge of the tree
    Edges(InputArgs),
    /// Show tree statistics
    Stats(InputArgs),
    /// Build the tree and verify its suffix links
    Check(InputArgs),
    /// Show the config file location and effective settings
    Config,
}

#[derive(Args)]
struct InputArgs {
    /// Files to process, each one a separate text
    inputs: Vec<PathBuf>,

    /// Use this text instead of reading files
    #[arg(short, long, conflicts_with = "inputs")]
    text: Option<String>,

    /// Append this terminator before building (overrides config)
    #[arg(short = 'T', long)]
    terminator: Option<char>,

    /// Build without a terminator even if the config sets one
    #[arg(long, conflicts_with = "terminator")]
    no_terminator: bool,

    /// Lowercase ASCII input before building
    #[arg(short, long)]
    ignore_case: bool,

    /// Emit one JSON object per input
    #[arg(long)]
    json: bool,

    /// When to use colors
    #[arg(long, value_enum, default_value_t = ColorMode::Auto)]
    color: ColorMode,

    /// Hide the progress bar
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ColorMode {
    Auto,
    Always,
    Never,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load()?;

    let (kind, args) = match cli.command {
        Commands::Suffixes(args) => (ReportKind::Suffixes, args),
        Commands::Lengths(args) => (ReportKind::Lengths, args),
        Commands::Bwt(args) => (ReportKind::Bwt, args),
        Commands::Edges(args) => (ReportKind::Edges, args),
        Commands::Stats(args) => (ReportKind::Stats, args),
        Commands::Check(args) => (ReportKind::Check, args),
        Commands::Config => return show_config(&config),
    };

    run(kind, &args, &config)
}

fn run(kind: ReportKind, args: &InputArgs, config: &AppConfig) -> Result<()> {
    let tree_config = resolve_tree_config(args, config)?;
    let sources = collect_sources(args)?;

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.effective_parallel_inputs())
        .build()
        .context("Failed to start worker pool")?;

    let progress = input_progress(sources.len(), args.quiet || args.json);

    // Build in parallel, report in input order
    let results: Vec<Result<Report>> = pool.install(|| {
        sources
            .par_iter()
            .map(|source| {
                let result = build_one(source, kind, &tree_config);
                if let Some(ref pb) = progress {
                    pb.inc(1);
                }
                result
            })
            .collect()
    });

    if let Some(pb) = progress {
        pb.finish_and_clear();
    }

    let mut printer = Printer::new(color_choice(args.color, config), args.json);
    let heading = sources.len() > 1;
    let mut failures = 0;

    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(report) => printer.print(&source.name(), &report, heading)?,
            Err(e) => {
                eprintln!("sfx: {}: {:#}", source.name(), e);
                failures += 1;
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} inputs failed", failures, sources.len());
    }

    Ok(())
}

fn build_one(source: &InputSource, kind: ReportKind, config: &TreeConfig) -> Result<Report> {
    let text = source.load()?;
    let report = build_report(kind, &text, config).context("Failed to build suffix tree")?;
    Ok(report)
}

/// Config file settings, overridden by command-line flags
fn resolve_tree_config(args: &InputArgs, config: &AppConfig) -> Result<TreeConfig> {
    let mut tree_config = config.tree_config()?;

    if args.no_terminator {
        tree_config.terminator = None;
    } else if let Some(c) = args.terminator {
        if !c.is_ascii() {
            bail!("Terminator {:?} is not an ASCII character", c);
        }
        tree_config.terminator = Some(c as u8);
    }

    if args.ignore_case {
        tree_config.case_insensitive = true;
    }

    Ok(tree_config)
}

fn collect_sources(args: &InputArgs) -> Result<Vec<InputSource>> {
    if let Some(ref text) = args.text {
        return Ok(vec![InputSource::Inline(text.clone())]);
    }

    if args.inputs.is_empty() {
        bail!("No input: pass one or more files or --text");
    }

    Ok(args.inputs.iter().cloned().map(InputSource::File).collect())
}

fn color_choice(mode: ColorMode, config: &AppConfig) -> ColorChoice {
    match mode {
        ColorMode::Auto if config.color => ColorChoice::Auto,
        ColorMode::Auto => ColorChoice::Never,
        ColorMode::Always => ColorChoice::Always,
        ColorMode::Never => ColorChoice::Never,
    }
}

fn show_config(config: &AppConfig) -> Result<()> {
    let path = get_config_path()?;
    let status = if path.exists() { "" } else { " [not found, using defaults]" };

    println!("Config file: {}{}", path.display(), status);
    println!("{}", serde_json::to_string_pretty(config)?);
    Ok(())
}
