use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use scene_layout::{Compiler, FontRegistry, LayoutConfig, LayoutSpec};

#[derive(Parser, Debug)]
#[command(name = "scene-layout", version)]
struct Cli {
    /// Log compiler progress at debug level.
    #[arg(long, global = true, default_value_t = false)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compile a layout spec into a pixel-exact project.
    Compile(CompileArgs),
    /// Check a layout spec for timeline and asset-reference problems.
    Validate(ValidateArgs),
}

#[derive(Parser, Debug)]
struct CompileArgs {
    /// Input layout spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output project JSON path.
    #[arg(long)]
    out: PathBuf,

    /// Optional layout config JSON overriding engine constants and element defaults.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Skip structural validation before compiling.
    #[arg(long, default_value_t = false)]
    no_validate: bool,
}

#[derive(Parser, Debug)]
struct ValidateArgs {
    /// Input layout spec JSON.
    #[arg(long = "in")]
    in_path: PathBuf,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Compile(args) => cmd_compile(args),
        Command::Validate(args) => cmd_validate(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_compile(args: CompileArgs) -> anyhow::Result<()> {
    let spec = LayoutSpec::from_path(&args.in_path)?;
    if !args.no_validate {
        spec.validate()
            .with_context(|| format!("validate '{}'", args.in_path.display()))?;
    }

    let config = match &args.config {
        Some(path) => LayoutConfig::from_path(path)?,
        None => LayoutConfig::default(),
    };
    let compiler = Compiler::with_config(spec.canvas()?, FontRegistry::builtin(), config);
    let project = compiler.compile(&spec)?;
    let json = project.to_json_pretty()?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, json)
        .with_context(|| format!("write project '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_validate(args: ValidateArgs) -> anyhow::Result<()> {
    let spec = LayoutSpec::from_path(&args.in_path)?;
    let issues = spec.issues();
    if issues.is_empty() {
        eprintln!("{}: ok", args.in_path.display());
        return Ok(());
    }
    for issue in &issues {
        eprintln!("{issue}");
    }
    anyhow::bail!(
        "{}: {} problem(s) found",
        args.in_path.display(),
        issues.len()
    )
}
