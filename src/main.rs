//! Command-line entry point.
//!
//! With no subcommand this does a full run: `matrixA.txt`,
//! `matrixB_original.txt` and `matrixB.txt` in the current directory,
//! shaped by the same options `run` takes (`matfile --rows 4 --seed 1`).

use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Args, Parser, Subcommand};
use matfile::{Config, FixedWidth, GeneratorConfig};
use tracing::Level;

#[derive(Parser, Debug)]
#[command(name = "matfile", version, about = "Random fixed-width matrix files")]
struct Cli {
    /// More log output (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    /// Options for the full run when no subcommand is given.
    #[command(flatten)]
    run: RunArgs,

    #[command(subcommand)]
    cmd: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate matrix A and matrix B, then write the transpose of B.
    Run(RunArgs),
    /// Generate a single matrix file.
    Generate(GenerateArgs),
    /// Transpose a matrix file into another file.
    Transpose(TransposeArgs),
}

#[derive(Args, Debug)]
struct MatrixArgs {
    /// Number of rows.
    #[arg(long, default_value_t = 16)]
    rows: usize,

    /// Number of columns.
    #[arg(long, default_value_t = 16)]
    cols: usize,

    /// Smallest generated value (inclusive).
    #[arg(long, default_value_t = 0)]
    min: u32,

    /// Largest generated value (inclusive).
    #[arg(long, default_value_t = 20)]
    max: u32,

    /// Characters per field.
    #[arg(long, default_value_t = matfile::codec::DEFAULT_WIDTH)]
    width: usize,

    /// Seed for reproducible output.
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug)]
struct RunArgs {
    #[command(flatten)]
    matrix: MatrixArgs,

    /// Directory for the output files.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    /// File name for matrix A.
    #[arg(long, default_value = "matrixA.txt")]
    a: PathBuf,

    /// File name for matrix B before transposing.
    #[arg(long, default_value = "matrixB_original.txt")]
    b_original: PathBuf,

    /// File name for the transpose of matrix B.
    #[arg(long, default_value = "matrixB.txt")]
    b: PathBuf,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    #[command(flatten)]
    matrix: MatrixArgs,

    /// Output path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct TransposeArgs {
    /// Input matrix file.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output path.
    #[arg(long)]
    out: PathBuf,

    /// Characters per field.
    #[arg(long, default_value_t = matfile::codec::DEFAULT_WIDTH)]
    width: usize,
}

impl From<RunArgs> for Config {
    fn from(args: RunArgs) -> Self {
        let m = args.matrix;
        Config {
            rows: m.rows,
            cols: m.cols,
            min: m.min,
            max: m.max,
            width: m.width,
            seed: m.seed,
            dir: args.dir,
            a_file: args.a,
            b_original_file: args.b_original,
            b_file: args.b,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.cmd {
        None => cmd_run(cli.run.into()),
        Some(Command::Run(args)) => cmd_run(args.into()),
        Some(Command::Generate(args)) => cmd_generate(args),
        Some(Command::Transpose(args)) => cmd_transpose(args),
    }
}

fn init_tracing(verbose: u8, quiet: bool) {
    let level = if quiet {
        Level::ERROR
    } else {
        match verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_run(config: Config) -> anyhow::Result<()> {
    matfile::run(&config)
        .with_context(|| format!("run in '{}'", config.dir.display()))?;
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let m = args.matrix;
    let codec = FixedWidth::new(m.width)?;
    let mut config = GeneratorConfig::default()
        .with_shape(m.rows, m.cols)
        .with_range(m.min, m.max);
    config.seed = m.seed;

    matfile::generate_file(&args.out, &config, &codec)
        .with_context(|| format!("generate '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_transpose(args: TransposeArgs) -> anyhow::Result<()> {
    let codec = FixedWidth::new(args.width)?;
    matfile::transpose_file(&args.in_path, &args.out, &codec).with_context(|| {
        format!(
            "transpose '{}' into '{}'",
            args.in_path.display(),
            args.out.display()
        )
    })?;
    Ok(())
}
