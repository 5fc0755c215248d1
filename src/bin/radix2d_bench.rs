use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use radix2d::harness::{run_benchmark, BenchmarkConfig, BenchmarkReport, DEFAULT_TOLERANCE};
use radix2d::{Isa, Radix};

#[derive(Parser, Debug)]
#[command(name = "radix2d-bench")]
#[command(about = "Time and validate forward 2D FFTs of random grids", long_about = None)]
struct Cli {
    /// Grid width, a power of two
    #[arg(long, default_value_t = 512)]
    width: usize,
    /// Grid height, a power of two
    #[arg(long, default_value_t = 512)]
    height: usize,
    #[arg(long, value_enum, default_value_t = RadixArg::All)]
    radix: RadixArg,
    /// Timed transforms per radix
    #[arg(long, default_value_t = 10)]
    iterations: usize,
    /// Seed of the random input grid
    #[arg(long, default_value_t = 0)]
    seed: u64,
    /// Run the scalar kernels even if SIMD is available
    #[arg(long)]
    scalar: bool,
    /// Compare every result against the rustfft reference
    #[arg(long)]
    validate: bool,
    /// Also time the rustfft reference
    #[arg(long)]
    reference: bool,
    /// Log every output bin (visible with RUST_LOG=trace)
    #[arg(long)]
    dump: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum RadixArg {
    #[value(name = "2")]
    Two,
    #[value(name = "4")]
    Four,
    #[value(name = "8")]
    Eight,
    All,
}

impl RadixArg {
    fn radices(self) -> Vec<Radix> {
        match self {
            RadixArg::Two => vec![Radix::Radix2],
            RadixArg::Four => vec![Radix::Radix4],
            RadixArg::Eight => vec![Radix::Radix8],
            RadixArg::All => Radix::ALL.to_vec(),
        }
    }
}

fn print_report(report: &BenchmarkReport) {
    let mut line = format!(
        "{:>8} {:>6} {}x{}: {:>10.1} us/iter",
        report.radix.to_string(),
        report.isa.to_string(),
        report.width,
        report.height,
        report.per_iteration().as_secs_f64() * 1e6
    );
    if let Some(reference) = report.reference_per_iteration() {
        line.push_str(&format!(
            ", rustfft {:.1} us/iter",
            reference.as_secs_f64() * 1e6
        ));
    }
    if let Some(error) = report.relative_error {
        line.push_str(&format!(", relative error {error:.3e}"));
    }
    println!("{line}");
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let isa = cli.scalar.then_some(Isa::Scalar);

    for radix in cli.radix.radices() {
        let config = BenchmarkConfig {
            width: cli.width,
            height: cli.height,
            radix,
            iterations: cli.iterations,
            seed: cli.seed,
            isa,
            validate: cli.validate,
            tolerance: DEFAULT_TOLERANCE,
            compare_reference: cli.reference,
            dump: cli.dump,
        };
        let report = run_benchmark(&config)
            .with_context(|| format!("{radix} benchmark of a {}x{} grid failed", cli.width, cli.height))?;
        print_report(&report);
    }

    Ok(())
}
