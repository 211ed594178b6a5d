use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use polyterp::interpolation::algorithms::Algorithm;
use polyterp::interpolation::config::DEFAULT_SAMPLE_STEP;
use polyterp::interpolation::PolynomialInterpolator;
use polyterp::io::{export, Dataset};

#[derive(Parser, Debug)]
#[command(name = "polyterp", about = "Polynomial interpolation of a small dataset")]
struct Cli {
    /// Dataset file: n, then n `x y` pairs, then the query point
    #[arg(long = "input", short = 'i', default_value = "input.txt")]
    input: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate at the query point
    Eval {
        #[arg(long = "method", value_enum, default_value_t = Method::All)]
        method: Method,

        /// Overrides the query point from the dataset file
        #[arg(long = "at", allow_negative_numbers = true)]
        at: Option<f64>,
    },

    /// Lagrange error at every sample point
    Errors,

    /// Write `x y` point files for plotting
    Export {
        #[arg(long = "step", default_value_t = DEFAULT_SAMPLE_STEP)]
        step: f64,

        #[arg(long = "out-dir", default_value = ".")]
        out_dir: PathBuf,
    },
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Method {
    Lagrange,
    Newton,
    Forward,
    All,
}

impl Method {
    fn algorithms(self) -> &'static [Algorithm] {
        match self {
            Method::Lagrange => &[Algorithm::Lagrange],
            Method::Newton   => &[Algorithm::NewtonDividedDifference],
            Method::Forward  => &[Algorithm::NewtonForward],
            Method::All      => &Algorithm::ALL,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let dataset = Dataset::from_path(&cli.input)
        .with_context(|| format!("failed to load {}", cli.input.display()))?;
    let interp = PolynomialInterpolator::new(dataset.samples()?);
    log::info!("n={}, degree={}", dataset.len(), interp.degree());

    match cli.command {
        Commands::Eval { method, at } => {
            let xq = at.unwrap_or(dataset.query);
            for &algorithm in method.algorithms() {
                let yq = interp.eval(algorithm, xq)?;
                println!("{:<26} P({xq}) = {yq}", algorithm.algorithm_name());
            }
        }

        Commands::Errors => {
            let report = interp.estimate_errors()?;
            println!("Error estimation ({}):", report.algorithm_name);
            for (x, err) in report.pairs() {
                println!("x = {x} | Error = {err:e}");
            }
            println!("max error = {:e}", report.max_error());
        }

        Commands::Export { step, out_dir } => {
            let written = export::export_all(&out_dir, &interp, &dataset, step)
                .with_context(|| format!("failed to export to {}", out_dir.display()))?;
            for path in written {
                println!("{}", path.display());
            }
        }
    }

    Ok(())
}
