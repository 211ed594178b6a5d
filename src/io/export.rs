//! Plain-text point export, one `x y` pair per line.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::interpolation::algorithms::Algorithm;
use crate::interpolation::polynomial::PolynomialInterpolator;
use crate::io::dataset::Dataset;
use crate::io::errors::DatasetError;

pub const ACTUAL_DATA_FILE: &str = "actual_data.txt";
pub const QUERY_FILE: &str = "query_x.txt";


/// File name of the dense curve written for `algorithm`.
pub const fn curve_file(algorithm: Algorithm) -> &'static str {
    match algorithm {
        Algorithm::Lagrange                => "lagrange_data.txt",
        Algorithm::NewtonDividedDifference => "newton_dd_data.txt",
        Algorithm::NewtonForward           => "newton_forward_data.txt",
    }
}

pub fn write_points<W: Write>(mut w: W, points: &[(f64, f64)]) -> std::io::Result<()> {
    for (x, y) in points {
        writeln!(w, "{x} {y}")?;
    }
    w.flush()
}

fn write_file(path: &Path, points: &[(f64, f64)]) -> Result<(), DatasetError> {
    let file = File::create(path)?;
    write_points(BufWriter::new(file), points)?;
    log::debug!("wrote {} points to {}", points.len(), path.display());
    Ok(())
}

/// Writes the raw samples, the query point and one dense curve per method
/// into `dir`. Returns the paths written.
pub fn export_all(
    dir: &Path,
    interp: &PolynomialInterpolator,
    dataset: &Dataset,
    step: f64,
) -> Result<Vec<PathBuf>, DatasetError> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(Algorithm::ALL.len() + 2);

    let actual: Vec<(f64, f64)> = dataset.x.iter().copied().zip(dataset.y.iter().copied()).collect();
    let path = dir.join(ACTUAL_DATA_FILE);
    write_file(&path, &actual)?;
    written.push(path);

    let path = dir.join(QUERY_FILE);
    std::fs::write(&path, dataset.query.to_string())?;
    written.push(path);

    for algorithm in Algorithm::ALL {
        let points = interp.sample_dense(algorithm, step)?;
        let path = dir.join(curve_file(algorithm));
        write_file(&path, &points)?;
        written.push(path);
    }

    log::info!("exported {} files to {}", written.len(), dir.display());
    Ok(written)
}
