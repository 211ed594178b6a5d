use polyterp::interpolation::errors::InterpolationError;
use polyterp::interpolation::lagrange::{interpolate, Lagrange, LagrangeCfg};
use polyterp::interpolation::{Interpolator, SampleSet};

type TestResult = Result<(), InterpolationError>;

const ATOL: f64 = 1e-12;
const RTOL: f64 = 0.0;

#[inline]
fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= ATOL + RTOL * b.abs()
}

#[inline]
fn assert_vec_close(a: &[f64], b: &[f64]) {
    assert_eq!(a.len(), b.len());
    for (i, (ai, bi)) in a.iter().zip(b.iter()).enumerate() {
        assert!(
            approx_eq(*ai, *bi),
            "mismatch at index {}: left={}, right={}, ATOL={}, RTOL={}",
            i, ai, bi, ATOL, RTOL
        );
    }
}

#[test]
fn report_metadata() -> TestResult {
    let x      = [0.0, 1.0, 2.0];
    let y      = [0.0, 1.0, 4.0];
    let x_eval = [0.5, 1.5];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.n_provided, 3);
    assert_eq!(rep.n_evaluated, 2);
    assert_eq!(rep.degree, 2);
    assert_vec_close(&rep.evaluated, &[0.25, 2.25]);
    Ok(())
}

#[test]
fn square_reconstruction() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];

    let lagrange = Lagrange::new(SampleSet::new(&x, &y)?);
    assert!(approx_eq(lagrange.eval(2.5)?, 6.25));
    Ok(())
}

#[test]
fn exact_hits() -> TestResult {
    let x = [-1.0, 0.5, 2.0, 3.5];
    let y = [2.0, -1.0, 0.25, 7.0];

    let lagrange = Lagrange::new(SampleSet::new(&x, &y)?);
    assert_vec_close(&lagrange.eval_many(&x)?, &y);
    Ok(())
}

#[test]
fn extrapolates_outside_span() -> TestResult {
    // y = 3x - 1 
    let x = [0.0, 1.0, 2.0];
    let y = [-1.0, 2.0, 5.0];
    let x_eval = [-2.0, 5.0];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&x_eval)?;

    let rep = interpolate(cfg)?;
    assert_vec_close(&rep.evaluated, &[-7.0, 14.0]);
    Ok(())
}

#[test]
fn single_point_is_constant() -> TestResult {
    let lagrange = Lagrange::new(SampleSet::new(&[0.0], &[5.0])?);
    for q in [-3.0, 0.0, 0.7, 100.0] {
        assert_eq!(lagrange.eval(q)?, 5.0);
    }
    Ok(())
}

#[test]
fn points_past_degree_cap_are_ignored() -> TestResult {
    // first three points lie on y = x, the rest do not
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 2.0, 100.0, -50.0];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_max_degree(2)
        .set_x_eval(&[3.0, 4.0])?;

    let rep = interpolate(cfg)?;
    assert_eq!(rep.degree, 2);
    assert_vec_close(&rep.evaluated, &[3.0, 4.0]);
    Ok(())
}

#[test]
fn non_finite_query_error() -> TestResult {
    let lagrange = Lagrange::new(SampleSet::new(&[0.0, 1.0], &[0.0, 1.0])?);
    let err = lagrange.eval(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteQuery { .. }));
    Ok(())
}

#[test]
fn empty_x_eval_ok() -> TestResult {
    let x = [0.0, 1.0];
    let y = [0.0, 1.0];

    let cfg = LagrangeCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[])?; 

    let rep = interpolate(cfg)?;
    assert_eq!(rep.n_evaluated, 0);
    assert!(rep.evaluated.is_empty());
    Ok(())
}
