use polyterp::interpolation::errors::InterpolationError;
use polyterp::interpolation::estimate::estimate_errors;
use polyterp::interpolation::SampleSet;

type TestResult = Result<(), InterpolationError>;

#[test]
fn nodes_have_zero_error() -> TestResult {
    let x = [0.0, 0.3, 1.1, 2.0];
    let y = [1.0, -2.0, 0.5, 3.0];

    let rep = estimate_errors(&SampleSet::new(&x, &y)?)?;
    assert_eq!(rep.algorithm_name, "lagrange");
    assert_eq!(rep.points.len(), 4);
    for (i, p) in rep.points.iter().enumerate() {
        assert!(rep.is_node(i));
        assert_eq!(p.x, x[i]);
        assert_eq!(p.y, y[i]);
        assert!(p.error <= 1e-12, "index {i}: error={}", p.error);
    }
    assert!(rep.max_error() <= 1e-12);
    Ok(())
}

#[test]
fn excluded_sample_has_error() -> TestResult {
    // y = x^7 over 8 points, the degree 6 fit misses x = 7 by 7! exactly
    let x: Vec<f64> = (0..8).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|xi| xi.powi(7)).collect();

    let rep = estimate_errors(&SampleSet::new(&x, &y)?)?;
    assert_eq!(rep.degree, 6);
    assert_eq!(rep.points.len(), 8);

    for i in 0..7 {
        assert!(rep.is_node(i));
        assert!(rep.points[i].error <= 1e-9, "index {i}: error={}", rep.points[i].error);
    }

    assert!(!rep.is_node(7));
    let last = rep.points[7];
    assert!((last.error - 5040.0).abs() <= 1e-6, "error={}", last.error);
    assert_eq!(rep.max_error(), last.error);
    Ok(())
}

#[test]
fn pairs_follow_dataset_order() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [2.0, 2.0, 2.0];

    let rep = estimate_errors(&SampleSet::new(&x, &y)?)?;
    let pairs: Vec<(f64, f64)> = rep.pairs().collect();
    assert_eq!(pairs, vec![(0.0, 0.0), (1.0, 0.0), (2.0, 0.0)]);
    Ok(())
}

#[test]
fn single_point_has_zero_error() -> TestResult {
    let rep = estimate_errors(&SampleSet::new(&[0.0], &[5.0])?)?;
    assert_eq!(rep.points.len(), 1);
    assert_eq!(rep.points[0].error, 0.0);
    assert_eq!(rep.points[0].interpolated, 5.0);
    Ok(())
}
