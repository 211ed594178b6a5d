use polyterp::interpolation::errors::InterpolationError;
use polyterp::interpolation::table::DifferenceTable;
use polyterp::interpolation::SampleSet;

type TestResult = Result<(), InterpolationError>;

#[test]
fn divided_differences_of_square() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    let table = DifferenceTable::divided(&SampleSet::new(&x, &y)?);

    assert_eq!(table.order(), 5);
    assert_eq!(table.top_row(), &[0.0, 1.0, 1.0, 0.0, 0.0]);
    assert_eq!(table.get(2, 0), Some(4.0));
    assert_eq!(table.get(3, 1), Some(7.0));
    Ok(())
}

#[test]
fn divided_differences_uneven_spacing() -> TestResult {
    // y = 2x + 1
    let x = [0.0, 0.5, 2.0];
    let y = [1.0, 2.0, 5.0];
    let table = DifferenceTable::divided(&SampleSet::new(&x, &y)?);

    assert_eq!(table.top_row(), &[1.0, 2.0, 0.0]);
    assert_eq!(table.get(1, 1), Some(2.0));
    Ok(())
}

#[test]
fn forward_differences_of_square() -> TestResult {
    let x = [0.0, 1.0, 2.0, 3.0, 4.0];
    let y = [0.0, 1.0, 4.0, 9.0, 16.0];
    let table = DifferenceTable::forward(&SampleSet::new(&x, &y)?);

    assert_eq!(table.top_row(), &[0.0, 1.0, 2.0, 0.0, 0.0]);
    assert_eq!(table.get(3, 1), Some(7.0));
    assert_eq!(table.get(1, 2), Some(2.0));
    Ok(())
}

#[test]
fn triangle_bounds() -> TestResult {
    let x = [0.0, 1.0, 2.0];
    let y = [1.0, 1.0, 1.0];
    let table = DifferenceTable::forward(&SampleSet::new(&x, &y)?);

    assert_eq!(table.get(0, 2), Some(0.0));
    assert_eq!(table.get(1, 2), None);
    assert_eq!(table.get(2, 1), None);
    assert_eq!(table.get(3, 0), None);
    Ok(())
}

#[test]
fn table_uses_only_nodes() -> TestResult {
    let x: Vec<f64> = (0..9).map(|i| i as f64).collect();
    let y: Vec<f64> = x.iter().map(|xi| xi * xi).collect();
    let table = DifferenceTable::divided(&SampleSet::new(&x, &y)?);

    assert_eq!(table.order(), 7);
    assert_eq!(table.top_row().len(), 7);
    Ok(())
}

#[test]
fn single_point_table() -> TestResult {
    let table = DifferenceTable::divided(&SampleSet::new(&[2.0], &[5.0])?);
    assert_eq!(table.order(), 1);
    assert_eq!(table.top_row(), &[5.0]);
    Ok(())
}
