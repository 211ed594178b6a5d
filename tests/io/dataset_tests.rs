use polyterp::interpolation::errors::InterpolationError;
use polyterp::io::{Dataset, DatasetError};

#[test]
fn parses_input_format() -> Result<(), DatasetError> {
    let input = "5\n0 0\n1 1\n2 4\n3 9\n4 16\n2.5\n";
    let dataset = Dataset::parse(input)?;

    assert_eq!(dataset.len(), 5);
    assert_eq!(dataset.x, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
    assert_eq!(dataset.y, vec![0.0, 1.0, 4.0, 9.0, 16.0]);
    assert_eq!(dataset.query, 2.5);
    assert_eq!(dataset.samples()?.degree(), 4);
    Ok(())
}

#[test]
fn whitespace_layout_is_free() -> Result<(), DatasetError> {
    let dataset = Dataset::parse("  2 -1.5 3e0\t2 4   \n\n 0.25")?;
    assert_eq!(dataset.x, vec![-1.5, 2.0]);
    assert_eq!(dataset.y, vec![3.0, 4.0]);
    assert_eq!(dataset.query, 0.25);
    Ok(())
}

#[test]
fn single_sample() -> Result<(), DatasetError> {
    let dataset = Dataset::parse("1\n0 5\n-7\n")?;
    assert_eq!(dataset.samples()?.degree(), 0);
    Ok(())
}

#[test]
fn missing_query_error() {
    let err = Dataset::parse("2\n0 0\n1 1\n").unwrap_err();
    assert!(matches!(err, DatasetError::MissingToken { what: "query point" }));
}

#[test]
fn missing_sample_error() {
    let err = Dataset::parse("3\n0 0\n1 1\n").unwrap_err();
    assert!(matches!(err, DatasetError::MissingToken { what: "sample x" }));
}

#[test]
fn invalid_number_error() {
    let err = Dataset::parse("2\n0 0\n1 one\n0.5").unwrap_err();
    assert!(matches!(err, DatasetError::InvalidNumber { ref token, what: "sample y" } if token == "one"));
}

#[test]
fn invalid_count_error() {
    let err = Dataset::parse("0\n1.0").unwrap_err();
    assert!(matches!(err, DatasetError::InvalidCount { got: 0 }));

    let err = Dataset::parse("-2\n1.0").unwrap_err();
    assert!(matches!(err, DatasetError::InvalidNumber { what: "sample count", .. }));
}

#[test]
fn trailing_token_error() {
    let err = Dataset::parse("1\n0 5\n1\n2").unwrap_err();
    assert!(matches!(err, DatasetError::TrailingToken { ref token } if token == "2"));
}

#[test]
fn unsorted_x_rejected_on_load() {
    let err = Dataset::parse("3\n0 0\n2 4\n1 1\n0.5").unwrap_err();
    assert!(matches!(err, DatasetError::Interpolation(InterpolationError::NonIncreasingX)));
}

#[test]
fn duplicate_x_rejected_on_load() {
    let err = Dataset::parse("3\n0 0\n1 1\n1 2\n0.5").unwrap_err();
    assert!(matches!(err, DatasetError::Interpolation(InterpolationError::DuplicateX { .. })));
}

#[test]
fn missing_file_error() {
    let err = Dataset::from_path("/nonexistent/polyterp/input.txt").unwrap_err();
    assert!(matches!(err, DatasetError::Io(_)));
}
