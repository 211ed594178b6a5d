//! Dataset input.
//!
//! Format, whitespace separated:
//!
//! ```text
//! n
//! x_0 y_0
//! ...
//! x_{n-1} y_{n-1}
//! query
//! ```

use std::path::Path;
use std::str::{FromStr, SplitWhitespace};

use crate::interpolation::samples::SampleSet;
use crate::io::errors::DatasetError;


/// Owned samples plus the query point read alongside them.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub query: f64,
}

struct Tokens<'s> {
    inner: SplitWhitespace<'s>,
}

impl<'s> Tokens<'s> {
    fn next<T: FromStr>(&mut self, what: &'static str) -> Result<T, DatasetError> {
        let token = self.inner.next().ok_or(DatasetError::MissingToken { what })?;
        token.parse().map_err(|_| DatasetError::InvalidNumber {
            token: token.to_string(),
            what,
        })
    }
}

impl Dataset {
    pub fn parse(input: &str) -> Result<Self, DatasetError> {
        let mut tokens = Tokens { inner: input.split_whitespace() };

        let n: usize = tokens.next("sample count")?;
        if n == 0 {
            return Err(DatasetError::InvalidCount { got: n });
        }

        let mut x: Vec<f64> = Vec::with_capacity(n);
        let mut y: Vec<f64> = Vec::with_capacity(n);
        for _ in 0..n {
            x.push(tokens.next("sample x")?);
            y.push(tokens.next("sample y")?);
        }
        let query: f64 = tokens.next("query point")?;

        if let Some(token) = tokens.inner.next() {
            return Err(DatasetError::TrailingToken { token: token.to_string() });
        }

        let dataset = Self { x, y, query };
        // fail fast on unsorted or duplicate x
        dataset.samples()?;
        Ok(dataset)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        log::info!("loading dataset from {}", path.display());
        let input = std::fs::read_to_string(path)?;
        Self::parse(&input)
    }

    pub fn len(&self) -> usize { self.x.len() }
    pub fn is_empty(&self) -> bool { self.x.is_empty() }

    pub fn samples(&self) -> Result<SampleSet<'_>, DatasetError> {
        Ok(SampleSet::new(&self.x, &self.y)?)
    }
}
