use std::error::Error;
use std::fmt;

/// Largest row or column count the sized constructors accept.
///
/// Sizes and indices are validated against this ceiling before any
/// allocation happens; other ceilings are a [`Bounded`] alias away.
pub const MAX_DIM: usize = 4096;

/// A dimension size accepted by the sized constructors: `1..=MAX_DIM`.
pub type DimSize = Bounded<1, MAX_DIM>;

/// A row or column index: `0..=MAX_DIM - 1`.
pub type DimIndex = Bounded<0, { MAX_DIM - 1 }>;

/// An integer checked to lie in `MIN..=MAX` at construction time.
///
/// The only way to obtain one is through [`Bounded::new`], so code holding
/// a value never has to re-validate it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Bounded<const MIN: usize, const MAX: usize>(usize);

impl<const MIN: usize, const MAX: usize> Bounded<MIN, MAX> {
    pub fn new(value: usize) -> Result<Self, RangeError> {
        if value < MIN || value > MAX {
            return Err(RangeError {
                value,
                min: MIN,
                max: MAX,
            });
        }
        Ok(Self(value))
    }

    pub fn get(self) -> usize {
        self.0
    }
}

impl<const MIN: usize, const MAX: usize> From<Bounded<MIN, MAX>> for usize {
    fn from(value: Bounded<MIN, MAX>) -> Self {
        value.0
    }
}

impl<const MIN: usize, const MAX: usize> PartialEq<usize> for Bounded<MIN, MAX> {
    fn eq(&self, other: &usize) -> bool {
        self.0 == *other
    }
}

/// Rejected value together with the window it missed.
#[derive(Debug, Clone)]
pub struct RangeError {
    value: usize,
    min: usize,
    max: usize,
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "value {} outside allowed range {}..={}",
            self.value, self.min, self.max
        )
    }
}

impl Error for RangeError {}
