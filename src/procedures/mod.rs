//! Validation procedures

mod holdout;

pub use self::holdout::Holdout;

use rand::Rng;

/// Validation procedures partition a data set into disjoint subsets
pub trait Procedure {
    fn split<T, R: Rng + ?Sized>(&self, rows: Vec<T>, rng: &mut R) -> Split<T>;
}

/// A single partition of a data set into training, testing and validation sets
#[derive(Debug, Clone, PartialEq)]
pub struct Split<T> {
    pub trainset: Vec<T>,
    pub testset: Vec<T>,
    pub validateset: Vec<T>,
}

impl<T> Split<T> {
    pub fn new() -> Self {
        Split {
            trainset: Vec::new(),
            testset: Vec::new(),
            validateset: Vec::new(),
        }
    }

    /// total number of rows over all three sets
    pub fn len(&self) -> usize {
        self.trainset.len() + self.testset.len() + self.validateset.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> Default for Split<T> {
    fn default() -> Self {
        Split::new()
    }
}
