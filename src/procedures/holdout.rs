use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

use super::{Procedure, Split};

/// Shuffle once, then cut the data into a training, a testing and a validation set.
///
/// The set sizes are `floor(train_percent * n / 100)` and `floor(test_percent * n / 100)`; all
/// remaining rows go into the validation set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Holdout {
    pub train_percent: u32,
    pub test_percent: u32,
}

impl Holdout {
    pub fn new(train_percent: u32, test_percent: u32) -> Self {
        Holdout {
            train_percent,
            test_percent,
        }
    }

    /// share of the validation set in percent
    pub fn validate_percent(&self) -> i64 {
        100 - i64::from(self.train_percent) - i64::from(self.test_percent)
    }

    /// Reject splits where training and testing together claim more than all rows.
    pub fn validate(&self) -> Result<()> {
        if self.validate_percent() < 0 {
            return Err(Error::InvalidSplit {
                train: self.train_percent,
                test: self.test_percent,
            });
        }
        Ok(())
    }

    fn share(percent: u32, n: usize) -> usize {
        percent as usize * n / 100
    }
}

impl Default for Holdout {
    fn default() -> Self {
        Holdout::new(50, 10)
    }
}

impl Procedure for Holdout {
    fn split<T, R: Rng + ?Sized>(&self, mut rows: Vec<T>, rng: &mut R) -> Split<T> {
        rows.shuffle(rng);

        let n = rows.len();
        let n_train = Holdout::share(self.train_percent, n).min(n);
        let n_test = Holdout::share(self.test_percent, n).min(n - n_train);

        let validateset = rows.split_off(n_train + n_test);
        let testset = rows.split_off(n_train);

        debug!(
            "split {} rows: {} train, {} test, {} validate",
            n,
            rows.len(),
            testset.len(),
            validateset.len()
        );

        Split {
            trainset: rows,
            testset,
            validateset,
        }
    }
}
