//! Convert ARFF data sets into SNNS pattern files.
//!
//! An ARFF file is parsed into a [`Relation`](dataset::Relation), its rows are encoded into
//! numeric patterns (nominal attributes become one-hot bit vectors, rows with missing values
//! are dropped), shuffled, split into training, testing and validation sets, and each set is
//! written to its own `.pat` file.
//!
//! ```no_run
//! use std::path::Path;
//! use arff2pat::{convert_file, ConvertOptions};
//!
//! let report = convert_file(Path::new("iris.arff"), &ConvertOptions::new("iris")).unwrap();
//! println!("{} training patterns", report.n_train);
//! ```

#[macro_use]
extern crate log;

pub mod attribute;
pub mod clock;
pub mod convert;
pub mod dataset;
pub mod diagnostic;
pub mod encoder;
pub mod error;
pub mod parser;
pub mod pat;
pub mod procedures;

pub use crate::convert::{convert_file, convert_with, ConversionReport, ConvertOptions};
pub use crate::error::{Error, Result};
