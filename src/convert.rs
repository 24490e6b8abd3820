//! The complete conversion from one ARFF file to three pattern files

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::clock::{Clock, SystemClock};
use crate::diagnostic::Diagnostic;
use crate::encoder::encode_relation;
use crate::error::{Error, Result};
use crate::parser;
use crate::pat::{self, OutputNames, Units};
use crate::procedures::{Holdout, Procedure};

#[derive(Debug, Clone)]
pub struct ConvertOptions {
    pub split: Holdout,

    /// output files are named `<base>_train.pat`, `<base>_test.pat` and `<base>_validate.pat`
    pub base: PathBuf,
}

impl ConvertOptions {
    pub fn new<P: Into<PathBuf>>(base: P) -> Self {
        ConvertOptions {
            split: Holdout::default(),
            base: base.into(),
        }
    }
}

/// What a conversion produced
#[derive(Debug)]
pub struct ConversionReport {
    pub relation: String,
    pub units: Units,
    pub n_train: usize,
    pub n_test: usize,
    pub n_validate: usize,

    /// rows left out because of missing values
    pub n_missing: usize,

    pub files: OutputNames,
    pub diagnostics: Vec<Diagnostic>,
}

/// Convert the ARFF file at `input`, shuffling with the thread-local RNG and stamping the
/// files with the current local time.
pub fn convert_file(input: &Path, options: &ConvertOptions) -> Result<ConversionReport> {
    let reader = BufReader::new(File::open(input)?);
    let source = input.display().to_string();
    convert_with(reader, &source, options, &mut rand::thread_rng(), &SystemClock)
}

/// Convert ARFF text from `reader` with explicit sources of randomness and time
pub fn convert_with<B, R, C>(
    reader: B,
    source: &str,
    options: &ConvertOptions,
    rng: &mut R,
    clock: &C,
) -> Result<ConversionReport>
where
    B: BufRead,
    R: Rng + ?Sized,
    C: Clock + ?Sized,
{
    options.split.validate()?;

    let parsed = parser::read(reader, source)?;
    let relation = parsed.relation;
    let mut diagnostics = parsed.diagnostics;

    let (inputs, outputs) = relation
        .input_units()
        .zip(relation.output_units())
        .ok_or(Error::NoAttributes)?;
    let units = Units { inputs, outputs };

    let encoded = encode_relation(&relation, source)?;
    diagnostics.extend(encoded.diagnostics);

    let split = options.split.split(encoded.patterns, rng);

    let files = OutputNames::probe(&options.base);
    let generated = clock.now();
    pat::write_file(&files.train, &split.trainset, units, &generated)?;
    pat::write_file(&files.test, &split.testset, units, &generated)?;
    pat::write_file(&files.validate, &split.validateset, units, &generated)?;

    info!(
        "converted relation '{}': {} train, {} test, {} validate patterns ({} inputs, {} outputs)",
        relation.name,
        split.trainset.len(),
        split.testset.len(),
        split.validateset.len(),
        units.inputs,
        units.outputs
    );

    Ok(ConversionReport {
        relation: relation.name,
        units,
        n_train: split.trainset.len(),
        n_test: split.testset.len(),
        n_validate: split.validateset.len(),
        n_missing: encoded.n_missing,
        files,
        diagnostics,
    })
}
