//! Turn raw ARFF rows into numeric patterns.
//!
//! Numeric columns pass through unchanged, nominal columns are expanded into one-hot bit
//! vectors, and rows with a missing datum (`?`) are dropped entirely.

use std::fmt;

use crate::attribute::{Attribute, AttributeKind};
use crate::dataset::{RawRow, Relation};
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::{Error, Result};

pub const MISSING_DATUM: &str = "?";

/// One value of a pattern
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    /// a numeric attribute, passed through
    Real(f64),

    /// one bit of a one-hot encoded nominal attribute
    Bit(bool),
}

impl Unit {
    pub fn value(&self) -> f64 {
        match *self {
            Unit::Real(v) => v,
            Unit::Bit(true) => 1.0,
            Unit::Bit(false) => 0.0,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Unit::Real(v) => write!(f, "{:?}", v),
            Unit::Bit(b) => write!(f, "{}", b as u8),
        }
    }
}

/// A single pattern: input units followed by output units
pub type Pattern = Vec<Unit>;

#[derive(Debug)]
pub struct Encoded {
    /// patterns in the order of their source rows
    pub patterns: Vec<Pattern>,

    /// number of rows dropped because of a missing datum
    pub n_missing: usize,

    pub diagnostics: Vec<Diagnostic>,
}

/// Encode all data rows of a relation
pub fn encode_relation(relation: &Relation, source: &str) -> Result<Encoded> {
    encode(&relation.attributes, &relation.rows, source)
}

/// Encode `rows` according to `attributes`.
///
/// Fails only if a numeric column holds something that is not a number. Unknown nominal values
/// and rows of the wrong width are reported as diagnostics.
pub fn encode(attributes: &[Attribute], rows: &[RawRow], source: &str) -> Result<Encoded> {
    let mut diagnostics = Diagnostics::for_source(source);
    let mut patterns = Vec::with_capacity(rows.len());
    let mut n_missing = 0;

    for row in rows {
        if row.tokens.len() < attributes.len() {
            diagnostics.report(
                Diagnostic::new(
                    DiagnosticKind::RowWidth,
                    format!(
                        "row has {} values but {} attributes are declared; row dropped",
                        row.tokens.len(),
                        attributes.len()
                    ),
                )
                .at_line(row.line),
            );
            continue;
        }

        if row.tokens.len() > attributes.len() {
            diagnostics.report(
                Diagnostic::new(
                    DiagnosticKind::RowWidth,
                    format!(
                        "row has {} values but {} attributes are declared; extra values ignored",
                        row.tokens.len(),
                        attributes.len()
                    ),
                )
                .at_line(row.line),
            );
        }

        match encode_row(attributes, row, &mut diagnostics)? {
            Some(pattern) => patterns.push(pattern),
            None => n_missing += 1,
        }
    }

    debug!(
        "encoded {} of {} rows ({} with missing values)",
        patterns.len(),
        rows.len(),
        n_missing
    );

    Ok(Encoded {
        patterns,
        n_missing,
        diagnostics: diagnostics.into_vec(),
    })
}

/// Encode a single row; `None` if the row contains a missing datum.
fn encode_row(
    attributes: &[Attribute],
    row: &RawRow,
    diagnostics: &mut Diagnostics,
) -> Result<Option<Pattern>> {
    let mut pattern = Vec::new();
    let mut missing = false;

    for (attr, token) in attributes.iter().zip(&row.tokens) {
        if token == MISSING_DATUM {
            missing = true;
        }
        // the row is dropped, later columns are not looked at
        if missing {
            continue;
        }

        match *attr.kind() {
            AttributeKind::Numeric => {
                let value = token.parse::<f64>().map_err(|_| Error::InvalidNumber {
                    line: row.line,
                    attribute: attr.name().to_owned(),
                    token: token.clone(),
                })?;
                pattern.push(Unit::Real(value));
            }
            AttributeKind::Nominal(ref values) => {
                let start = pattern.len();
                pattern.resize(start + values.len(), Unit::Bit(false));
                match attr.index_of(token) {
                    Some(bit) => pattern[start + bit] = Unit::Bit(true),
                    None => diagnostics.report(
                        Diagnostic::new(
                            DiagnosticKind::Encoding,
                            format!(
                                "cannot map value '{}' of nominal attribute '{}' to a binary string",
                                token,
                                attr.name()
                            ),
                        )
                        .at_line(row.line),
                    ),
                }
            }
        }
    }

    if missing {
        Ok(None)
    } else {
        Ok(Some(pattern))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_str;

    fn encode_text(text: &str) -> Result<Encoded> {
        let parsed = parse_str(text, "test.arff");
        encode_relation(&parsed.relation, "test.arff")
    }

    fn values(enc: &Encoded) -> Vec<Vec<f64>> {
        enc.patterns
            .iter()
            .map(|p| p.iter().map(Unit::value).collect())
            .collect()
    }

    #[test]
    fn mixed_attributes() {
        let enc = encode_text(
            "@relation test\n@attribute a real\n@attribute b {x,y}\n@data\n1.0,x\n2.0,y\n?,x\n",
        )
        .unwrap();

        assert_eq!(
            enc.patterns,
            vec![
                vec![Unit::Real(1.0), Unit::Bit(true), Unit::Bit(false)],
                vec![Unit::Real(2.0), Unit::Bit(false), Unit::Bit(true)],
            ]
        );
        assert_eq!(enc.n_missing, 1);
        assert!(enc.diagnostics.is_empty());
    }

    #[test]
    fn missing_anywhere_drops_row() {
        let enc = encode_text(
            "@relation r\n@attribute a real\n@attribute b {x,y}\n@attribute c real\n@data\n\
             1,x,?\n1,?,2\n?,?,?\n3,y,4\n",
        )
        .unwrap();

        assert_eq!(values(&enc), vec![vec![3.0, 0.0, 1.0, 4.0]]);
        assert_eq!(enc.n_missing, 3);
    }

    #[test]
    fn columns_after_missing_are_not_parsed() {
        let enc = encode_text(
            "@relation r\n@attribute a real\n@attribute b real\n@data\n?,abc\n1,2\n",
        )
        .unwrap();

        assert_eq!(values(&enc), vec![vec![1.0, 2.0]]);
        assert_eq!(enc.n_missing, 1);
        assert!(enc.diagnostics.is_empty());
    }

    #[test]
    fn columns_after_missing_are_not_reported() {
        let enc = encode_text(
            "@relation r\n@attribute a real\n@attribute b {x,y}\n@data\n?,zzz\n3,y\n",
        )
        .unwrap();

        assert_eq!(values(&enc), vec![vec![3.0, 0.0, 1.0]]);
        assert!(enc.diagnostics.is_empty());
    }

    #[test]
    fn bits_are_written_as_integers() {
        let units = vec![
            Unit::Real(1.0),
            Unit::Bit(true),
            Unit::Bit(false),
            Unit::Real(2.5),
        ];
        let rendered: Vec<String> = units.iter().map(Unit::to_string).collect();
        assert_eq!(rendered, vec!["1.0", "1", "0", "2.5"]);
    }

    #[test]
    fn one_hot_has_single_bit() {
        let enc = encode_text(
            "@relation r\n@attribute c {a,b,c,d}\n@data\na\nb\nc\nd\n",
        )
        .unwrap();

        for (i, p) in enc.patterns.iter().enumerate() {
            assert_eq!(p.len(), 4);
            assert_eq!(p.iter().filter(|&&u| u == Unit::Bit(true)).count(), 1);
            assert_eq!(p[i], Unit::Bit(true));
        }
    }

    #[test]
    fn unknown_nominal_is_reported_and_zeroed() {
        let enc = encode_text("@relation r\n@attribute a real\n@attribute c {a,b}\n@data\n5,z\n")
            .unwrap();

        assert_eq!(values(&enc), vec![vec![5.0, 0.0, 0.0]]);
        assert_eq!(enc.diagnostics.len(), 1);
        assert_eq!(enc.diagnostics[0].kind, DiagnosticKind::Encoding);
        assert_eq!(enc.diagnostics[0].line, Some(5));
    }

    #[test]
    fn invalid_number_is_fatal() {
        let err = encode_text("@relation r\n@attribute a real\n@data\n1\nabc\n").unwrap_err();
        match err {
            Error::InvalidNumber {
                line,
                ref attribute,
                ref token,
            } => {
                assert_eq!(line, 5);
                assert_eq!(attribute, "a");
                assert_eq!(token, "abc");
            }
            _ => panic!("unexpected error {:?}", err),
        }
    }

    #[test]
    fn row_width() {
        let enc = encode_text(
            "@relation r\n@attribute a real\n@attribute b real\n@data\n1\n1,2,3\n4,5\n",
        )
        .unwrap();

        assert_eq!(values(&enc), vec![vec![1.0, 2.0], vec![4.0, 5.0]]);
        assert_eq!(enc.diagnostics.len(), 2);
        assert!(enc
            .diagnostics
            .iter()
            .all(|d| d.kind == DiagnosticKind::RowWidth));
    }

    #[test]
    fn string_attribute_has_no_units() {
        let enc = encode_text(
            "@relation r\n@attribute note string\n@attribute a real\n@data\nhello,1\n",
        )
        .unwrap();

        assert_eq!(values(&enc), vec![vec![1.0]]);
        assert_eq!(enc.diagnostics.len(), 1);
    }
}
