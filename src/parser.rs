//! Line oriented ARFF reader.
//!
//! The reader is deliberately lenient: header labels are matched case-insensitively, unknown
//! lines are skipped, and problems in the header are reported as diagnostics while parsing
//! carries on with whatever has been read so far.

use std::io::{self, BufRead};
use std::result::Result as StdResult;

use crate::attribute::Attribute;
use crate::dataset::{RawRow, Relation};
use crate::diagnostic::{Diagnostic, DiagnosticKind, Diagnostics};
use crate::error::Result;

const RELATION_LABEL: &str = "@relation";
const ATTRIBUTE_LABEL: &str = "@attribute";
const DATA_LABEL: &str = "@data";

const NUMERIC_DATATYPES: [&str; 2] = ["real", "integer"];

const COMMENT: char = '%';

/// Result of reading an ARFF file
#[derive(Debug)]
pub struct Parsed {
    pub relation: Relation,
    pub diagnostics: Vec<Diagnostic>,
}

/// Read a whole ARFF file into memory and parse it. `source` names the file in diagnostics.
pub fn read<R: BufRead>(reader: R, source: &str) -> Result<Parsed> {
    let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;
    Ok(parse_lines(lines, source))
}

pub fn parse_str(text: &str, source: &str) -> Parsed {
    parse_lines(text.lines(), source)
}

pub fn parse_lines<I, S>(lines: I, source: &str) -> Parsed
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut diagnostics = Diagnostics::for_source(source);
    let mut relation = Relation::default();
    let mut found_relation = false;
    let mut in_data = false;

    for (i, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line_number = i + 1;

        if in_data {
            if let Some(tokens) = read_data_line(line) {
                relation.rows.push(RawRow {
                    line: line_number,
                    tokens,
                });
            }
            continue;
        }

        let outcome = if has_label(line, RELATION_LABEL) {
            if found_relation {
                Err(Diagnostic::new(
                    DiagnosticKind::Structural,
                    "@relation found twice",
                ))
            } else {
                read_relation(line).map(|name| {
                    relation.name = name;
                    found_relation = true;
                })
            }
        } else if has_label(line, ATTRIBUTE_LABEL) {
            read_attribute(line).map(|attr| relation.attributes.push(attr))
        } else {
            if has_label(line, DATA_LABEL) {
                in_data = true;
            }
            Ok(())
        };

        if let Err(d) = outcome {
            diagnostics.report(d.at_line(line_number));
        }
    }

    info!(
        "read relation '{}' from {}: {} attributes, {} data rows",
        relation.name,
        source,
        relation.attributes.len(),
        relation.rows.len()
    );

    Parsed {
        relation,
        diagnostics: diagnostics.into_vec(),
    }
}

fn has_label(line: &str, label: &str) -> bool {
    line.get(..label.len())
        .map_or(false, |prefix| prefix.eq_ignore_ascii_case(label))
}

/// Parse the relation line of an ARFF header and return the relation name
pub fn read_relation(line: &str) -> StdResult<String, Diagnostic> {
    if !has_label(line, RELATION_LABEL) {
        return Err(Diagnostic::new(
            DiagnosticKind::Structural,
            "@relation label expected but not found",
        ));
    }

    let name = line[RELATION_LABEL.len()..].trim();
    Ok(strip_quotes(name).to_owned())
}

/// Parse an attribute line of an ARFF header
pub fn read_attribute(line: &str) -> StdResult<Attribute, Diagnostic> {
    if !has_label(line, ATTRIBUTE_LABEL) {
        return Err(Diagnostic::new(
            DiagnosticKind::Structural,
            "@attribute label expected but not found",
        ));
    }

    let name = attribute_name(line);
    if is_numeric_declaration(line) {
        Ok(Attribute::numeric(name))
    } else {
        Ok(Attribute::nominal(name, nominal_values(line)))
    }
}

fn strip_quotes(s: &str) -> &str {
    if s.len() >= 2 && s.starts_with('\'') && s.ends_with('\'') {
        &s[1..s.len() - 1]
    } else {
        s
    }
}

fn attribute_name(line: &str) -> &str {
    let rest = line[ATTRIBUTE_LABEL.len()..].trim();
    if rest.starts_with('\'') {
        let quoted = &rest[1..];
        match quoted.find('\'') {
            Some(end) => &quoted[..end],
            None => quoted,
        }
    } else {
        rest.split_whitespace().next().unwrap_or("")
    }
}

/// Only lines ending in lower-case `real` or `integer` declare numeric columns; every other
/// datatype is read as nominal.
fn is_numeric_declaration(line: &str) -> bool {
    let line = line.trim();
    NUMERIC_DATATYPES.iter().any(|dt| line.ends_with(dt))
}

/// Values of a nominal attribute, in declaration order. Whitespace inside the braces is
/// dropped; a declaration without braces has no values.
fn nominal_values(line: &str) -> Vec<String> {
    let start = match line.find('{') {
        Some(pos) => pos,
        None => return Vec::new(),
    };

    let inner = line[start..]
        .trim()
        .trim_start_matches('{')
        .trim_end_matches('}');
    let inner: String = inner.chars().filter(|c| !c.is_whitespace()).collect();

    if inner.is_empty() {
        return Vec::new();
    }

    inner.split(',').map(str::to_owned).collect()
}

fn read_data_line(line: &str) -> Option<Vec<String>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with(COMMENT) {
        return None;
    }
    Some(line.split(',').map(|t| t.trim().to_owned()).collect())
}
