//! Recoverable problems found while reading or encoding a data set.
//!
//! The converter never gives up on a whole file because of one bad line. Instead each problem
//! is recorded as a [`Diagnostic`], logged, and handed back to the caller next to the result.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// problems with the header, such as a second `@relation` line
    Structural,

    /// a nominal value that is not part of the declared value set
    Encoding,

    /// a data row with a different number of tokens than there are attributes
    RowWidth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub message: String,
    pub line: Option<usize>,
    pub source: Option<String>,
}

impl Diagnostic {
    pub fn new<S: Into<String>>(kind: DiagnosticKind, message: S) -> Self {
        Diagnostic {
            kind,
            message: message.into(),
            line: None,
            source: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn in_file<S: Into<String>>(mut self, source: S) -> Self {
        self.source = Some(source.into());
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Error: {}", self.message)?;
        if let Some(line) = self.line {
            write!(f, " at line {}", line)?;
        }
        if let Some(ref source) = self.source {
            write!(f, " in file '{}'", source)?;
        }
        Ok(())
    }
}

/// Collects diagnostics and logs each one as it is recorded
#[derive(Debug, Default)]
pub struct Diagnostics {
    source: Option<String>,
    entries: Vec<Diagnostic>,
}

impl Diagnostics {
    /// attach `source` to every diagnostic recorded from now on
    pub fn for_source<S: Into<String>>(source: S) -> Self {
        Diagnostics {
            source: Some(source.into()),
            entries: Vec::new(),
        }
    }

    pub fn report(&mut self, mut diagnostic: Diagnostic) {
        if diagnostic.source.is_none() {
            diagnostic.source = self.source.clone();
        }
        warn!("{}", diagnostic);
        self.entries.push(diagnostic);
    }

    pub fn into_vec(self) -> Vec<Diagnostic> {
        self.entries
    }
}

#[test]
fn display_matches_stderr_format() {
    let d = Diagnostic::new(DiagnosticKind::Structural, "@relation found twice")
        .at_line(3)
        .in_file("iris.arff");
    assert_eq!(
        d.to_string(),
        "Error: @relation found twice at line 3 in file 'iris.arff'"
    );

    let d = Diagnostic::new(DiagnosticKind::Encoding, "unknown value");
    assert_eq!(d.to_string(), "Error: unknown value");
}

#[test]
fn source_is_filled_in() {
    let mut diags = Diagnostics::for_source("a.arff");
    diags.report(Diagnostic::new(DiagnosticKind::RowWidth, "short row").at_line(9));
    diags.report(Diagnostic::new(DiagnosticKind::RowWidth, "short row").in_file("b.arff"));
    let diags = diags.into_vec();
    assert_eq!(diags[0].source.as_ref().map(String::as_str), Some("a.arff"));
    assert_eq!(diags[1].source.as_ref().map(String::as_str), Some("b.arff"));
}
