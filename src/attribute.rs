//! Column descriptions of an ARFF relation

/// The type of a column
#[derive(Debug, Clone, PartialEq)]
pub enum AttributeKind {
    /// `real` or `integer` columns; both are read as `f64`.
    Numeric,

    /// Columns with a declared set of legal values. The position of a value in the set is its
    /// bit index in the one-hot encoding.
    Nominal(Vec<String>),
}

/// A single column of a relation
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    name: String,
    kind: AttributeKind,
}

impl Attribute {
    pub fn numeric<S: Into<String>>(name: S) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Numeric,
        }
    }

    pub fn nominal<S: Into<String>>(name: S, values: Vec<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeKind::Nominal(values),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> &AttributeKind {
        &self.kind
    }

    pub fn is_numeric(&self) -> bool {
        self.kind == AttributeKind::Numeric
    }

    /// declared values of a nominal attribute, or `None` for numeric attributes
    pub fn value_set(&self) -> Option<&[String]> {
        match self.kind {
            AttributeKind::Numeric => None,
            AttributeKind::Nominal(ref values) => Some(values),
        }
    }

    /// bit index of `value` in the one-hot encoding
    pub fn index_of(&self, value: &str) -> Option<usize> {
        self.value_set()
            .and_then(|values| values.iter().position(|v| v == value))
    }

    /// number of pattern units this attribute expands to
    pub fn width(&self) -> usize {
        match self.kind {
            AttributeKind::Numeric => 1,
            AttributeKind::Nominal(ref values) => values.len(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colors() -> Attribute {
        Attribute::nominal(
            "color",
            vec!["red".to_owned(), "green".to_owned(), "blue".to_owned()],
        )
    }

    #[test]
    fn nominal_lookup() {
        let a = colors();
        assert!(!a.is_numeric());
        assert_eq!(a.index_of("red"), Some(0));
        assert_eq!(a.index_of("blue"), Some(2));
        assert_eq!(a.index_of("Blue"), None);
        assert_eq!(a.width(), 3);
    }

    #[test]
    fn numeric_has_no_values() {
        let a = Attribute::numeric("x");
        assert!(a.is_numeric());
        assert_eq!(a.value_set(), None);
        assert_eq!(a.index_of("1.0"), None);
        assert_eq!(a.width(), 1);
    }

    #[test]
    fn value_sets_are_not_shared() {
        let a = Attribute::nominal("a", vec![]);
        let b = colors();
        assert_eq!(a.value_set().map(|v| v.len()), Some(0));
        assert_eq!(b.value_set().map(|v| v.len()), Some(3));
    }
}
