use crate::attribute::Attribute;

/// One line of the `@data` section, split into its comma separated tokens
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// 1-based line number in the source file
    pub line: usize,
    pub tokens: Vec<String>,
}

/// A parsed ARFF file: relation name, column descriptions and untyped data
#[derive(Debug, Clone, Default)]
pub struct Relation {
    pub name: String,
    pub attributes: Vec<Attribute>,
    pub rows: Vec<RawRow>,
}

impl Relation {
    /// The target variable. Like in most ARFF files, the last attribute is treated as the class
    /// or regression target.
    pub fn target(&self) -> Option<&Attribute> {
        self.attributes.last()
    }

    /// number of output units in a pattern; `None` if there are no attributes
    pub fn output_units(&self) -> Option<usize> {
        self.target().map(Attribute::width)
    }

    /// total number of units in a pattern built from this relation
    pub fn pattern_width(&self) -> usize {
        self.attributes.iter().map(Attribute::width).sum()
    }

    /// number of input units in a pattern; `None` if there are no attributes
    pub fn input_units(&self) -> Option<usize> {
        self.output_units()
            .map(|outputs| self.pattern_width() - outputs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn relation(attributes: Vec<Attribute>) -> Relation {
        Relation {
            name: "test".to_owned(),
            attributes,
            rows: vec![],
        }
    }

    #[test]
    fn numeric_target() {
        let r = relation(vec![Attribute::numeric("a"), Attribute::numeric("b")]);
        assert_eq!(r.output_units(), Some(1));
        assert_eq!(r.input_units(), Some(1));
    }

    #[test]
    fn nominal_target() {
        let r = relation(vec![
            Attribute::numeric("a"),
            Attribute::nominal("b", vec!["x".to_owned(), "y".to_owned()]),
            Attribute::nominal("c", vec!["p".to_owned(), "q".to_owned(), "r".to_owned()]),
        ]);
        assert_eq!(r.pattern_width(), 6);
        assert_eq!(r.output_units(), Some(3));
        assert_eq!(r.input_units(), Some(3));
    }

    #[test]
    fn no_attributes() {
        let r = relation(vec![]);
        assert_eq!(r.target(), None);
        assert_eq!(r.output_units(), None);
        assert_eq!(r.input_units(), None);
    }
}
