use std::path::{Path, PathBuf};

const TRAIN_SUFFIX: &str = "_train.pat";
const TEST_SUFFIX: &str = "_test.pat";
const VALIDATE_SUFFIX: &str = "_validate.pat";

/// File names of the three pattern files written for one data set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub train: PathBuf,
    pub test: PathBuf,
    pub validate: PathBuf,
}

impl OutputNames {
    /// `<base>_train.pat` etc., or `<base>_<n>_train.pat` etc. if `n` is given
    pub fn numbered(base: &Path, n: Option<u32>) -> Self {
        let stem = match n {
            None => base.as_os_str().to_owned(),
            Some(n) => {
                let mut s = base.as_os_str().to_owned();
                s.push(format!("_{}", n));
                s
            }
        };

        let with_suffix = |suffix: &str| {
            let mut name = stem.clone();
            name.push(suffix);
            PathBuf::from(name)
        };

        OutputNames {
            train: with_suffix(TRAIN_SUFFIX),
            test: with_suffix(TEST_SUFFIX),
            validate: with_suffix(VALIDATE_SUFFIX),
        }
    }

    /// Find the first set of names where none of the three files exists yet, trying the plain
    /// base name first and then numbering from 2 upwards.
    ///
    /// Nothing stops another process from creating one of the files after the check; the files
    /// are later created with create-if-absent semantics, so such a race fails instead of
    /// overwriting.
    pub fn probe(base: &Path) -> Self {
        let mut names = OutputNames::numbered(base, None);
        let mut n = 2;
        while names.any_exists() {
            debug!("output files for {} already exist", names.train.display());
            names = OutputNames::numbered(base, Some(n));
            n += 1;
        }
        names
    }

    fn any_exists(&self) -> bool {
        self.iter().any(|p| p.exists())
    }

    pub fn iter(&self) -> impl Iterator<Item = &PathBuf> {
        vec![&self.train, &self.test, &self.validate].into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn plain_names() {
        let names = OutputNames::numbered(Path::new("out/iris"), None);
        assert_eq!(names.train, PathBuf::from("out/iris_train.pat"));
        assert_eq!(names.test, PathBuf::from("out/iris_test.pat"));
        assert_eq!(names.validate, PathBuf::from("out/iris_validate.pat"));
    }

    #[test]
    fn numbered_names() {
        let names = OutputNames::numbered(Path::new("iris"), Some(3));
        assert_eq!(names.train, PathBuf::from("iris_3_train.pat"));
        assert_eq!(names.validate, PathBuf::from("iris_3_validate.pat"));
    }

    #[test]
    fn free_base_is_used_as_is() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("data");
        assert_eq!(OutputNames::probe(&base), OutputNames::numbered(&base, None));
    }

    #[test]
    fn existing_files_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("data");

        fs::write(dir.path().join("data_train.pat"), "").unwrap();
        assert_eq!(
            OutputNames::probe(&base),
            OutputNames::numbered(&base, Some(2))
        );

        // any one of the three blocks a number
        fs::write(dir.path().join("data_2_validate.pat"), "").unwrap();
        assert_eq!(
            OutputNames::probe(&base),
            OutputNames::numbered(&base, Some(3))
        );
    }
}
