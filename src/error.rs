use std::{io, path::PathBuf};

use thiserror::Error;

/// Failures while provisioning the stopword list or lexicon.
///
/// Every variant is a startup error. Once a [`crate::TweetNormalizer`] exists,
/// cleaning and lemmatizing cannot fail.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("wordnet directory {} is missing {file}", .dir.display())]
    MissingFile { dir: PathBuf, file: &'static str },

    #[error("{} contains no entries", .0.display())]
    Empty(PathBuf),
}

impl ResourceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ResourceError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_resource() {
        let err = ResourceError::MissingFile {
            dir: PathBuf::from("/usr/share/wordnet"),
            file: "index.noun",
        };
        assert_eq!(err.to_string(), "wordnet directory /usr/share/wordnet is missing index.noun");

        let err = ResourceError::Empty(PathBuf::from("stopwords.txt"));
        assert_eq!(err.to_string(), "stopwords.txt contains no entries");
    }
}
