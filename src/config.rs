use std::{fs, path::Path};

use log::{info, warn};
use serde::{Deserialize, Serialize};

/// Where the normalizer gets its resources from.
///
/// Every field is optional; an empty config means the built-in English
/// stopword list and lexicon.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// A WordNet `dict/` directory to use instead of the built-in lexicon.
    pub wordnet_dir: Option<String>,
    /// A stopword file (one word per line) to use instead of NLTK's list.
    pub stopwords_file: Option<String>,
    /// Added on top of whichever stopword list is in use.
    pub extra_stopwords: Vec<String>,
}

/// Reads `path` as JSON, falling back to [`Config::default`] when the file is
/// missing, unreadable or malformed.
pub fn load_config<P: AsRef<Path>>(path: P) -> Config {
    let path = path.as_ref();
    if !path.exists() {
        info!("{} not found, using default configuration", path.display());
        return Config::default();
    }

    match fs::read_to_string(path) {
        Ok(contents) => match serde_json::from_str(&contents) {
            Ok(config) => {
                info!("loaded configuration from {}", path.display());
                config
            }
            Err(e) => {
                warn!("error parsing {}: {}, using default configuration", path.display(), e);
                Config::default()
            }
        },
        Err(e) => {
            warn!("error reading {}: {}, using default configuration", path.display(), e);
            Config::default()
        }
    }
}
