// SPDX-License-Identifier: MPL-2.0
use crate::application::port::SourceError;
use crate::domain::{Locale, Namespace};

#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// A locale bundle could not be fetched; the locale stays unloaded.
    #[error("Locale Load Error: `{locale}`: {source}")]
    LocaleLoad {
        locale: Locale,
        #[source]
        source: SourceError,
    },

    /// One or more namespaces of a batch failed. `source` is the first
    /// failure; namespaces not listed in `failed` were merged.
    #[error("Namespace Load Error: [{}]: {source}", join_namespaces(.failed))]
    NamespaceLoad {
        failed: Vec<Namespace>,
        #[source]
        source: SourceError,
    },

    /// A non-default locale was activated before its bundle was loaded.
    #[error("Locale Not Loaded: `{0}`")]
    LocaleNotLoaded(Locale),

    #[error("I/O Error: {0}")]
    Io(String),

    #[error("Config Error: {0}")]
    Config(String),
}

fn join_namespaces(namespaces: &[Namespace]) -> String {
    namespaces
        .iter()
        .map(|ns| ns.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
