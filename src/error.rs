//! Error taxonomy. Narrow by design: generation itself is pure and
//! infallible for a well-formed schema, so everything here belongs to the
//! collaborators around the core (loading, validation, emission). None of
//! these are retryable — each is a deterministic function of the input.

use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{path}: invalid schema document at JSON path {json_path}")]
    SchemaParse {
        path: PathBuf,
        json_path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("duplicate schema name `{name}` in {path}")]
    DuplicateSchema { name: String, path: PathBuf },

    #[error(
        "schema `{schema}`: fields `{first}` and `{second}` both sanitize to \
         accessor fragment `{fragment}`"
    )]
    FragmentCollision {
        schema: String,
        fragment: String,
        first: String,
        second: String,
    },

    #[error("invalid glob pattern `{pattern}`")]
    GlobPattern {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("glob pattern matched no files: {pattern}")]
    GlobEmpty { pattern: String },

    #[error("failed to write {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
