use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias for the library [Result](std::result::Result) type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while validating the destination or reading the build stream.
#[derive(Error, Debug)]
pub enum Error {
    /// The destination does not carry the executable suffix.
    #[error("destination `{}` must end with `.exe`", .0.display())]
    Destination(PathBuf),

    /// A line of the build stream is not valid JSON.
    #[error("line {line}: malformed build message: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A line parsed as JSON but is not an object.
    #[error("line {line}: build message is not a JSON object")]
    NotAnObject { line: usize },

    /// `profile` is present but has no boolean `test` field.
    #[error("line {line}: invalid `profile`: {source}")]
    Profile {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A test-profile message without a usable `filenames` list.
    #[error("line {line}: test artifact has no valid `filenames`")]
    Filenames { line: usize },
}
