//! Reader for the line-delimited JSON that `cargo test --no-run
//! --message-format=json` prints on stdout.
//!
//! Only messages carrying a `profile` object matter. Everything else (build
//! script output, diagnostics, `build-finished`) is skipped without looking
//! at its shape.

use log::trace;
use serde::Deserialize;
use serde_json::Value;

use crate::{Error, Result};

#[derive(Deserialize, Debug)]
struct Profile {
    test: bool,
}

/// Files produced by one test-profile build step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestArtifact {
    /// 1-based line of the stream the artifact was read from.
    pub line: usize,
    pub filenames: Vec<String>,
}

/// Iterates over the complete lines of `stdout`, yielding one entry per line.
///
/// The text after the last `'\n'` is dropped unparsed, so an unterminated
/// final line never reaches the JSON decoder. Lines that are not test
/// artifacts yield `Ok(None)`.
pub fn parse_stream(stdout: &str) -> impl Iterator<Item = Result<Option<TestArtifact>>> + '_ {
    stdout
        .rsplit_once('\n')
        .map(|(body, _)| body)
        .into_iter()
        .flat_map(|body| body.split('\n'))
        .enumerate()
        .map(|(i, text)| parse_line(i + 1, text))
}

/// Decodes one build message.
pub fn parse_line(line: usize, text: &str) -> Result<Option<TestArtifact>> {
    let value: Value = serde_json::from_str(text).map_err(|source| Error::Json { line, source })?;

    let Value::Object(mut message) = value else {
        return Err(Error::NotAnObject { line });
    };

    let Some(profile) = message.remove("profile") else {
        trace!("line {line}: no profile, skipped");
        return Ok(None);
    };

    let profile: Profile =
        serde_json::from_value(profile).map_err(|source| Error::Profile { line, source })?;
    if !profile.test {
        trace!("line {line}: not a test profile, skipped");
        return Ok(None);
    }

    let filenames = message
        .remove("filenames")
        .ok_or(Error::Filenames { line })?;
    let filenames: Vec<String> =
        serde_json::from_value(filenames).map_err(|_| Error::Filenames { line })?;

    Ok(Some(TestArtifact { line, filenames }))
}
