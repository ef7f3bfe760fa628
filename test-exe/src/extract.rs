use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use byte_unit::Byte;
use log::{debug, info, warn};
use test_exe_build::{parse_stream, Destination};

/// One file copied out of the build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Copied {
    pub from: PathBuf,
    pub to: PathBuf,
    pub size: u64,
}

#[derive(Debug, Default)]
pub struct Extract {
    pub copied: Vec<Copied>,
}

impl Extract {
    /// Walks the build stream in order, copying each test artifact file as
    /// soon as its line is read.
    ///
    /// Stops at the first bad line; files copied before it stay in place.
    pub fn run(stdout: &str, dest: &Destination) -> Result<Self> {
        let mut extract = Self::default();

        for message in parse_stream(stdout) {
            let Some(artifact) = message? else {
                continue;
            };
            debug!("line {}: {} test files", artifact.line, artifact.filenames.len());

            for filename in &artifact.filenames {
                let to = dest.route(filename);
                let copied = Copied {
                    from: filename.into(),
                    to: to.to_path_buf(),
                    size: copy(Path::new(filename), to)?,
                };
                info!(
                    "{} -> {} ({:#})",
                    copied.from.display(),
                    copied.to.display(),
                    Byte::from_u64(copied.size)
                );
                extract.copied.push(copied);
            }
        }

        if extract.copied.is_empty() {
            warn!("no test artifacts in build output");
        }

        Ok(extract)
    }
}

fn copy(from: &Path, to: &Path) -> Result<u64> {
    fs::copy(from, to)
        .with_context(|| format!("failed to copy {} to {}", from.display(), to.display()))
}
