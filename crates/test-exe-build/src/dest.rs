use std::path::{Path, PathBuf};

use crate::{Error, Result};

pub const EXE_SUFFIX: &str = ".exe";
pub const PDB_SUFFIX: &str = ".pdb";

/// Where the test executable and its debug symbols are copied to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    exe: PathBuf,
    pdb: PathBuf,
}

impl Destination {
    /// Validates `dest` and derives the sibling `.pdb` path from it.
    pub fn new(dest: &str) -> Result<Self> {
        let Some(pdb) = pdb_path(dest) else {
            return Err(Error::Destination(dest.into()));
        };

        Ok(Self {
            exe: PathBuf::from(dest),
            pdb: PathBuf::from(pdb),
        })
    }

    pub fn exe(&self) -> &Path {
        &self.exe
    }

    pub fn pdb(&self) -> &Path {
        &self.pdb
    }

    /// Picks the copy target for one artifact file: executables go to the
    /// destination itself, everything else to the `.pdb` sibling.
    pub fn route(&self, filename: &str) -> &Path {
        if filename.ends_with(EXE_SUFFIX) {
            &self.exe
        } else {
            &self.pdb
        }
    }
}

/// Swaps the trailing `.exe` of `dest` for `.pdb`, or `None` when `dest`
/// does not end in `.exe`.
pub fn pdb_path(dest: &str) -> Option<String> {
    let stem = dest.strip_suffix(EXE_SUFFIX)?;
    Some(format!("{stem}{PDB_SUFFIX}"))
}
