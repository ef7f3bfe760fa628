//! Shared pieces of the `test-exe` tool: destination rules, the cargo
//! build-message reader and the project config.

mod config;
mod dest;
mod error;
pub mod message;

pub use config::{Build, LogLevel, ProjectConfig};
pub use dest::{pdb_path, Destination, EXE_SUFFIX, PDB_SUFFIX};
pub use error::{Error, Result};
pub use message::{parse_stream, TestArtifact};
