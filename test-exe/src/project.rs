use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{bail, Context, Result};
use test_exe_build::{Destination, ProjectConfig};

use crate::{compile::Compile, extract::Extract};

pub const DEFAULT_CONFIG: &str = ".test-exe.toml";

pub struct Project {
    pub config_path: Option<PathBuf>,
    pub config: ProjectConfig,
    pub dest: Destination,
}

impl Project {
    /// Validates `dest` before anything else, then loads the config.
    ///
    /// An explicit `config` must exist. The default file is optional and is
    /// never created.
    pub fn new(config: Option<&str>, dest: &str) -> Result<Self> {
        let dest = Destination::new(dest)?;

        let (config_path, config) = match config {
            Some(path) => {
                let path = PathBuf::from(path);
                let config = load_config(&path)?;
                (Some(path), config)
            }
            None if Path::new(DEFAULT_CONFIG).is_file() => {
                let path = PathBuf::from(DEFAULT_CONFIG);
                let config = load_config(&path)?;
                (Some(path), config)
            }
            None => (None, ProjectConfig::default()),
        };

        Ok(Self {
            config_path,
            config,
            dest,
        })
    }

    /// Builds, then copies every test artifact to the destination.
    ///
    /// Artifacts reported by a build that later fails are still copied
    /// before the failure is returned.
    pub fn extract(&self) -> Result<Extract> {
        let compile = Compile::run(self)?;
        let extract = Extract::run(&compile.stdout, &self.dest)?;

        if !compile.success() {
            bail!(
                "`{}` failed: {}",
                self.config.build.cargo,
                compile.status
            );
        }

        Ok(extract)
    }
}

fn load_config(path: &Path) -> Result<ProjectConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: ProjectConfig = content
        .parse()
        .with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}
