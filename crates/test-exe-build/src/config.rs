use std::{fmt::Display, str::FromStr};

use log::LevelFilter;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ProjectConfig {
    pub log_level: LogLevel,
    pub build: Build,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    pub fn to_level_filter(self) -> LevelFilter {
        match self {
            LogLevel::Trace => LevelFilter::Trace,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Error => LevelFilter::Error,
        }
    }
}

/// How the test build is invoked.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Build {
    pub cargo: String,
    pub manifest_path: Option<String>,
    pub package: Option<String>,
    pub features: Vec<String>,
    pub release: bool,
    pub args: Vec<String>,
}

impl Default for Build {
    fn default() -> Self {
        Self {
            cargo: "cargo".into(),
            manifest_path: None,
            package: None,
            features: Vec::new(),
            release: false,
            args: Vec::new(),
        }
    }
}

impl Build {
    /// Arguments for the toolchain, starting with the fixed
    /// `test --no-run --message-format=json` prefix.
    pub fn cargo_args(&self) -> Vec<String> {
        let mut args: Vec<String> = ["test", "--no-run", "--message-format=json"]
            .into_iter()
            .map(String::from)
            .collect();

        if let Some(manifest) = &self.manifest_path {
            args.push("--manifest-path".into());
            args.push(manifest.clone());
        }

        if let Some(package) = &self.package {
            args.push("-p".into());
            args.push(package.clone());
        }

        if !self.features.is_empty() {
            args.push("--features".into());
            args.push(self.features.join(","));
        }

        if self.release {
            args.push("--release".into());
        }

        args.extend(self.args.iter().cloned());
        args
    }
}

impl Display for ProjectConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = toml::to_string(self).map_err(|_| std::fmt::Error)?;
        write!(f, "{s}")
    }
}

impl FromStr for ProjectConfig {
    type Err = toml::de::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        toml::from_str(s)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_default_args() {
        let config = ProjectConfig::default();
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(
            config.build.cargo_args(),
            vec!["test", "--no-run", "--message-format=json"]
        );
    }

    #[test]
    fn test_full_args() {
        let config: ProjectConfig = r#"
log_level = "Debug"

[build]
cargo = "cargo-nightly"
manifest_path = "sdf/Cargo.toml"
package = "sdf"
features = ["simd", "serde"]
release = true
args = ["--lib"]
"#
        .parse()
        .unwrap();

        assert_eq!(config.log_level.to_level_filter(), LevelFilter::Debug);
        assert_eq!(config.build.cargo, "cargo-nightly");
        assert_eq!(
            config.build.cargo_args(),
            vec![
                "test",
                "--no-run",
                "--message-format=json",
                "--manifest-path",
                "sdf/Cargo.toml",
                "-p",
                "sdf",
                "--features",
                "simd,serde",
                "--release",
                "--lib",
            ]
        );
    }

    #[test]
    fn test_partial_and_display() {
        let config: ProjectConfig = "[build]\npackage = \"sdf\"\n".parse().unwrap();
        assert_eq!(config.build.cargo, "cargo");
        assert_eq!(config.build.package.as_deref(), Some("sdf"));

        let back: ProjectConfig = config.to_string().parse().unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_unknown_level() {
        assert!("log_level = \"Loud\"".parse::<ProjectConfig>().is_err());
    }
}
