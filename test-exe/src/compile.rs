use std::process::{Command, ExitStatus};

use anyhow::Result;
use log::debug;

use crate::{project::Project, shell::Shell as _};

/// Output of `cargo test --no-run --message-format=json`.
///
/// A failed build still carries whatever messages cargo printed before it
/// gave up.
pub struct Compile {
    pub stdout: String,
    pub status: ExitStatus,
}

impl Compile {
    pub fn run(project: &Project) -> Result<Self> {
        let out = Self::command(project).capture()?;
        debug!(
            "build stream: {} lines, {}",
            out.stdout.lines().count(),
            out.status
        );
        Ok(Self {
            stdout: out.stdout,
            status: out.status,
        })
    }

    pub fn success(&self) -> bool {
        self.status.success()
    }

    fn command(project: &Project) -> Command {
        let build = &project.config.build;
        let mut cmd = Command::new(&build.cargo);
        cmd.args(build.cargo_args());
        cmd
    }
}

#[cfg(test)]
mod test {
    use std::ffi::OsStr;

    use super::*;

    #[test]
    fn test_command() {
        let mut project = Project::new(None, "out.exe").unwrap();
        project.config.build.package = Some("sdf".into());

        let cmd = Compile::command(&project);
        assert_eq!(cmd.get_program(), OsStr::new("cargo"));
        let args: Vec<_> = cmd.get_args().collect();
        assert_eq!(
            args,
            ["test", "--no-run", "--message-format=json", "-p", "sdf"].map(OsStr::new)
        );
    }

    #[test]
    fn test_toolchain_missing() {
        let mut project = Project::new(None, "out.exe").unwrap();
        project.config.build.cargo = "test-exe-no-such-cargo".into();

        assert!(Compile::run(&project).is_err());
    }
}
