use ansi_rgb::{magenta_pink, Foreground};
use anyhow::{Context, Result};
use std::process::{Command, ExitStatus, Stdio};

/// Stdout of a finished child together with how it exited.
#[derive(Debug)]
pub struct Captured {
    pub stdout: String,
    pub status: ExitStatus,
}

pub trait Shell {
    /// Echoes the command line, runs it to completion and returns its stdout.
    ///
    /// Stderr is inherited. Only a failure to spawn is an error here; the
    /// exit status is left to the caller.
    fn capture(&mut self) -> Result<Captured>;
}

impl Shell for Command {
    fn capture(&mut self) -> Result<Captured> {
        let cmd_str = command_line(self);

        eprintln!("{}", cmd_str.as_str().fg(magenta_pink()));

        let out = self
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .output()
            .with_context(|| format!("failed to spawn `{cmd_str}`"))?;

        let stdout = String::from_utf8(out.stdout)
            .with_context(|| format!("`{cmd_str}` wrote non-UTF-8 output"))?;

        Ok(Captured {
            stdout,
            status: out.status,
        })
    }
}

fn command_line(cmd: &Command) -> String {
    let mut cmd_str = cmd.get_program().to_string_lossy().to_string();

    for arg in cmd.get_args() {
        cmd_str += " ";
        cmd_str += &arg.to_string_lossy();
    }

    cmd_str
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_command_line() {
        let mut cmd = Command::new("cargo");
        cmd.args(["test", "--no-run", "--message-format=json"]);
        assert_eq!(command_line(&cmd), "cargo test --no-run --message-format=json");
    }

    #[test]
    fn test_missing_program() {
        let err = Command::new("test-exe-no-such-program").capture().unwrap_err();
        assert!(err.to_string().contains("failed to spawn"));
    }

    #[cfg(unix)]
    #[test]
    fn test_capture_stdout() {
        let out = Command::new("sh")
            .args(["-c", "printf 'one\\ntwo\\n'; echo noise >&2"])
            .capture()
            .unwrap();
        assert_eq!(out.stdout, "one\ntwo\n");
        assert!(out.status.success());
    }

    #[cfg(unix)]
    #[test]
    fn test_failed_status_keeps_stdout() {
        let out = Command::new("sh")
            .args(["-c", "echo '{}'; exit 101"])
            .capture()
            .unwrap();
        assert_eq!(out.stdout, "{}\n");
        assert_eq!(out.status.code(), Some(101));
    }
}
