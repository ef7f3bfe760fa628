mod compile;
mod extract;
mod logger;
mod project;
mod shell;

use anyhow::Result;
use clap::*;
use log::debug;
use project::Project;

/// Builds the crate's tests without running them and copies the test
/// executable to DEST, and its debug symbols next to it as a `.pdb`.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Project config, defaults to `.test-exe.toml` when present
    #[arg(short, long)]
    config: Option<String>,
    /// Destination path, must end with `.exe`
    dest: String,
}

fn main() -> Result<()> {
    let args = Cli::parse();

    let project = Project::new(args.config.as_deref(), &args.dest)?;
    logger::init(project.config.log_level.to_level_filter());
    if let Some(path) = &project.config_path {
        debug!("using config {}", path.display());
    }

    let extract = project.extract()?;
    debug!("{} files copied", extract.copied.len());

    Ok(())
}
