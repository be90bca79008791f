use miette::Diagnostic;
use std::{
    path::{Path, PathBuf},
    process::Command,
};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum InstallError {
    #[error("unable to launch `npm install` in '{path}'")]
    #[diagnostic(
        code(create_hgraph_app::install::spawn),
        help("Make sure npm is installed and on your PATH.")
    )]
    Spawn {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("`npm install` exited with {status}")]
    #[diagnostic(code(create_hgraph_app::install::failed))]
    Failed { status: std::process::ExitStatus },
}

/// Runs `npm install` inside the freshly scaffolded project, inheriting the
/// parent's stdio, and blocks until it exits.
pub fn install_dependencies(project_dir: &Path) -> Result<(), InstallError> {
    let status = Command::new("npm")
        .arg("install")
        .current_dir(project_dir)
        .status()
        .map_err(|error| InstallError::Spawn {
            path: project_dir.to_path_buf(),
            source: error,
        })?;

    if !status.success() {
        return Err(InstallError::Failed { status });
    }

    Ok(())
}
