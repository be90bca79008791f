use crate::{
    install::{self, InstallError},
    preview::preview_as_tree,
    scaffold::{self, ScaffoldError},
    source::{SourceError, TemplateSource},
    transactions::Transaction,
    vfs::OsFilesystem,
};
use colored::Colorize;

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum CreateAppError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Source(#[from] SourceError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scaffold(#[from] ScaffoldError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Install(#[from] InstallError),

    #[error("unable to resolve the current working directory")]
    #[diagnostic(code(create_hgraph_app::cwd))]
    CurrentDir(#[source] std::io::Error),
}

#[derive(Debug)]
pub struct CreateOptions {
    /// Name of the project, also the directory created under the current
    /// working directory.
    pub name: String,
    /// Template source: local directory or git reference.
    pub template: String,
    /// Preview the plan without writing anything.
    pub dry_run: bool,
    /// Skip the `npm install` step.
    pub skip_install: bool,
}

/// Creates a new project from the template source.
///
/// The destination is `<cwd>/<name>` and must not exist. Every write happens
/// under a rollback transaction that is committed only after `npm install`
/// succeeds (or is skipped), so any failure leaves no destination behind.
///
/// # Errors
///
/// Returns a [`CreateAppError`] if:
///
/// - The template source cannot be resolved or cloned.
/// - The destination directory already exists.
/// - The template cannot be staged or its `package.json` configured.
/// - A directory or file cannot be created or written to.
/// - `npm install` cannot be launched or exits non-zero.
pub fn create_app(opts: &CreateOptions) -> Result<(), CreateAppError> {
    let source = TemplateSource::build_from(&opts.template)?;

    let project_dir = std::env::current_dir()
        .map_err(CreateAppError::CurrentDir)?
        .join(&opts.name);

    let mut fs = OsFilesystem;

    scaffold::ensure_destination_free(&fs, &project_dir)?;

    println!("\nCreating new project: {}\n", opts.name.bold());

    let vfs = scaffold::plan(&fs, source.template_dir(), &opts.name)?;

    if opts.dry_run {
        preview_as_tree(&vfs, &project_dir);
        return Ok(());
    }

    println!("Copying template files...");

    let mut trx = Transaction::new();

    scaffold::apply(&mut fs, &vfs, &project_dir, &mut trx)?;

    if !opts.skip_install {
        println!("Installing dependencies...\n");

        install::install_dependencies(&project_dir)?;
    }

    trx.commit();

    println!("\n{} Created {}\n", "Success!".green().bold(), opts.name);
    println!("To get started:\n");
    println!("  cd {}", opts.name);
    println!("  npm run dev\n");
    println!("Documentation: https://docs.hgraph.io");
    println!("API Key: https://hgraph.io\n");

    Ok(())
}
