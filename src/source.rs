use crate::errors::{FileOperation, IoError};
use git2::Repository;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error, Diagnostic)]
pub enum SourceError {
    #[error("I/O error within source domain")]
    #[diagnostic(code(create_hgraph_app::source::io))]
    Io(#[from] IoError),

    #[error("template directory '{path}' does not exist")]
    #[diagnostic(
        code(create_hgraph_app::source::template_not_found),
        help("Pass --template with a local directory or a git reference like gh:hgraph-io/nextjs-template")
    )]
    TemplateNotFound { path: PathBuf },

    #[error("unable to clone repo at '{url}': {source}")]
    #[diagnostic(
        code(create_hgraph_app::source::git_clone),
        help("Make sure the account and repository name are correct and that you are online")
    )]
    GitClone {
        url: String,
        #[source]
        source: git2::Error,
    },
}

/// Where the template files come from: either a local directory or a fresh
/// git checkout held in a temporary directory for the lifetime of the run.
#[derive(Debug)]
pub struct TemplateSource {
    root: PathBuf,
    // keeps a cloned checkout alive until scaffolding finishes
    _checkout: Option<tempfile::TempDir>,
}

impl TemplateSource {
    fn is_git(source: &str) -> bool {
        lazy_static::lazy_static! {
            static ref GIT_URL_REGEX: regex::Regex = regex::Regex::new(
                r"(?x)        # Enable extended mode
                ^(?:
                    # 1) gh:account/repo
                    gh:[^/]+/[^/]+
                    |
                    # 2) gl:account/repo
                    gl:[^/]+/[^/]+
                    |
                    # 3) git@host:account/repo.git
                    git@[A-Za-z0-9._-]+:[^/]+/[^/]+\.git
                    |
                    # 4) git+http(s)://...
                    git\+https?://.*
                )$"
            ).expect("a valid regex pattern");
        }

        GIT_URL_REGEX.is_match(source)
    }

    fn expand_git_short_url(url: &str) -> String {
        if let Some(stripped) = url.strip_prefix("gh:") {
            format!("https://github.com/{}.git", stripped)
        } else if let Some(stripped) = url.strip_prefix("gl:") {
            format!("https://gitlab.com/{}.git", stripped)
        } else if let Some(stripped) = url.strip_prefix("git+") {
            stripped.to_string()
        } else {
            url.to_string()
        }
    }

    pub fn build_from(source: &str) -> Result<Self, SourceError> {
        if TemplateSource::is_git(source) {
            let checkout = tempfile::tempdir()
                .map_err(|error| IoError::new(FileOperation::Mkdir, PathBuf::new(), error))?;

            let expanded_url = TemplateSource::expand_git_short_url(source);

            log::debug!("cloning template from {}", expanded_url);

            Repository::clone(&expanded_url, checkout.path()).map_err(|error| {
                SourceError::GitClone {
                    url: expanded_url.clone(),
                    source: error,
                }
            })?;

            Ok(TemplateSource {
                root: checkout.path().to_path_buf(),
                _checkout: Some(checkout),
            })
        } else {
            let root = PathBuf::from(source);

            if !root.is_dir() {
                return Err(SourceError::TemplateNotFound { path: root });
            }

            Ok(TemplateSource {
                root,
                _checkout: None,
            })
        }
    }

    pub fn template_dir(&self) -> &Path {
        &self.root
    }
}
