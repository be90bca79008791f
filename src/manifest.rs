use indexmap::IndexMap;
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Version every freshly scaffolded project starts at, regardless of the
/// template's own version.
pub const INITIAL_VERSION: &str = "0.1.0";

/// Fields that only make sense for the published template package itself.
const PACKAGING_FIELDS: &[&str] = &["bin", "files"];

#[derive(Debug, Error, Diagnostic)]
pub enum ManifestError {
    #[error("the template has no package.json to configure")]
    #[diagnostic(
        code(create_hgraph_app::manifest::missing),
        help("Make sure the template source contains a package.json at its root.")
    )]
    Missing,

    #[error("unable to parse package.json")]
    #[diagnostic(code(create_hgraph_app::manifest::parse), help("Review the template's package.json"))]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("unable to serialize package.json")]
    #[diagnostic(code(create_hgraph_app::manifest::serialize))]
    Serialize {
        #[source]
        source: serde_json::Error,
    },
}

/// A `package.json` held as an ordered key/value mapping so that unknown
/// keys survive a read/patch/write round trip in their original order.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Manifest(pub IndexMap<String, Value>);

impl Manifest {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, ManifestError> {
        serde_json::from_slice(bytes).map_err(|error| ManifestError::Parse { source: error })
    }

    /// Rewrites the manifest for a freshly scaffolded project: `name` and
    /// `version` are overwritten in place and the packaging-only fields of
    /// the published template are dropped.
    pub fn configure_for(&mut self, project_name: &str) {
        self.0.insert(
            "name".to_string(),
            Value::String(project_name.to_string()),
        );
        self.0.insert(
            "version".to_string(),
            Value::String(INITIAL_VERSION.to_string()),
        );

        for field in PACKAGING_FIELDS {
            self.0.shift_remove(*field);
        }
    }

    /// Serializes with two-space indentation and a trailing newline.
    pub fn to_bytes(&self) -> Result<Vec<u8>, ManifestError> {
        let mut bytes = serde_json::to_vec_pretty(self)
            .map_err(|error| ManifestError::Serialize { source: error })?;

        bytes.push(b'\n');

        Ok(bytes)
    }
}
