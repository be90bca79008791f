//! Scaffolds a new Hedera Next.js application from the hgraph template.
//!
//! The pipeline is: resolve the template source (local directory or git
//! reference), stage a copy plan of the allow-listed template paths into a
//! [`vfs::VirtualFS`], configure the staged `package.json`, stage the
//! generated `.env.local` / `.gitignore` / `README.md`, then apply the plan
//! under a rollback transaction and run `npm install`. A failure anywhere
//! removes the destination directory wholesale.

pub mod api;
pub mod assets;
pub mod errors;
pub mod install;
pub mod manifest;
pub mod preview;
pub mod scaffold;
pub mod source;
pub mod transactions;
pub mod vfs;

/// Project name used when none is given on the command line.
pub const DEFAULT_PROJECT_NAME: &str = "my-hedera-app";

/// Template source used when `--template` is not given.
pub const DEFAULT_TEMPLATE_SOURCE: &str = "gh:hgraph-io/nextjs-template";
