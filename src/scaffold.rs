use crate::{
    assets::GENERATED_FILES,
    errors::IoError,
    manifest::{Manifest, ManifestError},
    transactions::{Active, RollbackOperation, Transaction},
    vfs::{Filesystem, VirtualEntry, VirtualFS},
};
use colored::Colorize;
use miette::Diagnostic;
use std::path::{Path, PathBuf};
use tera::{Context, Tera};
use thiserror::Error;

/// Template paths that make up the project skeleton. Each is copied
/// recursively when present at the template source.
pub const REQUIRED_PATHS: &[&str] = &[
    "src",
    "public",
    "package.json",
    "tsconfig.json",
    "next.config.js",
    "postcss.config.js",
    "next-env.d.ts",
];

/// Single-file extras copied only when the template ships them.
pub const OPTIONAL_PATHS: &[&str] = &[".eslintrc.json", ".prettierrc"];

#[derive(Debug, Error, Diagnostic)]
pub enum ScaffoldError {
    #[error("I/O error within scaffold domain")]
    #[diagnostic(code(create_hgraph_app::scaffold::io))]
    Io(#[from] IoError),

    #[error("directory '{path}' already exists")]
    #[diagnostic(
        code(create_hgraph_app::scaffold::destination_exists),
        help("Choose a different project name or remove the existing directory.")
    )]
    DestinationExists { path: PathBuf },

    #[error(transparent)]
    #[diagnostic(transparent)]
    Manifest(#[from] ManifestError),

    #[error("unable to render generated file '{file}'")]
    #[diagnostic(code(create_hgraph_app::scaffold::render))]
    Render {
        file: String,
        #[source]
        source: tera::Error,
    },
}

/// Fails when the destination is already taken, before anything is written.
pub fn ensure_destination_free(
    fs: &dyn Filesystem,
    project_dir: &Path,
) -> Result<(), ScaffoldError> {
    if fs.exists(project_dir) {
        return Err(ScaffoldError::DestinationExists {
            path: project_dir.to_path_buf(),
        });
    }

    Ok(())
}

/// Stages the whole project into a [`VirtualFS`] without touching the
/// destination: template copies, the configured manifest, and the generated
/// files. Required paths are walked depth-first; files are staged
/// byte-for-byte.
pub fn plan(
    fs: &dyn Filesystem,
    template_dir: &Path,
    project_name: &str,
) -> Result<VirtualFS, ScaffoldError> {
    let mut vfs = VirtualFS::new();

    for item in REQUIRED_PATHS {
        let source = template_dir.join(item);

        if fs.exists(&source) {
            stage_tree(fs, template_dir, Path::new(item), &mut vfs)?;
        }
    }

    for item in OPTIONAL_PATHS {
        let source = template_dir.join(item);

        if fs.exists(&source) {
            let content = fs.read_file(&source)?;

            vfs.entries
                .push(VirtualEntry::file(PathBuf::from(item), content));
        }
    }

    configure_manifest(&mut vfs, project_name)?;

    stage_generated(&mut vfs, project_name)?;

    Ok(vfs)
}

fn stage_tree(
    fs: &dyn Filesystem,
    template_dir: &Path,
    relative: &Path,
    vfs: &mut VirtualFS,
) -> Result<(), ScaffoldError> {
    let source = template_dir.join(relative);

    if fs.is_dir(&source) {
        vfs.entries
            .push(VirtualEntry::directory(relative.to_path_buf()));

        for child in fs.list_children(&source)? {
            if let Some(name) = child.file_name() {
                stage_tree(fs, template_dir, &relative.join(name), vfs)?;
            }
        }
    } else {
        let content = fs.read_file(&source)?;

        vfs.entries
            .push(VirtualEntry::file(relative.to_path_buf(), content));
    }

    Ok(())
}

/// Patches the staged `package.json` in place for the new project.
fn configure_manifest(vfs: &mut VirtualFS, project_name: &str) -> Result<(), ScaffoldError> {
    let entry = vfs
        .entries
        .iter_mut()
        .find(|entry| entry.is_file && entry.destination == Path::new("package.json"))
        .ok_or(ManifestError::Missing)?;

    let mut manifest = Manifest::from_slice(entry.content.as_deref().unwrap_or_default())?;

    manifest.configure_for(project_name);

    entry.content = Some(manifest.to_bytes()?);

    Ok(())
}

fn stage_generated(vfs: &mut VirtualFS, project_name: &str) -> Result<(), ScaffoldError> {
    let mut ctx = Context::new();
    ctx.insert("project_name", project_name);

    for (file, template) in GENERATED_FILES {
        let rendered =
            Tera::one_off(template, &ctx, false).map_err(|error| ScaffoldError::Render {
                file: file.to_string(),
                source: error,
            })?;

        vfs.entries
            .push(VirtualEntry::file(PathBuf::from(file), rendered.into_bytes()));
    }

    Ok(())
}

/// Writes the staged plan under `project_dir`: the destination root first,
/// then staged directories, then files with parents created lazily. Every
/// write is registered on the transaction so a failure rolls the whole
/// destination back.
pub fn apply(
    fs: &mut dyn Filesystem,
    vfs: &VirtualFS,
    project_dir: &Path,
    trx: &mut Transaction<Active>,
) -> Result<(), ScaffoldError> {
    create_directory(fs, trx, project_dir)?;

    for entry in vfs.entries.iter().filter(|entry| !entry.is_file) {
        create_directory(fs, trx, &project_dir.join(&entry.destination))?;
    }

    for entry in vfs.entries.iter().filter(|entry| entry.is_file) {
        let final_path = project_dir.join(&entry.destination);

        if let Some(parent) = final_path.parent() {
            create_directory(fs, trx, parent)?;
        }

        let contents = entry.content.clone().unwrap_or_default();

        write_file(fs, trx, &final_path, &contents)?;
    }

    Ok(())
}

fn create_directory(
    fs: &mut dyn Filesystem,
    trx: &mut Transaction<Active>,
    path: &Path,
) -> Result<(), ScaffoldError> {
    fs.make_dir(path)?;

    trx.add_operation(RollbackOperation::RemoveDir(path.to_path_buf()));

    Ok(())
}

fn write_file(
    fs: &mut dyn Filesystem,
    trx: &mut Transaction<Active>,
    path: &Path,
    contents: &[u8],
) -> Result<(), ScaffoldError> {
    fs.write_file(path, contents)?;

    println!("{} {}", "create".green(), path.display());

    trx.add_operation(RollbackOperation::RemoveFile(path.to_path_buf()));

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vfs::memory::MemoryFilesystem;

    const TEMPLATE_MANIFEST: &str = r#"{
  "name": "@hgraph.io/nextjs-template",
  "version": "2.3.1",
  "bin": {"create-app": "./bin/create-app.js"},
  "files": ["src", "public"],
  "scripts": {"dev": "next dev"}
}"#;

    fn template_fs() -> MemoryFilesystem {
        let mut fs = MemoryFilesystem::new();
        fs.add_file("/tpl/package.json", TEMPLATE_MANIFEST);
        fs.add_file("/tpl/tsconfig.json", "{}");
        fs.add_file("/tpl/next.config.js", "module.exports = {}\n");
        fs.add_file("/tpl/src/app/page.tsx", "export default function Home() {}\n");
        fs.add_file("/tpl/src/app/layout.tsx", "export default function Layout() {}\n");
        fs.add_file("/tpl/public/favicon.svg", "<svg/>\n");
        fs.add_file("/tpl/.prettierrc", "{\"semi\": false}\n");
        fs
    }

    fn planned_paths(vfs: &VirtualFS) -> Vec<String> {
        vfs.entries
            .iter()
            .map(|entry| entry.destination.display().to_string())
            .collect()
    }

    #[test]
    fn stages_required_trees_depth_first() {
        let fs = template_fs();

        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();
        let paths = planned_paths(&vfs);

        assert!(paths.contains(&"src".to_string()));
        assert!(paths.contains(&"src/app/page.tsx".to_string()));
        assert!(paths.contains(&"public/favicon.svg".to_string()));
        assert!(paths.contains(&".prettierrc".to_string()));
    }

    #[test]
    fn stages_files_byte_for_byte() {
        let fs = template_fs();

        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();

        let page = vfs
            .entries
            .iter()
            .find(|entry| entry.destination == Path::new("src/app/page.tsx"))
            .unwrap();

        assert_eq!(
            page.content.as_deref(),
            Some("export default function Home() {}\n".as_bytes())
        );
    }

    #[test]
    fn absent_required_and_optional_paths_are_skipped() {
        let mut fs = MemoryFilesystem::new();
        fs.add_file("/tpl/package.json", TEMPLATE_MANIFEST);

        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();
        let paths = planned_paths(&vfs);

        assert!(!paths.contains(&"public".to_string()));
        assert!(!paths.contains(&".eslintrc.json".to_string()));
    }

    #[test]
    fn configures_the_staged_manifest() {
        let fs = template_fs();

        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();

        let manifest_entry = vfs
            .entries
            .iter()
            .find(|entry| entry.destination == Path::new("package.json"))
            .unwrap();

        let manifest =
            Manifest::from_slice(manifest_entry.content.as_deref().unwrap()).unwrap();

        assert_eq!(manifest.0["name"], "demo-app");
        assert_eq!(manifest.0["version"], "0.1.0");
        assert!(!manifest.0.contains_key("bin"));
        assert!(!manifest.0.contains_key("files"));
    }

    #[test]
    fn stages_generated_files() {
        let fs = template_fs();

        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();
        let paths = planned_paths(&vfs);

        assert!(paths.contains(&".env.local".to_string()));
        assert!(paths.contains(&".gitignore".to_string()));
        assert!(paths.contains(&"README.md".to_string()));

        let readme = vfs
            .entries
            .iter()
            .find(|entry| entry.destination == Path::new("README.md"))
            .unwrap();
        let text = String::from_utf8(readme.content.clone().unwrap()).unwrap();

        assert!(text.starts_with("# demo-app\n"));
    }

    #[test]
    fn template_without_manifest_is_an_error() {
        let mut fs = MemoryFilesystem::new();
        fs.add_file("/tpl/tsconfig.json", "{}");

        let result = plan(&fs, Path::new("/tpl"), "demo-app");

        assert!(matches!(
            result,
            Err(ScaffoldError::Manifest(ManifestError::Missing))
        ));
    }

    #[test]
    fn refuses_an_existing_destination() {
        let mut fs = MemoryFilesystem::new();
        fs.add_dir("/work/demo-app");

        let result = ensure_destination_free(&fs, Path::new("/work/demo-app"));

        assert!(matches!(
            result,
            Err(ScaffoldError::DestinationExists { .. })
        ));
    }

    #[test]
    fn applies_the_plan_under_the_destination() {
        let mut fs = template_fs();
        let vfs = plan(&fs, Path::new("/tpl"), "demo-app").unwrap();

        let mut trx = Transaction::new();
        apply(&mut fs, &vfs, Path::new("/work/demo-app"), &mut trx).unwrap();
        trx.commit();

        assert_eq!(
            fs.file("/work/demo-app/src/app/page.tsx"),
            Some("export default function Home() {}\n".as_bytes())
        );
        assert!(fs.file("/work/demo-app/.env.local").is_some());
        assert!(fs.is_dir(Path::new("/work/demo-app/public")));
    }
}
