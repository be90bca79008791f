use crate::vfs::VirtualFS;
use colored::Colorize;
use indexmap::IndexMap;
use std::path::Path;

/// A node in the preview tree; children keep staging order.
#[derive(Debug, Default)]
struct TreeNode {
    children: IndexMap<String, TreeNode>,
    is_file: bool,
}

fn insert(root: &mut TreeNode, path: &Path, is_file: bool) {
    let mut node = root;

    for component in path.components() {
        let key = component.as_os_str().to_string_lossy().into_owned();

        node = node.children.entry(key).or_default();
    }

    node.is_file = is_file;
}

fn print_node(name: &str, node: &TreeNode, prefix: &str, is_last: bool) {
    let connector = if is_last { "└── " } else { "├── " };
    let label = if node.is_file {
        name.green()
    } else {
        name.blue()
    };

    println!("{}{}{}", prefix, connector.yellow(), label);

    let child_prefix = if is_last {
        format!("{}    ", prefix)
    } else {
        format!("{}│   ", prefix)
    };

    let len = node.children.len();
    for (i, (child_name, child)) in node.children.iter().enumerate() {
        print_node(child_name, child, &child_prefix, i == len - 1);
    }
}

/// Prints the staged plan as a colored tree rooted at the destination
/// directory, directories blue and files green.
pub fn preview_as_tree(vfs: &VirtualFS, destination: &Path) {
    let mut root = TreeNode::default();

    for entry in &vfs.entries {
        insert(&mut root, &entry.destination, entry.is_file);
    }

    let root_name = destination
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| destination.display().to_string());

    println!(
        "Legend: {} = (directory), {} = (file)\n",
        "blue".blue(),
        "green".green()
    );

    println!("{}", root_name.blue().bold());

    let len = root.children.len();
    for (i, (name, node)) in root.children.iter().enumerate() {
        print_node(name, node, "", i == len - 1);
    }
}
