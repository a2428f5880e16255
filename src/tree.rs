//! Preview tree built from a flat listing.
//!
//! The tree exists only to show the user what the edited listing will look
//! like on disk. It is rebuilt for each preview and never consulted when
//! moves are applied.

use std::io::{self, Write};

use crate::listing::PathList;

/// One path component. Each node owns its children; there are no parent links.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTreeNode {
    pub name: String,
    pub children: Vec<PathTreeNode>,
}

impl PathTreeNode {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_owned(),
            children: Vec::new(),
        }
    }

    /// Child with `name`, if one was already attached.
    pub fn child(&self, name: &str) -> Option<&PathTreeNode> {
        self.children.iter().find(|c| c.name == name)
    }

    /// Child with `name`, attached at the end if missing.
    fn child_or_insert(&mut self, name: &str) -> &mut PathTreeNode {
        let pos = match self.children.iter().position(|c| c.name == name) {
            Some(pos) => pos,
            None => {
                self.children.push(PathTreeNode::new(name));
                self.children.len() - 1
            }
        };
        &mut self.children[pos]
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Tree rooted at a synthetic node with an empty name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    root: PathTreeNode,
}

impl PathTree {
    /// Build the tree; children keep first-seen order and names are unique per node.
    pub fn build(list: &PathList) -> Self {
        let mut root = PathTreeNode::default();
        for path in list.iter() {
            let mut node = &mut root;
            for component in path.split('/') {
                node = node.child_or_insert(component);
            }
        }
        Self { root }
    }

    pub fn root(&self) -> &PathTreeNode {
        &self.root
    }

    /// `name{child{...}, child}` on a single line.
    pub fn render_flat<W: Write>(&self, w: &mut W) -> io::Result<()> {
        write_flat(w, &self.root)?;
        writeln!(w)
    }

    /// Indented tree with box-drawing connectors.
    pub fn render_tree<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, ".")?;
        write_children(w, &self.root, "")
    }
}

fn write_flat<W: Write>(w: &mut W, node: &PathTreeNode) -> io::Result<()> {
    w.write_all(node.name.as_bytes())?;
    if node.is_leaf() {
        return Ok(());
    }
    w.write_all(b"{")?;
    for (i, child) in node.children.iter().enumerate() {
        if i > 0 {
            w.write_all(b", ")?;
        }
        write_flat(w, child)?;
    }
    w.write_all(b"}")
}

fn write_children<W: Write>(w: &mut W, node: &PathTreeNode, prefix: &str) -> io::Result<()> {
    let last = node.children.len().saturating_sub(1);
    for (i, child) in node.children.iter().enumerate() {
        let (connector, continuation) = if i == last {
            ("└── ", "    ")
        } else {
            ("├── ", "│   ")
        };
        writeln!(w, "{prefix}{connector}{}", child.name)?;
        if !child.is_leaf() {
            write_children(w, child, &format!("{prefix}{continuation}"))?;
        }
    }
    Ok(())
}
