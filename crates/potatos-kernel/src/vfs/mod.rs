//! In-memory virtual filesystem.
//!
//! Nodes live in an arena indexed by [`NodeId`]. A directory owns its children
//! through a name-to-id map, and every node keeps its parent's id as a plain
//! back-reference, so there are no ownership cycles.
//!
//! Path semantics depend only on the path string and the `CWD` environment
//! variable. There is no cursor object: every operation takes the
//! [`Environment`] it should resolve against.
//!
//! ```
//! use potatos_kernel::env::{CWD, Environment};
//! use potatos_kernel::vfs::VirtualFileSystem;
//!
//! let mut env = Environment::new();
//! env.put(CWD, "/home").unwrap();
//! let fs = VirtualFileSystem::new();
//! assert_eq!(fs.resolve(&env, "spud/../sprout/./"), "/home/sprout");
//! ```

mod node;
mod seed;

pub use node::{Blob, FsNode, NodeId};
pub use seed::{DEFAULT_SEED, parse_data_url};

use std::ops::{Index, IndexMut};

use crate::env::{CWD, Environment};
use crate::error::{ShellError, ShellResult};

/// Path separator.
pub const SEPARATOR: char = '/';

const ROOT: NodeId = NodeId(0);

/// Normalize `path` against `cwd`.
///
/// Relative paths are joined onto `cwd`. Empty and `.` segments are dropped,
/// `..` pops one segment (a no-op at the root). The result always starts
/// with `/`.
pub fn resolve_path(cwd: &str, path: &str) -> String {
    let combined = if path.starts_with(SEPARATOR) {
        path.to_string()
    } else {
        format!("{cwd}{SEPARATOR}{path}")
    };

    let mut stack: Vec<&str> = Vec::new();
    for segment in combined.split(SEPARATOR) {
        match segment {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            name => stack.push(name),
        }
    }

    format!("{SEPARATOR}{}", stack.join("/"))
}

/// A tree of directories and files rooted at `/`.
#[derive(Debug, Clone)]
pub struct VirtualFileSystem {
    nodes: Vec<Option<FsNode>>,
}

impl Default for VirtualFileSystem {
    fn default() -> Self {
        Self::new()
    }
}

impl VirtualFileSystem {
    /// A filesystem holding only the root directory.
    pub fn new() -> Self {
        Self {
            nodes: vec![Some(FsNode::directory(""))],
        }
    }

    pub fn root(&self) -> NodeId {
        ROOT
    }

    /// The node behind `id`, or `None` once it has been removed.
    pub fn node(&self, id: NodeId) -> Option<&FsNode> {
        self.nodes.get(id.0).and_then(Option::as_ref)
    }

    /// Name of a live node.
    pub fn name(&self, id: NodeId) -> &str {
        self[id].name()
    }

    /// The working directory from `env`, or `/` when unset.
    pub fn cwd<'e>(&self, env: &'e Environment) -> &'e str {
        match env.get(CWD) {
            "" => "/",
            cwd => cwd,
        }
    }

    /// Absolute, normalized form of `path`.
    pub fn resolve(&self, env: &Environment, path: &str) -> String {
        resolve_path(self.cwd(env), path)
    }

    /// Look up the node at `path`.
    pub fn get(&self, env: &Environment, path: &str) -> ShellResult<NodeId> {
        let resolved = self.resolve(env, path);
        let mut current = ROOT;
        for segment in resolved.split(SEPARATOR).filter(|s| !s.is_empty()) {
            current = self.child(current, segment)?;
        }
        Ok(current)
    }

    fn child(&self, dir: NodeId, name: &str) -> ShellResult<NodeId> {
        let node = &self[dir];
        let children = node
            .children()
            .ok_or_else(|| ShellError::NotADirectory(node.name().to_string()))?;
        children
            .get(name)
            .copied()
            .ok_or_else(|| ShellError::no_such_node(name, node.name()))
    }

    /// Create every missing directory along `path` and return the last one.
    ///
    /// Existing directories are reused, so repeating the call is a no-op.
    pub fn mkdirp(&mut self, env: &Environment, path: &str) -> ShellResult<NodeId> {
        let resolved = self.resolve(env, path);
        let mut current = ROOT;
        for segment in resolved.split(SEPARATOR).filter(|s| !s.is_empty()) {
            current = match self.child(current, segment) {
                Ok(id) => id,
                Err(ShellError::NoSuchNode { .. }) => {
                    self.put(current, FsNode::directory(segment))?
                }
                Err(e) => return Err(e),
            };
        }
        Ok(current)
    }

    /// Children of the directory at `path` in insertion order, or just the
    /// node itself when `path` names a file.
    pub fn list(&self, env: &Environment, path: &str) -> ShellResult<Vec<NodeId>> {
        let id = self.get(env, path)?;
        Ok(match self[id].children() {
            Some(children) => children.values().copied().collect(),
            None => vec![id],
        })
    }

    /// Change the working directory.
    ///
    /// The target must exist and be a directory. Only then is `CWD` updated.
    pub fn cd(&self, env: &mut Environment, path: &str) -> ShellResult<()> {
        let resolved = self.resolve(env, path);
        let id = self
            .get(env, &resolved)
            .map_err(|_| ShellError::InvalidPath(path.to_string()))?;
        if !self[id].is_dir() {
            return Err(ShellError::NotADirectory(self.name(id).to_string()));
        }
        env.put(CWD, resolved)
    }

    /// Attach `child` under the directory `parent`.
    pub fn put(&mut self, parent: NodeId, mut child: FsNode) -> ShellResult<NodeId> {
        let id = NodeId(self.nodes.len());
        let name = child.name().to_string();

        let parent_node = &mut self[parent];
        let parent_name = parent_node.name().to_string();
        let FsNode::Directory { children, .. } = parent_node else {
            return Err(ShellError::NotADirectory(parent_name));
        };
        if children.contains_key(&name) {
            return Err(ShellError::duplicate_name(parent_name, name));
        }
        children.insert(name, id);

        child.set_parent(Some(parent));
        self.nodes.push(Some(child));
        Ok(id)
    }

    /// Create a new file at `path`. The parent directory must already exist.
    pub fn create_file(&mut self, env: &Environment, path: &str, blob: Blob) -> ShellResult<NodeId> {
        let resolved = self.resolve(env, path);
        let Some((dir, name)) = resolved
            .rsplit_once(SEPARATOR)
            .filter(|(_, name)| !name.is_empty())
        else {
            return Err(ShellError::InvalidPath(path.to_string()));
        };
        let parent = self.get(env, if dir.is_empty() { "/" } else { dir })?;
        self.put(parent, FsNode::file(name, blob))
    }

    /// Detach the node at `path` and return it.
    pub fn remove(&mut self, env: &Environment, path: &str) -> ShellResult<FsNode> {
        let id = self.get(env, path)?;
        self.remove_node(id)
    }

    /// Detach `id` from its parent.
    ///
    /// The node and all of its descendants are tombstoned. Their ids never
    /// resolve again. A returned directory's child ids are therefore stale.
    pub fn remove_node(&mut self, id: NodeId) -> ShellResult<FsNode> {
        let Some(parent) = self[id].parent() else {
            return Err(ShellError::InvalidPath(self.absolute_path(id)));
        };
        let name = self.name(id).to_string();
        if let FsNode::Directory { children, .. } = &mut self[parent] {
            children.shift_remove(&name);
        }

        let mut pending: Vec<NodeId> = self[id]
            .children()
            .map(|c| c.values().copied().collect())
            .unwrap_or_default();
        while let Some(next) = pending.pop() {
            if let Some(node) = self.nodes.get_mut(next.0).and_then(Option::take) {
                if let Some(children) = node.children() {
                    pending.extend(children.values().copied());
                }
            }
        }

        let mut removed = self
            .nodes
            .get_mut(id.0)
            .and_then(Option::take)
            .ok_or_else(|| ShellError::InvalidPath(name.clone()))?;
        removed.set_parent(None);
        tracing::debug!("removed {} from the filesystem", name);
        Ok(removed)
    }

    /// Rebuild the absolute path of a live node from its parent links.
    pub fn absolute_path(&self, id: NodeId) -> String {
        let mut names = Vec::new();
        let mut current = Some(id);
        while let Some(next) = current {
            let node = &self[next];
            names.push(node.name());
            current = node.parent();
        }
        names.reverse();
        match names.join("/") {
            path if path.is_empty() => SEPARATOR.to_string(),
            path => path,
        }
    }
}

impl Index<NodeId> for VirtualFileSystem {
    type Output = FsNode;

    fn index(&self, id: NodeId) -> &FsNode {
        match self.nodes.get(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling filesystem node {id:?}"),
        }
    }
}

impl IndexMut<NodeId> for VirtualFileSystem {
    fn index_mut(&mut self, id: NodeId) -> &mut FsNode {
        match self.nodes.get_mut(id.0) {
            Some(Some(node)) => node,
            _ => panic!("dangling filesystem node {id:?}"),
        }
    }
}
