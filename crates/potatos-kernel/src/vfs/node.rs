//! Arena node types.

use std::borrow::Cow;

use indexmap::IndexMap;

/// Index of a node in the filesystem arena.
///
/// Ids are never reused. A removed node's id simply stops resolving.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

/// File content with a declared media type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub media_type: String,
    pub data: Vec<u8>,
}

impl Blob {
    pub fn new(media_type: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        Self {
            media_type: media_type.into(),
            data: data.into(),
        }
    }

    /// A `text/plain` blob.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new("text/plain", text.into().into_bytes())
    }

    /// Content decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.data)
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// A directory or a file.
///
/// `parent` is a back-reference only. The parent's `children` map is what
/// owns a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FsNode {
    Directory {
        name: String,
        parent: Option<NodeId>,
        children: IndexMap<String, NodeId>,
    },
    File {
        name: String,
        parent: Option<NodeId>,
        blob: Blob,
    },
}

impl FsNode {
    /// A detached, empty directory.
    pub fn directory(name: impl Into<String>) -> Self {
        Self::Directory {
            name: name.into(),
            parent: None,
            children: IndexMap::new(),
        }
    }

    /// A detached file.
    pub fn file(name: impl Into<String>, blob: Blob) -> Self {
        Self::File {
            name: name.into(),
            parent: None,
            blob,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Directory { name, .. } | Self::File { name, .. } => name,
        }
    }

    pub fn parent(&self) -> Option<NodeId> {
        match self {
            Self::Directory { parent, .. } | Self::File { parent, .. } => *parent,
        }
    }

    pub(crate) fn set_parent(&mut self, id: Option<NodeId>) {
        match self {
            Self::Directory { parent, .. } | Self::File { parent, .. } => *parent = id,
        }
    }

    pub fn is_dir(&self) -> bool {
        matches!(self, Self::Directory { .. })
    }

    pub fn is_file(&self) -> bool {
        matches!(self, Self::File { .. })
    }

    pub fn children(&self) -> Option<&IndexMap<String, NodeId>> {
        match self {
            Self::Directory { children, .. } => Some(children),
            Self::File { .. } => None,
        }
    }

    pub fn blob(&self) -> Option<&Blob> {
        match self {
            Self::File { blob, .. } => Some(blob),
            Self::Directory { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_text_is_lossy() {
        let blob = Blob::new("application/octet-stream", vec![b'h', b'i', 0xff]);
        assert_eq!(blob.text(), "hi\u{fffd}");
        assert_eq!(blob.len(), 3);
    }

    #[test]
    fn plain_blob_media_type() {
        let blob = Blob::plain("hello!");
        assert_eq!(blob.media_type, "text/plain");
        assert_eq!(blob.text(), "hello!");
    }

    #[test]
    fn node_accessors() {
        let dir = FsNode::directory("home");
        assert!(dir.is_dir());
        assert_eq!(dir.name(), "home");
        assert!(dir.children().is_some_and(|c| c.is_empty()));
        assert!(dir.blob().is_none());

        let file = FsNode::file("a.txt", Blob::plain("x"));
        assert!(file.is_file());
        assert!(file.children().is_none());
        assert_eq!(file.parent(), None);
    }
}
