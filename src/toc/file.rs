//! File entries and tree traversal.

use roxmltree::Node;

use crate::format::element;
use crate::{Error, Result};

/// One node in the archive's file tree.
///
/// Entries mirror the nesting of `file` elements in the TOC: a directory
/// entry owns its children outright, so the tree is acyclic by construction
/// and carries no parent back-references.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Numeric identifier assigned by the archive producer.
    ///
    /// Uniqueness within the archive is assumed, not enforced here.
    pub id: u64,
    /// Entry name (one path component, not a full path).
    pub name: String,
    /// Extended metadata items in encounter order.
    ///
    /// Holds every attribute except `id` and every simple child element
    /// except `name` and nested `file` elements, keyed by structural name.
    /// Repeated keys are preserved, not collapsed, and unrecognized fields
    /// are kept verbatim rather than dropped.
    pub extended: Vec<(String, String)>,
    /// Child entries, for directory-like entries.
    pub children: Vec<FileEntry>,
}

impl FileEntry {
    /// Returns the first extended item with the given key.
    pub fn extended_item(&self, key: &str) -> Option<&str> {
        self.extended
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns all extended items with the given key, in encounter order.
    pub fn extended_items<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a str> {
        self.extended
            .iter()
            .filter(move |(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns `true` if the extended `type` item marks this entry as a
    /// directory.
    pub fn is_directory(&self) -> bool {
        self.extended_item("type") == Some("directory")
    }

    /// Builds an entry from a `file` element.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingField`] if the `id` attribute is absent or
    /// non-numeric, or if the `name` child is absent or empty.
    pub(crate) fn from_node(node: Node<'_, '_>) -> Result<Self> {
        let id = node
            .attribute(element::ID)
            .and_then(|raw| raw.parse::<u64>().ok())
            .ok_or(Error::MissingField { field: "id" })?;

        let mut name = None;
        let mut extended = Vec::new();
        let mut children = Vec::new();

        // Attributes first, then child elements, as encountered
        for attr in node.attributes() {
            if attr.name() != element::ID {
                extended.push((attr.name().to_string(), attr.value().to_string()));
            }
        }

        for child in node.children().filter(Node::is_element) {
            match child.tag_name().name() {
                element::NAME => {
                    if name.is_none() {
                        name = child.text().filter(|t| !t.is_empty()).map(str::to_string);
                    }
                }
                element::FILE => children.push(FileEntry::from_node(child)?),
                other => {
                    let value = child.text().map(str::trim).unwrap_or("");
                    extended.push((other.to_string(), value.to_string()));
                }
            }
        }

        let name = name.ok_or(Error::MissingField { field: "name" })?;

        Ok(Self {
            id,
            name,
            extended,
            children,
        })
    }
}

/// A depth-first iterator over a file tree.
///
/// Yields entries pre-order in document order: each entry before its
/// children, siblings in the order they appear in the TOC. The walk is
/// lazy and finite; since the decoded TOC is immutable, restarting it
/// yields the same sequence.
pub struct FileWalk<'a> {
    stack: Vec<std::slice::Iter<'a, FileEntry>>,
}

impl<'a> FileWalk<'a> {
    /// Creates a walk over the given top-level entries.
    pub(crate) fn new(top_level: &'a [FileEntry]) -> Self {
        Self {
            stack: vec![top_level.iter()],
        }
    }
}

impl<'a> Iterator for FileWalk<'a> {
    type Item = &'a FileEntry;

    fn next(&mut self) -> Option<&'a FileEntry> {
        while let Some(iter) = self.stack.last_mut() {
            match iter.next() {
                Some(entry) => {
                    self.stack.push(entry.children.iter());
                    return Some(entry);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        None
    }
}
