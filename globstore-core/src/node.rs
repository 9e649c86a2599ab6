//! Node - sparse ordered tree underlying a global
//!
//! Each node optionally carries a value and owns an ordered map of children.
//! The map's key order IS the canonical collation, so iteration falls out of
//! `BTreeMap` range scans. The tree is kept free of dead leaves: mutation
//! helpers report emptiness back to the caller so ancestors can prune.

use crate::subscript::Subscript;
use crate::value::Value;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};

/// A node in a global's tree
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Node {
    /// Value stored at this node, if any
    pub value: Option<Value>,
    /// Children in canonical subscript order
    pub children: BTreeMap<Subscript, Node>,
}

/// One entry of a child listing: the key, the value stored directly at it
/// (if any), and whether it has children of its own.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildEntry {
    pub subscript: Subscript,
    pub value: Option<Value>,
    pub has_children: bool,
}

/// A bounded batch of child entries, resumable from the last subscript.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChildPage {
    pub entries: Vec<ChildEntry>,
    /// True when no further children follow the last entry
    pub complete: bool,
}

impl Node {
    /// A node is dead when it stores nothing and has no children; dead nodes
    /// must not remain in the tree.
    pub fn is_empty(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }

    /// Walk down to the node at `path`, if present. Never allocates.
    pub fn descend(&self, path: &[Subscript]) -> Option<&Node> {
        let mut node = self;
        for sub in path {
            node = node.children.get(sub)?;
        }
        Some(node)
    }

    /// Walk down creating intermediate valueless nodes as needed.
    pub fn descend_or_create(&mut self, path: &[Subscript]) -> &mut Node {
        let mut node = self;
        for sub in path {
            node = node.children.entry(sub.clone()).or_default();
        }
        node
    }

    /// Remove the subtree at `path`, pruning ancestors left dead by the
    /// removal. Returns true if anything was removed.
    pub fn kill(&mut self, path: &[Subscript]) -> bool {
        match path {
            [] => {
                let had_content = !self.is_empty();
                self.value = None;
                self.children.clear();
                had_content
            }
            [head, rest @ ..] => {
                if rest.is_empty() {
                    return self.children.remove(head).is_some();
                }
                let Some(child) = self.children.get_mut(head) else {
                    return false;
                };
                let removed = child.kill(rest);
                if child.is_empty() {
                    self.children.remove(head);
                }
                removed
            }
        }
    }

    /// First direct child strictly after `after` (or the very first child
    /// when `after` is `None`).
    pub fn next_child(&self, after: Option<&Subscript>) -> Option<ChildEntry> {
        let mut range = match after {
            Some(key) => self.children.range((Excluded(key), Unbounded)),
            None => self.children.range::<Subscript, _>(..),
        };
        range.next().map(|(sub, node)| ChildEntry {
            subscript: sub.clone(),
            value: node.value.clone(),
            has_children: !node.children.is_empty(),
        })
    }

    /// Up to `limit` direct children strictly after `after`.
    pub fn children_page(&self, after: Option<&Subscript>, limit: usize) -> ChildPage {
        let range = match after {
            Some(key) => self.children.range((Excluded(key), Unbounded)),
            None => self.children.range::<Subscript, _>(..),
        };
        let mut entries = Vec::new();
        let mut complete = true;
        for (sub, node) in range {
            if entries.len() == limit {
                complete = false;
                break;
            }
            entries.push(ChildEntry {
                subscript: sub.clone(),
                value: node.value.clone(),
                has_children: !node.children.is_empty(),
            });
        }
        ChildPage { entries, complete }
    }
}
