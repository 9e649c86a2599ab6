//! Store - globals map, operations, and the async `Store` seam
//!
//! `MemoryStore` is the single-threaded heart: named globals, each a sparse
//! ordered [`Node`] tree, with set/get/kill and resumable ordered iteration.
//! `SharedStore` wraps it in `Arc<RwLock<..>>` for per-operation atomicity
//! and implements the object-safe async [`Store`] trait, the seam that lets
//! a remote backing stand in for the in-process one.

use crate::error::{Error, Result};
use crate::node::{ChildEntry, ChildPage, Node};
use crate::subscript::Subscript;
use crate::value::Value;
use async_trait::async_trait;
use std::collections::btree_map;
use std::collections::BTreeMap;
use std::ops::Bound::{Excluded, Unbounded};
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory hierarchical sparse ordered store
#[derive(Debug, Default)]
pub struct MemoryStore {
    globals: BTreeMap<String, Node>,
}

fn validate_global(global: &str) -> Result<()> {
    if global.is_empty() {
        return Err(Error::invalid_path("global name must not be empty"));
    }
    Ok(())
}

fn validate_subscripts(path: &[Subscript]) -> Result<()> {
    for sub in path {
        if matches!(sub, Subscript::Str(s) if s.is_empty()) {
            return Err(Error::invalid_path("empty string subscript"));
        }
    }
    Ok(())
}

/// Validation for set/get, which address a node and need at least one
/// subscript (the root of a global carries no value).
fn validate_node_path(global: &str, path: &[Subscript]) -> Result<()> {
    validate_global(global)?;
    if path.is_empty() {
        return Err(Error::invalid_path("path must have at least one subscript"));
    }
    validate_subscripts(path)
}

/// Validation for kill/iterate, where the empty path means the whole global.
fn validate_prefix(global: &str, path: &[Subscript]) -> Result<()> {
    validate_global(global)?;
    validate_subscripts(path)
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the value at `global(path...)`, creating intermediate valueless
    /// nodes. Idempotent overwrite; validation happens before any mutation.
    pub fn set(&mut self, global: &str, path: &[Subscript], value: Value) -> Result<()> {
        validate_node_path(global, path)?;
        let root = self.globals.entry(global.to_string()).or_default();
        root.descend_or_create(path).value = Some(value);
        Ok(())
    }

    /// Value stored directly at `global(path...)`; `None` is the normal
    /// "undefined" outcome and a nonexistent global behaves as empty.
    pub fn get(&self, global: &str, path: &[Subscript]) -> Result<Option<Value>> {
        validate_node_path(global, path)?;
        let Some(root) = self.globals.get(global) else {
            return Ok(None);
        };
        Ok(root.descend(path).and_then(|node| node.value.clone()))
    }

    /// Remove the subtree at `global(path...)`; the empty path kills the
    /// whole global. Ancestors left without value or children are pruned.
    /// No-op on absent paths.
    pub fn kill(&mut self, global: &str, path: &[Subscript]) -> Result<()> {
        validate_prefix(global, path)?;
        if path.is_empty() {
            self.globals.remove(global);
            return Ok(());
        }
        if let Some(root) = self.globals.get_mut(global) {
            root.kill(path);
            if root.is_empty() {
                self.globals.remove(global);
            }
        }
        Ok(())
    }

    /// First direct child of the prefix node strictly after `after`, or the
    /// first child overall when `after` is `None`. `Ok(None)` when exhausted
    /// or when the prefix node does not exist.
    pub fn next_after(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
    ) -> Result<Option<ChildEntry>> {
        validate_prefix(global, prefix)?;
        let Some(node) = self.globals.get(global).and_then(|root| root.descend(prefix)) else {
            return Ok(None);
        };
        Ok(node.next_child(after))
    }

    /// Bounded batch of direct children strictly after `after`.
    pub fn children_page(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
        limit: usize,
    ) -> Result<ChildPage> {
        validate_prefix(global, prefix)?;
        let Some(node) = self.globals.get(global).and_then(|root| root.descend(prefix)) else {
            return Ok(ChildPage { entries: Vec::new(), complete: true });
        };
        Ok(node.children_page(after, limit))
    }

    /// Lazy ordered walk over the direct children of the prefix node,
    /// starting strictly after `after`. Borrows the store; for resumption
    /// across mutations use [`MemoryStore::next_after`] instead.
    pub fn iterate<'a>(
        &'a self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
    ) -> Result<ChildIter<'a>> {
        validate_prefix(global, prefix)?;
        let node = self.globals.get(global).and_then(|root| root.descend(prefix));
        let inner = node.map(|node| match after {
            Some(key) => node.children.range((Excluded(key), Unbounded)),
            None => node.children.range::<Subscript, _>(..),
        });
        Ok(ChildIter { inner })
    }

    /// Number of globals currently held
    pub fn global_count(&self) -> usize {
        self.globals.len()
    }

    /// Names of all globals in order
    pub fn global_names(&self) -> Vec<String> {
        self.globals.keys().cloned().collect()
    }
}

/// Borrowing iterator over direct children in canonical order
pub struct ChildIter<'a> {
    inner: Option<btree_map::Range<'a, Subscript, Node>>,
}

impl Iterator for ChildIter<'_> {
    type Item = ChildEntry;

    fn next(&mut self) -> Option<ChildEntry> {
        self.inner.as_mut()?.next().map(|(sub, node)| ChildEntry {
            subscript: sub.clone(),
            value: node.value.clone(),
            has_children: !node.children.is_empty(),
        })
    }
}

/// Backend-agnostic store interface
///
/// Object-safe so callers can hold `Box<dyn Store>` and switch between the
/// in-process store and a remote one at runtime.
#[async_trait]
pub trait Store: Send + Sync {
    async fn set(&self, global: &str, path: &[Subscript], value: Value) -> Result<()>;

    async fn get(&self, global: &str, path: &[Subscript]) -> Result<Option<Value>>;

    async fn kill(&self, global: &str, path: &[Subscript]) -> Result<()>;

    async fn next_after(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
    ) -> Result<Option<ChildEntry>>;

    async fn children_page(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
        limit: usize,
    ) -> Result<ChildPage>;
}

/// Thread-safe handle around [`MemoryStore`]
///
/// Writer lock for set/kill, reader lock for get and cursor steps. Each
/// operation is atomic; iteration resumed across calls sees mutations made
/// in between, by design of the by-key cursor.
#[derive(Clone, Debug, Default)]
pub struct SharedStore {
    inner: Arc<RwLock<MemoryStore>>,
}

impl SharedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read access for callers needing more than the trait surface (stats)
    pub async fn with_read<R>(&self, f: impl FnOnce(&MemoryStore) -> R) -> R {
        let guard = self.inner.read().await;
        f(&guard)
    }
}

#[async_trait]
impl Store for SharedStore {
    async fn set(&self, global: &str, path: &[Subscript], value: Value) -> Result<()> {
        self.inner.write().await.set(global, path, value)
    }

    async fn get(&self, global: &str, path: &[Subscript]) -> Result<Option<Value>> {
        self.inner.read().await.get(global, path)
    }

    async fn kill(&self, global: &str, path: &[Subscript]) -> Result<()> {
        self.inner.write().await.kill(global, path)
    }

    async fn next_after(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
    ) -> Result<Option<ChildEntry>> {
        self.inner.read().await.next_after(global, prefix, after)
    }

    async fn children_page(
        &self,
        global: &str,
        prefix: &[Subscript],
        after: Option<&Subscript>,
        limit: usize,
    ) -> Result<ChildPage> {
        self.inner.read().await.children_page(global, prefix, after, limit)
    }
}
