//! # Globstore Core
//!
//! Runtime-agnostic core of the globstore hierarchical sparse ordered store.
//!
//! This crate provides:
//! - `Subscript`: the tagged key type with the canonical total order
//!   (numbers before strings, numbers by value, strings byte-wise)
//! - `Value`: the small sum type stored at nodes
//! - `Node`: the sparse ordered tree, pruned of dead leaves
//! - `MemoryStore` / `SharedStore`: in-memory store with set/get/kill and
//!   resumable ordered iteration
//! - `Store`: the async trait seam letting a remote backing substitute for
//!   the in-process one
//! - wire DTOs shared by the HTTP server and client
//!
//! ## Design Principles
//!
//! 1. **Sparse**: only explicitly set values and their ancestors exist
//! 2. **By-key cursors**: resumption is a re-seek, tolerant of mutation
//! 3. **No dual identity**: canonicalization from text is a strict
//!    round-trip, so every key has exactly one form
//!
//! ## Example
//!
//! ```
//! use globstore_core::{MemoryStore, Subscript, Value};
//!
//! let mut store = MemoryStore::new();
//! store.set("nyse", &[Subscript::Int(1)], Value::from("listed"))?;
//! assert_eq!(store.get("nyse", &[Subscript::Int(1)])?, Some(Value::from("listed")));
//! # Ok::<(), globstore_core::Error>(())
//! ```

pub mod error;
pub mod node;
pub mod store;
pub mod subscript;
pub mod value;
pub mod wire;

// Re-export main types
pub use error::{Error, Result};
pub use node::{ChildEntry, ChildPage, Node};
pub use store::{ChildIter, MemoryStore, SharedStore, Store};
pub use subscript::Subscript;
pub use value::Value;
