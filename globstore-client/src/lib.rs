//! # Globstore Client
//!
//! Remote access to a globstore server: [`RemoteStore`] implements the core
//! [`Store`](globstore_core::Store) trait over the JSON HTTP protocol, and
//! [`ConnectConfig`] parses the `key:value` connection file that selects the
//! server and credentials.

pub mod config;
pub mod remote;

pub use config::{ConfigError, ConnectConfig};
pub use remote::{RemoteStore, NAMESPACE_HEADER};
