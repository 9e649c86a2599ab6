//! Store selection: in-process by default, remote with `--connect`

use crate::error::CliResult;
use globstore_client::{ConnectConfig, RemoteStore};
use globstore_core::{SharedStore, Store};
use std::path::Path;

/// Build the store every subcommand runs against. With a connection file the
/// CLI talks to a remote server (probed up front so a dead server fails fast
/// with a connection error, not mid-operation); otherwise it uses an
/// in-process store that lives for this invocation only.
pub async fn build_store(connect: Option<&Path>) -> CliResult<Box<dyn Store>> {
    match connect {
        Some(path) => {
            let config = ConnectConfig::load(path)?;
            let remote = RemoteStore::connect(&config);
            tracing::info!(base_url = %remote.base_url(), namespace = %config.namespace, "using remote store");
            remote.ping().await?;
            Ok(Box::new(remote))
        }
        None => Ok(Box::new(SharedStore::new())),
    }
}
