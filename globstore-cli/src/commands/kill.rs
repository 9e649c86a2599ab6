use crate::commands::format_ref;
use crate::error::{CliError, CliResult};
use globstore_core::{Store, Subscript};

pub async fn run(store: &dyn Store, global: &str, path: &[Subscript], force: bool) -> CliResult<()> {
    // Killing with no path takes the whole global down with it
    if path.is_empty() && !force {
        return Err(CliError::Usage(format!(
            "use --force to confirm removing the whole global '{global}'"
        )));
    }
    store.kill(global, path).await?;
    println!("Killed {}", format_ref(global, path));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use globstore_core::{SharedStore, Subscript, Value};

    #[tokio::test]
    async fn test_whole_global_kill_requires_force() {
        let store = SharedStore::new();
        store
            .set("g", &[Subscript::Int(1)], Value::from("v"))
            .await
            .unwrap();

        let err = run(&store, "g", &[], false).await.unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
        // refused: the data is still there
        assert!(store.get("g", &[Subscript::Int(1)]).await.unwrap().is_some());

        run(&store, "g", &[], true).await.unwrap();
        assert!(store.get("g", &[Subscript::Int(1)]).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_subtree_kill_needs_no_force() {
        let store = SharedStore::new();
        store
            .set("g", &[Subscript::Int(1)], Value::from("v"))
            .await
            .unwrap();
        run(&store, "g", &[Subscript::Int(1)], false).await.unwrap();
        assert!(store.get("g", &[Subscript::Int(1)]).await.unwrap().is_none());
    }
}
