use crate::error::CliResult;
use globstore_core::{Store, Subscript};

/// Print the direct children of a prefix in canonical order, one per line.
/// Walks with the by-key cursor so it works identically against local and
/// remote stores.
pub async fn run(store: &dyn Store, global: &str, prefix: &[Subscript]) -> CliResult<()> {
    let mut after: Option<Subscript> = None;
    let mut count = 0usize;
    while let Some(entry) = store.next_after(global, prefix, after.as_ref()).await? {
        let rendered = match &entry.value {
            Some(value) => value.to_string(),
            // interior node: no value of its own, only descendants
            None => "<subtree>".to_string(),
        };
        println!("subscript = {}, value = {}", entry.subscript, rendered);
        count += 1;
        after = Some(entry.subscript);
    }
    if count == 0 {
        println!("(no entries)");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use globstore_core::{SharedStore, Value};

    #[tokio::test]
    async fn test_view_walks_all_children() {
        let store = SharedStore::new();
        for (sub, val) in [
            (Subscript::from("b"), "vb"),
            (Subscript::from(1), "v1"),
        ] {
            store.set("g", &[sub], Value::from(val)).await.unwrap();
        }
        // smoke: runs to completion over both entries
        run(&store, "g", &[]).await.unwrap();
    }
}
