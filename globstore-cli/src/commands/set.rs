use crate::commands::format_ref;
use crate::error::CliResult;
use globstore_core::{Store, Subscript, Value};

pub async fn run(
    store: &dyn Store,
    global: &str,
    path: &[Subscript],
    value: Value,
) -> CliResult<()> {
    store.set(global, path, value.clone()).await?;
    println!("{} = {}", format_ref(global, path), value);
    Ok(())
}
