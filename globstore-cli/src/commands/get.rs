use crate::commands::format_ref;
use crate::error::CliResult;
use globstore_core::{Store, Subscript};

pub async fn run(store: &dyn Store, global: &str, path: &[Subscript]) -> CliResult<()> {
    // Undefined is a normal outcome, not an error
    match store.get(global, path).await? {
        Some(value) => println!("{}", value),
        None => println!("{} is undefined", format_ref(global, path)),
    }
    Ok(())
}
