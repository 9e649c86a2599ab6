use crate::error::CliResult;
use globstore_core::{Store, Subscript, Value};
use std::path::Path;
use std::time::Instant;

/// Bulk-load a text file: each line becomes `global(i) = line` with 1-based
/// subscripts, matching the line numbers of the source file. Reports the
/// wall-clock time for the whole load.
pub async fn run(store: &dyn Store, global: &str, file: &Path) -> CliResult<()> {
    let text = std::fs::read_to_string(file)?;

    let started = Instant::now();
    let mut count = 0i64;
    for line in text.lines() {
        count += 1;
        store
            .set(global, &[Subscript::Int(count)], Value::Str(line.to_string()))
            .await?;
    }
    let elapsed = started.elapsed();

    println!(
        "Stored {} records into {} in {} ms",
        count,
        global,
        elapsed.as_millis()
    );
    Ok(())
}
