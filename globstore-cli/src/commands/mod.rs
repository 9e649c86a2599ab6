pub mod get;
pub mod kill;
pub mod load;
pub mod set;
pub mod view;

use globstore_core::Subscript;

/// Render `global(sub1,sub2,...)` for user-facing messages.
pub fn format_ref(global: &str, path: &[Subscript]) -> String {
    if path.is_empty() {
        return global.to_string();
    }
    let subs: Vec<String> = path.iter().map(|s| s.to_string()).collect();
    format!("{}({})", global, subs.join(","))
}
