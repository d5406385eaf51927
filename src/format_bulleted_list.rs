use std::fmt::Display;

use itertools::Itertools;

/// Format an iterator of items into a bulleted list, one item per line.
///
/// Continuation lines of multi-line items are indented to line up with the first line.
pub fn format_bulleted_list(items: impl IntoIterator<Item = impl Display>) -> String {
    items
        .into_iter()
        .map(|item| format!("• {}", item.to_string().lines().join("\n  ")))
        .join("\n")
}
