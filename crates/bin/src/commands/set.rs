//! The `set` command.

use datapath::Node;

use crate::cli::SetArgs;
use crate::commands::{load_document, print_node, store_document};

/// Parses a command-line value: JSON when it parses as JSON, a plain string
/// otherwise. `set file path '"3"'` writes a string, `set file path 3` a
/// number.
fn parse_value(raw: &str) -> Node {
    match serde_json::from_str::<serde_json::Value>(raw) {
        Ok(json) => datapath::from_json(json),
        Err(_) => Node::Text(raw.to_string()),
    }
}

/// Run the `set` command
pub fn run(args: &SetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut node = load_document(&args.file)?;
    node.set(args.path.as_str(), parse_value(&args.value));
    tracing::debug!(path = %args.path, "set");

    if args.dry_run {
        print_node(&node)
    } else {
        store_document(&args.file, &node)
    }
}
