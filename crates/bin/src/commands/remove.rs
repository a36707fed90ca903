//! The `remove` command.

use crate::cli::RemoveArgs;
use crate::commands::{load_document, print_node, store_document};

/// Run the `remove` command. Removing an absent path succeeds and leaves
/// the document unchanged.
pub fn run(args: &RemoveArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut node = load_document(&args.file)?;
    if node.remove(args.path.as_str()).is_none() {
        tracing::debug!(path = %args.path, "nothing to remove");
    }

    if args.dry_run {
        print_node(&node)
    } else {
        store_document(&args.file, &node)
    }
}
