//! The `get` command.

use datapath::Node;

use crate::cli::GetArgs;
use crate::commands::{load_document, print_node};

/// Run the `get` command. Exits nonzero when the path is absent and no
/// default was given.
pub fn run(args: &GetArgs) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_document(&args.file)?;
    match node.get(args.path.as_str()) {
        Some(value) => print_node(value),
        None => match &args.default {
            Some(default) => {
                print_node(&Node::Text(default.clone()))
            }
            None => Err(format!("no value at '{}'", args.path).into()),
        },
    }
}
