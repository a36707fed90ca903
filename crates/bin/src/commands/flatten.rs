//! The `flatten` command.

use datapath::transform;

use crate::cli::FlattenArgs;
use crate::commands::load_document;

/// Run the `flatten` command, printing one JSON object whose keys are the
/// full dotted paths of the document's leaves.
pub fn run(args: &FlattenArgs) -> Result<(), Box<dyn std::error::Error>> {
    let node = load_document(&args.file)?;
    let flat = transform::flatten(&node);

    let object: serde_json::Map<String, serde_json::Value> = flat
        .iter()
        .map(|(path, value)| (path.clone(), datapath::to_json(value)))
        .collect();
    println!(
        "{}",
        serde_json::to_string_pretty(&serde_json::Value::Object(object))?
    );
    Ok(())
}
