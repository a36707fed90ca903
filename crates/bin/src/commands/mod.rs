//! Command implementations for the datapath binary.

use std::path::Path;

use datapath::Node;

pub mod flatten;
pub mod get;
pub mod remove;
pub mod set;
pub mod validate;

/// Reads and parses a JSON document into a node tree.
pub fn load_document(file: &Path) -> Result<Node, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(file)
        .map_err(|e| format!("cannot read {}: {e}", file.display()))?;
    let json: serde_json::Value = serde_json::from_str(&text)
        .map_err(|e| format!("cannot parse {}: {e}", file.display()))?;
    Ok(datapath::from_json(json))
}

/// Serializes a node tree and writes it back as pretty-printed JSON.
pub fn store_document(file: &Path, node: &Node) -> Result<(), Box<dyn std::error::Error>> {
    let json = datapath::to_json(node);
    let mut text = serde_json::to_string_pretty(&json)?;
    text.push('\n');
    std::fs::write(file, text).map_err(|e| format!("cannot write {}: {e}", file.display()))?;
    Ok(())
}

/// Prints a node as JSON: scalars bare, containers pretty-printed.
pub fn print_node(node: &Node) -> Result<(), Box<dyn std::error::Error>> {
    let json = datapath::to_json(node);
    if node.is_container() {
        println!("{}", serde_json::to_string_pretty(&json)?);
    } else {
        println!("{json}");
    }
    Ok(())
}
