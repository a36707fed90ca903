//! The `validate` command.

use datapath::transform;

use crate::cli::ValidateArgs;
use crate::commands::load_document;

/// Run the `validate` command. Prints each failed constraint on its own
/// line and exits nonzero when validation fails.
pub fn run(args: &ValidateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let data = load_document(&args.file)?;
    let schema = load_document(&args.schema)?;

    match transform::validate(&data, &schema) {
        Ok(()) => {
            println!("{} is valid", args.file.display());
            Ok(())
        }
        Err(err) => {
            if let Some(failures) = err.failures() {
                for failure in failures {
                    eprintln!("{failure}");
                }
                Err(format!("{} constraint(s) failed", failures.len()).into())
            } else {
                Err(err.into())
            }
        }
    }
}
