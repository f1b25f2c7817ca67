use std::path::PathBuf;

use contentsort::{Error, sort_file};
use serde_json::json;

const DEFAULT_INPUT: &str = "content.js";
const OUTPUT_FILE_NAME: &str = "content_sorted.js";

/// Resolves paths, runs the sort, and reports the outcome.
///
/// The output file always lands next to the resolved input, under the fixed
/// name `content_sorted.js`. A missing input or an input without any
/// translation pairs is reported without writing anything; neither sets a
/// non-zero exit code.
pub fn run_sort_command(input: Option<PathBuf>, json_output: bool) {
    let input = input.unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = match input.parent() {
        Some(dir) => dir.join(OUTPUT_FILE_NAME),
        None => PathBuf::from(OUTPUT_FILE_NAME),
    };

    match sort_file(&input, &output) {
        Ok(pairs) => {
            if json_output {
                let body = json!({
                    "input": input.display().to_string(),
                    "output": output.display().to_string(),
                    "pairs": pairs,
                });
                println!("{}", serde_json::to_string_pretty(&body).unwrap());
            } else {
                println!("Sorted output saved to {}", output.display());
                println!("Processed {} translation pairs", pairs);
            }
        }
        Err(Error::FileNotFound(path)) => {
            println!("Error: file not found: {}", path.display());
        }
        Err(Error::NoPairsFound) => {
            println!("Warning: no translation pairs found!");
            println!("Check that the file format matches the expected convention.");
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
