mod run;

use std::path::PathBuf;

use clap::Parser;

use crate::run::run_sort_command;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The translation data file to sort (defaults to content.js in the
    /// current directory)
    input: Option<PathBuf>,

    /// Print the run summary as JSON instead of human-readable text
    #[arg(long)]
    json: bool,
}

fn main() {
    let args = Args::parse();
    run_sort_command(args.input, args.json);
}
