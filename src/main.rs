//! Quantitative CTL model checker for multi-valued GRN models.
//!
//! Takes an input path to a JSON document bundling a multi-valued gene-regulatory
//! network, a CTL formula with numeric atomic propositions, and optionally a set of
//! initial states. Computes the satisfaction degree of the formula in every state and
//! prints the selected amount of results (default is the aggregated summary over the
//! initial states plus timing).

use mvgrn_qctl_model_checker::analysis::analyse_input_document;
use mvgrn_qctl_model_checker::load_inputs::load_input_document;
use mvgrn_qctl_model_checker::result_print::PrintOptions;

use clap::builder::PossibleValuesParser;
use clap::Parser;

use std::path::Path;
use std::process;

/// Structure to collect CLI arguments.
#[derive(Parser)]
#[clap(
    author = "Sybila",
    version,
    about = "Quantitative CTL model checker for multi-valued GRN models."
)]
struct Arguments {
    /// Path to a JSON file with the network, the formula, and optional initial states.
    input_path: String,

    /// Choice of the amount of output regarding computation and results.
    #[clap(short, long, default_value = "short", value_parser = PossibleValuesParser::new(["none", "short", "medium", "full"]))]
    print_option: String,
}

/// Wrapper function to invoke the model checker, works with CLI arguments.
fn main() {
    let args = Arguments::parse();

    // check if the given path is valid
    if !Path::new(args.input_path.as_str()).is_file() {
        eprintln!("{} is not valid file", args.input_path);
        process::exit(1);
    }

    let print_opt = match args.print_option.as_str() {
        "none" => PrintOptions::NoPrint,
        "short" => PrintOptions::ShortPrint,
        "medium" => PrintOptions::MediumPrint,
        "full" => PrintOptions::FullPrint,
        // this cant really happen, just here to be exhaustive
        _ => PrintOptions::ShortPrint,
    };

    // read the input document and compute the results
    let result =
        load_input_document(args.input_path.as_str()).and_then(|doc| analyse_input_document(&doc, print_opt));

    if let Err(error) = result {
        eprintln!("{error}");
        process::exit(1);
    }
}
