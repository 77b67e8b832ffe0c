//! Print results of the computation, either the aggregated summary only, or the full
//! satisfaction degrees over initial states.

use crate::analysis::SatisfactionSummary;
use crate::evaluation::labeling::StateLabels;
use crate::network::State;

use std::io::Write;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PrintOptions {
    NoPrint,
    ShortPrint,
    MediumPrint,
    FullPrint,
}

/// Print the given text, but only if the correct print options are selected (medium or
/// full). This simplifies the code regarding progress printing (no redundant if
/// statements).
pub(crate) fn print_if_allowed(text: String, print_options: PrintOptions) {
    if print_options == PrintOptions::NoPrint || print_options == PrintOptions::ShortPrint {
        return;
    }
    println!("{text}")
}

/// Render a state as a tuple of activity levels, e.g. `(1, 0, 2)`.
pub(crate) fn format_state(state: &State) -> String {
    let levels: Vec<String> = state.iter().map(|v| v.to_string()).collect();
    format!("({})", levels.join(", "))
}

/// Write a satisfaction degree coloured by its sign (green = satisfied, red = violated).
fn write_degree(stdout: &mut StandardStream, degree: f64) {
    let color = if degree >= 0.0 { Color::Green } else { Color::Red };
    stdout
        .set_color(ColorSpec::new().set_fg(Some(color)))
        .unwrap();
    write!(stdout, "{degree}").unwrap();
    stdout.reset().unwrap();
}

/// Print the aggregated summary of the formula's satisfaction degrees over the initial
/// states: the worst and best value with witness states, and the mean value.
pub(crate) fn print_summary(formula: &str, summary: &SatisfactionSummary) {
    let mut stdout = StandardStream::stdout(ColorChoice::Always);

    println!("Formula: {formula}");

    write!(&mut stdout, "Worst value ").unwrap();
    write_degree(&mut stdout, summary.minimum);
    println!(" in state {}", format_state(&summary.min_state));

    write!(&mut stdout, "Best value ").unwrap();
    write_degree(&mut stdout, summary.maximum);
    println!(" in state {}", format_state(&summary.max_state));

    write!(&mut stdout, "Average value among initial states: ").unwrap();
    write_degree(&mut stdout, summary.mean);
    println!();
}

/// Print the satisfaction degree of every initial state, one per line.
pub(crate) fn print_states_full(labels: &StateLabels, initial_states: &[State]) {
    let mut stdout = StandardStream::stdout(ColorChoice::Always);
    for state in initial_states {
        let Some(degree) = labels.get(state) else {
            continue;
        };
        write!(&mut stdout, "{} : ", format_state(state)).unwrap();
        write_degree(&mut stdout, *degree);
        println!();
    }
    println!("-----");
}
