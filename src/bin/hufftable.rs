use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use clap::Parser;
use itertools::Itertools;
use log::{info, warn};

use huffman_resolver::huffman::Resolver;
use huffman_resolver::utils::{average_code_length, entropy};
use huffman_resolver::Probability;

/// The built-in demonstration alphabet: seven symbols with a lopsided
/// distribution.
const DEMO_ALPHABET: [(&str, Probability); 7] = [
    ("B", 0.01),
    ("A", 0.48),
    ("E", 0.05),
    ("D", 0.10),
    ("C", 0.15),
    ("F", 0.20),
    ("G", 0.01),
];

#[derive(Parser, Debug)]
#[command(about = "Build an optimal prefix-free code table for a probability distribution", long_about = None)]
struct Args {
    /// The alphabet as LABEL:PROBABILITY pairs, e.g. `A:0.5 B:0.25 C:0.25`.
    #[arg(required_unless_present = "demo", conflicts_with = "demo")]
    alphabet: Vec<String>,

    /// Use the built-in seven-symbol demonstration alphabet instead.
    #[arg(long)]
    demo: bool,

    /// Print the whole pool after every merge step.
    #[arg(short, long)]
    trace: bool,
}

fn parse_pair(raw: &str) -> Result<(String, Probability)> {
    let Some((label, probability)) = raw.rsplit_once(':') else {
        bail!("'{}' is not a LABEL:PROBABILITY pair", raw);
    };
    let probability = probability
        .parse::<Probability>()
        .with_context(|| format!("'{}' has a malformed probability", raw))?;
    Ok((label.to_string(), probability))
}

pub fn main() -> Result<()> {
    stderrlog::new()
        .verbosity(2)
        .timestamp(stderrlog::Timestamp::Second)
        .init()
        .unwrap();

    let args = Args::parse();

    let alphabet: Vec<(String, Probability)> = match args.demo {
        true => DEMO_ALPHABET
            .iter()
            .map(|(label, probability)| (label.to_string(), *probability))
            .collect(),
        false => args
            .alphabet
            .iter()
            .map(|raw| parse_pair(raw))
            .collect::<Result<_>>()?,
    };

    let mut resolver = Resolver::new();
    for (label, probability) in &alphabet {
        resolver.seed(label.clone(), *probability)?;
    }

    if !resolver.is_complete() {
        warn!(
            "probabilities sum to {}, the resulting code will not be optimal",
            resolver.total_mass()
        );
    }

    while !resolver.is_resolved() {
        resolver.step()?;
        if args.trace {
            println!("**************** pool after step {} ****************", resolver.steps());
            for (probability, labels) in resolver.snapshot() {
                println!("probability: {:<10} : {}", probability, labels.iter().join(" "));
            }
        }
    }

    let probabilities: HashMap<&str, Probability> = alphabet
        .iter()
        .map(|(label, probability)| (label.as_str(), *probability))
        .collect();
    let codes = resolver.into_codes()?;

    println!("{:<8} | {:<12} | {:<6} | {}", "symbol", "probability", "length", "code");
    for symbol in &codes {
        println!(
            "{:<8} | {:<12} | {:<6} | {}",
            symbol.label(),
            probabilities[symbol.label().as_str()],
            symbol.code_len(),
            symbol.code(),
        );
    }

    let masses = alphabet
        .iter()
        .map(|(_, probability)| *probability)
        .collect::<Vec<_>>();
    let average = average_code_length(
        codes
            .iter()
            .map(|symbol| (symbol.code_len(), probabilities[symbol.label().as_str()])),
    );
    info!(
        "entropy {:.4} bits/symbol, average code length {:.4} bits/symbol",
        entropy(&masses),
        average
    );

    Ok(())
}
