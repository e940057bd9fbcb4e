//! Typogenetics - CLI Entry Point
//!
//! Commands:
//! - `typo table` - List the codon table
//! - `typo step <strand> <instr>` - Apply one amino acid to one snapshot
//! - `typo check <file>` - Validate a JSON command list
//! - `typo translate <strand>` - Show the enzyme a strand encodes

use clap::{Parser, Subcommand};
use log::{debug, info};

#[derive(Parser)]
#[command(name = "typo")]
#[command(author = "Yigit")]
#[command(version = "0.1.0")]
#[command(about = "A Typogenetics strand-editing machine")]
struct Cli {
    /// Log every transition
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print all 16 codons with their amino acids
    Table,
    /// Apply one amino acid to a strand and print the result
    Step {
        /// Primary strand, e.g. TAGATCCAGTCCATCGA (spaces are empty cells)
        strand: String,
        /// Amino acid name (rpu) or codon (TC)
        instr: String,
        /// Enzyme position on the active strand
        #[arg(short, long, default_value = "0")]
        locus: usize,
        /// Start with copy mode on
        #[arg(short, long)]
        copy: bool,
        /// Index of the active strand
        #[arg(short, long, default_value = "0")]
        active: usize,
        /// Existing partner strand
        #[arg(short, long)]
        partner: Option<String>,
        /// Print the resulting state as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a JSON array of amino acid names
    Check {
        /// Path to the command list
        file: String,
    },
    /// Read a strand as codons and print the enzyme
    Translate {
        strand: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let table = typogenetics::InstructionTable::new();
    debug!("instruction table: {} codons, {} names", table.codon_count(), table.name_count());

    match cli.command {
        Some(Commands::Table) | None => {
            print_table(&table);
        }
        Some(Commands::Step { strand, instr, locus, copy, active, partner, json }) => {
            step(&table, &strand, &instr, locus, copy, active, partner.as_deref(), json);
        }
        Some(Commands::Check { file }) => {
            check_file(&table, &file);
        }
        Some(Commands::Translate { strand }) => {
            translate(&table, &strand);
        }
    }
}

fn print_table(table: &typogenetics::InstructionTable) {
    use typogenetics::AminoAcid;

    println!("codon  name  fold  description");
    for amino in AminoAcid::ALL {
        for codon in table.codons_of(amino) {
            println!(
                "{}{}     {}   {}     {}",
                codon[0], codon[1], amino, amino.fold(), amino.description()
            );
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn step(
    table: &typogenetics::InstructionTable,
    strand: &str,
    instr: &str,
    locus: usize,
    copy: bool,
    active: usize,
    partner: Option<&str>,
    json: bool,
) {
    use typogenetics::{ExecutionState, StrandSet};

    let amino = match table.resolve_str(instr) {
        Ok(a) => a,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut texts = vec![strand];
    texts.extend(partner);
    let strands = match StrandSet::parse(&texts) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: bad strand: {}", e);
            std::process::exit(1);
        }
    };

    let mut state = ExecutionState::with_strands(strands, locus, copy, active);

    info!("applying {} ({})", amino, amino.description());
    state.execute(amino);

    if json {
        match serde_json::to_string_pretty(&state) {
            Ok(text) => println!("{}", text),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        println!("{}", state);
    }
}

fn check_file(table: &typogenetics::InstructionTable, path: &str) {
    use typogenetics::{Enzyme, EnzymeError};

    let text = match std::fs::read_to_string(path) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: failed to read {}: {}", path, e);
            std::process::exit(1);
        }
    };

    match Enzyme::from_json(table, &text) {
        Ok(enzyme) => {
            println!("ok: {} amino acids", enzyme.len());
            println!("{}", enzyme);
        }
        Err(e @ EnzymeError::Command { .. }) => {
            let kind = match e.lookup() {
                Some(l) if l.is_type_violation() => "type",
                _ => "value",
            };
            eprintln!("error ({}): {}", kind, e);
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}

fn translate(table: &typogenetics::InstructionTable, strand: &str) {
    use typogenetics::{Enzyme, Strand};

    let strand = match Strand::parse(strand) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("error: bad strand: {}", e);
            std::process::exit(1);
        }
    };

    let enzyme = Enzyme::translate(table, &strand);
    let folds: String = enzyme.folds().iter().map(|f| f.tag()).collect();
    println!("{}", enzyme);
    println!("folds: {}", folds);
}
