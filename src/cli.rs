use std::env;
use std::fs::File;

use crate::data::loader::{load_game_data, GameData, DEFAULT_DATA_PATH};
use crate::data::validate::validate_game_data;
use crate::magic::mage::Mage;
use crate::magic::subsume::SubsumptionStrategy;
use crate::report::builder::{build_all_reports, NationReport, ReportOptions};
use crate::report::columns::render_nation_report;
use crate::report::export_csv::write_reports_csv;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Report,
    Variants,
    Validate,
    Export,
}

pub fn parse_command(args: &[String]) -> Option<Command> {
    match args.get(1).map(String::as_str) {
        Some("report") => Some(Command::Report),
        Some("variants") => Some(Command::Variants),
        Some("validate") => Some(Command::Validate),
        Some("export") => Some(Command::Export),
        _ => None,
    }
}

pub fn run_with_args(args: &[String]) -> i32 {
    match parse_command(args) {
        Some(Command::Report) => handle_report(args),
        Some(Command::Variants) => handle_variants(args),
        Some(Command::Validate) => handle_validate(args),
        Some(Command::Export) => handle_export(args),
        None => {
            eprintln!("usage: magelore <report|variants|validate|export>");
            2
        }
    }
}

fn data_path() -> String {
    env::var("MAGELORE_DATA").unwrap_or_else(|_| DEFAULT_DATA_PATH.to_string())
}

fn load_data() -> Result<GameData, i32> {
    match load_game_data(data_path()) {
        Ok(data) => Ok(data),
        Err(err) => {
            eprintln!("dataset error: {err}");
            Err(1)
        }
    }
}

fn report_options(args: &[String]) -> ReportOptions {
    ReportOptions {
        each_spell_once: !args.iter().any(|arg| arg == "--repeat-spells"),
        strategy: if args.iter().any(|arg| arg == "--by-chance") {
            SubsumptionStrategy::ChanceDominance
        } else {
            SubsumptionStrategy::Structural
        },
    }
}

/// First positional argument after the subcommand, skipping flags.
fn positional(args: &[String], index: usize) -> Option<&String> {
    args.iter()
        .skip(2)
        .filter(|arg| !arg.starts_with("--"))
        .nth(index)
}

fn handle_report(args: &[String]) -> i32 {
    let data = match load_data() {
        Ok(data) => data,
        Err(code) => return code,
    };
    let options = report_options(args);
    let reports = match build_all_reports(&data, &options) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("report failed: {err}");
            return 1;
        }
    };

    let filter = positional(args, 0).map(|s| s.to_lowercase());
    let selected: Vec<&NationReport> = reports
        .iter()
        .filter(|report| {
            filter
                .as_ref()
                .map_or(true, |needle| report.name.to_lowercase().contains(needle))
        })
        .collect();
    if selected.is_empty() {
        eprintln!("no nation matches the given filter");
        return 1;
    }

    if args.iter().any(|arg| arg == "--json") {
        match serde_json::to_string_pretty(&selected) {
            Ok(payload) => println!("{payload}"),
            Err(err) => {
                eprintln!("failed to serialize reports: {err}");
                return 1;
            }
        }
    } else {
        for report in selected {
            println!();
            print!("{}", render_nation_report(report));
        }
    }
    0
}

fn handle_variants(args: &[String]) -> i32 {
    let Some(wanted) = positional(args, 0) else {
        eprintln!("usage: magelore variants <mage name or unit id>");
        return 2;
    };
    let data = match load_data() {
        Ok(data) => data,
        Err(code) => return code,
    };

    let record = match wanted.parse::<u32>() {
        Ok(id) => data.mage_record(id),
        Err(_) => {
            let needle = wanted.to_lowercase();
            let mut ids: Vec<u32> = data.mages.keys().copied().collect();
            ids.sort_unstable();
            ids.into_iter()
                .map(|id| &data.mages[&id])
                .find(|record| record.name.to_lowercase() == needle)
        }
    };
    let Some(record) = record else {
        eprintln!("no mage matches '{wanted}'");
        return 1;
    };

    let mage = match Mage::new(&record.name, &record.paths, record.gcost) {
        Ok(mage) => mage,
        Err(err) => {
            eprintln!("{err}");
            return 1;
        }
    };

    println!("{mage}");
    if !mage.prefix.is_empty() && !mage.prefix_occurs {
        println!("guaranteed {} never occurs without a bonus", mage.prefix);
    }
    for variant in &mage.variants {
        match variant.note {
            Some(note) => println!("  {} {} ({note})", variant.paths, variant.chance),
            None => println!("  {} {}", variant.paths, variant.chance),
        }
    }
    0
}

fn handle_validate(args: &[String]) -> i32 {
    let path = positional(args, 0)
        .cloned()
        .unwrap_or_else(data_path);
    let data = match load_game_data(&path) {
        Ok(data) => data,
        Err(err) => {
            eprintln!("dataset error: {err}");
            return 1;
        }
    };
    let report = validate_game_data(&data);
    for diag in &report.diagnostics {
        println!("{diag}");
    }
    if report.has_errors() {
        eprintln!("validation failed: {path}");
        1
    } else {
        println!("validation passed: {path}");
        0
    }
}

fn handle_export(args: &[String]) -> i32 {
    let Some(out_path) = positional(args, 0) else {
        eprintln!("usage: magelore export <output.csv>");
        return 2;
    };
    let data = match load_data() {
        Ok(data) => data,
        Err(code) => return code,
    };
    let reports = match build_all_reports(&data, &report_options(args)) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("report failed: {err}");
            return 1;
        }
    };
    let file = match File::create(out_path) {
        Ok(file) => file,
        Err(err) => {
            eprintln!("unable to create '{out_path}': {err}");
            return 1;
        }
    };
    match write_reports_csv(file, &reports) {
        Ok(()) => {
            println!("wrote {out_path}");
            0
        }
        Err(err) => {
            eprintln!("csv export failed: {err}");
            1
        }
    }
}
