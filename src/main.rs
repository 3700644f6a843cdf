//! Command line demonstrator for the NPDA KPI engine.
//!
//! Loads a patient cohort from a JSON file when one is given, otherwise
//! generates a seeded synthetic cohort, then prints the KPI report as
//! pretty JSON on stdout.

use anyhow::{Context, Result, bail};
use chrono::{Local, NaiveDate};
use itertools::Itertools;
use log::info;
use npda_kpi::generator::{AgeRange, FakePatientCreator};
use npda_kpi::kpi::{KpiCalculator, calculate_kpis_by_pdu};
use npda_kpi::models::{Patient, PatientCollection};
use std::fs;

/// PZ code used for the synthetic cohort when none is given
const DEFAULT_PZ_CODE: &str = "PZ215";

/// Seed for the synthetic cohort so repeated runs print the same report
const DEMO_SEED: u64 = 2024;

/// Synthetic patients generated per age band per PZ code
const PATIENTS_PER_AGE_BAND: usize = 5;

struct CliArgs {
    pz_codes: Vec<String>,
    calculation_date: Option<NaiveDate>,
    per_pdu: bool,
    patients_path: Option<String>,
}

fn print_usage() {
    println!("Usage: npda-kpi [OPTIONS] [PATIENTS_JSON]");
    println!();
    println!("Arguments:");
    println!("  PATIENTS_JSON      JSON file holding an array of patient records;");
    println!("                     a synthetic cohort is generated when omitted");
    println!();
    println!("Options:");
    println!("  --pz CODES         Comma separated PZ codes to calculate for (default {DEFAULT_PZ_CODE})");
    println!("  --date YYYY-MM-DD  Calculation date selecting the audit period (default today)");
    println!("  --per-pdu          Print one report per PZ code instead of a combined report");
    println!("  -h, --help         Print this help");
}

fn parse_args() -> Result<CliArgs> {
    let mut parsed = CliArgs {
        pz_codes: Vec::new(),
        calculation_date: None,
        per_pdu: false,
        patients_path: None,
    };

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pz" => {
                let codes = args
                    .next()
                    .context("--pz requires a comma separated list of PZ codes")?;
                parsed
                    .pz_codes
                    .extend(codes.split(',').map(|code| code.trim().to_string()));
            }
            "--date" => {
                let date = args
                    .next()
                    .context("--date requires a date in YYYY-MM-DD format")?;
                parsed.calculation_date = Some(
                    NaiveDate::parse_from_str(&date, "%Y-%m-%d")
                        .with_context(|| format!("could not parse calculation date {date}"))?,
                );
            }
            "--per-pdu" => parsed.per_pdu = true,
            "-h" | "--help" => {
                print_usage();
                std::process::exit(0);
            }
            path if !path.starts_with('-') => {
                if parsed.patients_path.is_some() {
                    bail!("only one patient data file can be given");
                }
                parsed.patients_path = Some(path.to_string());
            }
            unknown => bail!("unknown argument {unknown}, try --help"),
        }
    }

    if parsed.pz_codes.is_empty() {
        parsed.pz_codes.push(DEFAULT_PZ_CODE.to_string());
    }

    Ok(parsed)
}

/// Load patients from the given JSON file, or generate a demo cohort
/// covering every age band for each requested PZ code.
fn load_collection(args: &CliArgs, calculation_date: NaiveDate) -> Result<PatientCollection> {
    match &args.patients_path {
        Some(path) => {
            info!("Loading patients from {path}");
            let raw = fs::read_to_string(path)
                .with_context(|| format!("failed to read patient data from {path}"))?;
            let patients: Vec<Patient> = serde_json::from_str(&raw)
                .with_context(|| format!("failed to decode patient data in {path}"))?;
            Ok(PatientCollection::from_patients(patients))
        }
        None => {
            info!("No patient data file given, generating a seeded demo cohort");
            let mut creator = FakePatientCreator::new(calculation_date, Some(DEMO_SEED))?;
            let mut collection = PatientCollection::new();
            for pz_code in &args.pz_codes {
                for age_range in AgeRange::ALL {
                    for patient in
                        creator.build_patients(PATIENTS_PER_AGE_BAND, age_range, pz_code)
                    {
                        collection.add(patient);
                    }
                }
            }
            Ok(collection)
        }
    }
}

fn main() -> Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = parse_args()?;
    let calculation_date = args
        .calculation_date
        .unwrap_or_else(|| Local::now().date_naive());

    let collection = load_collection(&args, calculation_date)?;
    info!(
        "Loaded {} patients for PZ codes {}",
        collection.count(),
        args.pz_codes.iter().join(", ")
    );

    if args.per_pdu {
        let reports = calculate_kpis_by_pdu(&collection, &args.pz_codes, Some(calculation_date))?;
        let mut by_pdu = serde_json::Map::new();
        for (pz_code, report) in reports {
            by_pdu.insert(pz_code, serde_json::to_value(&report)?);
        }
        println!("{}", serde_json::to_string_pretty(&by_pdu)?);
    } else {
        let calculator =
            KpiCalculator::new(&collection, args.pz_codes.clone(), Some(calculation_date))?;
        let report = calculator.calculate_kpis();
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(())
}
