use std::path::PathBuf;

use clap::Args;

use crate::catalog::store::DiseaseCatalog;
use crate::cli::OutputFormat;
use crate::core::query::SymptomQuery;
use crate::matching::engine::{MatchResult, MatchingConfig, SymptomMatcher};
use crate::utils::validation::{
    split_symptom_list, validate_measurement, validate_symptoms, MAX_AGE_YEARS, MAX_WEIGHT_KG,
};

#[derive(Args)]
pub struct CheckArgs {
    /// Reported symptoms, e.g. fever "sore throat"
    pub symptoms: Vec<String>,

    /// Comma-separated symptoms, combined with any positional ones
    #[arg(long = "symptoms", value_name = "LIST")]
    pub symptom_list: Option<String>,

    /// Patient age in years (recorded, not used for scoring)
    #[arg(long)]
    pub age: Option<f64>,

    /// Patient weight in kg (recorded, not used for scoring)
    #[arg(long)]
    pub weight: Option<f64>,

    /// Path to custom catalog file
    #[arg(long)]
    pub catalog: Option<PathBuf>,

    /// Number of results to show
    #[arg(short = 'n', long, default_value = "3")]
    pub max_results: usize,
}

/// Execute check subcommand
///
/// # Errors
///
/// Returns an error if the symptoms or measurements are invalid, or the
/// catalog cannot be loaded.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: CheckArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let query = build_query(&args)?;

    if verbose {
        eprintln!(
            "Checking {} distinct symptom(s): {}",
            query.symptom_set.len(),
            query.symptoms.join(", ")
        );
    }

    let catalog = DiseaseCatalog::load(args.catalog.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} diseases", catalog.len());
    }

    if catalog.is_empty() {
        eprintln!("Warning: Catalog is empty, no diseases to match against.");
        return Ok(());
    }

    let config = MatchingConfig {
        result_limit: args.max_results,
    };
    let engine = SymptomMatcher::with_config(&catalog, config);
    let matches = engine.find_matches(&query);

    match format {
        OutputFormat::Text => {
            if matches.is_empty() {
                eprintln!("No matching diseases found.");
            } else {
                print_text_results(&matches, verbose);
            }
        }
        OutputFormat::Json => print_json_results(&query, &matches)?,
        OutputFormat::Tsv => print_tsv_results(&matches),
    }

    Ok(())
}

fn build_query(args: &CheckArgs) -> anyhow::Result<SymptomQuery> {
    let mut raw = args.symptoms.clone();
    if let Some(list) = &args.symptom_list {
        raw.extend(split_symptom_list(list));
    }

    let symptoms = validate_symptoms(&raw)?;
    let age = args
        .age
        .map(|v| validate_measurement(v, "age", MAX_AGE_YEARS))
        .transpose()?;
    let weight = args
        .weight
        .map(|v| validate_measurement(v, "weight", MAX_WEIGHT_KG))
        .transpose()?;

    Ok(SymptomQuery::new(symptoms).with_age(age).with_weight(weight))
}

fn list_or_dash(items: &[String]) -> String {
    if items.is_empty() {
        "-".to_string()
    } else {
        items.join(", ")
    }
}

fn print_text_results(matches: &[MatchResult], verbose: bool) {
    for (i, result) in matches.iter().enumerate() {
        if i > 0 {
            println!("\n{}", "─".repeat(60));
        }

        println!(
            "\n#{} {} ({:.2}%)",
            i + 1,
            result.disease_name,
            result.match_score
        );
        println!("   Severity: {}", result.severity);
        println!("   Recommendation: {}", result.recommendation);
        if !result.specialist.is_empty() {
            println!("   Specialist: {}", result.specialist);
        }
        if verbose {
            println!("   Matched symptoms: {}", result.matched_symptoms.join(", "));
        }

        println!("\n   Allopathic medicines: {}", list_or_dash(&result.allopathic_medicines));
        println!("   Home remedies: {}", list_or_dash(&result.home_remedies));
        println!("   Ayurvedic medicines: {}", list_or_dash(&result.ayurvedic_medicines));
    }

    println!("\nThese results are advisory and are not a diagnosis.");
}

fn print_json_results(query: &SymptomQuery, matches: &[MatchResult]) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "query": {
            "symptoms": query.symptoms,
            "age": query.age,
            "weight": query.weight,
        },
        "results": matches,
    });
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv_results(matches: &[MatchResult]) {
    println!(
        "rank\tdisease\tmatch_score\tseverity\trecommendation\tspecialist\tmatched_symptoms\tallopathic_medicines\thome_remedies\tayurvedic_medicines"
    );
    for (i, m) in matches.iter().enumerate() {
        println!(
            "{}\t{}\t{:.2}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            i + 1,
            m.disease_name,
            m.match_score,
            m.severity,
            m.recommendation,
            m.specialist,
            m.matched_symptoms.join(";"),
            m.allopathic_medicines.join(";"),
            m.home_remedies.join(";"),
            m.ayurvedic_medicines.join(";"),
        );
    }
}
