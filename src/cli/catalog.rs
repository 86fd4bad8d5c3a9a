use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::catalog::store::DiseaseCatalog;
use crate::cli::OutputFormat;
use crate::core::doctor::Doctor;
use crate::core::types::RemedyType;

#[derive(Args)]
pub struct CatalogArgs {
    #[command(subcommand)]
    pub command: CatalogCommands,
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List all diseases in the catalog
    List {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Filter by severity (e.g., "High")
        #[arg(long)]
        severity: Option<String>,
    },

    /// Show details of a specific disease
    Show {
        /// Disease name (case-insensitive)
        #[arg(required = true)]
        name: String,

        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List every known symptom
    Symptoms {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// List doctors in the consultation directory
    Doctors {
        /// Path to custom catalog file
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Only doctors with this specialization (e.g., "Pulmonologist")
        #[arg(long)]
        specialist: Option<String>,
    },

    /// Export the catalog to a file
    Export {
        /// Output file path
        #[arg(required = true)]
        output: PathBuf,

        /// Path to custom catalog file to export (defaults to embedded)
        #[arg(long)]
        catalog: Option<PathBuf>,
    },
}

/// Execute catalog subcommand
///
/// # Errors
///
/// Returns an error if the catalog cannot be loaded, a disease is not found,
/// or output cannot be written.
pub fn run(args: CatalogArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    match args.command {
        CatalogCommands::List { catalog, severity } => {
            run_list(catalog, severity.as_deref(), format, verbose)
        }
        CatalogCommands::Show { name, catalog } => run_show(&name, catalog, format),
        CatalogCommands::Symptoms { catalog } => run_symptoms(catalog, format),
        CatalogCommands::Doctors {
            catalog,
            specialist,
        } => run_doctors(catalog, specialist.as_deref(), format),
        CatalogCommands::Export { output, catalog } => run_export(output, catalog),
    }
}

fn run_list(
    catalog_path: Option<PathBuf>,
    severity_filter: Option<&str>,
    format: OutputFormat,
    verbose: bool,
) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(catalog_path.as_deref())?;

    if verbose {
        eprintln!("Loaded catalog with {} diseases", catalog.len());
    }

    let filtered: Vec<_> = catalog
        .diseases
        .iter()
        .filter(|d| {
            severity_filter.map_or(true, |s| d.severity.as_str().eq_ignore_ascii_case(s))
        })
        .collect();

    match format {
        OutputFormat::Text => {
            let name_width = filtered
                .iter()
                .map(|d| d.name.len().min(35))
                .max()
                .unwrap_or(4)
                .max(4);
            let specialist_width = filtered
                .iter()
                .map(|d| d.specialist.len())
                .max()
                .unwrap_or(10)
                .max(10);

            let total_width = name_width + specialist_width + 10 + 9 + 10 + 4;

            println!("Disease Catalog ({} diseases)\n", filtered.len());
            println!(
                "{:<name_w$} {:<10} {:<spec_w$} {:>9} {:>10}",
                "Name",
                "Severity",
                "Specialist",
                "Symptoms",
                "Medicines",
                name_w = name_width,
                spec_w = specialist_width
            );
            println!("{}", "-".repeat(total_width));

            for d in &filtered {
                println!(
                    "{:<name_w$} {:<10} {:<spec_w$} {:>9} {:>10}",
                    truncate(&d.name, name_width),
                    d.severity.as_str(),
                    d.specialist,
                    d.symptom_set.len(),
                    d.medicines.len(),
                    name_w = name_width,
                    spec_w = specialist_width
                );
                if verbose {
                    println!("  └─ {}", d.symptoms.join(", "));
                }
            }
        }
        OutputFormat::Json => {
            let output: Vec<serde_json::Value> = filtered
                .iter()
                .map(|d| {
                    serde_json::json!({
                        "name": d.name,
                        "severity": d.severity,
                        "specialist": d.specialist,
                        "symptom_count": d.symptom_set.len(),
                        "medicine_count": d.medicines.len(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Tsv => {
            println!("name\tseverity\tspecialist\tsymptoms\tmedicines");
            for d in &filtered {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    d.name,
                    d.severity,
                    d.specialist,
                    d.symptoms.join(";"),
                    d.medicines.len()
                );
            }
        }
    }

    Ok(())
}

fn run_show(name: &str, catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(catalog_path.as_deref())?;

    let disease = catalog
        .get(name)
        .ok_or_else(|| anyhow::anyhow!("Disease '{}' not found", name))?;

    match format {
        OutputFormat::Text => {
            println!("Disease: {}\n", disease.name);
            println!("Severity:   {}", disease.severity);
            println!(
                "Specialist: {}",
                if disease.specialist.is_empty() {
                    "-"
                } else {
                    disease.specialist.as_str()
                }
            );
            println!("Symptoms:   {}", disease.symptoms.join(", "));

            if let Some(desc) = &disease.description {
                println!("\nDescription: {desc}");
            }

            if !disease.medicines.is_empty() {
                println!("\nMedicines:");
                println!("{:<25} {:<12} Dosage", "Name", "Type");
                println!("{}", "-".repeat(60));
                for medicine in &disease.medicines {
                    println!(
                        "{:<25} {:<12} {}",
                        medicine.name,
                        medicine.remedy_type.to_string(),
                        medicine.dosage.as_deref().unwrap_or("-")
                    );
                }

                let homeopathic = disease.medicine_names(RemedyType::Homeopathy);
                if !homeopathic.is_empty() {
                    println!(
                        "\nNote: homeopathic entries are not included in symptom check results: {}",
                        homeopathic.join(", ")
                    );
                }
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&disease)?);
        }
        OutputFormat::Tsv => {
            println!("medicine\tremedy_type\tdosage\tprescription_required");
            for medicine in &disease.medicines {
                println!(
                    "{}\t{:?}\t{}\t{}",
                    medicine.name,
                    medicine.remedy_type,
                    medicine.dosage.as_deref().unwrap_or(""),
                    medicine.prescription_required
                );
            }
        }
    }

    Ok(())
}

fn run_symptoms(catalog_path: Option<PathBuf>, format: OutputFormat) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(catalog_path.as_deref())?;
    let vocabulary = catalog.symptom_vocabulary();

    match format {
        OutputFormat::Text => {
            println!("Known symptoms ({})\n", vocabulary.len());
            for name in &vocabulary {
                println!("  {name}");
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&vocabulary)?),
        OutputFormat::Tsv => {
            println!("symptom");
            for name in &vocabulary {
                println!("{name}");
            }
        }
    }

    Ok(())
}

fn run_doctors(
    catalog_path: Option<PathBuf>,
    specialist: Option<&str>,
    format: OutputFormat,
) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(catalog_path.as_deref())?;
    let doctors: Vec<&Doctor> = match specialist {
        Some(s) => catalog.doctors_for(s),
        None => catalog.doctors.iter().collect(),
    };

    match format {
        OutputFormat::Text => {
            if doctors.is_empty() {
                eprintln!("No doctors found.");
                return Ok(());
            }
            println!(
                "{:<25} {:<20} {:>5} {:>10} {:<10}",
                "Name", "Specialization", "Years", "Fee", "Available"
            );
            println!("{}", "-".repeat(74));
            for d in &doctors {
                println!(
                    "{:<25} {:<20} {:>5} {:>10.2} {:<10}{}",
                    truncate(&d.name, 25),
                    truncate(&d.specialization, 20),
                    d.experience_years,
                    d.consultation_fee,
                    d.available_days,
                    if d.verified { "" } else { " (unverified)" }
                );
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&doctors)?),
        OutputFormat::Tsv => {
            println!("name\tspecialization\tqualification\texperience_years\tconsultation_fee\tverified\tavailable_days");
            for d in &doctors {
                println!(
                    "{}\t{}\t{}\t{}\t{:.2}\t{}\t{}",
                    d.name,
                    d.specialization,
                    d.qualification,
                    d.experience_years,
                    d.consultation_fee,
                    d.verified,
                    d.available_days
                );
            }
        }
    }

    Ok(())
}

fn run_export(output: PathBuf, catalog_path: Option<PathBuf>) -> anyhow::Result<()> {
    let catalog = DiseaseCatalog::load(catalog_path.as_deref())?;

    let json = catalog.to_json()?;
    std::fs::write(&output, json)?;

    println!(
        "Exported {} diseases to {}",
        catalog.len(),
        output.display()
    );

    Ok(())
}

/// Truncate to at most `max_len` characters, marking the cut with "..."
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}
