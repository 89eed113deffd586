//! CLI entry point for the Major Explorer.
//!
//! Compares college majors by the salary, job openings and growth outlook of
//! the occupations they lead to, and drills into the careers of one major.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use major_explorer::aggregator::{MajorAggregate, aggregate_all, get_major_detail};
use major_explorer::cache::DatasetCache;
use major_explorer::comparison::{KeyStatistics, SortKey, SortOrder, select_majors, sort_aggregates};
use major_explorer::mapping::{DEFAULT_TOP_MAJORS, MajorMapping};
use major_explorer::output::{
    format_growth, format_jobs, format_salary, print_json, print_pretty, truncate_description,
    write_comparison_csv,
};
use serde::Serialize;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::{
    EnvFilter, Layer,
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
};

#[derive(Parser)]
#[command(name = "major_explorer")]
#[command(about = "Compare college majors by career salary, openings and growth", long_about = None)]
struct Cli {
    /// Occupation dataset (CSV)
    #[arg(
        long,
        global = true,
        env = "MAJORS_DATASET_PATH",
        default_value = "bls_occupations_all.csv"
    )]
    dataset: PathBuf,

    /// Optional JSON major mapping; the built-in table is used otherwise
    #[arg(long, global = true, env = "MAJORS_MAPPING_PATH")]
    mapping: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare majors side by side
    Compare {
        /// Major to include (repeatable); defaults to the top majors
        #[arg(short, long = "major", value_name = "MAJOR")]
        majors: Vec<String>,

        /// Include every mapped major
        #[arg(long, conflicts_with = "majors")]
        all: bool,

        #[arg(short, long, value_enum, default_value_t = SortKey::AvgSalary)]
        sort_by: SortKey,

        #[arg(short, long, value_enum, default_value_t = SortOrder::Descending)]
        order: SortOrder,

        /// Print the comparison as JSON
        #[arg(long, default_value_t = false)]
        json: bool,

        /// CSV file to write the comparison table to
        #[arg(long)]
        csv: Option<PathBuf>,
    },
    /// Show every career path of one major
    Detail {
        #[arg(value_name = "MAJOR")]
        major: String,

        /// Print the detail view as JSON
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// List the mapped majors
    Majors,
}

/// Comparison table as printed with `--json`.
#[derive(Serialize)]
struct ComparisonReport<'a> {
    generated_at: DateTime<Utc>,
    sort_by: SortKey,
    order: SortOrder,
    majors: &'a [MajorAggregate],
    key_statistics: Option<KeyStatistics<'a>>,
}

fn main() -> Result<()> {
    dotenvy::dotenv().ok(); // Load .env file

    // Logging setup: colored stderr + JSON rolling log file
    let log_file_path =
        std::env::var("LOG_FILE_PATH").unwrap_or_else(|_| "logs/major_explorer.log".to_string());
    let log_dir = Path::new(&log_file_path)
        .parent()
        .unwrap_or(Path::new("logs"));
    let log_file_name = Path::new(&log_file_path)
        .file_name()
        .unwrap_or(OsStr::new("major_explorer.log"));

    let file_appender = tracing_appender::rolling::daily(log_dir, log_file_name);
    let (non_blocking_file, _file_guard) = tracing_appender::non_blocking(file_appender);

    let stderr_layer = fmt::layer()
        .with_target(true)
        .with_span_events(FmtSpan::CLOSE)
        .with_ansi(true)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    let json_layer = fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(true)
        .with_writer(non_blocking_file)
        .with_filter(EnvFilter::from_env("RUST_LOG_JSON").add_directive("debug".parse()?));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    let cli = Cli::parse();

    let mapping = match &cli.mapping {
        Some(path) => MajorMapping::load(path)
            .with_context(|| format!("loading major mapping from {}", path.display()))?,
        None => MajorMapping::builtin(),
    };

    let mut cache = DatasetCache::new();

    match cli.command {
        Commands::Compare {
            majors,
            all,
            sort_by,
            order,
            json,
            csv,
        } => {
            let records = cache
                .records(&cli.dataset)
                .with_context(|| format!("loading dataset {}", cli.dataset.display()))?;
            let aggregates = aggregate_all(records, &mapping);

            let selected: Vec<String> = if all {
                mapping.majors().map(str::to_string).collect()
            } else if majors.is_empty() {
                DEFAULT_TOP_MAJORS.iter().map(|m| m.to_string()).collect()
            } else {
                majors
            };

            if selected.is_empty() {
                warn!("Select at least one major to compare");
                return Ok(());
            }

            for major in selected.iter().filter(|m| !mapping.contains(m)) {
                warn!(major = %major, "Unknown major, ignoring");
            }

            let mut rows = select_majors(&aggregates, &selected);
            sort_aggregates(&mut rows, sort_by, order);
            let key_statistics = KeyStatistics::from_aggregates(&rows);

            if json {
                print_json(&ComparisonReport {
                    generated_at: Utc::now(),
                    sort_by,
                    order,
                    majors: &rows,
                    key_statistics,
                })?;
            } else {
                print_comparison(&rows, key_statistics.as_ref());
            }

            if let Some(path) = csv {
                write_comparison_csv(&path, &rows)
                    .with_context(|| format!("writing comparison to {}", path.display()))?;
                info!(path = %path.display(), rows = rows.len(), "Comparison written");
            }
        }
        Commands::Detail { major, json } => {
            let records = cache
                .records(&cli.dataset)
                .with_context(|| format!("loading dataset {}", cli.dataset.display()))?;
            let detail = get_major_detail(&major, records, &mapping);

            if json {
                print_json(&detail)?;
                return Ok(());
            }

            let Some(stats) = &detail.stats else {
                warn!(major = %major, "No career data for this major");
                return Ok(());
            };

            info!(
                major = %detail.major,
                avg_salary = %format_salary(stats.avg_salary),
                salary_range = %format!(
                    "{} - {}",
                    format_salary(stats.min_salary),
                    format_salary(stats.max_salary)
                ),
                total_jobs = %format_jobs(stats.total_jobs),
                growth = %format_growth(stats.weighted_avg_growth),
                careers = stats.num_careers,
                "Career paths"
            );

            for career in &detail.careers {
                info!(
                    occupation = %career.occupation_name,
                    median_pay = career.median_pay_annual.as_deref().unwrap_or("n/a"),
                    jobs = %format_jobs(career.job_count),
                    outlook = career.job_outlook.as_deref().unwrap_or("n/a"),
                    education = career.entry_level_education.as_deref().unwrap_or("n/a"),
                    what_they_do = %truncate_description(career.what_they_do.as_deref().unwrap_or("")),
                    "Career"
                );
            }
            print_pretty(&detail.stats);
        }
        Commands::Majors => {
            for major in mapping.sorted_majors() {
                let occupations = mapping.occupations_for(major).map_or(0, <[String]>::len);
                info!(major, occupations, "Major");
            }
            info!(total = mapping.len(), "Major list");
        }
    }

    Ok(())
}

/// Logs the comparison table and its headline figures.
fn print_comparison(rows: &[MajorAggregate], key_statistics: Option<&KeyStatistics>) {
    for row in rows {
        info!(
            major = %row.major,
            avg_salary = %format_salary(row.avg_salary),
            salary_range = %format!(
                "{} - {}",
                format_salary(row.min_salary),
                format_salary(row.max_salary)
            ),
            total_jobs = %format_jobs(row.total_jobs),
            growth = %format_growth(row.weighted_avg_growth),
            career_paths = row.num_career_paths,
            top_careers = %row.top_3_careers.join(", "),
            "Major"
        );
    }

    let Some(stats) = key_statistics else {
        return;
    };

    info!(
        major = %stats.highest_salary.major,
        value = %format_salary(stats.highest_salary.avg_salary),
        "Highest avg salary"
    );
    info!(
        major = %stats.most_jobs.major,
        value = %format_jobs(stats.most_jobs.total_jobs),
        "Most job openings"
    );
    info!(
        major = %stats.fastest_growth.major,
        value = %format_growth(stats.fastest_growth.weighted_avg_growth),
        "Fastest growth"
    );
    info!(
        major = %stats.most_career_paths.major,
        careers = stats.most_career_paths.num_career_paths,
        "Most career paths"
    );
}
