use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tesex_core::{BooleanMode, Criteria, Dataset, SortKey};

mod display;
mod session;

use session::Session;

/// Explorador de Tesis Jurídicas - filter, compare, and export legal-opinion records
///
/// Examples:
///   # Display every tesis, newest first
///   tesex tesis_juridicas.db
///
///   # Keyword search over headline and full text
///   tesex tesis_juridicas.db --keyword "contrato AND arrendamiento"
///
///   # OR mode, restricted to two subjects and a year range
///   tesex tesis_juridicas.db --keyword "contrato OR fraude" --mode or \
///       --materia Civil --materia Penal --year-from 2018 --year-to 2023
///
///   # Select records by registro digital and export them
///   tesex tesis_juridicas.db --select 2029123 --select 2029124 \
///       --export-csv seleccion.csv --export-doc seleccion.txt
#[derive(Parser, Debug)]
#[command(name = "tesex")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - Keyword segments are split on the literal AND/OR token per --mode\n  \
    - Each segment matches the full text OR the headline, case-insensitively\n  \
    - Subject, instance, and type filters are combined with AND\n  \
    - A bounded year range excludes records whose date could not be parsed\n\n\
Sorting Options:\n  \
    - year-desc / year-asc: by derived publication year, unparsed dates last\n  \
    - materia / tipo: alphabetical, missing values last")]
struct Cli {
    /// Path to the tesis SQLite database
    #[arg(value_name = "DATABASE")]
    database: PathBuf,

    /// Keyword query; segments combined per --mode
    #[arg(short, long, value_name = "QUERY", default_value = "")]
    keyword: String,

    /// Boolean mode for multi-segment keyword queries
    #[arg(short, long, value_enum, default_value_t = ModeArg::And)]
    mode: ModeArg,

    /// Filter by subject (repeatable)
    #[arg(long = "materia", value_name = "NAME")]
    materias: Vec<String>,

    /// Filter by court instance (repeatable)
    #[arg(long = "instancia", value_name = "NAME")]
    instancias: Vec<String>,

    /// Filter by opinion type (repeatable)
    #[arg(long = "tipo", value_name = "NAME")]
    tipos: Vec<String>,

    /// Lower bound of the year range (defaults to the dataset minimum)
    #[arg(long, value_name = "YEAR")]
    year_from: Option<i32>,

    /// Upper bound of the year range (defaults to the dataset maximum)
    #[arg(long, value_name = "YEAR")]
    year_to: Option<i32>,

    /// Sort order for the result table
    #[arg(short, long, value_enum, default_value_t = SortArg::YearDesc)]
    sort: SortArg,

    /// Print aggregate counts by type and top subjects
    #[arg(long)]
    counts: bool,

    /// Print the concatenated headline corpus (word-cloud feed)
    #[arg(long)]
    corpus: bool,

    /// Print the filtered set as JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Select a record by registro digital for comparison/export (repeatable)
    #[arg(long = "select", value_name = "REGISTRO")]
    select: Vec<String>,

    /// Export the selected records to a CSV spreadsheet
    #[arg(long, value_name = "PATH")]
    export_csv: Option<PathBuf>,

    /// Export the selected records to a plain-text document
    #[arg(long, value_name = "PATH")]
    export_doc: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    And,
    Or,
}

impl From<ModeArg> for BooleanMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::And => BooleanMode::And,
            ModeArg::Or => BooleanMode::Or,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SortArg {
    YearDesc,
    YearAsc,
    Materia,
    Tipo,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::YearDesc => SortKey::YearDesc,
            SortArg::YearAsc => SortKey::YearAsc,
            SortArg::Materia => SortKey::Materia,
            SortArg::Tipo => SortKey::Tipo,
        }
    }
}

/// Build one evaluation's criteria from the CLI flags. A year bound given
/// on only one side is completed from the dataset's derived-year bounds.
fn build_criteria(cli: &Cli, dataset: &Dataset) -> Criteria {
    let year_range = if cli.year_from.is_some() || cli.year_to.is_some() {
        let (minimo, maximo) = dataset.year_bounds().unwrap_or((i32::MIN, i32::MAX));
        Some((
            cli.year_from.unwrap_or(minimo),
            cli.year_to.unwrap_or(maximo),
        ))
    } else {
        None
    };

    Criteria {
        keyword: cli.keyword.clone(),
        mode: cli.mode.into(),
        materias: cli.materias.clone(),
        instancias: cli.instancias.clone(),
        tipos: cli.tipos.clone(),
        year_range,
        sort_key: cli.sort.into(),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let dataset = Dataset::load(&cli.database).with_context(|| {
        format!(
            "failed to open tesis database '{}'",
            cli.database.display()
        )
    })?;
    tracing::debug!(records = dataset.len(), "base de datos cargada");

    let mut session = Session::new(dataset);
    session.criteria = build_criteria(&cli, session.dataset());
    for registro in &cli.select {
        session.selection.select(registro);
    }

    let filtered = session.filtered();

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&filtered)?);
    } else {
        display::print_table(&filtered);
    }

    if cli.counts {
        display::print_counts(&filtered);
    }
    if cli.corpus {
        display::print_corpus(&filtered);
    }

    let selected = session.selected(&filtered);
    if !selected.is_empty() && !cli.json {
        display::print_comparison(&selected);
    }

    if cli.export_csv.is_some() || cli.export_doc.is_some() {
        if selected.is_empty() {
            display::warn_empty_selection();
        } else {
            if let Some(path) = &cli.export_csv {
                let escritos = session
                    .export_csv(&filtered, path)
                    .with_context(|| format!("CSV export to '{}' failed", path.display()))?;
                println!("{} tesis exportadas a '{}'", escritos, path.display());
            }
            if let Some(path) = &cli.export_doc {
                let escritos = session
                    .export_document(&filtered, path)
                    .with_context(|| format!("document export to '{}' failed", path.display()))?;
                println!("{} tesis exportadas a '{}'", escritos, path.display());
            }
        }
    }

    Ok(())
}
