use anyhow::{bail, Context};
use clap::Parser;
use exomatch::dataset::{load_columns, load_config, load_records, load_schema};
use exomatch::{FeatureSchema, FeatureVector, MatchConfig, MatchReport, MatchSession, PlanetarySystem};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// Find the known exoplanet closest to a described planetary system
#[derive(Parser, Debug)]
#[command(name = "exomatch")]
#[command(about = "Nearest-neighbor exoplanet matcher", long_about = None)]
struct Args {
    /// Candidate columns (JSON: array of {name, values} or object of feature -> values)
    #[arg(long)]
    columns: PathBuf,

    /// Full source records (JSON array of objects with string or null fields)
    #[arg(long)]
    records: PathBuf,

    /// Query vector in schema order, comma separated
    #[arg(long, value_delimiter = ',', allow_hyphen_values = true, conflicts_with = "system")]
    query: Option<Vec<f64>>,

    /// Query as a planetary system JSON object
    #[arg(long)]
    system: Option<String>,

    /// Feature schema JSON; the six-feature planet schema when omitted
    #[arg(long)]
    schema: Option<PathBuf>,

    /// Match configuration JSON
    #[arg(long)]
    config: Option<PathBuf>,

    /// The query is already normalized
    #[arg(long, default_value_t = false)]
    scaled: bool,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting exomatch v{}", env!("CARGO_PKG_VERSION"));

    let schema = match &args.schema {
        Some(path) => load_schema(path)?,
        None => FeatureSchema::planets(),
    };
    let config = match &args.config {
        Some(path) => load_config(path)?,
        None => MatchConfig::default(),
    };
    let columns = load_columns(&args.columns, &schema)?;
    let records = load_records(&args.records)?;

    let session = MatchSession::new(schema, columns, records, config)
        .context("building match session")?;

    let raw_query = match (&args.query, &args.system) {
        (Some(values), None) => FeatureVector::new(values.clone()),
        (None, Some(json)) => {
            let system: PlanetarySystem =
                serde_json::from_str(json).context("parsing --system")?;
            exomatch::stages::vectorize_description(session.schema(), &system.to_description())?
        }
        _ => bail!("exactly one of --query or --system is required"),
    };
    info!(query = ?raw_query.as_slice(), "matching query");

    let query = if args.scaled {
        raw_query
    } else {
        session.prepare_query(&raw_query)?
    };
    let lookup = session.lookup_scaled(&query)?;
    let report = MatchReport::new(&session, &query, &lookup)?;

    info!(
        distance = report.distance,
        candidate_index = report.candidate_index,
        record_index = report.record_index,
        top_feature = report.top_contributing_feature().unwrap_or("-"),
        "closest planet: {}",
        report.name.as_deref().unwrap_or("<unnamed>")
    );

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
