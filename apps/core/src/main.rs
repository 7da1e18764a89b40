// EarthScience.AI command-line front end
// Serves the dashboard's Q&A and mock model results on the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use earthscience_core::actors::supervisor::SupervisorHandle;
use earthscience_core::config::AppConfig;
use earthscience_core::dashboard::{self, CommodityFilter, ExplorationInput, FeatureInputs, Location};
use earthscience_core::logging::init_tracing;
use earthscience_core::qa::KnowledgeBase;
use earthscience_core::AppError;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "earthscience", version, about = "Predictive mineral exploration dashboard core")]
struct Cli {
    /// Skip the simulated latency
    #[arg(long, global = true)]
    instant: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Ask a geochemical methods question
    Ask {
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
        /// Print the full answer record as JSON
        #[arg(long)]
        json: bool,
    },
    /// Interactive Q&A session (type `exit` to quit)
    Repl,
    /// Run the mineral predictor
    Predict {
        /// Feature inputs as JSON; defaults to the sample form values
        #[arg(long)]
        inputs: Option<String>,
    },
    /// Run the prospect analysis
    Analyze {
        /// Exploration input as JSON; defaults to the sample prospect
        #[arg(long)]
        input: Option<String>,
        /// Override the location, as "lat, lon"
        #[arg(long)]
        location: Option<String>,
    },
    /// List sample sites
    Sites {
        /// Commodity name or `all`
        #[arg(long, default_value = "all")]
        commodity: String,
    },
    /// Analytics charts data
    Stats,
    /// List the laboratory methods in the knowledge base
    Methods,
    /// Reporting limits for one element symbol across methods
    Element { symbol: String },
}

#[derive(Serialize)]
struct CommodityLegend {
    name: &'static str,
    color: &'static str,
}

#[derive(Serialize)]
struct Stats {
    commodities: Vec<CommodityLegend>,
    distribution: &'static [dashboard::CommodityShare],
    feature_importance: &'static [dashboard::FeatureImportance],
    heatmap: &'static [dashboard::HeatmapCell],
}

#[derive(Serialize)]
struct MethodSummary<'a> {
    key: &'a str,
    name: &'a str,
    column_heading: &'a str,
    elements: usize,
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if cli.instant {
        config.qa_delay = std::time::Duration::ZERO;
        config.prediction_delay = std::time::Duration::ZERO;
    }
    init_tracing(config.log_format)?;

    match cli.command {
        Command::Ask { query, json } => {
            let supervisor = SupervisorHandle::new(&config);
            let record = supervisor.submit_query(query.join(" ")).await?;
            if json {
                print_json(&record)?;
            } else {
                println!("{}", record.answer.text);
            }
        }
        Command::Repl => run_repl(&config).await?,
        Command::Predict { inputs } => {
            let inputs: FeatureInputs = match inputs {
                Some(raw) => serde_json::from_str(&raw).map_err(AppError::from)?,
                None => FeatureInputs::default(),
            };
            let supervisor = SupervisorHandle::new(&config);
            print_json(&supervisor.predict_mineral(inputs).await?)?;
        }
        Command::Analyze { input, location } => {
            let mut input: ExplorationInput = match input {
                Some(raw) => serde_json::from_str(&raw).map_err(AppError::from)?,
                None => ExplorationInput::default(),
            };
            if let Some(location) = location {
                input.location = location.parse::<Location>()?;
            }
            let supervisor = SupervisorHandle::new(&config);
            print_json(&supervisor.run_analysis(input).await?)?;
        }
        Command::Sites { commodity } => {
            let filter: CommodityFilter = commodity.parse()?;
            print_json(&dashboard::filter_sites(filter))?;
        }
        Command::Stats => {
            let stats = Stats {
                commodities: dashboard::Commodity::ALL
                    .iter()
                    .map(|c| CommodityLegend {
                        name: c.name(),
                        color: c.color(),
                    })
                    .collect(),
                distribution: dashboard::commodity_distribution(),
                feature_importance: dashboard::feature_importance(),
                heatmap: dashboard::heatmap(),
            };
            print_json(&stats)?;
        }
        Command::Methods => {
            let methods: Vec<MethodSummary> = KnowledgeBase::global()
                .methods()
                .iter()
                .map(|m| MethodSummary {
                    key: &m.key,
                    name: &m.name,
                    column_heading: &m.column_heading,
                    elements: m.elements.len(),
                })
                .collect();
            print_json(&methods)?;
        }
        Command::Element { symbol } => {
            let reports = KnowledgeBase::global().element_limits(&symbol);
            if reports.is_empty() {
                return Err(AppError::Validation(format!("No reporting limits recorded for '{}'", symbol)).into());
            }
            print_json(&reports)?;
        }
    }

    Ok(())
}

async fn run_repl(config: &AppConfig) -> Result<()> {
    let supervisor = SupervisorHandle::new(config);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();

    info!("Geochemical Q&A ready");
    loop {
        stdout.write_all(b"> ").await?;
        stdout.flush().await?;

        let Some(line) = lines.next_line().await? else {
            break;
        };
        if matches!(line.trim(), "exit" | "quit") {
            break;
        }

        match supervisor.submit_query(line).await {
            Ok(record) => {
                stdout.write_all(record.answer.text.as_bytes()).await?;
                stdout.write_all(b"\n\n").await?;
            }
            Err(e) if e.is_user_error() => warn!("{}", e),
            Err(e) => return Err(e.into()),
        }
    }

    supervisor.shutdown().await?;
    Ok(())
}
