use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use clap::Parser;
use tracing::info;
use ns_core::{Error, Result};
use ns_inference::prelude::*;
use ns_scrappers::cli::{handle_command, FetchArgs};
use ns_scrappers::logging::init_logging;
use ns_scrappers::scrapers::{get_fetcher, FETCHER_NAMES};

#[derive(Debug, Clone, PartialEq)]
struct HumanDuration(Duration);

impl FromStr for HumanDuration {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut total_seconds = 0u64;
        let mut current_number = String::new();
        let mut has_unit = false;

        for c in s.chars() {
            if c.is_ascii_digit() {
                current_number.push(c);
            } else if let Ok(num) = current_number.parse::<u64>() {
                let seconds = match c {
                    's' => Some(num),
                    'm' => num.checked_mul(60),
                    'h' => num.checked_mul(3600),
                    _ => return Err(format!("Invalid duration unit: {}", c)),
                };
                total_seconds = seconds
                    .and_then(|secs| total_seconds.checked_add(secs))
                    .ok_or_else(|| "Duration is too large".to_string())?;
                current_number.clear();
                has_unit = true;
            } else if !c.is_whitespace() {
                return Err(format!("Invalid character in duration: {}", c));
            }
        }

        // A trailing bare number is seconds
        if !current_number.is_empty() {
            if let Ok(num) = current_number.parse::<u64>() {
                total_seconds = total_seconds
                    .checked_add(num)
                    .ok_or_else(|| "Duration is too large".to_string())?;
                has_unit = true;
            } else {
                return Err("Invalid number in duration".to_string());
            }
        }

        if !has_unit {
            return Err("Duration must include a number".to_string());
        }

        Ok(HumanDuration(Duration::from_secs(total_seconds)))
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Company news sentiment and topic reports", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = "dummy", help = "Model to use for inference. Available models: dummy (default), deepseek")]
    model: String,
    #[arg(long, env = "DEEPSEEK_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    #[arg(long)]
    model_url: Option<String>,
    /// News source to fetch headlines from
    #[arg(long, default_value = "bing")]
    source: String,
    /// JSON file replacing the built-in topic vocabulary
    #[arg(long)]
    vocabulary: Option<PathBuf>,
    /// Skip speech synthesis of the narrative
    #[arg(long)]
    no_audio: bool,
    #[arg(long, default_value_t = 4)]
    concurrency: usize,
    #[arg(long, default_value_t = 10)]
    max_articles: usize,
    /// Give up analyzing after this long and report on what finished (e.g. 30s, 2m)
    #[arg(long)]
    deadline: Option<HumanDuration>,
    #[arg(long, default_value_t = 0.7)]
    confidence_threshold: f64,
    #[arg(short, long)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Analyze the latest news about a company and print the report as JSON
    Analyze {
        company: String,
        /// Single-line JSON instead of pretty printed
        #[arg(long)]
        compact: bool,
    },
    /// Serve POST /analyze over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1:5000")]
        addr: SocketAddr,
    },
    /// Print the raw headlines a source returns for a query
    Fetch(FetchArgs),
}

async fn build_pipeline(cli: &Cli) -> Result<Pipeline> {
    let fetcher = get_fetcher(&cli.source).ok_or_else(|| {
        Error::Config(format!(
            "Unknown source '{}'. Available sources: {}",
            cli.source,
            FETCHER_NAMES.join(", ")
        ))
    })?;

    let config = Config {
        api_key: cli.api_key.clone(),
        model_name: Some(cli.model.clone()),
        model_url: cli.model_url.clone(),
    };
    let models = create_model(Some(config)).await?;
    info!("🧠 Inference model initialized successfully (using {})", models.summarizer.name());

    let vocabulary = match &cli.vocabulary {
        Some(path) => {
            let vocabulary = TopicVocabulary::from_path(path)?;
            info!("📚 Loaded {} topics from {}", vocabulary.rules().len(), path.display());
            vocabulary
        }
        None => TopicVocabulary::default(),
    };

    if !(0.0..=1.0).contains(&cli.confidence_threshold) {
        return Err(Error::Config(format!(
            "Confidence threshold must be between 0 and 1, got {}",
            cli.confidence_threshold
        )));
    }

    let analyzer = ArticleAnalyzer::new(
        models.summarizer,
        models.classifier,
        TopicDetector::new(Arc::new(vocabulary)),
    )
    .with_settings(AnalyzerSettings {
        confidence_threshold: cli.confidence_threshold,
        ..AnalyzerSettings::default()
    });

    let assembler = ReportAssembler::new(create_synthesizer(!cli.no_audio));

    Ok(Pipeline::new(fetcher, analyzer, assembler).with_settings(PipelineSettings {
        max_articles: cli.max_articles,
        concurrency: cli.concurrency,
        deadline: cli.deadline.as_ref().map(|d| d.0),
    }))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Commands::Analyze { company, compact } => {
            let company = company.trim();
            if company.is_empty() {
                return Err(Error::Config("No company name provided".to_string()));
            }
            let pipeline = build_pipeline(&cli).await?;
            let report = pipeline.scrape_and_analyze(company).await?;
            let json = if *compact {
                serde_json::to_string(&report)?
            } else {
                serde_json::to_string_pretty(&report)?
            };
            println!("{}", json);
        }
        Commands::Serve { addr } => {
            let pipeline = build_pipeline(&cli).await?;
            ns_web::serve(*addr, ns_web::AppState::new(pipeline)).await?;
        }
        Commands::Fetch(args) => {
            handle_command(args.clone()).await?;
        }
    }

    Ok(())
}
