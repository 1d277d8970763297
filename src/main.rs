use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use gridiron_iq::config::{DEFAULT_HOST, DEFAULT_PORT};
use gridiron_iq::server::{parse_categories, QuestionsResponse};
use gridiron_iq::{QuestionStore, QuizSelector, ServerConfig, DEFAULT_QUESTIONS_PATH};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// JSON file to load the questions from
    #[arg(short, long, env = "GRIDIRON_QUESTIONS", default_value = DEFAULT_QUESTIONS_PATH)]
    questions: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the quiz API over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, env = "GRIDIRON_HOST", default_value = DEFAULT_HOST)]
        host: String,

        /// Port to listen on
        #[arg(short, long, env = "GRIDIRON_PORT", default_value_t = DEFAULT_PORT)]
        port: u16,
    },

    /// Print one randomized quiz as JSON
    Draw {
        /// Number of questions to draw
        #[arg(short, long, default_value_t = 4, value_parser = clap::value_parser!(u32).range(1..))]
        count: u32,

        /// Comma-separated category filter, e.g. "History,Scheme"
        #[arg(long)]
        categories: Option<String>,

        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gridiron_iq=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let result = match args.command {
        Command::Serve { host, port } => {
            let config = ServerConfig {
                host,
                port,
                questions_path: args.questions,
            };
            gridiron_iq::server::run(&config).await
        }
        Command::Draw {
            count,
            categories,
            seed,
        } => draw(args.questions, count as usize, categories, seed),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn draw(
    questions: PathBuf,
    count: usize,
    categories: Option<String>,
    seed: Option<u64>,
) -> Result<(), Box<dyn std::error::Error>> {
    let selector = QuizSelector::new(Arc::new(QuestionStore::new(questions)));
    let categories = categories.as_deref().map(parse_categories);

    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let questions = selector.get_random(count, categories.as_deref(), &mut rng)?;

    println!(
        "{}",
        serde_json::to_string_pretty(&QuestionsResponse { questions })?
    );
    Ok(())
}
