use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;
use thai_tts_client::controllers::{CliController, CliOptions};
use thai_tts_client::domain::session::SynthesisClient;
use thai_tts_client::infrastructure::config::{Config, LogFormat};
use thai_tts_client::infrastructure::http::build_http_client;
use thai_tts_client::infrastructure::playback::player_from_config;
use thai_tts_client::infrastructure::repositories::HttpTtsRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Convert Thai text to speech using a remote TTS server
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Thai text to synthesize (defaults to a short greeting)
    #[arg(value_name = "TEXT")]
    text: Option<String>,

    /// Voice id, as listed by --list-voices (defaults to the first voice)
    #[arg(long)]
    voice: Option<String>,

    /// Speed multiplier (0.5-3.0, step 0.1)
    #[arg(short, long, default_value = "1.0")]
    rate: f64,

    /// Pitch offset in Hz (-20 to 20)
    #[arg(short, long, default_value = "0", allow_negative_numbers = true)]
    pitch: i32,

    /// List the available voices and exit
    #[arg(long)]
    list_voices: bool,

    /// Save the audio file, into DIR when given as --download=DIR
    /// (defaults to TTS_DOWNLOAD_DIR)
    #[arg(short, long, value_name = "DIR", num_args = 0..=1, require_equals = true)]
    download: Option<Option<PathBuf>>,

    /// Do not start the audio player
    #[arg(long)]
    no_play: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    init_logging(&config, args.verbose);

    tracing::info!(base_url = %config.api_base_url, "Starting Thai TTS client");

    let http_client = build_http_client(&config)?;
    let tts_repo = Arc::new(HttpTtsRepository::new(
        http_client,
        config.api_base_url.clone(),
    ));
    let player = player_from_config(&config);
    let client = SynthesisClient::new(&config, tts_repo, player);
    let mut controller = CliController::new(client);

    let options = CliOptions {
        text: args.text,
        voice: args.voice,
        rate: args.rate,
        pitch: args.pitch,
        list_voices: args.list_voices,
        download_dir: args
            .download
            .map(|dir| dir.unwrap_or_else(|| config.download_dir.clone())),
        play: !args.no_play,
    };

    let mut stdout = std::io::stdout();
    let succeeded = controller.run(options, &mut stdout).await?;

    if !succeeded {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(config: &Config, verbose: bool) {
    let default_filter = if verbose {
        "thai_tts_client=debug"
    } else {
        "thai_tts_client=warn"
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_filter.into());

    if config.log_format == LogFormat::Json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().pretty().with_writer(std::io::stderr))
            .init();
    }
}
