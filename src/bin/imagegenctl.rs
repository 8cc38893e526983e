use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use hf_image_generator::ui::{extension_for, handle_click, sniff_content_type, Feedback};
use hf_image_generator::{Config, InferenceClient};

#[derive(Parser, Debug)]
#[command(name = "imagegenctl", about = "CLI for the Hugging Face image generator", version)]
struct Cli {
    /// Override HF_API_URL
    #[arg(global = true, long)]
    api_url: Option<String>,

    /// Override REQUEST_TIMEOUT_SECS (must be at least 1)
    #[arg(global = true, long, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate one image from a text prompt
    Generate {
        /// Prompt text (defaults to DEFAULT_PROMPT)
        #[arg(long, value_name = "TEXT")]
        prompt: Option<String>,
        /// Output path for the image bytes (defaults to ./generated.<ext>,
        /// extension taken from the image format)
        #[arg(long, value_name = "PATH")]
        out: Option<PathBuf>,
    },
    /// Show the effective configuration (token masked)
    Env,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    // Load env and parse CLI
    Config::dotenv_load();
    let cli = Cli::parse();

    let mut conf = match Config::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };
    if let Some(url) = cli.api_url {
        conf.api_url = url;
    }
    if let Some(secs) = cli.timeout {
        conf.request_timeout = Duration::from_secs(secs);
    }

    match cli.command {
        Commands::Env => {
            for (key, value) in conf.summary() {
                println!("{}: {}", key, value);
            }
            Ok(())
        }
        Commands::Generate { prompt, out } => {
            let client = InferenceClient::new(&conf)?;
            let raw = prompt.unwrap_or_else(|| conf.default_prompt.clone());
            eprintln!("Generating image... Please wait.");
            match handle_click(&client, &raw).await {
                Feedback::Image { bytes, caption, message } => {
                    let out = out.unwrap_or_else(|| {
                        let ext = extension_for(sniff_content_type(&bytes));
                        PathBuf::from(format!("generated.{}", ext))
                    });
                    tokio::fs::write(&out, &bytes).await?;
                    println!("{}: {} ({} bytes)", caption, out.display(), bytes.len());
                    println!("{}", message);
                    Ok(())
                }
                Feedback::Warning(message) => {
                    eprintln!("Warning: {}", message);
                    std::process::exit(2);
                }
                Feedback::Error(message) => {
                    eprintln!("Error: {}", message);
                    std::process::exit(1);
                }
            }
        }
    }
}
