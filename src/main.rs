//! Pastedown CLI
//!
//! Runs the clipboard paste pipeline over an HTML file (or stdin) and prints
//! the text a paste would insert into an empty buffer.

use anyhow::{Context, Result};
use clap::Parser;
use kodegen_tools_pastedown::{ClipboardEvent, PasteConfig, TextBuffer, handle_paste};
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "kodegen-pastedown")]
#[command(about = "Convert clipboard HTML into the Markdown a paste would insert")]
struct Args {
    /// HTML file to read; stdin when omitted
    input: Option<PathBuf>,

    /// Plain-text clipboard payload used when conversion is not possible
    #[arg(long, default_value = "")]
    plain: String,

    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Ignore the HTML and paste the plain text
    #[arg(long)]
    text_only: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => PasteConfig::from_json_file(path)?,
        None => PasteConfig::default(),
    };

    let html = if args.text_only {
        None
    } else {
        Some(read_input(args.input.as_deref())?)
    };

    let mut event = ClipboardEvent::new(html, args.plain);
    let mut buffer = TextBuffer::default();
    let outcome = handle_paste(&mut event, &mut buffer, &config);
    tracing::info!("Paste source: {:?}", outcome.source);

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", buffer.text()).context("Failed to write output")?;

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut html = String::new();
            io::stdin()
                .read_to_string(&mut html)
                .context("Failed to read HTML from stdin")?;
            Ok(html)
        }
    }
}
