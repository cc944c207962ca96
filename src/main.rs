//! nullwidth - hide text in text with zero-width characters.
//!
//! `hide` embeds a message in cover text; `reveal` recovers it from a copy of
//! that text.

use clap::{Parser, Subcommand};
use log::{info, warn};
use nullwidth::config::{preview, DEFAULT_LOG_FILTER, PREVIEW_CHARS};
use nullwidth::input::{read_block, read_line, read_source};
use nullwidth::{
    hide_checked, reveal_text, HideOptions, HideOutcome, Result, RevealOptions, RevealOutcome,
};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "nullwidth")]
#[command(author, version, about, long_about = None)]
#[command(
    about = "Hide messages in ordinary text with zero-width characters",
    long_about = "Encodes a message as invisible Unicode code points, embeds it in cover text, and recovers it from copies of that text."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Embed a message in cover text
    Hide {
        /// Message to hide (prompted for when omitted)
        #[arg(long)]
        message: Option<String>,

        /// Cover text (prompted for when omitted)
        #[arg(long)]
        cover: Option<String>,

        /// Read cover text until a blank line instead of a single line
        #[arg(long)]
        multiline: bool,
    },

    /// Recover a message from text
    Reveal {
        /// File containing the text (default: stdin)
        #[arg(long)]
        input: Option<PathBuf>,

        /// Decode every zero-width bit in the text, ignoring markers
        #[arg(long)]
        raw: bool,

        /// Print a JSON report
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_LOG_FILTER))
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Hide {
            message,
            cover,
            multiline,
        } => cmd_hide(HideOptions {
            message,
            cover,
            multiline,
        }),

        Commands::Reveal { input, raw, json } => cmd_reveal(input, RevealOptions { raw, json }),
    }
}

fn prompt<R: BufRead>(reader: &mut R, label: &str, multiline: bool) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    if multiline {
        read_block(reader)
    } else {
        read_line(reader)
    }
}

fn cmd_hide(options: HideOptions) -> Result<()> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();

    let message = match options.message {
        Some(message) => message.trim().to_string(),
        None => prompt(&mut reader, "Enter message to hide: ", false)?,
    };

    let label = if options.multiline {
        "Enter cover text (end with a blank line):\n"
    } else {
        "Enter cover text: "
    };
    let cover = match options.cover {
        Some(cover) => cover.trim().to_string(),
        None if message.is_empty() => String::new(),
        None => prompt(&mut reader, label, options.multiline)?,
    };

    let outcome = hide_checked(&message, HideOptions::cover_or_default(&cover));
    let (composite, verified) = match outcome {
        HideOutcome::NoMessage => {
            info!("No message entered. Exiting.");
            return Ok(());
        }
        HideOutcome::Hidden {
            composite,
            verified,
        } => (composite, verified),
    };
    info!("Hid {} bytes of message", message.len());
    if cover.is_empty() {
        info!("No cover text entered. Used the default cover text.");
    }
    info!(
        "Cover text: '{}...'",
        preview(HideOptions::cover_or_default(&cover), PREVIEW_CHARS)
    );

    println!();
    println!("--- Text with hidden message ---");
    println!("{}", composite);
    println!("--- End of text (escaped copy below) ---");
    println!("{:?}", composite);

    if verified {
        info!("Verification successful: hidden message round-trips");
    } else {
        warn!("Verification failed: hidden message does not round-trip");
    }

    Ok(())
}

fn cmd_reveal(input: Option<PathBuf>, options: RevealOptions) -> Result<()> {
    let text = read_source(input.as_deref())?;
    let outcome = reveal_text(&text, options.raw);

    if options.json {
        if let Some(revealed) = outcome.revealed() {
            println!("{}", revealed.report().to_json()?);
        }
    }

    match outcome {
        RevealOutcome::EmptyInput => {
            warn!("Input text is empty. Nothing to reveal.");
        }
        RevealOutcome::NoMessage(revealed) => {
            warn!(
                "Decoded message is empty ({} payload symbols, {} trailing bits dropped)",
                revealed.payload_len, revealed.decoded.dropped_bits
            );
        }
        RevealOutcome::Message(revealed) => {
            info!(
                "Recovered {} bytes from {} payload symbols",
                revealed.decoded.bytes.len(),
                revealed.payload_len
            );
            if !options.json {
                println!("{}", revealed.message());
            }
        }
    }

    Ok(())
}
