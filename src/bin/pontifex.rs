//! Command-line front end for the Solitaire cipher.
//!
//! Usage: pontifex encrypt --key CRYPTONOMICON SOLITAIRE
//!        echo "KIRAK SFJAN" | pontifex decrypt --key CRYPTONOMICON

use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use pontifex::{Deck, Direction, Solitaire};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "pontifex")]
#[command(about = "Encrypt or decrypt text with the Solitaire card cipher")]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Passphrase used to key the deck
    #[arg(short, long, global = true, env = "PONTIFEX_KEY", hide_env_values = true)]
    key: Option<String>,

    /// Explicit deck ordering: 54 card names such as "AC 2C ... JokerA JokerB"
    #[arg(short, long, global = true, conflicts_with = "key")]
    deck: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Encrypt plaintext into five-letter blocks
    Encrypt(TextArgs),
    /// Decrypt ciphertext, keeping the X filler
    Decrypt(TextArgs),
}

#[derive(clap::Args, Debug)]
struct TextArgs {
    /// Text to process; read from stdin when omitted
    text: Vec<String>,
}

impl Command {
    fn direction(&self) -> Direction {
        match self {
            Command::Encrypt(_) => Direction::Encrypt,
            Command::Decrypt(_) => Direction::Decrypt,
        }
    }

    fn text(&self) -> &[String] {
        match self {
            Command::Encrypt(args) | Command::Decrypt(args) => &args.text,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn main() {
    if let Err(err) = run() {
        eprintln!("pontifex failed: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose);

    let mut solitaire = build_session(&args)?;
    let text = read_input(args.command.text())?;
    let direction = args.command.direction();
    info!(%direction, "running cipher");

    let output = solitaire
        .cipher(direction, &text)
        .with_context(|| format!("failed to {direction} input"))?;
    println!("{output}");
    Ok(())
}

fn build_session(args: &Args) -> Result<Solitaire> {
    if let Some(deck) = &args.deck {
        let deck: Deck = deck.parse().context("invalid --deck ordering")?;
        return Ok(Solitaire::with_deck(deck));
    }
    match &args.key {
        Some(key) => Solitaire::with_passphrase(key).context("invalid passphrase"),
        None => Ok(Solitaire::new()),
    }
}

fn read_input(words: &[String]) -> Result<String> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .context("failed to read text from stdin")?;
    Ok(text)
}
