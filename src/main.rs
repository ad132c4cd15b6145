use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand};
use log::{debug, error, info, LevelFilter};
use solitaire::input::{read_deck_file, read_message_file, write_messages};
use solitaire::keystream::DEFAULT_MAX_ROUNDS;
use solitaire::utils::card::deck_tokens;
use solitaire::utils::converter::numbers_to_string;
use solitaire::{KeySchedule, Solitaire};

/// Where `encrypt` writes its ciphertext unless told otherwise.
const DEFAULT_ENCRYPT_OUTPUT: &str = "encryptedMessage.txt";

#[derive(Parser)]
#[command(name = "solitaire")]
#[command(version, about = "Encrypt and decrypt messages with the Solitaire deck cipher")]
struct Cli {
    #[command(subcommand)]
    command: Command,
    #[arg(
        short,
        long,
        global = true,
        action = clap::ArgAction::Count,
        help = "Log more (-v info, -vv debug, -vvv trace); RUST_LOG overrides"
    )]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt every message line of a file
    Encrypt(RunArgs),
    /// Decrypt every message line of a file
    Decrypt(RunArgs),
}

#[derive(Args)]
struct RunArgs {
    #[arg(help = "Deck file: 28 card tokens (AC..KC, AD..KD, JA, JB)")]
    deck: PathBuf,
    #[arg(help = "Message file: one message per line")]
    message: PathBuf,
    #[arg(
        short,
        long,
        help = "Output file (encrypt defaults to encryptedMessage.txt)"
    )]
    output: Option<PathBuf>,
    #[arg(long, help = "Mixing rounds allowed per keystream value", default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: usize,
    #[arg(
        long,
        help = "Restore the key deck before each message instead of continuing the keystream",
        default_value_t = false
    )]
    rekey_per_message: bool,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn run(args: &RunArgs, encrypt: bool) -> anyhow::Result<()> {
    let deck = read_deck_file(&args.deck)
        .with_context(|| format!("loading deck {}", args.deck.display()))?;
    debug!("key deck: {}", deck_tokens(&deck));

    let messages = read_message_file(&args.message)
        .with_context(|| format!("loading messages {}", args.message.display()))?;

    let schedule = if args.rekey_per_message {
        KeySchedule::PerMessage
    } else {
        KeySchedule::Continuous
    };
    let mut cipher = Solitaire::with_max_rounds(deck, args.max_rounds)?.with_key_schedule(schedule);
    info!(
        "{} {} messages ({:?} key schedule)",
        if encrypt { "encrypting" } else { "decrypting" },
        messages.len(),
        schedule
    );

    let results = if encrypt {
        cipher.encrypt_batch(&messages)?
    } else {
        cipher.decrypt_batch(&messages)?
    };

    let banner = if encrypt {
        "Encrypted Messages:"
    } else {
        "Decrypted Messages:"
    };
    println!("{}", banner);
    println!("{}", "=".repeat(banner.len()));

    let mut lines = Vec::with_capacity(results.len());
    let mut rejected = 0;
    for result in results {
        match result {
            Ok(symbols) => {
                let text = numbers_to_string(&symbols)?;
                println!("{}", text);
                lines.push(text);
            }
            Err(err) => {
                error!("{}", err);
                rejected += 1;
            }
        }
    }
    info!("{} mixing rounds", cipher.keystream().rounds());

    let output = match (&args.output, encrypt) {
        (Some(path), _) => Some(path.as_path()),
        (None, true) => Some(Path::new(DEFAULT_ENCRYPT_OUTPUT)),
        (None, false) => None,
    };
    if let Some(path) = output {
        write_messages(path, &lines)?;
        if encrypt {
            println!("Encrypted message written to {}", path.display());
        }
    }

    if rejected > 0 {
        bail!("{} of {} messages rejected", rejected, messages.len());
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match &cli.command {
        Command::Encrypt(args) => run(args, true),
        Command::Decrypt(args) => run(args, false),
    }
}
