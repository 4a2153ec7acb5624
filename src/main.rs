//! timepick - a time-slot picker driven over stdin/stdout
//!
//! This is the binary entry point. All logic lives in the library.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use color_eyre::eyre::eyre;
use serde_json::json;
use timepick_app::config::{self, Configuration, PickerOptions};
use timepick_app::{constraints, slots, HostInput};
use timepick_core::{logging, parse_time, ParsedTime};

/// timepick - pick appointment times from constrained slots
#[derive(Parser, Debug)]
#[command(name = "timepick")]
#[command(about = "A time-slot picker with a headless NDJSON interface", long_about = None)]
struct Args {
    /// Picker options file (TOML)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Initial value of the bound field
    #[arg(long, value_name = "TEXT", default_value = "")]
    value: String,

    /// Host input id; repeat to bind several (which leaves the picker inert)
    #[arg(long = "host", value_name = "ID")]
    hosts: Vec<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Drive a picker with NDJSON commands on stdin (default)
    Run,
    /// Parse and validate one input text
    Parse { text: String },
    /// Print the slot list as NDJSON
    Slots,
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    logging::init()?;

    let args = Args::parse();

    let options = match &args.config {
        Some(path) => config::load_options(path),
        None => PickerOptions::default(),
    };

    match args.command.unwrap_or(Command::Run) {
        Command::Run => {
            let ids = if args.hosts.is_empty() {
                vec!["time".to_string()]
            } else {
                args.hosts
            };
            let hosts: Vec<_> = ids
                .into_iter()
                .map(|id| HostInput::new(id, args.value.clone()))
                .collect();
            timepick::run_headless(hosts, options).await?;
        }
        Command::Parse { text } => {
            let config = Configuration::from_options(&options)?;
            println!("{}", describe_parse(&config, &text));
        }
        Command::Slots => {
            let config = Configuration::from_options(&options)?;
            for slot in slots::generate_slots(&config) {
                let line = serde_json::to_string(&slot)
                    .map_err(|e| eyre!("Failed to serialize slot: {}", e))?;
                println!("{}", line);
            }
        }
    }

    Ok(())
}

fn describe_parse(config: &Configuration, text: &str) -> serde_json::Value {
    match parse_time(text) {
        ParsedTime::Empty => json!({ "input": text, "status": "empty" }),
        ParsedTime::Unrecognized => json!({ "input": text, "status": "unrecognized" }),
        ParsedTime::Time(time) => {
            let violation = constraints::check(time.hour, time.minute, config).err();
            json!({
                "input": text,
                "status": "time",
                "hour": time.hour,
                "minute": time.minute,
                "valid": violation.is_none(),
                "violation": violation.map(|v| format!("{:?}", v)),
                "display_text": config.format(time),
            })
        }
    }
}
