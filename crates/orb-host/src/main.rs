//! ORB demo runner
//!
//! Minimal command-line interface: runs one of the bundled demo guests
//! against a configured linear memory and prints the run report.

use std::process;

use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use orb_core::OrbConfig;
use orb_host::demos::{FaultDemo, ListsDemo, OomDemo, TupleEqDemo};
use orb_host::{run, GuestProgram, RunStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Demo {
    Lists,
    TupleEq,
    Fault,
    Oom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Plain,
    Json,
}

#[derive(Parser)]
#[command(name = "orb-host")]
#[command(about = "Run a demo guest program against the Ophis runtime bridge.")]
struct Cli {
    #[arg(long, value_enum, default_value_t = Demo::Lists)]
    demo: Demo,

    #[arg(long, default_value_t = 1)]
    initial_pages: usize,

    #[arg(long, default_value_t = 200)]
    max_pages: usize,

    #[arg(long, value_enum, default_value_t = Format::Plain)]
    format: Format,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = OrbConfig {
        initial_pages: cli.initial_pages,
        max_pages: cli.max_pages,
    };

    let guest: Box<dyn GuestProgram> = match cli.demo {
        Demo::Lists => Box::new(ListsDemo),
        Demo::TupleEq => Box::new(TupleEqDemo),
        Demo::Fault => Box::new(FaultDemo),
        Demo::Oom => Box::new(OomDemo),
    };

    let report = run(guest.as_ref(), &config);

    match cli.format {
        Format::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        Format::Plain => {
            print!("{}", report.output);
            match report.status {
                RunStatus::Completed => {}
                RunStatus::Faulted { code } => {
                    eprintln!("run failed with error code {}", code);
                    process::exit(1);
                }
                RunStatus::HostError { message } => {
                    eprintln!("host error: {}", message);
                    process::exit(1);
                }
            }
        }
    }

    Ok(())
}
