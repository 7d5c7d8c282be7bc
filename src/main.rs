#![deny(clippy::all)]
#![forbid(unsafe_code)]

// FIXME: When derive_builder supports Rust 2018 syntax switch to a local import
#[macro_use]
extern crate derive_builder;

use std::error::Error;
use std::path::PathBuf;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

mod card;
mod convert;
mod error;
mod geo;
mod lnmpln;
mod paginate;
mod summary;

use lnmpln::FlightPlan;

/// Converts a Little Navmap flight plan into Carousel IV-A ADEU card files
#[derive(StructOpt)]
#[structopt(name = "civa_cards")]
struct Args {
    /// Keep the departure waypoint on the first waypoint card
    #[structopt(short = "1")]
    keep_departure: bool,
    /// Directory the card files are written to
    #[structopt(short = "o", long = "output", parse(from_os_str), default_value = ".")]
    output: PathBuf,
    /// Little Navmap flight plan (.lnmpln)
    #[structopt(name = "flightplan", parse(from_os_str))]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let args = Args::from_args();
    let input = match args.input {
        Some(input) => input,
        None => {
            println!("No filename given. Exiting.");
            Args::clap().print_help()?;
            println!();
            return Ok(());
        }
    };

    let plan = FlightPlan::from_file(&input)?;
    println!("{} -> {}", plan.departure(), plan.destination());
    println!("waypoints cnt: {}", plan.waypoints.len());

    let report = convert::convert(&plan, &args.output, !args.keep_departure)?;
    println!("Created {} wpt file(s)", report.awc_files);
    println!("VOR waypoints cnt: {}", report.vor_waypoints);
    if report.adc_files > 0 {
        println!("Created {} ADC file(s)", report.adc_files);
    }
    println!("Created TXT file");
    Ok(())
}
