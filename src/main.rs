use clap::{Args, Parser as ClapParser, Subcommand};
use std::io::{self, Read};
use std::process::ExitCode;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zonespec::Biome;
use zonespec::cli::{
    self, CheckOptions, CliError, EvalOptions, LocationSource, ZonesOptions,
};

/// Exit status for an evaluation that did not match when --exit-code is set
const NO_MATCH: u8 = 3;

#[derive(ClapParser)]
#[command(name = "zonespec")]
#[command(about = "Zonespec - describe spatial zones with predicate expressions")]
#[command(version)]
struct Cli {
    /// Log more detail to stderr (repeat for trace output)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a zone specification and print its canonical form
    Check {
        /// The zone specification
        spec: String,
    },

    /// Evaluate a zone specification against a location
    Eval {
        /// The zone specification
        spec: String,

        #[command(flatten)]
        location: LocationArgs,

        /// Print the evaluation trace
        #[arg(short, long)]
        trace: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,

        /// Exit with status 3 when the location does not match
        #[arg(long)]
        exit_code: bool,
    },

    /// List the zones of a zone file that contain a location
    Zones {
        /// Path to the JSON zone file
        file: String,

        #[command(flatten)]
        location: LocationArgs,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List predicates, or show details for one predicate
    Predicates {
        /// Predicate name
        name: Option<String>,
    },
}

#[derive(Args)]
struct LocationArgs {
    /// JSON location (reads from stdin if no coordinates are given)
    #[arg(short, long)]
    input: Option<String>,

    #[arg(long, default_value = "world")]
    world: String,

    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,

    #[arg(long, allow_negative_numbers = true)]
    z: Option<f64>,

    #[arg(long)]
    biome: Option<Biome>,

    /// Region the location is in (repeatable)
    #[arg(long = "region")]
    regions: Vec<String>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Check { spec } => run_check(spec),
        Commands::Eval {
            spec,
            location,
            trace,
            json,
            exit_code,
        } => run_eval(spec, location, trace, json, exit_code),
        Commands::Zones {
            file,
            location,
            json,
        } => run_zones(file, location, json),
        Commands::Predicates { name } => match name {
            Some(name) => cli::get_predicate_doc(&name).map(|doc| {
                print!("{}", doc);
                ExitCode::SUCCESS
            }),
            None => {
                print!("{}", cli::get_predicates_overview());
                Ok(ExitCode::SUCCESS)
            }
        },
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: u8) {
    let default = match verbose {
        0 => "zonespec=warn",
        1 => "zonespec=debug",
        _ => "zonespec=trace",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn location_source(args: LocationArgs) -> Result<LocationSource, CliError> {
    let mut source = LocationSource {
        input: args.input,
        world: args.world,
        x: args.x,
        y: args.y,
        z: args.z,
        biome: args.biome,
        regions: args.regions,
    };

    if source.input.is_none() && !source.has_coordinates() && !atty::is(atty::Stream::Stdin) {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        source.input = Some(buffer);
    }
    Ok(source)
}

fn run_check(spec: String) -> Result<ExitCode, CliError> {
    let result = cli::execute_check(&CheckOptions { spec })?;
    println!("{}", result.formatted);
    Ok(ExitCode::SUCCESS)
}

fn run_eval(
    spec: String,
    location: LocationArgs,
    trace: bool,
    json: bool,
    exit_code: bool,
) -> Result<ExitCode, CliError> {
    let options = EvalOptions {
        spec,
        location: location_source(location)?,
        trace,
    };
    let outcome = cli::execute_eval(&options)?;

    if json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        println!("{}", outcome.matched);
        if let Some(trace) = &outcome.trace {
            println!("{}", trace);
        }
    }

    if exit_code && !outcome.matched {
        Ok(ExitCode::from(NO_MATCH))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_zones(file: String, location: LocationArgs, json: bool) -> Result<ExitCode, CliError> {
    let options = ZonesOptions {
        zone_file: std::fs::read_to_string(&file)?,
        location: location_source(location)?,
    };
    let matching = cli::execute_zones(&options)?;

    if json {
        println!("{}", serde_json::to_string(&matching)?);
    } else {
        for name in matching {
            println!("{}", name);
        }
    }
    Ok(ExitCode::SUCCESS)
}
