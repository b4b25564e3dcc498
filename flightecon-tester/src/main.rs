mod loading;
mod reports;
mod verify;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::fs::File;
use std::io::{BufWriter, Write, stdout};
use std::path::PathBuf;

use flightecon_game::{
    AircraftType, CargoConfig, Dataset, GameSettings, InMemoryDataset, PaxConfig, Route,
    RouteEngine, RouteOptions, SimulationParams, brute_cargo_conf, brute_pax_conf,
    simulate_closed_form, simulate_closed_form_cargo,
};

use loading::{load_dataset, load_settings};
use reports::{BruteOutcome, BruteRun, Report};
use verify::{VerifyConfig, run_verification};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Colored human-readable output
    Console,
    /// Pretty-printed JSON
    Json,
    /// Markdown tables
    Markdown,
}

#[derive(Debug, Parser)]
#[command(name = "flightecon-tester", version)]
#[command(
    about = "Route economics harness for flightecon - single routes, rankings and allocator checks"
)]
struct Args {
    /// Dataset JSON file (airports, aircraft, demand)
    #[arg(long, global = true, default_value = "data/dataset.json")]
    dataset: PathBuf,

    /// Player settings JSON file; game defaults when omitted
    #[arg(long, global = true)]
    settings: Option<PathBuf>,

    /// Force realism mode regardless of the settings file
    #[arg(long, global = true)]
    realism: bool,

    /// Output report format
    #[arg(long, global = true, value_enum, default_value_t = ReportFormat::Console)]
    report: ReportFormat,

    /// Optional path to write the report output instead of stdout
    #[arg(long, global = true)]
    output: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Clone, clap::Args)]
struct LimitArgs {
    /// Flights per day the demand is shared across
    #[arg(long, default_value_t = 1)]
    trips: u32,

    /// Maximum direct distance, km
    #[arg(long)]
    max_distance: Option<f64>,

    /// Maximum flight time, hours
    #[arg(long)]
    max_flight_time: Option<f64>,
}

impl LimitArgs {
    fn options(&self) -> RouteOptions {
        let mut options = RouteOptions::default().with_trips_per_day(self.trips);
        if let Some(max_distance) = self.max_distance {
            options = options.with_max_distance(max_distance);
        }
        if let Some(max_flight_time) = self.max_flight_time {
            options = options.with_max_flight_time(max_flight_time);
        }
        options
    }
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Assemble one route and print its economics
    Route {
        origin: String,
        destination: String,
        aircraft: String,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Rank every destination reachable from an origin
    Destinations {
        origin: String,
        aircraft: String,
        /// Show at most this many destinations
        #[arg(long)]
        limit: Option<usize>,
        #[command(flatten)]
        limits: LimitArgs,
    },
    /// Run the brute-force reference optimizer on a dataset route
    Brute {
        origin: String,
        destination: String,
        aircraft: String,
        /// Flights per day drawing on the same daily demand
        #[arg(long, default_value_t = 1)]
        flights_per_day: u32,
    },
    /// Compare the closed-form allocator against the reference optimizer on random cases
    Verify {
        /// Number of sampled cases
        #[arg(long, default_value_t = 50)]
        cases: usize,

        /// RNG seed for case sampling
        #[arg(long, default_value_t = 1337)]
        seed: u64,

        /// Largest pax cabin sampled, in economy-seat units
        #[arg(long, default_value_t = 40)]
        max_capacity: u32,

        /// Fail cases whose closed-form income falls below this share of the reference
        #[arg(long, default_value_t = 0.0)]
        min_ratio: f64,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let settings = load_settings(args.settings.as_deref(), args.realism)?;
    let report = match &args.command {
        Command::Verify {
            cases,
            seed,
            max_capacity,
            min_ratio,
        } => Report::Verify(run_verification(&VerifyConfig {
            cases: *cases,
            seed: *seed,
            max_capacity: *max_capacity,
            min_ratio: *min_ratio,
            settings,
        })),
        command => {
            let dataset = load_dataset(&args.dataset)?;
            let engine = RouteEngine::new(dataset, settings)
                .context("settings are outside the range the game allows")?;
            run_query(&engine, command)?
        }
    };

    if args.report == ReportFormat::Console {
        announce_banner();
    }
    let mut output_target = OutputTarget::new(args.output.clone())?;
    reports::write_report(&mut output_target, &report, args.report)?;
    output_target.flush_inner()?;

    if let Report::Verify(summary) = &report
        && !summary.violations.is_empty()
    {
        eprintln!(
            "{}",
            format!("{} verification violation(s)", summary.violations.len()).red()
        );
        std::process::exit(1);
    }

    Ok(())
}

fn run_query(engine: &RouteEngine<InMemoryDataset>, command: &Command) -> Result<Report> {
    match command {
        Command::Route {
            origin,
            destination,
            aircraft,
            limits,
        } => {
            let route = engine
                .route(origin, destination, aircraft, &limits.options())
                .with_context(|| format!("cannot assemble {origin} -> {destination}"))?;
            Ok(Report::Route {
                origin: origin.clone(),
                destination: destination.clone(),
                aircraft: aircraft.clone(),
                route,
            })
        }
        Command::Destinations {
            origin,
            aircraft,
            limit,
            limits,
        } => {
            let mut destinations = engine
                .destinations(origin, aircraft, &limits.options())
                .with_context(|| format!("cannot rank destinations from {origin}"))?;
            if let Some(limit) = limit {
                destinations.truncate(*limit);
            }
            Ok(Report::Destinations {
                origin: origin.clone(),
                aircraft: aircraft.clone(),
                destinations,
            })
        }
        Command::Brute {
            origin,
            destination,
            aircraft,
            flights_per_day,
        } => Ok(Report::Brute(run_brute(
            engine.dataset(),
            engine.settings(),
            (origin.as_str(), destination.as_str(), aircraft.as_str()),
            *flights_per_day,
        )?)),
        Command::Verify { .. } => bail!("verify runs without a dataset"),
    }
}

fn run_brute(
    dataset: &InMemoryDataset,
    settings: &GameSettings,
    (origin, destination, aircraft): (&str, &str, &str),
    flights_per_day: u32,
) -> Result<BruteRun> {
    let origin_ap = dataset.find_airport(origin)?;
    let destination_ap = dataset.find_airport(destination)?;
    let aircraft_ac = dataset.find_aircraft(aircraft)?;
    let route = Route::create(dataset, origin_ap, destination_ap)
        .with_context(|| format!("no route {origin} -> {destination}"))?;
    let params = SimulationParams {
        distance: route.direct_distance,
        reputation: settings.reputation,
        flights_per_day,
        mode: settings.mode,
    };

    let per_trip = route.demand_per_trip(flights_per_day, settings.load);

    let outcome = match aircraft_ac.kind {
        AircraftType::Cargo => {
            let closed = CargoConfig::calc_cargo_conf(
                per_trip.cargo,
                aircraft_ac.capacity,
                settings.l_training,
                settings.h_training,
            );
            BruteOutcome::Cargo {
                best: brute_cargo_conf(
                    route.cargo_demand,
                    aircraft_ac.capacity,
                    settings.l_training,
                    settings.h_training,
                    &params,
                ),
                closed_form_income: simulate_closed_form_cargo(
                    &closed,
                    aircraft_ac.capacity,
                    (settings.l_training, settings.h_training),
                    route.cargo_demand,
                    &params,
                ),
                closed,
            }
        }
        AircraftType::Pax | AircraftType::Vip => {
            let closed = PaxConfig::calc_pax_conf(
                per_trip.pax,
                aircraft_ac.capacity,
                route.direct_distance,
                settings.mode,
            );
            BruteOutcome::Pax {
                best: brute_pax_conf(route.pax_demand, aircraft_ac.capacity, &params),
                closed_form_income: simulate_closed_form(&closed, route.pax_demand, &params),
                closed,
            }
        }
    };

    Ok(BruteRun {
        origin: origin_ap.iata.clone(),
        destination: destination_ap.iata.clone(),
        aircraft: aircraft_ac.shortname.clone(),
        params,
        outcome,
    })
}

fn announce_banner() {
    println!("{}", "✈️  Flightecon Route Tester".bright_cyan().bold());
    println!("{}", "===========================".cyan());
}

enum OutputTarget {
    Stdout(BufWriter<std::io::Stdout>),
    File(BufWriter<File>),
}

impl OutputTarget {
    fn new(path: Option<PathBuf>) -> Result<Self> {
        if let Some(path) = path {
            let file = File::create(&path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            Ok(Self::File(BufWriter::new(file)))
        } else {
            Ok(Self::Stdout(BufWriter::new(stdout())))
        }
    }

    fn writer(&mut self) -> &mut dyn Write {
        match self {
            Self::Stdout(w) => w,
            Self::File(w) => w,
        }
    }

    fn flush_inner(&mut self) -> std::io::Result<()> {
        match self {
            Self::Stdout(w) => w.flush(),
            Self::File(w) => w.flush(),
        }
    }
}

impl Write for OutputTarget {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.writer().write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.flush_inner()
    }
}
