//! Command line runner for the packaged gp3m2 benchmarks

// phasebench modules
use phasebench_bench::{Benchmark, ElectronSourceBenchmark, Error, Result, StatisticsBenchmark};
use phasebench_phasespace::{PhaseSpace, PhaseSpaceReader, Shape, Species};

// standard library
use std::path::PathBuf;

// external crates
use clap::{ArgAction, Args, Parser, Subcommand};
use log::{debug, info};

/// Validate gp3m2 simulation output against its reference input
#[derive(Parser, Debug)]
#[command(name = "phasebench", version, about)]
#[command(arg_required_else_help(true))]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Verbose logging (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all logging
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Also write the report as JSON to this file
    #[arg(long, value_name = "PATH", global = true)]
    json: Option<PathBuf>,

    /// Exit with an error if any comparison failed
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Point source recorded on a diagnostic plane (benchmarks 0 and 00)
    ElectronSource {
        /// Reduced one way analysis without the z origin (benchmark 00)
        #[arg(long)]
        reduced: bool,

        #[command(flatten)]
        inputs: Inputs,

        /// Number of simulated events
        #[arg(long, default_value_t = 1000)]
        nevents: usize,

        /// Position of the diagnostic plane along x (um)
        #[arg(long, default_value_t = 50.0)]
        diag_x: f64,

        /// Only look for simulated values in the reference
        #[arg(long)]
        one_way: bool,

        /// Identifier shown in the start banner [default: 0, or 00 if reduced]
        #[arg(long)]
        id: Option<String>,
    },

    /// Event count and total weight of a large run (benchmark 1)
    Statistics {
        #[command(flatten)]
        inputs: Inputs,

        /// Number of simulated events
        #[arg(long, default_value_t = 100_000)]
        nevents: usize,

        /// Identifier shown in the start banner
        #[arg(long, default_value = "1")]
        id: String,
    },
}

/// Files and settings common to every benchmark
#[derive(Args, Debug)]
struct Inputs {
    /// Simulation output, e.g. "test_nt_electron_t*.csv"
    #[arg(long, value_name = "PATTERN")]
    sim: PathBuf,

    /// Number of simulation thread files
    #[arg(long, default_value_t = 2)]
    threads: usize,

    /// Reference input file
    #[arg(long, value_name = "FILE")]
    reference: PathBuf,

    /// Particle species (e-, e+, gamma)
    #[arg(long, default_value = "e-")]
    species: Species,

    /// Maximum failure lines shown per check
    #[arg(long, default_value_t = 3)]
    max_errors: usize,

    /// Records have no time column
    #[arg(long)]
    without_time: bool,
}

impl Inputs {
    /// Load the simulated and reference phase spaces
    fn load(&self) -> Result<(PhaseSpace, PhaseSpace)> {
        let mut reader = PhaseSpaceReader::new();
        reader.set_species(self.species);
        reader.set_shape(match self.without_time {
            true => Shape::WithoutTime,
            false => Shape::WithTime,
        });

        info!("Reading simulation output {}", self.sim.display());
        let sim = reader.read_multithreaded_csv(&self.sim, self.threads)?;
        debug!("{sim}");

        info!("Reading reference {}", self.reference.display());
        let reference = reader.read_text_columns(&self.reference)?;
        debug!("{reference}");

        Ok((sim, reference))
    }
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        let mut source = std::error::Error::source(&e);
        while let Some(cause) = source {
            eprintln!(" - caused by: {cause}");
            source = cause.source();
        }
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    init_logging(&cli)?;

    let (benchmark, inputs): (Box<dyn Benchmark>, &Inputs) = match &cli.command {
        Command::ElectronSource {
            reduced,
            inputs,
            nevents,
            diag_x,
            one_way,
            id,
        } => {
            let mut benchmark = match reduced {
                true => ElectronSourceBenchmark::reduced(),
                false => ElectronSourceBenchmark::new(),
            };
            if let Some(id) = id {
                benchmark.set_id(id);
            }
            benchmark.set_nevents(*nevents);
            benchmark.set_diag_x(*diag_x);
            if *one_way {
                benchmark.set_bidirectional(false);
            }
            benchmark.set_max_errors(inputs.max_errors);
            (Box::new(benchmark), inputs)
        }
        Command::Statistics {
            inputs,
            nevents,
            id,
        } => {
            let mut benchmark = StatisticsBenchmark::new();
            benchmark.set_id(id);
            benchmark.set_nevents(*nevents);
            benchmark.set_max_errors(inputs.max_errors);
            (Box::new(benchmark), inputs)
        }
    };

    let (sim, reference) = inputs.load()?;
    let test = benchmark.run(&sim, &reference)?;
    test.print_report();

    if let Some(path) = &cli.json {
        info!("Writing JSON report to {}", path.display());
        std::fs::write(path, test.report().to_json()?)?;
    }

    if cli.strict && !test.is_clean() {
        return Err(Error::FailedChecks(test.failure_count()));
    }

    Ok(())
}

/// Warnings by default, each -v adds a level
fn init_logging(cli: &Cli) -> Result<()> {
    stderrlog::new()
        .modules([
            module_path!(),
            "phasebench_bench",
            "phasebench_phasespace",
            "phasebench_validate",
        ])
        .quiet(cli.quiet)
        .verbosity(cli.verbose as usize + 1)
        .show_level(true)
        .init()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn electron_source_defaults() {
        let cli = Cli::try_parse_from([
            "phasebench",
            "electron-source",
            "--sim",
            "out_t*.csv",
            "--reference",
            "input.dat",
        ])
        .unwrap();

        let Command::ElectronSource {
            reduced,
            inputs,
            nevents,
            diag_x,
            one_way,
            id,
        } = cli.command
        else {
            panic!("expected electron-source");
        };

        assert_eq!(inputs.threads, 2);
        assert_eq!(inputs.species, Species::Electron);
        assert_eq!(inputs.max_errors, 3);
        assert!(!inputs.without_time);
        assert_eq!(nevents, 1000);
        assert_eq!(diag_x, 50.0);
        assert!(!one_way);
        assert!(!reduced);
        assert_eq!(id, None);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "phasebench",
            "statistics",
            "--sim",
            "out_t*.csv",
            "--threads",
            "4",
            "--reference",
            "input.dat",
            "--species",
            "gamma",
            "-vv",
            "--strict",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        assert!(cli.strict);
        assert!(matches!(
            cli.command,
            Command::Statistics { ref inputs, nevents: 100_000, .. }
                if inputs.threads == 4 && inputs.species == Species::Gamma
        ));
    }

    #[test]
    fn reduced_electron_source() {
        let cli = Cli::try_parse_from([
            "phasebench",
            "electron-source",
            "--reduced",
            "--sim",
            "out_t*.csv",
            "--reference",
            "input.dat",
        ])
        .unwrap();
        assert!(matches!(cli.command, Command::ElectronSource { reduced: true, .. }));
    }

    #[test]
    fn unknown_species_is_rejected() {
        let result = Cli::try_parse_from([
            "phasebench",
            "statistics",
            "--sim",
            "a.csv",
            "--reference",
            "b.dat",
            "--species",
            "muon",
        ]);
        assert!(result.is_err());
    }
}
