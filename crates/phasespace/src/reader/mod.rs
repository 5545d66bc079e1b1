//! Readers for simulation output and reference inputs
//!
//! All functions are re-exported to the crate root for easy access.
//!
//! # Quickstart
//!
//! The simplest way to load data is through the convenience functions:
//!
//! ```rust, no_run
//! # use phasebench_phasespace::{read_multithreaded_csv, read_text_columns, Shape, Species};
//! // Simulation output written by 2 worker threads
//! let sim = read_multithreaded_csv(
//!     "test_nt_electron_t*.csv",
//!     2,
//!     Shape::WithTime,
//!     Species::Electron,
//! )
//! .unwrap();
//!
//! // Reference particles given to the primary generator
//! let reference = read_text_columns("input.dat", Shape::WithTime, Species::Electron).unwrap();
//! ```
//!
//! Under the hood these initialise a [PhaseSpaceReader], which is public for
//! loading many files with the same settings.
//!
//! # Formats
//!
//! **Multi-threaded CSV**
//!
//! > Geant4 writes one CSV file per worker thread, named with the thread index
//! > before the extension, e.g. `test_nt_electron_t0.csv`,
//! > `test_nt_electron_t1.csv`. Each file starts with `#` metadata lines
//! > (`#class`, `#title`, `#column`, ...) followed by one comma separated
//! > record per line. Records from all threads are concatenated in thread
//! > order.
//!
//! **Text columns**
//!
//! > One whitespace separated record per line. Blank lines and `#` comments
//! > are ignored.
//!
//! Both formats use the field order `w, x, y, z, px, py, pz[, t]`. Every data
//! line must hold exactly one record of the expected [Shape].

mod parsers;

// crate modules
use crate::error::{Error, Result};
use crate::phasespace::{PhaseSpace, Shape};
use crate::species::Species;

// phasebench modules
use phasebench_format::f;

// standard library
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

// external crates
use log::{debug, trace, warn};

/// Read phase-space data written by several simulation threads
///
/// - `pattern` - path to any thread file, with or without a `*` wildcard in
///   place of the thread index, e.g. `test_nt_electron_t*.csv`
/// - `threads` - number of thread files, indexed from 0
///
/// ```rust, no_run
/// # use phasebench_phasespace::{read_multithreaded_csv, Shape, Species};
/// let sim = read_multithreaded_csv("out_t*.csv", 4, Shape::WithTime, Species::Gamma).unwrap();
/// println!("{sim}");
/// ```
pub fn read_multithreaded_csv<P: AsRef<Path>>(
    pattern: P,
    threads: usize,
    shape: Shape,
    species: Species,
) -> Result<PhaseSpace> {
    let mut reader = PhaseSpaceReader::new();
    reader.set_shape(shape);
    reader.set_species(species);
    reader.read_multithreaded_csv(pattern, threads)
}

/// Read phase-space data from a single whitespace delimited text file
///
/// ```rust, no_run
/// # use phasebench_phasespace::{read_text_columns, Shape, Species};
/// let reference = read_text_columns("input.dat", Shape::WithTime, Species::Electron).unwrap();
/// println!("{reference}");
/// ```
pub fn read_text_columns<P: AsRef<Path>>(
    path: P,
    shape: Shape,
    species: Species,
) -> Result<PhaseSpace> {
    let mut reader = PhaseSpaceReader::new();
    reader.set_shape(shape);
    reader.set_species(species);
    reader.read_text_columns(path)
}

/// Expand a thread file pattern into one path per thread
///
/// The `.csv` extension and a trailing `*` wildcard are removed, then the
/// thread index and extension are appended.
///
/// ```rust
/// # use phasebench_phasespace::thread_paths;
/// # use std::path::PathBuf;
/// let paths = thread_paths("data/test_nt_electron_t*.csv", 2).unwrap();
/// assert_eq!(
///     paths,
///     vec![
///         PathBuf::from("data/test_nt_electron_t0.csv"),
///         PathBuf::from("data/test_nt_electron_t1.csv"),
///     ]
/// );
/// ```
pub fn thread_paths<P: AsRef<Path>>(pattern: P, threads: usize) -> Result<Vec<PathBuf>> {
    if threads == 0 {
        return Err(Error::InvalidThreadCount);
    }

    let pattern = pattern.as_ref().to_string_lossy().into_owned();
    let base = pattern.strip_suffix(".csv").unwrap_or(pattern.as_str());
    let base = base.strip_suffix('*').unwrap_or(base);

    Ok((0..threads)
        .map(|thread| PathBuf::from(f!("{base}{thread}.csv")))
        .collect())
}

/// Configurable reader for phase-space files
///
/// Holds the record layout and species so that several files can be loaded
/// consistently.
///
/// ```rust, no_run
/// # use phasebench_phasespace::{PhaseSpaceReader, Shape, Species};
/// let mut reader = PhaseSpaceReader::new();
/// reader.set_shape(Shape::WithoutTime);
/// reader.set_species(Species::Positron);
///
/// let sim = reader.read_multithreaded_csv("out_t*.csv", 2).unwrap();
/// let reference = reader.read_text_columns("input.dat").unwrap();
/// ```
#[derive(Debug, Default, Clone, Copy)]
pub struct PhaseSpaceReader {
    /// Record layout expected on every data line
    shape: Shape,
    /// Species attached to the loaded data
    species: Species,
}

impl PhaseSpaceReader {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Setter for the expected record layout
    pub fn set_shape(&mut self, shape: Shape) {
        self.shape = shape;
    }

    /// Setter for the particle species
    pub fn set_species(&mut self, species: Species) {
        self.species = species;
    }

    /// Read every thread file for `pattern` into one [PhaseSpace]
    ///
    /// See [thread_paths()] for how file names are built.
    pub fn read_multithreaded_csv<P: AsRef<Path>>(
        &self,
        pattern: P,
        threads: usize,
    ) -> Result<PhaseSpace> {
        let mut phase_space = PhaseSpace::new(self.species, self.shape);

        for path in thread_paths(pattern, threads)? {
            let n = self.read_csv_into(&path, &mut phase_space)?;
            if n == 0 {
                warn!("No records found in {}", path.display());
            }
        }

        debug!(
            "Read {} {} records from {threads} thread file(s)",
            phase_space.len(),
            self.species
        );
        Ok(phase_space)
    }

    /// Read a whitespace delimited text file into a [PhaseSpace]
    pub fn read_text_columns<P: AsRef<Path>>(&self, path: P) -> Result<PhaseSpace> {
        let path = path.as_ref();
        debug!("Reading {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let stride = self.shape.stride();
        let mut phase_space = PhaseSpace::new(self.species, self.shape);
        let mut skipped = 0;

        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_number = idx as u64 + 1;

            if parsers::is_skipped(&line) {
                skipped += 1;
                continue;
            }

            let (_, values) =
                parsers::whitespace_row(line.trim_end()).map_err(|_| Error::ParseError {
                    path: path.display().to_string(),
                    line: line_number,
                    token: parsers::offending_token(&line),
                })?;

            if values.len() != stride {
                return Err(Error::UnexpectedFieldCount {
                    path: path.display().to_string(),
                    line: line_number,
                    expected: stride,
                    found: values.len(),
                });
            }

            phase_space.push_record(&values)?;
        }

        trace!("Skipped {skipped} blank or comment lines");
        debug!(
            "Read {} {} records from {}",
            phase_space.len(),
            self.species,
            path.display()
        );
        Ok(phase_space)
    }

    /// Append the records of one CSV file, returning how many were read
    fn read_csv_into(&self, path: &Path, phase_space: &mut PhaseSpace) -> Result<usize> {
        debug!("Reading {}", path.display());

        let file = File::open(path)?;
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .comment(Some(b'#'))
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let stride = self.shape.stride();
        let mut values = Vec::with_capacity(stride);
        let mut count = 0;

        for record in reader.records() {
            let record = record?;
            let line = record.position().map(|p| p.line()).unwrap_or_default();

            if record.len() != stride {
                return Err(Error::UnexpectedFieldCount {
                    path: path.display().to_string(),
                    line,
                    expected: stride,
                    found: record.len(),
                });
            }

            values.clear();
            for token in record.iter() {
                let value = token.parse::<f64>().map_err(|_| Error::ParseError {
                    path: path.display().to_string(),
                    line,
                    token: token.to_string(),
                })?;
                values.push(value);
            }

            phase_space.push_record(&values)?;
            count += 1;
        }

        trace!("{count} records in {}", path.display());
        Ok(count)
    }
}
