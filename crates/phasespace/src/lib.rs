//! Phase-space data from gp3m2 simulations and reference inputs
#![doc = include_str!("../readme.md")]

// Split into subfiles for development, but anything important is re-exported
mod error;
mod ext;
mod phasespace;
mod reader;
mod species;

// Inline anything important for a nice public API
#[doc(inline)]
pub use phasespace::{Field, PhaseSpace, Shape, SPEED_OF_LIGHT};

#[doc(inline)]
pub use species::{Species, ELECTRON_MASS};

#[doc(inline)]
pub use reader::{read_multithreaded_csv, read_text_columns, thread_paths, PhaseSpaceReader};

#[doc(inline)]
pub use error::{Error, Result};
