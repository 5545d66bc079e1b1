//! Particle species recorded by the gp3m2 diagnostics

// crate modules
use crate::error::Error;

/// Electron rest mass used throughout the benchmarks (MeV/c^2)
pub const ELECTRON_MASS: f64 = 0.511;

/// Particle species written to the phase-space diagnostics
///
/// The simulation records one ntuple per species, and the rest mass decides
/// how kinematic quantities are derived from the momentum.
///
/// [Species] implements `TryFrom<&str>` for the labels commonly used in the
/// benchmark scripts and output file names.
///
/// ```rust
/// # use phasebench_phasespace::Species;
/// assert_eq!(Species::Electron, Species::try_from("e-").unwrap());
/// assert_eq!(Species::Positron, Species::try_from("positron").unwrap());
/// assert_eq!(Species::Gamma, Species::try_from("Photon").unwrap());
///
/// // Anything else is an error
/// assert!(Species::try_from("muon").is_err());
/// ```
///
/// | Species  | Labels               | Rest mass (MeV/c^2) |
/// | -------- | -------------------- | ------------------- |
/// | electron | `e-`, `electron`     | 0.511               |
/// | positron | `e+`, `positron`     | 0.511               |
/// | gamma    | `gamma`, `photon`    | 0                   |
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Species {
    #[default]
    Electron,
    Positron,
    Gamma,
}

impl Species {
    /// Rest mass in MeV/c^2
    ///
    /// ```rust
    /// # use phasebench_phasespace::Species;
    /// assert_eq!(Species::Positron.mass(), 0.511);
    /// assert_eq!(Species::Gamma.mass(), 0.0);
    /// ```
    pub fn mass(&self) -> f64 {
        match self {
            Self::Electron | Self::Positron => ELECTRON_MASS,
            Self::Gamma => 0.0,
        }
    }

    /// True for species with no rest mass
    pub fn is_massless(&self) -> bool {
        self.mass() == 0.0
    }

    /// Short label as used in the benchmark scripts
    pub fn label(&self) -> &'static str {
        match self {
            Self::Electron => "e-",
            Self::Positron => "e+",
            Self::Gamma => "gamma",
        }
    }
}

impl std::fmt::Display for Species {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Convert from any recognised species label, insensitive to case
impl TryFrom<&str> for Species {
    type Error = Error;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "e-" | "electron" => Ok(Self::Electron),
            "e+" | "positron" => Ok(Self::Positron),
            "gamma" | "photon" => Ok(Self::Gamma),
            _ => Err(Error::UnknownSpecies(s.to_string())),
        }
    }
}

impl std::str::FromStr for Species {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s)
    }
}
