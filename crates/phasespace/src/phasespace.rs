// crate modules
use crate::error::{Error, Result};
use crate::ext::SliceExt;
use crate::species::Species;

// phasebench modules
use phasebench_format::{f, NumFormat, OptionFormat};

// standard library
use std::ops::RangeInclusive;

// external crates
use log::{debug, warn};

/// Speed of light in the output unit system (um/fs)
pub const SPEED_OF_LIGHT: f64 = 2.99792458e8 * 1e6 / 1e15;

/// Named columns of a phase-space record
///
/// Records are always written in the same order, so the discriminant doubles
/// as the column index.
///
/// ```rust
/// # use phasebench_phasespace::Field;
/// assert_eq!(Field::Px as usize, 4);
/// assert_eq!(Field::try_from("weight").unwrap(), Field::W);
/// assert_eq!(Field::T.to_string(), "t");
/// ```
#[repr(u8)]
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    W = 0,
    X = 1,
    Y = 2,
    Z = 3,
    Px = 4,
    Py = 5,
    Pz = 6,
    T = 7,
}

impl Field {
    /// Short column name used in the benchmark scripts
    pub fn name(&self) -> &'static str {
        match self {
            Self::W => "w",
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
            Self::Px => "px",
            Self::Py => "py",
            Self::Pz => "pz",
            Self::T => "t",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Convert from column names, insensitive to case
impl TryFrom<&str> for Field {
    type Error = Error;

    fn try_from(s: &str) -> core::result::Result<Self, Self::Error> {
        match s.trim().to_lowercase().as_str() {
            "w" | "weight" => Ok(Self::W),
            "x" => Ok(Self::X),
            "y" => Ok(Self::Y),
            "z" => Ok(Self::Z),
            "px" => Ok(Self::Px),
            "py" => Ok(Self::Py),
            "pz" => Ok(Self::Pz),
            "t" | "time" => Ok(Self::T),
            _ => Err(Error::UnknownField(s.to_string())),
        }
    }
}

/// Layout of a single particle record
///
/// The gp3m2 diagnostics write `w, x, y, z, px, py, pz, t`, but older outputs
/// and some reference inputs omit the arrival time.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Shape {
    /// `w, x, y, z, px, py, pz`
    WithoutTime,
    /// `w, x, y, z, px, py, pz, t`
    #[default]
    WithTime,
}

impl Shape {
    /// Number of values making up one record
    ///
    /// ```rust
    /// # use phasebench_phasespace::Shape;
    /// assert_eq!(Shape::WithoutTime.stride(), 7);
    /// assert_eq!(Shape::WithTime.stride(), 8);
    /// ```
    pub fn stride(&self) -> usize {
        self.fields().len()
    }

    /// Fields in file order
    pub fn fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            Self::WithoutTime => &[W, X, Y, Z, Px, Py, Pz],
            Self::WithTime => &[W, X, Y, Z, Px, Py, Pz, T],
        }
    }

    /// Whether records carry an arrival time
    pub fn has_time(&self) -> bool {
        matches!(self, Self::WithTime)
    }
}

/// Particle phase space as parallel columns
///
/// Every column holds one value per particle and all columns share the same
/// length. Particles are only related by their position in the columns.
///
/// Units follow the gp3m2 "UHI" unit system used for all benchmarks:
///
/// | Field          | Unit   |
/// | -------------- | ------ |
/// | `w`            | -      |
/// | `x`, `y`, `z`  | um     |
/// | `px`,`py`,`pz` | MeV/c  |
/// | `t`            | fs     |
///
/// ```rust
/// # use phasebench_phasespace::{PhaseSpace, Shape, Species};
/// let mut ps = PhaseSpace::new(Species::Electron, Shape::WithoutTime);
/// ps.push_record(&[1.0, 50.0, 0.0, 0.0, 3.0, 0.0, 4.0]).unwrap();
///
/// assert_eq!(ps.len(), 1);
/// assert_eq!(ps.p(), vec![5.0]);
/// assert!(ps.t.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PhaseSpace {
    /// Particle species, decides the rest mass for kinematics
    pub species: Species,
    /// Statistical weight
    pub w: Vec<f64>,
    /// Position x
    pub x: Vec<f64>,
    /// Position y
    pub y: Vec<f64>,
    /// Position z
    pub z: Vec<f64>,
    /// Momentum x
    pub px: Vec<f64>,
    /// Momentum y
    pub py: Vec<f64>,
    /// Momentum z
    pub pz: Vec<f64>,
    /// Arrival time, only for data read with [Shape::WithTime]
    pub t: Option<Vec<f64>>,
}

impl PhaseSpace {
    /// Empty phase space for the given species and record layout
    pub fn new(species: Species, shape: Shape) -> Self {
        Self {
            species,
            t: shape.has_time().then(Vec::new),
            ..Default::default()
        }
    }

    /// Record layout of the stored data
    pub fn shape(&self) -> Shape {
        match self.t {
            Some(_) => Shape::WithTime,
            None => Shape::WithoutTime,
        }
    }

    /// Append one particle given as a full record in file order
    pub fn push_record(&mut self, record: &[f64]) -> Result<()> {
        let expected = self.shape().stride();
        if record.len() != expected {
            return Err(Error::UnexpectedRecordLength {
                expected,
                found: record.len(),
            });
        }

        self.w.push(record[0]);
        self.x.push(record[1]);
        self.y.push(record[2]);
        self.z.push(record[3]);
        self.px.push(record[4]);
        self.py.push(record[5]);
        self.pz.push(record[6]);
        if let Some(t) = self.t.as_mut() {
            t.push(record[7]);
        }

        Ok(())
    }

    /// Number of particles
    pub fn len(&self) -> usize {
        self.w.len()
    }

    /// True if no particles were loaded
    pub fn is_empty(&self) -> bool {
        self.w.is_empty()
    }

    /// Column for any field, `None` for time if it was not loaded
    pub fn field(&self, field: Field) -> Option<&[f64]> {
        match field {
            Field::W => Some(&self.w),
            Field::X => Some(&self.x),
            Field::Y => Some(&self.y),
            Field::Z => Some(&self.z),
            Field::Px => Some(&self.px),
            Field::Py => Some(&self.py),
            Field::Pz => Some(&self.pz),
            Field::T => self.t.as_deref(),
        }
    }

    /// Sum of all particle weights
    pub fn total_weight(&self) -> f64 {
        self.w.iter().sum()
    }

    /// Keep only particles with `field` inside the inclusive `range`
    ///
    /// Returns the number of particles removed.
    ///
    /// ```rust
    /// # use phasebench_phasespace::{Field, PhaseSpace, Shape, Species};
    /// let mut ps = PhaseSpace::new(Species::Gamma, Shape::WithoutTime);
    /// ps.push_record(&[1.0, 7999.5, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    /// ps.push_record(&[1.0, 9000.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    ///
    /// let removed = ps.filter(Field::X, 7999.0..=8001.0).unwrap();
    /// assert_eq!(removed, 1);
    /// assert_eq!(ps.x, vec![7999.5]);
    /// ```
    pub fn filter(&mut self, field: Field, range: RangeInclusive<f64>) -> Result<usize> {
        let keep: Vec<bool> = self
            .field(field)
            .ok_or(Error::MissingField(field))?
            .iter()
            .map(|v| range.contains(v))
            .collect();

        let before = self.len();
        retain_mask(&mut self.w, &keep);
        retain_mask(&mut self.x, &keep);
        retain_mask(&mut self.y, &keep);
        retain_mask(&mut self.z, &keep);
        retain_mask(&mut self.px, &keep);
        retain_mask(&mut self.py, &keep);
        retain_mask(&mut self.pz, &keep);
        if let Some(t) = self.t.as_mut() {
            retain_mask(t, &keep);
        }

        let removed = before - self.len();
        debug!("Filter on {field} removed {removed} of {before} particles");
        if self.is_empty() && before > 0 {
            warn!("Filter on {field} {range:?} removed every particle");
        }

        Ok(removed)
    }

    /// Radial distance from the propagation (x) axis
    pub fn r(&self) -> Vec<f64> {
        self.y
            .iter()
            .zip(&self.z)
            .map(|(y, z)| (y * y + z * z).sqrt())
            .collect()
    }

    /// Distance of every particle from `origin` given as `[x, y, z]`
    ///
    /// ```rust
    /// # use phasebench_phasespace::{PhaseSpace, Shape, Species};
    /// let mut ps = PhaseSpace::new(Species::Gamma, Shape::WithoutTime);
    /// ps.push_record(&[1.0, 4.0, 4.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(ps.d([1.0, 0.0, 0.0]), vec![5.0]);
    /// ```
    pub fn d(&self, origin: [f64; 3]) -> Vec<f64> {
        let [x0, y0, z0] = origin;
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| ((x - x0).powi(2) + (y - y0).powi(2) + (z - z0).powi(2)).sqrt())
            .collect()
    }

    /// Momentum magnitude (MeV/c)
    pub fn p(&self) -> Vec<f64> {
        self.px
            .iter()
            .zip(&self.py)
            .zip(&self.pz)
            .map(|((px, py), pz)| (px * px + py * py + pz * pz).sqrt())
            .collect()
    }

    /// Kinetic energy (MeV)
    ///
    /// Equal to the momentum for massless species, otherwise from the
    /// relativistic energy-momentum relation.
    pub fn ekin(&self) -> Vec<f64> {
        let mass = self.species.mass();
        if self.species.is_massless() {
            return self.p();
        }

        self.p()
            .into_iter()
            .map(|p| (((p / mass).powi(2) + 1.0).sqrt() - 1.0) * mass)
            .collect()
    }

    /// Lorentz factor
    ///
    /// Not meaningful for massless species, where the kinetic energy is
    /// returned as is.
    pub fn gamma(&self) -> Vec<f64> {
        let mass = self.species.mass();
        if self.species.is_massless() {
            return self.ekin();
        }

        self.ekin().into_iter().map(|e| e / mass + 1.0).collect()
    }

    /// Speed as a fraction of the speed of light
    ///
    /// Exactly 1 for massless species. A non-positive Lorentz factor gives 0.
    ///
    /// ```rust
    /// # use phasebench_phasespace::{PhaseSpace, Shape, Species};
    /// let mut ps = PhaseSpace::new(Species::Gamma, Shape::WithoutTime);
    /// ps.push_record(&[1.0, 0.0, 0.0, 0.0, 2.0, 0.0, 0.0]).unwrap();
    /// assert_eq!(ps.beta(), vec![1.0]);
    /// ```
    pub fn beta(&self) -> Vec<f64> {
        if self.species.is_massless() {
            return vec![1.0; self.len()];
        }

        self.gamma()
            .into_iter()
            .map(|g| match g > 0.0 {
                true => (1.0 - (1.0 / g).powi(2)).sqrt(),
                false => 0.0,
            })
            .collect()
    }

    /// Speed (um/fs)
    pub fn v(&self) -> Vec<f64> {
        self.beta()
            .into_iter()
            .map(|b| b * SPEED_OF_LIGHT)
            .collect()
    }
}

impl std::fmt::Display for PhaseSpace {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut s = "PhaseSpace {\n".to_string();
        s += &f!("    species: {}\n", self.species);
        s += &f!("    particles: {}\n", self.len());

        for field in self.shape().fields() {
            let values = self.field(*field).unwrap_or_default();
            s += &f!(
                "    {:<2}: {} to {}\n",
                field,
                values.finite_min().map(|v| v.sci(5, 2)).display(),
                values.finite_max().map(|v| v.sci(5, 2)).display(),
            );
        }
        s += "}";

        write!(f, "{}", s)
    }
}

/// Drop every value where the matching mask entry is false
fn retain_mask(values: &mut Vec<f64>, keep: &[bool]) {
    *values = values
        .iter()
        .zip(keep)
        .filter_map(|(v, k)| k.then_some(*v))
        .collect();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn electrons() -> PhaseSpace {
        let mut ps = PhaseSpace::new(Species::Electron, Shape::WithTime);
        ps.push_record(&[1.0, 50.0, 3.0, 4.0, 1.0, 0.0, 0.0, 10.0])
            .unwrap();
        ps.push_record(&[2.0, 50.0, 0.0, 0.0, 0.0, 0.0, 0.0, 20.0])
            .unwrap();
        ps
    }

    #[test]
    fn push_rejects_wrong_length() {
        let mut ps = PhaseSpace::new(Species::Electron, Shape::WithTime);
        let result = ps.push_record(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0]);
        assert!(matches!(
            result,
            Err(Error::UnexpectedRecordLength {
                expected: 8,
                found: 7
            })
        ));
        assert!(ps.is_empty());
    }

    #[test]
    fn radial_distance_from_axis() {
        assert_eq!(electrons().r(), vec![5.0, 0.0]);
    }

    #[test]
    fn uneven_columns_do_not_panic() {
        let mut ps = electrons();
        ps.x.pop();
        ps.pz.pop();
        assert_eq!(ps.d([0.0; 3]).len(), 1);
        assert_eq!(ps.p().len(), 1);
        assert_eq!(ps.v().len(), 1);
    }

    #[test]
    fn electron_kinematics() {
        let ps = electrons();
        let m = crate::species::ELECTRON_MASS;

        let ekin = ps.ekin();
        assert!((ekin[0] - (((1.0 / m).powi(2) + 1.0).sqrt() - 1.0) * m).abs() < 1e-12);
        assert_eq!(ekin[1], 0.0);

        // particle at rest
        let gamma = ps.gamma();
        assert_eq!(gamma[1], 1.0);
        assert_eq!(ps.beta()[1], 0.0);

        // relativistic particle is slower than light but not by much
        let v = ps.v();
        assert!(v[0] < SPEED_OF_LIGHT);
        assert!(v[0] > 0.8 * SPEED_OF_LIGHT);
    }

    #[test]
    fn massless_velocity_is_light_speed() {
        let mut ps = electrons();
        ps.species = Species::Gamma;
        assert_eq!(ps.ekin(), ps.p());
        assert_eq!(ps.v(), vec![SPEED_OF_LIGHT; 2]);
    }

    #[test]
    fn filter_keeps_columns_aligned() {
        let mut ps = electrons();
        assert_eq!(ps.filter(Field::W, 1.5..=2.5).unwrap(), 1);
        assert_eq!(ps.w, vec![2.0]);
        assert_eq!(ps.y, vec![0.0]);
        assert_eq!(ps.t, Some(vec![20.0]));
    }

    #[test]
    fn filter_needs_loaded_field() {
        let mut ps = PhaseSpace::new(Species::Electron, Shape::WithoutTime);
        assert!(matches!(
            ps.filter(Field::T, 0.0..=1.0),
            Err(Error::MissingField(Field::T))
        ));
    }

    #[test]
    fn summary_lists_every_field() {
        let summary = electrons().to_string();
        assert!(summary.contains("particles: 2"));
        assert!(summary.contains("t : 1.00000e+01 to 2.00000e+01"));

        let empty = PhaseSpace::new(Species::Gamma, Shape::WithoutTime).to_string();
        assert!(empty.contains("w : none to none"));
        assert!(!empty.contains("t :"));
    }
}
