// crate modules
use crate::benchmark::Benchmark;
use crate::error::{Error, Result};

// phasebench modules
use phasebench_phasespace::{Field, PhaseSpace};
use phasebench_validate::{Tolerance, Validator};

// external crates
use log::debug;

/// Point source of particles recorded on a diagnostic plane
///
/// Particles start from the origin with the weights and momenta of the
/// reference input, and are recorded when crossing the plane `x = diag_x`.
/// The analysis checks that:
///
/// - one record exists per event, and the total weight is conserved
/// - weights match the reference once normalised to the number of events
/// - momentum components are unchanged
/// - every particle sits on the diagnostic plane
/// - projecting back along the momentum recovers the reference `y`, `z`
/// - subtracting the flight time recovers the reference `t`
///
/// Defaults match the standard 1000 event run. The reduced variant from
/// [ElectronSourceBenchmark::reduced()] checks one way only, skips the `z`
/// origin and keeps `y` to the relative tolerance, leaving the absolute
/// tolerance for `t`.
///
/// ```rust, no_run
/// # use phasebench_bench::{Benchmark, ElectronSourceBenchmark};
/// # use phasebench_phasespace::{read_multithreaded_csv, read_text_columns, Shape, Species};
/// let sim = read_multithreaded_csv("test_nt_electron_t*.csv", 2, Shape::WithTime, Species::Electron).unwrap();
/// let reference = read_text_columns("input.dat", Shape::WithTime, Species::Electron).unwrap();
///
/// let test = ElectronSourceBenchmark::new().run(&sim, &reference).unwrap();
/// test.print_report();
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ElectronSourceBenchmark {
    /// Identifier used in the start banner
    id: String,
    /// Number of primary events simulated
    nevents: usize,
    /// Position of the diagnostic plane along x (um)
    diag_x: f64,
    /// Also look for every reference value in the simulated output
    bidirectional: bool,
    /// Relative tolerance for all checks
    rtol: f64,
    /// Absolute tolerance for the back-projected origin (um, fs)
    origin_atol: f64,
    /// Apply `origin_atol` to the `y`, `z` origin and not only to `t`
    spatial_atol: bool,
    /// Check the `z` origin
    origin_z: bool,
    /// Failure lines kept per check
    max_errors: usize,
    /// Do not print status lines
    quiet: bool,
}

impl Default for ElectronSourceBenchmark {
    fn default() -> Self {
        Self {
            id: "0".into(),
            nevents: 1000,
            diag_x: 50.0,
            bidirectional: true,
            rtol: 1e-12,
            origin_atol: 1e-2,
            spatial_atol: true,
            origin_z: true,
            max_errors: 3,
            quiet: false,
        }
    }
}

impl ElectronSourceBenchmark {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Reduced analysis of the same run, identified as `"00"`
    ///
    /// ```rust
    /// # use phasebench_bench::{Benchmark, ElectronSourceBenchmark};
    /// assert_eq!(ElectronSourceBenchmark::reduced().id(), "00");
    /// ```
    pub fn reduced() -> Self {
        Self {
            id: "00".into(),
            bidirectional: false,
            spatial_atol: false,
            origin_z: false,
            ..Default::default()
        }
    }

    /// Setter for the banner identifier
    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    /// Setter for the number of simulated events
    pub fn set_nevents(&mut self, nevents: usize) {
        self.nevents = nevents;
    }

    /// Setter for the x position of the diagnostic plane (um)
    pub fn set_diag_x(&mut self, diag_x: f64) {
        self.diag_x = diag_x;
    }

    /// Choose between one way and two way vector checks
    pub fn set_bidirectional(&mut self, bidirectional: bool) {
        self.bidirectional = bidirectional;
    }

    /// Setter for the relative tolerance
    pub fn set_rtol(&mut self, rtol: f64) {
        self.rtol = rtol;
    }

    /// Setter for the absolute tolerance on the particle origin
    pub fn set_origin_atol(&mut self, origin_atol: f64) {
        self.origin_atol = origin_atol;
    }

    /// Choose whether the absolute tolerance also applies to the `y`, `z` origin
    pub fn set_spatial_atol(&mut self, spatial_atol: bool) {
        self.spatial_atol = spatial_atol;
    }

    /// Choose whether to check the `z` origin
    pub fn set_origin_z(&mut self, origin_z: bool) {
        self.origin_z = origin_z;
    }

    /// Setter for the number of failure lines kept per check
    pub fn set_max_errors(&mut self, max_errors: usize) {
        self.max_errors = max_errors;
    }

    /// Do not print status lines
    pub fn quiet(&mut self) {
        self.quiet = true;
    }
}

impl Benchmark for ElectronSourceBenchmark {
    fn id(&self) -> &str {
        &self.id
    }

    fn validator(&self) -> Validator {
        let mut test =
            Validator::new(self.max_errors).with_tolerance(Tolerance::relative(self.rtol));
        if self.quiet {
            test.quiet();
        }
        test
    }

    fn check_inputs(&self, sim: &PhaseSpace, reference: &PhaseSpace) -> Result<()> {
        if self.nevents == 0 {
            return Err(Error::InvalidEventCount);
        }
        for ps in [sim, reference] {
            if ps.field(Field::T).is_none() {
                return Err(phasebench_phasespace::Error::MissingField(Field::T).into());
            }
        }
        Ok(())
    }

    fn analyse(
        &self,
        test: &mut Validator,
        sim: &PhaseSpace,
        reference: &PhaseSpace,
    ) -> Result<()> {
        self.check_inputs(sim, reference)?;
        let sim_t = sim
            .field(Field::T)
            .ok_or(phasebench_phasespace::Error::MissingField(Field::T))?;
        let reference_t = reference
            .field(Field::T)
            .ok_or(phasebench_phasespace::Error::MissingField(Field::T))?;

        let both = self.bidirectional;

        test.compare_scalar("Number of events", sim.len() as f64, self.nevents as f64);
        test.compare_scalar(
            "Total number of particles",
            sim.total_weight(),
            reference.total_weight(),
        );

        let wnorm = reference.len() as f64 / self.nevents as f64;
        debug!("Weight normalisation factor {wnorm}");
        let w: Vec<f64> = sim.w.iter().map(|w| w / wnorm).collect();
        test.compare_vector("Weight normalization", &w, &reference.w, both);

        test.compare_vector("px", &sim.px, &reference.px, both);
        test.compare_vector("py", &sim.py, &reference.py, both);
        test.compare_vector("pz", &sim.pz, &reference.pz, both);

        test.compare_vector("Diagnostic position", &sim.x, &[self.diag_x], both);

        // origins are at zero, so only an absolute tolerance makes sense
        let origin = Tolerance::new(self.origin_atol, self.rtol);
        if self.spatial_atol {
            test.set_tolerance(origin);
        }

        let y = back_project(&sim.y, &sim.py, &sim.px, self.diag_x);
        test.compare_vector("Origin of y", &y, &reference.y, both);

        if self.origin_z {
            let z = back_project(&sim.z, &sim.pz, &sim.px, self.diag_x);
            test.compare_vector("Origin of z", &z, &reference.z, both);
        }

        test.set_tolerance(origin);

        let t: Vec<f64> = sim_t
            .iter()
            .zip(sim.d([0.0; 3]))
            .zip(sim.v())
            .map(|((t, d), v)| t - d / v)
            .collect();
        test.compare_vector("Origin of t", &t, reference_t, both);

        Ok(())
    }
}

/// Position on the plane `x = 0` reached by following the momentum backwards
fn back_project(position: &[f64], momentum: &[f64], px: &[f64], diag_x: f64) -> Vec<f64> {
    position
        .iter()
        .zip(momentum)
        .zip(px)
        .map(|((q, p), px)| q - diag_x * p / px)
        .collect()
}
