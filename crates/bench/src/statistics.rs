// crate modules
use crate::benchmark::Benchmark;
use crate::error::{Error, Result};

// phasebench modules
use phasebench_phasespace::PhaseSpace;
use phasebench_validate::{Tolerance, Validator};

/// Event count and weight conservation for high statistics runs
///
/// With `1e5` events spread over 20 source configurations the total weight is
/// expected within 1% of the reference, hence the default `rtol = 1e-2`.
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticsBenchmark {
    /// Identifier used in the start banner
    id: String,
    /// Number of primary events simulated
    nevents: usize,
    /// Relative tolerance for all checks
    rtol: f64,
    /// Failure lines kept per check
    max_errors: usize,
    /// Do not print status lines
    quiet: bool,
}

impl Default for StatisticsBenchmark {
    fn default() -> Self {
        Self {
            id: "1".into(),
            nevents: 100_000,
            rtol: 1e-2,
            max_errors: 3,
            quiet: false,
        }
    }
}

impl StatisticsBenchmark {
    /// Just calls Default::default(), nothing special to be initialised
    pub fn new() -> Self {
        Default::default()
    }

    /// Setter for the banner identifier
    pub fn set_id(&mut self, id: &str) {
        self.id = id.to_string();
    }

    /// Setter for the number of simulated events
    pub fn set_nevents(&mut self, nevents: usize) {
        self.nevents = nevents;
    }

    /// Setter for the relative tolerance
    pub fn set_rtol(&mut self, rtol: f64) {
        self.rtol = rtol;
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

impl Benchmark for StatisticsBenchmark {
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

    fn check_inputs(&self, _sim: &PhaseSpace, _reference: &PhaseSpace) -> Result<()> {
        match self.nevents {
            0 => Err(Error::InvalidEventCount),
            _ => Ok(()),
        }
    }

    fn analyse(
        &self,
        test: &mut Validator,
        sim: &PhaseSpace,
        reference: &PhaseSpace,
    ) -> Result<()> {

        test.compare_scalar("Number of events", sim.len() as f64, self.nevents as f64);
        test.compare_scalar(
            "Total number of particles",
            sim.total_weight(),
            reference.total_weight(),
        );

        Ok(())
    }
}
