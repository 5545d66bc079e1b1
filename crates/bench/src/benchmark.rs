// crate modules
use crate::error::Result;

// phasebench modules
use phasebench_phasespace::PhaseSpace;
use phasebench_validate::Validator;

/// Common interface to the packaged benchmark analyses
///
/// Implementors describe their comparisons in [Benchmark::analyse()] and may
/// reject unusable inputs in [Benchmark::check_inputs()]. The provided
/// [Benchmark::run()] checks the inputs, sets up the validator, prints the
/// start banner and hands back the finished [Validator] so the caller decides
/// what a failure means.
pub trait Benchmark {
    /// Identifier shown in the start banner, e.g. `"0"`
    fn id(&self) -> &str;

    /// A fresh validator with the initial settings of the analysis
    fn validator(&self) -> Validator;

    /// Reject inputs the analysis cannot handle, before anything is printed
    fn check_inputs(&self, _sim: &PhaseSpace, _reference: &PhaseSpace) -> Result<()> {
        Ok(())
    }

    /// Run every comparison of the analysis
    fn analyse(
        &self,
        test: &mut Validator,
        sim: &PhaseSpace,
        reference: &PhaseSpace,
    ) -> Result<()>;

    /// Full analysis of simulated output against the reference input
    fn run(&self, sim: &PhaseSpace, reference: &PhaseSpace) -> Result<Validator> {
        self.check_inputs(sim, reference)?;
        let mut test = self.validator();
        test.print_init(self.id());
        self.analyse(&mut test, sim, reference)?;
        Ok(test)
    }
}
