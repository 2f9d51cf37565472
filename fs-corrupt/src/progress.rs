/// The two sequential phases of a corruption run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Copy,
    Corrupt,
}

/// Receives periodic percent-complete reports from the engine.
///
/// The engine never writes to the console itself; the caller decides
/// where reports go, which also keeps test runs silent.
pub trait ProgressReporter {
    fn report(&mut self, phase: Phase, percent: f64);
}

/// Prints progress lines to stdout, two decimal places.
pub struct ConsoleProgress;

impl ProgressReporter for ConsoleProgress {
    fn report(&mut self, phase: Phase, percent: f64) {
        let label = match phase {
            Phase::Copy => "Copy Base Data",
            Phase::Corrupt => "Corrupting Data",
        };
        println!("{} {:.2} %", label, percent);
    }
}

/// Discards every report.
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&mut self, _phase: Phase, _percent: f64) {}
}
