mod engine;
mod progress;
mod random;
mod target;

pub use engine::{CorruptSummary, Corrupter};
pub use progress::{ConsoleProgress, Phase, ProgressReporter, SilentProgress};
pub use random::{FastRandom, RandomSource};
pub use target::Target;
