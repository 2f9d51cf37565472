use data_error::{CorrupterError, Result};

use crate::progress::{Phase, ProgressReporter};
use crate::random::RandomSource;
use crate::target::Target;

/// One read/write unit of the copy phase.
const CHUNK_SIZE: usize = 4096;

/// The copy phase reports once per this many bytes transferred.
const COPY_REPORT_STEP: u64 = 10_000;

/// The corruption phase reports once per this many stride windows.
const CORRUPT_REPORT_STEP: u64 = 10_000;

/// Counts from one corruption run.
///
/// `written + skipped == candidates` always holds. `written` counts
/// issued single-byte writes, not distinct altered bytes: a write may
/// leave a byte unchanged when the random value matches the original.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CorruptSummary {
    /// Stride windows considered, `source_len / ratio`.
    pub candidates: u64,
    /// Single-byte writes actually issued.
    pub written: u64,
    /// Candidates whose offset fell beyond end-of-file.
    pub skipped: u64,
}

/// The corruption engine.
///
/// Copies the source into the sink byte-for-byte, then issues at most
/// one single-byte overwrite per `ratio`-sized window of the source, at
/// a random offset within the window, with a random value.
pub struct Corrupter<R, P> {
    ratio: u64,
    random: R,
    progress: P,
}

impl<R: RandomSource, P: ProgressReporter> Corrupter<R, P> {
    /// `ratio` is the stride: one corrupting write per `ratio` source
    /// bytes on average. Zero means infinite density and is rejected
    /// here instead of being divided by later.
    pub fn new(ratio: u64, random: R, progress: P) -> Result<Self> {
        if ratio < 1 {
            return Err(CorrupterError::Config(
                "ratio must be a positive integer".to_owned(),
            ));
        }

        Ok(Self {
            ratio,
            random,
            progress,
        })
    }

    /// Run both phases against `target` and flush the sink.
    ///
    /// The copy phase is skipped when source and sink already coincide
    /// (in-place mode).
    pub fn run(&mut self, target: &mut Target) -> Result<CorruptSummary> {
        if target.needs_copy() {
            self.copy_phase(target)?;
        }

        let summary = self.corrupt_phase(target)?;
        target.flush_sink()?;

        log::debug!(
            "{} candidate windows, {} written, {} beyond end of file",
            summary.candidates,
            summary.written,
            summary.skipped
        );
        Ok(summary)
    }

    fn copy_phase(&mut self, target: &mut Target) -> Result<()> {
        let total = target.source_len();
        let mut buffer = [0u8; CHUNK_SIZE];
        let mut transferred: u64 = 0;

        loop {
            let read = target.read_source(&mut buffer)?;
            if read == 0 {
                break;
            }
            target.write_sink(&buffer[..read])?;

            let before = transferred / COPY_REPORT_STEP;
            transferred += read as u64;
            if transferred / COPY_REPORT_STEP > before {
                self.progress
                    .report(Phase::Copy, percent(transferred, total));
            }
        }

        self.progress.report(Phase::Copy, 100.0);
        Ok(())
    }

    fn corrupt_phase(&mut self, target: &mut Target) -> Result<CorruptSummary> {
        let len = target.source_len();
        let mut summary = CorruptSummary {
            candidates: len / self.ratio,
            ..Default::default()
        };

        // The copy phase leaves the sink cursor at end-of-file.
        target.seek_sink(0)?;

        for i in 0..summary.candidates {
            let offset = i * self.ratio + self.random.offset(self.ratio);
            if offset >= len {
                summary.skipped += 1;
                continue;
            }

            target.seek_sink(offset)?;
            target.write_sink(&[self.random.byte()])?;
            summary.written += 1;

            if i % CORRUPT_REPORT_STEP == 0 {
                self.progress
                    .report(Phase::Corrupt, percent(offset, len));
            }
        }

        self.progress.report(Phase::Corrupt, 100.0);
        Ok(summary)
    }
}

fn percent(part: u64, total: u64) -> f64 {
    if total == 0 {
        return 100.0;
    }
    part as f64 / total as f64 * 100.0
}
