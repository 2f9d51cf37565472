use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use data_error::{CorrupterError, Result};

/// Open handles for one corruption run.
///
/// In-place mode backs source and sink with a single read-write handle,
/// so the engine never has to ask whether the two coincide. Handles
/// close on drop whichever way the run ends.
pub enum Target {
    InPlace { file: File, len: u64 },
    Separate { source: File, sink: File, len: u64 },
}

impl Target {
    /// Open `path` once with combined read/write access; corrupting
    /// writes land in the input file itself. Destructive, no backup.
    pub fn in_place(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(CorrupterError::NotFound(path.to_path_buf()));
        }

        let file = OpenOptions::new().read(true).write(true).open(path)?;
        let len = file.metadata()?.len();

        log::debug!("opened {} in place, {} bytes", path.display(), len);
        Ok(Target::InPlace { file, len })
    }

    /// Open `input` read-only and create or truncate `output`.
    ///
    /// The output is only touched once the input is known to exist.
    pub fn separate(
        input: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Result<Self> {
        let input = input.as_ref();
        if !input.exists() {
            return Err(CorrupterError::NotFound(input.to_path_buf()));
        }

        let source = File::open(input)?;
        let len = source.metadata()?.len();
        let sink = File::create(output.as_ref())?;

        log::debug!(
            "copying {} ({} bytes) into {}",
            input.display(),
            len,
            output.as_ref().display()
        );
        Ok(Target::Separate { source, sink, len })
    }

    /// Total source length in bytes, captured at open time.
    pub fn source_len(&self) -> u64 {
        match self {
            Target::InPlace { len, .. } => *len,
            Target::Separate { len, .. } => *len,
        }
    }

    /// Whether the sink still needs a byte-for-byte copy of the source.
    pub fn needs_copy(&self) -> bool {
        matches!(self, Target::Separate { .. })
    }

    pub(crate) fn read_source(&mut self, buf: &mut [u8]) -> Result<usize> {
        let file = match self {
            Target::InPlace { file, .. } => file,
            Target::Separate { source, .. } => source,
        };
        Ok(file.read(buf)?)
    }

    pub(crate) fn write_sink(&mut self, buf: &[u8]) -> Result<()> {
        Ok(self.sink_mut().write_all(buf)?)
    }

    pub(crate) fn seek_sink(&mut self, offset: u64) -> Result<()> {
        self.sink_mut().seek(SeekFrom::Start(offset))?;
        Ok(())
    }

    pub(crate) fn flush_sink(&mut self) -> Result<()> {
        Ok(self.sink_mut().flush()?)
    }

    fn sink_mut(&mut self) -> &mut File {
        match self {
            Target::InPlace { file, .. } => file,
            Target::Separate { sink, .. } => sink,
        }
    }
}
