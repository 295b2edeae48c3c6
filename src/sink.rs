//! Output sink: stdout or an append-mode output file, always in binary mode.
//!
//! A small `Write`-implementing wrapper chosen once at startup, so the
//! emission driver never has to branch on where its bytes are going.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};

/// A write destination for emitted candidates: either stdout or an
/// append-mode file opened from `--output-file`.
pub struct Sink {
    inner: Box<dyn Write>,
}

impl Sink {
    /// Stdout, placed in binary mode on Windows so line counts stay
    /// deterministic (spec §4.5: "the output handle MUST be placed in
    /// binary mode").
    pub fn stdout() -> Self {
        #[cfg(windows)]
        // SAFETY: calling _setmode on stdout (fd=1) is always valid.
        unsafe {
            libc::_setmode(1, libc::O_BINARY);
        }
        Sink {
            inner: Box::new(BufWriter::new(io::stdout())),
        }
    }

    /// Opens `path` for appending in binary mode, creating it if absent.
    pub fn append_file(path: &str) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Sink {
            inner: Box::new(BufWriter::new(file)),
        })
    }
}

impl Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.inner.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
