use log::warn;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

/// Writes each name to the console and, when one could be opened, to a file.
pub struct OutputWriter<W: Write> {
    console: W,
    file: Option<BufWriter<File>>,
}

impl<W: Write> OutputWriter<W> {
    /// A file that cannot be created is reported and skipped; the console
    /// still receives every name.
    pub fn new(console: W, path: Option<&Path>) -> Self {
        let file = path.and_then(|path| match File::create(path) {
            Ok(file) => Some(BufWriter::new(file)),
            Err(e) => {
                warn!(
                    "Unable to open {} for writing, printing to console only: {}",
                    path.display(),
                    e
                );
                None
            }
        });
        Self { console, file }
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn write_name(&mut self, name: &str) -> io::Result<()> {
        if let Some(file) = self.file.as_mut() {
            writeln!(file, "{name}")?;
        }
        writeln!(self.console, "{name}")
    }

    /// Flushes both sinks and hands back the console.
    pub fn finish(mut self) -> io::Result<W> {
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        self.console.flush()?;
        Ok(self.console)
    }
}
