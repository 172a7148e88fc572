//! Terminal rendering of batch snapshots.

use postwright::{Batch, GenerationRecord, GenerationStatus};
use std::io::{self, Write};

/// Prints each record once, as soon as it reaches a terminal state.
///
/// Records finish in input order, so only a cursor is needed.
#[derive(Debug)]
pub struct Progress<W> {
    out: W,
    announced: bool,
    next: usize,
}

impl<W: Write> Progress<W> {
    /// Render to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            announced: false,
            next: 0,
        }
    }

    /// Render whatever changed since the previous snapshot.
    pub fn render(&mut self, batch: &Batch) -> io::Result<()> {
        if batch.is_empty() {
            return Ok(());
        }
        if !self.announced {
            let noun = if batch.len() == 1 { "post" } else { "posts" };
            writeln!(self.out, "Generating {} {}...", batch.len(), noun)?;
            self.announced = true;
        }
        while let Some(record) = batch.get(self.next).filter(|r| r.is_terminal()) {
            self.next += 1;
            self.record(self.next, batch.len(), record)?;
        }
        self.out.flush()
    }

    /// Print the closing summary line.
    pub fn finish(&mut self, batch: &Batch) -> io::Result<()> {
        writeln!(self.out, "Done: {}", batch.summary())?;
        self.out.flush()
    }

    fn record(&mut self, position: usize, total: usize, record: &GenerationRecord) -> io::Result<()> {
        let mark = match record.status() {
            GenerationStatus::Generated => "ok",
            GenerationStatus::Failed => "failed",
            GenerationStatus::Pending => "pending",
        };
        writeln!(
            self.out,
            "[{}/{}] {} {}: {}",
            position,
            total,
            mark,
            record.id(),
            record.brief()
        )?;
        let body = match record.error() {
            Some(error) => error.as_str(),
            None => record.content().as_str(),
        };
        for line in body.lines() {
            writeln!(self.out, "    {}", line)?;
        }
        Ok(())
    }
}
