//! Ways of showing a histogram of the generated samples.
//!
//! Rendering is kept behind [`HistogramDisplay`] so that the driver only decides
//! *whether* to show a histogram, while the caller decides *how* (or whether the
//! call does anything at all, as with [`NoDisplay`] in automated runs).

use std::io::{self, BufRead, Write, StdinLock, StdoutLock};
use crate::{error::TrialError, statistics::Histogram};


/// Default width in characters of the longest histogram bar
pub const DEFAULT_BAR_WIDTH: usize = 50;

/// Capability to present a histogram, implementations may block until the user dismisses it
pub trait HistogramDisplay {
    /// Presents the histogram
    fn show(&mut self, histogram: &Histogram) -> Result<(), TrialError>;
}

impl<F> HistogramDisplay for F
where
    F: FnMut(&Histogram) -> Result<(), TrialError>,
{
    fn show(&mut self, histogram: &Histogram) -> Result<(), TrialError> {
        self(histogram)
    }
}

/// Display that discards the histogram
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDisplay;

impl HistogramDisplay for NoDisplay {
    fn show(&mut self, _histogram: &Histogram) -> Result<(), TrialError> {
        Ok(())
    }
}

/// Text histogram written to an output stream, blocks reading one line of input
/// after drawing so the viewer decides when to move on
pub struct TerminalHistogram<I: BufRead, O: Write> {
    input: I,
    output: O,
    /// Width of the longest bar
    pub width: usize,
}

impl TerminalHistogram<StdinLock<'static>, StdoutLock<'static>> {
    /// Draws to standard output and waits on standard input
    pub fn stdio() -> Self {
        TerminalHistogram::new(io::stdin().lock(), io::stdout().lock())
    }
}

impl<I: BufRead, O: Write> TerminalHistogram<I, O> {
    pub fn new(input: I, output: O) -> Self {
        TerminalHistogram { input, output, width: DEFAULT_BAR_WIDTH }
    }

    /// Returns the input and output streams
    pub fn into_inner(self) -> (I, O) {
        (self.input, self.output)
    }

    fn bar_length(&self, count: usize, max_count: usize) -> usize {
        if max_count == 0 {
            return 0;
        }

        ((count as f64 / max_count as f64) * self.width as f64).round() as usize
    }
}

impl<I: BufRead, O: Write> HistogramDisplay for TerminalHistogram<I, O> {
    fn show(&mut self, histogram: &Histogram) -> Result<(), TrialError> {
        let max_count = histogram.max_count();
        let last = histogram.bins.len().saturating_sub(1);

        for (n, bin) in histogram.bins.iter().enumerate() {
            let closing = if n == last { ']' } else { ')' };
            let bar = "#".repeat(self.bar_length(bin.count, max_count));

            writeln!(
                self.output,
                "[{:>7.3}, {:>7.3}{} | {} {}",
                bin.start, bin.end, closing, bar, bin.count,
            )?;
        }

        write!(self.output, "Press Enter to continue...")?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;

        Ok(())
    }
}
