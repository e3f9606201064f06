//! Progress reporting for the export pipeline.
//!
//! The collector reports through the narrow [`ProgressSink`] trait so the
//! console bar can be swapped for structured log lines in non-interactive
//! environments, or discarded entirely in tests.

use std::io::{self, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use crossterm::cursor::MoveToColumn;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor};

/// Width of the progress bar in character cells.
pub const TOTAL_CHUNKS: usize = 30;

/// Width the `"<current> of <total>"` counter is padded to.
const COUNTER_WIDTH: usize = 15;

/// Column the counter starts at, leaving a gap after the closing bracket.
const COUNTER_COLUMN: u16 = 35;

/// One rendered state of the progress bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressFrame {
    /// Cells drawn as complete.
    pub complete: usize,
    /// Cells drawn as incomplete; `complete + incomplete == TOTAL_CHUNKS`.
    pub incomplete: usize,
    /// `"<current> of <total>"`, padded to a fixed width.
    pub counter: String,
}

/// Computes the bar state for `current` out of `total` items.
///
/// Complete cells are `round(30 * current / total)` using half-to-even
/// rounding, clamped to the bar width. A `total` of zero yields an empty bar.
///
/// # Example
///
/// ```
/// use review_comments::progress::progress_frame;
///
/// let frame = progress_frame(5, 10);
/// assert_eq!(frame.complete, 15);
/// assert_eq!(frame.counter.trim_end(), "5 of 10");
/// ```
#[must_use]
pub fn progress_frame(current: usize, total: usize) -> ProgressFrame {
    let complete = complete_cells(current, total);
    ProgressFrame {
        complete,
        incomplete: TOTAL_CHUNKS - complete,
        counter: format!("{:<COUNTER_WIDTH$}", format!("{current} of {total}")),
    }
}

#[expect(
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "cell counts are whole numbers and the remainder drives rounding"
)]
const fn complete_cells(current: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }

    let clamped = if current > total { total } else { current };
    let scaled = TOTAL_CHUNKS.saturating_mul(clamped);
    let quotient = scaled / total;
    let doubled_remainder = (scaled % total).saturating_mul(2);

    let round_up =
        doubled_remainder > total || (doubled_remainder == total && quotient % 2 == 1);
    let rounded = if round_up { quotient + 1 } else { quotient };
    if rounded > TOTAL_CHUNKS {
        TOTAL_CHUNKS
    } else {
        rounded
    }
}

/// A sink that receives progress updates from the collector.
pub trait ProgressSink: Send + Sync {
    /// Records a one-off status message between pipeline stages.
    fn status(&self, message: &str);

    /// Records that item `current` (0-based) of `total` is being processed.
    fn report(&self, description: &str, current: usize, total: usize);

    /// Marks the end of item processing.
    fn finish(&self);
}

/// Progress sink that drops all updates.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopProgress;

impl ProgressSink for NoopProgress {
    fn status(&self, _message: &str) {}

    fn report(&self, _description: &str, _current: usize, _total: usize) {}

    fn finish(&self) {}
}

/// Emits progress as `tracing` events, for runs without a terminal.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogProgress;

impl ProgressSink for LogProgress {
    fn status(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn report(&self, description: &str, current: usize, total: usize) {
        tracing::info!(current, total, "{description}");
    }

    fn finish(&self) {}
}

/// Draws a single-line coloured progress bar, redrawn in place.
#[derive(Debug)]
pub struct ConsoleProgress<Out>
where
    Out: Write + Send,
{
    out: Mutex<Out>,
}

impl ConsoleProgress<Stdout> {
    /// Creates a console sink writing to standard output.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<Out> ConsoleProgress<Out>
where
    Out: Write + Send,
{
    /// Creates a console sink writing to `out`.
    #[must_use]
    pub const fn new(out: Out) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    /// Consumes the sink and returns the underlying writer.
    #[must_use]
    pub fn into_inner(self) -> Out {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_out(&self, draw: impl FnOnce(&mut Out) -> io::Result<()>) {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        if let Err(error) = draw(&mut out).and_then(|()| out.flush()) {
            tracing::debug!("failed to write progress: {error}");
        }
    }
}

impl<Out> ProgressSink for ConsoleProgress<Out>
where
    Out: Write + Send,
{
    fn status(&self, message: &str) {
        self.with_out(|out| writeln!(out, "{message}"));
    }

    fn report(&self, description: &str, current: usize, total: usize) {
        let frame = progress_frame(current, total);
        self.with_out(|out| {
            queue!(
                out,
                MoveToColumn(0),
                Print("["),
                SetBackgroundColor(Color::Green),
                Print(" ".repeat(frame.complete)),
                SetBackgroundColor(Color::Grey),
                Print(" ".repeat(frame.incomplete)),
                ResetColor,
                Print("]"),
                MoveToColumn(COUNTER_COLUMN),
                Print(&frame.counter),
                Print(description),
            )
        });
    }

    fn finish(&self) {
        self.with_out(|out| writeln!(out));
    }
}
