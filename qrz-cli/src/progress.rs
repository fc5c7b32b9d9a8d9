//! Single-line progress bar drawn on stderr during a batch.

use std::io::{IsTerminal, Write};

use qrz_fetch::BatchProgress;

const BAR_WIDTH: usize = 10;
const FILLED: char = '█';
const EMPTY: char = '░';

const CLEAR_LINE: &str = "\r\x1b[2K";
const HIDE_CURSOR: &str = "\x1b[?25l";
const SHOW_CURSOR: &str = "\x1b[?25h";

/// Renders one progress line, e.g. `[█████░░░░░] 50% Fetching W1AW`.
pub fn render_line(term: &str, index: usize, total: usize) -> String {
    let percent = if total == 0 { 100 } else { (index * 100 / total).min(100) };
    let filled = percent * BAR_WIDTH / 100;

    let mut bar = String::with_capacity(BAR_WIDTH * 3);
    bar.extend(std::iter::repeat_n(FILLED, filled));
    bar.extend(std::iter::repeat_n(EMPTY, BAR_WIDTH - filled));

    format!("[{bar}] {percent}% Fetching {term}")
}

/// Progress bar that redraws a single stderr line.
///
/// Disabled bars ignore every event. The line is erased before a password
/// prompt, at the end of the batch and on drop.
pub struct ProgressBar {
    enabled: bool,
    drawn: bool,
}

impl ProgressBar {
    /// Creates a bar that draws only when stderr is a terminal.
    pub fn new(requested: bool) -> Self {
        Self {
            enabled: requested && std::io::stderr().is_terminal(),
            drawn: false,
        }
    }

    /// Whether the bar draws anything.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    fn draw(&mut self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        let cursor = if self.drawn { "" } else { HIDE_CURSOR };
        // Progress output is best-effort.
        let _ = write!(stderr, "{cursor}{CLEAR_LINE}{line}");
        let _ = stderr.flush();
        self.drawn = true;
    }

    fn clear(&mut self) {
        if !self.drawn {
            return;
        }
        let mut stderr = std::io::stderr().lock();
        let _ = write!(stderr, "{CLEAR_LINE}{SHOW_CURSOR}");
        let _ = stderr.flush();
        self.drawn = false;
    }
}

impl BatchProgress for ProgressBar {
    fn on_fetch(&mut self, term: &str, index: usize, total: usize) {
        if self.enabled {
            self.draw(&render_line(term, index, total));
        }
    }

    fn on_reauthenticate(&mut self, _term: &str, _attempt: u32) {
        self.clear();
    }

    fn on_finish(&mut self) {
        self.clear();
    }
}

impl Drop for ProgressBar {
    fn drop(&mut self) {
        self.clear();
    }
}
