//! Terminal logging with colored module prefixes and progress bars.
//!
//! ```ignore
//! log!("build"; "rendering {} posts", count);
//!
//! if let Some(progress) = ProgressBars::new_filtered(&[("pages", pages.len())]) {
//!     progress.inc(0);
//! }
//! ```

use colored::{ColoredString, Colorize};
use crossterm::{
    cursor, execute,
    terminal::{Clear, ClearType, size},
};
use std::{
    io::{Write, stdout},
    sync::{
        Mutex, OnceLock,
        atomic::{AtomicUsize, Ordering},
    },
};

/// Cached terminal width (fetched once on first use)
static TERMINAL_WIDTH: OnceLock<u16> = OnceLock::new();

/// Active progress bar count (for log coordination)
static BAR_COUNT: AtomicUsize = AtomicUsize::new(0);

// ============================================================================
// Layout Constants
// ============================================================================
//
// Progress bar format: "[pages] [████░░░░] 42/100"
//                       ^-----^ ^-------^ ^----^
//                       prefix  bar       count

const BRACKET_LEN: usize = 2;
const SPACE_AFTER_PREFIX: usize = 1;
/// Bar wrapper: " []"
const BAR_WRAPPER_LEN: usize = 3;
const SPACE_BEFORE_COUNT: usize = 1;
const MIN_BAR_WIDTH: usize = 10;
const MAX_BAR_WIDTH: usize = 40;

/// Display length of `[module] `.
#[inline]
const fn calc_prefix_len(module_len: usize) -> usize {
    module_len + BRACKET_LEN + SPACE_AFTER_PREFIX
}

/// Get terminal width, cached after first call.
/// Falls back to 120 columns if detection fails.
fn get_terminal_width() -> u16 {
    *TERMINAL_WIDTH.get_or_init(|| size().map(|(w, _)| w).unwrap_or(120))
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix.
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

// ============================================================================
// Progress Bars
// ============================================================================

/// Progress bars drawn on consecutive terminal lines, updated in place.
///
/// Bars are indexed by creation order. Updates from rayon workers are
/// serialized through an internal mutex.
pub struct ProgressBars {
    bars: Vec<ProgressBar>,
    lock: Mutex<()>,
}

struct ProgressBar {
    prefix: ColoredString,
    prefix_len: usize,
    total: usize,
    current: AtomicUsize,
    /// Row index within the progress area (0 = first bar)
    row: usize,
}

impl ProgressBars {
    pub fn new(modules: &[(&'static str, usize)]) -> Self {
        // Reserve terminal lines for progress bars
        let mut stdout = stdout().lock();
        for _ in 0..modules.len() {
            writeln!(stdout).ok();
        }
        stdout.flush().ok();

        BAR_COUNT.store(modules.len(), Ordering::SeqCst);

        let bars = modules
            .iter()
            .enumerate()
            .map(|(row, (module, total))| ProgressBar {
                prefix: colorize_prefix(module, &module.to_ascii_lowercase()),
                prefix_len: calc_prefix_len(module.len()),
                total: *total,
                current: AtomicUsize::new(0),
                row,
            })
            .collect();

        Self {
            bars,
            lock: Mutex::new(()),
        }
    }

    /// Create progress bars, skipping empty categories.
    ///
    /// Returns `None` when there is at most one item overall.
    pub fn new_filtered(modules: &[(&'static str, usize)]) -> Option<Self> {
        let filtered: Vec<_> = modules
            .iter()
            .filter(|(_, count)| *count > 0)
            .copied()
            .collect();
        let total: usize = filtered.iter().map(|(_, c)| c).sum();

        if total <= 1 {
            return None;
        }

        Some(Self::new(&filtered))
    }

    /// Increment progress for the bar at the given index.
    #[inline]
    pub fn inc(&self, index: usize) {
        if let Some(bar) = self.bars.get(index) {
            let current = bar.current.fetch_add(1, Ordering::Relaxed) + 1;
            self.display(bar, current);
        }
    }

    fn display(&self, bar: &ProgressBar, current: usize) {
        let _guard = self.lock.lock().ok();

        let width = get_terminal_width() as usize;

        let progress_text = format!("{}/{}", current, bar.total);
        let overhead = bar.prefix_len + BAR_WRAPPER_LEN + SPACE_BEFORE_COUNT + progress_text.len();
        let bar_width = width
            .saturating_sub(overhead)
            .clamp(MIN_BAR_WIDTH, MAX_BAR_WIDTH);

        let filled = if bar.total > 0 {
            (current * bar_width) / bar.total
        } else {
            0
        };
        let empty = bar_width.saturating_sub(filled);
        let progress_bar: String = "█".repeat(filled) + &"░".repeat(empty);

        let mut stdout = stdout().lock();
        #[allow(clippy::cast_possible_truncation)]
        let lines_up = (self.bars.len() - bar.row) as u16;
        execute!(stdout, cursor::MoveUp(lines_up)).ok();
        execute!(stdout, Clear(ClearType::CurrentLine)).ok();
        write!(stdout, "{} [{}] {}", bar.prefix, progress_bar, progress_text).ok();
        execute!(stdout, cursor::MoveDown(lines_up)).ok();
        write!(stdout, "\r").ok();
        stdout.flush().ok();
    }

    /// Clear all progress bars from the terminal.
    #[allow(clippy::cast_possible_truncation)]
    pub fn finish(&self) {
        if BAR_COUNT.swap(0, Ordering::SeqCst) == 0 {
            return;
        }
        let _guard = self.lock.lock().ok();

        let mut stdout = stdout().lock();
        let bars_len = self.bars.len() as u16;

        execute!(stdout, cursor::MoveUp(bars_len)).ok();
        for _ in &self.bars {
            execute!(stdout, Clear(ClearType::CurrentLine)).ok();
            execute!(stdout, cursor::MoveDown(1)).ok();
        }
        execute!(stdout, cursor::MoveUp(bars_len)).ok();
        stdout.flush().ok();
    }
}

impl Drop for ProgressBars {
    fn drop(&mut self) {
        self.finish();
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix.
///
/// Single-line messages are truncated to the terminal width.
#[inline]
#[allow(clippy::cast_possible_truncation)]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);
    let width = get_terminal_width() as usize;

    let mut stdout = stdout().lock();

    let bar_count = BAR_COUNT.load(Ordering::SeqCst);
    if bar_count > 0 {
        execute!(stdout, cursor::MoveUp(bar_count as u16)).ok();
        execute!(stdout, Clear(ClearType::FromCursorDown)).ok();
    } else {
        execute!(stdout, Clear(ClearType::UntilNewLine)).ok();
    }

    if message.contains('\n') {
        writeln!(stdout, "{prefix} {message}").ok();
    } else {
        let max_msg_len = width.saturating_sub(calc_prefix_len(module.len()));
        writeln!(stdout, "{prefix} {}", truncate_str(message, max_msg_len)).ok();
    }

    for _ in 0..bar_count {
        writeln!(stdout).ok();
    }

    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type.
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> ColoredString {
    let prefix = format!("[{module}]");
    match module_lower {
        "serve" => prefix.bright_blue().bold(),
        "analytics" => prefix.bright_magenta().bold(),
        "theme" => prefix.bright_cyan().bold(),
        "error" => prefix.bright_red().bold(),
        "warn" => prefix.yellow().bold(),
        _ => prefix.bright_yellow().bold(),
    }
}

/// Truncate a string to at most `max_len` bytes on a char boundary.
#[inline]
fn truncate_str(s: &str, max_len: usize) -> &str {
    if s.len() <= max_len {
        return s;
    }
    let mut end = max_len;
    while end > 0 && !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}
