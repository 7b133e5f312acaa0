//! Scan Debounce
//!
//! Camera scanners report the same code on every decoded frame. A code
//! repeated within the window counts as one scan.

pub const DEFAULT_WINDOW_MS: f64 = 1_500.0;

#[derive(Debug, Clone)]
pub struct ScanDebouncer {
    window_ms: f64,
    last: Option<(String, f64)>,
}

impl Default for ScanDebouncer {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_MS)
    }
}

impl ScanDebouncer {
    pub fn new(window_ms: f64) -> Self {
        Self { window_ms, last: None }
    }

    /// Whether a decode of `code` at `now_ms` is a new scan
    pub fn accept(&mut self, code: &str, now_ms: f64) -> bool {
        let repeat = matches!(&self.last, Some((last, at)) if last == code && now_ms - at < self.window_ms);
        if !repeat {
            self.last = Some((code.to_string(), now_ms));
        }
        !repeat
    }
}
