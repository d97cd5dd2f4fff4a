// src/progress.rs
/// Lightweight progress reporting for a scrape run.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of pending symbols.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called once a symbol's record has been appended; `fields` is how many
    /// values it carried (0 when the symbol had no page).
    fn item_done(&mut self, _symbol: &str, _fields: usize) {}

    /// Called at the end of a run that didn't abort.
    fn finish(&mut self) {}
}
