/// ProgressReporter port for user-facing status output
///
/// Everything the tool tells the user while it works goes through this port
/// (on the console adapter: stderr), keeping stdout free for the graph itself.
pub trait ProgressReporter {
    /// Reports a status message
    fn report(&self, message: &str);

    /// Reports progress of a multi-step operation
    ///
    /// # Arguments
    /// * `current` - Steps completed so far
    /// * `total` - Total number of steps
    /// * `message` - Optional label for the current step
    fn report_progress(&self, current: usize, total: usize, message: Option<&str>);

    /// Reports a warning or error message
    fn report_error(&self, message: &str);

    /// Reports completion of the whole operation
    fn report_completion(&self, message: &str);
}
