/// Port for the single surface reporting operation outcomes to the user.
///
/// Messages are whole status lines, overwritten wholesale per operation;
/// there are no partial updates.
pub trait StatusSink {
    /// Report a success status line.
    fn success(&mut self, message: &str);

    /// Report an error status line.
    fn error(&mut self, message: &str);
}
