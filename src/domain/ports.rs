use crate::utils::error::Result;

/// Line-based console port. The menu loop talks only to this trait, so the
/// whole interactive flow can be driven from tests without a terminal.
pub trait Console {
    /// Reads one line, without the trailing newline. `Ok(None)` means the
    /// input is exhausted (EOF).
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Writes one line, terminating it with a newline.
    fn write_line(&mut self, line: &str) -> Result<()>;
}
