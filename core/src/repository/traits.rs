use crate::error::LoadError;

/// Somewhere a sales document can be read from.
pub trait SalesSource {
    /// Human readable location, used in logs.
    fn describe(&self) -> String;
    /// Reads the whole document as text.
    fn fetch(&self) -> Result<String, LoadError>;
}
