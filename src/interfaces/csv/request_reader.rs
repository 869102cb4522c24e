use crate::error::{ChronifyError, Result};
use serde::Deserialize;
use std::io::Read;

/// One line of a registration batch, exactly as entered.
///
/// Nothing is validated here: empty or unknown roles are left for the
/// registration flow to turn away.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegistrationRow {
    pub name: String,
    #[serde(default)]
    pub role: String,
}

/// Reads registration rows from a CSV source with a `name, role` header.
pub struct RequestReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> RequestReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Lazily deserializes rows, one `Result` per record.
    pub fn rows(self) -> impl Iterator<Item = Result<RegistrationRow>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(ChronifyError::from))
    }
}
