use super::request_reader::RegistrationRow;
use crate::application::flow::Outcome;
use crate::config::Routes;
use crate::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Confirmed,
    Rejected,
}

/// Result of one batch row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub role: String,
    pub status: ReportStatus,
    /// Route the user was sent to, empty when rejected.
    pub target: String,
    /// Message shown to the user on rejection.
    pub message: String,
}

impl ReportRow {
    pub fn new(row: RegistrationRow, outcome: &Outcome, routes: &Routes) -> Self {
        let (status, target, message) = match outcome {
            Outcome::Confirmed { target, .. } => (
                ReportStatus::Confirmed,
                target
                    .map(|t| routes.route_for(t).to_string())
                    .unwrap_or_default(),
                String::new(),
            ),
            Outcome::Rejected(e) => (ReportStatus::Rejected, String::new(), e.to_string()),
        };
        Self {
            name: row.name,
            role: row.role,
            status,
            target,
            message,
        }
    }
}

/// Writes batch results as CSV.
pub struct ReportWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> ReportWriter<W> {
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    pub fn write_row(&mut self, row: &ReportRow) -> Result<()> {
        self.writer.serialize(row)?;
        Ok(())
    }

    pub fn finish(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
