pub mod aggregate;
pub mod report;

pub use aggregate::{Aggregator, AuditReport, audit};
pub use report::{OutputFormat, ReportError, render};
