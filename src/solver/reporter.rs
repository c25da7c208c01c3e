//! Result reporting interface.
//!
//! A solve request talks to its host only through [`Reporter`]. Two
//! implementations ship with the crate:
//! - [`RecordingReporter`] : keeps every call as a [`ReportEvent`]
//! - [`TracingReporter`]   : forwards every call to `tracing`

use tracing::{debug, info, warn};

use crate::interpolation::points::PointSeq;
use crate::interpolation::tables::ForwardTable;


pub trait Reporter {
    fn clear_difference_table(&mut self);
    fn clear_results(&mut self);

    /// Forward-difference table, row 0 holding the raw ordinates.
    fn report_difference_table(&mut self, table: &ForwardTable);

    /// One call per method that produced a value.
    fn report_result(&mut self, label: &str, value: &str);

    /// One call per failed method or failed ingestion.
    fn report_error(&mut self, message: &str);

    /// Sent once after every selected method has run.
    fn report_ok(&mut self, message: &str);

    /// Optional; hosts without plotting keep the no-op.
    fn render_plot(&mut self, _points: &PointSeq, _x_star: f64) {}
}


#[derive(Debug, Clone, PartialEq)]
pub enum ReportEvent {
    ClearDifferenceTable,
    ClearResults,
    DifferenceTable(Vec<Vec<f64>>),
    Result { label: String, value: String },
    Error(String),
    Ok(String),
}


/// Reporter that stores every call in order.
#[derive(Debug, Clone, Default)]
pub struct RecordingReporter {
    pub events: Vec<ReportEvent>,
}

impl RecordingReporter {
    pub fn new() -> Self { Self::default() }

    pub fn results(&self) -> Vec<(&str, &str)> {
        self.events.iter().filter_map(|e| match e {
            ReportEvent::Result { label, value } => Some((label.as_str(), value.as_str())),
            _ => None,
        }).collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.events.iter().filter_map(|e| match e {
            ReportEvent::Error(msg) => Some(msg.as_str()),
            _ => None,
        }).collect()
    }

    pub fn difference_table(&self) -> Option<&[Vec<f64>]> {
        self.events.iter().rev().find_map(|e| match e {
            ReportEvent::DifferenceTable(rows) => Some(rows.as_slice()),
            _ => None,
        })
    }

    pub fn ok_messages(&self) -> Vec<&str> {
        self.events.iter().filter_map(|e| match e {
            ReportEvent::Ok(msg) => Some(msg.as_str()),
            _ => None,
        }).collect()
    }
}

impl Reporter for RecordingReporter {
    fn clear_difference_table(&mut self) {
        self.events.push(ReportEvent::ClearDifferenceTable);
    }
    fn clear_results(&mut self) {
        self.events.push(ReportEvent::ClearResults);
    }
    fn report_difference_table(&mut self, table: &ForwardTable) {
        self.events.push(ReportEvent::DifferenceTable(table.rows().to_vec()));
    }
    fn report_result(&mut self, label: &str, value: &str) {
        self.events.push(ReportEvent::Result { label: label.to_string(), value: value.to_string() });
    }
    fn report_error(&mut self, message: &str) {
        self.events.push(ReportEvent::Error(message.to_string()));
    }
    fn report_ok(&mut self, message: &str) {
        self.events.push(ReportEvent::Ok(message.to_string()));
    }
}


/// Headless reporter writing to the `tracing` subscriber.
#[derive(Debug, Clone, Copy)]
pub struct TracingReporter {
    precision: usize,
}

impl Default for TracingReporter {
    fn default() -> Self { Self::new(crate::solver::config::DEFAULT_PRECISION) }
}

impl TracingReporter {
    pub fn new(precision: usize) -> Self { Self { precision } }
}

impl Reporter for TracingReporter {
    fn clear_difference_table(&mut self) {}
    fn clear_results(&mut self) {}

    fn report_difference_table(&mut self, table: &ForwardTable) {
        debug!(depth = table.depth(), "difference table\n{}", table.render(self.precision));
    }
    fn report_result(&mut self, label: &str, value: &str) {
        info!(method = label, value, "interpolated");
    }
    fn report_error(&mut self, message: &str) {
        warn!("{message}");
    }
    fn report_ok(&mut self, message: &str) {
        info!("{message}");
    }
}
