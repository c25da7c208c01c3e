pub mod config;
pub mod errors;
pub mod reporter;
pub mod run;

pub use config::SolveCfg;
pub use errors::SolveError;
pub use reporter::{RecordingReporter, ReportEvent, Reporter, TracingReporter};
pub use run::{build_interpolant, evaluate, sample_curve, solve, MethodOutcome, SolveSummary};
