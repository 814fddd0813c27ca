//! Input-shape adapters converging on the canonical check record.
//!
//! The two ingestion paths name the same concepts differently (`check_id`
//! vs `id`, flat vs nested analysis detail). Each shape gets its own
//! explicit adapter rather than field-presence probing in the reducer.

pub mod checks;
pub mod rpc;

pub use checks::{violations_from_checks, CheckWithAnalysis, LatestAnalysisRun};
pub use rpc::{violations_from_rpc_rows, RpcViolationRow};
