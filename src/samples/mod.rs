//! Sample routines
//!
//! Each routine builds one request, invokes one operation and writes the result
//! to `out`. Progress is logged through `tracing`, so `out` only receives
//! results, and only once the remote call has resolved. Errors are returned to
//! the caller; [`runner::report_outcome`] turns them into the printed message.

/// Accounts samples
pub mod accounts;
/// Developer registration samples
pub mod developer_registration;
/// Output helpers and the error boundary
pub mod runner;
/// Users samples
pub mod users;
