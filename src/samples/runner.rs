use crate::error::AppError;
use futures::TryStreamExt;
use futures::stream::BoxStream;
use std::fmt::Debug;
use std::io::Write;
use tracing::error;

/// Writes every record of `records` to `out`, in arrival order
///
/// # Returns
/// * `Ok(count)` - Number of records visited, equal to the number written
/// * `Err(AppError)` - The first error of the stream, or a write failure
pub async fn print_all<T, W>(
    mut records: BoxStream<'_, Result<T, AppError>>,
    out: &mut W,
) -> Result<usize, AppError>
where
    T: Debug,
    W: Write,
{
    let mut count = 0;
    while let Some(record) = records.try_next().await? {
        writeln!(out, "{record:?}")?;
        count += 1;
    }
    Ok(count)
}

/// Reports a failed sample on `out` and in the log
///
/// This is the only place where sample errors are caught. Every error kind is
/// reported the same way, as `Failed to {action}: {message}`.
pub fn report_outcome<T, W: Write>(
    out: &mut W,
    action: &str,
    result: Result<T, AppError>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to {}: {}", action, e);
            if let Err(write_error) = writeln!(out, "Failed to {action}: {e}") {
                error!("Could not write error message: {}", write_error);
            }
            None
        }
    }
}
