use crate::error::SqliteCompatError;
use crate::request::ExecutionRequest;
use crate::results::{ExecutionResult, MutationSummary};

use super::acquire::ConnectionHandle;
use super::bindings;

/// Execute one request against an acquired connection.
///
/// The statement is compiled through the wrapped preparation, the requested
/// integer-width mode (if any) is applied through the bridge probed at
/// acquisition, the bindings are converted to the driver's calling
/// convention, and the reader/writer branch is taken on the statement's
/// result-column count. Rows come back for readers, a mutation summary for
/// writers.
///
/// # Errors
/// `InvalidRequest` for an empty SQL text or a closed handle, raised before
/// any driver call. Every compilation or execution failure after that
/// propagates the driver's native error unchanged: no translation, no retry,
/// no suppression.
pub async fn execute(
    connection: &mut ConnectionHandle,
    request: &ExecutionRequest,
) -> Result<ExecutionResult, SqliteCompatError> {
    if request.sql.is_empty() {
        return Err(SqliteCompatError::InvalidRequest(
            "the request contains no SQL text".into(),
        ));
    }
    if !connection.is_open() {
        return Err(SqliteCompatError::InvalidRequest(
            "connection is closed".into(),
        ));
    }

    let mut statement = connection.prepare(&request.sql).await?;

    if let Some(wide) = request.options.wide_integers {
        connection
            .wide_bridge()
            .apply(statement.driver_mut(), wide);
    }

    let args = bindings::for_convention(connection.convention(), &request.bindings);

    if statement.is_reader() {
        let rows = statement.fetch_all(args).await?;
        Ok(ExecutionResult::Rows(rows))
    } else {
        let outcome = statement.run(args).await?;
        Ok(ExecutionResult::Mutation(MutationSummary {
            inserted_row_id: outcome.last_insert_rowid,
            changed_row_count: outcome.changes,
        }))
    }
}
