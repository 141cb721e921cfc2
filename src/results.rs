// Result shapes handed back to callers: ordered row mappings for reader
// statements, a mutation summary for writer statements.

mod result_set;
mod row;

pub use result_set::{ExecutionResult, MutationSummary, RowSet};
pub use row::Row;
