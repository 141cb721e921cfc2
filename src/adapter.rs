// Adapter module - bridges the generic execution contract onto a concrete
// driver's native surface
//
// Split into focused sub-modules:
// - acquire: connection acquisition and the enhanced connection handle
// - statement: prepared-statement wrapper carrying the is-reader attribute
// - bindings: canonical-to-native binding format conversion
// - wide_int: integer-width toggle bridge across driver naming conventions
// - execute: the execution entry point

mod acquire;
mod bindings;
mod execute;
mod statement;
mod wide_int;

pub use acquire::{ConnectionHandle, acquire_connection};
pub use bindings::spread_bindings;
pub use execute::execute;
pub use statement::PreparedStatement;
pub use wide_int::WideIntegerBridge;
