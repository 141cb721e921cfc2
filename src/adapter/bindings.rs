use crate::driver::{BindingArgs, BindingConvention};
use crate::types::Value;

/// Convert an ordered binding collection into positional `(ordinal, value)`
/// pairs, 1-based, for drivers that bind each parameter separately.
///
/// A pure representational change: order and count are preserved exactly,
/// nothing is reordered or filtered.
#[must_use]
pub fn spread_bindings(bindings: &[Value]) -> Vec<(usize, Value)> {
    bindings
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, value)| (idx + 1, value))
        .collect()
}

/// Package canonical bindings in the convention the driver's execution
/// operations expect.
pub(crate) fn for_convention(convention: BindingConvention, bindings: &[Value]) -> BindingArgs {
    match convention {
        BindingConvention::Collection => BindingArgs::Collection(bindings.to_vec()),
        BindingConvention::Positional => BindingArgs::Spread(spread_bindings(bindings)),
    }
}
