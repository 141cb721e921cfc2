use crate::driver::{DriverCapabilities, DriverStatement, WideIntegerStyle};

/// Dispatches the integer-width toggle to whichever of the two recognized
/// operation names the driver publishes.
///
/// Selected once at connection acquisition from the driver's capability
/// report; `apply` never probes again. A driver with no toggle at all gets
/// `Unsupported`, and requested mode changes are skipped silently since the
/// feature is a no-op on such driver versions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WideIntegerBridge {
    SafeIntegers,
    ReadBigInts,
    Unsupported,
}

impl WideIntegerBridge {
    pub(crate) fn probe(capabilities: &DriverCapabilities) -> Self {
        match capabilities.wide_integer_style {
            Some(WideIntegerStyle::SafeIntegers) => Self::SafeIntegers,
            Some(WideIntegerStyle::ReadBigInts) => Self::ReadBigInts,
            None => Self::Unsupported,
        }
    }

    pub(crate) fn apply(self, statement: &mut dyn DriverStatement, wide: bool) {
        match self {
            Self::SafeIntegers => statement.safe_integers(wide),
            Self::ReadBigInts => statement.set_read_big_ints(wide),
            Self::Unsupported => {
                tracing::debug!(
                    wide_integers = wide,
                    "driver exposes no integer-width toggle; keeping its default mode"
                );
            }
        }
    }
}
