// Error types for the inventory store. The UI layer wraps these in
// `anyhow` where needed, but every store failure is reported at the menu
// action that caused it.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by `InventoryStore` operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file does not exist yet. Not fatal: the store stays empty.
    #[error("The file '{}' was not found.", .0.display())]
    Missing(PathBuf),

    #[error("Failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No shoes available in inventory.")]
    Empty,

    #[error("Adding {added} to quantity {current} would overflow.")]
    QuantityOverflow { current: u32, added: u32 },
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// A single line of the backing file that could not be turned into a record.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RecordParseError {
    #[error("expected 5 fields, found {0}")]
    FieldCount(usize),

    #[error("invalid cost '{0}'")]
    Cost(String),

    #[error("invalid quantity '{0}'")]
    Quantity(String),
}

/// Rejected interactive input. `Display` is the message shown to the user
/// before re-prompting.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid input. Please enter alphabetic characters only.")]
    NotAlphabetic,

    #[error("Invalid format. Code must be 'SKU' followed by five digits (e.g. SKU12345).")]
    CodeFormat,

    #[error("Invalid cost. Please enter a valid number.")]
    CostFormat,

    #[error("Cost cannot be negative. Please try again.")]
    NegativeCost,

    #[error("Invalid quantity. Please enter an integer.")]
    QuantityFormat,

    #[error("Quantity cannot be negative. Please try again.")]
    NegativeQuantity,
}
