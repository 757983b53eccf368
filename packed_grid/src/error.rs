#[cfg(feature = "std")]
use thiserror::Error;

/// Errors reported by the checked constructors and accessors of
/// [`PackedGrid`](crate::PackedGrid).
///
/// The unchecked `get`/`set` path never produces these: an out-of-range
/// point there is a caller bug, and an oversized value is truncated.
#[cfg_attr(feature = "std", derive(Error))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[cfg_attr(feature = "std", error("bit width must be non-zero"))]
    ZeroBitWidth,

    #[cfg_attr(
        feature = "std",
        error("bit width {bits} exceeds the {max}-bit limit of one word minus a byte")
    )]
    BitWidthTooLarge { bits: usize, max: usize },

    #[cfg_attr(
        feature = "std",
        error("bit width {bits} is wider than the {object_bits}-bit stored type")
    )]
    ObjectTooNarrow { bits: usize, object_bits: usize },

    #[cfg_attr(
        feature = "std",
        error("stored type is {object_bytes} bytes, more than one word")
    )]
    ObjectTooWide { object_bytes: usize },

    #[cfg_attr(feature = "std", error("grid must have at least one row and one column"))]
    EmptyGrid,

    #[cfg_attr(
        feature = "std",
        error("point ({row}, {col}) is out of bounds for a {width}x{height} grid")
    )]
    PointOutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },

    #[cfg_attr(
        feature = "std",
        error("raw buffer length mismatch: expected {expected} bytes, found {found}")
    )]
    BufferLength { expected: usize, found: usize },

    #[cfg_attr(feature = "std", error("raw buffer has bits set past the packed region"))]
    DirtySlack,
}

impl GridError {
    /// Static summary of the error, usable in const contexts.
    pub const fn describe(&self) -> &'static str {
        match self {
            GridError::ZeroBitWidth => "bit width must be non-zero",
            GridError::BitWidthTooLarge { .. } => "bit width exceeds one word minus a byte",
            GridError::ObjectTooNarrow { .. } => "bit width is wider than the stored type",
            GridError::ObjectTooWide { .. } => "stored type is wider than one word",
            GridError::EmptyGrid => "grid must have at least one row and one column",
            GridError::PointOutOfBounds { .. } => "point is out of bounds",
            GridError::BufferLength { .. } => "raw buffer length mismatch",
            GridError::DirtySlack => "raw buffer has bits set past the packed region",
        }
    }
}

#[cfg(not(feature = "std"))]
impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::BitWidthTooLarge { bits, max } => write!(
                f,
                "bit width {} exceeds the {}-bit limit of one word minus a byte",
                bits, max
            ),
            GridError::ObjectTooNarrow { bits, object_bits } => write!(
                f,
                "bit width {} is wider than the {}-bit stored type",
                bits, object_bits
            ),
            GridError::ObjectTooWide { object_bytes } => {
                write!(f, "stored type is {} bytes, more than one word", object_bytes)
            }
            GridError::PointOutOfBounds {
                row,
                col,
                width,
                height,
            } => write!(
                f,
                "point ({}, {}) is out of bounds for a {}x{} grid",
                row, col, width, height
            ),
            GridError::BufferLength { expected, found } => write!(
                f,
                "raw buffer length mismatch: expected {} bytes, found {}",
                expected, found
            ),
            other => f.write_str(other.describe()),
        }
    }
}
