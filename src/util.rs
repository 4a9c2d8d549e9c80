/// Numeric conversion helpers.
///
/// Provides checked conversions between the interpreter's `i64` element
/// type and the `usize` values used for shapes and counts, so that
/// negative or oversized dimension arguments surface as evaluation errors
/// instead of silent wraparound.
pub mod num;
