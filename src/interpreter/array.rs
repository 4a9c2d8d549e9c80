/// The array value type and its constructors.
///
/// Defines the `Array` struct used for every runtime noun: a shape vector
/// plus a flat, row-major data buffer of one of three element types.
/// Provides the factory operations, accessors and conversion helpers that
/// the primitive kernels are built on.
pub mod core;
/// Canonical rendering of array values.
///
/// Implements J's display form: bare atoms for scalars, space-separated
/// atoms for vectors, newline-separated rows for tables, and the leading
/// `_` convention for negative numbers.
pub mod format;
