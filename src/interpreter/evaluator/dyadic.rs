/// The shape-agreement helper every dyadic kernel routes through.
///
/// Implements the simplified J agreement rule of this subset: operands
/// must have identical shapes, or one of them must be a scalar, which is
/// then replicated across the other's shape.
pub mod agreement;
/// Element-wise scalar kernels: arithmetic, comparisons, minimum and
/// maximum, residue, and the gcd/lcm pair.
pub mod scalar;
/// Structural kernels: append (`,`) and reshape (dyadic `$`).
pub mod structural;
/// The matrix product behind the fused `+.*` glyph and the `+ . *`
/// conjunction form.
pub mod matmul;
