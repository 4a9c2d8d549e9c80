use crate::{
    error::EvalError,
    interpreter::{array::core::Array, evaluator::core::EvalResult, lexer::Location},
};

/// The result of checking two operands against the agreement rule.
///
/// Carries the common result shape and enough information to pair up
/// elements: a scalar operand contributes its single element to every
/// position of the other operand.
pub struct Agreement {
    shape:    Vec<usize>,
    x_scalar: bool,
    y_scalar: bool,
}

impl Agreement {
    /// Checks two operands against the agreement rule.
    ///
    /// # Errors
    /// `ShapeMismatch` when the shapes differ and neither operand is a
    /// scalar.
    ///
    /// # Example
    /// ```
    /// use jot::interpreter::{
    ///     array::core::Array,
    ///     evaluator::dyadic::agreement::Agreement,
    ///     lexer::Location,
    /// };
    ///
    /// let vector = Array::iota(3);
    /// let scalar = Array::scalar_int(10);
    ///
    /// let agreed = Agreement::of(&scalar, &vector, Location::default()).unwrap();
    /// assert_eq!(agreed.shape(), &[3]);
    /// assert_eq!(agreed.pair(2), (0, 2));
    /// ```
    pub fn of(x: &Array, y: &Array, location: Location) -> EvalResult<Self> {
        if !x.is_scalar() && !y.is_scalar() && x.shape() != y.shape() {
            return Err(EvalError::ShapeMismatch { left: x.shape().to_vec(),
                                                  right: y.shape().to_vec(),
                                                  location });
        }

        let shape = if x.is_scalar() { y.shape().to_vec() } else { x.shape().to_vec() };
        Ok(Self { shape,
                  x_scalar: x.is_scalar(),
                  y_scalar: y.is_scalar(), })
    }

    /// The common result shape.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The number of result elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.shape.iter().product()
    }

    /// The buffer indices of the operand elements for result position
    /// `index`; a scalar operand always contributes index 0.
    #[must_use]
    pub const fn pair(&self, index: usize) -> (usize, usize) {
        (if self.x_scalar { 0 } else { index }, if self.y_scalar { 0 } else { index })
    }
}
