use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Location},
};

/// The element type of an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dtype {
    /// 64-bit signed integers.
    Int64,
    /// 64-bit floating-point numbers.
    Float64,
    /// Characters. Character arrays are only ever rank 0 or rank 1.
    Str,
}

/// The flat, row-major storage of an array.
///
/// The last axis varies fastest, so a 2x3 table stores its first row's
/// three elements before the second row's.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayData {
    /// Integer elements.
    Int64(Vec<i64>),
    /// Floating-point elements.
    Float64(Vec<f64>),
    /// Character elements.
    Chars(Vec<char>),
}

impl ArrayData {
    /// The number of stored elements.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Int64(data) => data.len(),
            Self::Float64(data) => data.len(),
            Self::Chars(data) => data.len(),
        }
    }

    /// Whether the buffer holds no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A multidimensional array value, the sole runtime noun of the language.
///
/// The shape lists the size of each axis; its length is the array's rank,
/// so a scalar has the empty shape. The invariant
/// `data.len() == shape.iter().product()` holds for every constructed
/// array (the empty product is 1, giving scalars exactly one element).
///
/// Arrays are value-typed: every operation returns a fresh array and no
/// kernel ever mutates its inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    shape: Vec<usize>,
    data:  ArrayData,
}

impl Array {
    /// Creates an array from a flat buffer and an explicit shape.
    ///
    /// This is the fundamental constructor every other factory goes
    /// through. The buffer length must equal the product of the shape;
    /// a mismatch is a programming error in the caller, not a user
    /// error, and fails loudly.
    ///
    /// # Panics
    /// If `data.len()` differs from the product of `shape`.
    ///
    /// # Example
    /// ```
    /// use jot::interpreter::array::core::{Array, ArrayData};
    ///
    /// let table = Array::from_flat(ArrayData::Int64(vec![1, 2, 3, 4, 5, 6]), vec![2, 3]);
    ///
    /// assert_eq!(table.rank(), 2);
    /// assert_eq!(table.size(), 6);
    /// ```
    #[must_use]
    pub fn from_flat(data: ArrayData, shape: Vec<usize>) -> Self {
        assert_eq!(data.len(),
                   shape.iter().product::<usize>(),
                   "array data length must match the product of its shape");
        Self { shape, data }
    }

    /// Creates a rank-0 integer array.
    #[must_use]
    pub fn scalar_int(value: i64) -> Self {
        Self::from_flat(ArrayData::Int64(vec![value]), Vec::new())
    }

    /// Creates a rank-0 floating-point array.
    #[must_use]
    pub fn scalar_float(value: f64) -> Self {
        Self::from_flat(ArrayData::Float64(vec![value]), Vec::new())
    }

    /// Creates a character array from a string.
    ///
    /// A single character becomes a scalar; anything else (including the
    /// empty string) becomes a rank-1 character list.
    #[must_use]
    pub fn from_string(text: &str) -> Self {
        let chars: Vec<char> = text.chars().collect();
        let shape = if chars.len() == 1 { Vec::new() } else { vec![chars.len()] };
        Self::from_flat(ArrayData::Chars(chars), shape)
    }

    /// Creates an array of the given shape filled with zeros.
    #[must_use]
    pub fn zeros(shape: Vec<usize>, dtype: Dtype) -> Self {
        let size = shape.iter().product();
        let data = match dtype {
            Dtype::Int64 => ArrayData::Int64(vec![0; size]),
            Dtype::Float64 => ArrayData::Float64(vec![0.0; size]),
            Dtype::Str => ArrayData::Chars(vec![' '; size]),
        };
        Self::from_flat(data, shape)
    }

    /// Creates the rank-1 integer array `0 1 ... n-1`.
    ///
    /// ## Example
    /// ```
    /// use jot::interpreter::array::core::Array;
    ///
    /// assert_eq!(Array::iota(4).to_string(), "0 1 2 3");
    /// assert_eq!(Array::iota(0).size(), 0);
    /// ```
    #[must_use]
    pub fn iota(n: usize) -> Self {
        #[allow(clippy::cast_possible_wrap)]
        let data: Vec<i64> = (0..n).map(|i| i as i64).collect();
        Self::from_flat(ArrayData::Int64(data), vec![n])
    }

    /// The dimension sizes, outermost axis first.
    #[must_use]
    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    /// The number of axes. Scalars have rank 0.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.shape.len()
    }

    /// The total number of elements.
    #[must_use]
    pub fn size(&self) -> usize {
        self.data.len()
    }

    /// The size of the leading axis; 1 for scalars.
    #[must_use]
    pub fn tally(&self) -> usize {
        self.shape.first().copied().unwrap_or(1)
    }

    /// Whether this array has rank 0.
    #[must_use]
    pub fn is_scalar(&self) -> bool {
        self.shape.is_empty()
    }

    /// The element type.
    #[must_use]
    pub const fn dtype(&self) -> Dtype {
        match self.data {
            ArrayData::Int64(_) => Dtype::Int64,
            ArrayData::Float64(_) => Dtype::Float64,
            ArrayData::Chars(_) => Dtype::Str,
        }
    }

    /// Whether the element type is numeric.
    #[must_use]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self.data, ArrayData::Chars(_))
    }

    /// The raw storage buffer.
    #[must_use]
    pub const fn data(&self) -> &ArrayData {
        &self.data
    }

    /// The integer buffer, if this is an integer array.
    #[must_use]
    pub fn ints(&self) -> Option<&[i64]> {
        match &self.data {
            ArrayData::Int64(data) => Some(data),
            _ => None,
        }
    }

    /// The floating-point buffer, if this is a floating-point array.
    #[must_use]
    pub fn floats(&self) -> Option<&[f64]> {
        match &self.data {
            ArrayData::Float64(data) => Some(data),
            _ => None,
        }
    }

    /// The character buffer, if this is a character array.
    #[must_use]
    pub fn chars(&self) -> Option<&[char]> {
        match &self.data {
            ArrayData::Chars(data) => Some(data),
            _ => None,
        }
    }

    /// All elements converted to `f64`, regardless of numeric dtype.
    ///
    /// # Errors
    /// `TypeError` if the array holds characters.
    #[allow(clippy::cast_precision_loss)]
    pub fn float_values(&self, location: Location) -> EvalResult<Vec<f64>> {
        match &self.data {
            ArrayData::Int64(data) => Ok(data.iter().map(|&v| v as f64).collect()),
            ArrayData::Float64(data) => Ok(data.clone()),
            ArrayData::Chars(_) => Err(EvalError::TypeError { details: "expected a numeric array, found characters".to_string(),
                                                              location }),
        }
    }

    /// The value of a rank-0 integer array.
    ///
    /// # Errors
    /// `RankError` for non-scalars, `TypeError` for non-integers.
    pub fn scalar_int_value(&self, location: Location) -> EvalResult<i64> {
        if !self.is_scalar() {
            return Err(EvalError::RankError { details: format!("expected a scalar, found an array of rank {}",
                                                               self.rank()),
                                              location });
        }
        match &self.data {
            ArrayData::Int64(data) => Ok(data[0]),
            _ => Err(EvalError::TypeError { details: "expected an integer scalar".to_string(),
                                            location }),
        }
    }

    /// The `index`-th cell along the leading axis, as a fresh array of
    /// rank one less.
    ///
    /// The caller guarantees `index < tally()` and rank >= 1.
    ///
    /// ## Example
    /// ```
    /// use jot::interpreter::array::core::{Array, ArrayData};
    ///
    /// let table = Array::from_flat(ArrayData::Int64(vec![1, 2, 3, 4, 5, 6]), vec![2, 3]);
    ///
    /// assert_eq!(table.item(1).to_string(), "4 5 6");
    /// ```
    #[must_use]
    pub fn item(&self, index: usize) -> Self {
        let item_shape: Vec<usize> = self.shape[1..].to_vec();
        let item_size: usize = item_shape.iter().product();
        let start = index * item_size;
        let end = start + item_size;

        let data = match &self.data {
            ArrayData::Int64(data) => ArrayData::Int64(data[start..end].to_vec()),
            ArrayData::Float64(data) => ArrayData::Float64(data[start..end].to_vec()),
            ArrayData::Chars(data) => ArrayData::Chars(data[start..end].to_vec()),
        };
        Self::from_flat(data, item_shape)
    }

    /// Stacks equally shaped cells along a new leading axis.
    ///
    /// The inverse of repeated [`Array::item`] calls: `n` cells of shape
    /// `s` become one array of shape `[n] ++ s`. Integer cells are
    /// promoted to floating point when any cell is floating point. The
    /// caller supplies at least one cell.
    ///
    /// # Errors
    /// `ShapeMismatch` if the cells disagree in shape, `TypeError` when
    /// mixing characters with numbers.
    pub fn from_items(items: &[Self], location: Location) -> EvalResult<Self> {
        let cell_shape = items[0].shape.clone();
        for item in items {
            if item.shape != cell_shape {
                return Err(EvalError::ShapeMismatch { left: cell_shape,
                                                      right: item.shape.clone(),
                                                      location });
            }
        }

        let mut shape = vec![items.len()];
        shape.extend_from_slice(&cell_shape);

        if items.iter().all(|item| item.dtype() == Dtype::Int64) {
            let mut data = Vec::new();
            for item in items {
                data.extend_from_slice(item.ints().unwrap_or_default());
            }
            return Ok(Self::from_flat(ArrayData::Int64(data), shape));
        }

        let mut data = Vec::new();
        for item in items {
            data.extend(item.float_values(location)?);
        }
        Ok(Self::from_flat(ArrayData::Float64(data), shape))
    }
}
