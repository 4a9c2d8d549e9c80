use crate::interpreter::array::core::{Array, ArrayData};

/// Renders one numeric atom in J notation: negative values carry a
/// leading `_` instead of a minus sign.
fn fmt_int(value: i64) -> String {
    if value < 0 { format!("_{}", value.unsigned_abs()) } else { value.to_string() }
}

fn fmt_float(value: f64) -> String {
    if value < 0.0 { format!("_{}", -value) } else { value.to_string() }
}

impl Array {
    fn atom(&self, index: usize) -> String {
        match &self.data() {
            ArrayData::Int64(data) => fmt_int(data[index]),
            ArrayData::Float64(data) => fmt_float(data[index]),
            ArrayData::Chars(data) => data[index].to_string(),
        }
    }

    /// Joins the atoms of the slice `[start, start + len)` with the
    /// separator for the given nesting depth: none for characters, one
    /// space otherwise.
    fn fmt_row(&self, start: usize, len: usize) -> String {
        let atoms: Vec<String> = (start..start + len).map(|i| self.atom(i)).collect();
        let separator = if matches!(self.data(), ArrayData::Chars(_)) { "" } else { " " };
        atoms.join(separator)
    }

    /// Renders the cells of axis `axis` starting at flat offset `start`.
    ///
    /// Rows are separated by one newline, planes of higher-rank arrays by
    /// progressively more blank lines, which is J's canonical layout.
    fn fmt_axis(&self, axis: usize, start: usize) -> String {
        let shape = self.shape();
        if axis + 1 == shape.len() {
            return self.fmt_row(start, shape[axis]);
        }

        let stride: usize = shape[axis + 1..].iter().product();
        let separator = "\n".repeat(shape.len() - axis - 1);
        let cells: Vec<String> =
            (0..shape[axis]).map(|i| self.fmt_axis(axis + 1, start + i * stride)).collect();
        cells.join(&separator)
    }
}

/// The canonical display form.
///
/// Rank 0 renders as a bare atom, rank 1 as space-separated atoms, rank 2
/// as newline-separated rows. Character arrays render their text without
/// quotes.
///
/// # Example
/// ```
/// use jot::interpreter::array::core::{Array, ArrayData};
///
/// assert_eq!(Array::scalar_int(-3).to_string(), "_3");
/// assert_eq!(Array::iota(3).to_string(), "0 1 2");
///
/// let table = Array::from_flat(ArrayData::Int64(vec![0, 1, 2, 3]), vec![2, 2]);
/// assert_eq!(table.to_string(), "0 1\n2 3");
/// ```
impl std::fmt::Display for Array {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_scalar() {
            return write!(f, "{}", self.atom(0));
        }
        if self.size() == 0 {
            return Ok(());
        }
        write!(f, "{}", self.fmt_axis(0, 0))
    }
}
