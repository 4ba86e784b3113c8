//! Byte grid over the rows of an input.

use bstr::ByteSlice;

/// Grid backed by the lines of the input.
///
/// Rows keep whatever length they have in the input; the grid makes no
/// attempt to pad ragged rows, and cell lookups are bounded by each row's
/// own length.
///
/// # Examples
///
/// ```
/// use lib::grid::Grid;
///
/// let grid = Grid::new(b"abc\nde\nfgh\n");
///
/// assert_eq!(grid.rows_len(), 3);
/// assert_eq!(grid.row(1), Some(&b"de"[..]));
/// assert_eq!(grid.get(2, 2), Some(b'h'));
/// assert_eq!(grid.get(1, 2), None);
/// assert_eq!(grid.get(3, 0), None);
/// ```
pub struct Grid<'a> {
    rows: Vec<&'a [u8]>,
}

impl<'a> Grid<'a> {
    /// Construct a grid over the lines of `data`.
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            rows: data.lines().collect(),
        }
    }

    /// Number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows.len()
    }

    /// Access the given row.
    #[inline]
    pub fn row(&self, y: usize) -> Option<&'a [u8]> {
        self.rows.get(y).copied()
    }

    /// The cell at row `y`, column `x`, if that row is long enough.
    #[inline]
    pub fn get(&self, y: usize, x: usize) -> Option<u8> {
        self.rows.get(y)?.get(x).copied()
    }

    /// Iterate over rows together with their row number.
    ///
    /// # Examples
    ///
    /// ```
    /// use lib::grid::Grid;
    ///
    /// let grid = Grid::new(b"ab\ncd\n");
    /// assert!(grid.rows().eq([(0, &b"ab"[..]), (1, &b"cd"[..])]));
    /// ```
    #[inline]
    pub fn rows(&self) -> impl Iterator<Item = (usize, &'a [u8])> + '_ {
        self.rows.iter().copied().enumerate()
    }
}
