// src/numerics/types/matrix.rs
// Row-major matrix sharing the kind-tagged storage of `Vector`.

use core::fmt;

use serde::{Deserialize, Serialize};

use super::cells::{dot_typed, typed_like, with_cells, Cells};
use super::kind::{Arithmetic, Element, ElementKind, Scalar};
use super::vector::Vector;
use crate::numerics::error::{NumericsError, Result};

/// A `rows x cols` numeric container tagged with one `ElementKind`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData", into = "MatrixData")]
pub struct Matrix {
    rows: usize,
    cols: usize,
    cells: Cells,
}

/// Serialized form; validated on the way back in.
#[derive(Clone, Serialize, Deserialize)]
struct MatrixData {
    rows: usize,
    cols: usize,
    cells: Cells,
}

impl Matrix {
    /// Zero-filled matrix. Both sides must be positive and `rows * cols` must
    /// fit in `usize`.
    pub fn zero(rows: usize, cols: usize, kind: ElementKind) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        tracing::trace!(rows, cols, %kind, "zero matrix");
        Ok(Self {
            rows,
            cols,
            cells: Cells::zeroed(len, kind),
        })
    }

    /// Ones on the leading `min(rows, cols)` diagonal, zero elsewhere.
    pub fn identity(rows: usize, cols: usize, kind: ElementKind) -> Result<Self> {
        let mut matrix = Self::zero(rows, cols, kind)?;
        let one = kind.one();
        for i in 0..rows.min(cols) {
            matrix.set(i, i, one)?;
        }
        Ok(matrix)
    }

    /// Random cells, for tests and benchmarks.
    pub fn random(rows: usize, cols: usize, kind: ElementKind) -> Result<Self> {
        let len = checked_len(rows, cols)?;
        let mut rng = rand::thread_rng();
        Ok(Self {
            rows,
            cols,
            cells: Cells::random(len, kind, &mut rng),
        })
    }

    /// Builds a matrix from literal rows. The first row fixes `cols`, the first
    /// value fixes the kind.
    ///
    /// A value of another kind is reported as `IrregularInput` whose
    /// `position` is the row-major index `row * cols + col`.
    ///
    /// ```
    /// use tabula::numerics::types::matrix::Matrix;
    ///
    /// let m = Matrix::filled([[1_isize, 0, 1], [0, 1, 1]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn filled<I, R, S>(rows: I) -> Result<Self>
    where
        I: IntoIterator<Item = R>,
        R: IntoIterator<Item = S>,
        S: Into<Scalar>,
    {
        let mut flat = Vec::new();
        let mut cols = None;
        let mut row_count = 0;
        for (row, values) in rows.into_iter().enumerate() {
            let before = flat.len();
            flat.extend(values.into_iter().map(Into::into));
            let width = flat.len() - before;
            match cols {
                None if width == 0 => return Err(NumericsError::EmptyInput),
                None => cols = Some(width),
                Some(expected) if expected != width => {
                    return Err(NumericsError::IrregularRow {
                        row,
                        expected,
                        found: width,
                    })
                }
                Some(_) => {}
            }
            row_count += 1;
        }
        let cols = cols.ok_or(NumericsError::EmptyInput)?;
        let cells = Cells::from_scalars(flat)?;
        tracing::trace!(rows = row_count, cols, kind = %cells.kind(), "filled matrix");
        Ok(Self {
            rows: row_count,
            cols,
            cells,
        })
    }

    /// Statically typed counterpart of `filled`.
    pub fn from_rows<T: Element>(rows: Vec<Vec<T>>) -> Result<Self> {
        let cols = rows
            .first()
            .map(Vec::len)
            .filter(|&cols| cols > 0)
            .ok_or(NumericsError::EmptyInput)?;
        let row_count = rows.len();
        let mut flat = Vec::with_capacity(row_count * cols);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != cols {
                return Err(NumericsError::IrregularRow {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            flat.extend(values);
        }
        Ok(Self {
            rows: row_count,
            cols,
            cells: T::wrap(flat),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn kind(&self) -> ElementKind {
        self.cells.kind()
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Scalar> {
        let index = self.index_of(row, col)?;
        self.cells.get(index).ok_or(self.out_of_range(row, col))
    }

    pub fn get_as<T: Element>(&self, row: usize, col: usize) -> Result<T> {
        let values = self.cells.as_slice::<T>()?;
        let index = self.index_of(row, col)?;
        Ok(values[index])
    }

    /// Overwrites one cell in place and hands the matrix back for chaining.
    pub fn set<S: Into<Scalar>>(&mut self, row: usize, col: usize, value: S) -> Result<&mut Self> {
        let value = value.into();
        if value.kind() != self.kind() {
            return Err(NumericsError::KindMismatch {
                expected: self.kind(),
                found: value.kind(),
            });
        }
        let index = self.index_of(row, col)?;
        self.cells.store(index, value)?;
        Ok(self)
    }

    /// Row `row` as a vector of length `cols`.
    pub fn row(&self, row: usize) -> Result<Vector> {
        self.index_of(row, 0)?;
        let start = row * self.cols;
        with_cells!(&self.cells, v => Vector::from_cells(v[start..start + self.cols].to_vec()))
    }

    /// Column `col` as a vector of length `rows`.
    pub fn column(&self, col: usize) -> Result<Vector> {
        self.index_of(0, col)?;
        let cols = self.cols;
        with_cells!(&self.cells, v => Vector::from_cells(strided(v, col, cols)))
    }

    pub fn transpose(&self) -> Matrix {
        let (rows, cols) = self.shape();
        let cells = with_cells!(&self.cells, v => {
            Element::wrap((0..cols).flat_map(|c| strided(v, c, cols)).collect::<Vec<_>>())
        });
        debug_assert_eq!(cells.len(), rows * cols);
        Self {
            rows: cols,
            cols: rows,
            cells,
        }
    }

    pub fn add(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.zip_with(&other.cells, Arithmetic::Add)?,
        })
    }

    pub fn sub(&self, other: &Matrix) -> Result<Matrix> {
        self.check_same_shape(other)?;
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.zip_with(&other.cells, Arithmetic::Sub)?,
        })
    }

    pub fn multiply_by_scalar<S: Into<Scalar>>(&self, scalar: S) -> Result<Matrix> {
        Ok(Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.map_scalar(Arithmetic::Mul, scalar.into())?,
        })
    }

    /// `self · v`, a vector of length `rows`.
    ///
    /// Each output cell is Σ_c M[r][c]·v[c], accumulated in ascending `c` in the
    /// kind's own (wrapping for integers) arithmetic.
    pub fn multiply_vector(&self, v: &Vector) -> Result<Vector> {
        if self.kind() != v.kind() {
            return Err(NumericsError::KindMismatch {
                expected: self.kind(),
                found: v.kind(),
            });
        }
        if self.cols != v.dimension() {
            return Err(NumericsError::DimensionMismatch {
                expected: self.cols,
                found: v.dimension(),
            });
        }
        let cols = self.cols;
        with_cells!(&self.cells, m => {
            let x = typed_like(m, v.cells())?;
            Vector::from_cells(apply_rows(m, cols, x))
        })
    }

    /// `self · other`, a `rows x other.cols` matrix.
    ///
    /// Cells are produced row-major; each is the dot product of a row of `self`
    /// with a column of `other`, summed in ascending inner index. Float results
    /// depend on that order.
    pub fn multiply_matrix(&self, other: &Matrix) -> Result<Matrix> {
        if self.kind() != other.kind() {
            return Err(NumericsError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            });
        }
        if self.cols != other.rows {
            return Err(NumericsError::DimensionMismatch {
                expected: self.cols,
                found: other.rows,
            });
        }
        tracing::debug!(
            lhs = ?self.shape(),
            rhs = ?other.shape(),
            kind = %self.kind(),
            "matrix product"
        );
        let cells = with_cells!(&self.cells, a => {
            let b = typed_like(a, &other.cells)?;
            Element::wrap(product(a, self.shape(), b, other.cols))
        });
        Ok(Self {
            rows: self.rows,
            cols: other.cols,
            cells,
        })
    }

    /// Exact cell-by-cell comparison; see `Vector::equal`.
    pub fn equal(&self, other: &Matrix) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(self.cells == other.cells)
    }

    pub fn approx_eq(&self, other: &Matrix, tolerance: f64) -> Result<bool> {
        self.check_same_shape(other)?;
        Ok(self.cells.max_abs_diff(&other.cells)? <= tolerance)
    }

    fn index_of(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.rows || col >= self.cols {
            return Err(self.out_of_range(row, col));
        }
        Ok(row * self.cols + col)
    }

    fn out_of_range(&self, row: usize, col: usize) -> NumericsError {
        NumericsError::CellOutOfRange {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Kind first, then shape.
    fn check_same_shape(&self, other: &Matrix) -> Result<()> {
        if self.kind() != other.kind() {
            return Err(NumericsError::KindMismatch {
                expected: self.kind(),
                found: other.kind(),
            });
        }
        if self.shape() != other.shape() {
            return Err(NumericsError::ShapeMismatch {
                expected: self.shape(),
                found: other.shape(),
            });
        }
        Ok(())
    }
}

fn checked_len(rows: usize, cols: usize) -> Result<usize> {
    match rows.checked_mul(cols) {
        Some(len) if len > 0 && len <= isize::MAX as usize => Ok(len),
        _ => Err(NumericsError::InvalidShape { rows, cols }),
    }
}

/// Every `stride`-th value starting at `offset`: one column of a row-major block.
fn strided<T: Element>(values: &[T], offset: usize, stride: usize) -> Vec<T> {
    values.iter().skip(offset).step_by(stride).copied().collect()
}

fn apply_rows<T: Element>(m: &[T], cols: usize, x: &[T]) -> Vec<T> {
    m.chunks(cols).map(|row| dot_typed(row, x.iter().copied())).collect()
}

fn product<T: Element>(a: &[T], (rows, inner): (usize, usize), b: &[T], cols: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(rows * cols);
    for r in 0..rows {
        let row = &a[r * inner..(r + 1) * inner];
        for c in 0..cols {
            out.push(dot_typed(row, (0..inner).map(|k| b[k * cols + c])));
        }
    }
    out
}

impl TryFrom<MatrixData> for Matrix {
    type Error = NumericsError;

    fn try_from(data: MatrixData) -> Result<Self> {
        let len = checked_len(data.rows, data.cols)?;
        if data.cells.len() != len {
            return Err(NumericsError::DimensionMismatch {
                expected: len,
                found: data.cells.len(),
            });
        }
        Ok(Self {
            rows: data.rows,
            cols: data.cols,
            cells: data.cells,
        })
    }
}

impl From<Matrix> for MatrixData {
    fn from(matrix: Matrix) -> Self {
        Self {
            rows: matrix.rows,
            cols: matrix.cols,
            cells: matrix.cells,
        }
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.cols {
                if c > 0 {
                    f.write_str(" ")?;
                }
                if let Some(value) = self.cells.get(r * self.cols + c) {
                    write!(f, "{}", value)?;
                }
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_matrix_for_every_kind() {
        for kind in ElementKind::ALL {
            let m = Matrix::zero(2, 3, kind).unwrap();
            assert_eq!(m.shape(), (2, 3));
            assert_eq!(m.kind(), kind);
            for r in 0..2 {
                for c in 0..3 {
                    assert_eq!(m.get(r, c).unwrap(), kind.zero());
                }
            }
        }
    }

    #[test]
    fn test_invalid_shapes() {
        assert_eq!(
            Matrix::zero(0, 3, ElementKind::Int).unwrap_err(),
            NumericsError::InvalidShape { rows: 0, cols: 3 }
        );
        assert!(matches!(
            Matrix::zero(usize::MAX, 2, ElementKind::Uint8),
            Err(NumericsError::InvalidShape { .. })
        ));
    }

    #[test]
    fn test_identity_fills_leading_diagonal() {
        let m = Matrix::identity(2, 3, ElementKind::Int16).unwrap();
        assert_eq!(m, Matrix::from_rows(vec![vec![1_i16, 0, 0], vec![0, 1, 0]]).unwrap());

        let tall = Matrix::identity(3, 2, ElementKind::Float64).unwrap();
        assert_eq!(tall.get_as::<f64>(1, 1).unwrap(), 1.0);
        assert_eq!(tall.get_as::<f64>(2, 1).unwrap(), 0.0);
    }

    #[test]
    fn test_filled_reads_rows() {
        let m = Matrix::filled([[1_isize, 2], [3, 4]]).unwrap();
        assert_eq!(m.kind(), ElementKind::Int);
        assert_eq!(m.get(0, 0).unwrap(), Scalar::Int(1));
        assert_eq!(m.get(1, 0).unwrap(), Scalar::Int(3));
    }

    #[test]
    fn test_filled_rejects_irregular_input() {
        let ragged = vec![vec![1_i32, 2, 3], vec![4, 5]];
        assert_eq!(
            Matrix::filled(ragged).unwrap_err(),
            NumericsError::IrregularRow { row: 1, expected: 3, found: 2 }
        );

        let mixed = vec![vec![Scalar::Int8(1)], vec![Scalar::Uint8(1)]];
        assert!(matches!(
            Matrix::filled(mixed),
            Err(NumericsError::IrregularInput { position: 1, .. })
        ));

        let late = vec![
            vec![Scalar::Int16(1), Scalar::Int16(2), Scalar::Int16(3)],
            vec![Scalar::Int16(4), Scalar::Int16(5), Scalar::Float32(6.0)],
        ];
        // row 1, col 2 of a 3-wide matrix
        assert_eq!(
            Matrix::filled(late).unwrap_err(),
            NumericsError::IrregularInput {
                position: 5,
                expected: ElementKind::Int16,
                found: ElementKind::Float32,
            }
        );

        let no_rows: Vec<Vec<f32>> = Vec::new();
        assert_eq!(Matrix::filled(no_rows).unwrap_err(), NumericsError::EmptyInput);

        let empty_row: Vec<Vec<f32>> = vec![Vec::new()];
        assert_eq!(Matrix::filled(empty_row).unwrap_err(), NumericsError::EmptyInput);
    }

    #[test]
    fn test_get_and_set_are_checked() {
        let mut m = Matrix::zero(2, 2, ElementKind::Uint32).unwrap();
        m.set(0, 1, 5_u32).unwrap().set(1, 0, 6_u32).unwrap();
        assert_eq!(m.get_as::<u32>(0, 1).unwrap(), 5);
        assert_eq!(m.get_as::<u32>(1, 0).unwrap(), 6);

        assert_eq!(
            m.get(2, 0).unwrap_err(),
            NumericsError::CellOutOfRange { row: 2, col: 0, rows: 2, cols: 2 }
        );
        assert!(matches!(m.set(0, 0, 1_i32), Err(NumericsError::KindMismatch { .. })));
        assert!(matches!(m.set(0, 9, 1_u32), Err(NumericsError::CellOutOfRange { .. })));
    }

    #[test]
    fn test_multiply_vector_identity() {
        let m = Matrix::filled([[1_isize, 0, 0], [0, 1, 0], [0, 0, 1]]).unwrap();
        let v = Vector::filled([1_isize, 2, 3]).unwrap();
        assert!(m.multiply_vector(&v).unwrap().equal(&v).unwrap());
    }

    #[test]
    fn test_multiply_vector_selection() {
        let m = Matrix::filled([[1_isize, 0, 0], [1, 0, 0], [1, 0, 0]]).unwrap();
        let v = Vector::filled([1_isize, 2, 3]).unwrap();
        let expected = Vector::filled([1_isize, 1, 1]).unwrap();
        assert!(m.multiply_vector(&v).unwrap().equal(&expected).unwrap());
    }

    #[test]
    fn test_multiply_vector_projection() {
        let m = Matrix::filled([[1_isize, 0, 1], [0, 1, 1]]).unwrap();
        let v = Vector::filled([1_isize, 2, 3]).unwrap();
        let r = m.multiply_vector(&v).unwrap();
        assert_eq!(r.dimension(), 2);
        assert!(r.equal(&Vector::filled([4_isize, 5]).unwrap()).unwrap());
    }

    #[test]
    fn test_multiply_vector_checks_operands() {
        let m = Matrix::identity(2, 3, ElementKind::Float32).unwrap();
        let wrong_kind = Vector::zero(3, ElementKind::Float64).unwrap();
        let wrong_len = Vector::zero(2, ElementKind::Float32).unwrap();
        assert!(matches!(
            m.multiply_vector(&wrong_kind),
            Err(NumericsError::KindMismatch { .. })
        ));
        assert_eq!(
            m.multiply_vector(&wrong_len).unwrap_err(),
            NumericsError::DimensionMismatch { expected: 3, found: 2 }
        );
    }

    #[test]
    fn test_multiply_vector_wraps_on_overflow() {
        let m = Matrix::filled([[100_u8, 100, 100]]).unwrap();
        let v = Vector::filled([1_u8, 1, 1]).unwrap();
        // 300 mod 256
        assert_eq!(m.multiply_vector(&v).unwrap().get_as::<u8>(0).unwrap(), 44);

        let n = Matrix::filled([[i16::MAX, 1]]).unwrap();
        let w = Vector::filled([1_i16, 1]).unwrap();
        assert_eq!(n.multiply_vector(&w).unwrap().get_as::<i16>(0).unwrap(), i16::MIN);
    }

    #[test]
    fn test_identity_on_both_sides() {
        for kind in [ElementKind::Int, ElementKind::Int32, ElementKind::Float32, ElementKind::Float64] {
            let identity = Matrix::identity(3, 3, kind).unwrap();

            let n = Matrix::random(3, 4, kind).unwrap();
            assert!(identity.multiply_matrix(&n).unwrap().equal(&n).unwrap(), "{kind}");

            let r = Matrix::random(3, 3, kind).unwrap();
            assert!(r.multiply_matrix(&identity).unwrap().equal(&r).unwrap(), "{kind}");
            assert!(identity.multiply_matrix(&r).unwrap().equal(&r).unwrap(), "{kind}");
        }
    }

    #[test]
    fn test_multiply_matrix_values_and_shape() {
        let a = Matrix::from_rows(vec![
            vec![1.0_f32, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ])
        .unwrap();
        let b = Matrix::from_rows(vec![
            vec![9.0_f32, 8.0, 7.0],
            vec![6.0, 5.0, 4.0],
            vec![3.0, 2.0, 1.0],
        ])
        .unwrap();
        let c = a.multiply_matrix(&b).unwrap();
        assert_eq!(c.row(0).unwrap().to_vec::<f32>().unwrap(), vec![30.0, 24.0, 18.0]);
        assert_eq!(c.row(1).unwrap().to_vec::<f32>().unwrap(), vec![84.0, 69.0, 54.0]);
        assert_eq!(c.row(2).unwrap().to_vec::<f32>().unwrap(), vec![138.0, 114.0, 90.0]);

        let wide = Matrix::zero(3, 5, ElementKind::Float32).unwrap();
        assert_eq!(a.multiply_matrix(&wide).unwrap().shape(), (3, 5));
    }

    #[test]
    fn test_multiply_matrix_rectangular_integers() {
        let a = Matrix::filled([[1_i32, 2, 3], [4, 5, 6]]).unwrap();
        let b = Matrix::filled([[7_i32, 8], [9, 10], [11, 12]]).unwrap();
        let c = a.multiply_matrix(&b).unwrap();
        assert_eq!(c.shape(), (2, 2));
        assert!(c.equal(&Matrix::filled([[58_i32, 64], [139, 154]]).unwrap()).unwrap());

        let flipped = b.multiply_matrix(&a).unwrap();
        assert_eq!(flipped.shape(), (3, 3));
        assert_eq!(flipped.get_as::<i32>(0, 0).unwrap(), 39);
    }

    #[test]
    fn test_multiply_matrix_wraps_on_overflow() {
        let a = Matrix::filled([[200_u8, 100]]).unwrap();
        let b = Matrix::filled([[1_u8], [1]]).unwrap();
        let c = a.multiply_matrix(&b).unwrap();
        assert_eq!(c.shape(), (1, 1));
        // 300 mod 256
        assert!(c.equal(&Matrix::filled([[44_u8]]).unwrap()).unwrap());
    }

    #[test]
    fn test_multiply_matrix_checks_operands() {
        let a = Matrix::zero(2, 3, ElementKind::Int).unwrap();
        let b = Matrix::zero(2, 3, ElementKind::Int).unwrap();
        assert_eq!(
            a.multiply_matrix(&b).unwrap_err(),
            NumericsError::DimensionMismatch { expected: 3, found: 2 }
        );
        let c = Matrix::zero(3, 3, ElementKind::Uint).unwrap();
        assert!(matches!(
            a.multiply_matrix(&c),
            Err(NumericsError::KindMismatch { .. })
        ));
    }

    #[test]
    fn test_equal_checks_kind_and_shape() {
        let a = Matrix::zero(2, 2, ElementKind::Int8).unwrap();
        assert!(a.equal(&a).unwrap());
        assert!(matches!(
            a.equal(&Matrix::zero(2, 2, ElementKind::Uint8).unwrap()),
            Err(NumericsError::KindMismatch { .. })
        ));
        assert_eq!(
            a.equal(&Matrix::zero(1, 4, ElementKind::Int8).unwrap()).unwrap_err(),
            NumericsError::ShapeMismatch { expected: (2, 2), found: (1, 4) }
        );
    }

    #[test]
    fn test_rows_columns_and_transpose() {
        let m = Matrix::from_rows(vec![vec![1_i64, 2, 3], vec![4, 5, 6]]).unwrap();
        assert_eq!(m.column(1).unwrap().to_vec::<i64>().unwrap(), vec![2, 5]);
        assert!(m.row(2).is_err());
        assert!(m.column(3).is_err());

        let t = m.transpose();
        assert_eq!(t.shape(), (3, 2));
        assert_eq!(t.row(2).unwrap().to_vec::<i64>().unwrap(), vec![3, 6]);
        assert_eq!(t.transpose(), m);
    }

    #[test]
    fn test_add_sub_and_scale() {
        let a = Matrix::from_rows(vec![vec![1.0_f64, 2.0], vec![3.0, 4.0]]).unwrap();
        let b = Matrix::from_rows(vec![vec![4.0_f64, 3.0], vec![2.0, 1.0]]).unwrap();
        let sum = a.add(&b).unwrap();
        assert_eq!(sum.row(0).unwrap().to_vec::<f64>().unwrap(), vec![5.0, 5.0]);
        let diff = a.sub(&b).unwrap();
        assert_eq!(diff.row(1).unwrap().to_vec::<f64>().unwrap(), vec![1.0, 3.0]);
        let scaled = a.multiply_by_scalar(2.0_f64).unwrap();
        assert_eq!(scaled.row(1).unwrap().to_vec::<f64>().unwrap(), vec![6.0, 8.0]);
    }

    #[test]
    fn test_display_writes_one_line_per_row() {
        let m = Matrix::filled([[1_u8, 2], [3, 4]]).unwrap();
        assert_eq!(m.to_string(), "1 2\n3 4\n");
    }

    #[test]
    fn test_bincode_roundtrip() {
        let config = bincode::config::standard();
        let m = Matrix::random(3, 2, ElementKind::Int16).unwrap();

        let encoded = bincode::serde::encode_to_vec(&m, config).unwrap();
        let (decoded, _len): (Matrix, usize) =
            bincode::serde::decode_from_slice(&encoded, config).unwrap();

        assert_eq!(m, decoded);
    }

    #[test]
    fn test_deserializing_inconsistent_shape_is_rejected() {
        let config = bincode::config::standard();
        let bogus = MatrixData {
            rows: 2,
            cols: 2,
            cells: Cells::Float32(vec![1.0, 2.0, 3.0]),
        };
        let encoded = bincode::serde::encode_to_vec(bogus, config).unwrap();
        let decoded: Result<(Matrix, usize), _> = bincode::serde::decode_from_slice(&encoded, config);
        assert!(decoded.is_err());
    }
}
