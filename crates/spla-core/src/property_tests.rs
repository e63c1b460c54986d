//! Property-based tests for matrix storage, operators and kernels.
//!
//! Uses proptest to check algebraic identities over randomly generated
//! shapes and contents.

use proptest::prelude::*;

use crate::linalg::{inverse, prod, tran_prod, transpose};
use crate::{Matrix, Vector};

fn shape_strategy() -> impl Strategy<Value = (usize, usize)> {
    (1usize..7, 1usize..7)
}

fn matrix_strategy() -> impl Strategy<Value = Matrix<f64>> {
    shape_strategy().prop_flat_map(|(r, c)| {
        prop::collection::vec(-10.0f64..10.0, r * c)
            .prop_map(move |data| Matrix::from_vec(r, c, data).unwrap())
    })
}

fn int_matrix(rows: usize, cols: usize) -> impl Strategy<Value = Matrix<i64>> {
    prop::collection::vec(-5i64..5, rows * cols)
        .prop_map(move |data| Matrix::from_vec(rows, cols, data).unwrap())
}

// Row sums of |a_ij| stay below the diagonal shift, so the matrix is
// strictly diagonally dominant and well conditioned.
fn dominant_strategy() -> impl Strategy<Value = Matrix<f64>> {
    (1usize..8).prop_flat_map(|n| {
        prop::collection::vec(-1.0f64..1.0, n * n).prop_map(move |data| {
            let mut m = Matrix::from_vec(n, n, data).unwrap();
            for i in 0..n {
                m[(i, i)] += n as f64 + 1.0;
            }
            m
        })
    })
}

proptest! {
    #[test]
    fn prop_indexing_views_agree(m in matrix_strategy()) {
        for i in 0..m.rows() {
            for j in 0..m.cols() {
                prop_assert_eq!(m[i][j], m.at(i + 1, j + 1));
                prop_assert_eq!(m[(i, j)], m.as_slice()[i * m.cols() + j]);
            }
        }
    }

    #[test]
    fn prop_clone_is_independent(m in matrix_strategy()) {
        let original = m.clone();
        let mut copy = m.clone();
        *copy.at_mut(1, 1) += 1.0;
        copy.fill(-99.0);
        prop_assert_eq!(&m, &original);
    }

    #[test]
    fn prop_additive_and_multiplicative_identity(m in matrix_strategy()) {
        prop_assert_eq!(&m + 0.0, m.clone());
        prop_assert_eq!(&m * 1.0, m.clone());
        prop_assert_eq!(&m - &m, Matrix::zeros(m.rows(), m.cols()));
    }

    #[test]
    fn prop_transpose_involution(m in matrix_strategy()) {
        let t = transpose(&m);
        prop_assert_eq!(t.shape(), (m.cols(), m.rows()));
        prop_assert_eq!(transpose(&t), m);
    }

    #[test]
    fn prop_prod_identity(m in matrix_strategy()) {
        let left = prod(&Matrix::identity(m.rows()), &m).unwrap();
        let right = prod(&m, &Matrix::identity(m.cols())).unwrap();
        prop_assert_eq!(&left, &m);
        prop_assert_eq!(&right, &m);
    }

    #[test]
    fn prop_prod_associative(
        (a, b, c) in (1usize..5, 1usize..5, 1usize..5, 1usize..5)
            .prop_flat_map(|(m, k, l, n)| (int_matrix(m, k), int_matrix(k, l), int_matrix(l, n)))
    ) {
        let ab_c = prod(&prod(&a, &b).unwrap(), &c).unwrap();
        let a_bc = prod(&a, &prod(&b, &c).unwrap()).unwrap();
        prop_assert_eq!(ab_c, a_bc);
    }

    #[test]
    fn prop_tran_prod_matches_explicit_transpose(
        (a, b) in (1usize..6, 1usize..6, 1usize..6).prop_flat_map(|(k, m, n)| {
            (
                prop::collection::vec(-10.0f64..10.0, k * m)
                    .prop_map(move |d| Matrix::from_vec(k, m, d).unwrap()),
                prop::collection::vec(-10.0f64..10.0, k * n)
                    .prop_map(move |d| Matrix::from_vec(k, n, d).unwrap()),
            )
        })
    ) {
        // Same summation order on both sides, so the results are identical.
        prop_assert_eq!(tran_prod(&a, &b).unwrap(), prod(&transpose(&a), &b).unwrap());
    }

    #[test]
    fn prop_row_column_roundtrip(m in matrix_strategy()) {
        let mut rebuilt = Matrix::zeros(m.rows(), m.cols());
        for i in 1..=m.rows() {
            rebuilt.set_row(&m.get_row(i).unwrap(), i).unwrap();
        }
        prop_assert_eq!(&rebuilt, &m);

        let mut by_cols = Matrix::zeros(m.rows(), m.cols());
        for j in 1..=m.cols() {
            by_cols.set_column(&m.get_column(j).unwrap(), j).unwrap();
        }
        prop_assert_eq!(by_cols, m);
    }

    #[test]
    fn prop_inverse_roundtrip(a in dominant_strategy()) {
        let inv = inverse(&a).unwrap();
        let eye = Matrix::<f64>::identity(a.rows());
        for p in [prod(&a, &inv).unwrap(), prod(&inv, &a).unwrap()] {
            for (x, y) in p.iter().zip(eye.iter()) {
                prop_assert!((x - y).abs() < 1e-9, "{} vs identity", p);
            }
        }
    }

    #[test]
    fn prop_text_roundtrip(m in matrix_strategy()) {
        let mut text = format!("{} {}\n", m.rows(), m.cols());
        for v in m.iter() {
            text.push_str(&format!("{v} "));
        }
        let parsed: Matrix<f64> = text.parse().unwrap();
        prop_assert_eq!(parsed, m);
    }

    #[test]
    fn prop_vector_dot_matches_prod(
        v in prop::collection::vec(-10i64..10, 1..10)
    ) {
        let x = Vector::from_vec(v.clone());
        let row = Matrix::from_vec(1, v.len(), v).unwrap();
        let y = crate::linalg::prod_vec(&row, &x).unwrap();
        prop_assert_eq!(y.as_slice(), &[x.dot(&x).unwrap()]);
    }
}
