// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("積分区間が不正です (a = {a}, b = {b})。a < b かつ有限である必要があります。")]
    InvalidInterval { a: f64, b: f64 },
    #[error("分割数は 1 以上である必要があります (n = {0})。")]
    InvalidSubdivisions(usize),
    #[error("ステップ数は 1 以上である必要があります (num_steps = {0})。")]
    InvalidStepCount(usize),
    #[error("Simpson 則には偶数の分割数が必要です (n = {0})。")]
    OddSimpsonSubdivisions(usize),
    #[error("解析解がゼロのため相対誤差を定義できません。")]
    ZeroReference,
}
