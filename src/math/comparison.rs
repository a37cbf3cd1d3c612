// src/math/comparison.rs

use crate::math::error::MathError;

/// 解析解に対する数値解の比較結果
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonRecord {
    pub method: String,
    pub numeric: f64,
    pub analytic: f64,
    pub relative_error: f64,
}

impl ComparisonRecord {
    /// 比較結果を作成する。解析解がゼロの場合はエラーを返す。
    pub fn new(method: &str, numeric: f64, analytic: f64) -> Result<Self, MathError> {
        let relative_error = relative_error(numeric, analytic)?;
        Ok(ComparisonRecord {
            method: method.to_string(),
            numeric,
            analytic,
            relative_error,
        })
    }

    /// 相対誤差（%）
    pub fn percent(&self) -> f64 {
        self.relative_error * 100.0
    }
}

/// 相対誤差 `|approx - analytic| / |analytic|`
///
/// # 引数
/// - `approx`: 数値解
/// - `analytic`: 解析解
///
/// # 戻り値
/// - 相対誤差。`analytic == 0` のときは `MathError::ZeroReference`。
///   NaN や無限大の入力はそのまま結果に伝播する。
pub fn relative_error(approx: f64, analytic: f64) -> Result<f64, MathError> {
    if analytic == 0.0 {
        return Err(MathError::ZeroReference);
    }
    Ok((approx - analytic).abs() / analytic.abs())
}
