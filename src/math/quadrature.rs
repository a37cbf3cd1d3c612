// src/math/quadrature.rs

use std::fmt;

use serde::Deserialize;

use crate::math::error::MathError;

/// 固定刻みの求積法の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuadratureMethod {
    Riemann,
    Trapezoidal,
    Simpson,
}

impl QuadratureMethod {
    pub const ALL: [QuadratureMethod; 3] = [
        QuadratureMethod::Riemann,
        QuadratureMethod::Trapezoidal,
        QuadratureMethod::Simpson,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            QuadratureMethod::Riemann => "Riemann Sum",
            QuadratureMethod::Trapezoidal => "Trapezoidal Rule",
            QuadratureMethod::Simpson => "Simpson's Rule",
        }
    }
}

impl fmt::Display for QuadratureMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 分割数が奇数のときの Simpson 則の扱い
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OddPanelPolicy {
    /// 先頭 n-1 区間に Simpson 則、最後の 1 区間に台形則を適用する
    #[default]
    TrapezoidalTail,
    /// 奇数の分割数をエラーとして拒否する
    Reject,
}

/// 1 回の求積の結果
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureResult {
    pub method: QuadratureMethod,
    pub a: f64,
    pub b: f64,
    pub n: usize,
    pub approximation: f64,
}

/// 積分区間と分割数の検証
///
/// 計算を始める前に呼び出し、不正な入力を丸めずにエラーとして返す。
pub fn validate_interval(a: f64, b: f64, n: usize) -> Result<f64, MathError> {
    if !a.is_finite() || !b.is_finite() || a >= b {
        return Err(MathError::InvalidInterval { a, b });
    }
    if n < 1 {
        return Err(MathError::InvalidSubdivisions(n));
    }
    Ok((b - a) / n as f64)
}

/// 左端点によるリーマン和
///
/// # 引数
/// - `f`: 被積分関数
/// - `a`, `b`: 積分区間
/// - `n`: 分割数
///
/// # 戻り値
/// - `h · Σ_{i=0}^{n-1} f(a + i·h)`
pub fn riemann_sum<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
{
    let h = validate_interval(a, b, n)?;
    let sum: f64 = (0..n).map(|i| f(a + i as f64 * h)).sum();
    Ok(h * sum)
}

/// 複合台形則
///
/// # 引数
/// - `f`: 被積分関数
/// - `a`, `b`: 積分区間
/// - `n`: 分割数（n+1 点で評価する）
///
/// # 戻り値
/// - `h · [(f(x_0) + f(x_n)) / 2 + Σ_{i=1}^{n-1} f(x_i)]`
pub fn trapezoidal_rule<F>(f: F, a: f64, b: f64, n: usize) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
{
    let h = validate_interval(a, b, n)?;
    let ends = 0.5 * (f(a) + f(b));
    let interior: f64 = (1..n).map(|i| f(a + i as f64 * h)).sum();
    Ok(h * (ends + interior))
}

/// 複合 Simpson 1/3 則
///
/// 分割数が奇数の場合は `policy` に従う。`TrapezoidalTail` では先頭 n-1 区間を
/// Simpson 則、最後の区間を台形則で積分する（n = 1 なら台形則そのもの）。
///
/// # 引数
/// - `f`: 被積分関数
/// - `a`, `b`: 積分区間
/// - `n`: 分割数
/// - `policy`: 奇数分割数の扱い
///
/// # 戻り値
/// - 積分の近似値
pub fn simpsons_rule<F>(
    f: F,
    a: f64,
    b: f64,
    n: usize,
    policy: OddPanelPolicy,
) -> Result<f64, MathError>
where
    F: Fn(f64) -> f64,
{
    let h = validate_interval(a, b, n)?;
    let x = |i: usize| a + i as f64 * h;

    if n % 2 == 1 && policy == OddPanelPolicy::Reject {
        return Err(MathError::OddSimpsonSubdivisions(n));
    }

    // Simpson 則を適用する偶数個の区間
    let even = n - n % 2;
    let mut integral = 0.0;
    if even > 0 {
        let odd_sum: f64 = (1..even).step_by(2).map(|i| f(x(i))).sum();
        let even_sum: f64 = (2..even).step_by(2).map(|i| f(x(i))).sum();
        let last = if even == n { b } else { x(even) };
        integral = h / 3.0 * (f(a) + 4.0 * odd_sum + 2.0 * even_sum + f(last));
    }

    // 残りの 1 区間
    if even < n {
        integral += 0.5 * h * (f(x(n - 1)) + f(b));
    }

    Ok(integral)
}

/// 求積法を指定して積分する
pub fn integrate<F>(
    method: QuadratureMethod,
    f: F,
    a: f64,
    b: f64,
    n: usize,
    policy: OddPanelPolicy,
) -> Result<QuadratureResult, MathError>
where
    F: Fn(f64) -> f64,
{
    let approximation = match method {
        QuadratureMethod::Riemann => riemann_sum(f, a, b, n)?,
        QuadratureMethod::Trapezoidal => trapezoidal_rule(f, a, b, n)?,
        QuadratureMethod::Simpson => simpsons_rule(f, a, b, n, policy)?,
    };
    Ok(QuadratureResult {
        method,
        a,
        b,
        n,
        approximation,
    })
}

/// 区間 [a, b] を両端を含めて等間隔に `count` 点サンプリングする
pub fn sample_points<F>(f: F, a: f64, b: f64, count: usize) -> Vec<(f64, f64)>
where
    F: Fn(f64) -> f64,
{
    match count {
        0 => Vec::new(),
        1 => vec![(a, f(a))],
        _ => {
            let step = (b - a) / (count - 1) as f64;
            (0..count)
                .map(|i| {
                    let x = if i == count - 1 { b } else { a + i as f64 * step };
                    (x, f(x))
                })
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn cubic(x: f64) -> f64 {
        2.0 * x.powi(3) - 3.0 * x.powi(2) + x - 5.0
    }

    /// ∫_{-1}^{2} (2x³ - 3x² + x - 5) dx = [x⁴/2 - x³ + x²/2 - 5x] = -8 - 7 = -15
    const CUBIC_INTEGRAL: f64 = -15.0;

    #[test]
    fn test_riemann_sum_linear_hand_computed() {
        // f(x) = x, [0, 1], n = 4: h = 0.25, 0.25 * (0 + 0.25 + 0.5 + 0.75) = 0.375
        let result = riemann_sum(|x| x, 0.0, 1.0, 4).unwrap();
        assert_relative_eq!(result, 0.375, epsilon = 1e-15);
    }

    #[test]
    fn test_riemann_sum_underestimates_increasing_function() {
        let result = riemann_sum(|x| x * x, 0.0, 1.0, 100).unwrap();
        assert!(result < 1.0 / 3.0);
    }

    #[test]
    fn test_trapezoidal_rule_exact_for_linear() {
        let result = trapezoidal_rule(|x| 3.0 * x + 1.0, 0.0, 2.0, 7).unwrap();
        assert_relative_eq!(result, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_constant_function_exact_for_every_n() {
        for n in 1..=25 {
            let riemann = riemann_sum(|_| 2.5, -1.0, 3.0, n).unwrap();
            let trapezoid = trapezoidal_rule(|_| 2.5, -1.0, 3.0, n).unwrap();
            assert_relative_eq!(riemann, 10.0, epsilon = 1e-12);
            assert_relative_eq!(trapezoid, 10.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_simpsons_rule_exact_for_cubic() {
        for n in [2, 4, 10, 64] {
            let result =
                simpsons_rule(cubic, -1.0, 2.0, n, OddPanelPolicy::Reject).unwrap();
            assert_relative_eq!(result, CUBIC_INTEGRAL, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_simpsons_rule_reject_odd_subdivisions() {
        let result = simpsons_rule(cubic, -1.0, 2.0, 5, OddPanelPolicy::Reject);
        assert_eq!(result, Err(MathError::OddSimpsonSubdivisions(5)));
    }

    /// 奇数分割では最後の区間だけ台形則になる。
    /// f(x) = x², [0, 3], n = 3: Simpson [0, 2] = 8/3, 台形 [2, 3] = (4 + 9) / 2 = 6.5
    #[test]
    fn test_simpsons_rule_trapezoidal_tail() {
        let result =
            simpsons_rule(|x| x * x, 0.0, 3.0, 3, OddPanelPolicy::TrapezoidalTail).unwrap();
        assert_relative_eq!(result, 8.0 / 3.0 + 6.5, epsilon = 1e-12);
    }

    #[test]
    fn test_simpsons_rule_single_panel_is_trapezoid() {
        let simpson =
            simpsons_rule(|x| x * x, 0.0, 1.0, 1, OddPanelPolicy::TrapezoidalTail).unwrap();
        let trapezoid = trapezoidal_rule(|x| x * x, 0.0, 1.0, 1).unwrap();
        assert_eq!(simpson, trapezoid);
    }

    #[test]
    fn test_invalid_interval_rejected_before_evaluation() {
        let result = riemann_sum(|_| panic!("evaluated"), 1.0, 1.0, 10);
        assert_eq!(result, Err(MathError::InvalidInterval { a: 1.0, b: 1.0 }));

        let result = trapezoidal_rule(|_| panic!("evaluated"), 2.0, 1.0, 10);
        assert_eq!(result, Err(MathError::InvalidInterval { a: 2.0, b: 1.0 }));
    }

    #[test]
    fn test_zero_subdivisions_rejected() {
        let result = simpsons_rule(|x| x, 0.0, 1.0, 0, OddPanelPolicy::TrapezoidalTail);
        assert_eq!(result, Err(MathError::InvalidSubdivisions(0)));
    }

    #[test]
    fn test_non_finite_integrand_propagates() {
        let result = trapezoidal_rule(|x| 1.0 / x, 0.0, 1.0, 10).unwrap();
        assert!(result.is_infinite());

        let result = riemann_sum(|_| f64::NAN, 0.0, 1.0, 10).unwrap();
        assert!(result.is_nan());
    }

    #[test]
    fn test_error_decreases_with_more_subdivisions() {
        let exact = 1.0 - 1.0f64.cos();
        for method in QuadratureMethod::ALL {
            let mut previous = f64::INFINITY;
            for n in [4, 8, 16, 32, 64] {
                let result = integrate(
                    method,
                    f64::sin,
                    0.0,
                    1.0,
                    n,
                    OddPanelPolicy::Reject,
                )
                .unwrap();
                let error = (result.approximation - exact).abs();
                assert!(error <= previous, "{} が n = {} で収束していない", method, n);
                previous = error;
            }
        }
    }

    #[test]
    fn test_integrate_records_inputs() {
        let result = integrate(
            QuadratureMethod::Trapezoidal,
            |x| x,
            0.0,
            2.0,
            8,
            OddPanelPolicy::default(),
        )
        .unwrap();
        assert_eq!(result.method, QuadratureMethod::Trapezoidal);
        assert_eq!((result.a, result.b, result.n), (0.0, 2.0, 8));
        assert_relative_eq!(result.approximation, 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_points_include_both_ends() {
        let samples = sample_points(|x| 2.0 * x, 0.0, 1.0, 5);
        assert_eq!(samples.len(), 5);
        assert_eq!(samples[0], (0.0, 0.0));
        assert_eq!(samples[2], (0.5, 1.0));
        assert_eq!(samples[4], (1.0, 2.0));
        assert!(sample_points(|x| x, 0.0, 1.0, 0).is_empty());
    }
}
