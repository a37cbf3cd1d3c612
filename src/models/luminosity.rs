// src/models/luminosity.rs

use std::f64::consts::PI;

/// 半径 r の球殻の光度への寄与 `4π·E·r²` を返す被積分関数を作る
///
/// # 引数
/// - `energy_rate`: 単位体積あたりのエネルギー生成率 E (W/m³)
///
/// # 戻り値
/// - `r` を受け取る純粋関数
pub fn luminosity_integrand(energy_rate: f64) -> impl Fn(f64) -> f64 + Copy {
    move |r| 4.0 * PI * energy_rate * r * r
}

/// 区間 [a, b] の球殻の光度の解析解 `(4/3)·π·E·(b³ - a³)`
pub fn analytic_luminosity(energy_rate: f64, a: f64, b: f64) -> f64 {
    4.0 / 3.0 * PI * energy_rate * (b.powi(3) - a.powi(3))
}
