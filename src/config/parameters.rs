// src/config/parameters.rs

use serde::Deserialize;

use crate::math::OddPanelPolicy;

/// 太陽光度の数値積分パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct LuminosityParameters {
    pub energy_rate: f64,                   // エネルギー生成率 (W/m³)
    pub lower_bound: f64,                   // 積分下限 (m)
    pub upper_bound: f64,                   // 積分上限 (m)
    pub subdivisions: usize,                // 分割数
    pub simpson_odd_policy: OddPanelPolicy, // 奇数分割時の Simpson 則の扱い
}

impl Default for LuminosityParameters {
    fn default() -> Self {
        LuminosityParameters {
            energy_rate: 3.8e26,
            lower_bound: 0.0,
            upper_bound: 6.96e8,
            subdivisions: 10000,
            simpson_odd_policy: OddPanelPolicy::TrapezoidalTail,
        }
    }
}

/// 放射性崩壊の数値積分パラメータ
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct DecayParameters {
    pub decay_constant: f64, // 崩壊定数 (1/s)
    pub initial_value: f64,  // 初期原子数
    pub start_time: f64,     // 開始時刻 (s)
    pub end_time: f64,       // 終了時刻 (s)
    pub num_steps: usize,    // ステップ数
}

impl Default for DecayParameters {
    fn default() -> Self {
        DecayParameters {
            decay_constant: 0.1,
            initial_value: 1000.0,
            start_time: 0.0,
            end_time: 10.0,
            num_steps: 5,
        }
    }
}
