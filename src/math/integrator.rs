// src/math/integrator.rs

use std::fmt;

use crate::math::error::MathError;

/// 固定刻みの常微分方程式ソルバの種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OdeMethod {
    Euler,
    RungeKutta4,
}

impl OdeMethod {
    pub const ALL: [OdeMethod; 2] = [OdeMethod::Euler, OdeMethod::RungeKutta4];

    pub fn name(&self) -> &'static str {
        match self {
            OdeMethod::Euler => "Euler's Method",
            OdeMethod::RungeKutta4 => "4th Order Runge-Kutta",
        }
    }
}

impl fmt::Display for OdeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 等間隔の時間格子
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeGrid {
    t0: f64,
    t1: f64,
    num_steps: usize,
}

impl TimeGrid {
    /// 時間格子を生成する。`t0 < t1`（有限）かつ `num_steps >= 1` でなければエラー。
    pub fn new(t0: f64, t1: f64, num_steps: usize) -> Result<Self, MathError> {
        if !t0.is_finite() || !t1.is_finite() || t0 >= t1 {
            return Err(MathError::InvalidInterval { a: t0, b: t1 });
        }
        if num_steps < 1 {
            return Err(MathError::InvalidStepCount(num_steps));
        }
        Ok(TimeGrid { t0, t1, num_steps })
    }

    pub fn start(&self) -> f64 {
        self.t0
    }

    pub fn end(&self) -> f64 {
        self.t1
    }

    pub fn num_steps(&self) -> usize {
        self.num_steps
    }

    pub fn step_size(&self) -> f64 {
        (self.t1 - self.t0) / self.num_steps as f64
    }

    /// 各ステップの開始時刻 `t_i = t0 + i·h` (i = 0..num_steps)
    pub fn times(&self) -> Vec<f64> {
        let h = self.step_size();
        (0..self.num_steps).map(|i| self.t0 + i as f64 * h).collect()
    }
}

/// 1 つの手法による解の軌道
///
/// `values[i]` は時刻 `times[i]` におけるステップ適用前の値で、
/// `final_value` は最後のステップを適用した後（時刻 `t1`）の値。
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    pub label: String,
    pub times: Vec<f64>,
    pub values: Vec<f64>,
    pub final_value: f64,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// 前進 Euler 法の 1 ステップ
///
/// # 引数
/// - `f`: 微分 dy/dt = f(t, y)
/// - `t`: 現在の時刻
/// - `y`: 現在の値
/// - `h`: 時間刻み
///
/// # 戻り値
/// - 次の値 `y + h·f(t, y)`
pub fn euler_step<F>(f: &F, t: f64, y: f64, h: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    y + h * f(t, y)
}

/// 古典的 4 段 4 次 Runge-Kutta 法の 1 ステップ
///
/// # 引数
/// - `f`: 微分 dy/dt = f(t, y)
/// - `t`: 現在の時刻
/// - `y`: 現在の値
/// - `h`: 時間刻み
///
/// # 戻り値
/// - 次の値 `y + (k1 + 2k2 + 2k3 + k4) / 6`
pub fn rk4_step<F>(f: &F, t: f64, y: f64, h: f64) -> f64
where
    F: Fn(f64, f64) -> f64,
{
    let k1 = h * f(t, y);
    let k2 = h * f(t + 0.5 * h, y + 0.5 * k1);
    let k3 = h * f(t + 0.5 * h, y + 0.5 * k2);
    let k4 = h * f(t + h, y + k3);
    y + (k1 + 2.0 * k2 + 2.0 * k3 + k4) / 6.0
}

/// 指定した手法で初期値問題を積分する
///
/// 各格子点でステップ適用前の値を記録してから前進する。
/// 状態はこの呼び出しの中だけで保持し、他の手法とは共有しない。
pub fn integrate<F>(method: OdeMethod, f: F, y0: f64, grid: &TimeGrid) -> Trajectory
where
    F: Fn(f64, f64) -> f64,
{
    let h = grid.step_size();
    let times = grid.times();
    let mut values = Vec::with_capacity(times.len());
    let mut y = y0;

    for &t in &times {
        values.push(y);
        y = match method {
            OdeMethod::Euler => euler_step(&f, t, y, h),
            OdeMethod::RungeKutta4 => rk4_step(&f, t, y, h),
        };
    }

    Trajectory {
        label: method.name().to_string(),
        times,
        values,
        final_value: y,
    }
}

/// 解析解を格子点と終端時刻で評価する
pub fn analytic_trajectory<S>(solution: S, grid: &TimeGrid) -> Trajectory
where
    S: Fn(f64) -> f64,
{
    let times = grid.times();
    let values = times.iter().map(|&t| solution(t)).collect();
    Trajectory {
        label: "Analytic Solution".to_string(),
        times,
        values,
        final_value: solution(grid.end()),
    }
}
