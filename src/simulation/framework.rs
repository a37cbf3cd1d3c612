// src/simulation/framework.rs

use log::{debug, info, warn};

use crate::config::{DecayParameters, LuminosityParameters};
use crate::math::comparison::ComparisonRecord;
use crate::math::error::MathError;
use crate::math::integrator::{self, analytic_trajectory, OdeMethod, TimeGrid, Trajectory};
use crate::math::quadrature::{self, validate_interval, QuadratureMethod, QuadratureResult};
use crate::models::decay::{analytic_decay, decay_derivative};
use crate::models::luminosity::{analytic_luminosity, luminosity_integrand};

/// 1 つの求積法の結果と解析解との比較
#[derive(Debug, Clone, PartialEq)]
pub struct QuadratureOutcome {
    pub method: QuadratureMethod,
    pub result: Result<QuadratureResult, MathError>,
    pub comparison: Result<ComparisonRecord, MathError>,
}

/// 光度計算の全結果
#[derive(Debug, Clone, PartialEq)]
pub struct LuminosityReport {
    pub analytic: f64,
    pub outcomes: Vec<QuadratureOutcome>,
    pub samples: Vec<(f64, f64)>, // 被積分関数の n+1 点のサンプル (r, f(r))
}

impl LuminosityReport {
    pub fn outcome(&self, method: QuadratureMethod) -> Option<&QuadratureOutcome> {
        self.outcomes.iter().find(|o| o.method == method)
    }
}

/// 崩壊計算の全結果
#[derive(Debug, Clone, PartialEq)]
pub struct DecayReport {
    pub grid: TimeGrid,
    pub analytic: Trajectory,
    pub trajectories: Vec<(OdeMethod, Trajectory)>,
    pub comparisons: Vec<(OdeMethod, Result<ComparisonRecord, MathError>)>,
}

impl DecayReport {
    pub fn trajectory(&self, method: OdeMethod) -> Option<&Trajectory> {
        self.trajectories
            .iter()
            .find(|(m, _)| *m == method)
            .map(|(_, t)| t)
    }
}

/// 光度計算の実行
///
/// 積分区間と分割数を最初に検証し、不正なら何も計算せずにエラーを返す。
/// 各求積法の失敗はその手法の結果として記録し、他の手法の計算は続ける。
pub fn run_luminosity_study(params: &LuminosityParameters) -> Result<LuminosityReport, MathError> {
    let (a, b, n) = (params.lower_bound, params.upper_bound, params.subdivisions);
    validate_interval(a, b, n)?;

    let f = luminosity_integrand(params.energy_rate);
    let analytic = analytic_luminosity(params.energy_rate, a, b);
    info!("光度計算を開始: [{}, {}], n = {}, 解析解 = {:e} W", a, b, n, analytic);

    let outcomes = QuadratureMethod::ALL
        .iter()
        .map(|&method| {
            let result = quadrature::integrate(method, f, a, b, n, params.simpson_odd_policy);
            let comparison = result
                .clone()
                .and_then(|r| ComparisonRecord::new(method.name(), r.approximation, analytic));

            match (&result, &comparison) {
                (Err(e), _) => warn!("{} は失敗しました: {}", method, e),
                (Ok(r), Err(e)) => {
                    warn!("{} = {:e} W ですが比較できません: {}", method, r.approximation, e)
                }
                (Ok(r), Ok(c)) => {
                    debug!(
                        "{} = {:e} W, 相対誤差 = {:e}",
                        method, r.approximation, c.relative_error
                    );
                    if !r.approximation.is_finite() {
                        warn!("{} の結果が有限ではありません", method);
                    }
                }
            }

            QuadratureOutcome {
                method,
                result,
                comparison,
            }
        })
        .collect();

    Ok(LuminosityReport {
        analytic,
        outcomes,
        samples: quadrature::sample_points(f, a, b, n + 1),
    })
}

/// 崩壊計算の実行
///
/// すべての手法を同一の時間格子で積分し、終端値を解析解と比較する。
pub fn run_decay_study(params: &DecayParameters) -> Result<DecayReport, MathError> {
    let grid = TimeGrid::new(params.start_time, params.end_time, params.num_steps)?;
    let f = decay_derivative(params.decay_constant);
    let solution = analytic_decay(params.decay_constant, params.initial_value, params.start_time);
    info!(
        "崩壊計算を開始: k = {}, N0 = {}, t = [{}, {}], ステップ数 = {}, h = {}",
        params.decay_constant,
        params.initial_value,
        grid.start(),
        grid.end(),
        grid.num_steps(),
        grid.step_size()
    );

    let analytic = analytic_trajectory(solution, &grid);

    let trajectories: Vec<(OdeMethod, Trajectory)> = OdeMethod::ALL
        .iter()
        .map(|&method| (method, integrator::integrate(method, f, params.initial_value, &grid)))
        .collect();

    let comparisons = trajectories
        .iter()
        .map(|(method, trajectory)| {
            if !trajectory.final_value.is_finite() {
                warn!("{} の終端値が有限ではありません", method);
            }
            let record =
                ComparisonRecord::new(method.name(), trajectory.final_value, analytic.final_value);
            match &record {
                Ok(c) => debug!(
                    "{} の終端値 = {}, 相対誤差 = {:e}",
                    method, c.numeric, c.relative_error
                ),
                Err(e) => warn!("{} の終端値を比較できません: {}", method, e),
            }
            (*method, record)
        })
        .collect();

    Ok(DecayReport {
        grid,
        analytic,
        trajectories,
        comparisons,
    })
}
