// src/models/decay.rs

/// 放射性崩壊の微分 `dN/dt = -k·N`
pub fn decay_derivative(decay_constant: f64) -> impl Fn(f64, f64) -> f64 + Copy {
    move |_t, n| -decay_constant * n
}

/// 放射性崩壊の解析解 `N(t) = N0·exp(-k·(t - t0))`
pub fn analytic_decay(
    decay_constant: f64,
    initial_value: f64,
    t0: f64,
) -> impl Fn(f64) -> f64 + Copy {
    move |t| initial_value * (-decay_constant * (t - t0)).exp()
}
