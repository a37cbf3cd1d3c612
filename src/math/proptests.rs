// src/math/proptests.rs

//! 求積法・積分器のプロパティベーステスト

use proptest::prelude::*;

use crate::math::integrator::{self, OdeMethod, TimeGrid};
use crate::math::quadrature::{riemann_sum, simpsons_rule, trapezoidal_rule, OddPanelPolicy};

// 小さな係数
fn coeff() -> impl Strategy<Value = f64> {
    -10.0f64..10.0
}

// a < b となる区間
fn interval() -> impl Strategy<Value = (f64, f64)> {
    (-5.0f64..5.0, 0.1f64..5.0).prop_map(|(a, width)| (a, a + width))
}

/// 3 次多項式 c0 + c1 x + c2 x² + c3 x³ の原始関数
fn cubic_antiderivative(c: [f64; 4], x: f64) -> f64 {
    c[0] * x + c[1] * x.powi(2) / 2.0 + c[2] * x.powi(3) / 3.0 + c[3] * x.powi(4) / 4.0
}

proptest! {
    #[test]
    fn simpson_exact_for_cubics(
        c in prop::array::uniform4(coeff()),
        (a, b) in interval(),
        half_n in 1usize..50,
    ) {
        let f = |x: f64| c[0] + c[1] * x + c[2] * x * x + c[3] * x * x * x;
        let exact = cubic_antiderivative(c, b) - cubic_antiderivative(c, a);
        let result = simpsons_rule(f, a, b, 2 * half_n, OddPanelPolicy::Reject).unwrap();
        // 打ち消し合いがあっても丸め誤差は各項の大きさで抑えられる
        let m = a.abs().max(b.abs());
        let scale = (b - a)
            * (c[0].abs() + c[1].abs() * m + c[2].abs() * m * m + c[3].abs() * m.powi(3));
        prop_assert!((result - exact).abs() <= 1e-10 * (1.0 + scale));
    }

    #[test]
    fn constant_function_exact(
        value in coeff(),
        (a, b) in interval(),
        n in 1usize..200,
    ) {
        let exact = value * (b - a);
        let riemann = riemann_sum(|_| value, a, b, n).unwrap();
        let trapezoid = trapezoidal_rule(|_| value, a, b, n).unwrap();
        prop_assert!((riemann - exact).abs() <= 1e-10 * (1.0 + exact.abs()));
        prop_assert!((trapezoid - exact).abs() <= 1e-10 * (1.0 + exact.abs()));
    }

    #[test]
    fn quadrature_is_deterministic(
        c in prop::array::uniform4(coeff()),
        (a, b) in interval(),
        n in 1usize..100,
    ) {
        let f = |x: f64| c[0] + c[1] * x.sin() + c[2] * x.exp() + c[3] * x * x;
        prop_assert_eq!(riemann_sum(f, a, b, n), riemann_sum(f, a, b, n));
        prop_assert_eq!(trapezoidal_rule(f, a, b, n), trapezoidal_rule(f, a, b, n));
        prop_assert_eq!(
            simpsons_rule(f, a, b, n, OddPanelPolicy::TrapezoidalTail),
            simpsons_rule(f, a, b, n, OddPanelPolicy::TrapezoidalTail)
        );
    }

    #[test]
    fn trajectory_starts_at_initial_value(
        y0 in -1000.0f64..1000.0,
        k in 0.0f64..2.0,
        steps in 1usize..50,
    ) {
        let grid = TimeGrid::new(0.0, 10.0, steps).unwrap();
        for method in OdeMethod::ALL {
            let first = integrator::integrate(method, |_t, y| -k * y, y0, &grid);
            let second = integrator::integrate(method, |_t, y| -k * y, y0, &grid);
            prop_assert_eq!(first.values.len(), steps);
            prop_assert_eq!(first.values[0], y0);
            prop_assert_eq!(&first, &second);
        }
    }
}
