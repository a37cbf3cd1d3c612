// src/simulation/report.rs

use crate::simulation::framework::{DecayReport, LuminosityReport};

/// 光度計算の結果をテキストにする
pub fn render_luminosity_report(report: &LuminosityReport) -> String {
    let mut text = format!("Analytic Luminosity: {:e} Watts\n", report.analytic);

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(result) => text.push_str(&format!(
                "{} Luminosity: {:e} Watts\n",
                outcome.method, result.approximation
            )),
            Err(e) => text.push_str(&format!("{} Luminosity: failed ({})\n", outcome.method, e)),
        }
    }

    text.push_str("\nComparing Results:\n");
    for outcome in &report.outcomes {
        match &outcome.comparison {
            Ok(record) => text.push_str(&format!(
                "Relative Error ({} vs Analytic): {:.2}%\n",
                outcome.method,
                record.percent()
            )),
            Err(e) => text.push_str(&format!(
                "Relative Error ({} vs Analytic): undefined ({})\n",
                outcome.method, e
            )),
        }
    }
    text
}

/// 崩壊計算の結果をテキストにする
pub fn render_decay_report(report: &DecayReport) -> String {
    let mut text = String::new();
    for (method, trajectory) in &report.trajectories {
        text.push_str(&format!(
            "Final Result using {}: {}\n",
            method, trajectory.final_value
        ));
    }
    text.push_str(&format!(
        "Final Result using Analytic Solution: {}\n",
        report.analytic.final_value
    ));

    for (method, comparison) in &report.comparisons {
        match comparison {
            Ok(record) => text.push_str(&format!(
                "Relative Error ({} vs Analytic): {:.4}%\n",
                method,
                record.percent()
            )),
            Err(e) => text.push_str(&format!(
                "Relative Error ({} vs Analytic): undefined ({})\n",
                method, e
            )),
        }
    }
    text
}
