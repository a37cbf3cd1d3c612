// src/simulation/csv.rs

use std::error::Error;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::simulation::framework::DecayReport;

/// CSV 出力先のファイルを作成する（親ディレクトリがなければ作る）
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    if let Some(parent) = Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output_file = File::create(path)?;
    Ok(Box::new(BufWriter::new(output_file)))
}

/// 被積分関数のサンプルを書き込む
pub fn write_samples_csv<W: Write>(
    writer: &mut W,
    samples: &[(f64, f64)],
) -> Result<(), std::io::Error> {
    writer.write_all(b"r(m),integrand(W/m)\n")?;
    for (r, value) in samples {
        writeln!(writer, "{},{}", r, value)?;
    }
    writer.flush()
}

/// 各手法の軌道を同じ時間格子で並べて書き込む
pub fn write_trajectory_csv<W: Write>(
    writer: &mut W,
    report: &DecayReport,
) -> Result<(), std::io::Error> {
    let mut header = String::from("time(s),analytic");
    for (method, _) in &report.trajectories {
        header.push(',');
        header.push_str(method.name());
    }
    header.push('\n');
    writer.write_all(header.as_bytes())?;

    for (i, (time, analytic)) in report
        .analytic
        .times
        .iter()
        .zip(&report.analytic.values)
        .enumerate()
    {
        let mut row = format!("{},{}", time, analytic);
        for (_, trajectory) in &report.trajectories {
            row.push_str(&format!(",{}", trajectory.values[i]));
        }
        row.push('\n');
        writer.write_all(row.as_bytes())?;
    }

    // 終端時刻の値
    let mut row = format!("{},{}", report.grid.end(), report.analytic.final_value);
    for (_, trajectory) in &report.trajectories {
        row.push_str(&format!(",{}", trajectory.final_value));
    }
    row.push('\n');
    writer.write_all(row.as_bytes())?;
    writer.flush()
}
