// src/main.rs

use std::error::Error;

use log::info;

use lumdecay::simulation::csv::*;
use lumdecay::simulation::framework::*;
use lumdecay::simulation::load_parameters::*;
use lumdecay::simulation::report::*;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    // パラメータの読み込み
    let luminosity_params = load_luminosity_parameters("config/luminosity.yaml")?;
    let decay_params = load_decay_parameters("config/decay.yaml")?;

    // 太陽光度の数値積分
    let luminosity = run_luminosity_study(&luminosity_params)?;
    print!("{}", render_luminosity_report(&luminosity));

    let mut writer = setup_csv_output("output/luminosity_integrand.csv")?;
    write_samples_csv(&mut writer, &luminosity.samples)?;

    println!();

    // 放射性崩壊の数値積分
    let decay = run_decay_study(&decay_params)?;
    print!("{}", render_decay_report(&decay));

    let mut writer = setup_csv_output("output/decay_trajectories.csv")?;
    write_trajectory_csv(&mut writer, &decay)?;

    info!("結果を output/luminosity_integrand.csv と output/decay_trajectories.csv に保存しました");
    Ok(())
}
