// src/simulation/load_parameters.rs

use std::error::Error;
use std::fs::File;
use std::io::Read;

use serde::de::DeserializeOwned;
use serde_yaml::from_reader;

use crate::config::{DecayParameters, LuminosityParameters};

/// 任意のリーダから YAML を読み込む
pub fn parse_yaml<T, R>(reader: R) -> Result<T, Box<dyn Error>>
where
    T: DeserializeOwned,
    R: Read,
{
    let value: T = from_reader(reader)?;
    Ok(value)
}

/// 光度計算パラメータの読み込み
pub fn load_luminosity_parameters(path: &str) -> Result<LuminosityParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    parse_yaml(file)
}

/// 崩壊計算パラメータの読み込み
pub fn load_decay_parameters(path: &str) -> Result<DecayParameters, Box<dyn Error>> {
    let file = File::open(path)?;
    parse_yaml(file)
}
