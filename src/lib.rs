// src/lib.rs

//! 太陽光度（球対称な体積積分）と放射性崩壊（初期値問題）を固定刻みの数値解法で計算し、
//! 解析解と比較する。

pub mod config;
pub mod math;
pub mod models;
pub mod simulation;
