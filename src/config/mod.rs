use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::services::algorithm::{MstAlgorithm, ShortestPathAlgorithm};

/// 库配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct Config {
    pub log: LogConfig,
    pub algorithm: AlgorithmConfig,
}

/// 日志配置
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub dir: String,
    pub file: String,
    pub max_file_size: u64,
    pub max_files: usize,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            dir: "logs".to_string(),
            file: "graphalgo".to_string(),
            max_file_size: 100 * 1024 * 1024, // 100MB
            max_files: 5,
        }
    }
}

/// 算法选择配置
///
/// 调度层未显式指定算法时使用这里的默认值
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct AlgorithmConfig {
    pub mst: MstAlgorithm,
    pub shortest_path: ShortestPathAlgorithm,
    /// 交叉校验时允许的浮点误差
    pub tolerance: f64,
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            mst: MstAlgorithm::Kruskal,
            shortest_path: ShortestPathAlgorithm::Dijkstra,
            tolerance: 1e-9,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        let tolerance = config.algorithm.tolerance;
        if tolerance.is_nan() || tolerance < 0.0 {
            return Err(format!("无效的容差: {}", tolerance).into());
        }
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), Box<dyn std::error::Error>> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}
