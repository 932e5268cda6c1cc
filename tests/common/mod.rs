//! 集成测试共享工具模块
//!
//! 提供测试图夹具和辅助函数，供所有集成测试使用

#![allow(dead_code)]

pub mod assertions;
pub mod data_fixtures;

use std::path::PathBuf;

/// 为当前测试创建独立的临时目录
///
/// 使用项目目录下的 target/test-temp，测试结束后由 tempfile 自动清理
pub fn test_dir(prefix: &str) -> tempfile::TempDir {
    let base = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test-temp");
    std::fs::create_dir_all(&base).expect("创建临时目录失败");
    tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in(base)
        .expect("创建临时目录失败")
}
