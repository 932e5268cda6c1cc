//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use graphalgo::core::ErrorCode;
use graphalgo::{GraphError, GraphResult, ShortestPaths, VertexId};

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败且错误码匹配
pub fn assert_err_code<T: std::fmt::Debug>(result: GraphResult<T>, expected: ErrorCode) -> GraphError {
    let err = result.expect_err("操作应该失败");
    assert_eq!(err.code(), expected, "错误码不匹配, 实际错误: {}", err);
    err
}

/// 断言最短路径结果与期望距离表一致
pub fn assert_distances<V: VertexId>(paths: &ShortestPaths<V>, expected: &[(V, f64)]) {
    assert_eq!(
        paths.distances.len(),
        expected.len(),
        "距离表大小不匹配: {:?}",
        paths.distances
    );
    for (vertex, distance) in expected {
        let actual = paths
            .distance_to(vertex)
            .unwrap_or_else(|| panic!("缺少顶点 {:?} 的距离", vertex));
        if distance.is_infinite() {
            assert!(actual.is_infinite(), "{:?} 应不可达, 实际距离 {}", vertex, actual);
        } else {
            assert!(
                (actual - distance).abs() < 1e-9,
                "{:?} 距离不匹配: 期望 {}, 实际 {}",
                vertex,
                distance,
                actual
            );
        }
    }
}
