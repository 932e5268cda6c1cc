//! 最小生成树集成测试
//!
//! 测试范围:
//! - 三种算法在七顶点图上的结果
//! - 不连通图、空图、有向图的错误处理
//! - 按名称调度和并行交叉校验
//! - 随机连通图上的算法一致性

mod common;

use common::assertions::{assert_err_code, assert_ok};
use common::data_fixtures::{connected_graph, seven_vertex_graph, seven_vertex_graph_with_isolated};
use graphalgo::core::ErrorCode;
use graphalgo::services::algorithm::{Boruvka, CrossCheck, Kruskal, Prim};
use graphalgo::{minimum_spanning_tree, Graph, GraphError, MstAlgorithm};
use proptest::prelude::*;

#[test]
fn test_seven_vertex_weight_for_every_strategy() {
    let graph = seven_vertex_graph();
    for algorithm in MstAlgorithm::ALL {
        let result = assert_ok(minimum_spanning_tree(&graph, algorithm));
        assert_eq!(result.len(), 6, "{} 边数不正确", algorithm);
        assert_eq!(result.total_weight, 12.0, "{} 总权重不正确", algorithm);
    }
}

#[test]
fn test_spanning_tree_covers_every_vertex() {
    let graph = seven_vertex_graph();
    let result = assert_ok(Boruvka::minimum_spanning_tree(&graph));

    let mut covered: Vec<i32> = result
        .edges
        .iter()
        .flat_map(|e| [e.source, e.destination])
        .collect();
    covered.sort_unstable();
    covered.dedup();
    assert_eq!(covered, (1..=7).collect::<Vec<_>>());
}

#[test]
fn test_isolated_vertex_is_disconnected() {
    let graph = seven_vertex_graph_with_isolated();
    for algorithm in MstAlgorithm::ALL {
        let err = assert_err_code(
            minimum_spanning_tree(&graph, algorithm),
            ErrorCode::DisconnectedGraph,
        );
        assert!(matches!(
            err,
            GraphError::DisconnectedGraph { required: 7, .. }
        ));
    }
}

#[test]
fn test_empty_and_directed_graphs_rejected() {
    let empty = Graph::<i32>::undirected(Vec::new(), Vec::<(i32, i32, f64)>::new())
        .expect("有效的空图");
    assert_err_code(Prim::minimum_spanning_tree(&empty), ErrorCode::EmptyGraph);
    assert_err_code(Kruskal::minimum_spanning_tree(&empty), ErrorCode::EmptyGraph);
    assert_err_code(Boruvka::minimum_spanning_tree(&empty), ErrorCode::EmptyGraph);

    let directed = Graph::directed([1, 2], [(1, 2, 1.0)]).expect("有效的有向图");
    assert_err_code(Kruskal::minimum_spanning_tree(&directed), ErrorCode::InvalidDirection);
}

#[test]
fn test_single_vertex_has_empty_tree() {
    let graph = Graph::undirected(["solo"], Vec::<(&str, &str, f64)>::new()).expect("有效的图");
    for algorithm in MstAlgorithm::ALL {
        let result = assert_ok(minimum_spanning_tree(&graph, algorithm));
        assert!(result.is_empty());
        assert_eq!(result.total_weight, 0.0);
    }
}

#[test]
fn test_negative_weights_allowed() {
    let graph = Graph::undirected(
        ['a', 'b', 'c'],
        [('a', 'b', -2.0), ('b', 'c', 3.0), ('a', 'c', -1.0)],
    )
    .expect("有效的图");

    let comparison = assert_ok(CrossCheck::spanning_trees(&graph));
    assert!(comparison.agrees(1e-9));
    for (_, result) in &comparison.results {
        assert_eq!(result.total_weight, -3.0);
    }
}

#[test]
fn test_dispatch_by_menu_number() {
    let graph = seven_vertex_graph();
    for (choice, expected) in [("1", MstAlgorithm::Prim), ("2", MstAlgorithm::Kruskal), ("3", MstAlgorithm::Boruvka)] {
        let algorithm: MstAlgorithm = assert_ok(choice.parse());
        assert_eq!(algorithm, expected);
        assert_eq!(assert_ok(minimum_spanning_tree(&graph, algorithm)).total_weight, 12.0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_strategies_agree_on_connected_graphs(
        n in 1u32..24,
        chain in prop::collection::vec(1u8..50, 0..24),
        extra in prop::collection::vec((0u32..64, 0u32..64, 1u8..50), 0..48),
    ) {
        let graph = connected_graph(n, &extra, &chain);
        let comparison = CrossCheck::spanning_trees(&graph).expect("连通图");

        prop_assert!(comparison.agrees(1e-9), "结果不一致: {:?}", comparison.results);
        for (_, result) in &comparison.results {
            prop_assert_eq!(result.len(), n as usize - 1);
        }
    }
}
