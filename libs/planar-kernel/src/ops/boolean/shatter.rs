//! # Face Shatter
//!
//! Splits a connection graph into closed polygons. From each edge the trace
//! takes the sharpest left turn available (largest signed angle), which keeps
//! it on the boundary of a single face. Every edge is traced exactly once.

use std::collections::HashSet;

use super::graph::ConnectionGraph;
use crate::core::polygon::Polygon;
use crate::core::predicates::signed_angle;

/// Successor of `lead_b` turning furthest counter-clockwise from the
/// direction `lead_a → lead_b`. Strictly greater wins, so ties keep the first
/// successor. Without successors the trace stays on `lead_b`.
fn leftmost_turn(graph: &ConnectionGraph, lead_a: usize, lead_b: usize) -> usize {
    let incoming = graph.position(lead_b) - graph.position(lead_a);

    let mut best = lead_b;
    let mut best_angle = f64::NEG_INFINITY;
    for &next in graph.successors(lead_b) {
        let angle = signed_angle(incoming, graph.position(next) - graph.position(lead_b));
        if angle > best_angle {
            best = next;
            best_angle = angle;
        }
    }
    best
}

/// First edge not yet traced, scanning nodes in arena order and successors in
/// insertion order.
fn next_untraced(
    graph: &ConnectionGraph,
    visited: &HashSet<(usize, usize)>,
) -> Option<(usize, usize)> {
    graph.nodes().iter().enumerate().find_map(|(from, node)| {
        node.successors
            .iter()
            .find(|&&to| !visited.contains(&(from, to)))
            .map(|&to| (from, to))
    })
}

/// Traces every face of `graph`.
///
/// Returns an empty list for an empty graph.
pub fn shatter(graph: &ConnectionGraph) -> Vec<Polygon> {
    let Some(first) = graph.nodes().first() else {
        return Vec::new();
    };
    let Some(&first_successor) = first.successors.first() else {
        return Vec::new();
    };

    let mut polygons = Vec::new();
    let mut visited: HashSet<(usize, usize)> = HashSet::new();
    let mut current = Polygon::empty();
    let (mut lead_a, mut lead_b) = (0, first_successor);

    loop {
        if visited.insert((lead_a, lead_b)) {
            let next = leftmost_turn(graph, lead_a, lead_b);
            current.push(graph.position(lead_a));
            lead_a = lead_b;
            lead_b = next;
            continue;
        }

        polygons.push(std::mem::take(&mut current));
        match next_untraced(graph, &visited) {
            Some((a, b)) => (lead_a, lead_b) = (a, b),
            None => break,
        }
    }

    log::debug!(
        "shatter: {} edges traced into {} polygons",
        visited.len(),
        polygons.len()
    );
    polygons
}
