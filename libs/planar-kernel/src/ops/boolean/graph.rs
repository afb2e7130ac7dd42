//! # Connection Graph
//!
//! Directed adjacency recorded by the boundary walk and consumed by the face
//! shatter.
//!
//! Nodes live in an arena (`Vec`) and refer to each other by index. A
//! `PointKey` index maps welded positions to nodes, so the same crossing
//! reached from either polygon becomes one node. Successor lists keep
//! insertion order and never hold duplicates; self-loops are allowed.

use std::collections::HashMap;

use crate::core::vec2::{PointKey, Vec2};

/// One vertex of the connection graph.
#[derive(Debug, Clone)]
pub struct GraphNode {
    /// Position of the first point welded into this node.
    pub position: Vec2,
    /// Indices of nodes reachable by one recorded edge, in insertion order.
    pub successors: Vec<usize>,
}

/// Arena-backed directed graph keyed by welded point.
#[derive(Debug, Clone)]
pub struct ConnectionGraph {
    nodes: Vec<GraphNode>,
    index: HashMap<PointKey, usize>,
    weld_tolerance: f64,
}

impl ConnectionGraph {
    /// Creates an empty graph welding points on a grid of `weld_tolerance`.
    pub fn new(weld_tolerance: f64) -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            weld_tolerance,
        }
    }

    /// Index of the node for `point`, inserting it if needed.
    pub fn node(&mut self, point: Vec2) -> usize {
        let key = PointKey::new(point, self.weld_tolerance);
        if let Some(&id) = self.index.get(&key) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(GraphNode {
            position: point,
            successors: Vec::new(),
        });
        self.index.insert(key, id);
        id
    }

    /// Records the directed edge `from → to`.
    ///
    /// Both endpoints are inserted (`from` first); a repeated edge is ignored.
    pub fn add_edge(&mut self, from: Vec2, to: Vec2) {
        let from = self.node(from);
        let to = self.node(to);
        let successors = &mut self.nodes[from].successors;
        if !successors.contains(&to) {
            successors.push(to);
        }
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> &[GraphNode] {
        &self.nodes
    }

    /// Position of node `id`.
    #[inline]
    pub fn position(&self, id: usize) -> Vec2 {
        self.nodes[id].position
    }

    /// Successors of node `id`.
    #[inline]
    pub fn successors(&self, id: usize) -> &[usize] {
        &self.nodes[id].successors
    }

    /// Total number of directed edges.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(|n| n.successors.len()).sum()
    }

    /// True when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
