//! # Boundary Walk
//!
//! Traverses the boundaries of two overlapping polygons, recording the
//! visited segments in a [`ConnectionGraph`].
//!
//! ## Algorithm
//!
//! ```text
//! restart: pop leads (FIFO) until one starts an un-iterated segment on `below`
//! step:    cast the cursor segment A → B against the other polygon
//!          hit   → record A → hit, switch polygons, reverse direction
//!          miss  → record A → B, advance along the current polygon
//!          (a corner touching the other boundary without crossing is a miss)
//! finish:  no usable lead remains
//! ```
//!
//! `below` is walked forward and `above` backward, so the traced regions are
//! the parts of `below` that `above` does not cover.

use std::collections::{HashSet, VecDeque};

use config::constants::WALK_STEP_FACTOR;

use super::graph::ConnectionGraph;
use crate::config::KernelConfig;
use crate::core::polygon::{Polygon, RaycastHit};
use crate::core::predicates::{orient2d, Orientation};
use crate::core::vec2::{PointKey, Vec2};
use crate::error::{GeometryError, GeometryResult};

/// Restart candidate: a point on `below` and the index of the `below` edge
/// it lies on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lead {
    /// Where the walk resumes.
    pub point: Vec2,
    /// Edge `edge → edge + 1` of `below` the point belongs to.
    pub edge: usize,
}

impl Lead {
    /// Lead at `point` on edge `edge`.
    pub fn new(point: Vec2, edge: usize) -> Self {
        Self { point, edge }
    }
}

/// Moves `index` by `step` around a loop of `len` vertices.
#[inline]
fn advance(index: usize, step: isize, len: usize) -> usize {
    (index as isize + step).rem_euclid(len as isize) as usize
}

/// Mutable state of one walk.
struct BoundaryWalk<'a> {
    below: &'a Polygon,
    above: &'a Polygon,
    current: &'a Polygon,
    other: &'a Polygon,
    step: isize,
    index_a: usize,
    index_b: usize,
    cursor_a: Vec2,
    cursor_b: Vec2,
    iterated: HashSet<(PointKey, PointKey)>,
    leads: VecDeque<Lead>,
    graph: ConnectionGraph,
    cfg: &'a KernelConfig,
}

impl<'a> BoundaryWalk<'a> {
    fn key(&self, point: Vec2) -> PointKey {
        PointKey::new(point, self.cfg.weld_tolerance)
    }

    /// Resumes from the next usable lead; false when none is left.
    fn restart(&mut self) -> bool {
        let n = self.below.len();
        while let Some(lead) = self.leads.pop_front() {
            let index_b = (lead.edge + 1) % n;
            let end = self.below.vertices()[index_b];
            if self
                .iterated
                .contains(&(self.key(lead.point), self.key(end)))
            {
                continue;
            }

            self.current = self.below;
            self.other = self.above;
            self.step = 1;
            self.index_a = lead.edge;
            self.index_b = index_b;
            self.cursor_a = lead.point;
            self.cursor_b = end;
            return true;
        }
        false
    }

    /// For a hit at the cursor's far end: true if the current boundary
    /// continues to the other side of the hit edge.
    fn leaves_through(&self, hit: &RaycastHit) -> bool {
        let edge_a = self.other.vertices()[hit.index_a];
        let edge_b = self.other.vertices()[hit.index_b];
        let next = advance(self.index_b, self.step, self.current.len());

        let before = orient2d(edge_a, edge_b, self.cursor_a);
        let after = orient2d(edge_a, edge_b, self.current.vertices()[next]);
        !(before == after && before != Orientation::Collinear)
    }

    /// One walk step along the cursor segment.
    fn step(&mut self) {
        let key_a = self.key(self.cursor_a);
        let crossing = self
            .other
            .segment_cast(self.cursor_a, self.cursor_b, self.cfg)
            .into_iter()
            .find(|hit| {
                let key = self.key(hit.point);
                key != key_a
                    && self.other.crosses(hit, self.cursor_a, self.cursor_b, self.cfg)
                    && (key != self.key(self.cursor_b) || self.leaves_through(hit))
            });

        match crossing {
            Some(hit) => {
                std::mem::swap(&mut self.current, &mut self.other);
                (self.index_a, self.index_b) = if self.step == 1 {
                    (hit.index_b, hit.index_a)
                } else {
                    (hit.index_a, hit.index_b)
                };
                self.graph.add_edge(self.cursor_a, hit.point);
                self.cursor_a = hit.point;
                self.cursor_b = self.current.vertices()[self.index_b];
                self.step = -self.step;

                // Crossed exactly at a corner heading back toward us: move on
                // to the next edge instead of recording a zero-length segment.
                if self.key(self.cursor_b) == self.key(hit.point) {
                    self.index_a = self.index_b;
                    self.index_b = advance(self.index_b, self.step, self.current.len());
                    self.cursor_b = self.current.vertices()[self.index_b];
                }
            }
            None => {
                self.graph.add_edge(self.cursor_a, self.cursor_b);
                let len = self.current.len();
                self.index_a = advance(self.index_a, self.step, len);
                self.index_b = advance(self.index_b, self.step, len);
                self.cursor_a = self.current.vertices()[self.index_a];
                self.cursor_b = self.current.vertices()[self.index_b];
            }
        }
    }
}

/// Walks `below` and `above` starting from `leads`, returning the recorded
/// graph.
///
/// Both polygons must be valid and wound counter-clockwise. Fails with
/// [`GeometryError::WalkDidNotClose`] if the walk exceeds its step budget.
pub fn walk(
    below: &Polygon,
    above: &Polygon,
    leads: VecDeque<Lead>,
    cfg: &KernelConfig,
) -> GeometryResult<ConnectionGraph> {
    let (n, m) = (below.len(), above.len());
    let budget = WALK_STEP_FACTOR * (n + m + n * m) + 16;

    let mut walk = BoundaryWalk {
        below,
        above,
        current: below,
        other: above,
        step: 1,
        index_a: 0,
        index_b: 0,
        cursor_a: Vec2::ZERO,
        cursor_b: Vec2::ZERO,
        iterated: HashSet::new(),
        leads,
        graph: ConnectionGraph::new(cfg.weld_tolerance),
        cfg,
    };

    if !walk.restart() {
        return Ok(walk.graph);
    }

    let mut steps = 0;
    loop {
        let segment = (walk.key(walk.cursor_a), walk.key(walk.cursor_b));
        if !walk.iterated.insert(segment) {
            if walk.restart() {
                continue;
            }
            break;
        }

        steps += 1;
        if steps > budget {
            log::warn!("boundary walk exceeded {budget} steps without closing");
            return Err(GeometryError::WalkDidNotClose { steps });
        }
        walk.step();
    }

    log::debug!(
        "boundary walk closed after {} steps: {} nodes, {} edges",
        steps,
        walk.graph.nodes().len(),
        walk.graph.edge_count()
    );
    Ok(walk.graph)
}
