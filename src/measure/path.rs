//! Greedy nearest-endpoint chaining of selected edges.
//!
//! This is not a graph traversal: branching or disconnected selections come
//! out as one arbitrary-but-deterministic sequence, with a jump wherever no
//! edge lies within the chaining tolerance.

use tracing::debug;

use crate::math::Point3;
use crate::topology::EdgeId;

use super::{CurveDescriptor, MeasureParams};

/// A selected edge with its geometry resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEdge {
    pub id: EdgeId,
    pub start: Point3,
    pub end: Point3,
    pub curve: CurveDescriptor,
    pub length: f64,
}

impl PathEdge {
    /// Distance from `point` to the nearer endpoint.
    #[must_use]
    pub fn distance_to(&self, point: &Point3) -> f64 {
        (self.start - point).norm().min((self.end - point).norm())
    }
}

/// One step of the reconstructed path.
///
/// `forward` is the chainer's own orientation guess; point emission
/// re-derives the traversal direction from the emitted positions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChainLink {
    pub edge: PathEdge,
    pub forward: bool,
}

/// Orders `edges` into a single chain, each edge used exactly once.
///
/// The first edge seeds the chain. Its end that touches another edge
/// (within `probe_tolerance`) becomes the open chain end. Each step then
/// attaches the pool edge with the nearest endpoint if it lies within
/// `chain_tolerance`, else jumps to the first remaining edge.
#[must_use]
pub fn reconstruct(edges: &[PathEdge], params: &MeasureParams) -> Vec<ChainLink> {
    let Some((seed, rest)) = edges.split_first() else {
        return Vec::new();
    };
    let mut pool: Vec<&PathEdge> = rest.iter().collect();
    let mut chain = Vec::with_capacity(edges.len());

    let seed_forward =
        pool.is_empty() || pool.iter().any(|e| e.distance_to(&seed.end) < params.probe_tolerance);
    let mut chain_end = if seed_forward { seed.end } else { seed.start };
    chain.push(ChainLink {
        edge: seed.clone(),
        forward: seed_forward,
    });

    while !pool.is_empty() {
        let mut best_dist = f64::INFINITY;
        let mut best_index = 0;
        for (index, edge) in pool.iter().enumerate() {
            let d1 = (edge.start - chain_end).norm();
            let d2 = (edge.end - chain_end).norm();
            if d1 < best_dist {
                best_dist = d1;
                best_index = index;
            }
            if d2 < best_dist {
                best_dist = d2;
                best_index = index;
            }
        }

        let (edge, forward) = if best_dist < params.chain_tolerance {
            let edge = pool.remove(best_index);
            let forward = (chain_end - edge.start).norm() < (chain_end - edge.end).norm();
            (edge, forward)
        } else {
            debug!(gap = best_dist, "no edge near chain end, jumping");
            (pool.remove(0), true)
        };
        chain_end = if forward { edge.end } else { edge.start };
        chain.push(ChainLink {
            edge: edge.clone(),
            forward,
        });
    }

    chain
}
