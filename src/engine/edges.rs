use std::collections::HashMap;

#[derive(Debug, Clone, Copy, Default)]
struct EdgeUse {
    /// Traversals from the lower to the higher vertex index.
    forward: u32,
    /// Traversals from the higher to the lower vertex index.
    backward: u32,
}

/// Counts how often, and in which direction, face loops traverse each edge.
#[derive(Debug, Default)]
pub(crate) struct EdgeMap {
    uses: HashMap<(usize, usize), EdgeUse>,
}

impl EdgeMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Records every edge of a closed loop. Collapsed edges are ignored.
    pub(crate) fn add_loop(&mut self, indices: &[usize]) {
        let n = indices.len();
        for i in 0..n {
            let a = indices[i];
            let b = indices[(i + 1) % n];
            if a == b {
                continue;
            }
            let entry = self.uses.entry((a.min(b), a.max(b))).or_default();
            if a < b {
                entry.forward += 1;
            } else {
                entry.backward += 1;
            }
        }
    }

    /// Number of edges not shared by exactly two faces.
    pub(crate) fn naked_edge_count(&self) -> usize {
        self.uses
            .values()
            .filter(|u| u.forward + u.backward != 2)
            .count()
    }

    /// Every edge is shared by exactly two faces.
    pub(crate) fn is_closed(&self) -> bool {
        !self.uses.is_empty() && self.naked_edge_count() == 0
    }

    /// Every edge is shared by exactly two faces traversing it in opposite
    /// directions.
    pub(crate) fn is_closed_and_oriented(&self) -> bool {
        !self.uses.is_empty()
            && self
                .uses
                .values()
                .all(|u| u.forward == 1 && u.backward == 1)
    }
}
