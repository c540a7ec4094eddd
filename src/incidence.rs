//! Per-vertex incident-edge runs.
//!
//! Every edge of a graph is listed in one shared arena of run nodes.  Each
//! vertex with incident edges owns a singly linked chain of nodes (its run);
//! the head of the chain is recorded in a table indexed by the vertex's slot.
//! `next == None` marks the end of a run, and a vertex with no incident edges
//! has no head at all, so an empty run is never stored.
//!
//! A non-self-loop edge is listed in the runs of both of its vertices, a
//! self-loop in the run of its one vertex, once.

use crate::{
    ids::{EdgeKey, VertexKey},
    tracing_support::trace,
};

#[derive(Clone, Copy, Debug)]
struct RunNode {
    edge: EdgeKey,
    next: Option<u32>,
}

#[derive(Clone, Copy, Debug)]
enum NodeSlot {
    Used(RunNode),
    Free { next_free: Option<u32> },
}

/// Where a vertex's run starts.  The vertex is recorded so that a head left
/// behind for a removed vertex can never be read through a newer vertex
/// occupying the same slot.
#[derive(Clone, Copy, Debug)]
struct RunHead {
    vertex: VertexKey,
    first: u32,
}

#[derive(Clone, Debug, Default)]
pub(crate) struct Runs {
    nodes: Vec<NodeSlot>,
    free_head: Option<u32>,
    live_nodes: usize,
    heads: Vec<Option<RunHead>>,
}

impl Runs {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of run nodes in use across all runs.
    pub fn live_nodes(&self) -> usize {
        self.live_nodes
    }

    #[cfg(test)]
    pub fn has_run(&self, vertex: VertexKey) -> bool {
        self.head(vertex).is_some()
    }

    /// Lists `edge` in the run of `vertex`.  The new node becomes the head of
    /// the run, so runs are ordered last-added-first.  O(1).
    pub fn add_to_group(&mut self, vertex: VertexKey, edge: EdgeKey) {
        let next = self.head(vertex);
        let index = self.alloc(RunNode { edge, next });
        let slot = vertex.key().index();
        if self.heads.len() <= slot {
            self.heads.resize(slot + 1, None);
        }
        self.heads[slot] = Some(RunHead {
            vertex,
            first: index,
        });
        trace!(?vertex, ?edge, index, "spliced run node");
    }

    /// Unlists `edge` from the run of `vertex`.  Removing the last node of a
    /// run drops the run altogether.  Returns false if the edge is not in the
    /// run.  O(degree).
    pub fn remove_from_group(&mut self, vertex: VertexKey, edge: EdgeKey) -> bool {
        let Some(first) = self.head(vertex) else {
            return false;
        };
        let mut prev: Option<u32> = None;
        let mut current = Some(first);
        while let Some(index) = current {
            let node = self.node(index);
            if node.edge == edge {
                match prev {
                    Some(prev) => self.node_mut(prev).next = node.next,
                    None => {
                        let slot = vertex.key().index();
                        self.heads[slot] = node.next.map(|first| RunHead { vertex, first });
                    }
                }
                self.release(index);
                trace!(?vertex, ?edge, index, "unspliced run node");
                return true;
            }
            prev = Some(index);
            current = node.next;
        }
        false
    }

    /// Returns true if `edge` is listed in the run of `vertex`.  O(degree).
    pub fn run_contains(&self, vertex: VertexKey, edge: EdgeKey) -> bool {
        self.iter(vertex).any(|listed| listed == edge)
    }

    /// The edges in the run of `vertex`, head first.
    pub fn iter(&self, vertex: VertexKey) -> RunIter<'_> {
        RunIter {
            runs: self,
            current: self.head(vertex),
        }
    }

    /// The number of nodes in the run of `vertex`.
    pub fn len(&self, vertex: VertexKey) -> usize {
        self.iter(vertex).count()
    }

    /// Frees every node of the run of `vertex` and drops its head, returning
    /// the edges that were listed, head first.
    pub fn take_run(&mut self, vertex: VertexKey) -> Vec<EdgeKey> {
        let edges: Vec<EdgeKey> = self.iter(vertex).collect();
        let mut current = self.head(vertex);
        while let Some(index) = current {
            current = self.node(index).next;
            self.release(index);
        }
        if let Some(head) = self.heads.get_mut(vertex.key().index()) {
            *head = None;
        }
        edges
    }

    /// Drops every run and node.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.heads.clear();
        self.free_head = None;
        self.live_nodes = 0;
    }

    /// The vertices that currently own a run, with the slot their head is
    /// recorded under.
    pub fn run_owners(&self) -> impl Iterator<Item = (usize, VertexKey)> + '_ {
        self.heads
            .iter()
            .enumerate()
            .filter_map(|(slot, head)| head.map(|head| (slot, head.vertex)))
    }

    fn head(&self, vertex: VertexKey) -> Option<u32> {
        match self.heads.get(vertex.key().index()) {
            Some(Some(head)) if head.vertex == vertex => Some(head.first),
            _ => None,
        }
    }

    fn node(&self, index: u32) -> RunNode {
        match self.nodes[index as usize] {
            NodeSlot::Used(node) => node,
            NodeSlot::Free { .. } => panic!("run reaches free node {index}"),
        }
    }

    fn node_mut(&mut self, index: u32) -> &mut RunNode {
        match &mut self.nodes[index as usize] {
            NodeSlot::Used(node) => node,
            NodeSlot::Free { .. } => panic!("run reaches free node {index}"),
        }
    }

    fn alloc(&mut self, node: RunNode) -> u32 {
        self.live_nodes += 1;
        match self.free_head {
            Some(index) => {
                let NodeSlot::Free { next_free } = self.nodes[index as usize] else {
                    panic!("corrupted run node free list at {index}");
                };
                self.free_head = next_free;
                self.nodes[index as usize] = NodeSlot::Used(node);
                index
            }
            None => {
                let index = u32::try_from(self.nodes.len()).expect("run node index overflow");
                self.nodes.push(NodeSlot::Used(node));
                index
            }
        }
    }

    fn release(&mut self, index: u32) {
        self.nodes[index as usize] = NodeSlot::Free {
            next_free: self.free_head,
        };
        self.free_head = Some(index);
        self.live_nodes -= 1;
    }
}

/// Walks one run from its head to its end marker.
pub(crate) struct RunIter<'a> {
    runs: &'a Runs,
    current: Option<u32>,
}

impl Iterator for RunIter<'_> {
    type Item = EdgeKey;

    fn next(&mut self) -> Option<EdgeKey> {
        let index = self.current?;
        let node = self.runs.node(index);
        self.current = node.next;
        Some(node.edge)
    }
}
