use std::collections::VecDeque;

use ordermap::{OrderMap, OrderSet};
use petgraph::algo::{has_path_connecting, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::OrderError;

/// Character precedence constraints read off a sorted word list.
#[derive(Debug, Clone, Default)]
pub struct Precedence {
    /// Stable order-of-appearance (OOA): char -> idx
    idx: OrderMap<char, usize>,
    /// Reverse index: idx -> char
    keys: Vec<char>,
    /// Successors in insertion order
    succ: Vec<OrderSet<usize>>,
    /// Number of distinct predecessors per idx
    indeg: Vec<usize>,
}

/// Serializable summary of one inference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderReport {
    pub order: String,
    pub edges: Vec<(char, char)>,
    pub ambiguities: Vec<(char, char)>,
    pub unique: bool,
}

impl Precedence {
    pub fn new() -> Self {
        Self::default()
    }

    fn add_key(&mut self, c: char) -> usize {
        if let Some(&i) = self.idx.get(&c) {
            return i;
        }
        let i = self.keys.len();
        self.idx.insert(c, i);
        self.keys.push(c);
        self.succ.push(OrderSet::new());
        self.indeg.push(0);
        i
    }

    /// Records `i -> j`. Returns false if the edge was already present.
    fn add_edge(&mut self, i: usize, j: usize) -> bool {
        if i == j || !self.succ[i].insert(j) {
            return false;
        }
        self.indeg[j] += 1;
        true
    }

    /// Builds the graph from words assumed sorted in the unknown alphabet.
    ///
    /// Each adjacent pair contributes at most one edge, from the first
    /// position where the two words differ. Fails if a word is followed by
    /// a strict prefix of itself.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Result<Self, OrderError> {
        let mut p = Precedence::new();
        for word in words {
            for c in word.as_ref().chars() {
                let _ = p.add_key(c);
            }
        }

        for (index, pair) in words.windows(2).enumerate() {
            let (earlier, later) = (pair[0].as_ref(), pair[1].as_ref());
            if earlier.len() > later.len() && earlier.starts_with(later) {
                warn!(index, earlier, later, "prefix contradiction");
                return Err(OrderError::ContradictoryPrefix {
                    index,
                    earlier: earlier.to_owned(),
                    later: later.to_owned(),
                });
            }
            let first_diff = earlier
                .chars()
                .zip(later.chars())
                .find(|(a, b)| a != b);
            if let Some((a, b)) = first_diff {
                let (u, v) = (p.idx[&a], p.idx[&b]);
                if p.add_edge(u, v) {
                    debug!(from = %a, to = %b, "recorded precedence edge");
                }
            }
        }
        Ok(p)
    }

    /// Characters in the order they were first seen.
    pub fn alphabet(&self) -> &[char] {
        &self.keys
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn in_degree(&self, c: char) -> Option<usize> {
        self.idx.get(&c).map(|&i| self.indeg[i])
    }

    /// All recorded edges, grouped by source in discovery order.
    pub fn edges(&self) -> Vec<(char, char)> {
        self.succ
            .iter()
            .enumerate()
            .flat_map(|(u, vs)| vs.iter().map(move |&v| (u, v)))
            .map(|(u, v)| (self.keys[u], self.keys[v]))
            .collect()
    }

    /// Produce one deterministic topological order (Kahn's algorithm).
    ///
    /// Ready characters are taken first-in first-out, seeded in discovery
    /// order, so ties resolve to whichever character appeared first.
    pub fn topo_one(&self) -> Result<String, OrderError> {
        let n = self.keys.len();
        let mut indeg = self.indeg.clone();
        let mut queue: VecDeque<usize> = (0..n).filter(|&i| indeg[i] == 0).collect();
        let mut placed = vec![false; n];
        let mut out = String::with_capacity(n);
        let mut count = 0;

        while let Some(u) = queue.pop_front() {
            out.push(self.keys[u]);
            placed[u] = true;
            count += 1;
            for &v in &self.succ[u] {
                indeg[v] -= 1;
                if indeg[v] == 0 {
                    queue.push_back(v);
                }
            }
        }

        if count != n {
            let unplaced: Vec<char> = (0..n)
                .filter(|&i| !placed[i])
                .map(|i| self.keys[i])
                .collect();
            let cycles = self.cycles();
            warn!(?cycles, unplaced = unplaced.len(), "cycle detected");
            return Err(OrderError::CyclicConstraints { unplaced, cycles });
        }
        debug!(order = %out, "inferred order");
        Ok(out)
    }

    /// A petgraph view; node `i` holds the `i`-th discovered character.
    pub fn to_graph(&self) -> DiGraph<char, ()> {
        let mut g: DiGraph<char, ()> = DiGraph::with_capacity(self.keys.len(), 0);
        let nodes: Vec<NodeIndex> = self.keys.iter().map(|&c| g.add_node(c)).collect();
        for (u, vs) in self.succ.iter().enumerate() {
            for &v in vs {
                g.add_edge(nodes[u], nodes[v], ());
            }
        }
        g
    }

    /// Strongly connected components of size > 1, each sorted by discovery
    /// order, the list sorted by first member.
    pub fn cycles(&self) -> Vec<Vec<char>> {
        let g = self.to_graph();
        let mut comps: Vec<Vec<usize>> = tarjan_scc(&g)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut members: Vec<usize> = scc.into_iter().map(|ix| ix.index()).collect();
                members.sort_unstable();
                members
            })
            .collect();
        comps.sort_unstable_by_key(|members| members[0]);
        comps
            .into_iter()
            .map(|members| members.into_iter().map(|i| self.keys[i]).collect())
            .collect()
    }

    /// Pairs `(a, b)`, `a` seen before `b`, that no chain of edges relates.
    pub fn ambiguities(&self) -> Vec<(char, char)> {
        let g = self.to_graph();
        let n = self.keys.len();
        let mut amb = Vec::new();
        for i in 0..n {
            for j in (i + 1)..n {
                let (a, b) = (NodeIndex::new(i), NodeIndex::new(j));
                if !has_path_connecting(&g, a, b, None) && !has_path_connecting(&g, b, a, None) {
                    amb.push((self.keys[i], self.keys[j]));
                }
            }
        }
        amb
    }

    /// True when the words pin down exactly one order.
    pub fn is_unique(&self) -> bool {
        self.topo_one().is_ok() && self.ambiguities().is_empty()
    }

    /// Hasse edges: recorded edges not implied by a longer path.
    pub fn cover_edges(&self) -> Vec<(char, char)> {
        let g = self.to_graph();
        let mut cover = Vec::new();
        for (u, vs) in self.succ.iter().enumerate() {
            for &v in vs {
                // Drop u→v and see if v is still reachable from u.
                let mut g2 = g.clone();
                let (from, to) = (NodeIndex::new(u), NodeIndex::new(v));
                if let Some(eid) = g2.find_edge(from, to) {
                    g2.remove_edge(eid);
                }
                if !has_path_connecting(&g2, from, to, None) {
                    cover.push((self.keys[u], self.keys[v]));
                }
            }
        }
        cover
    }

    pub fn report(&self) -> Result<OrderReport, OrderError> {
        let order = self.topo_one()?;
        let ambiguities = self.ambiguities();
        Ok(OrderReport {
            order,
            edges: self.edges(),
            unique: ambiguities.is_empty(),
            ambiguities,
        })
    }
}
