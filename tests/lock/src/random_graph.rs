//! A directed weighted graph problem built from generated edge lists, plus
//! reference answers computed without the search engine.

use std::collections::VecDeque;

use wayfind_search::problem::Problem;

/// Directed multigraph over `0..node_count`, start `0`.
///
/// Actions are indices into the source node's edge list, so parallel edges
/// with different weights stay distinguishable.
#[derive(Debug, Clone)]
pub struct RandomGraph {
    edges: Vec<Vec<(usize, u32)>>,
    goal: usize,
    weighted: bool,
}

impl RandomGraph {
    /// Build from `(from, to, weight)` triples; endpoints outside
    /// `0..node_count` are dropped. A `goal` outside that range is never
    /// reached.
    #[must_use]
    pub fn new(node_count: usize, edges: &[(usize, usize, u32)], goal: usize) -> Self {
        let mut adjacency = vec![Vec::new(); node_count.max(1)];
        for &(from, to, weight) in edges {
            if from < adjacency.len() && to < adjacency.len() {
                adjacency[from].push((to, weight));
            }
        }
        Self {
            edges: adjacency,
            goal,
            weighted: false,
        }
    }

    /// Use edge weights as step costs instead of unit cost.
    #[must_use]
    pub fn weighted(mut self) -> Self {
        self.weighted = true;
        self
    }

    #[must_use]
    pub fn node_count(&self) -> usize {
        self.edges.len()
    }

    /// States reachable from the start, the start included.
    #[must_use]
    pub fn reachable_count(&self) -> usize {
        let mut seen = vec![false; self.edges.len()];
        seen[0] = true;
        let mut stack = vec![0usize];
        while let Some(node) = stack.pop() {
            for &(next, _) in &self.edges[node] {
                if !seen[next] {
                    seen[next] = true;
                    stack.push(next);
                }
            }
        }
        seen.into_iter().filter(|&s| s).count()
    }

    /// Fewest edges from the start to the goal.
    #[must_use]
    pub fn shortest_hops(&self) -> Option<u32> {
        let mut hops = vec![None; self.edges.len()];
        hops[0] = Some(0u32);
        let mut queue = VecDeque::from([0usize]);
        while let Some(node) = queue.pop_front() {
            let depth = hops[node]?;
            if node == self.goal {
                return Some(depth);
            }
            for &(next, _) in &self.edges[node] {
                if hops[next].is_none() {
                    hops[next] = Some(depth + 1);
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Cheapest total step cost from the start to the goal.
    #[must_use]
    pub fn cheapest_cost(&self) -> Option<f64> {
        let n = self.edges.len();
        let mut dist = vec![f64::INFINITY; n];
        let mut done = vec![false; n];
        dist[0] = 0.0;
        loop {
            let node = (0..n)
                .filter(|&i| !done[i] && dist[i].is_finite())
                .min_by(|&a, &b| dist[a].total_cmp(&dist[b]))?;
            if node == self.goal {
                return Some(dist[node]);
            }
            done[node] = true;
            for &(to, weight) in &self.edges[node] {
                let cost = dist[node] + self.cost_of(weight);
                if cost < dist[to] {
                    dist[to] = cost;
                }
            }
        }
    }

    fn cost_of(&self, weight: u32) -> f64 {
        if self.weighted {
            f64::from(weight)
        } else {
            1.0
        }
    }
}

impl Problem for RandomGraph {
    type State = usize;
    type Action = usize;

    fn initial_state(&self) -> usize {
        0
    }

    fn actions(&self, state: &usize) -> Vec<usize> {
        (0..self.edges[*state].len()).collect()
    }

    fn result(&self, state: &usize, action: &usize) -> usize {
        self.edges[*state][*action].0
    }

    fn step_cost(&self, from: &usize, action: &usize, _to: &usize) -> f64 {
        self.cost_of(self.edges[*from][*action].1)
    }

    fn is_goal(&self, state: &usize) -> bool {
        *state == self.goal
    }
}
