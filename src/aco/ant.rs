//! Single-ant tour construction.

use super::error::AcoError;
use super::graph::WeightedGraph;
use super::sampling::sample_index;
use rand::Rng;

/// A tour-construction agent.
///
/// An ant starts on one vertex and repeatedly moves to an unvisited
/// neighbor, chosen with probability proportional to
/// `pheromone^alpha * (1 / distance)^beta`. Once no unvisited neighbor
/// remains the ant is terminal and further [`step`](Ant::step) calls do
/// nothing, so a tour on a non-complete graph may cover fewer than all
/// vertices.
///
/// The ant only reads the graph; all its buffers are sized to the vertex
/// count up front.
#[derive(Debug, Clone)]
pub struct Ant {
    current: usize,
    path: Vec<usize>,
    visited: Vec<bool>,
    length: f64,
    alpha: f64,
    beta: f64,
    candidates: Vec<usize>,
    weights: Vec<f64>,
}

impl Ant {
    /// Places a new ant on `start` in a graph of `num_vertices` vertices.
    pub fn new(start: usize, num_vertices: usize, alpha: f64, beta: f64) -> Result<Self, AcoError> {
        if start >= num_vertices {
            return Err(AcoError::VertexOutOfRange {
                vertex: start,
                num_vertices,
            });
        }
        let mut visited = vec![false; num_vertices];
        visited[start] = true;
        let mut path = Vec::with_capacity(num_vertices);
        path.push(start);
        Ok(Self {
            current: start,
            path,
            visited,
            length: 0.0,
            alpha,
            beta,
            candidates: Vec::with_capacity(num_vertices),
            weights: Vec::with_capacity(num_vertices),
        })
    }

    /// Moves to the next vertex. Returns `false` when the ant is terminal.
    pub fn step<R: Rng + ?Sized>(&mut self, graph: &WeightedGraph, rng: &mut R) -> bool {
        self.candidates.clear();
        self.weights.clear();

        for &next in graph.neighbors(self.current) {
            if self.visited[next] {
                continue;
            }
            let pheromone = graph.pheromone(self.current, next);
            let heuristic = 1.0 / graph.distance(self.current, next);
            self.candidates.push(next);
            self.weights
                .push(pheromone.powf(self.alpha) * heuristic.powf(self.beta));
        }

        let Some(choice) = sample_index(&self.weights, rng) else {
            return false;
        };
        let next = self.candidates[choice];
        self.length += graph.distance(self.current, next);
        self.path.push(next);
        self.visited[next] = true;
        self.current = next;
        true
    }

    /// Runs `steps` moves, stopping early once terminal.
    pub fn construct<R: Rng + ?Sized>(&mut self, graph: &WeightedGraph, steps: usize, rng: &mut R) {
        for _ in 0..steps {
            if !self.step(graph, rng) {
                break;
            }
        }
    }

    /// Vertex the ant currently occupies.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Vertices visited so far, starting with the start vertex.
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Sum of the distances travelled so far.
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Whether `vertex` is already on the path.
    pub fn has_visited(&self, vertex: usize) -> bool {
        self.visited[vertex]
    }

    /// Consumes the ant, returning its path and length.
    pub fn into_tour(self) -> (Vec<usize>, f64) {
        (self.path, self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use std::collections::HashSet;

    fn complete(n: usize) -> WeightedGraph {
        let mut graph = WeightedGraph::new(n).unwrap();
        for u in 0..n {
            for v in (u + 1)..n {
                graph.add_edge(u, v, (u + v + 1) as f64).unwrap();
            }
        }
        graph
    }

    #[test]
    fn test_new_ant_state() {
        let ant = Ant::new(2, 5, 1.0, 2.0).unwrap();
        assert_eq!(ant.current(), 2);
        assert_eq!(ant.path(), &[2]);
        assert_eq!(ant.length(), 0.0);
        assert!(ant.has_visited(2));
        assert!(!ant.has_visited(0));
    }

    #[test]
    fn test_complete_graph_visits_every_vertex_once() {
        let graph = complete(8);
        let mut rng = create_rng(42);
        for start in 0..8 {
            let mut ant = Ant::new(start, 8, 1.0, 2.0).unwrap();
            ant.construct(&graph, 7, &mut rng);

            let unique: HashSet<usize> = ant.path().iter().copied().collect();
            assert_eq!(ant.path().len(), 8);
            assert_eq!(unique.len(), 8);
            assert_eq!(ant.path()[0], start);
        }
    }

    #[test]
    fn test_length_matches_path_length() {
        let graph = complete(6);
        let mut rng = create_rng(3);
        let mut ant = Ant::new(0, 6, 1.0, 2.0).unwrap();
        ant.construct(&graph, 5, &mut rng);
        let expected = graph.path_length(ant.path()).unwrap();
        assert!((ant.length() - expected).abs() < 1e-12);
    }

    #[test]
    fn test_terminal_ant_stops_moving() {
        // 0 - 1 - 2 line: starting at 1 the ant goes to one end and is stuck.
        let graph = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (1, 2, 1.0)]).unwrap();
        let mut rng = create_rng(8);
        let mut ant = Ant::new(1, 3, 1.0, 2.0).unwrap();

        assert!(ant.step(&graph, &mut rng));
        assert!(!ant.step(&graph, &mut rng));
        assert!(!ant.step(&graph, &mut rng));
        assert_eq!(ant.path().len(), 2);
    }

    #[test]
    fn test_single_edge_is_deterministic() {
        let graph = WeightedGraph::from_edges(2, &[(0, 1, 5.0)]).unwrap();
        let mut rng = create_rng(0);
        let mut ant = Ant::new(1, 2, 1.0, 2.0).unwrap();
        ant.construct(&graph, 1, &mut rng);
        assert_eq!(ant.into_tour(), (vec![1, 0], 5.0));
    }

    #[test]
    fn test_short_edge_preferred_by_beta() {
        // From 0: edge to 1 has distance 1, edge to 2 has distance 10.
        // With beta = 2 and equal pheromone, P(1) = 1 / (1 + 0.01).
        let graph = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (0, 2, 10.0)]).unwrap();
        let mut rng = create_rng(42);
        let trials = 20_000;
        let mut to_near = 0;
        for _ in 0..trials {
            let mut ant = Ant::new(0, 3, 1.0, 2.0).unwrap();
            ant.step(&graph, &mut rng);
            if ant.current() == 1 {
                to_near += 1;
            }
        }
        let freq = to_near as f64 / trials as f64;
        let expected = 1.0 / 1.01;
        assert!((freq - expected).abs() < 0.01, "got {freq}, expected {expected}");
    }

    #[test]
    fn test_start_out_of_range_rejected() {
        assert_eq!(
            Ant::new(5, 5, 1.0, 2.0).unwrap_err(),
            AcoError::VertexOutOfRange {
                vertex: 5,
                num_vertices: 5
            }
        );
    }

    #[test]
    fn test_overflowing_heuristic_picks_shortest_edge() {
        // (1 / 1e-200)^2 overflows to +inf; that edge must win every draw.
        let graph =
            WeightedGraph::from_edges(3, &[(0, 1, 1e-200), (0, 2, 1.0), (1, 2, 1.0)]).unwrap();
        let mut rng = create_rng(21);
        for _ in 0..1_000 {
            let mut ant = Ant::new(0, 3, 1.0, 2.0).unwrap();
            assert!(ant.step(&graph, &mut rng));
            assert_eq!(ant.current(), 1);
        }
    }

    #[test]
    fn test_overflowing_pheromone_picks_reinforced_edge() {
        let mut graph = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (0, 2, 1.0)]).unwrap();
        graph.reinforce_pheromone(&[vec![0, 2]], 1e10);
        let mut rng = create_rng(22);
        for _ in 0..1_000 {
            // 5e9^40 overflows; 1^40 stays finite.
            let mut ant = Ant::new(0, 3, 40.0, 1.0).unwrap();
            assert!(ant.step(&graph, &mut rng));
            assert_eq!(ant.current(), 2);
        }
    }

    #[test]
    fn test_zero_pheromone_falls_back_to_uniform() {
        let mut graph = WeightedGraph::from_edges(3, &[(0, 1, 1.0), (0, 2, 10.0)]).unwrap();
        graph.evaporate_pheromone(1.0).unwrap();
        let mut rng = create_rng(5);
        let trials = 20_000;
        let mut to_near = 0;
        for _ in 0..trials {
            let mut ant = Ant::new(0, 3, 1.0, 2.0).unwrap();
            assert!(ant.step(&graph, &mut rng));
            if ant.current() == 1 {
                to_near += 1;
            }
        }
        let freq = to_near as f64 / trials as f64;
        assert!((freq - 0.5).abs() < 0.02, "expected uniform, got {freq}");
    }
}
