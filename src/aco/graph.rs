//! Weighted undirected graph carrying the pheromone trail.
//!
//! [`WeightedGraph`] owns every piece of state the colony shares: the
//! adjacency lists, the distance matrix, and the pheromone matrix. Ants
//! borrow it immutably while constructing tours; only the runner mutates
//! the pheromone matrix, and only between construction phases.

use super::error::AcoError;

/// Initial pheromone level on every vertex pair.
pub const INITIAL_PHEROMONE: f64 = 1.0;

/// Distance reported for vertex pairs without an explicit edge.
pub const DEFAULT_DISTANCE: f64 = 1.0;

/// An undirected graph with symmetric distance and pheromone matrices.
///
/// Both matrices are stored row-major in a flat buffer of
/// `num_vertices * num_vertices` entries. Every write touches both
/// `(u, v)` and `(v, u)`, so symmetry holds by construction.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::WeightedGraph;
///
/// let mut graph = WeightedGraph::new(3).unwrap();
/// graph.add_edge(0, 1, 2.0).unwrap();
/// graph.add_edge(1, 2, 3.0).unwrap();
///
/// assert_eq!(graph.neighbors(1), &[0, 2]);
/// assert_eq!(graph.path_length(&[0, 1, 2]).unwrap(), 5.0);
/// ```
#[derive(Debug, Clone)]
pub struct WeightedGraph {
    num_vertices: usize,
    adjacency: Vec<Vec<usize>>,
    distances: Vec<f64>,
    pheromones: Vec<f64>,
}

impl WeightedGraph {
    /// Creates a graph with `num_vertices` vertices and no edges.
    pub fn new(num_vertices: usize) -> Result<Self, AcoError> {
        if num_vertices == 0 {
            return Err(AcoError::EmptyGraph);
        }
        let cells = num_vertices * num_vertices;
        Ok(Self {
            num_vertices,
            adjacency: vec![Vec::new(); num_vertices],
            distances: vec![DEFAULT_DISTANCE; cells],
            pheromones: vec![INITIAL_PHEROMONE; cells],
        })
    }

    /// Builds a graph from `(u, v, distance)` triples.
    pub fn from_edges(num_vertices: usize, edges: &[(usize, usize, f64)]) -> Result<Self, AcoError> {
        let mut graph = Self::new(num_vertices)?;
        for &(u, v, distance) in edges {
            graph.add_edge(u, v, distance)?;
        }
        Ok(graph)
    }

    /// Adds an undirected edge.
    ///
    /// Adding the same pair twice keeps a single adjacency entry in each
    /// direction and overwrites the distance with the latest value.
    pub fn add_edge(&mut self, u: usize, v: usize, distance: f64) -> Result<(), AcoError> {
        self.check_vertex(u)?;
        self.check_vertex(v)?;
        if u == v {
            return Err(AcoError::SelfLoop(u));
        }
        if !distance.is_finite() || distance <= 0.0 {
            return Err(AcoError::InvalidDistance { u, v, distance });
        }

        if !self.adjacency[u].contains(&v) {
            self.adjacency[u].push(v);
            self.adjacency[v].push(u);
        }
        let (uv, vu) = (self.index(u, v), self.index(v, u));
        self.distances[uv] = distance;
        self.distances[vu] = distance;
        Ok(())
    }

    /// Number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.num_vertices
    }

    /// Number of distinct undirected edges.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum::<usize>() / 2
    }

    /// Neighbors of `vertex`, in insertion order.
    ///
    /// # Panics
    /// Panics if `vertex` is out of range.
    pub fn neighbors(&self, vertex: usize) -> &[usize] {
        &self.adjacency[vertex]
    }

    /// Distance between `u` and `v` ([`DEFAULT_DISTANCE`] when no edge was set).
    pub fn distance(&self, u: usize, v: usize) -> f64 {
        self.distances[self.index(u, v)]
    }

    /// Current pheromone level between `u` and `v`.
    pub fn pheromone(&self, u: usize, v: usize) -> f64 {
        self.pheromones[self.index(u, v)]
    }

    /// Resets every pheromone entry to `value`, which must be finite and positive.
    pub fn reset_pheromone(&mut self, value: f64) -> Result<(), AcoError> {
        if !value.is_finite() || value <= 0.0 {
            return Err(AcoError::InvalidConfig(format!(
                "pheromone level must be finite and positive, got {value}"
            )));
        }
        self.pheromones.fill(value);
        Ok(())
    }

    /// Multiplies every pheromone entry by `1 - rate`.
    ///
    /// Uniform scaling keeps the matrix symmetric. A rate outside `[0, 1]`
    /// is rejected and leaves the trail untouched.
    pub fn evaporate_pheromone(&mut self, rate: f64) -> Result<(), AcoError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(AcoError::InvalidConfig(format!(
                "evaporation_rate must be in [0, 1], got {rate}"
            )));
        }
        let retain = 1.0 - rate;
        for p in &mut self.pheromones {
            *p *= retain;
        }
        Ok(())
    }

    /// Deposits `q / tour.len()` on every consecutive edge of every tour.
    ///
    /// Deposits go to both directions of each edge and accumulate when
    /// several tours share an edge. Empty tours are skipped.
    pub fn reinforce_pheromone<T: AsRef<[usize]>>(&mut self, tours: &[T], q: f64) {
        for tour in tours {
            let tour = tour.as_ref();
            if tour.is_empty() {
                continue;
            }
            let contribution = q / tour.len() as f64;
            for edge in tour.windows(2) {
                let (uv, vu) = (self.index(edge[0], edge[1]), self.index(edge[1], edge[0]));
                self.pheromones[uv] += contribution;
                self.pheromones[vu] += contribution;
            }
        }
    }

    /// Sums the distances along consecutive vertices of `path`.
    pub fn path_length(&self, path: &[usize]) -> Result<f64, AcoError> {
        if path.len() < 2 {
            return Err(AcoError::DegeneratePath(path.len()));
        }
        for &v in path {
            self.check_vertex(v)?;
        }
        Ok(path.windows(2).map(|w| self.distance(w[0], w[1])).sum())
    }

    /// Rejects graphs where some vertex has no incident edge.
    pub fn ensure_no_isolated_vertices(&self) -> Result<(), AcoError> {
        match self.adjacency.iter().position(Vec::is_empty) {
            Some(vertex) => Err(AcoError::IsolatedVertex(vertex)),
            None => Ok(()),
        }
    }

    pub(crate) fn check_vertex(&self, vertex: usize) -> Result<(), AcoError> {
        if vertex < self.num_vertices {
            Ok(())
        } else {
            Err(AcoError::VertexOutOfRange {
                vertex,
                num_vertices: self.num_vertices,
            })
        }
    }

    #[inline]
    fn index(&self, u: usize, v: usize) -> usize {
        u * self.num_vertices + v
    }
}
