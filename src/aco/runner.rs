//! Colony optimization loop.
//!
//! [`AcoRunner`] alternates two phases every iteration:
//! construction (ants build tours against a read-only graph) and update
//! (evaporation, then reinforcement with that iteration's tours). The
//! update phase starts only after every tour of the iteration is
//! collected.

use super::ant::Ant;
use super::config::{AcoConfig, StartPolicy};
use super::error::AcoError;
use super::graph::WeightedGraph;
use super::ranking::{rank_vertices, VertexRank};
use crate::random::create_rng;
use rand::Rng;
use tracing::{debug, info};

/// Result of a colony optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// Best tour found over all iterations.
    pub best_path: Vec<usize>,

    /// Length of `best_path`.
    pub best_length: f64,

    /// Number of iterations executed.
    pub iterations: usize,

    /// Best length after each iteration. Non-increasing.
    pub length_history: Vec<f64>,

    /// Tours built during the last iteration.
    pub final_paths: Vec<Vec<usize>>,

    /// Vertex count of the graph the run optimized.
    pub num_vertices: usize,
}

impl AcoResult {
    /// Ranks every vertex of the graph by how many of the last iteration's
    /// tours visit it.
    pub fn vertex_ranking(&self) -> Vec<VertexRank> {
        rank_vertices(&self.final_paths, self.num_vertices)
    }
}

/// Progress snapshot passed to the observer after each iteration.
#[derive(Debug, Clone, Copy)]
pub struct IterationReport<'a> {
    /// One-based iteration index.
    pub iteration: usize,

    /// Best tour so far.
    pub best_path: &'a [usize],

    /// Length of the best tour so far.
    pub best_length: f64,

    /// Shortest tour built in this iteration alone.
    pub iteration_best_length: f64,
}

/// Executes the Ant Colony Optimization loop.
///
/// # Usage
///
/// ```
/// use u_antcolony::aco::{AcoConfig, AcoRunner, WeightedGraph};
///
/// let mut graph = WeightedGraph::from_edges(
///     4,
///     &[(0, 1, 1.0), (1, 2, 1.0), (2, 3, 1.0), (3, 0, 1.0)],
/// ).unwrap();
/// let config = AcoConfig::default()
///     .with_num_ants(5)
///     .with_num_iterations(10)
///     .with_seed(42);
///
/// let result = AcoRunner::run(&mut graph, &config).unwrap();
/// assert_eq!(result.best_length, 3.0);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the optimization, mutating the graph's pheromone trail in place.
    pub fn run(graph: &mut WeightedGraph, config: &AcoConfig) -> Result<AcoResult, AcoError> {
        Self::run_with_observer(graph, config, |_| {})
    }

    /// Runs the optimization, calling `observer` after each iteration.
    ///
    /// Configuration and graph are validated before the first iteration;
    /// once the loop starts it always runs `num_iterations` rounds.
    pub fn run_with_observer<F>(
        graph: &mut WeightedGraph,
        config: &AcoConfig,
        mut observer: F,
    ) -> Result<AcoResult, AcoError>
    where
        F: FnMut(&IterationReport<'_>),
    {
        config.validate()?;
        graph.ensure_no_isolated_vertices()?;
        if let StartPolicy::Fixed(vertex) = config.start {
            graph.check_vertex(vertex)?;
        }

        let seed = match config.seed {
            Some(seed) => seed,
            None => rand::random(),
        };
        let mut rng = create_rng(seed);

        info!(
            num_vertices = graph.num_vertices(),
            num_edges = graph.edge_count(),
            num_ants = config.num_ants,
            num_iterations = config.num_iterations,
            seed,
            "starting colony optimization"
        );

        let mut best_path = Vec::new();
        let mut best_length = f64::INFINITY;
        let mut length_history = Vec::with_capacity(config.num_iterations);
        let mut final_paths = Vec::new();

        for iteration in 1..=config.num_iterations {
            // One seed per ant keeps draws independent of evaluation order.
            let ant_seeds: Vec<u64> = (0..config.num_ants).map(|_| rng.random()).collect();
            let (paths, lengths): (Vec<Vec<usize>>, Vec<f64>) =
                construct_tours(graph, config, &ant_seeds)?.into_iter().unzip();

            graph.evaporate_pheromone(config.evaporation_rate)?;
            graph.reinforce_pheromone(&paths, config.q);

            let mut iteration_best_length = f64::INFINITY;
            for (path, &length) in paths.iter().zip(&lengths) {
                iteration_best_length = iteration_best_length.min(length);
                if length < best_length {
                    best_length = length;
                    best_path.clone_from(path);
                }
            }
            length_history.push(best_length);

            debug!(iteration, best_length, iteration_best_length, "iteration complete");
            observer(&IterationReport {
                iteration,
                best_path: &best_path,
                best_length,
                iteration_best_length,
            });

            final_paths = paths;
        }

        info!(best_length, path_len = best_path.len(), "colony optimization finished");

        Ok(AcoResult {
            best_path,
            best_length,
            iterations: config.num_iterations,
            length_history,
            final_paths,
            num_vertices: graph.num_vertices(),
        })
    }
}

/// Builds one tour per seed. The graph is only read here.
#[cfg(feature = "parallel")]
fn construct_tours(
    graph: &WeightedGraph,
    config: &AcoConfig,
    seeds: &[u64],
) -> Result<Vec<(Vec<usize>, f64)>, AcoError> {
    use rayon::prelude::*;

    if config.parallel {
        seeds
            .par_iter()
            .map(|&seed| build_tour(graph, config, seed))
            .collect()
    } else {
        seeds
            .iter()
            .map(|&seed| build_tour(graph, config, seed))
            .collect()
    }
}

#[cfg(not(feature = "parallel"))]
fn construct_tours(
    graph: &WeightedGraph,
    config: &AcoConfig,
    seeds: &[u64],
) -> Result<Vec<(Vec<usize>, f64)>, AcoError> {
    seeds
        .iter()
        .map(|&seed| build_tour(graph, config, seed))
        .collect()
}

fn build_tour(
    graph: &WeightedGraph,
    config: &AcoConfig,
    seed: u64,
) -> Result<(Vec<usize>, f64), AcoError> {
    let mut rng = create_rng(seed);
    let n = graph.num_vertices();
    let start = match config.start {
        StartPolicy::Random => rng.random_range(0..n),
        StartPolicy::Fixed(vertex) => vertex,
    };

    let mut ant = Ant::new(start, n, config.alpha, config.beta)?;
    ant.construct(graph, n - 1, &mut rng);
    Ok(ant.into_tour())
}
