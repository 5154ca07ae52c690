//! Ant Colony Optimization over weighted graphs.
//!
//! Provides a generic Ant System implementation:
//!
//! - **Graph**: undirected weighted graph holding a symmetric pheromone
//!   trail, validated at construction.
//! - **Ants**: stochastic tour construction under a visited-vertex
//!   constraint, with pheromone/heuristic weighted move selection.
//! - **Runner**: fixed-iteration construction/update loop with
//!   evaporation, reinforcement, and best-tour tracking.
//! - **Ranking**: visit-frequency ranking of vertices over a set of tours.
//!
//! # Example
//!
//! ```
//! use u_antcolony::aco::{AcoConfig, AcoRunner, WeightedGraph};
//!
//! let mut graph = WeightedGraph::from_edges(
//!     3,
//!     &[(0, 1, 2.0), (1, 2, 2.0), (0, 2, 5.0)],
//! ).unwrap();
//! let config = AcoConfig::default().with_num_iterations(20).with_seed(7);
//!
//! let result = AcoRunner::run(&mut graph, &config).unwrap();
//! assert_eq!(result.best_length, 4.0);
//! ```
//!
//! # Features
//!
//! - `parallel`: build tours on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for configuration and results.

pub mod aco;
pub mod random;
