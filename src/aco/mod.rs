//! Ant Colony Optimization (ACO).
//!
//! A population-based constructive metaheuristic. Each iteration, a colony
//! of ants builds tours over a [`WeightedGraph`], choosing every move with
//! probability proportional to `pheromone^alpha * (1 / distance)^beta`.
//! The pheromone trail then evaporates uniformly and is reinforced along
//! the tours just built, biasing later iterations toward short tours.
//!
//! # Key Types
//!
//! - [`WeightedGraph`]: Adjacency, distances, and the pheromone trail
//! - [`Ant`]: A single tour-construction agent
//! - [`AcoConfig`]: Colony parameters (builder style, validated up front)
//! - [`AcoRunner`]: Executes the construction/update loop
//! - [`AcoResult`]: Best tour, its length, and per-iteration history
//!
//! # Concurrency
//!
//! Ants only read the graph during construction. With the `parallel`
//! feature and [`AcoConfig::parallel`] set, tours are built on the rayon
//! pool; each ant owns an RNG seeded from the run's master RNG, so results
//! do not depend on scheduling.
//!
//! # References
//!
//! - Dorigo, Maniezzo & Colorni (1996), "Ant System: Optimization by a
//!   Colony of Cooperating Agents"
//! - Dorigo & Stützle (2004), *Ant Colony Optimization*

mod ant;
mod config;
mod error;
mod graph;
mod ranking;
mod runner;
mod sampling;

pub use ant::Ant;
pub use config::{AcoConfig, StartPolicy};
pub use error::AcoError;
pub use graph::{WeightedGraph, DEFAULT_DISTANCE, INITIAL_PHEROMONE};
pub use ranking::{rank_vertices, VertexRank};
pub use runner::{AcoResult, AcoRunner, IterationReport};
pub use sampling::sample_index;
