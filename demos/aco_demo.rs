//! Runs the colony optimizer on a random complete graph.
//!
//! ```text
//! RUST_LOG=u_antcolony=debug cargo run --example aco_demo
//! ```

use rand::Rng;
use tracing_subscriber::EnvFilter;
use u_antcolony::aco::{AcoConfig, AcoError, AcoRunner, WeightedGraph};

const NUM_VERTICES: usize = 16;

fn main() -> Result<(), AcoError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut rng = rand::rng();
    let mut graph = WeightedGraph::new(NUM_VERTICES)?;
    for u in 0..NUM_VERTICES {
        for v in (u + 1)..NUM_VERTICES {
            graph.add_edge(u, v, rng.random_range(1.0..10.0))?;
        }
    }

    println!("Edge lengths:");
    print!("    ");
    for v in 0..NUM_VERTICES {
        print!("{v:>6}");
    }
    println!();
    for u in 0..NUM_VERTICES {
        print!("{u:>3}:");
        for v in 0..NUM_VERTICES {
            if u == v {
                print!("{:>6}", "-");
            } else {
                print!("{:>6.2}", graph.distance(u, v));
            }
        }
        println!();
    }
    println!();

    let config = AcoConfig::default()
        .with_num_ants(10)
        .with_num_iterations(100)
        .with_alpha(1.0)
        .with_beta(2.0)
        .with_evaporation_rate(0.1)
        .with_q(10.0);

    let result = AcoRunner::run_with_observer(&mut graph, &config, |report| {
        println!(
            "Iteration {:>3}: {} | length {:.3}",
            report.iteration,
            format_path(report.best_path),
            report.best_length
        );
    })?;

    println!();
    println!("Best path:   {}", format_path(&result.best_path));
    println!("Best length: {:.3}", result.best_length);

    let ranking: Vec<String> = result
        .vertex_ranking()
        .iter()
        .map(|r| format!("{}({})", r.vertex, r.visits))
        .collect();
    println!("Vertex ranking (last iteration): {}", ranking.join(" "));

    Ok(())
}

fn format_path(path: &[usize]) -> String {
    path.iter()
        .map(usize::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}
