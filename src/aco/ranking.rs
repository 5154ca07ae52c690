//! Vertex ranking by visit frequency.

/// A vertex and the number of tours that pass through it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexRank {
    pub vertex: usize,
    pub visits: usize,
}

/// Ranks vertices by how many tours contain them, most visited first.
///
/// A vertex counts once per tour even if a tour lists it twice. Ties are
/// broken by vertex index, ascending. Vertices `>= num_vertices` are
/// ignored.
///
/// # Examples
///
/// ```
/// use u_antcolony::aco::rank_vertices;
///
/// let tours = vec![vec![0, 1, 2], vec![1, 2], vec![2, 3]];
/// let ranked: Vec<usize> = rank_vertices(&tours, 4).iter().map(|r| r.vertex).collect();
/// assert_eq!(ranked, vec![2, 1, 0, 3]);
/// ```
pub fn rank_vertices<T: AsRef<[usize]>>(tours: &[T], num_vertices: usize) -> Vec<VertexRank> {
    let mut visits = vec![0usize; num_vertices];
    let mut seen = vec![false; num_vertices];

    for tour in tours {
        seen.fill(false);
        for &v in tour.as_ref() {
            if v < num_vertices && !seen[v] {
                seen[v] = true;
                visits[v] += 1;
            }
        }
    }

    let mut ranking: Vec<VertexRank> = visits
        .into_iter()
        .enumerate()
        .map(|(vertex, visits)| VertexRank { vertex, visits })
        .collect();
    // stable sort keeps ascending vertex order among ties
    ranking.sort_by(|a, b| b.visits.cmp(&a.visits));
    ranking
}
