//! Graph metrics over adjacency-list and adjacency-matrix representations.
//!
//! The two representations describe the same edge set. [`GraphView`] is the
//! shared capability (vertex count, per-vertex degree, neighbour iteration)
//! and every metric in this module is generic over it, so each metric is
//! written once instead of once per representation.
//!
//! Undirected graphs are stored with every edge present twice, once from
//! each endpoint. The undirected metrics rely on that convention; handing
//! them an asymmetric graph produces a meaningless result.
//!
//! # Examples
//!
//! ```
//! use dsa::graph::{self, AdjacencyList};
//!
//! // A triangle: every vertex neighbours the other two.
//! let triangle = AdjacencyList::new(vec![vec![1, 2], vec![0, 2], vec![0, 1]]).unwrap();
//!
//! assert_eq!(graph::count_vertices_undirected(&triangle), 3);
//! assert_eq!(graph::count_edges_undirected(&triangle), 3);
//! assert_eq!(graph::count_odd_degree_vertices(&triangle), 3);
//! ```

use crate::error::GraphError;

/// Read access to a graph, independent of how its edges are stored.
///
/// Implementations never expose mutation; every metric below is a pure
/// function of the view it is handed.
pub trait GraphView {
    /// The number of vertices. Vertices are labelled `0..vertex_count()`
    /// with no gaps.
    fn vertex_count(&self) -> usize;

    /// The number of neighbours of `v` (its out-degree in a directed graph).
    fn degree(&self, v: usize) -> usize;

    /// The neighbours of `v`, in storage order.
    fn neighbours(&self, v: usize) -> Box<dyn Iterator<Item = usize> + '_>;
}

/// A graph stored as one neighbour sequence per vertex.
///
/// Entry `v` of the outer `Vec` holds the vertices reachable from `v`. An
/// undirected edge appears in both endpoints' sequences.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyList {
    adj: Vec<Vec<usize>>,
}

impl AdjacencyList {
    /// Builds an adjacency list from raw neighbour sequences.
    ///
    /// Fails with [`GraphError::NeighbourOutOfRange`] if any entry references
    /// a vertex id at or beyond the number of sequences.
    ///
    /// # Examples
    ///
    /// ```
    /// use dsa::graph::AdjacencyList;
    ///
    /// assert!(AdjacencyList::new(vec![vec![1], vec![0]]).is_ok());
    /// assert!(AdjacencyList::new(vec![vec![7], vec![0]]).is_err());
    /// ```
    pub fn new(adj: Vec<Vec<usize>>) -> Result<Self, GraphError> {
        let order = adj.len();
        for (vertex, neighbours) in adj.iter().enumerate() {
            if let Some(&neighbour) = neighbours.iter().find(|&&n| n >= order) {
                return Err(GraphError::NeighbourOutOfRange {
                    vertex,
                    neighbour,
                    order,
                });
            }
        }
        Ok(Self { adj })
    }

    /// Converts to the matrix representation of the same edge set.
    ///
    /// Cells without an edge default to `false`; a 0/1 graph round-trips
    /// exactly through [`AdjacencyMatrix::to_list`] and back.
    pub fn to_matrix(&self) -> AdjacencyMatrix {
        let order = self.adj.len();
        let mut rows = vec![vec![false; order]; order];
        for (vertex, neighbours) in self.adj.iter().enumerate() {
            for &neighbour in neighbours {
                rows[vertex][neighbour] = true;
            }
        }
        AdjacencyMatrix { rows }
    }
}

impl GraphView for AdjacencyList {
    fn vertex_count(&self) -> usize {
        self.adj.len()
    }

    fn degree(&self, v: usize) -> usize {
        self.adj[v].len()
    }

    fn neighbours(&self, v: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(self.adj[v].iter().copied())
    }
}

/// A graph stored as a square boolean grid.
///
/// Cell `(i, j)` marks an edge from `i` to `j`. An undirected graph stores a
/// symmetric grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<bool>>,
}

impl AdjacencyMatrix {
    /// Builds an adjacency matrix from raw rows.
    ///
    /// Fails with [`GraphError::NotSquare`] if any row's width differs from
    /// the number of rows.
    pub fn new(rows: Vec<Vec<bool>>) -> Result<Self, GraphError> {
        let order = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != order {
                return Err(GraphError::NotSquare {
                    row,
                    width: cells.len(),
                    order,
                });
            }
        }
        Ok(Self { rows })
    }

    /// Whether there is an edge from `i` to `j`.
    pub fn has_edge(&self, i: usize, j: usize) -> bool {
        self.rows[i][j]
    }

    /// The transpose: every edge `(i, j)` becomes `(j, i)`.
    ///
    /// Self-loops sit on the diagonal and are unchanged; a bidirectional
    /// pair is symmetric and maps onto itself.
    pub fn transposed(&self) -> Self {
        let order = self.rows.len();
        let rows = (0..order)
            .map(|i| (0..order).map(|j| self.rows[j][i]).collect())
            .collect();
        Self { rows }
    }

    /// Converts to the list representation of the same edge set.
    pub fn to_list(&self) -> AdjacencyList {
        let adj = self
            .rows
            .iter()
            .map(|cells| {
                cells
                    .iter()
                    .enumerate()
                    .filter_map(|(j, &edge)| edge.then_some(j))
                    .collect()
            })
            .collect();
        AdjacencyList { adj }
    }
}

impl GraphView for AdjacencyMatrix {
    fn vertex_count(&self) -> usize {
        self.rows.len()
    }

    fn degree(&self, v: usize) -> usize {
        self.rows[v].iter().filter(|&&edge| edge).count()
    }

    fn neighbours(&self, v: usize) -> Box<dyn Iterator<Item = usize> + '_> {
        Box::new(
            self.rows[v]
                .iter()
                .enumerate()
                .filter_map(|(j, &edge)| edge.then_some(j)),
        )
    }
}

/// Counts the vertices of an undirected graph.
pub fn count_vertices_undirected(graph: &impl GraphView) -> usize {
    graph.vertex_count()
}

/// Counts the vertices of a directed graph.
///
/// Identical to [`count_vertices_undirected`]; both names exist so that the
/// directed and undirected exercise sets mirror each other.
pub fn count_vertices_directed(graph: &impl GraphView) -> usize {
    graph.vertex_count()
}

/// Counts the edges of an undirected graph.
///
/// Every undirected edge is stored twice, so this is half the degree sum.
/// The caller must guarantee the graph is genuinely symmetric.
pub fn count_edges_undirected(graph: &impl GraphView) -> usize {
    degree_sum(graph) / 2
}

/// Counts the edges of a directed graph: the raw degree sum.
pub fn count_edges_directed(graph: &impl GraphView) -> usize {
    degree_sum(graph)
}

/// Counts the vertices with an odd number of neighbours.
///
/// By the handshake lemma this is always even for an undirected graph.
pub fn count_odd_degree_vertices(graph: &impl GraphView) -> usize {
    (0..graph.vertex_count())
        .filter(|&v| graph.degree(v) % 2 != 0)
        .count()
}

/// Reverses every edge of a directed graph: `(i, j)` becomes `(j, i)`.
pub fn invert_directed(matrix: &AdjacencyMatrix) -> AdjacencyMatrix {
    matrix.transposed()
}

fn degree_sum(graph: &impl GraphView) -> usize {
    (0..graph.vertex_count()).map(|v| graph.degree(v)).sum()
}
