use dsa::graph::{self, AdjacencyMatrix, GraphView};

use quickcheck::{Arbitrary, Gen};
use quickcheck_macros::quickcheck;

/// A random directed graph with a zeroed diagonal, together with the edge
/// and odd-out-degree counts tallied while generating it. Keeping the tally
/// separate from the representation gives the metrics an independent answer
/// to check against.
#[derive(Clone, Debug)]
struct DirectedGraph {
    rows: Vec<Vec<bool>>,
    edges: usize,
    odd: usize,
}

impl Arbitrary for DirectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = usize::arbitrary(g) % 12;
        let mut rows = vec![vec![false; order]; order];
        for (i, row) in rows.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = i != j && bool::arbitrary(g);
            }
        }

        let mut edges = 0;
        let mut odd = 0;
        for row in &rows {
            let degree = row.iter().filter(|&&edge| edge).count();
            edges += degree;
            if degree % 2 == 1 {
                odd += 1;
            }
        }
        Self { rows, edges, odd }
    }
}

/// A random undirected graph: symmetric rows, zeroed diagonal, and the
/// number of distinct edges (each stored twice) plus the odd-degree tally.
#[derive(Clone, Debug)]
struct UndirectedGraph {
    rows: Vec<Vec<bool>>,
    edges: usize,
    odd: usize,
}

impl Arbitrary for UndirectedGraph {
    fn arbitrary(g: &mut Gen) -> Self {
        let order = usize::arbitrary(g) % 12;
        let mut rows = vec![vec![false; order]; order];
        let mut edges = 0;
        for i in 0..order {
            for j in (i + 1)..order {
                if bool::arbitrary(g) {
                    rows[i][j] = true;
                    rows[j][i] = true;
                    edges += 1;
                }
            }
        }

        let odd = rows
            .iter()
            .filter(|row| row.iter().filter(|&&edge| edge).count() % 2 == 1)
            .count();
        Self { rows, edges, odd }
    }
}

fn matrix(rows: Vec<Vec<bool>>) -> AdjacencyMatrix {
    AdjacencyMatrix::new(rows).expect("generated rows are square")
}

#[quickcheck]
fn vertex_count_is_the_same_in_both_representations(g: DirectedGraph) -> bool {
    let order = g.rows.len();
    let m = matrix(g.rows);
    let l = m.to_list();

    graph::count_vertices_directed(&m) == order
        && graph::count_vertices_undirected(&m) == order
        && graph::count_vertices_directed(&l) == order
        && graph::count_vertices_undirected(&l) == order
}

#[quickcheck]
fn directed_edge_count_matches_the_generator(g: DirectedGraph) -> bool {
    let expected = g.edges;
    let m = matrix(g.rows);
    let l = m.to_list();

    graph::count_edges_directed(&m) == expected && graph::count_edges_directed(&l) == expected
}

#[quickcheck]
fn undirected_edge_count_matches_the_generator(g: UndirectedGraph) -> bool {
    let expected = g.edges;
    let m = matrix(g.rows);
    let l = m.to_list();

    graph::count_edges_undirected(&m) == expected
        && graph::count_edges_undirected(&l) == expected
}

#[quickcheck]
fn undirected_edges_are_half_the_directed_count(g: UndirectedGraph) -> bool {
    let m = matrix(g.rows);
    graph::count_edges_undirected(&m) == graph::count_edges_directed(&m) / 2
}

#[quickcheck]
fn odd_degree_count_matches_the_generator(g: UndirectedGraph) -> bool {
    let expected = g.odd;
    let m = matrix(g.rows);
    let l = m.to_list();

    graph::count_odd_degree_vertices(&m) == expected
        && graph::count_odd_degree_vertices(&l) == expected
}

#[quickcheck]
fn odd_out_degree_count_matches_the_generator(g: DirectedGraph) -> bool {
    let expected = g.odd;
    let m = matrix(g.rows);
    graph::count_odd_degree_vertices(&m) == expected
}

#[quickcheck]
fn matrix_round_trips_through_the_list_form(g: DirectedGraph) -> bool {
    let m = matrix(g.rows);
    m.to_list().to_matrix() == m
}

#[quickcheck]
fn inversion_swaps_every_edge(g: DirectedGraph) -> bool {
    let order = g.rows.len();
    let m = matrix(g.rows);
    let inverted = graph::invert_directed(&m);

    (0..order).all(|i| (0..order).all(|j| inverted.has_edge(j, i) == m.has_edge(i, j)))
}

#[quickcheck]
fn double_inversion_is_identity(g: DirectedGraph) -> bool {
    let m = matrix(g.rows);
    graph::invert_directed(&graph::invert_directed(&m)) == m
}

#[quickcheck]
fn inverting_a_symmetric_graph_changes_nothing(g: UndirectedGraph) -> bool {
    let m = matrix(g.rows);
    graph::invert_directed(&m) == m
}

#[quickcheck]
fn degrees_agree_across_representations(g: DirectedGraph) -> bool {
    let order = g.rows.len();
    let m = matrix(g.rows);
    let l = m.to_list();

    (0..order).all(|v| {
        m.degree(v) == l.degree(v)
            && m.neighbours(v).collect::<Vec<_>>() == l.neighbours(v).collect::<Vec<_>>()
    })
}
