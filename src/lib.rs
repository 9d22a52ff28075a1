//! Exercise sets for an algorithms and data structures course, in two
//! independent halves.
//!
//! ## Graph metrics
//!
//! A graph can be described by an adjacency list (each vertex maps to the
//! sequence of its neighbours) or by an adjacency matrix (an `n`×`n` grid of
//! booleans where cell `(i, j)` marks an edge from `i` to `j`). Both carry
//! the same information: an undirected graph stores every edge twice, once
//! from each endpoint, while a directed graph stores each edge exactly once.
//! The [`graph`] module exposes both representations behind a single
//! [`GraphView`][graph::GraphView] capability and computes vertex counts,
//! edge counts (exploiting the double-storage convention), odd-degree vertex
//! counts, and edge-direction inversion.
//!
//! ## Binary search trees
//!
//! A Binary Search Tree is a binary tree in which, for every node, all values
//! in its left subtree are smaller than its own value and all values in its
//! right subtree are greater. Searching then takes `O(height)` steps (where
//! `height` is the longest path from the root to a leaf), and visiting the
//! left subtree, the node, and the right subtree in that order yields the
//! values in sorted order. The [`tree`] module implements the classic
//! operations: search with parent recovery, insertion, and deletion with
//! in-order-neighbour promotion. It also offers structure-only queries such
//! as leaf count and height that hold for any binary tree, ordered or not.
//! Trees render as ASCII art through their `Display` impl.

#![deny(missing_docs, clippy::clone_on_ref_ptr)]

pub mod error;
pub mod graph;
mod render;
pub mod tree;

pub use error::GraphError;
