//! Property-based tests for Kruskal's minimum spanning forest.
//!
//! Compares total weights against an independent Prim oracle and checks the
//! structural invariants of the forest (acyclicity, edge count per
//! component, determinism) across several graph shapes.

mod oracle;
mod strategies;
mod structural;
