#![forbid(unsafe_code)]

//! Core: the bounded Game of Life grid and its transition rules.
//!
//! Everything in this crate is a deterministic function of its inputs. A
//! [`Grid`] is an immutable value: operations return a fresh grid and leave
//! the input untouched, so callers can detect change with plain `==`.

pub mod grid;
pub mod rules;

pub use grid::{CellIndex, Grid, LIFE_FACTOR};
pub use rules::{neighbor_indices, next_grid, should_live};
