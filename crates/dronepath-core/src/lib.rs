//! **dronepath-core**: occupancy grid model for drone route planning.
//!
//! This crate provides the foundational types used across the *dronepath*
//! workspace: the [`Cell`] coordinate, the closed [`CellKind`] alphabet, the
//! immutable [`Grid`] and the structural [`validate`] pass that approves raw
//! rows before a grid is built.

pub mod error;
pub mod geom;
pub mod grid;
pub mod kind;
pub mod validate;

pub use error::StructuralError;
pub use geom::Cell;
pub use grid::Grid;
pub use kind::CellKind;
pub use validate::{check, validate};
