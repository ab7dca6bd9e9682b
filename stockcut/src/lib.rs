//! Placement of rectangular components onto rectangular stock sheets.
//!
//! Components are laid out with a deterministic shelf heuristic: left to right until a row is
//! full, then a new row, then a new sheet. See [`shelf::place`].

/// Entities modelling sheets, components and the result of a placement run
pub mod entities;

/// Errors raised for invalid engine input
pub mod error;

/// Geometric primitives
pub mod geometry;

/// Importing instances into and exporting solutions out of this library
pub mod io;

/// The shelf placement engine
pub mod shelf;

/// Helper functions which do not belong to any specific module
pub mod util;
