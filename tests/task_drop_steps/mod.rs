//! Step definitions for drag and drop BDD scenarios.

pub mod world;

mod then;
mod when;
