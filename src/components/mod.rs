//! Reusable view components.

pub mod particle_field;
