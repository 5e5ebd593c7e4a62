pub mod admission;
pub mod commands;
pub mod model;
