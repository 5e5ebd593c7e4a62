pub mod commands;
pub mod datetime;
pub mod lifecycle;
pub mod model;
pub mod validation;
