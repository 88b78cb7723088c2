pub mod common;
pub mod dish;
pub mod health;
pub mod scan;
