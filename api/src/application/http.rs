pub mod dish;
pub mod health;
pub mod scan;
pub mod server;
