pub mod db;
pub mod dish;
pub mod health;
