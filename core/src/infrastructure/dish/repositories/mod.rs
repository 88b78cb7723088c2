pub mod dish_repository;

pub use dish_repository::PostgresDishRepository;
