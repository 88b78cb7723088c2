pub mod classifier;
pub mod entities;
pub mod grouper;
pub mod normalizer;
pub mod ports;
pub mod services;
pub mod value_objects;

pub use classifier::classify;
pub use entities::*;
pub use ports::*;
pub use value_objects::*;
