pub mod aggregate;

pub use aggregate::{CategoryDto, CategoryId};
