pub mod aggregate;

pub use aggregate::{PreorderDto, PreorderId};
