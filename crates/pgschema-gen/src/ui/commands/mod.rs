pub mod generate;

pub use generate::{GenerateConfig, generate_schema};
