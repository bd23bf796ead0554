pub mod config;
pub mod error;
pub mod generators;
pub mod level;
pub mod maze;
pub mod solvers;

pub use config::GeneratorConfig;
pub use error::{ErrorKind, GenerationError};
pub use level::{LevelDescriptor, LevelTemplate, create_randomized_level, generate_level};
