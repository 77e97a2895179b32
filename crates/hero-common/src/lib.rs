pub mod errors;
pub mod events;
pub mod types;

pub use errors::{ConfigError, HeroError};
pub use events::InteractionEvent;
pub use types::Color;

pub type Result<T> = std::result::Result<T, HeroError>;
