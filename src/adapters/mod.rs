// Adapters layer: concrete implementations for external systems.

pub mod coursera;

pub use coursera::{CourseraCatalog, COURSERA_ENDPOINT, COURSERA_PLATFORM};
