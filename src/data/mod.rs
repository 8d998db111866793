mod loader;

pub use loader::{LoadError, Menu};
