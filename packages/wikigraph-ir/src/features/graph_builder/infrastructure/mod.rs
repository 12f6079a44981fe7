// Graph Builder Infrastructure
//
// Document loading and the stateful builder

pub mod builder;
pub mod loader;

pub use builder::GraphBuilder;
pub use loader::{load_rows, unwrap_rows};
