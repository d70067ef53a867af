pub mod error;
pub mod join;
pub mod loader;
pub mod pipeline;
pub mod properties;
pub mod schema;
pub mod schools;
pub mod sink;
