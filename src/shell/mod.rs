// Composition root: configuration, wiring of in-memory adapters into handlers, and the
// HTTP and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
