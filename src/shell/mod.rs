// Composition root for the equipment monitoring service.
//
// Responsibilities
// - Read config from the environment (and an optional .env file).
// - Instantiate the equipment store and the clock.
// - Wire them into the use case handlers shared by the REST and GraphQL surfaces.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
