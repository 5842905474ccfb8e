// Composition root for the cart service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete adapters and wire them into the cart store.
// - Expose the store to the presentation layer over HTTP.

pub mod config;
pub mod http;
pub mod state;
