pub mod action;
pub mod client;
pub mod config;
pub mod context;
pub mod error;
pub mod locals;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

#[cfg(test)]
mod test_util;
