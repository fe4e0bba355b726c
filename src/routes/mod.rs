pub mod healthcheck;
pub mod lodging;
