#[cfg(not(feature = "server"))]
mod client;

pub mod common;

#[cfg(feature = "server")]
mod server;

#[cfg(not(feature = "server"))]
pub use client::run_app;

#[cfg(feature = "server")]
pub use server::run;
