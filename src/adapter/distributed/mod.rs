mod client;
mod registry;

pub use client::*;
pub use registry::*;
