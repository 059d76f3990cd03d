//! Configuration for the admin console.

pub mod dependencies;

pub use dependencies::Dependencies;
