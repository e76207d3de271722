//! Server Command Wrappers
//!
//! Frontend bindings to the server's JSON endpoints.

mod activity;

pub use activity::*;
