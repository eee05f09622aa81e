//! Command handlers for the Pagelock CLI.

pub mod convert;
pub mod decrypt;
pub mod encrypt;
pub mod protect;
