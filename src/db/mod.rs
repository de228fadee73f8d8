// src/db/mod.rs
// DOCUMENTATION: Database module organization
// PURPOSE: Re-export document store components

pub mod document;
#[cfg(test)]
pub mod memory;
pub mod postgres;
pub mod seed;

pub use document::*;
#[cfg(test)]
pub use memory::*;
pub use postgres::*;
pub use seed::*;
