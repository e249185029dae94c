//! # Domain Models
//!
//! Configuration types and fixed tables for provisioning a Poste.io host.
//! Keep it lean: no I/O, process spawning, or templating here. Only data and derivations.

pub mod config;
pub mod ports;
