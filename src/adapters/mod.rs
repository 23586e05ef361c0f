//! Infrastructure adapters. Implement outbound ports.
//!
//! esa.io search, Hatena Blog AtomPub. Map errors to DomainError.

pub mod esa;
pub mod hatena;
