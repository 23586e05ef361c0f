//! esa.io adapter. Implements SearchPort via the team posts search API.

pub mod client;

pub use client::EsaAdapter;
