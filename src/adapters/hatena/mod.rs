//! Hatena Blog adapter. Implements PublishPort via the AtomPub entry endpoint.

pub mod client;
pub mod wsse;

pub use client::HatenaAdapter;
