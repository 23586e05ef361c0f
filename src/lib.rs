//! remarks-digest: weekly esa.io daily-report remarks digest, drafted on Hatena Blog.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod shared;
pub mod usecases;
