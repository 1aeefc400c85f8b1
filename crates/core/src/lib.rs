//! Pure domain logic shared by the db and api crates.
//!
//! Nothing in this crate performs I/O. Database access lives in
//! `fundra-db`, HTTP concerns in `fundra-api`.

pub mod embed;
pub mod error;
pub mod slug;
pub mod timesince;
pub mod types;
