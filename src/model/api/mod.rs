//! Wire-facing types: creation payloads, views, results and request guards.

pub mod auth;
pub mod desc;
pub mod results;
pub mod spec;
