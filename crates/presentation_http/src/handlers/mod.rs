//! HTTP request handlers

pub mod destinations;
pub mod health;
pub mod index;
pub mod map;
pub mod session;
