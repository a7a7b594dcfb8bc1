//! # Cipher Module
//!
//! Derived vector computation and the additive character transform built on it.

pub mod noise;
pub mod transform;

pub use noise::compute_b;
pub use transform::{decode, encode};
