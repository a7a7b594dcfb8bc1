#![allow(non_snake_case)]

//! # LWE Cipher
//!
//! Password-derived symmetric message cipher built on modular matrix-vector
//! arithmetic, plus a time-boxed lock session that caches a verified secret.

pub mod cipher;
pub mod codec;
pub mod config;
pub mod engine;
pub mod errors;
pub mod lock;
pub mod params;
pub mod preset;
pub mod ring;
pub mod secret;

pub use config::{CharsetPolicy, EngineConfig};
pub use engine::EncryptionEngine;
pub use errors::LweCipherError;
pub use params::{EncryptedData, EncryptionParams};
