//! # OxSum Digest Primitives
//!
//! This crate provides a pure Rust SHA-256 implementation that works in both
//! embedded (no_std) and hosted (std) environments.
//!
//! ## Contents
//!
//! - **SHA-256**: streaming secure hash function, 256-bit output (FIPS 180-4)
//! - **Digest**: 32-byte digest value with lowercase hex encoding
//!
//! ## Design
//!
//! - Pure Rust, no dependencies
//! - No dynamic allocation in core operations
//! - Digests are plain `Copy` values; finalizing consumes the hasher, so a
//!   spent instance cannot be fed more input by mistake

#![no_std]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod digest;
pub mod sha256;

pub use digest::Digest;
pub use sha256::Sha256;
