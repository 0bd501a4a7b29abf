#![no_std]
mod backend;
mod compress;
mod consts;
mod sm3;

pub use digest::Digest;
pub use crate::sm3::Sm3;

/// One-shot SM3 digest.
///
/// Byte-identical to feeding `data` through an [`Sm3`] hasher; with the
/// `accel` feature it is routed through the accelerated backend when one is
/// available.
pub fn hash(data: &[u8]) -> [u8; 32] {
    backend::hash(data)
}
