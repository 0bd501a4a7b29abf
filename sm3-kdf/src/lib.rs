use std::fmt;

use byteorder::{BigEndian, ByteOrder};
use sm3_hmac::{hmac, MAC_LEN};

/// Argument errors reported by [`pbkdf2`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KdfError {
    /// The iteration count must be at least 1.
    InvalidIterationCount,
    /// A zero-length derived key was requested.
    InvalidOutputLength,
}

impl fmt::Display for KdfError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            KdfError::InvalidIterationCount => write!(f, "iteration count must be at least 1"),
            KdfError::InvalidOutputLength => write!(f, "derived key length must be at least 1 byte"),
        }
    }
}

impl std::error::Error for KdfError {}

/// PBKDF2 with HMAC-SM3 as the pseudorandom function.
///
/// Derives `dklen` bytes of key material from `password` and `salt`. One
/// output block is the 32-byte MAC size; a typical `dklen` is 32.
pub fn pbkdf2(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dklen: usize,
) -> Result<Vec<u8>, KdfError> {
    if iterations < 1 {
        return Err(KdfError::InvalidIterationCount);
    }
    if dklen == 0 {
        return Err(KdfError::InvalidOutputLength);
    }

    let blocks = (dklen + MAC_LEN - 1) / MAC_LEN;
    let mut key = Vec::with_capacity(blocks * MAC_LEN);
    let mut block_input = Vec::with_capacity(salt.len() + 4);

    for index in 1..=blocks as u32 {
        block_input.clear();
        block_input.extend_from_slice(salt);
        let mut encoded = [0u8; 4];
        BigEndian::write_u32(&mut encoded, index);
        block_input.extend_from_slice(&encoded);

        // U_1 = PRF(password, salt || index); every further U chains off the
        // previous one and is folded into the block by XOR.
        let mut u = hmac(password, &block_input);
        let mut block = u;
        for _ in 1..iterations {
            u = hmac(password, &u);
            for (acc, next) in block.iter_mut().zip(u.iter()) {
                *acc ^= next;
            }
        }
        key.extend_from_slice(&block);
    }

    key.truncate(dklen);
    Ok(key)
}
