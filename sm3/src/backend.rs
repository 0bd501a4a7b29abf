use digest::Digest;

use crate::consts::DIGEST_LEN;
use crate::sm3::Sm3;

#[cfg(feature = "accel")]
use lazy_static::lazy_static;

#[cfg(feature = "accel")]
type HashFn = fn(&[u8]) -> [u8; DIGEST_LEN];

#[cfg(feature = "accel")]
lazy_static! {
    // Probed once per process; every later call goes through the same path.
    static ref HASH_IMPL: HashFn = if accel::available() {
        accel::hash
    } else {
        reference
    };
}

#[cfg(feature = "accel")]
pub(crate) fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    (*HASH_IMPL)(data)
}

#[cfg(not(feature = "accel"))]
pub(crate) fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
    reference(data)
}

fn reference(data: &[u8]) -> [u8; DIGEST_LEN] {
    let mut digest = [0u8; DIGEST_LEN];
    digest.copy_from_slice(&Sm3::digest(data));
    digest
}

#[cfg(feature = "accel")]
mod accel {
    use openssl::hash::MessageDigest;

    use crate::consts::DIGEST_LEN;

    pub(super) fn available() -> bool {
        MessageDigest::from_name(crate::Sm3::NAME).is_some()
    }

    pub(super) fn hash(data: &[u8]) -> [u8; DIGEST_LEN] {
        let md = match MessageDigest::from_name(crate::Sm3::NAME) {
            Some(md) => md,
            None => return super::reference(data),
        };
        match openssl::hash::hash(md, data) {
            Ok(bytes) if bytes.len() == DIGEST_LEN => {
                let mut digest = [0u8; DIGEST_LEN];
                digest.copy_from_slice(&bytes);
                digest
            }
            _ => super::reference(data),
        }
    }
}
