use digest::Digest;
use sm3::Sm3;

#[cfg(feature = "accel")]
use lazy_static::lazy_static;

/// MAC output size in bytes.
pub const MAC_LEN: usize = Sm3::DIGEST_SIZE;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

#[cfg(feature = "accel")]
type HmacFn = fn(&[u8], &[u8]) -> [u8; MAC_LEN];

#[cfg(feature = "accel")]
lazy_static! {
    // Probed once per process; every later call goes through the same path.
    static ref HMAC_IMPL: HmacFn = if accel::available() {
        accel::hmac
    } else {
        reference
    };
}

/// HMAC-SM3 of `data` under `key`.
///
/// Keys of any length are accepted: keys longer than the 64-byte block size
/// are replaced by their SM3 digest, shorter ones are right-padded with
/// zeros.
#[cfg(feature = "accel")]
pub fn hmac(key: &[u8], data: &[u8]) -> [u8; MAC_LEN] {
    (*HMAC_IMPL)(key, data)
}

/// HMAC-SM3 of `data` under `key`.
///
/// Keys of any length are accepted: keys longer than the 64-byte block size
/// are replaced by their SM3 digest, shorter ones are right-padded with
/// zeros.
#[cfg(not(feature = "accel"))]
pub fn hmac(key: &[u8], data: &[u8]) -> [u8; MAC_LEN] {
    reference(key, data)
}

fn reference(key: &[u8], data: &[u8]) -> [u8; MAC_LEN] {
    let mut ipad = [IPAD; Sm3::BLOCK_SIZE];
    let mut opad = [OPAD; Sm3::BLOCK_SIZE];

    // XOR the normalized key over the full block; bytes past the key end
    // keep the bare pad value, which is the zero-padding rule.
    if key.len() > Sm3::BLOCK_SIZE {
        let digest = sm3::hash(key);
        for (pad, k) in ipad.iter_mut().zip(digest.iter()) {
            *pad ^= k;
        }
        for (pad, k) in opad.iter_mut().zip(digest.iter()) {
            *pad ^= k;
        }
    } else {
        for (pad, k) in ipad.iter_mut().zip(key.iter()) {
            *pad ^= k;
        }
        for (pad, k) in opad.iter_mut().zip(key.iter()) {
            *pad ^= k;
        }
    }

    let mut inner = Sm3::new();
    inner.input(&ipad[..]);
    inner.input(data);
    let inner_digest = inner.result();

    let mut outer = Sm3::new();
    outer.input(&opad[..]);
    outer.input(&inner_digest[..]);

    let mut mac = [0u8; MAC_LEN];
    mac.copy_from_slice(&outer.result());
    mac
}

#[cfg(feature = "accel")]
mod accel {
    use openssl::hash::MessageDigest;
    use openssl::pkey::PKey;
    use openssl::sign::Signer;

    use super::MAC_LEN;

    pub(super) fn available() -> bool {
        MessageDigest::from_name(sm3::Sm3::NAME).is_some()
    }

    pub(super) fn hmac(key: &[u8], data: &[u8]) -> [u8; MAC_LEN] {
        let md = match MessageDigest::from_name(sm3::Sm3::NAME) {
            Some(md) => md,
            None => return super::reference(key, data),
        };
        let signed = PKey::hmac(key).and_then(|pkey| {
            let mut signer = Signer::new(md, &pkey)?;
            signer.update(data)?;
            signer.sign_to_vec()
        });
        match signed {
            Ok(mac) if mac.len() == MAC_LEN => {
                let mut out = [0u8; MAC_LEN];
                out.copy_from_slice(&mac);
                out
            }
            _ => super::reference(key, data),
        }
    }
}
