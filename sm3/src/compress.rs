use block_buffer::byteorder::{ByteOrder, BE};

use crate::consts::{BLOCK_LEN, STATE_LEN, T_0, T_1};

#[inline(always)]
fn p0(x: u32) -> u32 {
    x ^ x.rotate_left(9) ^ x.rotate_left(17)
}

#[inline(always)]
fn p1(x: u32) -> u32 {
    x ^ x.rotate_left(15) ^ x.rotate_left(23)
}

/// Message expansion, 5.3.2: 16 big-endian words grow into W[0..68] and
/// W'[j] = W[j] ^ W[j+4]. Both arrays are fed to the round function so the
/// XOR is not recomputed per round.
pub(crate) fn expand(block: &[u8; BLOCK_LEN]) -> ([u32; 68], [u32; 64]) {
    let mut w = [0u32; 68];
    BE::read_u32_into(block, &mut w[..16]);
    for j in 16..68 {
        w[j] = p1(w[j - 16] ^ w[j - 9] ^ w[j - 3].rotate_left(15))
            ^ w[j - 13].rotate_left(7)
            ^ w[j - 6];
    }

    let mut w1 = [0u32; 64];
    for j in 0..64 {
        w1[j] = w[j] ^ w[j + 4];
    }
    (w, w1)
}

/// CF: compression function, 5.3.3.
pub(crate) fn compress(state: &mut [u32; STATE_LEN], block: &[u8; BLOCK_LEN]) {
    let (w, w1) = expand(block);

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;
    for j in 0..64 {
        let (ff, gg, t) = if j < 16 {
            (a ^ b ^ c, e ^ f ^ g, T_0)
        } else {
            ((a & b) | (a & c) | (b & c), (e & f) | (!e & g), T_1)
        };
        let ss1 = a
            .rotate_left(12)
            .wrapping_add(e)
            .wrapping_add(t.rotate_left(j as u32))
            .rotate_left(7);
        let ss2 = ss1 ^ a.rotate_left(12);
        let tt1 = ff.wrapping_add(d).wrapping_add(ss2).wrapping_add(w1[j]);
        let tt2 = gg.wrapping_add(h).wrapping_add(ss1).wrapping_add(w[j]);
        d = c;
        c = b.rotate_left(9);
        b = a;
        a = tt1;
        h = g;
        g = f.rotate_left(19);
        f = e;
        e = p0(tt2);
    }

    state[0] ^= a;
    state[1] ^= b;
    state[2] ^= c;
    state[3] ^= d;
    state[4] ^= e;
    state[5] ^= f;
    state[6] ^= g;
    state[7] ^= h;
}
