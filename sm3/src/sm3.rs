use block_buffer::byteorder::{ByteOrder, BE};
use block_buffer::BlockBuffer;
use digest::generic_array::typenum::{U32, U64};
use digest::generic_array::GenericArray;
use digest::{BlockInput, FixedOutput, Input, Reset};

use crate::compress::compress;
use crate::consts::{BLOCK_LEN, DIGEST_LEN, IV, STATE_LEN};

type BlockSize = U64;
type Block = GenericArray<u8, BlockSize>;

#[inline]
fn process_block(state: &mut [u32; STATE_LEN], block: &Block) {
    let block = unsafe { &*(block.as_ptr() as *const [u8; BLOCK_LEN]) };
    compress(state, block);
}

/// Incremental SM3 hasher.
///
/// Finalization consumes the hasher; `Clone` yields an independent copy of
/// the mid-stream state and `Reset` returns a hasher to its initial state.
#[derive(Clone)]
pub struct Sm3 {
    len: u64,
    buffer: BlockBuffer<BlockSize>,
    state: [u32; STATE_LEN],
}

impl Sm3 {
    /// Algorithm name.
    pub const NAME: &'static str = "sm3";
    /// Digest size in bytes.
    pub const DIGEST_SIZE: usize = DIGEST_LEN;
    /// Block size in bytes.
    pub const BLOCK_SIZE: usize = BLOCK_LEN;
}

impl Default for Sm3 {
    fn default() -> Self {
        Sm3 {
            len: 0,
            buffer: Default::default(),
            state: IV,
        }
    }
}

impl BlockInput for Sm3 {
    type BlockSize = BlockSize;
}

impl Input for Sm3 {
    fn input<B: AsRef<[u8]>>(&mut self, input: B) {
        let input = input.as_ref();
        // Tracked in bits; assumes the total message length fits in u64.
        self.len += (input.len() as u64) << 3;
        let state = &mut self.state;
        self.buffer.input(input, |block| process_block(state, block));
    }
}

impl FixedOutput for Sm3 {
    type OutputSize = U32;

    fn fixed_result(mut self) -> GenericArray<u8, Self::OutputSize> {
        let len = self.len;
        let state = &mut self.state;
        self.buffer
            .len64_padding::<BE, _>(len, |block| process_block(state, block));

        let mut out = GenericArray::default();
        BE::write_u32_into(&self.state, out.as_mut_slice());
        out
    }
}

impl Reset for Sm3 {
    fn reset(&mut self) {
        self.len = 0;
        self.buffer.reset();
        self.state = IV;
    }
}
