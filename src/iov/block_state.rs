//! src/iov/block_state.rs
//! Block cursor over a scatter/gather list
//!
//! Gathering concatenates the visited buffers in list order; a block may
//! straddle any number of buffers. A short final block is zero-filled on the
//! gather side and the number of real bytes is returned, so the matching
//! scatter writes back exactly those bytes and nothing past the payload.

use super::{CryptoIov, IovRole};

/// Which buffers a cursor visits, and how blocks are cut.
///
/// Defaults visit `Header`, `Data` and `Padding` buffers, skip `SignOnly`,
/// and let blocks span buffer boundaries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IovBlockOptions {
    ignore_header: bool,
    include_sign_only: bool,
    pad_to_boundary: bool,
}

impl IovBlockOptions {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ignore_header: false,
            include_sign_only: false,
            pad_to_boundary: false,
        }
    }

    /// Skip `Header` buffers entirely.
    #[must_use]
    pub const fn with_ignore_header(mut self, ignore: bool) -> Self {
        self.ignore_header = ignore;
        self
    }

    /// Visit `SignOnly` buffers as well.
    #[must_use]
    pub const fn with_sign_only(mut self, include: bool) -> Self {
        self.include_sign_only = include;
        self
    }

    /// Never let a block span two buffers: a buffer's short tail becomes its
    /// own zero-filled block. `Padding` buffers are skipped in this mode.
    #[must_use]
    pub const fn with_pad_to_boundary(mut self, pad: bool) -> Self {
        self.pad_to_boundary = pad;
        self
    }

    /// Whether a buffer with `role` is visited.
    #[inline]
    pub const fn processes(&self, role: IovRole) -> bool {
        match role {
            IovRole::Data => true,
            IovRole::Header => !self.ignore_header,
            IovRole::SignOnly => self.include_sign_only,
            IovRole::Padding => !self.pad_to_boundary,
            IovRole::Empty | IovRole::Trailer | IovRole::Checksum | IovRole::Stream => false,
        }
    }
}

/// Cursor into a scatter/gather list: buffer index plus offset inside it.
///
/// Create one per direction (gather side, scatter side) per call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IovBlockState {
    iov_pos: usize,
    data_pos: usize,
    options: IovBlockOptions,
}

impl IovBlockState {
    #[must_use]
    pub const fn new(options: IovBlockOptions) -> Self {
        Self {
            iov_pos: 0,
            data_pos: 0,
            options,
        }
    }

    /// True once every buffer in a list of `num_data` entries has been passed.
    pub const fn is_exhausted(&self, num_data: usize) -> bool {
        self.iov_pos >= num_data
    }

    /// Gather up to `block.len()` bytes into `block`, advancing the cursor.
    ///
    /// Returns the number of payload bytes copied. Bytes past that count are
    /// zeroed. `0` means the list is exhausted.
    pub fn get_block(&mut self, data: &[CryptoIov<'_>], block: &mut [u8]) -> usize {
        let block_size = block.len();
        let mut filled = 0;
        let mut i = self.iov_pos;

        while i < data.len() && filled < block_size {
            let iov = &data[i];
            if !self.options.processes(iov.role) {
                i += 1;
                continue;
            }

            let n = (iov.data.len() - self.data_pos).min(block_size - filled);
            block[filled..filled + n].copy_from_slice(&iov.data[self.data_pos..self.data_pos + n]);
            self.data_pos += n;
            filled += n;

            if self.data_pos == iov.data.len() {
                i += 1;
                self.data_pos = 0;
                if self.options.pad_to_boundary && filled > 0 {
                    break;
                }
            }
        }

        self.iov_pos = i;
        block[filled..].fill(0);
        filled
    }

    /// Scatter the first `len` bytes of `block` back into the list, advancing
    /// the cursor. Returns the number of bytes written.
    ///
    /// Mirrors [`get_block`](Self::get_block): a scatter cursor fed the counts
    /// returned by a gather cursor with the same options writes exactly the
    /// bytes that were read.
    pub fn put_block(&mut self, data: &mut [CryptoIov<'_>], block: &[u8], len: usize) -> usize {
        let len = len.min(block.len());
        let mut written = 0;
        let mut i = self.iov_pos;

        while i < data.len() && written < len {
            let iov = &mut data[i];
            if !self.options.processes(iov.role) {
                i += 1;
                continue;
            }

            let n = (iov.data.len() - self.data_pos).min(len - written);
            iov.data[self.data_pos..self.data_pos + n].copy_from_slice(&block[written..written + n]);
            self.data_pos += n;
            written += n;

            if self.data_pos == iov.data.len() {
                i += 1;
                self.data_pos = 0;
                if self.options.pad_to_boundary && written > 0 {
                    break;
                }
            }
        }

        self.iov_pos = i;
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gather_all(data: &[CryptoIov<'_>], options: IovBlockOptions) -> Vec<(usize, [u8; 4])> {
        let mut state = IovBlockState::new(options);
        let mut blocks = Vec::new();
        loop {
            let mut block = [0xEEu8; 4];
            let n = state.get_block(data, &mut block);
            if n == 0 {
                break;
            }
            blocks.push((n, block));
        }
        blocks
    }

    #[test]
    fn blocks_span_buffers() {
        let mut a = [1u8, 2, 3];
        let mut b = [4u8, 5, 6, 7, 8];
        let data = [CryptoIov::data(&mut a), CryptoIov::data(&mut b)];

        let blocks = gather_all(&data, IovBlockOptions::new());
        assert_eq!(blocks, vec![(4, [1, 2, 3, 4]), (4, [5, 6, 7, 8])]);
    }

    #[test]
    fn short_tail_is_zero_filled() {
        let mut a = [9u8; 6];
        let data = [CryptoIov::data(&mut a)];

        let blocks = gather_all(&data, IovBlockOptions::new());
        assert_eq!(blocks, vec![(4, [9, 9, 9, 9]), (2, [9, 9, 0, 0])]);
    }

    #[test]
    fn ignored_header_is_skipped() {
        let mut hdr = [0xAAu8; 4];
        let mut a = [1u8, 2, 3, 4];
        let data = [CryptoIov::header(&mut hdr), CryptoIov::data(&mut a)];

        let with_header = gather_all(&data, IovBlockOptions::new());
        assert_eq!(with_header.len(), 2);

        let blocks = gather_all(&data, IovBlockOptions::new().with_ignore_header(true));
        assert_eq!(blocks, vec![(4, [1, 2, 3, 4])]);
    }

    #[test]
    fn sign_only_needs_opt_in() {
        let mut s = [7u8; 4];
        let data = [CryptoIov::sign_only(&mut s)];

        assert!(gather_all(&data, IovBlockOptions::new()).is_empty());
        assert_eq!(
            gather_all(&data, IovBlockOptions::new().with_sign_only(true)),
            vec![(4, [7, 7, 7, 7])]
        );
    }

    #[test]
    fn pad_to_boundary_cuts_at_each_buffer() {
        let mut a = [1u8, 2, 3];
        let mut b = [4u8, 5];
        let mut pad = [0xFFu8; 2];
        let data = [
            CryptoIov::data(&mut a),
            CryptoIov::data(&mut b),
            CryptoIov::padding(&mut pad),
        ];

        let blocks = gather_all(&data, IovBlockOptions::new().with_pad_to_boundary(true));
        assert_eq!(blocks, vec![(3, [1, 2, 3, 0]), (2, [4, 5, 0, 0])]);
    }

    #[test]
    fn empty_buffers_are_stepped_over() {
        let mut empty: [u8; 0] = [];
        let mut a = [1u8, 2, 3, 4, 5];
        let data = [CryptoIov::data(&mut empty), CryptoIov::data(&mut a)];

        let blocks = gather_all(&data, IovBlockOptions::new());
        assert_eq!(blocks, vec![(4, [1, 2, 3, 4]), (1, [5, 0, 0, 0])]);
    }

    #[test]
    fn scatter_writes_back_only_gathered_bytes() {
        let mut hdr = [0xAAu8; 2];
        let mut a = [0u8; 3];
        let mut b = [0u8; 2];
        let mut trailer = [0xBBu8; 2];
        let mut data = [
            CryptoIov::header(&mut hdr),
            CryptoIov::data(&mut a),
            CryptoIov::data(&mut b),
            CryptoIov::trailer(&mut trailer),
        ];
        let options = IovBlockOptions::new().with_ignore_header(true);

        let mut input = IovBlockState::new(options);
        let mut output = IovBlockState::new(options);
        let mut counter = 1u8;
        loop {
            let mut block = [0u8; 4];
            let n = input.get_block(&data, &mut block);
            if n == 0 {
                break;
            }
            let filled = [counter; 4];
            assert_eq!(output.put_block(&mut data, &filled, n), n);
            counter += 1;
        }
        assert!(input.is_exhausted(data.len()));

        assert_eq!(hdr, [0xAA; 2]);
        assert_eq!(a, [1, 1, 1]);
        assert_eq!(b, [1, 2]);
        assert_eq!(trailer, [0xBB; 2]);
    }

    #[test]
    fn pad_to_boundary_scatter_mirrors_gather() {
        let mut a = [0u8; 3];
        let mut b = [0u8; 6];
        let mut pad = [0xFFu8; 2];
        let mut data = [
            CryptoIov::data(&mut a),
            CryptoIov::data(&mut b),
            CryptoIov::padding(&mut pad),
        ];
        let options = IovBlockOptions::new().with_pad_to_boundary(true);

        let mut input = IovBlockState::new(options);
        let mut output = IovBlockState::new(options);
        let mut counts = Vec::new();
        let mut fill = 1u8;
        loop {
            let mut block = [0u8; 4];
            let n = input.get_block(&data, &mut block);
            if n == 0 {
                break;
            }
            assert_eq!(output.put_block(&mut data, &[fill; 4], n), n);
            counts.push(n);
            fill += 1;
        }

        assert_eq!(counts, vec![3, 4, 2]);
        assert!(input.is_exhausted(data.len()));
        assert_eq!(a, [1, 1, 1]);
        assert_eq!(b, [2, 2, 2, 2, 3, 3]);
        assert_eq!(pad, [0xFF; 2]);
    }
}
