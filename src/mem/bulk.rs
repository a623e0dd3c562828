// vtcon VGA text console kernel
// Copyright (C) 2026 vtcon Contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.

//! Bulk copy and move primitives.
//!
//! The console scroll path shifts 3840 bytes of grid memory per line, so
//! these are the hot primitives underneath the driver. No bounds checking
//! is performed at this level; the caller owns both regions.

use core::mem::size_of;

/// Machine word size in bytes.
const WORD: usize = size_of::<usize>();

/// Copies `n` bytes from `src` to `dst`, low address to high.
///
/// # Safety
///
/// `src` must be valid for `n` reads, `dst` for `n` writes, and the two
/// regions must not overlap.
#[inline]
pub unsafe fn copy_bytes(dst: *mut u8, src: *const u8, n: usize) {
    // SAFETY: caller guarantees both regions are valid for `n` bytes and
    // disjoint, so read order does not matter.
    unsafe {
        for i in 0..n {
            *dst.add(i) = *src.add(i);
        }
    }
}

/// Copies `n` bytes from `src` to `dst`, correct for overlapping regions.
///
/// Every source byte is read before the write that would clobber it: the
/// copy descends from the high end when `dst` starts above `src`, and
/// ascends otherwise.
///
/// # Safety
///
/// `src` must be valid for `n` reads and `dst` for `n` writes.
pub unsafe fn move_bytes(dst: *mut u8, src: *const u8, n: usize) {
    if (dst as usize) <= (src as usize) {
        // Ascending: each read address stays ahead of every write so far.
        // SAFETY: caller guarantees validity; order handles the overlap.
        unsafe {
            for i in 0..n {
                *dst.add(i) = *src.add(i);
            }
        }
    } else {
        // SAFETY: caller guarantees validity; descending order means writes
        // land above all addresses still to be read.
        unsafe {
            for i in (0..n).rev() {
                *dst.add(i) = *src.add(i);
            }
        }
    }
}

/// Copies `n` bytes from `src` to `dst` in machine-word chunks.
///
/// Whole words are moved first, the remaining bytes one at a time. Purely a
/// throughput optimization; the result is identical to [`copy_bytes`].
///
/// # Safety
///
/// Same contract as [`copy_bytes`]: valid, disjoint regions of `n` bytes.
pub unsafe fn copy_words(dst: *mut u8, src: *const u8, n: usize) {
    let words = n / WORD;
    // SAFETY: caller guarantees both regions hold `n` valid bytes; the word
    // loop stays within the first `words * WORD` of them and the byte loop
    // covers the rest. Unaligned accesses are made explicit.
    unsafe {
        let wdst = dst as *mut usize;
        let wsrc = src as *const usize;
        for i in 0..words {
            wdst.add(i).write_unaligned(wsrc.add(i).read_unaligned());
        }
        for i in (words * WORD)..n {
            *dst.add(i) = *src.add(i);
        }
    }
}

/// Overlap-safe variant of [`copy_words`].
///
/// Identical observable result to [`move_bytes`]; word-sized chunks are used
/// for as many whole words as fit.
///
/// # Safety
///
/// Same contract as [`move_bytes`].
pub unsafe fn move_words(dst: *mut u8, src: *const u8, n: usize) {
    let words = n / WORD;
    if (dst as usize) <= (src as usize) {
        // Ascending word copy is overlap-safe here: each word is read in
        // full before its write, and later reads sit above earlier writes.
        // SAFETY: caller guarantees validity of both regions.
        unsafe {
            let wdst = dst as *mut usize;
            let wsrc = src as *const usize;
            for i in 0..words {
                wdst.add(i).write_unaligned(wsrc.add(i).read_unaligned());
            }
            for i in (words * WORD)..n {
                *dst.add(i) = *src.add(i);
            }
        }
    } else {
        // Descending: trailing bytes first, then whole words from the top.
        // SAFETY: caller guarantees validity of both regions.
        unsafe {
            for i in ((words * WORD)..n).rev() {
                *dst.add(i) = *src.add(i);
            }
            let wdst = dst as *mut usize;
            let wsrc = src as *const usize;
            for i in (0..words).rev() {
                wdst.add(i).write_unaligned(wsrc.add(i).read_unaligned());
            }
        }
    }
}
