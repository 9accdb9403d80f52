//! UTF-8 codepoint counting
//!
//! Counts codepoints by classifying each leading byte, without decoding.
//! Input is not validated. On malformed input (stray continuation bytes,
//! overlong forms, encoded surrogates, truncated sequences) the count is
//! unspecified, but the scan always terminates and never reads out of bounds.

/// Sequence length announced by each possible leading byte.
///
/// Continuation bytes (`10xxxxxx`) and the never-valid `F8..=FF` are given a
/// length of 1 so the scan always makes progress.
static SEQUENCE_LEN: [u8; 256] = build_sequence_table();

const fn build_sequence_table() -> [u8; 256] {
    let mut table = [1u8; 256];
    let mut byte = 0usize;
    while byte < 256 {
        table[byte] = match byte as u8 {
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => 1,
        };
        byte += 1;
    }
    table
}

/// Returns the number of bytes in the sequence introduced by `lead`.
#[inline]
pub fn sequence_len(lead: u8) -> usize {
    SEQUENCE_LEN[lead as usize] as usize
}

/// Counts the codepoints in `bytes`, interpreted as UTF-8.
///
/// Runs in a single linear pass. A truncated trailing sequence still counts
/// as one codepoint.
pub fn count_codepoints(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut pos = 0;

    while let Some(&lead) = bytes.get(pos) {
        pos += sequence_len(lead);
        count += 1;
    }

    count
}

/// Counts the codepoints of already-validated text.
#[inline]
pub fn count_codepoints_str(text: &str) -> usize {
    count_codepoints(text.as_bytes())
}
