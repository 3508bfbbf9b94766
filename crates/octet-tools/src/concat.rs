//! Buffer concatenation shared by both bindings.

/// Concatenates a list of byte chunks into one freshly allocated buffer.
///
/// Chunk order is preserved and the output is allocated once with the summed
/// length. An empty list yields an empty buffer.
///
/// # Example
///
/// ```
/// use octet_tools::concat;
///
/// let joined = concat(&[&[0xde, 0xad][..], &[0xbe, 0xef][..]]);
/// assert_eq!(joined, [0xde, 0xad, 0xbe, 0xef]);
/// assert!(concat::<&[u8]>(&[]).is_empty());
/// ```
pub fn concat<T: AsRef<[u8]>>(chunks: &[T]) -> Vec<u8> {
    let total = chunks.iter().map(|chunk| chunk.as_ref().len()).sum();
    let mut out = Vec::with_capacity(total);
    for chunk in chunks {
        out.extend_from_slice(chunk.as_ref());
    }
    out
}
