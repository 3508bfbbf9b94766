//! Byte slice comparison shared by both bindings.

/// Compares two byte slices lexicographically.
///
/// Returns `-1`, `0` or `1`: the sign of the first differing byte pair, or,
/// when one slice is a prefix of the other, the shorter slice sorts first.
/// Equal-length equal-content slices compare `0`. The ordering coincides with
/// `<[u8] as Ord>` collapsed to three values, and downstream code depends on
/// the exact tie-break.
///
/// # Example
///
/// ```
/// use octet_tools::compare;
///
/// assert_eq!(compare(&[0xff, 0x00], &[0xff, 0x01]), -1);
/// assert_eq!(compare(&[0xff, 0x01], &[0xff, 0x01, 0x00]), -1);
/// assert_eq!(compare(&[0xff, 0x01], &[0xff, 0x01]), 0);
/// ```
pub fn compare(a: &[u8], b: &[u8]) -> i32 {
    let shared = a.len().min(b.len());
    for i in 0..shared {
        if a[i] != b[i] {
            return if a[i] < b[i] { -1 } else { 1 };
        }
    }
    if a.len() == b.len() {
        0
    } else if a.len() > b.len() {
        1
    } else {
        -1
    }
}
