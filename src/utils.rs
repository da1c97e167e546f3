//! Factorization helpers for quasigroup order dispatch.
//!
//! The construction strategy for an order hinges on how many factors of two
//! it carries, so the only utility needed here is splitting an integer into
//! its power-of-two part and its odd part.

/// Split `n` into `(degree, odd_part)` such that `n = 2^degree * odd_part`
/// with `odd_part` odd.
///
/// # Examples
///
/// ```
/// use dammgen::utils::split_power_of_two;
///
/// assert_eq!(split_power_of_two(12), (2, 3));
/// assert_eq!(split_power_of_two(16), (4, 1));
/// assert_eq!(split_power_of_two(7), (0, 7));
/// ```
///
/// # Panics
///
/// Panics if `n` is zero.
#[must_use]
pub fn split_power_of_two(n: u32) -> (u32, u32) {
    assert!(n > 0, "cannot factor zero");
    let degree = n.trailing_zeros();
    (degree, n >> degree)
}
