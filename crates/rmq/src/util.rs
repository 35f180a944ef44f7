#[inline(always)]
pub(crate) fn better_index<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    let va = &values[a];
    let vb = &values[b];
    if va < vb || (va == vb && a < b) { a } else { b }
}

#[inline(always)]
pub(crate) fn better_index_ordered<T: Ord>(values: &[T], a: usize, b: usize) -> usize {
    debug_assert!(a <= b);
    if values[a] <= values[b] { a } else { b }
}

#[inline(always)]
pub(crate) fn floor_log2_nonzero(x: usize) -> u32 {
    debug_assert!(x > 0);
    usize::BITS - 1 - x.leading_zeros()
}

/// `floor(log2(x))` for `x >= 1`, and `0` for `x == 0`.
#[inline(always)]
pub(crate) fn floor_log2(x: usize) -> u32 {
    if x == 0 { 0 } else { floor_log2_nonzero(x) }
}
