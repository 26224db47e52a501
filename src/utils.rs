/// Milliseconds elapsed since `since` on a free-running counter
///
/// The counter wraps around, so elapsed time is computed with wrapping
/// subtraction instead of comparing absolute values.
pub fn elapsed_ms(now: u32, since: u32) -> u32 {
    now.wrapping_sub(since)
}
