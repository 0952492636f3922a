pub type Tick = u16;

/// Returns how many ticks have elapsed from `then` to `now`, accounting for
/// the counter wrapping around.
/// ticks_since(5, 2) will return 3
/// ticks_since(1, 65535) will return 2
pub fn ticks_since(now: Tick, then: Tick) -> u16 {
    now.wrapping_sub(then)
}
