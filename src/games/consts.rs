pub const ROUNDS_PER_GAME: u64 = 5;

/// Seconds the player gets to explore before the round times out. Overridable
/// with `--round-duration-secs`.
pub const DEFAULT_ROUND_DURATION_SECS: u64 = 45;
