/// Maps a guess distance to points via fixed disjoint brackets.
///
/// A distance of 0 km (an exact match) deliberately scores 0: it is treated
/// as "no meaningful guess", since in practice it only happens when a player
/// drops a pin without looking.
pub fn points_for(distance_km: u64) -> u64 {
    match distance_km {
        1..=2 => 10_000,
        3..=10 => 7_000,
        11..=50 => 4_000,
        51..=200 => 3_000,
        201..=500 => 2_000,
        501..=800 => 1_000,
        801..=1300 => 500,
        1301..=1600 => 400,
        1601..=2300 => 300,
        2301..=2800 => 200,
        2801..=3200 => 100,
        3201..=4500 => 50,
        4501..=6000 => 25,
        _ => 0,
    }
}
