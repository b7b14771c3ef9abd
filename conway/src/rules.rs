// rules.rs - The classic B3/S23 rule

/// Next value of a cell given its current value and the number of live cells
/// in its Moore neighbourhood. Any nonzero value counts as alive; the result
/// is always `0` or `1`.
pub fn next_state(cell: u8, live_neighbors: u8) -> u8 {
    match (cell != 0, live_neighbors) {
        (true, 2) | (true, 3) => 1, // Survival
        (false, 3) => 1,            // Birth
        _ => 0,                     // Death or stays dead
    }
}
