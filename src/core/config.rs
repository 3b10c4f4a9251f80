/// Width and height of every board.
pub const BOARD_SIZE: usize = 10;

/// Ship lengths in placement order.
pub const FLEET: [usize; 4] = [5, 4, 3, 2];

/// Longest ship in the fleet.
pub const MAX_SHIP_LEN: usize = 5;

/// Total number of ship segments in a complete fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 3 + 2;

/// Occupied cells a layout must hold once every ship from `MAX_SHIP_LEN` down to
/// `length` has been placed.
pub const fn expected_cells(length: usize) -> usize {
    let mut total = 0;
    let mut len = length;
    while len <= MAX_SHIP_LEN {
        total += len;
        len += 1;
    }
    total
}

/// Largest anchor index on either axis for a ship of `length`.
pub const fn max_anchor(length: usize) -> usize {
    BOARD_SIZE - length
}

/// Display name of the ship with the given length.
pub fn ship_name(length: usize) -> &'static str {
    match length {
        5 => "Carrier",
        4 => "Battleship",
        3 => "Cruiser",
        2 => "Destroyer",
        _ => "Ship",
    }
}
