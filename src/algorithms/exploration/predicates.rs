use crate::maze::Move;

use super::thread::AriadneThread;

/// reports whether the thread, optionally extended by `next`, walks a route
/// that revisits an earlier position.
///
/// counts cardinal moves from the most recent backwards and stops as soon
/// as both axes balance with every counter positive (the smallest possible
/// loop). a plain out-and-back is not a loop: an axis with no moves at all
/// never closes one.
pub fn loops(thread: &AriadneThread, next: Option<Move>) -> bool {
    let mut north = 0u32;
    let mut east = 0u32;
    let mut south = 0u32;
    let mut west = 0u32;

    for m in next.into_iter().chain(thread.iter()) {
        match m {
            Move::North => north += 1,
            Move::East => east += 1,
            Move::South => south += 1,
            Move::West => west += 1,
        }

        if north == south && east == west && north > 0 && east > 0 {
            break;
        }
    }

    north == south && east == west && north > 0 && east > 0
}

/// reports whether walking the *entire* thread (optionally extended by
/// `next`) ends exactly where it started.
///
/// unlike `loops` this never stops early: a balanced stretch somewhere in
/// the middle of the route must not produce a false positive. a single
/// move can never return anywhere, so at least two moves are required.
pub fn returns_to_origin(thread: &AriadneThread, next: Option<Move>) -> bool {
    let mut x = 0i32;
    let mut y = 0i32;
    let mut walked = 0u32;

    for m in next.into_iter().chain(thread.iter()) {
        match m {
            Move::North => y += 1,
            Move::South => y -= 1,
            Move::West => x += 1,
            Move::East => x -= 1,
        }
        walked += 1;
    }

    x == 0 && y == 0 && walked > 1
}
