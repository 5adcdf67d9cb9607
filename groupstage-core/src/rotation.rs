//! Seat arithmetic for the circle method
//!
//! Seats 0..seats form a folded circle laid out as a row of tables:
//! seat 0 is anchored, even seats travel forward, odd seats travel
//! backward, and a seat that runs off either end of the row reflects
//! back in. All arithmetic is signed; the reflection rules pass through
//! negative intermediates.

/// Partner seat across the table: (0,1), (2,3), ...
pub(crate) fn partner(seat: i64) -> i64 {
    seat ^ 1
}

/// Occupant of table position `seat` after `moves` rotation steps.
///
/// Even positions are displaced by `+2 * moves` and reflect off the high
/// end; odd positions are displaced by `-2 * moves` and reflect off the
/// low end. A reflection that overshoots the opposite end reflects once
/// more. Position 0 is the anchor and never passes through here.
pub(crate) fn rotated_position(seat: i64, moves: i64, seats: i64) -> i64 {
    if seat % 2 == 0 {
        let mut pos = seat + 2 * moves;
        if pos >= seats {
            pos = 2 * seats - pos - 1;
            if pos < 0 {
                pos = -(pos - 1);
            }
        }
        pos
    } else {
        let mut pos = seat - 2 * moves;
        if pos < 0 {
            pos = -(pos - 1);
            if pos >= seats {
                pos = 2 * seats - pos - 1;
            }
        }
        pos
    }
}

/// One step of the anchor's partner seat, walking rounds backward.
///
/// Even seats step `+2`, clamping at the high end to `seats - 1`; odd
/// seats step `-2`, clamping at the low end to `2`.
pub(crate) fn step_anchor_partner(seat: i64, seats: i64) -> i64 {
    if seat % 2 == 0 {
        let next = seat + 2;
        if next >= seats {
            seats - 1
        } else {
            next
        }
    } else {
        let next = seat - 2;
        if next < 0 {
            2
        } else {
            next
        }
    }
}

/// One clockwise step of a non-anchor competitor's own seat, walking
/// rounds backward.
///
/// Even seats step `-2`, clamping at the low end to `1`; odd seats step
/// `+2`, clamping at the high end to `seats - 2`.
pub(crate) fn step_clockwise(seat: i64, seats: i64) -> i64 {
    if seat % 2 == 0 {
        let next = seat - 2;
        if next <= 0 {
            1
        } else {
            next
        }
    } else {
        let next = seat + 2;
        if next >= seats {
            seats - 2
        } else {
            next
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partner_pairs_adjacent_seats() {
        assert_eq!(partner(0), 1);
        assert_eq!(partner(1), 0);
        assert_eq!(partner(6), 7);
        assert_eq!(partner(7), 6);
    }

    #[test]
    fn test_zero_moves_is_identity() {
        for seat in 1..8 {
            assert_eq!(rotated_position(seat, 0, 8), seat);
        }
    }

    #[test]
    fn test_single_reflection_at_high_end() {
        // seats = 8: seat 6 overshoots to 8 and reflects to 7
        assert_eq!(rotated_position(6, 1, 8), 7);
    }

    #[test]
    fn test_single_reflection_at_low_end() {
        // seats = 8: seat 1 undershoots to -1 and reflects to 2
        assert_eq!(rotated_position(1, 1, 8), 2);
    }

    #[test]
    fn test_double_reflection() {
        // seats = 6: seat 4 with 4 moves reflects high then low (12 -> -1 -> 2)
        assert_eq!(rotated_position(4, 4, 6), 2);
        // seats = 8: seat 1 with 4 moves reflects low then high (-7 -> 8 -> 7)
        assert_eq!(rotated_position(1, 4, 8), 7);
    }

    #[test]
    fn test_rotation_permutes_non_anchor_seats() {
        for seats in (2..=60).step_by(2) {
            for moves in 0..seats - 1 {
                let mut seen = vec![false; seats as usize];
                for seat in 1..seats {
                    let pos = rotated_position(seat, moves, seats);
                    assert!(
                        pos >= 1 && pos < seats,
                        "seats {seats} moves {moves}: seat {seat} left the row at {pos}"
                    );
                    assert!(
                        !seen[pos as usize],
                        "seats {seats} moves {moves}: position {pos} occupied twice"
                    );
                    seen[pos as usize] = true;
                }
            }
        }
    }

    #[test]
    fn test_closed_form_matches_iterated_single_steps() {
        // The multi-move jump with its reflection rules must agree with
        // applying one rotation step at a time.
        for seats in (2..=60).step_by(2) {
            for seat in 1..seats {
                let mut stepped = seat;
                for moves in 0..seats - 1 {
                    assert_eq!(
                        rotated_position(seat, moves, seats),
                        stepped,
                        "seats {seats}: seat {seat} diverged after {moves} moves"
                    );
                    stepped = rotated_position(stepped, 1, seats);
                }
            }
        }
    }

    #[test]
    fn test_anchor_partner_walk_tracks_position_one() {
        // Walking the anchor's partner seat backward one round at a time
        // visits exactly the occupants of table position 1.
        for seats in (2..=60).step_by(2) {
            let mut seat = 1;
            for moves in 0..seats - 1 {
                assert_eq!(
                    rotated_position(1, moves, seats),
                    seat,
                    "seats {seats}: anchor partner walk diverged at {moves} moves"
                );
                seat = step_anchor_partner(seat, seats);
            }
        }
    }

    #[test]
    fn test_clockwise_walk_tracks_own_position() {
        // After m clockwise steps a competitor's tracked position must be
        // the one the rotation sends it to: occupant(walk^m(c), m) == c.
        for seats in (2..=60).step_by(2) {
            for competitor in 1..seats {
                let mut position = competitor;
                for moves in 0..seats - 1 {
                    assert_eq!(
                        rotated_position(position, moves, seats),
                        competitor,
                        "seats {seats}: competitor {competitor} lost after {moves} moves"
                    );
                    position = step_clockwise(position, seats);
                }
            }
        }
    }

    #[test]
    fn test_walks_stay_clamped_in_range() {
        for seats in (4..=20).step_by(2) {
            for seat in 1..seats {
                let a = step_anchor_partner(seat, seats);
                assert!(a >= 1 && a < seats, "anchor walk left the row: {a}");
                let c = step_clockwise(seat, seats);
                assert!(c >= 1 && c < seats, "clockwise walk left the row: {c}");
            }
        }
    }
}
