//! Rotation order — the permutation mapping display positions to cards

use serde::{Deserialize, Serialize};

/// One of the three fixed display positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotPosition {
    Left = 0,
    Active = 1,
    Right = 2,
}

/// Rotation direction for user navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

/// A permutation of the three card indices
///
/// Position 0 shows at left, 1 at active (center), 2 at right. Rotation is
/// cyclic, so adjacency between cards is preserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RotationOrder([usize; 3]);

impl RotationOrder {
    /// The initial order: card 0 left, card 1 active, card 2 right
    pub fn identity() -> Self {
        Self([0, 1, 2])
    }

    /// Rotate left: first index moves to the end
    pub fn rotate_left(&mut self) {
        let [a, b, c] = self.0;
        self.0 = [b, c, a];
    }

    /// Rotate right: last index moves to the front
    pub fn rotate_right(&mut self) {
        let [a, b, c] = self.0;
        self.0 = [c, a, b];
    }

    /// Rotate in the given direction
    pub fn rotate(&mut self, direction: Direction) {
        match direction {
            Direction::Left => self.rotate_left(),
            Direction::Right => self.rotate_right(),
        }
    }

    /// The card index shown at a position
    pub fn card_at(&self, position: SlotPosition) -> usize {
        self.0[position as usize]
    }

    /// The position a card index is shown at
    pub fn position_of(&self, card: usize) -> Option<SlotPosition> {
        match self.0.iter().position(|&c| c == card)? {
            0 => Some(SlotPosition::Left),
            1 => Some(SlotPosition::Active),
            _ => Some(SlotPosition::Right),
        }
    }

    /// The raw permutation
    pub fn as_array(&self) -> [usize; 3] {
        self.0
    }
}

impl Default for RotationOrder {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_orders() -> Vec<RotationOrder> {
        let mut orders = Vec::new();
        let mut o = RotationOrder::identity();
        for _ in 0..3 {
            orders.push(o);
            o.rotate_left();
        }
        orders
    }

    #[test]
    fn test_rotations_are_inverses() {
        for start in all_orders() {
            let mut o = start;
            o.rotate_left();
            o.rotate_right();
            assert_eq!(o, start);

            o.rotate_right();
            o.rotate_left();
            assert_eq!(o, start);
        }
    }

    #[test]
    fn test_rotation_is_a_permutation() {
        let mut o = RotationOrder::identity();
        for _ in 0..7 {
            o.rotate_left();
            let mut seen = o.as_array();
            seen.sort_unstable();
            assert_eq!(seen, [0, 1, 2]);
        }
    }

    #[test]
    fn test_rotate_left_moves_first_to_end() {
        let mut o = RotationOrder::identity();
        o.rotate_left();
        assert_eq!(o.as_array(), [1, 2, 0]);
        assert_eq!(o.card_at(SlotPosition::Active), 2);
    }

    #[test]
    fn test_position_of() {
        let o = RotationOrder::identity();
        assert_eq!(o.position_of(0), Some(SlotPosition::Left));
        assert_eq!(o.position_of(1), Some(SlotPosition::Active));
        assert_eq!(o.position_of(2), Some(SlotPosition::Right));
        assert_eq!(o.position_of(3), None);
    }

    #[test]
    fn test_three_left_rotations_cycle() {
        let mut o = RotationOrder::identity();
        o.rotate_left();
        o.rotate_left();
        o.rotate_left();
        assert_eq!(o, RotationOrder::identity());
    }
}
