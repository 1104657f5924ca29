//! Focus movement across the letter boxes
//!
//! Pure functions over the guess slots; the TUI calls them after each key.

use crate::core::GuessAssembler;

/// Focus after a character was typed into `index`
///
/// Advances to the next box when there is one.
#[must_use]
pub fn after_input(index: usize, len: usize) -> usize {
    if index + 1 < len { index + 1 } else { index }
}

/// Focus after backspace in `index`
///
/// Moves back only when the box was already empty.
#[must_use]
pub fn after_backspace(index: usize, was_empty: bool) -> usize {
    if was_empty && index > 0 { index - 1 } else { index }
}

/// Where focus lands when the player tries to focus `index`
///
/// Focusing a box whose predecessor is empty bounces back to that
/// predecessor, repeatedly, so focus settles on the first empty box before
/// `index`.
#[must_use]
pub fn redirect(index: usize, slots: &GuessAssembler) -> usize {
    let mut index = index.min(slots.len().saturating_sub(1));
    while index > 0 && slots.slot(index - 1).is_none() {
        index -= 1;
    }
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_advances_until_last() {
        assert_eq!(after_input(0, 6), 1);
        assert_eq!(after_input(4, 6), 5);
        assert_eq!(after_input(5, 6), 5);
    }

    #[test]
    fn backspace_moves_back_only_from_empty() {
        assert_eq!(after_backspace(3, false), 3);
        assert_eq!(after_backspace(3, true), 2);
        assert_eq!(after_backspace(0, true), 0);
    }

    #[test]
    fn redirect_to_first_empty_predecessor() {
        let mut slots = GuessAssembler::new(6);
        assert_eq!(redirect(4, &slots), 0);

        slots.set_slot(0, "p").unwrap();
        slots.set_slot(1, "u").unwrap();
        assert_eq!(redirect(4, &slots), 2);
        assert_eq!(redirect(2, &slots), 2);
        assert_eq!(redirect(1, &slots), 1);
    }

    #[test]
    fn redirect_clamps_to_last_box() {
        let mut slots = GuessAssembler::new(3);
        for (i, ch) in ['a', 'b', 'c'].into_iter().enumerate() {
            slots.set_char(i, ch).unwrap();
        }
        assert_eq!(redirect(10, &slots), 2);
    }

    #[test]
    fn redirect_with_no_boxes() {
        let slots = GuessAssembler::new(0);
        assert_eq!(redirect(3, &slots), 0);
    }
}
