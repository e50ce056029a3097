//! The row of pegs a player fills before submitting.

use serde::{Deserialize, Serialize};

use crate::core::{Color, Result, Sequence, CODE_LENGTH};

/// A partially filled guess.
///
/// Pegs are placed into the first empty slot; any slot can be cleared again.
/// `take` only succeeds once every slot is set.
///
/// ```
/// use mastermind_core::core::Color;
/// use mastermind_core::session::GuessDraft;
///
/// let mut draft = GuessDraft::new();
/// draft.place(Color::Red);
/// assert!(draft.take().is_err());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuessDraft {
    slots: [Option<Color>; CODE_LENGTH],
}

impl GuessDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put `color` into the first empty slot.
    ///
    /// Returns the slot filled, or `None` if the row is already full.
    pub fn place(&mut self, color: Color) -> Option<usize> {
        let slot = self.slots.iter().position(Option::is_none)?;
        self.slots[slot] = Some(color);
        Some(slot)
    }

    /// Empty `slot`. Returns false if it was out of range or already empty.
    pub fn clear(&mut self, slot: usize) -> bool {
        self.slots
            .get_mut(slot)
            .and_then(Option::take)
            .is_some()
    }

    /// Empty every slot.
    pub fn reset(&mut self) {
        self.slots = [None; CODE_LENGTH];
    }

    #[must_use]
    pub fn slots(&self) -> &[Option<Color>; CODE_LENGTH] {
        &self.slots
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    /// The guess as it stands, without consuming the draft.
    pub fn to_sequence(&self) -> Result<Sequence> {
        Sequence::try_from(&self.slots[..])
    }

    /// Hand over the completed guess and empty the row.
    ///
    /// An incomplete draft is left as is.
    pub fn take(&mut self) -> Result<Sequence> {
        let guess = self.to_sequence()?;
        self.reset();
        Ok(guess)
    }
}
