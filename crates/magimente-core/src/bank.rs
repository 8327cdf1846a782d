//! The bank of placeable numbers.

/// A multiset of numbers not yet placed on the board.
///
/// Values may repeat. Membership and removal compare bit-for-bit
/// (`f64::to_bits`): bank numbers must match exactly as supplied by the
/// puzzle, so fractional values never match through an epsilon.
///
/// # Examples
///
/// ```
/// use magimente_core::Bank;
///
/// let mut bank = Bank::new(vec![0.5, 5.0, 0.5]);
/// assert!(bank.contains(0.5));
/// assert!(bank.take(0.5));
/// assert_eq!(bank.numbers(), &[5.0, 0.5]);
/// assert!(!bank.take(7.0));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Bank {
    numbers: Vec<f64>,
}

impl Bank {
    /// Creates a bank from the puzzle's bank list, order preserved.
    #[must_use]
    pub fn new(numbers: Vec<f64>) -> Self {
        Self { numbers }
    }

    /// Returns the remaining numbers in their original order.
    #[must_use]
    pub fn numbers(&self) -> &[f64] {
        &self.numbers
    }

    /// Returns the count of remaining numbers.
    #[must_use]
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns whether the bank is exhausted.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Returns whether `value` is present, matched bit-for-bit.
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        self.position_of(value).is_some()
    }

    /// Removes one occurrence of `value`, matched bit-for-bit.
    ///
    /// Returns `false` and leaves the bank unchanged when no occurrence
    /// exists.
    pub fn take(&mut self, value: f64) -> bool {
        if let Some(index) = self.position_of(value) {
            self.numbers.remove(index);
            true
        } else {
            false
        }
    }

    fn position_of(&self, value: f64) -> Option<usize> {
        self.numbers
            .iter()
            .position(|n| n.to_bits() == value.to_bits())
    }
}
