//! Cell states.

/// The state of a single board cell.
///
/// The fixed/filled distinction is part of the type so that the illegal
/// transition from a puzzle-given cell to a player value is
/// unrepresentable: [`Board`](crate::Board) only ever turns `Empty` into
/// `Filled`.
///
/// # Examples
///
/// ```
/// use magimente_core::CellState;
///
/// let cell = CellState::Fixed(8.0);
/// assert!(cell.is_fixed());
/// assert_eq!(cell.value(), Some(8.0));
/// assert_eq!(CellState::Empty.value(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, derive_more::IsVariant)]
pub enum CellState {
    /// A puzzle-given cell. Its value never changes for the lifetime of
    /// the session.
    Fixed(f64),
    /// A cell filled by the player from the bank.
    Filled(f64),
    /// A cell still waiting for a player value.
    Empty,
}

impl CellState {
    /// Returns the cell's value, if it has one.
    #[must_use]
    pub fn value(&self) -> Option<f64> {
        match self {
            Self::Fixed(value) | Self::Filled(value) => Some(*value),
            Self::Empty => None,
        }
    }
}
