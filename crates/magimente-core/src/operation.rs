//! Arithmetic operations and difficulty levels.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// The arithmetic operation a puzzle is played under.
///
/// [`Subtract`](Operation::Subtract) and [`Divide`](Operation::Divide)
/// are not non-commutative reductions: subtraction puzzles encode
/// negative operands and division puzzles encode fractional operands
/// directly in their data, and both fold with the same commutative
/// sum/product as [`Add`](Operation::Add) and
/// [`Multiply`](Operation::Multiply). This matches the puzzle data and is
/// deliberate.
///
/// # Examples
///
/// ```
/// use magimente_core::Operation;
///
/// let line = [10.0, 0.5, 4.0];
/// let aggregate = line
///     .iter()
///     .fold(Operation::Divide.identity(), |acc, v| {
///         Operation::Divide.fold(acc, *v)
///     });
/// assert!((aggregate - 20.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// Sum of the line, target-matched directly.
    Add,
    /// Sum of the line over signed operands.
    Subtract,
    /// Product of the line.
    Multiply,
    /// Product of the line over fractional operands.
    Divide,
}

impl Operation {
    /// Array containing all operations.
    pub const ALL: [Self; 4] = [Self::Add, Self::Subtract, Self::Multiply, Self::Divide];

    /// Returns the fold identity: 0 for additive operations, 1 for
    /// multiplicative ones.
    #[must_use]
    pub fn identity(self) -> f64 {
        if self.is_multiplicative() { 1.0 } else { 0.0 }
    }

    /// Folds one line value into the running aggregate.
    #[must_use]
    pub fn fold(self, acc: f64, value: f64) -> f64 {
        if self.is_multiplicative() {
            acc * value
        } else {
            acc + value
        }
    }

    /// Returns whether this operation aggregates by product.
    #[must_use]
    pub fn is_multiplicative(self) -> bool {
        matches!(self, Self::Multiply | Self::Divide)
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an [`Operation`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown operation: {name:?}")]
pub struct ParseOperationError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Operation {
    type Err = ParseOperationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "add" | "+" => Ok(Self::Add),
            "subtract" | "sub" | "-" => Ok(Self::Subtract),
            "multiply" | "mul" | "*" | "x" => Ok(Self::Multiply),
            "divide" | "div" | "/" => Ok(Self::Divide),
            _ => Err(ParseOperationError { name: s.to_owned() }),
        }
    }
}

/// Puzzle difficulty level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// 3×3 grids with small values.
    Easy,
    /// 3×3 grids with larger or more varied values.
    Medium,
    /// 4×4 grids.
    Hard,
}

impl Level {
    /// Array containing all levels in increasing difficulty.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];
}

impl Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing a [`Level`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown level: {name:?}")]
pub struct ParseLevelError {
    /// The rejected input.
    pub name: String,
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(ParseLevelError { name: s.to_owned() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn additive_fold_from_identity() {
        let sum = [8.0, 1.0, 6.0]
            .iter()
            .fold(Operation::Add.identity(), |acc, v| {
                Operation::Add.fold(acc, *v)
            });
        assert!((sum - 15.0).abs() < f64::EPSILON);

        // Subtraction puzzles are sums over signed operands.
        let sum = [10.0, -3.0, -2.0]
            .iter()
            .fold(Operation::Subtract.identity(), |acc, v| {
                Operation::Subtract.fold(acc, *v)
            });
        assert!((sum - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn multiplicative_fold_from_identity() {
        let product = [10.0, 0.5, 4.0]
            .iter()
            .fold(Operation::Divide.identity(), |acc, v| {
                Operation::Divide.fold(acc, *v)
            });
        assert!((product - 20.0).abs() < f64::EPSILON);
    }

    #[test]
    fn parse_round_trips_display() {
        for operation in Operation::ALL {
            assert_eq!(operation.to_string().parse::<Operation>(), Ok(operation));
        }
        for level in Level::ALL {
            assert_eq!(level.to_string().parse::<Level>(), Ok(level));
        }
        assert!("modulo".parse::<Operation>().is_err());
        assert!("extreme".parse::<Level>().is_err());
    }
}
