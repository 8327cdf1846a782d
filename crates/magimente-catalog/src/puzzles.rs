//! The baked-in puzzle data.
//!
//! Subtraction puzzles encode negative operands and division puzzles
//! encode fractional operands directly, so every puzzle aggregates with
//! the plain sum/product fold. Every entry has been checked to admit a
//! full solution reaching its target, even though the engine itself
//! never verifies solvability.

use magimente_core::{Level, Operation, Puzzle};

fn puzzle(
    id: &str,
    grid: Vec<Vec<Option<f64>>>,
    target: f64,
    operation: Operation,
    level: Level,
    bank: Vec<f64>,
) -> Puzzle {
    Puzzle::new(id, grid, target, operation, level, bank)
        .expect("catalog puzzle data is well-formed")
}

/// Returns every catalog puzzle for `level`.
pub(crate) fn catalog(level: Level) -> Vec<Puzzle> {
    match level {
        Level::Easy => easy(),
        Level::Medium => medium(),
        Level::Hard => hard(),
    }
}

fn easy() -> Vec<Puzzle> {
    vec![
        // The classic Lo Shu square: 8 1 6 / 3 5 7 / 4 9 2.
        puzzle(
            "e1_add",
            vec![
                vec![Some(8.0), None, Some(6.0)],
                vec![None, Some(5.0), None],
                vec![Some(4.0), None, Some(2.0)],
            ],
            15.0,
            Operation::Add,
            Level::Easy,
            vec![1.0, 3.0, 7.0, 9.0],
        ),
        puzzle(
            "e2_add",
            vec![
                vec![None, Some(7.0), Some(2.0)],
                vec![Some(1.0), Some(5.0), None],
                vec![None, Some(3.0), None],
            ],
            15.0,
            Operation::Add,
            Level::Easy,
            vec![4.0, 6.0, 8.0, 9.0],
        ),
        // Lo Shu shifted by -3: every line sums to 6.
        puzzle(
            "e1_sub",
            vec![
                vec![Some(5.0), None, Some(3.0)],
                vec![None, Some(2.0), None],
                vec![Some(1.0), None, Some(-1.0)],
            ],
            6.0,
            Operation::Subtract,
            Level::Easy,
            vec![-2.0, 0.0, 4.0, 6.0],
        ),
        puzzle(
            "e1_mul",
            vec![
                vec![None, Some(1.0), Some(6.0)],
                vec![Some(10.0), None, None],
                vec![None, Some(4.0), None],
            ],
            60.0,
            Operation::Multiply,
            Level::Easy,
            vec![0.4, 0.6, 10.0, 15.0, 25.0],
        ),
        puzzle(
            "e1_div",
            vec![
                vec![Some(20.0), None, Some(2.0)],
                vec![None, Some(10.0), None],
                vec![Some(4.0), None, Some(1.25)],
            ],
            20.0,
            Operation::Divide,
            Level::Easy,
            vec![0.25, 0.5, 4.0, 8.0],
        ),
    ]
}

fn medium() -> Vec<Puzzle> {
    vec![
        // Lo Shu shifted by +9: every line sums to 42.
        puzzle(
            "m1_add",
            vec![
                vec![None, Some(10.0), None],
                vec![Some(12.0), Some(14.0), None],
                vec![Some(13.0), None, Some(11.0)],
            ],
            42.0,
            Operation::Add,
            Level::Medium,
            vec![15.0, 16.0, 17.0, 18.0],
        ),
        puzzle(
            "m2_add",
            vec![
                vec![Some(17.0), Some(10.0), None],
                vec![None, Some(14.0), None],
                vec![None, None, Some(11.0)],
            ],
            42.0,
            Operation::Add,
            Level::Medium,
            vec![12.0, 13.0, 15.0, 16.0, 18.0],
        ),
        puzzle(
            "m1_sub",
            vec![
                vec![Some(25.0), Some(-10.0), None],
                vec![None, Some(0.0), None],
                vec![Some(5.0), None, Some(-15.0)],
            ],
            10.0,
            Operation::Subtract,
            Level::Medium,
            vec![-20.0, -5.0, 20.0, 30.0],
        ),
        puzzle(
            "m1_mul",
            vec![
                vec![Some(2.0), Some(10.0), None],
                vec![None, Some(3.0), Some(20.0)],
                vec![Some(30.0), None, None],
            ],
            300.0,
            Operation::Multiply,
            Level::Medium,
            vec![1.0, 5.0, 10.0, 15.0],
        ),
    ]
}

fn hard() -> Vec<Puzzle> {
    vec![
        // Dürer's square from Melencolia I; every line sums to 34.
        puzzle(
            "h1_add",
            vec![
                vec![Some(16.0), None, None, Some(13.0)],
                vec![None, Some(10.0), Some(11.0), None],
                vec![None, Some(6.0), Some(7.0), Some(12.0)],
                vec![Some(4.0), None, Some(14.0), None],
            ],
            34.0,
            Operation::Add,
            Level::Hard,
            vec![1.0, 2.0, 3.0, 5.0, 8.0, 9.0, 15.0],
        ),
        // Circulant over {2, 6, 10, 14}; every line multiplies to 1680.
        puzzle(
            "h1_mul",
            vec![
                vec![Some(14.0), None, Some(6.0), None],
                vec![None, Some(14.0), Some(10.0), None],
                vec![Some(6.0), Some(2.0), None, Some(10.0)],
                vec![None, Some(6.0), Some(2.0), None],
            ],
            1680.0,
            Operation::Multiply,
            Level::Hard,
            vec![2.0, 2.0, 6.0, 10.0, 10.0, 14.0, 14.0],
        ),
        puzzle(
            "h1_sub",
            vec![
                vec![Some(-5.0), None, Some(15.0), None],
                vec![Some(20.0), Some(10.0), None, Some(-10.0)],
                vec![None, Some(0.0), Some(-20.0), None],
                vec![Some(5.0), None, None, Some(25.0)],
            ],
            30.0,
            Operation::Subtract,
            Level::Hard,
            vec![-25.0, -25.0, 10.0, 10.0, 25.0, 40.0, 45.0],
        ),
        puzzle(
            "h1_div",
            vec![
                vec![Some(10.0), None, Some(0.2), None],
                vec![None, Some(0.25), Some(4.0), None],
                vec![Some(0.5), Some(5.0), None, Some(2.0)],
                vec![None, Some(1.0), Some(6.25), None],
            ],
            10.0,
            Operation::Divide,
            Level::Hard,
            vec![0.625, 0.8, 2.0, 2.0, 2.5, 4.0, 8.0],
        ),
    ]
}
