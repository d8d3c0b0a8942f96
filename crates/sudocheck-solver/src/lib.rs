//! Backtracking solver for sudocheck boards.
//!
//! The solver performs an exhaustive depth-first search with constraint
//! pruning: it fills the first empty cell (row-major) with the smallest
//! legal candidate, recurses, and undoes the placement when the recursion
//! fails. The search order is fixed, so solving the same puzzle always
//! yields the same solution, even when the puzzle admits several.
//!
//! # Examples
//!
//! ```
//! use sudocheck_solver::solve;
//!
//! let puzzle =
//!     "5..91372.3...8.5.9.9.25..8.68.47.23...95..46.7.4.....5.2.......4..8916..85.72...3";
//! let solution = solve(puzzle)?;
//! assert_eq!(solution.len(), 81);
//! assert!(!solution.contains('.'));
//! # Ok::<(), sudocheck_solver::SolveError>(())
//! ```

pub mod backtrack;

pub use self::backtrack::{SolveError, solve, solve_board};
