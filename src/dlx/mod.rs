//! Exact cover via dancing links (Knuth's Algorithm X).
//!
//! [`Dlx::new_problem`] builds a [`Problem`] from a universe size and a
//! family of option subsets; [`Problem::solve_all`] and
//! [`Problem::solve_one`] run the backtracking search.

mod matrix;
mod search;

use matrix::Matrix;

use crate::error::Error;

/// Namespaces the construction of exact-cover [`Problem`]s, mirroring the
/// role of a small builder rather than holding any state itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Dlx;

impl Dlx {
    /// Builds a [`Problem`] over a universe of `n_items` items from an
    /// ordered family of options, each a list of item indices in
    /// `0..n_items`.
    ///
    /// An empty `options` family yields a problem with no solutions unless
    /// `n_items == 0`, in which case the single empty subset trivially
    /// covers the (empty) universe.
    pub fn new_problem(n_items: usize, options: &[Vec<usize>]) -> Result<Problem, Error> {
        let matrix = Matrix::new(n_items, options)?;
        Ok(Problem { matrix })
    }
}

/// A constructed exact-cover instance, ready to be searched.
///
/// Searching never mutates the visible state of a `Problem`: each call
/// works on a private copy of the matrix, runs cover/uncover to
/// completion, and discards it.
#[derive(Debug, Clone)]
pub struct Problem {
    matrix: Matrix,
}

impl Problem {
    /// Returns every exact cover, each as the set of option indices
    /// (positions in the input family) making up that cover.
    ///
    /// The outer ordering reflects search order; solutions are not
    /// deduplicated beyond what distinct option sets naturally produce.
    pub fn solve_all(&self) -> Vec<Vec<usize>> {
        let mut matrix = self.matrix.clone();
        search::solve_all(&mut matrix)
    }

    /// Returns the first exact cover found, or `None` if none exists.
    ///
    /// Short-circuits the recursion at the first solution rather than
    /// filtering the output of [`solve_all`](Self::solve_all).
    pub fn solve_one(&self) -> Option<Vec<usize>> {
        let mut matrix = self.matrix.clone();
        search::solve_one(&mut matrix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sets(solutions: Vec<Vec<usize>>) -> Vec<std::collections::BTreeSet<usize>> {
        solutions
            .into_iter()
            .map(|s| s.into_iter().collect())
            .collect()
    }

    #[test]
    fn small_exact_cover_both_solutions() {
        let problem = Dlx::new_problem(
            4,
            &[vec![1, 2], vec![0], vec![0, 3], vec![3]],
        )
        .unwrap();

        let solutions = sets(problem.solve_all());
        assert_eq!(solutions.len(), 2);
        assert!(solutions.contains(&[0usize, 1, 3].into_iter().collect()));
        assert!(solutions.contains(&[0usize, 2].into_iter().collect()));
    }

    #[test]
    fn no_cover() {
        let problem = Dlx::new_problem(4, &[vec![0, 1, 2], vec![2, 3]]).unwrap();
        assert!(problem.solve_all().is_empty());
        assert!(problem.solve_one().is_none());
    }

    #[test]
    fn duplicate_options_tolerated() {
        let problem = Dlx::new_problem(
            4,
            &[
                vec![1, 2],
                vec![0],
                vec![0, 3],
                vec![3],
                vec![0],
                vec![3],
            ],
        )
        .unwrap();

        let solutions = problem.solve_all();
        assert!(!solutions.is_empty());
        for solution in &solutions {
            // Every item is covered exactly once.
            let mut covered = vec![0usize; 4];
            for &option_index in solution {
                for &item in solution_items(&problem, option_index) {
                    covered[item] += 1;
                }
            }
            assert!(covered.iter().all(|&c| c == 1));
        }
    }

    #[test]
    fn empty_option_family() {
        let problem = Dlx::new_problem(4, &[]).unwrap();
        assert!(problem.solve_all().is_empty());
    }

    #[test]
    fn empty_universe_has_one_trivial_solution() {
        let problem = Dlx::new_problem(0, &[]).unwrap();
        assert_eq!(problem.solve_all(), vec![Vec::<usize>::new()]);
    }

    #[test]
    fn rejects_out_of_range_item() {
        let err = Dlx::new_problem(2, &[vec![0, 5]]).unwrap_err();
        assert_eq!(
            err,
            Error::ItemOutOfRange {
                index: 5,
                n_items: 2
            }
        );
    }

    // Test-only helper mirroring the input option family, since `Problem`
    // does not expose option contents once built.
    fn solution_items(_problem: &Problem, option_index: usize) -> &'static [usize] {
        const OPTIONS: [&[usize]; 6] = [
            &[1, 2],
            &[0],
            &[0, 3],
            &[3],
            &[0],
            &[3],
        ];
        OPTIONS[option_index]
    }
}
