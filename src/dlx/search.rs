//! Algorithm X: backtracking exact-cover search over a [`Matrix`], driven
//! by the minimum-remaining-values heuristic.

use super::matrix::Matrix;

/// Runs Algorithm X to completion, collecting every exact cover.
///
/// Returns the option indices of each solution, in the order the search
/// discovered them.
pub(crate) fn solve_all(matrix: &mut Matrix) -> Vec<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut current = Vec::new();
    search(matrix, &mut current, &mut solutions, false);
    solutions
}

/// Runs Algorithm X until the first exact cover is found, short-circuiting
/// the recursion rather than filtering a full enumeration.
pub(crate) fn solve_one(matrix: &mut Matrix) -> Option<Vec<usize>> {
    let mut solutions = Vec::new();
    let mut current = Vec::new();
    search(matrix, &mut current, &mut solutions, true);
    solutions.pop()
}

/// `stop_at_first` turns the recursion into a short-circuiting search:
/// once `solutions` holds one entry, every enclosing frame returns
/// immediately without exploring further rows or columns.
fn search(
    matrix: &mut Matrix,
    current: &mut Vec<usize>,
    solutions: &mut Vec<Vec<usize>>,
    stop_at_first: bool,
) {
    let Some(c) = matrix.next_candidate() else {
        solutions.push(current.clone());
        return;
    };

    if matrix.items[c].count == 0 {
        return;
    }

    matrix.cover(c);

    let mut r = matrix.nodes[c].down;
    while r != c {
        let owner = matrix.nodes[r].owner.expect("row node must have an owner");
        let row_nodes = matrix.options[owner].nodes.clone();
        for &j in &row_nodes {
            if j != r {
                matrix.cover(matrix.nodes[j].top);
            }
        }

        current.push(matrix.options[owner].index);
        search(matrix, current, solutions, stop_at_first);
        current.pop();

        for &j in row_nodes.iter().rev() {
            if j != r {
                matrix.uncover(matrix.nodes[j].top);
            }
        }

        if stop_at_first && !solutions.is_empty() {
            break;
        }

        r = matrix.nodes[r].down;
    }

    matrix.uncover(c);
}
