/*!
Dancing links and Hashlife, two classic bitwise/combinatorial algorithms
under one roof.

[`Dlx`] builds an exact-cover [`Problem`] from a universe size and a family
of option subsets, and solves it with Knuth's Algorithm X over a
four-way circular doubly-linked sparse matrix.

[`Hashlife`] is a canonical, hash-consed quadtree evolver for Conway's
Game of Life (Gosper's algorithm): build [`Tile`]s and [`Macrocell`]s,
then call [`Hashlife::result`] to advance a macrocell by a doubling
number of generations, memoised so repeated or overlapping regions are
computed only once.

# Example

Solves the classic four-item, four-option exact cover instance, then
advances a glider by four generations using Hashlife.

```rust
use dancing_hashlife::{Dlx, Hashlife, Tile};

// Dancing links: two disjoint pairs of options exactly cover {0, 1, 2, 3}.
let problem = Dlx::new_problem(4, &[vec![1, 2], vec![0], vec![0, 3], vec![3]]).unwrap();
let solution = problem.solve_one().unwrap();
assert!(!solution.is_empty());

// Hashlife: a horizontal blinker becomes vertical after one generation.
let blinker = Tile::from_ascii(
    "00000000\
     00000000\
     00000000\
     00111000\
     00000000\
     00000000\
     00000000\
     00000000",
)
.unwrap();
let vertical = Tile::from_ascii(
    "00000000\
     00000000\
     00010000\
     00010000\
     00010000\
     00000000\
     00000000\
     00000000",
)
.unwrap();
assert_eq!(blinker.next(), vertical);
```
*/

mod dlx;
mod error;
mod hashlife;

pub use dlx::{Dlx, Problem};
pub use error::Error;
pub use hashlife::{Hashlife, Macrocell, Tile};
