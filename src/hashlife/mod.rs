//! Hashlife: space-time compression for Conway's Game of Life via a
//! canonical, hash-consed quadtree (Gosper's algorithm).
//!
//! [`Hashlife`] owns the hash cons. Build leaves from [`Tile`]s with
//! [`Hashlife::leaf`], compose them into taller nodes with
//! [`Hashlife::node`], and call [`Hashlife::result`] to advance a macrocell
//! by a doubling number of generations.

mod cache;
mod node;
mod tile;

pub use cache::Hashlife;
pub use node::Macrocell;
pub use tile::Tile;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glider_survives_one_macrocell_level_step() {
        let mut hl = Hashlife::new();
        let nw = Tile::from_bits(0);
        let ne = Tile::from_bits(0);
        let sw = Tile::from_bits(0);
        // A glider, well clear of this leaf's own centre so the composed
        // neighbourhood used by `result` is all dead outside it.
        let se = Tile::from_ascii(
            "00000000\
             00100000\
             00010000\
             01110000\
             00000000\
             00000000\
             00000000\
             00000000",
        )
        .unwrap();
        let leaf = hl.leaf(nw, ne, sw, se);
        assert_eq!(leaf.level(), 4);
        assert!(!leaf.empty());

        let r1 = hl.result(&leaf);
        assert_eq!(r1.level(), 4);
        // Determinism: repeating the call returns the same canonical
        // macrocell.
        let r2 = hl.result(&leaf);
        assert_eq!(r1, r2);
    }

    #[test]
    fn two_step_node_advances_without_panicking() {
        let mut hl = Hashlife::new();
        let glider = Tile::from_ascii(
            "00000000\
             00100000\
             00010000\
             01110000\
             00000000\
             00000000\
             00000000\
             00000000",
        )
        .unwrap();
        let leaf = hl.leaf(Tile::DEAD, Tile::DEAD, Tile::DEAD, glider);
        let branch = hl
            .node(leaf.clone(), leaf.clone(), leaf.clone(), leaf.clone())
            .unwrap();
        assert_eq!(branch.level(), 5);

        let r = hl.result(&branch);
        assert_eq!(r.level(), 4);
        assert!(!r.empty());
    }

    #[test]
    fn expand_grows_and_steps_a_pattern() {
        let mut hl = Hashlife::new();
        let glider = Tile::from_ascii(
            "00000000\
             00100000\
             00010000\
             01110000\
             00000000\
             00000000\
             00000000\
             00000000",
        )
        .unwrap();
        let leaf = hl.leaf(Tile::DEAD, Tile::DEAD, Tile::DEAD, glider);
        let stepped = hl.expand(&leaf);
        assert_eq!(stepped.level(), leaf.level());
        assert!(!stepped.empty());
    }
}
