//! The hash cons (canonicalising factories) and the memoised evolver.

use std::collections::HashMap;

use crate::error::Error;

use super::node::{Macrocell, NodeData};
use super::tile::Tile;

/// Which quadrant of a macrocell or tile to address.
#[derive(Clone, Copy, Debug)]
enum Corner {
    Nw,
    Ne,
    Sw,
    Se,
}

/// One quadrant of a macrocell: a raw [`Tile`] if the macrocell is a leaf,
/// or a child [`Macrocell`] one level down otherwise. Lets the evolver's
/// recursive decomposition be written once and dispatch on whichever
/// representation its inputs actually are, instead of duplicating the
/// leaf/branch cases at every call site.
#[derive(Clone)]
enum Quad {
    Tile(Tile),
    Cell(Macrocell),
}

fn corner_of(m: &Macrocell, which: Corner) -> Quad {
    match m.data() {
        NodeData::Leaf { nw, ne, sw, se } => Quad::Tile(match which {
            Corner::Nw => *nw,
            Corner::Ne => *ne,
            Corner::Sw => *sw,
            Corner::Se => *se,
        }),
        NodeData::Branch { nw, ne, sw, se, .. } => Quad::Cell(
            match which {
                Corner::Nw => nw,
                Corner::Ne => ne,
                Corner::Sw => sw,
                Corner::Se => se,
            }
            .clone(),
        ),
    }
}

/// The Hashlife hash cons: owns the canonical leaf/node tables for one
/// evolver session, never a process-wide global, so independent universes
/// or rule sets never cross-contaminate each other's cache.
#[derive(Debug, Default)]
pub struct Hashlife {
    leaves: HashMap<(Tile, Tile, Tile, Tile), Macrocell>,
    nodes: HashMap<(usize, usize, usize, usize, usize), Macrocell>,
}

impl Hashlife {
    /// Creates an empty evolver context with its own hash cons.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds (or retrieves, if an equal one already exists) the level-4
    /// leaf holding these four tile quadrants.
    pub fn leaf(&mut self, nw: Tile, ne: Tile, sw: Tile, se: Tile) -> Macrocell {
        let key = (nw, ne, sw, se);
        if let Some(existing) = self.leaves.get(&key) {
            return existing.clone();
        }
        let node = Macrocell::new_leaf(nw, ne, sw, se);
        self.leaves.insert(key, node.clone());
        node
    }

    /// Builds (or retrieves) the node one level above four equal-level
    /// children, in NW/NE/SW/SE order.
    ///
    /// Fails if the four children do not all share one level, or that level
    /// is below 4 (no macrocell is coarser than a leaf... narrower, rather:
    /// none is *finer*).
    pub fn node(
        &mut self,
        nw: Macrocell,
        ne: Macrocell,
        sw: Macrocell,
        se: Macrocell,
    ) -> Result<Macrocell, Error> {
        let level = nw.level();
        for child in [&ne, &sw, &se] {
            if child.level() != level {
                return Err(Error::LevelMismatch {
                    lhs: level,
                    rhs: child.level(),
                });
            }
        }
        if level < 4 {
            return Err(Error::LevelTooLow(level));
        }

        let key = (level, nw.identity(), ne.identity(), sw.identity(), se.identity());
        if let Some(existing) = self.nodes.get(&key) {
            return Ok(existing.clone());
        }
        let node = Macrocell::new_branch(level + 1, nw, ne, sw, se);
        self.nodes.insert(key, node.clone());
        Ok(node)
    }

    /// Combines one corner each of four macrocells (which, by the node
    /// invariant, are either all leaves or all branches of equal level)
    /// into one new same-level macrocell.
    fn combine_corners(
        &mut self,
        m1: &Macrocell,
        c1: Corner,
        m2: &Macrocell,
        c2: Corner,
        m3: &Macrocell,
        c3: Corner,
        m4: &Macrocell,
        c4: Corner,
    ) -> Macrocell {
        match (
            corner_of(m1, c1),
            corner_of(m2, c2),
            corner_of(m3, c3),
            corner_of(m4, c4),
        ) {
            (Quad::Tile(a), Quad::Tile(b), Quad::Tile(c), Quad::Tile(d)) => self.leaf(a, b, c, d),
            (Quad::Cell(a), Quad::Cell(b), Quad::Cell(c), Quad::Cell(d)) => self
                .node(a, b, c, d)
                .expect("children share a level by the node invariant"),
            _ => unreachable!("a node's four children must share one level"),
        }
    }

    /// Advances `m` by `2^(level(m) - 2)` generations, returning a
    /// macrocell at `level(m) - 1` representing its centre.
    /// Memoised on `m` itself; computed only on demand.
    pub fn result(&mut self, m: &Macrocell) -> Macrocell {
        if let Some(cached) = m.cached_result() {
            return cached;
        }
        let result = match m.data() {
            NodeData::Leaf { nw, ne, sw, se } => self.leaf_result(*nw, *ne, *sw, *se),
            NodeData::Branch { nw, ne, sw, se, .. } => {
                self.branch_result(nw.clone(), ne.clone(), sw.clone(), se.clone())
            }
        };
        m.set_cached_result(result.clone());
        result
    }

    /// Base case: `m`'s four quadrants are raw tiles, so the whole
    /// computation is bit-parallel tile arithmetic with no further
    /// recursion into the hash cons, until the very last step wraps the
    /// four final tiles back into a leaf.
    fn leaf_result(&mut self, nw: Tile, ne: Tile, sw: Tile, se: Tile) -> Macrocell {
        let n = Tile::from_quadrants(nw.ne(), ne.nw(), nw.se(), ne.sw());
        let s = Tile::from_quadrants(sw.ne(), se.nw(), sw.se(), se.sw());
        let w = Tile::from_quadrants(nw.sw(), nw.se(), sw.nw(), sw.ne());
        let e = Tile::from_quadrants(ne.sw(), ne.se(), se.nw(), se.ne());
        let c = Tile::from_quadrants(nw.se(), ne.sw(), sw.ne(), se.nw());

        let nw1 = nw.result();
        let ne1 = ne.result();
        let sw1 = sw.result();
        let se1 = se.result();
        let n1 = n.result();
        let s1 = s.result();
        let w1 = w.result();
        let e1 = e.result();
        let c1 = c.result();

        let nw2 = Tile::from_quadrants(nw1, n1, w1, c1).result();
        let ne2 = Tile::from_quadrants(n1, ne1, c1, e1).result();
        let sw2 = Tile::from_quadrants(w1, c1, sw1, s1).result();
        let se2 = Tile::from_quadrants(c1, e1, s1, se1).result();

        self.leaf(nw2, ne2, sw2, se2)
    }

    /// General recursive case: `m`'s four quadrants are macrocells (leaves
    /// or branches, always equal level by the node invariant).
    fn branch_result(
        &mut self,
        nw: Macrocell,
        ne: Macrocell,
        sw: Macrocell,
        se: Macrocell,
    ) -> Macrocell {
        let n = self.combine_corners(&nw, Corner::Ne, &ne, Corner::Nw, &nw, Corner::Se, &ne, Corner::Sw);
        let s = self.combine_corners(&sw, Corner::Ne, &se, Corner::Nw, &sw, Corner::Se, &se, Corner::Sw);
        let w = self.combine_corners(&nw, Corner::Sw, &nw, Corner::Se, &sw, Corner::Nw, &sw, Corner::Ne);
        let e = self.combine_corners(&ne, Corner::Sw, &ne, Corner::Se, &se, Corner::Nw, &se, Corner::Ne);
        let c = self.combine_corners(&nw, Corner::Se, &ne, Corner::Sw, &sw, Corner::Ne, &se, Corner::Nw);

        let nw1 = self.result(&nw);
        let ne1 = self.result(&ne);
        let sw1 = self.result(&sw);
        let se1 = self.result(&se);
        let n1 = self.result(&n);
        let s1 = self.result(&s);
        let w1 = self.result(&w);
        let e1 = self.result(&e);
        let c1 = self.result(&c);

        // `nw`'s own level pins the level of all nine results above: a leaf
        // always reports level() == 4 no matter how much of its tiles is
        // populated, so when `nw` is a leaf, `nw1..c1` are leaves holding a
        // level-3 square (masked to their own centre 4x4 by `leaf_result`),
        // not genuine level-4 leaves. There is no level-3 macrocell type to
        // hold them, so `node()` must not be used to recombine them — it
        // would read their hard-coded level() == 4 as real and build a
        // spurious level-5 branch, which on its own next `result()` call
        // decomposes back into leaf children and never bottoms out. Instead
        // collapse each masked leaf back to a single tile (the inverse of
        // the masking `leaf_result` applies) and rewrap as a leaf, exactly
        // as `leaf_result` itself does for the tile quadrants one level down.
        if matches!(nw.data(), NodeData::Leaf { .. }) {
            let nw2 = self.leaf_from_leaves(&nw1, &n1, &w1, &c1);
            let ne2 = self.leaf_from_leaves(&n1, &ne1, &c1, &e1);
            let sw2 = self.leaf_from_leaves(&w1, &c1, &sw1, &s1);
            let se2 = self.leaf_from_leaves(&c1, &e1, &s1, &se1);

            let r_nw2 = self.result(&nw2);
            let r_ne2 = self.result(&ne2);
            let r_sw2 = self.result(&sw2);
            let r_se2 = self.result(&se2);

            return self.leaf_from_leaves(&r_nw2, &r_ne2, &r_sw2, &r_se2);
        }

        let nw2 = self
            .node(nw1, n1, w1, c1)
            .expect("children share a level by construction");
        let ne2 = self
            .node(n1, ne1, c1, e1)
            .expect("children share a level by construction");
        let sw2 = self
            .node(w1, c1, sw1, s1)
            .expect("children share a level by construction");
        let se2 = self
            .node(c1, e1, s1, se1)
            .expect("children share a level by construction");

        let r_nw2 = self.result(&nw2);
        let r_ne2 = self.result(&ne2);
        let r_sw2 = self.result(&sw2);
        let r_se2 = self.result(&se2);

        self.node(r_nw2, r_ne2, r_sw2, r_se2)
            .expect("children share a level by construction")
    }

    /// Collapses a leaf's four tile quadrants back into one tile via
    /// [`Tile::from_quadrants`] — the inverse of the masking `leaf_result`
    /// applies when it builds a leaf holding a level-3 (or lower) square.
    fn leaf_as_tile(m: &Macrocell) -> Tile {
        match m.data() {
            NodeData::Leaf { nw, ne, sw, se } => Tile::from_quadrants(*nw, *ne, *sw, *se),
            NodeData::Branch { .. } => unreachable!("leaf_as_tile called on a branch"),
        }
    }

    /// Combines four leaves into one new leaf by collapsing each to a tile
    /// first, in place of `node()`: used whenever the pieces being combined
    /// are themselves leaves, since a leaf's `level()` is always 4 and
    /// cannot distinguish "a genuine level-4 leaf" from "a level-3 (or
    /// lower) square parked in a leaf for lack of a dedicated type".
    fn leaf_from_leaves(
        &mut self,
        nw: &Macrocell,
        ne: &Macrocell,
        sw: &Macrocell,
        se: &Macrocell,
    ) -> Macrocell {
        self.leaf(
            Self::leaf_as_tile(nw),
            Self::leaf_as_tile(ne),
            Self::leaf_as_tile(sw),
            Self::leaf_as_tile(se),
        )
    }

    /// Returns an empty macrocell at `level`, built bottom-up from an empty
    /// leaf. A convenience for callers padding a universe before stepping
    /// it; not memoised beyond the ordinary hash cons.
    pub fn empty(&mut self, level: usize) -> Macrocell {
        assert!(level >= 4, "no macrocell is finer than a leaf");
        let empty_tile = Tile::DEAD;
        let mut cell = self.leaf(empty_tile, empty_tile, empty_tile, empty_tile);
        while cell.level() < level {
            cell = self
                .node(cell.clone(), cell.clone(), cell.clone(), cell.clone())
                .expect("four clones of the same macrocell share a level");
        }
        cell
    }

    /// Centres `m` inside an empty macrocell one level taller, then steps
    /// it: a correct default for callers who don't want to hand-roll
    /// padding before every step.
    ///
    /// `m`'s own quadrants are tucked into the inner corner of four new
    /// same-level pieces, each otherwise empty, so that after `result` the
    /// returned macrocell (one level down from the padded one, i.e. back at
    /// `m`'s own level) is centred on what used to be `m` as a whole.
    pub fn expand(&mut self, m: &Macrocell) -> Macrocell {
        let level = m.level();
        let border = if level == 4 {
            Quad::Tile(Tile::DEAD)
        } else {
            Quad::Cell(self.empty(level - 1))
        };

        let nw = self.wrap_quad(border.clone(), border.clone(), border.clone(), corner_of(m, Corner::Nw));
        let ne = self.wrap_quad(border.clone(), border.clone(), corner_of(m, Corner::Ne), border.clone());
        let sw = self.wrap_quad(border.clone(), corner_of(m, Corner::Sw), border.clone(), border.clone());
        let se = self.wrap_quad(corner_of(m, Corner::Se), border.clone(), border.clone(), border);

        let padded = self
            .node(nw, ne, sw, se)
            .expect("same level by construction");
        self.result(&padded)
    }

    /// Wraps four same-kind quadrants back into a macrocell one level up,
    /// dispatching between a fresh leaf and a fresh node.
    fn wrap_quad(&mut self, nw: Quad, ne: Quad, sw: Quad, se: Quad) -> Macrocell {
        match (nw, ne, sw, se) {
            (Quad::Tile(a), Quad::Tile(b), Quad::Tile(c), Quad::Tile(d)) => self.leaf(a, b, c, d),
            (Quad::Cell(a), Quad::Cell(b), Quad::Cell(c), Quad::Cell(d)) => self
                .node(a, b, c, d)
                .expect("children share a level by construction"),
            _ => unreachable!("a node's four children must share one level"),
        }
    }
}
