//! The sparse 0/1 matrix: items, options and the circular four-way links
//! that make covering and uncovering reversible.
//!
//! Both the item list and every column are represented as indices into
//! flat arenas (`Vec<Item>`, `Vec<Node>`) rather than raw pointers, per the
//! arena design chosen in the design notes: the arenas never relocate once
//! a [`Matrix`] is built, so indices remain valid identities for the life
//! of the matrix.

use crate::error::Error;

/// One element of the universe to be covered.
///
/// `prev`/`next` link `Item`s into the circular list of items still in
/// play; `count` is the number of nodes currently linked into this item's
/// column, excluding the header itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Item {
    pub(crate) prev: usize,
    pub(crate) next: usize,
    pub(crate) count: usize,
}

/// One cell of the sparse matrix, or a column header.
///
/// Column headers occupy node indices `0..n_items`; `top` of a header is
/// its own index and `owner` is `None`. Real cells occupy the remaining
/// indices; `top` names the item (column) they belong to and `owner`
/// names the option (row) they belong to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Node {
    pub(crate) up: usize,
    pub(crate) down: usize,
    pub(crate) top: usize,
    pub(crate) owner: Option<usize>,
}

/// One input option (row): a stable external index plus the node indices
/// of its cells, in the order their items were listed.
#[derive(Debug, Clone)]
pub(crate) struct DlxOption {
    pub(crate) index: usize,
    pub(crate) nodes: Vec<usize>,
}

/// The dancing-links matrix: item header list, node arena and option list.
///
/// `items[n_items]` is the sentinel root of the item list (an empty list
/// links to itself); node indices `0..n_items` are the column headers,
/// paired one-to-one with `items[0..n_items]`.
#[derive(Debug, Clone)]
pub(crate) struct Matrix {
    pub(crate) items: Vec<Item>,
    pub(crate) nodes: Vec<Node>,
    pub(crate) options: Vec<DlxOption>,
    pub(crate) n_items: usize,
}

impl Matrix {
    /// The index of the item-list sentinel root.
    pub(crate) fn root(&self) -> usize {
        self.n_items
    }

    /// Builds the matrix from a universe size and an ordered family of
    /// options, each a list of item indices in `0..n_items`.
    pub(crate) fn new(n_items: usize, options: &[Vec<usize>]) -> Result<Self, Error> {
        let root = n_items;

        // Item list: n_items real items plus the sentinel root, all
        // initially linked into one circular list in index order.
        let mut items = Vec::with_capacity(n_items + 1);
        for i in 0..n_items {
            let prev = if i == 0 { root } else { i - 1 };
            let next = if i + 1 == n_items { root } else { i + 1 };
            items.push(Item { prev, next, count: 0 });
        }
        items.push(Item {
            prev: if n_items == 0 { root } else { n_items - 1 },
            next: if n_items == 0 { root } else { 0 },
            count: 0,
        });

        // Node arena: one header per item, columns initially empty
        // (circular to themselves).
        let mut nodes = Vec::with_capacity(n_items);
        for i in 0..n_items {
            nodes.push(Node {
                up: i,
                down: i,
                top: i,
                owner: None,
            });
        }

        let mut dlx_options = Vec::with_capacity(options.len());
        for (option_index, option) in options.iter().enumerate() {
            for &item_index in option {
                if item_index >= n_items {
                    return Err(Error::ItemOutOfRange {
                        index: item_index,
                        n_items,
                    });
                }
            }

            let mut row_nodes = Vec::with_capacity(option.len());
            for &item_index in option {
                let node_index = nodes.len();
                let header = item_index;
                let tail = nodes[header].up;
                nodes.push(Node {
                    up: tail,
                    down: header,
                    top: header,
                    owner: Some(option_index),
                });
                nodes[tail].down = node_index;
                nodes[header].up = node_index;
                items[item_index].count += 1;
                row_nodes.push(node_index);
            }

            dlx_options.push(DlxOption {
                index: option_index,
                nodes: row_nodes,
            });
        }

        Ok(Matrix {
            items,
            nodes,
            options: dlx_options,
            n_items,
        })
    }

    /// Removes item `c` from the item list and hides every row that still
    /// meets it, decrementing the counts of the items those rows also
    /// cover. See the module docs for the reversibility discipline this
    /// relies on: nothing but `prev`/`next`/`up`/`down`/`count` on *other*
    /// items and nodes is ever rewritten.
    pub(crate) fn cover(&mut self, c: usize) {
        let item = &self.items[c];
        let (prev, next) = (item.prev, item.next);
        self.items[prev].next = next;
        self.items[next].prev = prev;

        let mut r = self.nodes[c].down;
        while r != c {
            self.hide_row(r);
            r = self.nodes[r].down;
        }
    }

    /// The exact inverse of [`cover`](Self::cover): must be called with
    /// items uncovered in the reverse order they were covered.
    pub(crate) fn uncover(&mut self, c: usize) {
        let mut r = self.nodes[c].up;
        while r != c {
            self.unhide_row(r);
            r = self.nodes[r].up;
        }

        let item = &self.items[c];
        let (prev, next) = (item.prev, item.next);
        self.items[prev].next = c;
        self.items[next].prev = c;
    }

    /// Unlinks every node of `r`'s option other than `r` itself from its
    /// column, walking the option's node list forward.
    fn hide_row(&mut self, r: usize) {
        let owner = self.nodes[r].owner.expect("row node must have an owner");
        let option_nodes = self.options[owner].nodes.clone();
        for j in option_nodes {
            if j == r {
                continue;
            }
            let (up, down, top) = (self.nodes[j].up, self.nodes[j].down, self.nodes[j].top);
            self.nodes[up].down = down;
            self.nodes[down].up = up;
            self.items[top].count -= 1;
        }
    }

    /// The inverse of [`hide_row`](Self::hide_row): walks the same
    /// option's node list in reverse, relinking each node and restoring
    /// its item's count.
    fn unhide_row(&mut self, r: usize) {
        let owner = self.nodes[r].owner.expect("row node must have an owner");
        let option_nodes = self.options[owner].nodes.clone();
        for j in option_nodes.into_iter().rev() {
            if j == r {
                continue;
            }
            let (up, down) = (self.nodes[j].up, self.nodes[j].down);
            self.nodes[up].down = j;
            self.nodes[down].up = j;
            self.items[self.nodes[j].top].count += 1;
        }
    }

    /// Returns the item with minimum `count` in the current item list
    /// (MRV), ties broken by first encountered, or `None` if the list is
    /// empty (an exact cover has been found).
    pub(crate) fn next_candidate(&self) -> Option<usize> {
        let root = self.root();
        let mut c = self.items[root].next;
        if c == root {
            return None;
        }
        let mut best = c;
        let mut best_count = self.items[c].count;
        c = self.items[c].next;
        while c != root {
            if self.items[c].count < best_count {
                best = c;
                best_count = self.items[c].count;
            }
            c = self.items[c].next;
        }
        Some(best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_universe_has_no_items() {
        let matrix = Matrix::new(0, &[]).unwrap();
        assert_eq!(matrix.next_candidate(), None);
    }

    #[test]
    fn rejects_out_of_range_item() {
        let err = Matrix::new(2, &[vec![0, 2]]).unwrap_err();
        assert_eq!(
            err,
            Error::ItemOutOfRange {
                index: 2,
                n_items: 2
            }
        );
    }

    #[test]
    fn cover_uncover_is_reversible() {
        let mut matrix = Matrix::new(4, &[vec![1, 2], vec![0], vec![0, 3], vec![3]]).unwrap();
        let before = matrix.clone();

        matrix.cover(0);
        matrix.cover(1);
        matrix.uncover(1);
        matrix.uncover(0);

        assert_eq!(matrix.items, before.items);
        assert_eq!(matrix.nodes, before.nodes);
    }
}
