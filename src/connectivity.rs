use crate::atom::Atom;
use crate::structure::Structure;
use crate::unit_cell::UnitCell;
use nalgebra::DMatrix;
use rand::Rng;

/// Two atoms closer than this (Å) are considered bonded.
pub const BOND_CUTOFF: f64 = 2.56;

/// Adjacency between tetrahedral sites.
///
/// Rows and columns are T-site indices (position among the Si atoms), not
/// indices into the atom list. Two T sites are neighbours when some atom of
/// the framework, typically a bridging oxygen, is bonded to both. The
/// substitution algorithms consume the graph by removing edges as they go.
#[derive(Debug, Clone, PartialEq)]
pub struct TSiteGraph {
    adjacency: DMatrix<u8>,
}

/// Minimum image distance between two atoms.
///
/// Each fractional component is folded into the nearest periodic image and
/// then scaled by the matching cell length, which ignores the cell angles.
pub fn distance(a1: &Atom, a2: &Atom, cell: &UnitCell) -> f64 {
    a1.position()
        .iter()
        .zip(a2.position().iter())
        .zip(cell.lengths.iter())
        .map(|((p1, p2), length)| {
            let direct = (p1 - p2).abs();
            let image = if p1 <= p2 {
                (p1 + 1.0 - p2).abs()
            } else {
                (p2 + 1.0 - p1).abs()
            };
            let d = direct.min(image) * length;
            d * d
        })
        .sum::<f64>()
        .sqrt()
}

pub fn bonded(a1: &Atom, a2: &Atom, cell: &UnitCell) -> bool {
    distance(a1, a2, cell) < BOND_CUTOFF
}

impl TSiteGraph {
    /// Graph with `size` sites and no edges.
    pub fn new(size: usize) -> Self {
        TSiteGraph {
            adjacency: DMatrix::zeros(size, size),
        }
    }

    pub fn from_structure(structure: &Structure) -> Self {
        let atoms = structure.atoms();
        let cell = &structure.unit_cell;
        let t_sites = structure.t_sites();
        let mut graph = Self::new(t_sites.len());

        // For every atom, find the T sites bonded to it; all of them share it
        // as a bridge and are therefore pairwise neighbours.
        for (k, atom) in atoms.iter().enumerate() {
            let bridged: Vec<usize> = t_sites
                .iter()
                .enumerate()
                .filter(|&(_, &index)| index != k && bonded(&atoms[index], atom, cell))
                .map(|(t, _)| t)
                .collect();
            for (n, &i) in bridged.iter().enumerate() {
                for &j in &bridged[n + 1..] {
                    graph.link(i, j);
                }
            }
        }

        graph
    }

    pub fn size(&self) -> usize {
        self.adjacency.nrows()
    }

    pub fn adjacency(&self) -> &DMatrix<u8> {
        &self.adjacency
    }

    pub fn are_linked(&self, i: usize, j: usize) -> bool {
        self.adjacency[(i, j)] == 1
    }

    pub fn link(&mut self, i: usize, j: usize) {
        if i != j {
            self.adjacency[(i, j)] = 1;
            self.adjacency[(j, i)] = 1;
        }
    }

    /// Removes the edge between `i` and `j`.
    pub fn unlink(&mut self, i: usize, j: usize) {
        self.adjacency[(i, j)] = 0;
        self.adjacency[(j, i)] = 0;
    }

    /// Removes every edge touching `n`.
    pub fn isolate(&mut self, n: usize) {
        self.adjacency.row_mut(n).fill(0);
        self.adjacency.column_mut(n).fill(0);
    }

    /// Current neighbours of `n`, in ascending order.
    pub fn neighbours_of(&self, n: usize) -> Vec<usize> {
        (0..self.size()).filter(|&j| self.are_linked(n, j)).collect()
    }

    /// Current neighbour lists of every site.
    pub fn neighbours(&self) -> Vec<Vec<usize>> {
        (0..self.size()).map(|i| self.neighbours_of(i)).collect()
    }

    /// Picks one of the current neighbours of `n` uniformly, or `None` if it
    /// has none left.
    pub fn random_neighbour<R: Rng>(&self, n: usize, rng: &mut R) -> Option<usize> {
        let candidates = self.neighbours_of(n);
        if candidates.is_empty() {
            return None;
        }
        Some(candidates[rng.gen_range(0..candidates.len())])
    }
}
