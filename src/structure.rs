use crate::atom::Atom;
use crate::unit_cell::UnitCell;
use std::ops::{Index, IndexMut};

/// A framework model: the unit cell and every site in it.
#[derive(Debug, Clone)]
pub struct Structure {
    pub unit_cell: UnitCell,
    atoms: Vec<Atom>,
}

impl Structure {
    pub fn new(unit_cell: UnitCell) -> Self {
        Structure {
            unit_cell,
            atoms: Vec::new(),
        }
    }

    pub fn with_atoms(unit_cell: UnitCell, atoms: Vec<Atom>) -> Self {
        Structure { unit_cell, atoms }
    }

    pub fn add_atom(&mut self, atom: Atom) {
        self.atoms.push(atom)
    }

    pub fn atoms(&self) -> &[Atom] {
        &self.atoms
    }

    /// Total number of sites (`Natoms`).
    pub fn natoms(&self) -> usize {
        self.atoms.len()
    }

    /// Number of tetrahedral Si sites (`Tatoms`).
    pub fn tatoms(&self) -> usize {
        self.atoms.iter().filter(|a| a.is_tetrahedral()).count()
    }

    /// Indices into the atom list of the Si sites, in order of appearance.
    ///
    /// Position `k` of the returned vector is the atom carrying T-site index
    /// `k`, which is what substitution indices refer to.
    pub fn t_sites(&self) -> Vec<usize> {
        self.atoms
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_tetrahedral())
            .map(|(i, _)| i)
            .collect()
    }

    pub fn positions(&self) -> Vec<[f64; 3]> {
        self.atoms.iter().map(|a| a.position()).collect()
    }
}

impl Index<usize> for Structure {
    type Output = Atom;

    fn index(&self, index: usize) -> &Self::Output {
        &self.atoms[index]
    }
}

impl IndexMut<usize> for Structure {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.atoms[index]
    }
}
