// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

/// Element symbol of the tetrahedral sites that can be substituted.
pub const TETRAHEDRAL_SYMBOL: &str = "Si";

/// Element symbol written for substituted tetrahedral sites.
pub const SUBSTITUTE_SYMBOL: &str = "Al";

/// One site of the unit cell.
///
/// `symbol` is the chemical element currently occupying the site (`Si`, `O`,
/// ...) and `label` is the site name printed in the first column of the
/// output (`T1`, `O12`, ...). Positions are fractional.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Atom {
    pub label: String,
    pub symbol: String,
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub charge: f64,
}

impl Atom {
    pub fn new(label: String, symbol: String) -> Self {
        Self {
            label,
            symbol,
            ..Default::default()
        }
    }

    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.x = x;
        self.y = y;
        self.z = z;
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }

    pub fn position(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Is this a T site eligible for Al substitution?
    pub fn is_tetrahedral(&self) -> bool {
        self.symbol == TETRAHEDRAL_SYMBOL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let atom = Atom::new("T1".to_string(), "Si".to_string())
            .with_position(0.1, 0.2, 0.3)
            .with_charge(1.2);
        assert_eq!(atom.label, "T1");
        assert_eq!(atom.position(), [0.1, 0.2, 0.3]);
        assert_eq!(atom.charge, 1.2);
        assert!(atom.is_tetrahedral());
    }

    #[test]
    fn only_silicon_is_tetrahedral() {
        assert!(!Atom::new("O1".to_string(), "O".to_string()).is_tetrahedral());
        assert!(!Atom::new("Al1".to_string(), "Al".to_string()).is_tetrahedral());
        assert!(!Atom::new("T1".to_string(), "si".to_string()).is_tetrahedral());
    }
}
