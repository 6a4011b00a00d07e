// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::atom::{Atom, SUBSTITUTE_SYMBOL};
use crate::audit::AuditInfo;
use crate::error::ZError;
use crate::formats::cif::CIFFormat;
use crate::formats::gro::GROFormat;
use crate::structure::Structure;
use log::warn;
use std::borrow::Cow;
use std::collections::HashSet;
use std::io::Write;

/// Supported output formats.
///
/// - `CIF`: Crystallographic Information File.
/// - `GRO`: GROMACS coordinate file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextFormat {
    /// CIF file format.
    CIF,
    /// GRO file format.
    GRO,
}

/// Concrete file format strategy for writing substituted structures.
pub enum Format {
    /// Handler for the CIF format.
    CIF(CIFFormat),
    /// Handler for the GRO format.
    GRO(GROFormat),
}

impl Format {
    /// Creates the writer for the given `TextFormat`.
    pub fn new_from_format(fmt: TextFormat) -> Self {
        match fmt {
            TextFormat::CIF => Format::CIF(CIFFormat),
            TextFormat::GRO => Format::GRO(GROFormat),
        }
    }
}

/// One structure to write: the framework, which of its T sites carry Al,
/// and the names identifying it within a batch.
pub struct StructureRecord<'a> {
    pub structure: &'a Structure,
    /// T-site indices (position among the Si atoms) turned into Al
    pub substituted: &'a [usize],
    pub name_zeo: &'a str,
    pub name_alg: &'a str,
    pub index: usize,
    pub audit: &'a AuditInfo,
}

/// A site as it appears in the output, after substitution.
#[derive(Debug, PartialEq)]
pub struct Site<'a> {
    pub label: Cow<'a, str>,
    pub symbol: &'a str,
    pub atom: &'a Atom,
}

/// Applies the substitutions to the atom list, in order.
///
/// The k-th Si atom encountered becomes aluminium when `k` is in
/// `substituted`; substituted sites are renamed `Al1`, `Al2`, ... in the
/// order they are met. Every other site keeps its own label and symbol.
/// Indices that match no Si atom are ignored.
pub fn relabel<'a>(atoms: &'a [Atom], substituted: &[usize]) -> Vec<Site<'a>> {
    let wanted: HashSet<usize> = substituted.iter().copied().collect();

    let mut t_index = 0;
    let mut alcount = 1;
    let sites: Vec<Site> = atoms
        .iter()
        .map(|atom| {
            if atom.is_tetrahedral() {
                let is_al = wanted.contains(&t_index);
                t_index += 1;
                if is_al {
                    let label = format!("{SUBSTITUTE_SYMBOL}{alcount}");
                    alcount += 1;
                    return Site {
                        label: Cow::Owned(label),
                        symbol: SUBSTITUTE_SYMBOL,
                        atom,
                    };
                }
            }
            Site {
                label: Cow::Borrowed(atom.label.as_str()),
                symbol: atom.symbol.as_str(),
                atom,
            }
        })
        .collect();

    let ignored = wanted.iter().filter(|&&t| t >= t_index).count();
    if ignored > 0 {
        warn!("{ignored} substitution indices are beyond the {t_index} T sites and were ignored");
    }

    sites
}

/// Common interface for writing structure file formats.
pub trait FileFormat {
    /// File extension, without the leading dot.
    fn extension(&self) -> &'static str;

    /// Writes `record` to `writer`.
    ///
    /// # Errors
    ///
    /// Returns an error if writing fails.
    fn write_next(&mut self, writer: &mut dyn Write, record: &StructureRecord) -> Result<(), ZError>;

    /// Finalizes the file output. This should be called when done writing
    /// to a file to ensure everything reached the disk.
    ///
    /// # Errors
    ///
    /// Returns an error if finalization fails.
    fn finalize(&self, writer: &mut dyn Write) -> Result<(), ZError> {
        writer.flush()?;
        Ok(())
    }
}

impl FileFormat for Format {
    fn extension(&self) -> &'static str {
        match self {
            Format::CIF(format) => format.extension(),
            Format::GRO(format) => format.extension(),
        }
    }

    fn write_next(&mut self, writer: &mut dyn Write, record: &StructureRecord) -> Result<(), ZError> {
        match self {
            Format::CIF(format) => format.write_next(writer, record),
            Format::GRO(format) => format.write_next(writer, record),
        }
    }

    fn finalize(&self, writer: &mut dyn Write) -> Result<(), ZError> {
        match self {
            Format::CIF(format) => format.finalize(writer),
            Format::GRO(format) => format.finalize(writer),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms() -> Vec<Atom> {
        vec![
            Atom::new("T1".to_string(), "Si".to_string()),
            Atom::new("O1".to_string(), "O".to_string()),
            Atom::new("T2".to_string(), "Si".to_string()),
            Atom::new("T3".to_string(), "Si".to_string()),
            Atom::new("O2".to_string(), "O".to_string()),
        ]
    }

    fn labels(sites: &[Site]) -> Vec<(String, String)> {
        sites
            .iter()
            .map(|s| (s.label.to_string(), s.symbol.to_string()))
            .collect()
    }

    #[test]
    fn writer_per_format() {
        let cif = Format::new_from_format(TextFormat::CIF);
        assert!(matches!(cif, Format::CIF(_)));
        assert_eq!(cif.extension(), "cif");

        let gro = Format::new_from_format(TextFormat::GRO);
        assert!(matches!(gro, Format::GRO(_)));
        assert_eq!(gro.extension(), "gro");
    }

    #[test]
    fn no_substitution() {
        let atoms = atoms();
        let sites = relabel(&atoms, &[]);
        assert_eq!(sites.len(), 5);
        for (site, atom) in sites.iter().zip(&atoms) {
            assert_eq!(site.label, atom.label);
            assert_eq!(site.symbol, atom.symbol);
            assert_eq!(site.atom, atom);
        }
    }

    #[test]
    fn first_and_third_si() {
        let atoms = atoms();
        let sites = relabel(&atoms, &[0, 2]);
        assert_eq!(
            labels(&sites),
            vec![
                ("Al1".to_string(), "Al".to_string()),
                ("O1".to_string(), "O".to_string()),
                ("T2".to_string(), "Si".to_string()),
                ("Al2".to_string(), "Al".to_string()),
                ("O2".to_string(), "O".to_string()),
            ]
        );
    }

    #[test]
    fn numbering_follows_encounter_order() {
        let atoms = atoms();
        let sites = relabel(&atoms, &[2, 0]);
        assert_eq!(sites[0].label, "Al1");
        assert_eq!(sites[3].label, "Al2");
    }

    #[test]
    fn duplicates_and_out_of_range_are_inert() {
        let atoms = atoms();
        let sites = relabel(&atoms, &[1, 1, 3, 100]);
        assert_eq!(
            labels(&sites),
            vec![
                ("T1".to_string(), "Si".to_string()),
                ("O1".to_string(), "O".to_string()),
                ("Al1".to_string(), "Al".to_string()),
                ("T3".to_string(), "Si".to_string()),
                ("O2".to_string(), "O".to_string()),
            ]
        );
    }
}
