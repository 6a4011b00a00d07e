// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::error::ZError;
use crate::format::{relabel, FileFormat, StructureRecord};
use std::io::Write;

/// Residue name shared by every framework atom.
pub const RESIDUE_NAME: &str = "ZEO";

/// GRO fields are fixed width, atom serials wrap around past 99999.
const MAX_SERIAL: usize = 100_000;

const ANGSTROM_TO_NM: f64 = 0.1;

/// Writer for GROMACS `.gro` coordinate files.
///
/// All atoms belong to residue 1, positions are cartesian and in nm.
pub struct GROFormat;

impl GROFormat {
    fn truncate(name: &str) -> String {
        name.chars().take(5).collect()
    }
}

impl FileFormat for GROFormat {
    fn extension(&self) -> &'static str {
        "gro"
    }

    fn write_next(&mut self, writer: &mut dyn Write, record: &StructureRecord) -> Result<(), ZError> {
        let structure = record.structure;
        let cell = &structure.unit_cell;

        writeln!(
            writer,
            "{} {} structure {}",
            record.name_zeo, record.name_alg, record.index
        )?;
        writeln!(writer, "{}", structure.natoms())?;

        for (i, site) in relabel(structure.atoms(), record.substituted)
            .iter()
            .enumerate()
        {
            let position = cell.cartesian(site.atom.position());
            writeln!(
                writer,
                "{:>5}{:<5}{:>5}{:>5}{:>8.3}{:>8.3}{:>8.3}",
                1,
                RESIDUE_NAME,
                Self::truncate(&site.label),
                (i + 1) % MAX_SERIAL,
                position[0] * ANGSTROM_TO_NM,
                position[1] * ANGSTROM_TO_NM,
                position[2] * ANGSTROM_TO_NM,
            )?;
        }

        let m = cell.cell_matrix() * ANGSTROM_TO_NM;
        if cell.is_orthogonal() {
            writeln!(writer, "{:>10.5}{:>10.5}{:>10.5}", m[(0, 0)], m[(1, 1)], m[(2, 2)])?;
        } else {
            writeln!(
                writer,
                "{:>10.5}{:>10.5}{:>10.5}{:>10.5}{:>10.5}{:>10.5}{:>10.5}{:>10.5}{:>10.5}",
                m[(0, 0)],
                m[(1, 1)],
                m[(2, 2)],
                m[(0, 1)],
                m[(0, 2)],
                m[(1, 0)],
                m[(1, 2)],
                m[(2, 0)],
                m[(2, 1)],
            )?;
        }
        Ok(())
    }
}
