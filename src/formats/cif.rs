// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

use crate::audit::CREATION_METHOD;
use crate::error::ZError;
use crate::format::{relabel, FileFormat, Site, StructureRecord};
use std::io::Write;

/// Width of the type symbol column of the atom loop.
pub const TYPE_WIDTH: usize = 10;
/// Width of each numeric column of the atom loop.
pub const FIELD_WIDTH: usize = 10;
/// Decimals of every number in the file.
pub const PRECISION: usize = 3;

/// Writer for P1 CIF files.
pub struct CIFFormat;

impl CIFFormat {
    /// One row of the `_atom_site` loop. The label is written as is, every
    /// other column is right aligned.
    pub fn format_site(site: &Site) -> String {
        let atom = site.atom;
        format!(
            "{}{:>tw$}{:>w$.p$}{:>w$.p$}{:>w$.p$}{:>w$.p$}",
            site.label,
            site.symbol,
            atom.x,
            atom.y,
            atom.z,
            atom.charge,
            tw = TYPE_WIDTH,
            w = FIELD_WIDTH,
            p = PRECISION,
        )
    }

    fn write_header(writer: &mut dyn Write, record: &StructureRecord) -> Result<(), ZError> {
        let cell = &record.structure.unit_cell;
        let p = PRECISION;

        writeln!(writer, "data_{}", record.name_zeo)?;
        writeln!(writer)?;

        writeln!(writer, "_audit_creation_method {CREATION_METHOD}")?;
        writeln!(writer, "_audit_creation_date {}", record.audit.date)?;
        writeln!(writer, "_audit_author_name '{}'", record.audit.author)?;
        writeln!(writer)?;

        writeln!(writer, "_cell_length_a    {:.p$}", cell.a())?;
        writeln!(writer, "_cell_length_b    {:.p$}", cell.b())?;
        writeln!(writer, "_cell_length_c    {:.p$}", cell.c())?;
        writeln!(writer, "_cell_angle_alpha {:.p$}", cell.alpha())?;
        writeln!(writer, "_cell_angle_beta  {:.p$}", cell.beta())?;
        writeln!(writer, "_cell_angle_gamma {:.p$}", cell.gamma())?;
        writeln!(writer, "_cell_volume      {:.p$}", cell.naive_volume())?;
        writeln!(writer)?;

        writeln!(writer, "_symmetry_cell_setting          {}", cell.setting)?;
        writeln!(writer, "_symmetry_space_group_name_Hall 'P 1'")?;
        writeln!(writer, "_symmetry_space_group_name_H-M  'P 1'")?;
        writeln!(writer, "_symmetry_Int_Tables_number     1")?;
        writeln!(writer, "_symmetry_equiv_pos_as_xyz 'x,y,z'")?;
        writeln!(writer)?;

        writeln!(writer, "loop_")?;
        writeln!(writer, "_atom_site_label")?;
        writeln!(writer, "_atom_site_type_symbol")?;
        writeln!(writer, "_atom_site_fract_x")?;
        writeln!(writer, "_atom_site_fract_y")?;
        writeln!(writer, "_atom_site_fract_z")?;
        writeln!(writer, "_atom_site_charge")?;
        Ok(())
    }
}

impl FileFormat for CIFFormat {
    fn extension(&self) -> &'static str {
        "cif"
    }

    fn write_next(&mut self, writer: &mut dyn Write, record: &StructureRecord) -> Result<(), ZError> {
        Self::write_header(writer, record)?;
        for site in relabel(record.structure.atoms(), record.substituted) {
            writeln!(writer, "{}", Self::format_site(&site))?;
        }
        Ok(())
    }
}
