// SPDX-License-Identifier: BSD-3-Clause
// Copyright (c) 2025 William Bro-Jørgensen
// Copyright (c) 2020 Guillaume Fraux and contributors
//
// See LICENSE at the project root for full text.

//! Writing one substituted structure per file.

use crate::audit::AuditInfo;
use crate::error::ZError;
use crate::format::{FileFormat, Format, StructureRecord, TextFormat};
use crate::structure::Structure;
use log::{debug, error};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

/// Names identifying one structure of a batch, used to build its file name.
#[derive(Debug, Clone, Copy)]
pub struct OutputName<'a> {
    pub name_zeo: &'a str,
    pub name_alg: &'a str,
    pub struc: usize,
}

impl OutputName<'_> {
    /// `<out_dir>/<name_zeo>_<name_alg>_<struc>.<extension>`
    pub fn path(&self, out_dir: &Path, extension: &str) -> PathBuf {
        out_dir.join(format!(
            "{}_{}_{}.{extension}",
            self.name_zeo, self.name_alg, self.struc
        ))
    }
}

/// Writes `structure` with the T sites listed in `als` turned into Al, in
/// the given format, and returns the path of the new file.
///
/// An existing file is overwritten. `out_dir` must already exist.
///
/// # Errors
///
/// Returns [`ZError::OutputFile`] if the file cannot be created, or an I/O
/// error if writing fails midway.
pub fn write_structure(
    fmt: TextFormat,
    structure: &Structure,
    als: &[usize],
    name: OutputName,
    out_dir: &Path,
    audit: &AuditInfo,
) -> Result<PathBuf, ZError> {
    let mut format = Format::new_from_format(fmt);
    let path = name.path(out_dir, format.extension());

    let file = File::create(&path).map_err(|source| {
        let err = ZError::OutputFile {
            path: path.clone(),
            source,
        };
        error!("{err}");
        err
    })?;
    let mut writer = BufWriter::new(file);

    let record = StructureRecord {
        structure,
        substituted: als,
        name_zeo: name.name_zeo,
        name_alg: name.name_alg,
        index: name.struc,
        audit,
    };
    format.write_next(&mut writer, &record)?;
    format.finalize(&mut writer)?;

    debug!(
        "wrote {} ({} atoms, {} Al)",
        path.display(),
        structure.natoms(),
        als.len()
    );
    Ok(path)
}

/// Writes `<out_name>/<name_zeo>_<name_alg>_<struc>.cif`.
pub fn print_structure(
    structure: &Structure,
    als: &[usize],
    struc: usize,
    name_zeo: &str,
    name_alg: &str,
    out_name: &Path,
) -> Result<PathBuf, ZError> {
    let name = OutputName {
        name_zeo,
        name_alg,
        struc,
    };
    write_structure(
        TextFormat::CIF,
        structure,
        als,
        name,
        out_name,
        &AuditInfo::current(),
    )
}

/// Writes `<out_name>/<name_zeo>_<name_alg>_<struc>.gro`.
pub fn print_gro_structure(
    structure: &Structure,
    als: &[usize],
    struc: usize,
    name_zeo: &str,
    name_alg: &str,
    out_name: &Path,
) -> Result<PathBuf, ZError> {
    let name = OutputName {
        name_zeo,
        name_alg,
        struc,
    };
    write_structure(
        TextFormat::GRO,
        structure,
        als,
        name,
        out_name,
        &AuditInfo::current(),
    )
}
