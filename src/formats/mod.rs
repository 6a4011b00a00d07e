pub mod cif;
pub mod gro;
