use crate::error::ZError;
use core::f64;
use nalgebra::Matrix3;

type Vec3D = [f64; 3];

/// Unit cell of a framework, as lengths (Å) and angles (degrees).
///
/// `setting` is the free-text crystal system label written to the
/// `_symmetry_cell_setting` CIF field.
#[derive(Debug, Clone)]
pub struct UnitCell {
    pub lengths: Vec3D,
    pub angles: Vec3D,
    pub setting: String,
}

impl PartialEq for UnitCell {
    fn eq(&self, other: &Self) -> bool {
        self.setting == other.setting
            && self
                .lengths
                .iter()
                .chain(self.angles.iter())
                .zip(other.lengths.iter().chain(other.angles.iter()))
                .all(|(a, b)| (a - b).abs() < f64::EPSILON)
    }
}

impl UnitCell {
    const EPSILON: f64 = 1e-5;

    fn deg2rad(x: f64) -> f64 {
        x * f64::consts::PI / 180.0
    }

    fn cos_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).cos()
    }

    fn sin_degree(theta: f64) -> f64 {
        Self::deg2rad(theta).sin()
    }

    /// Creates a unit cell, checking that lengths are positive and angles lie
    /// strictly between 0 and 180 degrees and span a non-degenerate cell.
    pub fn new(lengths: Vec3D, angles: Vec3D, setting: &str) -> Result<Self, ZError> {
        Self::check_lengths(&lengths)?;
        Self::check_angles(&angles)?;
        Ok(UnitCell {
            lengths,
            angles,
            setting: setting.to_string(),
        })
    }

    /// Orthorhombic cell with all angles at 90 degrees.
    pub fn orthorhombic(a: f64, b: f64, c: f64, setting: &str) -> Result<Self, ZError> {
        Self::new([a, b, c], [90.0, 90.0, 90.0], setting)
    }

    fn check_lengths(lengths: &Vec3D) -> Result<(), ZError> {
        if lengths.iter().any(|&x| x <= 0.0 || !x.is_finite()) {
            return Err(ZError::InvalidCell(
                "lengths must be positive".to_string(),
            ));
        };

        Ok(())
    }

    fn check_angles(angles: &Vec3D) -> Result<(), ZError> {
        if angles.iter().any(|&x| x < 0.0) {
            return Err(ZError::InvalidCell(
                "angles cannot be negative".to_string(),
            ));
        };

        if angles.iter().any(|&x| x.abs() < Self::EPSILON) {
            return Err(ZError::InvalidCell(
                "angles cannot be (roughly) zero".to_string(),
            ));
        }

        if angles.iter().any(|&x| x >= 180.0) {
            return Err(ZError::InvalidCell(
                "angles cannot be larger than or equal to 180 degrees".to_string(),
            ));
        }

        let [ca, cb, cg] = angles.map(Self::cos_degree);
        if 1.0 - ca * ca - cb * cb - cg * cg + 2.0 * ca * cb * cg < Self::EPSILON {
            return Err(ZError::InvalidCell(format!(
                "angles {angles:?} cannot form a cell"
            )));
        }

        Ok(())
    }

    pub fn a(&self) -> f64 {
        self.lengths[0]
    }

    pub fn b(&self) -> f64 {
        self.lengths[1]
    }

    pub fn c(&self) -> f64 {
        self.lengths[2]
    }

    pub fn alpha(&self) -> f64 {
        self.angles[0]
    }

    pub fn beta(&self) -> f64 {
        self.angles[1]
    }

    pub fn gamma(&self) -> f64 {
        self.angles[2]
    }

    pub fn is_orthogonal(&self) -> bool {
        self.angles.iter().all(|&x| (x - 90.0).abs() < 1e-3)
    }

    /// Product of the three cell lengths. This is what the CIF writer
    /// reports as `_cell_volume`, whatever the angles.
    pub fn naive_volume(&self) -> f64 {
        self.lengths.iter().product()
    }

    /// Volume of the parallelepiped spanned by the cell vectors.
    pub fn volume(&self) -> f64 {
        self.cell_matrix().determinant().abs()
    }

    /// Cell vectors as matrix rows, with `a` along x and `b` in the xy plane.
    pub fn cell_matrix(&self) -> Matrix3<f64> {
        let lengths = self.lengths;
        let mut angles = self.angles;
        if self.is_orthogonal() {
            angles.iter_mut().for_each(|x| *x = 90.0);
        }

        let mut cell_matrix: Matrix3<f64> = Matrix3::zeros();
        cell_matrix[(0, 0)] = lengths[0];

        cell_matrix[(1, 0)] = Self::cos_degree(angles[2]) * lengths[1];
        cell_matrix[(1, 1)] = Self::sin_degree(angles[2]) * lengths[1];

        cell_matrix[(2, 0)] = Self::cos_degree(angles[1]);
        cell_matrix[(2, 1)] = (Self::cos_degree(angles[0])
            - Self::cos_degree(angles[1]) * Self::cos_degree(angles[2]))
            / Self::sin_degree(angles[2]);
        cell_matrix[(2, 2)] = (1.0
            - cell_matrix[(2, 0)] * cell_matrix[(2, 0)]
            - cell_matrix[(2, 1)] * cell_matrix[(2, 1)])
            .sqrt();
        cell_matrix[(2, 0)] *= lengths[2];
        cell_matrix[(2, 1)] *= lengths[2];
        cell_matrix[(2, 2)] *= lengths[2];

        cell_matrix
    }

    /// Converts fractional coordinates to cartesian ones (Å).
    pub fn cartesian(&self, fractional: Vec3D) -> Vec3D {
        let m = self.cell_matrix();
        let mut out = [0.0; 3];
        for (k, item) in out.iter_mut().enumerate() {
            *item = (0..3).map(|i| fractional[i] * m[(i, k)]).sum();
        }
        out
    }
}
