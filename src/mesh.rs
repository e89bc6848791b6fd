//! Staggered rectangular mesh of the channel
//!
//! Velocity components and pressure live on offset layouts, so the mesh
//! itself only stores point counts, the cell spacing and the vertex
//! coordinates. The coordinate arrays are used for reporting, not by
//! the stencils.
use crate::error::{Error, Result};
use ndarray::Array1;

/// Geometry of the staggered channel grid.
///
/// The cross-section spans `[0, 1]` in y, the axial direction spans
/// `[0, aspect_ratio]` in x, with a uniform spacing in both directions:
/// `cell_spacing = 1 / (n_points_y - 1)`.
///
/// Field layouts derived from the mesh (row = cross-section, column = axial):
/// - x-velocity: `(n_points_y + 1, n_points_x)`, ghost rows at the walls
/// - y-velocity: `(n_points_y, n_points_x + 1)`, ghost columns at
///   inlet/outlet
/// - pressure: `(n_points_y + 1, n_points_x + 1)`, one ghost layer per side
#[derive(Clone, Debug)]
pub struct StaggeredMesh {
    /// Number of vertices across the channel
    pub n_points_y: usize,
    /// Number of vertices along the channel
    pub n_points_x: usize,
    /// Uniform grid spacing in both directions
    pub cell_spacing: f64,
    /// Axial vertex coordinates
    pub x: Array1<f64>,
    /// Cross-section vertex coordinates
    pub y: Array1<f64>,
}

impl StaggeredMesh {
    /// Construct the mesh from the cross-section resolution and the
    /// length-to-height ratio of the channel.
    ///
    /// # Errors
    /// `InvalidGeometry` if `n_points_y < 2` or `aspect_ratio < 1`.
    pub fn new(n_points_y: usize, aspect_ratio: usize) -> Result<Self> {
        if n_points_y < 2 {
            return Err(Error::InvalidGeometry(format!(
                "need at least 2 points across the channel, got {}",
                n_points_y
            )));
        }
        if aspect_ratio < 1 {
            return Err(Error::InvalidGeometry(format!(
                "aspect ratio must be at least 1, got {}",
                aspect_ratio
            )));
        }
        let cell_spacing = 1.0 / (n_points_y - 1) as f64;
        let n_points_x = (n_points_y - 1) * aspect_ratio + 1;
        let x = Array1::linspace(0.0, aspect_ratio as f64, n_points_x);
        let y = Array1::linspace(0.0, 1.0, n_points_y);
        Ok(StaggeredMesh {
            n_points_y,
            n_points_x,
            cell_spacing,
            x,
            y,
        })
    }

    /// Shape of the staggered x-velocity array
    pub fn shape_velx(&self) -> (usize, usize) {
        (self.n_points_y + 1, self.n_points_x)
    }

    /// Shape of the staggered y-velocity array
    pub fn shape_vely(&self) -> (usize, usize) {
        (self.n_points_y, self.n_points_x + 1)
    }

    /// Shape of the pressure array
    pub fn shape_pres(&self) -> (usize, usize) {
        (self.n_points_y + 1, self.n_points_x + 1)
    }
}
