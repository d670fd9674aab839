//! Regular polygon geometry and its triangle-fan index layout.

use glam::Vec3;
use std::f32::consts::{FRAC_PI_2, TAU};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    #[error("a polygon needs at least 3 sides, got {0}")]
    TooFewSides(usize),
    #[error("{0} vertices do not fit a 16-bit index buffer")]
    TooManySides(usize),
}

/// GPU vertex: a single `Float32x3` position at shader location 0.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    pub position: [f32; 3],
}

impl Vertex {
    #[inline]
    pub fn position(&self) -> Vec3 {
        Vec3::from(self.position)
    }
}

/// `sides` points on a circle of `radius` in the z = 0 plane.
///
/// Vertex 0 sits at 12 o'clock, `(0, radius, 0)`, and the rest follow
/// counter-clockwise in equal steps of `2π / sides`.
pub fn build_regular_polygon(sides: usize, radius: f32) -> Result<Vec<Vertex>, GeometryError> {
    if sides < 3 {
        return Err(GeometryError::TooFewSides(sides));
    }
    if sides > u16::MAX as usize {
        return Err(GeometryError::TooManySides(sides));
    }
    let step = TAU / sides as f32;
    Ok((0..sides)
        .map(|i| {
            let angle = FRAC_PI_2 + i as f32 * step;
            let (s, c) = angle.sin_cos();
            Vertex {
                position: [radius * c, radius * s, 0.0],
            }
        })
        .collect())
}

/// Triangle-fan topology as a triangle list: vertex 0 is the shared apex and
/// each adjacent pair `(i, i + 1)` closes one triangle.
pub fn fan_indices(vertex_count: usize) -> Result<Vec<u16>, GeometryError> {
    let last = u16::try_from(vertex_count)
        .map_err(|_| GeometryError::TooManySides(vertex_count))?
        .saturating_sub(1);
    Ok((1..last).flat_map(|i| [0, i, i + 1]).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fan_for_pentagon() {
        assert_eq!(fan_indices(5).unwrap(), vec![0, 1, 2, 0, 2, 3, 0, 3, 4]);
    }

    #[test]
    fn fan_needs_three_vertices() {
        assert!(fan_indices(0).unwrap().is_empty());
        assert!(fan_indices(2).unwrap().is_empty());
        assert_eq!(fan_indices(3).unwrap(), vec![0, 1, 2]);
    }

    #[test]
    fn fan_rejects_counts_past_16_bit_indices() {
        assert_eq!(fan_indices(70_000), Err(GeometryError::TooManySides(70_000)));
        assert_eq!(
            fan_indices(u16::MAX as usize + 1),
            Err(GeometryError::TooManySides(65_536))
        );
        let widest = fan_indices(u16::MAX as usize).unwrap();
        assert_eq!(widest.len(), 3 * (u16::MAX as usize - 2));
        assert_eq!(widest.last(), Some(&(u16::MAX - 1)));
    }

    #[test]
    fn degenerate_polygons_are_rejected() {
        assert_eq!(build_regular_polygon(2, 1.0), Err(GeometryError::TooFewSides(2)));
        assert_eq!(
            build_regular_polygon(70_000, 1.0),
            Err(GeometryError::TooManySides(70_000))
        );
    }

    #[test]
    fn vertices_wind_counter_clockwise() {
        let verts = build_regular_polygon(5, 1.0).unwrap();
        // Twice the signed area (shoelace) is positive for CCW winding.
        let area2: f32 = (0..verts.len())
            .map(|i| {
                let a = verts[i].position();
                let b = verts[(i + 1) % verts.len()].position();
                a.x * b.y - b.x * a.y
            })
            .sum();
        assert!(area2 > 0.0);
    }
}
