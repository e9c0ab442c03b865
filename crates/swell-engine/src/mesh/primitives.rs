use std::f32::consts::{PI, TAU};

use super::{MeshData, MeshVertex};

/// UV sphere centered at the origin with poles on ±Y.
///
/// Produces `(w + 1) × (h + 1)` vertices; the seam column is duplicated so
/// `u` runs cleanly from 0 to 1. Pole rows emit one triangle per segment.
/// Segment counts are clamped to at least 3 around and 2 from pole to pole.
pub fn uv_sphere(radius: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let w = width_segments.max(3);
    let h = height_segments.max(2);

    let mut vertices = Vec::with_capacity(((w + 1) * (h + 1)) as usize);
    for iy in 0..=h {
        let v = iy as f32 / h as f32;
        let (sin_theta, cos_theta) = (v * PI).sin_cos();
        for ix in 0..=w {
            let u = ix as f32 / w as f32;
            let (sin_phi, cos_phi) = (u * TAU).sin_cos();
            let normal = [-cos_phi * sin_theta, cos_theta, sin_phi * sin_theta];
            vertices.push(MeshVertex {
                position: normal.map(|c| c * radius),
                normal,
                uv: [u, 1.0 - v],
            });
        }
    }

    let row = w + 1;
    let mut indices = Vec::with_capacity((w * (h - 1) * 6) as usize);
    for iy in 0..h {
        for ix in 0..w {
            let a = iy * row + ix + 1;
            let b = iy * row + ix;
            let c = (iy + 1) * row + ix;
            let d = (iy + 1) * row + ix + 1;

            if iy != 0 {
                indices.extend_from_slice(&[a, b, d]);
            }
            if iy != h - 1 {
                indices.extend_from_slice(&[b, c, d]);
            }
        }
    }

    MeshData::new(vertices, indices)
}

/// Plane in the XY plane centered at the origin, facing +Z.
///
/// `uv = (0, 0)` is the bottom-left corner. Segment counts are clamped to at
/// least 1.
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let gx = width_segments.max(1);
    let gy = height_segments.max(1);
    let seg_w = width / gx as f32;
    let seg_h = height / gy as f32;

    let mut vertices = Vec::with_capacity(((gx + 1) * (gy + 1)) as usize);
    for iy in 0..=gy {
        let y = iy as f32 * seg_h - height * 0.5;
        for ix in 0..=gx {
            let x = ix as f32 * seg_w - width * 0.5;
            vertices.push(MeshVertex {
                position: [x, -y, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [ix as f32 / gx as f32, 1.0 - iy as f32 / gy as f32],
            });
        }
    }

    let row = gx + 1;
    let mut indices = Vec::with_capacity((gx * gy * 6) as usize);
    for iy in 0..gy {
        for ix in 0..gx {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            indices.extend_from_slice(&[a, b, d, b, c, d]);
        }
    }

    MeshData::new(vertices, indices)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Mat4, Vec3};

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-5
    }

    #[test]
    fn sphere_counts() {
        let m = uv_sphere(1.0, 32, 32);
        assert_eq!(m.vertices.len(), 33 * 33);
        assert_eq!(m.triangle_count(), 2 * 32 * 31);
        assert!(m.indices.iter().all(|&i| (i as usize) < m.vertices.len()));
    }

    #[test]
    fn sphere_vertices_lie_on_radius() {
        let m = uv_sphere(2.5, 8, 6);
        for v in &m.vertices {
            let len = Vec3::from(v.position).length();
            assert!(close(len, 2.5), "{len}");
            assert!(close(Vec3::from(v.normal).length(), 1.0));
        }
    }

    #[test]
    fn sphere_poles_on_y() {
        let m = uv_sphere(1.0, 4, 4);
        assert!(close(m.vertices[0].position[1], 1.0));
        assert!(close(m.vertices[m.vertices.len() - 1].position[1], -1.0));
    }

    #[test]
    fn sphere_clamps_degenerate_segments() {
        let m = uv_sphere(1.0, 0, 0);
        assert_eq!(m.vertices.len(), 4 * 3);
        assert_eq!(m.triangle_count(), 2 * 3);
    }

    #[test]
    fn plane_counts() {
        let m = plane(10.0, 10.0, 50, 50);
        assert_eq!(m.vertices.len(), 51 * 51);
        assert_eq!(m.triangle_count(), 2 * 50 * 50);
        // rows + columns + one diagonal per cell
        assert_eq!(m.edge_count(), 50 * 51 * 2 + 50 * 50);
    }

    #[test]
    fn plane_spans_extent_and_uv() {
        let m = plane(4.0, 2.0, 2, 1);
        let first = m.vertices[0];
        let last = m.vertices[m.vertices.len() - 1];
        assert_eq!(first.position, [-2.0, 1.0, 0.0]);
        assert_eq!(first.uv, [0.0, 1.0]);
        assert_eq!(last.position, [2.0, -1.0, 0.0]);
        assert_eq!(last.uv, [1.0, 0.0]);
    }

    #[test]
    fn plane_front_faces_plus_z() {
        let m = plane(1.0, 1.0, 1, 1);
        let p = |i: u32| Vec3::from(m.vertices[i as usize].position);
        let (a, b, c) = (p(m.indices[0]), p(m.indices[1]), p(m.indices[2]));
        let n = (b - a).cross(c - a).normalize();
        assert!(close(n.z, 1.0));
    }

    #[test]
    fn rotated_plane_lies_in_xz_facing_up() {
        let m = plane(10.0, 10.0, 2, 2);
        let model = Mat4::from_rotation_x(-std::f32::consts::FRAC_PI_2);
        for v in &m.vertices {
            let p = model.transform_point3(Vec3::from(v.position));
            assert!(close(p.y, 0.0));
        }
        let n = model.transform_vector3(Vec3::Z);
        assert!(close(n.y, 1.0));
    }
}
