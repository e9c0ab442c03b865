use crate::uniforms::VertexUniforms;

/// Offset along local +Z for a surface point at `(x, y)`.
///
/// `d = sin(x·fx + t)·ax + sin(y·fy + t)·ay`
#[inline]
pub fn displacement(x: f32, y: f32, u: &VertexUniforms) -> f32 {
    (x * u.frequency.x + u.time).sin() * u.amplitude.x
        + (y * u.frequency.y + u.time).sin() * u.amplitude.y
}

/// Partial derivatives `(∂d/∂x, ∂d/∂y)` of [`displacement`].
///
/// Each axis only sees its own frequency/amplitude pair, so zeroing either
/// one removes that axis from the gradient entirely.
#[inline]
pub fn displacement_gradient(x: f32, y: f32, u: &VertexUniforms) -> [f32; 2] {
    [
        (x * u.frequency.x + u.time).cos() * u.frequency.x * u.amplitude.x,
        (y * u.frequency.y + u.time).cos() * u.frequency.y * u.amplitude.y,
    ]
}

/// Vertex stage: returns `(x, y, z + d)` for a local-space position.
#[inline]
pub fn vertex_stage(p: [f32; 3], u: &VertexUniforms) -> [f32; 3] {
    let [x, y, z] = p;
    [x, y, z + displacement(x, y, u)]
}

/// Normal of the displaced surface at a vertex with local normal `n`.
///
/// The normal is tilted against the displacement gradient in proportion to
/// how much it faces +Z: `normalize(n - (gx, gy, 0)·n.z)`. Exact for a
/// height field in the XY plane.
pub fn displaced_normal(p: [f32; 3], n: [f32; 3], u: &VertexUniforms) -> [f32; 3] {
    let [gx, gy] = displacement_gradient(p[0], p[1], u);
    let v = [n[0] - gx * n[2], n[1] - gy * n[2], n[2]];
    let len = (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt();
    if len <= f32::EPSILON {
        return n;
    }
    [v[0] / len, v[1] / len, v[2] / len]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniforms::Axes;
    use std::f32::consts::TAU;

    fn uniforms(f: (f32, f32), a: (f32, f32), t: f32) -> VertexUniforms {
        VertexUniforms { frequency: Axes::new(f.0, f.1), amplitude: Axes::new(a.0, a.1), time: t }
    }

    fn close(a: f32, b: f32, tol: f32) -> bool {
        (a - b).abs() <= tol
    }

    const SAMPLES: [[f32; 3]; 5] = [
        [0.0, 0.0, 0.0],
        [1.0, 0.0, 0.0],
        [-0.7, 0.3, 0.65],
        [0.5, -0.5, -0.7],
        [4.9, 4.9, 0.0],
    ];

    #[test]
    fn zero_amplitude_is_identity() {
        for t in [0.0, 0.5, 17.25, 1000.0] {
            let u = uniforms((20.0, 0.2), (0.0, 0.0), t);
            for p in SAMPLES {
                assert_eq!(vertex_stage(p, &u), p);
            }
        }
    }

    #[test]
    fn reference_scenario() {
        let u = uniforms((20.0, 0.2), (0.3, 0.1), 0.0);
        let out = vertex_stage([1.0, 0.0, 0.0], &u);
        assert_eq!(out[0], 1.0);
        assert_eq!(out[1], 0.0);
        assert!(close(out[2], 0.2739, 1e-3), "z = {}", out[2]);
    }

    #[test]
    fn only_z_is_displaced() {
        let u = uniforms((3.0, 5.0), (1.0, 2.0), 0.4);
        for p in SAMPLES {
            let q = vertex_stage(p, &u);
            assert_eq!((q[0], q[1]), (p[0], p[1]));
        }
    }

    #[test]
    fn displacement_is_periodic_in_time() {
        for (t1, k) in [(0.0f32, 1.0f32), (0.7, 1.0), (2.3, 3.0)] {
            let t2 = t1 + k * TAU;
            let a = uniforms((20.0, 0.2), (0.3, 0.1), t1);
            let b = uniforms((20.0, 0.2), (0.3, 0.1), t2);
            for p in SAMPLES {
                let d1 = displacement(p[0], p[1], &a);
                let d2 = displacement(p[0], p[1], &b);
                assert!(close(d1, d2, 1e-4), "t1={t1} t2={t2}: {d1} vs {d2}");
            }
        }
    }

    #[test]
    fn displacement_is_continuous_in_time() {
        let mut prev = displacement(0.3, 0.8, &uniforms((20.0, 0.2), (0.3, 0.1), 0.0));
        for i in 1..=1000 {
            let t = i as f32 * 1e-3;
            let d = displacement(0.3, 0.8, &uniforms((20.0, 0.2), (0.3, 0.1), t));
            // |∂d/∂t| <= ax + ay = 0.4
            assert!((d - prev).abs() <= 0.4 * 1e-3 + 1e-6);
            prev = d;
        }
    }

    #[test]
    fn zero_amplitude_removes_axis_contribution() {
        let u = uniforms((20.0, 0.2), (0.0, 0.1), 1.3);
        for p in SAMPLES {
            assert_eq!(displacement_gradient(p[0], p[1], &u)[0], 0.0);
        }
        let u = uniforms((20.0, 0.2), (0.3, 0.0), 1.3);
        for p in SAMPLES {
            assert_eq!(displacement_gradient(p[0], p[1], &u)[1], 0.0);
        }
    }

    #[test]
    fn zero_frequency_removes_axis_contribution() {
        let u = uniforms((0.0, 0.2), (0.3, 0.1), 1.3);
        for p in SAMPLES {
            assert_eq!(displacement_gradient(p[0], p[1], &u)[0], 0.0);
        }
        // Moving along x no longer changes anything.
        let a = displacement(-2.0, 0.5, &u);
        let b = displacement(3.0, 0.5, &u);
        assert!(close(a, b, 1e-6));
    }

    #[test]
    fn gradient_matches_finite_difference() {
        let u = uniforms((2.0, 0.7), (0.3, 0.1), 0.9);
        let h = 1e-3;
        for p in SAMPLES {
            let [gx, gy] = displacement_gradient(p[0], p[1], &u);
            let fx = (displacement(p[0] + h, p[1], &u) - displacement(p[0] - h, p[1], &u)) / (2.0 * h);
            let fy = (displacement(p[0], p[1] + h, &u) - displacement(p[0], p[1] - h, &u)) / (2.0 * h);
            assert!(close(gx, fx, 1e-2), "gx {gx} vs {fx}");
            assert!(close(gy, fy, 1e-2), "gy {gy} vs {fy}");
        }
    }

    #[test]
    fn nan_propagates_without_panicking() {
        let u = uniforms((f32::NAN, 0.2), (0.3, 0.1), 0.0);
        assert!(vertex_stage([1.0, 0.0, 0.0], &u)[2].is_nan());
    }

    #[test]
    fn displaced_normal_is_unchanged_without_amplitude() {
        let u = uniforms((20.0, 0.2), (0.0, 0.0), 1.3);
        assert_eq!(displaced_normal([0.4, -0.2, 0.0], [0.0, 0.0, 1.0], &u), [0.0, 0.0, 1.0]);
    }

    #[test]
    fn displaced_normal_of_height_field() {
        let u = uniforms((1.0, 0.0), (1.0, 0.0), 0.0);
        // d = sin(x), slope 1 at x = 0.
        let n = displaced_normal([0.0, 0.0, 0.0], [0.0, 0.0, 1.0], &u);
        let s = std::f32::consts::FRAC_1_SQRT_2;
        assert!((n[0] + s).abs() < 1e-5);
        assert!(n[1].abs() < 1e-6);
        assert!((n[2] - s).abs() < 1e-5);
    }

    #[test]
    fn displaced_normal_ignores_gradient_for_side_facing_normals() {
        let u = uniforms((3.0, 3.0), (2.0, 2.0), 0.5);
        assert_eq!(displaced_normal([0.1, 0.2, 0.0], [1.0, 0.0, 0.0], &u), [1.0, 0.0, 0.0]);
    }
}
