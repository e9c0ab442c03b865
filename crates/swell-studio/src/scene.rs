//! The two shaded meshes and the uniforms each one is drawn with.

use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};
use swell_engine::mesh::{plane, uv_sphere, MeshData};
use swell_engine::render::surface::{DrawStyle, GpuMesh, SurfaceDraw, SurfaceUniforms};
use swell_kernel::{FragmentMode, ShadingParams};

pub const SPHERE_CENTER: Vec3 = Vec3::new(0.0, 2.0, 0.0);

pub fn sphere_mesh() -> MeshData {
    uv_sphere(1.0, 32, 32)
}

pub fn ground_mesh() -> MeshData {
    plane(10.0, 10.0, 50, 50)
}

pub fn sphere_model() -> Mat4 {
    Mat4::from_translation(SPHERE_CENTER)
}

/// The plane is generated in XY; lay it flat in XZ.
pub fn ground_model() -> Mat4 {
    Mat4::from_rotation_x(-FRAC_PI_2)
}

/// Sphere: displaced, flat-shaded, wireframe on request.
pub fn sphere_uniforms(params: &ShadingParams, view_proj: Mat4) -> (SurfaceUniforms, DrawStyle) {
    let uniforms = SurfaceUniforms::new(
        view_proj,
        sphere_model(),
        &params.vertex,
        &params.surface,
        &params.light,
        FragmentMode::Flat,
    );
    let style = if params.wireframe { DrawStyle::Wireframe } else { DrawStyle::Fill };
    (uniforms, style)
}

/// Ground: never displaced, shaded with the ground mode.
pub fn ground_uniforms(params: &ShadingParams, view_proj: Mat4) -> SurfaceUniforms {
    SurfaceUniforms::new(
        view_proj,
        ground_model(),
        &params.flat_vertex(),
        &params.surface,
        &params.light,
        params.ground_mode.0,
    )
}

/// GPU copies of both meshes, uploaded on the first frame.
pub struct SceneMeshes {
    sphere: GpuMesh,
    ground: GpuMesh,
}

impl SceneMeshes {
    pub fn upload(device: &wgpu::Device) -> Self {
        let sphere = sphere_mesh();
        let ground = ground_mesh();
        log::debug!(
            "uploading meshes: sphere {} tris, ground {} tris",
            sphere.triangle_count(),
            ground.triangle_count()
        );
        Self {
            sphere: GpuMesh::upload(device, &sphere, "swell sphere"),
            ground: GpuMesh::upload(device, &ground, "swell ground"),
        }
    }

    pub fn draws(&self, params: &ShadingParams, view_proj: Mat4) -> [SurfaceDraw<'_>; 2] {
        let (sphere, style) = sphere_uniforms(params, view_proj);
        [
            SurfaceDraw { mesh: &self.ground, uniforms: ground_uniforms(params, view_proj), style: DrawStyle::Fill },
            SurfaceDraw { mesh: &self.sphere, uniforms: sphere, style },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use swell_kernel::{GroundMode, ParamEvent};

    #[test]
    fn ground_lies_flat_below_the_sphere() {
        let m = ground_model();
        let mesh = ground_mesh();
        for v in &mesh.vertices {
            let p = m.transform_point3(Vec3::from(v.position));
            assert!(p.y.abs() < 1e-5);
            let n = m.transform_vector3(Vec3::from(v.normal));
            assert!((n - Vec3::Y).length() < 1e-5);
        }
        assert!(SPHERE_CENTER.y - 1.0 > 0.0);
    }

    #[test]
    fn ground_is_never_displaced() {
        let mut params = ShadingParams::default();
        params.apply(ParamEvent::Amplitude(swell_kernel::Axis::X, 4.0));
        let ground = ground_uniforms(&params, Mat4::IDENTITY);
        let sphere = sphere_uniforms(&params, Mat4::IDENTITY).0;
        assert_eq!([ground.wave[2], ground.wave[3]], [0.0, 0.0]);
        assert_eq!(sphere.wave[2], 4.0);
    }

    #[test]
    fn styles_and_modes_follow_params() {
        let mut params = ShadingParams::default();
        assert_eq!(sphere_uniforms(&params, Mat4::IDENTITY).1, DrawStyle::Fill);
        assert_eq!(ground_uniforms(&params, Mat4::IDENTITY).mode, FragmentMode::Ripple.as_u32());

        params.apply(ParamEvent::Wireframe(true));
        params.ground_mode = GroundMode(FragmentMode::Lit);
        let (sphere, style) = sphere_uniforms(&params, Mat4::IDENTITY);
        assert_eq!(style, DrawStyle::Wireframe);
        assert_eq!(sphere.mode, FragmentMode::Flat.as_u32());
        assert_eq!(ground_uniforms(&params, Mat4::IDENTITY).mode, FragmentMode::Lit.as_u32());
    }
}
