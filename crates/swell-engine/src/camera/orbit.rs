use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Orbit camera: rotates around `target` on a sphere of radius `distance`.
///
/// Input is accumulated as pending deltas and applied in [`update`]; with
/// damping enabled only a fraction of the pending motion is applied per
/// update, so the camera eases to a stop after the pointer is released.
///
/// [`update`]: OrbitCamera::update
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub target: Vec3,
    pub fov_y: f32,
    pub near: f32,
    pub far: f32,

    distance: f32,
    yaw: f32,
    pitch: f32,

    min_distance: f32,
    max_distance: f32,
    damping: f32,
    rotate_speed: f32,
    zoom_speed: f32,

    pending_yaw: f32,
    pending_pitch: f32,
    /// Pending zoom in log-distance units.
    pending_zoom: f32,

    home: (Vec3, f32, f32, f32),
}

impl OrbitCamera {
    pub fn new(target: Vec3, distance: f32) -> Self {
        let distance = distance.max(f32::EPSILON);
        Self {
            target,
            fov_y: 75f32.to_radians(),
            near: 0.1,
            far: 100.0,
            distance,
            yaw: 0.0,
            pitch: 0.0,
            min_distance: 0.5,
            max_distance: 50.0,
            damping: 0.05,
            rotate_speed: 0.005,
            zoom_speed: 0.1,
            pending_yaw: 0.0,
            pending_pitch: 0.0,
            pending_zoom: 0.0,
            home: (target, distance, 0.0, 0.0),
        }
    }

    /// Sets the starting angles; they also become the [`reset`](Self::reset) pose.
    pub fn with_angles(mut self, yaw: f32, pitch: f32) -> Self {
        self.yaw = yaw;
        self.pitch = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.home = (self.target, self.distance, self.yaw, self.pitch);
        self
    }

    pub fn with_distance_limits(mut self, min: f32, max: f32) -> Self {
        self.min_distance = min.max(f32::EPSILON);
        self.max_distance = max.max(self.min_distance);
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.home.1 = self.distance;
        self
    }

    /// `0` applies input immediately; values in `(0, 1)` ease it in.
    pub fn with_damping(mut self, factor: f32) -> Self {
        self.damping = factor.clamp(0.0, 1.0);
        self
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    pub fn pitch(&self) -> f32 {
        self.pitch
    }

    /// Queues a rotation from a pointer drag in logical pixels.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        self.pending_yaw -= dx * self.rotate_speed;
        self.pending_pitch += dy * self.rotate_speed;
    }

    /// Queues a zoom; positive `lines` move the camera closer.
    pub fn zoom(&mut self, lines: f32) {
        self.pending_zoom -= lines * self.zoom_speed;
    }

    /// Applies pending input. Call once per frame.
    pub fn update(&mut self) {
        let step = if self.damping > 0.0 { self.damping } else { 1.0 };

        self.yaw += self.pending_yaw * step;
        self.pitch = (self.pitch + self.pending_pitch * step).clamp(-PITCH_LIMIT, PITCH_LIMIT);
        self.distance = (self.distance * (self.pending_zoom * step).exp())
            .clamp(self.min_distance, self.max_distance);

        let keep = 1.0 - step;
        self.pending_yaw *= keep;
        self.pending_pitch *= keep;
        self.pending_zoom *= keep;
    }

    /// Returns to the starting pose and drops pending motion.
    pub fn reset(&mut self) {
        let (target, distance, yaw, pitch) = self.home;
        self.target = target;
        self.distance = distance;
        self.yaw = yaw;
        self.pitch = pitch;
        self.pending_yaw = 0.0;
        self.pending_pitch = 0.0;
        self.pending_zoom = 0.0;
    }

    pub fn eye(&self) -> Vec3 {
        let (sy, cy) = self.yaw.sin_cos();
        let (sp, cp) = self.pitch.sin_cos();
        self.target + self.distance * Vec3::new(cp * sy, sp, cp * cy)
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(self.fov_y, aspect.max(f32::EPSILON), self.near, self.far)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f32, b: f32) -> bool {
        (a - b).abs() <= 1e-4
    }

    fn undamped() -> OrbitCamera {
        OrbitCamera::new(Vec3::ZERO, 10.0).with_damping(0.0)
    }

    #[test]
    fn eye_sits_at_distance_from_target() {
        let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 9.5).with_angles(0.7, 0.3);
        assert!(close((cam.eye() - cam.target).length(), 9.5));
    }

    #[test]
    fn zero_angles_look_down_negative_z() {
        let cam = undamped();
        assert!(close(cam.eye().z, 10.0));
        assert!(close(cam.eye().y, 0.0));
    }

    #[test]
    fn pitch_is_clamped_short_of_the_poles() {
        let mut cam = undamped();
        cam.rotate(0.0, 1.0e6);
        cam.update();
        assert!(close(cam.pitch(), PITCH_LIMIT));

        cam.rotate(0.0, -1.0e7);
        cam.update();
        assert!(close(cam.pitch(), -PITCH_LIMIT));
    }

    #[test]
    fn zoom_respects_limits() {
        let mut cam = undamped().with_distance_limits(2.0, 20.0);
        cam.zoom(1000.0);
        cam.update();
        assert_eq!(cam.distance(), 2.0);

        cam.zoom(-1000.0);
        cam.update();
        assert_eq!(cam.distance(), 20.0);
    }

    #[test]
    fn wheel_up_moves_closer() {
        let mut cam = undamped();
        cam.zoom(1.0);
        cam.update();
        assert!(cam.distance() < 10.0);
    }

    #[test]
    fn damping_spreads_motion_over_frames() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, 10.0).with_damping(0.5);
        cam.rotate(-100.0, 0.0);
        cam.update();
        let first = cam.yaw();
        assert!(close(first, 0.25));

        for _ in 0..60 {
            cam.update();
        }
        assert!(close(cam.yaw(), 0.5));
    }

    #[test]
    fn reset_restores_home_pose() {
        let mut cam = OrbitCamera::new(Vec3::ZERO, 8.0).with_angles(0.2, 0.4).with_damping(0.0);
        cam.rotate(300.0, -50.0);
        cam.zoom(3.0);
        cam.update();
        cam.rotate(10.0, 0.0);

        cam.reset();
        cam.update();
        assert!(close(cam.yaw(), 0.2));
        assert!(close(cam.pitch(), 0.4));
        assert!(close(cam.distance(), 8.0));
    }

    #[test]
    fn target_projects_to_screen_center() {
        let cam = OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 9.5).with_angles(0.5, 0.3);
        let clip = cam.view_proj(16.0 / 9.0) * cam.target.extend(1.0);
        assert!(close(clip.x / clip.w, 0.0));
        assert!(close(clip.y / clip.w, 0.0));
        let z = clip.z / clip.w;
        assert!((0.0..=1.0).contains(&z));
    }
}
