use glam::{Mat3, Mat4, Vec3, Vec4};
use std::f32::consts::PI;

pub struct Projector {
    matrix: Mat4,
    parameters: Vec4,
}

impl Projector {
    pub fn new_perspective(fov: f32, aspect_ratio: f32, near_clip: f32, far_clip: f32) -> Self {
        assert!(
            fov > 0.0 && fov < 360.0,
            "Field of view must be a valid 360 degree value."
        );
        assert!(near_clip > 0.0, "Near clip must be a positive distance.");
        assert!(far_clip > 0.0, "Far clip must be a positive distance.");
        assert!(near_clip < far_clip, "Near clip must be less than far clip.");

        let fov_radians = fov * (PI / 180.0);
        let y_scale = 1.0 / f32::tan(fov_radians * 0.5);
        let x_scale = y_scale / aspect_ratio;
        let neg_far_range = if f32::is_infinite(far_clip) {
            -1.0
        } else {
            far_clip / (near_clip - far_clip)
        };

        let mut result = Mat4::ZERO;
        *result.col_mut(0) = Vec4::new(x_scale, 0.0, 0.0, 0.0);
        *result.col_mut(1) = Vec4::new(0.0, y_scale, 0.0, 0.0);
        *result.col_mut(2) = Vec4::new(0.0, 0.0, neg_far_range, -1.0);
        *result.col_mut(3) = Vec4::new(0.0, 0.0, near_clip * neg_far_range, 0.0);

        Self {
            matrix: result,
            parameters: Vec4::new(fov, aspect_ratio, near_clip, far_clip),
        }
    }

    /// (fov, aspect_ratio, near_clip, far_clip)
    pub fn parameters(&self) -> Vec4 {
        self.parameters
    }

    pub fn matrix(&self) -> Mat4 {
        self.matrix
    }
}

/// Eye point orbiting a watch point. Yaw steps circle the +Y axis, pitch
/// steps are refused close to the orbit poles, zoom steps slide along the
/// view ray inside a radius band.
pub struct OrbitCamera {
    root: Vec3,
    watch: Vec3,
    min_radius: f32,
    max_radius: f32,
}

impl OrbitCamera {
    const POLE_LIMIT: f32 = 0.99;

    pub fn new(root: Vec3, watch: Vec3, min_radius: f32, max_radius: f32) -> Self {
        assert!(min_radius > 0.0, "Orbit radius band must start above zero.");
        assert!(min_radius < max_radius, "Orbit radius band is inverted.");

        Self {
            root,
            watch,
            min_radius,
            max_radius,
        }
    }

    pub fn root(&self) -> Vec3 {
        self.root
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.root, self.watch, Vec3::Y)
    }

    pub fn yaw(&mut self, angle: f32) {
        let offset = self.root - self.watch;
        self.root = self.watch + Mat3::from_rotation_y(angle) * offset;
    }

    /// Positive angles climb toward +Y. Steps that would carry the eye onto
    /// a pole (where the view up vector degenerates) are dropped.
    pub fn pitch(&mut self, angle: f32) {
        let offset = self.root - self.watch;
        let pole = if angle > 0.0 { Vec3::Y } else { -Vec3::Y };
        if pole.dot(offset.normalize()) >= Self::POLE_LIMIT {
            return;
        }

        let axis = Vec3::Y.cross(offset).normalize();
        self.root = self.watch + Mat3::from_axis_angle(axis, -angle) * offset;
    }

    /// Positive amounts retreat from the watch point. Steps that would
    /// leave the radius band are dropped.
    pub fn zoom(&mut self, amount: f32) {
        let offset = self.root - self.watch;
        let next = offset + offset.normalize() * amount;
        let radius = next.length();
        if radius > self.min_radius && radius < self.max_radius {
            self.root = self.watch + next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(projector: &Projector, point: Vec3) -> Vec3 {
        let clip = projector.matrix() * point.extend(1.0);
        clip.truncate() / clip.w
    }

    #[test]
    fn perspective_maps_the_clip_planes_to_the_depth_extremes() {
        let projector = Projector::new_perspective(90.0, 1.0, 0.1, 100.0);

        let near = project(&projector, Vec3::new(0.0, 0.0, -0.1));
        let far = project(&projector, Vec3::new(0.0, 0.0, -100.0));
        assert!(near.z.abs() < 1e-6, "near plane depth {}", near.z);
        assert!((far.z - 1.0).abs() < 1e-4, "far plane depth {}", far.z);
    }

    #[test]
    fn perspective_scales_x_by_the_aspect_ratio() {
        let projector = Projector::new_perspective(90.0, 2.0, 0.1, 100.0);

        let projected = project(&projector, Vec3::new(1.0, 1.0, -1.0));
        assert!((projected.x * 2.0 - projected.y).abs() < 1e-6);

        assert_eq!(projector.parameters(), Vec4::new(90.0, 2.0, 0.1, 100.0));
    }

    #[test]
    fn yaw_preserves_radius_and_height() {
        let mut camera = OrbitCamera::new(Vec3::new(8.0, 12.0, 16.0), Vec3::ZERO, 1.0, 44.0);
        let radius = camera.root().length();
        let height = camera.root().y;

        for _ in 0..64 {
            camera.yaw(0.2);
        }

        assert!((camera.root().length() - radius).abs() < 1e-3);
        assert!((camera.root().y - height).abs() < 1e-4);
    }

    #[test]
    fn pitch_never_reaches_the_poles() {
        let mut camera = OrbitCamera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0, 44.0);

        for _ in 0..1000 {
            camera.pitch(0.05);
        }
        assert!(camera.root().normalize().dot(Vec3::Y) < 1.0 - 1e-4);

        for _ in 0..2000 {
            camera.pitch(-0.05);
        }
        assert!(camera.root().normalize().dot(-Vec3::Y) < 1.0 - 1e-4);
    }

    #[test]
    fn pitch_climbs_toward_positive_y() {
        let mut camera = OrbitCamera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 1.0, 44.0);
        camera.pitch(0.1);
        assert!(camera.root().y > 0.0);
    }

    #[test]
    fn zoom_respects_the_radius_band() {
        let mut camera = OrbitCamera::new(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO, 2.0, 16.0);

        camera.zoom(100.0);
        assert_eq!(camera.root(), Vec3::new(10.0, 0.0, 0.0));

        camera.zoom(-100.0);
        assert_eq!(camera.root(), Vec3::new(10.0, 0.0, 0.0));

        camera.zoom(2.0);
        assert!((camera.root().length() - 12.0).abs() < 1e-5);
    }
}
