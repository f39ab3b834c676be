use glam::{Vec2, vec2};

/// Player view-point in world space.
///
/// * Only **yaw** is simulated; the horizon never tilts.
/// * World y grows southward (down-screen), so a positive yaw turn sweeps
///   the facing direction south through east.
#[derive(Clone, Copy, Debug)]
pub struct Camera {
    pos: Vec2, // fractional tile units
    yaw: f32,  // radians (0 = east)
    fov: f32,  // horizontal FoV (radians)
}

impl Camera {
    /// Create a new camera at `pos`, facing `yaw`, with horizontal FoV `fov`.
    pub fn new(pos: Vec2, yaw: f32, fov: f32) -> Self {
        Self { pos, yaw, fov }
    }

    #[inline]
    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    #[inline]
    pub fn yaw(&self) -> f32 {
        self.yaw
    }

    /// Overwrite position and yaw in one go (post-simulation sync).
    #[inline]
    pub fn set_pose(&mut self, pos: Vec2, yaw: f32) {
        self.pos = pos;
        self.yaw = yaw;
    }

    /// Transform a world point `p` into camera-local coords:
    ///  .x = lateral offset (+ maps right of screen center)
    ///  .y = depth along the forward axis
    #[inline]
    pub fn to_cam(&self, p: Vec2) -> Vec2 {
        let d = p - self.pos;
        vec2(self.forward().perp().dot(d), self.forward().dot(d))
    }

    /*──────────────────────── derived vectors ───────────────────────*/

    /// Unit vector pointing where the camera looks.
    #[inline(always)]
    pub fn forward(self) -> Vec2 {
        let (s, c) = self.yaw.sin_cos();
        Vec2::new(c, s)
    }

    /// View-plane vector: perpendicular to forward, length tan(fov/2).
    ///
    /// `forward + plane * cx` with `cx` in [-1, 1] sweeps the frustum
    /// linearly across the screen, left edge to right edge.
    #[inline]
    pub fn plane(self) -> Vec2 {
        self.forward().perp() * (self.fov * 0.5).tan()
    }

    /// Ray direction for screen parameter `camera_x` in [-1, 1].
    ///
    /// Not unit length: its forward component is exactly 1, which is what
    /// makes the DDA parameter a perpendicular distance.
    #[inline]
    pub fn ray_dir(self, camera_x: f32) -> Vec2 {
        self.forward() + self.plane() * camera_x
    }

    /*──────────────────────── movement helpers ──────────────────────*/

    /// Rotate around the vertical axis (positive = clockwise on screen).
    pub fn turn(&mut self, delta_yaw: f32) {
        self.yaw = (self.yaw + delta_yaw).rem_euclid(std::f32::consts::TAU);
    }

    /*───────────────── projection / frustum helpers ─────────────────*/

    /// Pixel distance to the projection plane for viewport width `w`.
    ///
    /// ```text
    /// focal = w / (2 * tan(fov/2))
    /// ```
    #[inline]
    pub fn screen_scale(self, w: usize) -> f32 {
        (w as f32) * 0.5 / (self.fov * 0.5).tan()
    }
}

/*====================================================================*/
/*                                Tests                                */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn forward_and_plane_are_orthogonal() {
        let cam = Camera::new(Vec2::ZERO, 0.3, 1.57);
        let f = cam.forward();
        let p = cam.plane();
        assert!((f.length() - 1.0).abs() < 1e-5);
        assert!(f.dot(p).abs() < 1e-5);
        assert!((p.length() - (1.57_f32 * 0.5).tan()).abs() < 1e-5);
    }

    #[test]
    fn screen_scale_at_90_deg() {
        let cam = Camera::new(Vec2::ZERO, 0.0, FRAC_PI_2);
        assert!((cam.screen_scale(640) - 320.0).abs() < 1e-3);
    }

    #[test]
    fn to_cam_axes_align() {
        let cam = Camera::new(Vec2::ZERO, 0.0, FRAC_PI_2);
        // Point straight ahead at (10, 0) → (lateral=0, depth=10)
        assert!((cam.to_cam(vec2(10.0, 0.0)) - vec2(0.0, 10.0)).length() < 1e-5);
        // Point south at (0, 5) → right of center → (lateral=5, depth=0)
        assert!((cam.to_cam(vec2(0.0, 5.0)) - vec2(5.0, 0.0)).length() < 1e-5);
    }

    #[test]
    fn to_cam_rotated_yaw() {
        let cam = Camera::new(Vec2::ZERO, FRAC_PI_2, FRAC_PI_2);
        // Yaw = 90°: forward is +Y; (0,10) → (lateral=0, depth=10)
        assert!((cam.to_cam(vec2(0.0, 10.0)) - vec2(0.0, 10.0)).length() < 1e-5);
    }

    #[test]
    fn ray_dir_sweeps_half_fov_each_side() {
        let cam = Camera::new(Vec2::ZERO, 0.0, FRAC_PI_2);
        let left = cam.ray_dir(-1.0);
        let right = cam.ray_dir(1.0);
        // 90° fov → edge rays at ±45° off the facing axis
        assert!((left.y.atan2(left.x) + FRAC_PI_2 * 0.5).abs() < 1e-5);
        assert!((right.y.atan2(right.x) - FRAC_PI_2 * 0.5).abs() < 1e-5);
        // center ray is the facing direction itself
        assert!((cam.ray_dir(0.0) - cam.forward()).length() < 1e-6);
    }

    #[test]
    fn turn_wraps_into_tau() {
        let mut cam = Camera::new(Vec2::ZERO, 0.1, FRAC_PI_2);
        cam.turn(-0.5);
        assert!(cam.yaw() > 0.0 && cam.yaw() < std::f32::consts::TAU);
        assert!((cam.yaw() - (std::f32::consts::TAU - 0.4)).abs() < 1e-5);
    }
}
