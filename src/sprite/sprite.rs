use crate::domain::config::Tuning;

use super::vec2::Vec2;

/// One floating sprite
pub struct Sprite {
    // === Physics State ===
    /// Top-left position (px)
    pub pos: Vec2,
    /// Velocity vector (px per frame)
    pub velocity: Vec2,
    /// Rotation angle (degrees, unbounded)
    pub rotation: f32,
    /// Rotation speed (degrees per frame)
    pub spin: f32,

    // === Shape ===
    /// Footprint edge length (px)
    pub size: f32,

    /// Asset path this sprite renders
    pub asset: String,
}

impl Sprite {
    pub fn new(
        asset: String,
        pos: Vec2,
        velocity: Vec2,
        rotation: f32,
        spin: f32,
        size: f32,
    ) -> Self {
        Self {
            pos,
            velocity,
            rotation,
            spin,
            size,
            asset,
        }
    }

    /// Center of the sprite's footprint
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.pos.x + self.size * 0.5, self.pos.y + self.size * 0.5)
    }

    /// Accumulate a cursor force.
    ///
    /// `dir` is the unit direction from the sprite center to the force
    /// source, `distance` the separation in px. Strength falls off linearly
    /// to zero at the influence radius, so anything at or beyond the radius
    /// is a no-op on velocity. Deterministic; the rotational jitter that
    /// accompanies a cursor push goes through `apply_spin_jitter` instead.
    pub fn apply_force(&mut self, dir: Vec2, distance: f32, tuning: &Tuning) {
        let strength = force_strength(distance, tuning.influence_radius);
        self.velocity = self.velocity + dir * (strength * tuning.force_scale);
    }

    /// Perturb the spin.
    ///
    /// The scene draws the jitter from its RNG and scales it by force
    /// strength. Kept out of `apply_force` so the velocity path stays
    /// reproducible under a fixed seed.
    pub fn apply_spin_jitter(&mut self, jitter: f32) {
        self.spin += jitter;
    }

    /// One frame of physics: integrate, bounce off the viewport edges,
    /// then damp.
    ///
    /// Axes resolve independently, so a corner hit reflects both velocity
    /// components in the same frame. Damping runs unconditionally, bounce
    /// or not. Position components end inside `[0, bound - size]`.
    pub fn update(&mut self, width: f32, height: f32, tuning: &Tuning) {
        self.pos = self.pos + self.velocity;
        self.rotation += self.spin;

        // Guard against viewports smaller than the footprint
        let max_x = (width - self.size).max(0.0);
        let max_y = (height - self.size).max(0.0);

        if self.pos.x < 0.0 || self.pos.x > max_x {
            self.velocity.x = -self.velocity.x * tuning.restitution;
            self.pos.x = self.pos.x.clamp(0.0, max_x);
        }
        if self.pos.y < 0.0 || self.pos.y > max_y {
            self.velocity.y = -self.velocity.y * tuning.restitution;
            self.pos.y = self.pos.y.clamp(0.0, max_y);
        }

        self.velocity = self.velocity * tuning.friction;
        self.spin *= tuning.spin_damping;
    }

    /// Pull the position back inside the viewport after a resize.
    ///
    /// Upper clamp only; velocity and rotation are not rescaled on resize.
    pub fn clamp_to(&mut self, width: f32, height: f32) {
        self.pos.x = self.pos.x.min((width - self.size).max(0.0));
        self.pos.y = self.pos.y.min((height - self.size).max(0.0));
    }
}

/// Linear falloff: 1 at zero distance, 0 at the influence radius and beyond
#[inline]
pub fn force_strength(distance: f32, radius: f32) -> f32 {
    (1.0 - distance / radius).max(0.0)
}
