use crate::sprite::Vec2;

/// Direction and distance from a sprite center to the cursor.
///
/// The direction is the epsilon-guarded unit vector: with the cursor
/// sitting exactly on the center it degrades to zero instead of NaN, so a
/// degenerate frame leaves velocity untouched and only the spin jitter
/// fires at full strength.
#[inline]
pub(super) fn cursor_delta(cursor: Vec2, center: Vec2) -> (Vec2, f32) {
    let delta = cursor - center;
    (delta.normalize(), delta.length())
}
