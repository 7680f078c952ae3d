use super::SceneCore;

/// Last write wins: intermediate positions between ticks are dropped.
pub(super) fn pointer_moved(scene: &mut SceneCore, x: f32, y: f32) {
    scene.cursor_x = x;
    scene.cursor_y = y;
}

/// Adopt new viewport dimensions and pull sprites back inside them.
///
/// Position gets an upper clamp only; velocity and rotation are not
/// rescaled on resize.
pub(super) fn viewport_resized(scene: &mut SceneCore, width: f32, height: f32) {
    scene.width = width;
    scene.height = height;

    for sprite in scene.sprites.iter_mut() {
        sprite.clamp_to(width, height);
    }
}
