use super::perf_stats::PerfStats;
use super::SceneCore;

pub(super) fn enable_perf_metrics(scene: &mut SceneCore, enabled: bool) {
    scene.perf_enabled = enabled;
}

pub(super) fn get_perf_stats(scene: &SceneCore) -> PerfStats {
    scene.perf_stats.clone()
}

pub(super) fn set_influence_radius(scene: &mut SceneCore, radius: f32) {
    scene.tuning.influence_radius = radius.max(0.0);
}

pub(super) fn set_force_scale(scene: &mut SceneCore, scale: f32) {
    scene.tuning.force_scale = scale;
}
