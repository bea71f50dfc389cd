//! Frame and tick rate measurement.

mod rate_meter;

pub use rate_meter::*;

use bevy::prelude::*;

/// Plugin for rate measurement. Ticks are counted by the simulation plugin,
/// right after each tick runs.
pub struct MetricsPlugin;

impl Plugin for MetricsPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<RateMeters>()
            .add_systems(PreUpdate, record_frame);
    }
}
