//! Movement domain: ground and wall sensing.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{ContactSnapshot, GameLayer, MovementState, MovementTuning, Player};

/// Takes the single ground/wall snapshot used by every decision this physics tick.
pub(crate) fn detect_contacts(
    time: Res<Time>,
    spatial_query: SpatialQuery,
    tuning: Res<MovementTuning>,
    mut query: Query<(&Transform, &mut MovementState), With<Player>>,
) {
    let dt = time.delta_secs();

    // Filter to only hit Ground / Wall layer entities
    let ground_filter = SpatialQueryFilter::from_mask(GameLayer::Ground);
    let wall_filter = SpatialQueryFilter::from_mask(GameLayer::Wall);
    let ground_box = Collider::rectangle(tuning.ground_probe_width, tuning.ground_probe_height);

    for (transform, mut state) in &mut query {
        let origin = transform.translation.truncate();

        let grounded = !spatial_query
            .shape_intersections(
                &ground_box,
                origin + tuning.ground_probe_offset(),
                0.0,
                &ground_filter,
            )
            .is_empty();

        let touching_wall = spatial_query
            .cast_ray(
                origin,
                state.facing.direction(),
                tuning.wall_check_distance,
                true,
                &wall_filter,
            )
            .is_some();

        state.sense(
            ContactSnapshot {
                grounded,
                touching_wall,
            },
            dt,
            &tuning,
        );
    }
}
