//! UI domain: jetpack fuel gauge.

use bevy::prelude::*;

use crate::movement::{Fuel, Player};

pub(crate) const FUEL_GAUGE_WIDTH: f32 = 200.0;
pub(crate) const FUEL_GAUGE_HEIGHT: f32 = 16.0;
pub(crate) const FUEL_GAUGE_PADDING: f32 = 16.0;

/// Marker for the fuel gauge container
#[derive(Component)]
pub struct FuelGaugeUI;

/// Marker for the fuel gauge fill element
#[derive(Component)]
pub struct FuelGaugeFill;

pub(crate) fn spawn_fuel_gauge_ui(mut commands: Commands) {
    // Root container positioned at top-left
    commands
        .spawn((
            FuelGaugeUI,
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(FUEL_GAUGE_PADDING),
                top: Val::Px(FUEL_GAUGE_PADDING),
                width: Val::Px(FUEL_GAUGE_WIDTH),
                height: Val::Px(FUEL_GAUGE_HEIGHT),
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.8)),
            BorderColor::all(Color::srgb(0.3, 0.3, 0.3)),
        ))
        .with_children(|parent| {
            parent.spawn((
                FuelGaugeFill,
                Node {
                    width: Val::Percent(100.0),
                    height: Val::Percent(100.0),
                    ..default()
                },
                BackgroundColor(fuel_color(1.0)),
            ));
        });
}

/// Orange when nearly dry, cyan when full.
pub(crate) fn fuel_color(ratio: f32) -> Color {
    let t = ratio.clamp(0.0, 1.0);
    Color::srgb(0.95 - t * 0.75, 0.45 + t * 0.35, 0.15 + t * 0.75)
}

pub(crate) fn update_fuel_gauge(
    player_query: Query<&Fuel, (With<Player>, Changed<Fuel>)>,
    mut fill_query: Query<(&mut Node, &mut BackgroundColor), With<FuelGaugeFill>>,
) {
    let Some(fuel) = player_query.iter().next() else {
        return;
    };

    for (mut node, mut bg_color) in &mut fill_query {
        let ratio = fuel.ratio();
        node.width = Val::Percent(ratio * 100.0);
        bg_color.0 = fuel_color(ratio);
    }
}
