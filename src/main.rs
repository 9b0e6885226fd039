mod collision;
mod content;
mod core;
mod level;
mod player;

use avian2d::prelude::*;
use bevy::prelude::*;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Toad's Odyssey".to_string(),
            resolution: (1280, 720).into(),
            resizable: true,
            ..default()
        }),
        ..default()
    }))
    .add_plugins(PhysicsPlugins::default())
    // Content first so tuning and level data exist before anything reads them
    .add_plugins((
        content::ContentPlugin,
        core::CorePlugin,
        collision::CollisionPlugin,
        player::PlayerPlugin,
        level::LevelPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(PhysicsDebugPlugin::default());

    app.run();
}
