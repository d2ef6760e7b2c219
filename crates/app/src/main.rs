use bevy::prelude::*;
use bevy::window::PresentMode;
use bevy::winit::WinitSettings;

fn main() {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Teahouse".to_string(),
            resolution: (960.0, 640.0).into(),
            present_mode: PresentMode::AutoVsync,
            ..default()
        }),
        ..default()
    }))
    // Nothing animates; only redraw on input.
    .insert_resource(WinitSettings::desktop_app())
    .add_plugins((shop::ShopPlugin, save::SavePlugin, ui::UiPlugin))
    .add_systems(Startup, spawn_camera);

    app.run();
}

/// egui draws through the primary camera.
fn spawn_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}
