mod catalog_page;
mod dialogs;
mod navbar;
mod pages;

use bevy::prelude::*;
use bevy_egui::EguiPrimaryContextPass;

/// Marker for the camera egui renders into
#[derive(Component)]
pub struct UiCamera;

fn spawn_ui_camera(mut commands: Commands) {
    commands.spawn((Camera2d, UiCamera));
}

pub struct UiPlugin;

impl Plugin for UiPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ui_camera).add_systems(
            EguiPrimaryContextPass,
            (
                // Top panel must be laid out before the central panel
                navbar::navbar_ui,
                pages::page_ui,
                dialogs::config_reset_notification_ui,
            )
                .chain(),
        );
    }
}
