use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::{ClientConfig, ConfigResetNotification};

/// One-time notice that a broken config file was replaced by defaults
pub fn config_reset_notification_ui(
    mut contexts: EguiContexts,
    mut notification: ResMut<ConfigResetNotification>,
    config: Res<ClientConfig>,
) -> Result {
    if !notification.show {
        return Ok(());
    }

    egui::Window::new("Configuration Reset")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(contexts.ctx_mut()?, |ui| {
            ui.label("Your configuration could not be loaded and defaults are in use.");

            if let Some(ref reason) = notification.reason {
                ui.add_space(5.0);
                ui.label(egui::RichText::new(reason).weak());
            }

            ui.add_space(5.0);
            ui.label(
                egui::RichText::new(config.config_path.to_string_lossy().to_string()).weak(),
            );
            ui.add_space(10.0);

            if ui.button("OK").clicked() {
                notification.show = false;
            }
        });

    Ok(())
}
