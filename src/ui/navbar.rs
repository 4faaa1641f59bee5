use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::config::ClientConfig;
use crate::navigation::{active_entry, CurrentRoute, NavigateRequest, NAV_ENTRIES};
use crate::theme;

/// Top navigation bar: brand, one button per route, source link
pub fn navbar_ui(
    mut contexts: EguiContexts,
    route: Res<CurrentRoute>,
    config: Res<ClientConfig>,
    mut navigate: MessageWriter<NavigateRequest>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let active = active_entry(&NAV_ENTRIES, route.path());

    egui::TopBottomPanel::top("navbar")
        .frame(
            egui::Frame::side_top_panel(&ctx.style())
                .inner_margin(egui::Margin::symmetric(16, 10)),
        )
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 6.0;

                // Logo
                egui::Frame::NONE
                    .fill(theme::ACCENT)
                    .inner_margin(egui::Margin::symmetric(10, 4))
                    .show(ui, |ui| {
                        ui.label(
                            egui::RichText::new("V")
                                .strong()
                                .size(18.0)
                                .color(theme::ON_ACCENT),
                        );
                    });
                ui.label(egui::RichText::new("V.E.R.S.E").strong().size(16.0));

                ui.add_space(16.0);

                for entry in NAV_ENTRIES.iter() {
                    let selected = active == Some(entry);
                    let mut text = egui::RichText::new(entry.label).size(14.0);
                    if selected {
                        text = text.strong().color(egui::Color32::WHITE);
                    }

                    let mut button = egui::Button::new(text)
                        .min_size(egui::vec2(0.0, 28.0))
                        .selected(selected);
                    if selected {
                        button = button
                            .fill(theme::ACCENT_SOFT)
                            .stroke(egui::Stroke::new(1.0, theme::ACCENT));
                    }

                    if ui.add(button).clicked() && !selected {
                        navigate.write(NavigateRequest {
                            path: entry.path.to_string(),
                        });
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui
                        .button("Source")
                        .on_hover_text(config.data.source_url.as_str())
                        .clicked()
                    {
                        open_external(&config.data.source_url);
                    }
                });
            });
        });

    Ok(())
}

/// Open a link in the system browser
pub fn open_external(url: &str) {
    if let Err(e) = open::that(url) {
        warn!("Failed to open {}: {}", url, e);
    }
}
