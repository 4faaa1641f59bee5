use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::catalog_page::catalog_page;
use super::navbar::open_external;
use crate::catalog::CatalogView;
use crate::clipboard::{CopyAcknowledgement, CopyRequest};
use crate::config::ClientConfig;
use crate::navigation::{CurrentRoute, NavigateRequest, Page};
use crate::theme;

/// Central panel showing the page for the current route
pub fn page_ui(
    mut contexts: EguiContexts,
    route: Res<CurrentRoute>,
    view: Res<CatalogView>,
    config: Res<ClientConfig>,
    ack: Res<CopyAcknowledgement>,
    mut navigate: MessageWriter<NavigateRequest>,
    mut copy: MessageWriter<CopyRequest>,
) -> Result {
    let ctx = contexts.ctx_mut()?;
    let mut copy_request = None;

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.set_max_width(900.0);
            ui.add_space(16.0);

            match route.page() {
                Page::Home => home_page(ui, &config.data.source_url, &mut navigate),
                Page::Models => copy_request = catalog_page(ui, view.state(), &ack),
                Page::Docs => docs_page(ui),
                Page::NotFound => not_found_page(ui, route.path(), &mut navigate),
            }
        });
    });

    // Handle actions after UI rendering
    if let Some(id) = copy_request {
        copy.write(CopyRequest { id });
    }

    Ok(())
}

fn home_page(ui: &mut egui::Ui, source_url: &str, navigate: &mut MessageWriter<NavigateRequest>) {
    ui.label(egui::RichText::new("Welcome to V.E.R.S.E").size(32.0).strong());
    ui.add_space(6.0);
    ui.label(
        egui::RichText::new("Next Generation Privacy Preserving Machine Learning Platform")
            .size(16.0)
            .color(theme::MUTED_TEXT),
    );
    ui.add_space(16.0);

    ui.horizontal(|ui| {
        if ui.button("Get Started").clicked() {
            navigate.write(NavigateRequest {
                path: "/docs".to_string(),
            });
        }
        if ui.button("Github").on_hover_text(source_url).clicked() {
            open_external(source_url);
        }
    });
}

fn docs_page(ui: &mut egui::Ui) {
    ui.heading("Documentation");
    ui.label(egui::RichText::new("Docs is coming soon!").color(theme::MUTED_TEXT));
}

fn not_found_page(ui: &mut egui::Ui, path: &str, navigate: &mut MessageWriter<NavigateRequest>) {
    ui.heading("Page not found");
    ui.label(
        egui::RichText::new(format!("Nothing lives at {}", path)).color(theme::MUTED_TEXT),
    );
    ui.add_space(8.0);
    if ui.button("Back to home").clicked() {
        navigate.write(NavigateRequest {
            path: "/".to_string(),
        });
    }
}
