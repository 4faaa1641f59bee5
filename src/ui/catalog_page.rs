//! Models page: renders the catalog view state as a list of cards.

use bevy_egui::egui;

use crate::catalog::{CardKey, CatalogDisplay, CatalogLoadState, ModelRecord};
use crate::clipboard::CopyAcknowledgement;
use crate::theme;

/// Everything a card shows, resolved from a record
#[derive(Debug, PartialEq)]
pub struct CardView<'a> {
    pub key: CardKey<'a>,
    pub title: &'a str,
    /// Created date, then vector format, when present
    pub badges: Vec<String>,
    /// Records without an id get no copy control
    pub copy_id: Option<&'a str>,
    pub copied: bool,
    pub description: Option<&'a str>,
}

pub fn card_view<'a>(
    record: &'a ModelRecord,
    index: usize,
    ack: &CopyAcknowledgement,
) -> CardView<'a> {
    let mut badges = Vec::new();
    if let Some(date) = record.created_date() {
        badges.push(date);
    }
    if let Some(format) = record.vector_format.as_deref().filter(|f| !f.is_empty()) {
        badges.push(format.to_string());
    }

    let copy_id = record.id.as_deref();
    CardView {
        key: record.card_key(index),
        title: record.display_name(),
        badges,
        copy_id,
        copied: copy_id.is_some_and(|id| ack.is_acknowledged(id)),
        description: record.description.as_deref().filter(|d| !d.is_empty()),
    }
}

/// Render the catalog page. Returns the id the user asked to copy, if any.
pub fn catalog_page(
    ui: &mut egui::Ui,
    state: Option<&CatalogLoadState>,
    ack: &CopyAcknowledgement,
) -> Option<String> {
    ui.heading("Models");
    ui.label(egui::RichText::new("List of models").color(theme::MUTED_TEXT));
    ui.add_space(12.0);

    // Not mounted until the first Update after navigation
    let display = state.map_or(CatalogDisplay::LoadingIndicator, CatalogLoadState::display);

    let mut copy_request = None;
    match display {
        CatalogDisplay::LoadingIndicator => {
            ui.horizontal(|ui| {
                ui.spinner();
                ui.label("Loading models...");
            });
        }
        CatalogDisplay::ErrorMessage(message) => {
            ui.colored_label(theme::ERROR_TEXT, format!("Error: {}", message));
        }
        CatalogDisplay::NoRecords => {
            ui.colored_label(theme::MUTED_TEXT, "No models available.");
        }
        CatalogDisplay::Cards(records) => {
            for (index, record) in records.iter().enumerate() {
                let card = card_view(record, index, ack);
                ui.push_id(card.key, |ui| {
                    if model_card(ui, &card, record) {
                        copy_request = card.copy_id.map(str::to_string);
                    }
                });
                ui.add_space(8.0);
            }
        }
    }

    copy_request
}

/// Draw one card. Returns true when its copy button was clicked.
fn model_card(ui: &mut egui::Ui, card: &CardView<'_>, record: &ModelRecord) -> bool {
    let mut copy_clicked = false;

    egui::Frame::NONE
        .fill(theme::CARD_FILL)
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.label(egui::RichText::new(card.title).size(16.0).strong());

            if !card.badges.is_empty() {
                ui.horizontal(|ui| {
                    for badge in &card.badges {
                        egui::Frame::NONE
                            .fill(theme::BADGE_FILL)
                            .inner_margin(egui::Margin::symmetric(6, 2))
                            .show(ui, |ui| {
                                ui.label(egui::RichText::new(badge).size(12.0));
                            });
                    }
                });
            }

            if let Some(id) = card.copy_id {
                ui.add_space(6.0);
                egui::Frame::NONE
                    .fill(theme::ID_ROW_FILL)
                    .inner_margin(egui::Margin::symmetric(8, 4))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width());
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new(id)
                                    .monospace()
                                    .size(12.0)
                                    .color(theme::MUTED_TEXT),
                            );
                            ui.with_layout(
                                egui::Layout::right_to_left(egui::Align::Center),
                                |ui| {
                                    if card.copied {
                                        ui.colored_label(theme::COPIED_TEXT, "Copied");
                                    }
                                    if ui.small_button("Copy ID").on_hover_text("Copy ID").clicked()
                                    {
                                        copy_clicked = true;
                                    }
                                },
                            );
                        });
                    });
            }

            if let Some(description) = card.description {
                ui.add_space(6.0);
                ui.label(description);
            }

            ui.add_space(4.0);
            egui::CollapsingHeader::new("More")
                .default_open(false)
                .show(ui, |ui| {
                    ui.label(
                        egui::RichText::new(record.pretty_json())
                            .monospace()
                            .size(10.0),
                    );
                });
        });

    copy_clicked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::ClipboardSink;
    use crate::error::ClipboardError;
    use std::time::Duration;

    struct NullSink;

    impl ClipboardSink for NullSink {
        fn write_text(&mut self, _text: &str) -> Result<(), ClipboardError> {
            Ok(())
        }
    }

    fn record(id: Option<&str>, name: Option<&str>) -> ModelRecord {
        ModelRecord {
            id: id.map(str::to_string),
            name: name.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn test_card_view_for_full_record() {
        let mut rec = record(Some("m1"), Some("Net-A"));
        rec.vector_format = Some("onnx".to_string());
        rec.description = Some("A tiny net".to_string());
        let ack = CopyAcknowledgement::default();

        let card = card_view(&rec, 0, &ack);

        assert_eq!(card.key, CardKey::Id("m1"));
        assert_eq!(card.title, "Net-A");
        assert_eq!(card.copy_id, Some("m1"));
        assert!(!card.copied);
        assert_eq!(card.badges, vec!["onnx".to_string()]);
        assert_eq!(card.description, Some("A tiny net"));
    }

    #[test]
    fn test_card_view_marks_acknowledged_id() {
        let rec = record(Some("m1"), Some("Net-A"));
        let other = record(Some("m2"), Some("Net-B"));
        let mut ack = CopyAcknowledgement::default();
        ack.copy(&mut NullSink, "m1", Duration::ZERO).unwrap();

        assert!(card_view(&rec, 0, &ack).copied);
        assert!(!card_view(&other, 1, &ack).copied);
    }

    #[test]
    fn test_card_without_id_has_positional_key_and_no_copy() {
        let rec = record(None, None);
        let ack = CopyAcknowledgement::default();

        let card = card_view(&rec, 3, &ack);

        assert_eq!(card.key, CardKey::Position(3));
        assert_eq!(card.title, "Unnamed Model");
        assert!(card.copy_id.is_none());
        assert!(!card.copied);
    }

    #[test]
    fn test_created_date_badge_comes_first() {
        let mut rec = record(Some("m1"), Some("Net-A"));
        rec.created_at = Some("2025-01-14T10:02:33.120000".to_string());
        rec.vector_format = Some("onnx".to_string());
        let ack = CopyAcknowledgement::default();

        let card = card_view(&rec, 0, &ack);

        assert_eq!(card.badges.len(), 2);
        assert_eq!(card.badges[1], "onnx");
    }

    #[test]
    fn test_blank_optional_fields_are_hidden() {
        let mut rec = record(Some("m1"), Some("Net-A"));
        rec.vector_format = Some(String::new());
        rec.description = Some(String::new());
        rec.created_at = Some("not a date".to_string());
        let ack = CopyAcknowledgement::default();

        let card = card_view(&rec, 0, &ack);

        assert!(card.badges.is_empty());
        assert!(card.description.is_none());
    }
}
