use egui::{Align2, Color32, FontId, Pos2, RichText, Sense, Stroke, Ui, Vec2};

use crate::plan::{Granularity, PlanTable, Weekday};

use super::theme::{accent_color, contrast_text_color, grid_colors, parse_hex_color};

const TIME_LABEL_WIDTH: f32 = 48.0;
const COLUMN_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 26.0;

/// Row height keyed off the configured granularity: a coarse grid has a
/// third of the rows, so each row gets more room.
pub fn slot_row_height(granularity: Granularity) -> f32 {
    match granularity {
        Granularity::TenMinutes => 14.0,
        Granularity::ThirtyMinutes => 26.0,
    }
}

/// Width of one day column, never negative even in a degenerate viewport.
fn column_width(available: f32) -> f32 {
    ((available - TIME_LABEL_WIDTH - COLUMN_SPACING * 7.0) / 7.0).max(0.0)
}

/// Draw the 7-day x N-slot weekly grid from the rendered matrices.
/// Returns the day whose header was clicked, if any.
pub fn render_week_grid(
    ui: &mut Ui,
    slots: &[String],
    table: &PlanTable,
    selected_day: Weekday,
    granularity: Granularity,
) -> Option<Weekday> {
    let mut clicked_day = None;
    let (empty_bg, line_color, header_text) = grid_colors();
    let row_height = slot_row_height(granularity);
    let col_width = column_width(ui.available_width());

    // Header row: day names, selected day in accent
    ui.horizontal(|ui| {
        ui.spacing_mut().item_spacing.x = 0.0;
        ui.allocate_exact_size(Vec2::new(TIME_LABEL_WIDTH, HEADER_HEIGHT), Sense::hover());
        ui.add_space(COLUMN_SPACING);

        for wd in Weekday::ALL {
            let (rect, response) = ui.allocate_exact_size(
                Vec2::new(col_width, HEADER_HEIGHT),
                Sense::click(),
            );
            let is_selected = wd == selected_day;
            let text_color = if is_selected { accent_color() } else { header_text };
            ui.painter().text(
                rect.center(),
                Align2::CENTER_CENTER,
                wd.label(),
                FontId::proportional(14.0),
                text_color,
            );
            if is_selected {
                ui.painter().line_segment(
                    [
                        Pos2::new(rect.left() + 4.0, rect.bottom() - 1.0),
                        Pos2::new(rect.right() - 4.0, rect.bottom() - 1.0),
                    ],
                    Stroke::new(2.0, accent_color()),
                );
            }
            if response.hovered() {
                ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
            }
            if response.clicked() {
                clicked_day = Some(wd);
            }
            ui.add_space(COLUMN_SPACING);
        }
    });

    egui::ScrollArea::vertical().show(ui, |ui| {
        // No vertical gaps so the rows read as one continuous grid
        ui.spacing_mut().item_spacing.y = 0.0;

        for (row, slot) in slots.iter().enumerate() {
            let is_hour_start = slot.ends_with(":00");

            ui.horizontal(|ui| {
                ui.spacing_mut().item_spacing.x = 0.0;

                // Time label on hour boundaries only
                ui.allocate_ui_with_layout(
                    Vec2::new(TIME_LABEL_WIDTH, row_height),
                    egui::Layout::right_to_left(egui::Align::Center),
                    |ui| {
                        if is_hour_start {
                            ui.add_space(5.0);
                            ui.label(RichText::new(slot).size(11.0).color(Color32::GRAY));
                        }
                    },
                );
                ui.add_space(COLUMN_SPACING);

                for wd in Weekday::ALL {
                    let (rect, _) = ui.allocate_exact_size(
                        Vec2::new(col_width, row_height),
                        Sense::hover(),
                    );

                    let day = wd.index();
                    let color_hex = &table.colors[day][row];
                    let bg = parse_hex_color(color_hex).unwrap_or(empty_bg);
                    ui.painter().rect_filled(rect, 0.0, bg);

                    // Horizontal grid line, heavier on hour boundaries
                    let top_stroke = if is_hour_start {
                        Stroke::new(1.0, line_color)
                    } else {
                        Stroke::new(0.5, line_color.gamma_multiply(0.5))
                    };
                    ui.painter().line_segment(
                        [
                            Pos2::new(rect.left(), rect.top()),
                            Pos2::new(rect.right(), rect.top()),
                        ],
                        top_stroke,
                    );
                    ui.painter().line_segment(
                        [
                            Pos2::new(rect.right(), rect.top()),
                            Pos2::new(rect.right(), rect.bottom()),
                        ],
                        Stroke::new(0.5, line_color),
                    );

                    let label = &table.labels[day][row];
                    if !label.is_empty() {
                        let font_size = (row_height - 3.0).min(13.0);
                        ui.painter().text(
                            rect.center(),
                            Align2::CENTER_CENTER,
                            label,
                            FontId::proportional(font_size),
                            contrast_text_color(bg),
                        );
                    }

                    ui.add_space(COLUMN_SPACING);
                }
            });
        }
    });

    clicked_day
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_width_splits_the_remaining_space() {
        // 748 px left after the time rail and spacing -> 106.857.. per day
        let w = column_width(810.0);
        assert!((w - (810.0 - 48.0 - 14.0) / 7.0).abs() < f32::EPSILON);
    }

    #[test]
    fn column_width_clamps_in_a_degenerate_viewport() {
        assert_eq!(column_width(50.0), 0.0);
        assert_eq!(column_width(0.0), 0.0);
    }

    #[test]
    fn coarse_grid_gets_taller_rows() {
        assert!(
            slot_row_height(Granularity::ThirtyMinutes)
                > slot_row_height(Granularity::TenMinutes)
        );
    }
}
