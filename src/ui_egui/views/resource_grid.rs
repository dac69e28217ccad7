//! Resource × day grid.
//!
//! Rows are resources, columns are the days of the visible month. Every
//! frame the grid reads events from the [`Scheduler`], paints them at their
//! span, and forwards pointer input back as scheduler commands:
//! double-click on a cell adds an event, dragging an event's body moves it
//! to another cell, dragging one of its edges resizes it. Clicking a day
//! header selects that date.

use chrono::{Datelike, Local, NaiveDate, Weekday};
use egui::{Align2, Color32, CursorIcon, FontId, Pos2, Rect, Sense, Stroke, Vec2};

use crate::interaction::{InteractionState, PointerCursor, ResizeHandle, VisualState};
use crate::models::event::{Event, EventId};
use crate::services::scheduler::Scheduler;
use crate::ui_egui::theme::GridTheme;

pub const LABEL_WIDTH: f32 = 80.0;
pub const ROW_HEIGHT: f32 = 52.0;
pub const HEADER_HEIGHT: f32 = 36.0;
const EVENT_INSET: f32 = 6.0;
const DELETE_SIZE: f32 = 14.0;

/// Requests the grid hands back to the app
#[derive(Debug, Default)]
pub struct GridResponse {
    /// User clicked an event's delete button; needs confirmation
    pub delete_requested: Option<(EventId, String)>,
    /// The requested scroll target was brought into view
    pub scrolled: bool,
    /// User clicked a day header
    pub date_clicked: Option<NaiveDate>,
}

/// Pixel layout of the grid for one frame
struct GridGeometry<'a> {
    origin: Pos2,
    day_width: f32,
    dates: &'a [NaiveDate],
    resource_ids: &'a [String],
}

impl<'a> GridGeometry<'a> {
    fn column_left(&self, col: usize) -> f32 {
        self.origin.x + LABEL_WIDTH + col as f32 * self.day_width
    }

    fn row_top(&self, row: usize) -> f32 {
        self.origin.y + HEADER_HEIGHT + row as f32 * ROW_HEIGHT
    }

    fn cell_rect(&self, row: usize, col: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.column_left(col), self.row_top(row)),
            Vec2::new(self.day_width, ROW_HEIGHT),
        )
    }

    fn column_rect(&self, col: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.column_left(col), self.origin.y),
            Vec2::new(
                self.day_width,
                HEADER_HEIGHT + self.resource_ids.len() as f32 * ROW_HEIGHT,
            ),
        )
    }

    fn header_rect(&self, col: usize) -> Rect {
        Rect::from_min_size(
            Pos2::new(self.column_left(col), self.origin.y),
            Vec2::new(self.day_width, HEADER_HEIGHT),
        )
    }

    /// Day whose header is under a screen position
    fn header_date_at(&self, pos: Pos2) -> Option<NaiveDate> {
        let x = pos.x - self.origin.x - LABEL_WIDTH;
        let y = pos.y - self.origin.y;
        if x < 0.0 || !(0.0..HEADER_HEIGHT).contains(&y) {
            return None;
        }
        self.dates.get((x / self.day_width) as usize).copied()
    }

    /// Cell under a screen position
    fn cell_at(&self, pos: Pos2) -> Option<(NaiveDate, &'a str)> {
        let x = pos.x - self.origin.x - LABEL_WIDTH;
        let y = pos.y - self.origin.y - HEADER_HEIGHT;
        if x < 0.0 || y < 0.0 {
            return None;
        }
        let col = (x / self.day_width) as usize;
        let row = (y / ROW_HEIGHT) as usize;
        let date = self.dates.get(col)?;
        let resource = self.resource_ids.get(row)?;
        Some((*date, resource.as_str()))
    }

    /// Where an event with the given span is drawn, if its start cell is
    /// visible.
    fn event_rect(&self, event: &Event, offset_px: f32, width_px: f32) -> Option<Rect> {
        let row = self
            .resource_ids
            .iter()
            .position(|id| *id == event.resource_id)?;
        let start_date = event.start.date_naive();
        let col = self.dates.iter().position(|d| *d == start_date)?;

        Some(Rect::from_min_size(
            Pos2::new(
                self.column_left(col) + offset_px,
                self.row_top(row) + EVENT_INSET,
            ),
            Vec2::new(width_px, ROW_HEIGHT - 2.0 * EVENT_INSET),
        ))
    }
}

/// One event prepared for painting
struct PlacedEvent {
    id: EventId,
    event: Event,
    rect: Rect,
    visual: VisualState,
    state: InteractionState,
    is_new: bool,
}

pub fn render_resource_grid(
    ui: &mut egui::Ui,
    scheduler: &mut Scheduler,
    dates: &[NaiveDate],
    theme: &GridTheme,
    scroll_to: Option<NaiveDate>,
) -> GridResponse {
    let mut result = GridResponse::default();

    let resource_ids: Vec<String> = scheduler.resources().iter().map(|r| r.id.clone()).collect();
    let resource_names: Vec<String> = scheduler
        .resources()
        .iter()
        .map(|r| r.name.clone())
        .collect();
    let day_width = scheduler.mapper().day_width();

    let desired_size = Vec2::new(
        LABEL_WIDTH + dates.len() as f32 * day_width,
        HEADER_HEIGHT + resource_ids.len() as f32 * ROW_HEIGHT,
    );
    let (response, painter) = ui.allocate_painter(desired_size, Sense::hover());

    let geometry = GridGeometry {
        origin: response.rect.min,
        day_width,
        dates,
        resource_ids: &resource_ids,
    };

    let today = Local::now().date_naive();
    let selected = scheduler.selected_date();

    // Background, day header and resource labels
    painter.rect_filled(response.rect, 0.0, theme.grid_background);
    painter.rect_filled(
        Rect::from_min_size(response.rect.min, Vec2::new(desired_size.x, HEADER_HEIGHT)),
        0.0,
        theme.header_background,
    );

    for (col, date) in dates.iter().enumerate() {
        let column = geometry.column_rect(col);
        let body = Rect::from_min_max(
            Pos2::new(column.left(), column.top() + HEADER_HEIGHT),
            column.max,
        );

        if *date == today {
            painter.rect_filled(body, 0.0, theme.today_background);
        } else if matches!(date.weekday(), Weekday::Sat | Weekday::Sun) {
            painter.rect_filled(body, 0.0, theme.weekend_background);
        }

        painter.line_segment(
            [column.left_top(), column.left_bottom()],
            Stroke::new(1.0, theme.grid_line),
        );

        painter.text(
            Pos2::new(column.center().x, column.top() + 4.0),
            Align2::CENTER_TOP,
            date.format("%a").to_string(),
            FontId::proportional(10.0),
            theme.text_secondary,
        );
        painter.text(
            Pos2::new(column.center().x, column.top() + HEADER_HEIGHT - 4.0),
            Align2::CENTER_BOTTOM,
            date.day().to_string(),
            FontId::proportional(14.0),
            theme.text_primary,
        );

        if Some(*date) == selected {
            painter.rect_stroke(column, 0.0, Stroke::new(2.0, theme.selected_border));
        }

        let header = ui.interact(
            geometry.header_rect(col),
            ui.id().with(("day_header", col)),
            Sense::click(),
        );
        if header.hovered() {
            ui.ctx().set_cursor_icon(CursorIcon::PointingHand);
        }
        if header.clicked() {
            let clicked = header
                .interact_pointer_pos()
                .and_then(|pos| geometry.header_date_at(pos))
                .unwrap_or(*date);
            log::debug!("Day header clicked: {}", clicked);
            result.date_clicked = Some(clicked);
        }

        if Some(*date) == scroll_to {
            ui.scroll_to_rect(column, Some(egui::Align::Center));
            result.scrolled = true;
        }
    }

    for (row, name) in resource_names.iter().enumerate() {
        let top = geometry.row_top(row);
        painter.line_segment(
            [
                Pos2::new(response.rect.left(), top),
                Pos2::new(response.rect.right(), top),
            ],
            Stroke::new(1.0, theme.grid_line),
        );
        painter.text(
            Pos2::new(response.rect.left() + 8.0, top + ROW_HEIGHT / 2.0),
            Align2::LEFT_CENTER,
            name,
            FontId::proportional(14.0),
            theme.text_primary,
        );
    }

    // Cells: double-click creates an event
    for (row, resource_id) in resource_ids.iter().enumerate() {
        for (col, date) in dates.iter().enumerate() {
            let cell_id = ui.id().with(("cell", row, col));
            let cell = ui.interact(geometry.cell_rect(row, col), cell_id, Sense::click());
            if cell.double_clicked() {
                scheduler.add_event(resource_id, *date);
            }
        }
    }

    let mut placed = place_events(scheduler, &geometry);
    // Elevated events paint (and hit-test) on top
    placed.sort_by_key(|p| p.visual.elevated);

    for item in &placed {
        let widget_id = ui.id().with(("event", item.id));
        let event_response = ui.interact(item.rect, widget_id, Sense::click_and_drag());

        paint_event(ui, item, event_response.hovered(), theme);
        handle_event_gesture(ui, scheduler, &geometry, item, &event_response);

        // Delete button, shown while the pointer is over an idle event
        if item.state == InteractionState::Idle && ui.rect_contains_pointer(item.rect) {
            let delete_rect = Rect::from_min_size(
                Pos2::new(
                    item.rect.right() - DELETE_SIZE - 10.0,
                    item.rect.top() + 2.0,
                ),
                Vec2::splat(DELETE_SIZE),
            );
            let delete = ui.interact(delete_rect, widget_id.with("delete"), Sense::click());
            let color = if delete.hovered() {
                Color32::from_rgb(200, 50, 50)
            } else {
                theme.text_secondary
            };
            ui.painter().text(
                delete_rect.center(),
                Align2::CENTER_CENTER,
                "×",
                FontId::proportional(14.0),
                color,
            );
            if delete.clicked() {
                result.delete_requested = Some((item.id, item.event.title.clone()));
            }
        }
    }

    paint_drag_preview(ui, scheduler, &geometry, theme);

    // The pointer was released somewhere no event widget saw it
    if scheduler.active_gesture().is_some() && !ui.input(|i| i.pointer.any_down()) {
        scheduler.pointer_up();
    }

    result
}

fn place_events(scheduler: &Scheduler, geometry: &GridGeometry<'_>) -> Vec<PlacedEvent> {
    let mapper = *scheduler.mapper();

    scheduler
        .events()
        .iter()
        .filter_map(|event| {
            let id = event.id?;
            let span = scheduler.span_of(id)?;
            let rect =
                geometry.event_rect(event, span.offset_px(&mapper), span.width_px(&mapper))?;
            let state = scheduler.interaction_state(id);
            let visual = VisualState::for_state(state);
            Some(PlacedEvent {
                id,
                event: event.clone(),
                rect: Rect::from_center_size(rect.center(), rect.size() * visual.scale),
                visual,
                state,
                is_new: scheduler.is_new_event(event),
            })
        })
        .collect()
}

fn paint_event(ui: &egui::Ui, item: &PlacedEvent, hovered: bool, theme: &GridTheme) {
    let token = if hovered && item.state == InteractionState::Idle {
        item.event.hover_color.as_deref().or(item.event.color.as_deref())
    } else {
        item.event.color.as_deref()
    };
    let fill = theme.event_color(token).gamma_multiply(item.visual.opacity);
    let painter = ui.painter();

    if item.visual.elevated {
        painter.rect_filled(
            item.rect.translate(Vec2::new(2.0, 3.0)),
            4.0,
            Color32::from_black_alpha(40),
        );
    }

    painter.rect_filled(item.rect, 4.0, fill);

    let border = if item.is_new {
        Stroke::new(2.0, theme.new_event_ring)
    } else {
        Stroke::new(1.0, theme.event_text.gamma_multiply(0.25))
    };
    painter.rect_stroke(item.rect, 4.0, border);

    let text_painter = painter.with_clip_rect(item.rect.shrink(2.0).intersect(ui.clip_rect()));
    let text_color = theme.event_text.gamma_multiply(item.visual.opacity);
    let title_pos = Pos2::new(item.rect.left() + 8.0, item.rect.top() + 4.0);
    let title_font = FontId::proportional(12.0);

    text_painter.text(
        title_pos,
        Align2::LEFT_TOP,
        &item.event.title,
        title_font.clone(),
        text_color,
    );
    if item.is_new {
        // No bold face in the default fonts; overdraw for weight
        text_painter.text(
            title_pos + Vec2::new(0.6, 0.0),
            Align2::LEFT_TOP,
            &item.event.title,
            title_font,
            text_color,
        );
    }

    text_painter.text(
        Pos2::new(item.rect.left() + 8.0, item.rect.bottom() - 4.0),
        Align2::LEFT_BOTTOM,
        format!(
            "{} – {}",
            item.event.start.format("%d %b %H:%M"),
            item.event.end.format("%d %b %H:%M")
        ),
        FontId::proportional(10.0),
        text_color.gamma_multiply(0.8),
    );
}

fn handle_event_gesture(
    ui: &egui::Ui,
    scheduler: &mut Scheduler,
    geometry: &GridGeometry<'_>,
    item: &PlacedEvent,
    response: &egui::Response,
) {
    let pointer = ui.input(|i| i.pointer.latest_pos());

    if response.hovered() && scheduler.active_gesture().is_none() {
        let over_edge = pointer
            .and_then(|pos| ResizeHandle::hit_test(pos.x, item.rect.left(), item.rect.right()))
            .is_some();
        ui.ctx().set_cursor_icon(if over_edge {
            CursorIcon::ResizeHorizontal
        } else {
            CursorIcon::Grab
        });
    }

    if response.drag_started() {
        let origin = ui
            .input(|i| i.pointer.press_origin())
            .or(pointer)
            .unwrap_or(item.rect.center());
        match ResizeHandle::hit_test(origin.x, item.rect.left(), item.rect.right()) {
            Some(handle) => scheduler.begin_resize(item.id, handle, origin.x),
            None => scheduler.begin_drag(item.id, origin.x),
        };
    }

    if response.dragged() {
        if let Some(pos) = pointer {
            scheduler.pointer_move(pos.x);
            if scheduler.interaction_state(item.id) == InteractionState::Dragging {
                if let Some((date, resource_id)) = geometry.cell_at(pos) {
                    scheduler.drag_over(date, resource_id);
                }
            }
        }
    }

    if scheduler.active_gesture() == Some(item.id) {
        let cursor = VisualState::for_state(scheduler.interaction_state(item.id)).cursor;
        ui.ctx().set_cursor_icon(match cursor {
            PointerCursor::Default => CursorIcon::Default,
            PointerCursor::Move => CursorIcon::Move,
            PointerCursor::ResizeHorizontal => CursorIcon::ResizeHorizontal,
        });
    }

    if response.drag_stopped() {
        match scheduler.interaction_state(item.id) {
            InteractionState::Dragging => {
                match pointer.and_then(|pos| geometry.cell_at(pos)) {
                    Some((date, resource_id)) => {
                        scheduler.drop_on(date, resource_id);
                    }
                    None => scheduler.end_drag(),
                }
            }
            InteractionState::Resizing(_) => {
                scheduler.pointer_up();
            }
            InteractionState::Idle => {}
        }
    }
}

/// Outline where the dragged event would land.
fn paint_drag_preview(
    ui: &egui::Ui,
    scheduler: &Scheduler,
    geometry: &GridGeometry<'_>,
    theme: &GridTheme,
) {
    let Some(preview) = scheduler.drag_preview() else {
        return;
    };
    let mapper = *scheduler.mapper();
    let span = crate::geometry::compute_span(preview.start, preview.end);
    let Some(rect) =
        geometry.event_rect(&preview, span.offset_px(&mapper), span.width_px(&mapper))
    else {
        return;
    };

    let painter = ui.painter();
    painter.rect_filled(rect, 4.0, theme.selected_border.gamma_multiply(0.15));
    painter.rect_stroke(rect, 4.0, Stroke::new(1.5, theme.selected_border));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn geometry<'a>(dates: &'a [NaiveDate], resource_ids: &'a [String]) -> GridGeometry<'a> {
        GridGeometry {
            origin: Pos2::new(10.0, 20.0),
            day_width: 100.0,
            dates,
            resource_ids,
        }
    }

    fn january(days: u32) -> Vec<NaiveDate> {
        (1..=days)
            .filter_map(|d| NaiveDate::from_ymd_opt(2025, 1, d))
            .collect()
    }

    #[test]
    fn test_header_click_maps_to_column_date() {
        let dates = january(3);
        let resources = vec!["a".to_string()];
        let grid = geometry(&dates, &resources);

        let x = 10.0 + LABEL_WIDTH + 150.0;
        assert_eq!(grid.header_date_at(Pos2::new(x, 25.0)), Some(dates[1]));
        assert!(grid.header_rect(1).contains(Pos2::new(x, 25.0)));
    }

    #[test]
    fn test_header_ignores_labels_body_and_overflow() {
        let dates = january(3);
        let resources = vec!["a".to_string()];
        let grid = geometry(&dates, &resources);

        // Resource label column
        assert_eq!(grid.header_date_at(Pos2::new(30.0, 25.0)), None);
        // Below the header, inside the first row
        let in_body = Pos2::new(10.0 + LABEL_WIDTH + 50.0, 20.0 + HEADER_HEIGHT + 5.0);
        assert_eq!(grid.header_date_at(in_body), None);
        assert_eq!(grid.cell_at(in_body), Some((dates[0], "a")));
        // Past the last day
        assert_eq!(
            grid.header_date_at(Pos2::new(10.0 + LABEL_WIDTH + 350.0, 25.0)),
            None
        );
    }
}
