use chrono::NaiveDate;
use egui::{vec2, Align2, Color32, FontId, Order, Rect, RichText, Sense, Stroke};
use folio::calendar::WEEKDAY_KEYS;
use folio::content::{Activity, Restring, Sport};
use folio::tooltip::{Pos, Size};
use folio::{Action, CalendarCell, FluentArgs, Language, Localization};
use strum::IntoEnumIterator;

use super::FolioState;
use crate::theme;

const CELL_HEIGHT: f32 = 64.0;
const MAX_CELL_WIDTH: f32 = 120.0;
const TOOLTIP_WIDTH: f32 = 280.0;

/// Month header with navigation, weekday row and the day grid.
pub struct CalendarUi<'a> {
    state: &'a mut FolioState,
}

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct CalendarResponse {
    pub action: Option<Action>,
    /// Day with activities under the pointer, and its cell
    pub hovered: Option<(NaiveDate, Rect)>,
}

impl<'a> CalendarUi<'a> {
    pub fn new(state: &'a mut FolioState) -> Self {
        Self { state }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) -> CalendarResponse {
        let mut resp = CalendarResponse::default();

        self.month_header(ui, &mut resp);
        ui.add_space(6.0);

        let cell_width = (ui.available_width() / 7.0).min(MAX_CELL_WIDTH);
        let width = cell_width * 7.0;

        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            for (col, key) in WEEKDAY_KEYS.iter().enumerate() {
                let label = self.state.i18n.tr(key);
                let (rect, _) = ui.allocate_exact_size(vec2(cell_width, 20.0), Sense::hover());
                let color = if col == 0 {
                    Color32::from_rgb(0xC7, 0x37, 0x5A)
                } else {
                    theme::GRAY_SECONDARY
                };
                ui.painter().text(
                    rect.center(),
                    Align2::CENTER_CENTER,
                    label,
                    FontId::proportional(12.0),
                    color,
                );
            }
        });

        let today = self.state.today();
        let cells = self
            .state
            .calendar
            .grid(&self.state.catalog.activities, today);
        let colors = theme::color_theme(self.state.theme());
        let visuals = ui.visuals().clone();

        for week in cells.chunks(7) {
            ui.horizontal(|ui| {
                ui.set_width(width);
                ui.spacing_mut().item_spacing.x = 0.0;
                for cell in week {
                    let (rect, response) =
                        ui.allocate_exact_size(vec2(cell_width, CELL_HEIGHT), Sense::hover());
                    if !ui.is_rect_visible(rect) || cell.is_placeholder() {
                        continue;
                    }
                    paint_cell(ui, rect, cell, &visuals, colors.activity_fill);

                    if let Some(date) = cell.date {
                        if response.hovered() && !cell.activities.is_empty() {
                            resp.hovered = Some((date, rect));
                        }
                    }
                }
            });
            ui.add_space(2.0);
        }

        resp
    }

    fn month_header(&mut self, ui: &mut egui::Ui, resp: &mut CalendarResponse) {
        let cursor = self.state.calendar.cursor();
        let month = self.state.i18n.tr(&cursor.name_key());
        let mut args = FluentArgs::new();
        args.set("month", month);
        args.set("year", cursor.year.to_string());
        let heading = self.state.i18n.tr_args("calendar-heading", &args);

        ui.horizontal(|ui| {
            let can_prev = self.state.calendar.can_go_prev();
            let prev_hint = self.state.i18n.tr("calendar-prev");
            if ui
                .add_enabled(can_prev, egui::Button::new("◀"))
                .on_hover_text(prev_hint)
                .clicked()
            {
                resp.action = Some(Action::PrevMonth);
            }

            ui.label(RichText::new(heading).size(18.0).strong());

            let can_next = self.state.calendar.can_go_next();
            let next_hint = self.state.i18n.tr("calendar-next");
            if ui
                .add_enabled(can_next, egui::Button::new("▶"))
                .on_hover_text(next_hint)
                .clicked()
            {
                resp.action = Some(Action::NextMonth);
            }

            let today = self.state.i18n.tr("calendar-today");
            if ui.button(today).clicked() {
                resp.action = Some(Action::ShowToday);
            }
        });
    }
}

fn paint_cell(
    ui: &egui::Ui,
    rect: Rect,
    cell: &CalendarCell<'_>,
    visuals: &egui::Visuals,
    activity_fill: Color32,
) {
    let rect = rect.shrink(2.0);
    let painter = ui.painter();

    let fill = if cell.activities.is_empty() {
        visuals.extreme_bg_color
    } else {
        activity_fill
    };
    painter.rect_filled(rect, 6.0, fill);
    if cell.is_today {
        painter.rect_stroke(
            rect,
            6.0,
            Stroke::new(2.0, theme::ACCENT),
            egui::StrokeKind::Inside,
        );
    }

    if let Some(day) = cell.day {
        painter.text(
            rect.left_top() + vec2(6.0, 4.0),
            Align2::LEFT_TOP,
            day.to_string(),
            FontId::proportional(13.0),
            visuals.text_color(),
        );
    }

    let emojis: String = cell.activities.iter().map(|a| a.sport.emoji()).collect();
    if !emojis.is_empty() {
        painter.text(
            rect.center_bottom() - vec2(0.0, 6.0),
            Align2::CENTER_BOTTOM,
            emojis,
            FontId::proportional(16.0),
            visuals.text_color(),
        );
    }
}

/// The sport colour key under the grid.
pub fn legend_ui(ui: &mut egui::Ui, i18n: &mut Localization) {
    ui.horizontal_wrapped(|ui| {
        let title = i18n.tr("calendar-legend");
        ui.label(RichText::new(title).strong());
        for sport in Sport::iter() {
            ui.label(format!("{} {}", sport.emoji(), i18n.tr(sport.label_key())));
        }
    });
}

/// Day details floating next to the hovered cell.
pub struct DayTooltip {
    pub date: NaiveDate,
    pub activities: Vec<Activity>,
    pub restring: Option<Restring>,
}

impl DayTooltip {
    pub fn for_hovered(state: &FolioState) -> Option<Self> {
        let details = state.hovered_day()?;
        Some(Self {
            date: details.date,
            activities: details.activities.to_vec(),
            restring: details.restring.cloned(),
        })
    }

    /// Draw the panel. Before the first placement it is laid out
    /// invisibly at `fallback` so it can be measured. Returns the panel
    /// rectangle.
    pub fn show(
        &self,
        ctx: &egui::Context,
        i18n: &mut Localization,
        position: Option<Pos>,
        fallback: Pos,
    ) -> Rect {
        let placed = position.is_some();
        let pos = position.unwrap_or(fallback);

        let area = egui::Area::new(egui::Id::new("folio-day-tooltip"))
            .order(Order::Tooltip)
            .fixed_pos(egui::pos2(pos.x, pos.y))
            .interactable(true)
            .show(ctx, |ui| {
                if !placed {
                    ui.set_invisible();
                }
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.set_max_width(TOOLTIP_WIDTH);
                    self.contents(ui, i18n);
                });
            });

        area.response.rect
    }

    fn contents(&self, ui: &mut egui::Ui, i18n: &mut Localization) {
        let language = i18n.language();
        ui.label(RichText::new(self.date.format("%Y-%m-%d").to_string()).strong());

        for activity in &self.activities {
            ui.separator();
            let sport = i18n.tr(activity.sport.label_key());
            ui.label(RichText::new(format!("{} {}", activity.sport.emoji(), sport)).strong());
            for (key, text) in activity.notes() {
                let text = text.resolve(language);
                if text.is_empty() {
                    continue;
                }
                ui.horizontal_wrapped(|ui| {
                    ui.label(RichText::new(i18n.tr(key)).color(theme::GRAY_SECONDARY));
                    ui.label(text);
                });
            }
        }

        if let Some(restring) = &self.restring {
            ui.separator();
            restring_line(ui, i18n, restring, language);
        }
    }
}

fn restring_line(
    ui: &mut egui::Ui,
    i18n: &mut Localization,
    restring: &Restring,
    language: Language,
) {
    let racket = i18n
        .try_tr(&restring.racket_key())
        .unwrap_or_else(|| restring.racket.clone());
    let date = match language {
        Language::En => restring.date.format("%b %-d, %Y").to_string(),
        Language::Ja => restring.date.format("%Y年%-m月%-d日").to_string(),
    };
    ui.horizontal_wrapped(|ui| {
        ui.label(RichText::new(i18n.tr("tooltip-restring")).color(theme::GRAY_SECONDARY));
        ui.label(format!("{racket} · {date} · {}", restring.tension));
    });
}

pub fn to_size(rect: Rect) -> Size {
    Size::new(rect.width(), rect.height())
}
