use std::time::Instant;

use chrono::{Local, NaiveDate, Timelike};
use egui::{Rect, ScrollArea};
use folio::tooltip::{Pos, Size, MARGIN};
use folio::visibility::VisibilityWatcher;
use folio::{
    Action, AppState, Args, Catalog, DataPath, Effect, FileStore, FolioOptions, Localization,
    MemoryStore, PreferenceStore, Route, Section, SettingsHandler,
};
use tracing::{debug, info};

use crate::setup::setup_cc;
use crate::theme;
use crate::ui::{
    to_bounds, to_size, DayTooltip, FolioState, HeaderBar, PersonalPage, PortfolioPage,
};

const PAGE_WIDTH: f32 = 860.0;

/// What the pointer was over at the end of the last frame, as far as the
/// day tooltip is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PointerOver {
    Nothing,
    Day(NaiveDate),
    Tooltip,
}

pub struct FolioApp {
    state: FolioState,
    options: FolioOptions,
    scroll_to_top: bool,
    jump_to: Option<Section>,
    pointer_over: PointerOver,
}

impl eframe::App for FolioApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.render(ctx);
    }
}

impl FolioApp {
    pub fn new(ctx: &egui::Context, path: &DataPath, args: &Args, catalog: Catalog) -> Self {
        let store: Box<dyn PreferenceStore> = if args.options.contains(FolioOptions::NoPersist) {
            info!("preferences are kept in memory only");
            Box::new(MemoryStore::default())
        } else {
            Box::new(FileStore::new(path))
        };

        let system_theme = ctx.system_theme().map(theme::from_egui_theme);
        let mut settings = SettingsHandler::load(store, system_theme);
        let locale = args
            .locale
            .as_ref()
            .map(|locale| Localization::negotiate(std::slice::from_ref(locale)));
        settings.override_session(locale, args.theme);

        let today = Local::now().date_naive();
        let state =
            AppState::new(settings, catalog, today).with_route(args.route.unwrap_or_default());

        setup_cc(ctx, state.theme());

        Self {
            state,
            options: args.options,
            scroll_to_top: false,
            jump_to: None,
            pointer_over: PointerOver::Nothing,
        }
    }

    pub fn state(&self) -> &FolioState {
        &self.state
    }

    /// Apply one action and carry out what it leaves for the shell.
    pub fn dispatch(&mut self, ctx: &egui::Context, action: Action) {
        for effect in self.state.apply(action) {
            self.handle_effect(ctx, effect);
        }
    }

    fn handle_effect(&mut self, ctx: &egui::Context, effect: Effect) {
        match effect {
            Effect::ScrollToTop => {
                self.scroll_to_top = true;
                ctx.request_repaint();
            }
            Effect::RearmReveal => ctx.request_repaint(),
            Effect::ThemeChanged(theme) => theme::apply(ctx, theme),
            Effect::LanguageChanged(language) => {
                info!("language is now {}", language.native_name());
                ctx.request_repaint();
            }
            Effect::RepaintAfter(delay) => ctx.request_repaint_after(delay),
        }
    }

    /// One frame: lay out, collect actions, then apply them.
    pub fn render(&mut self, ctx: &egui::Context) {
        let now = Instant::now();
        let local = Local::now();
        let mut actions = vec![Action::Tick {
            at: now,
            today: local.date_naive(),
        }];
        let was_armed = self.state.reveal.is_armed();

        egui::TopBottomPanel::top("folio-header").show(ctx, |ui| {
            ui.add_space(4.0);
            let resp = HeaderBar::new(&mut self.state).ui(ui);
            actions.extend(resp.action);
            if resp.jump_to.is_some() {
                self.jump_to = resp.jump_to;
            }
            ui.add_space(4.0);
        });

        let mut hovered_day = None;
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut scroll = ScrollArea::vertical()
                .id_salt("folio-page")
                .auto_shrink([false, false]);
            if std::mem::take(&mut self.scroll_to_top) {
                scroll = scroll.vertical_scroll_offset(0.0);
            }

            scroll.show(ui, |ui| {
                let viewport = ui.clip_rect();
                let margin = ((ui.available_width() - PAGE_WIDTH) / 2.0).max(0.0);
                ui.horizontal(|ui| {
                    ui.add_space(margin);
                    ui.vertical(|ui| {
                        ui.set_max_width(PAGE_WIDTH);
                        let route = self.state.route;
                        match route {
                            Route::Portfolio => {
                                let resp =
                                    PortfolioPage::new(&mut self.state, viewport, local.hour())
                                        .jump_to(self.jump_to.take())
                                        .ui(ui);
                                actions.extend(resp.action);
                                if resp.back_to_top {
                                    self.scroll_to_top = true;
                                    ui.ctx().request_repaint();
                                }
                            }
                            Route::Personal => {
                                let resp = PersonalPage::new(&mut self.state).ui(ui);
                                actions.extend(resp.action);
                                hovered_day = resp.hovered;
                            }
                        }
                    });
                });
            });
        });

        let tooltip_rect = self.tooltip_ui(ctx);
        if let Some(action) = self.pointer_action(ctx, now, tooltip_rect, hovered_day) {
            actions.push(action);
        }

        if self.options.contains(FolioOptions::Debug) {
            self.debug_window(ctx);
        }

        // everything revealable this frame has been observed
        self.state.reveal.end_frame();
        if was_armed {
            ctx.request_repaint();
        }

        let settled = actions.len() == 1;
        for action in actions {
            self.dispatch(ctx, action);
        }
        if !settled {
            ctx.request_repaint();
        }
    }

    /// Draws the day tooltip if one is active. Returns its rectangle once it
    /// has been placed.
    fn tooltip_ui(&mut self, ctx: &egui::Context) -> Option<Rect> {
        if self.state.route != Route::Personal {
            return None;
        }
        let tooltip = DayTooltip::for_hovered(&self.state)?;
        let anchor = self.state.tooltip.anchor_bounds()?;
        let position = self.state.tooltip.position();
        let fallback = Pos {
            x: anchor.left,
            y: anchor.bottom() + MARGIN,
        };

        let rect = tooltip.show(ctx, &mut self.state.i18n, position, fallback);
        let screen = ctx.screen_rect();
        let placed = self
            .state
            .tooltip
            .place(to_size(rect), Size::new(screen.width(), screen.height()));
        if position.is_none() {
            debug!(
                "tooltip measured at {:?}, placed at {:?}",
                rect.size(), placed
            );
            ctx.request_repaint();
        }

        position.map(|_| rect)
    }

    /// Turn pointer movement between calendar days and the tooltip into
    /// hover actions. Only transitions produce an action.
    fn pointer_action(
        &mut self,
        ctx: &egui::Context,
        now: Instant,
        tooltip: Option<Rect>,
        hovered_day: Option<(NaiveDate, Rect)>,
    ) -> Option<Action> {
        let pointer = ctx.pointer_hover_pos();
        let over_tooltip = matches!((pointer, tooltip), (Some(p), Some(r)) if r.contains(p));

        let over = if over_tooltip {
            PointerOver::Tooltip
        } else if let Some((date, _)) = hovered_day {
            PointerOver::Day(date)
        } else {
            PointerOver::Nothing
        };

        if over == self.pointer_over {
            return None;
        }
        self.pointer_over = over;

        Some(match (over, hovered_day) {
            (PointerOver::Day(date), Some((_, rect))) => Action::HoverDay {
                date,
                bounds: to_bounds(rect),
            },
            (PointerOver::Tooltip, _) => Action::EnterTooltip,
            _ => Action::LeaveHover { at: now },
        })
    }

    fn debug_window(&mut self, ctx: &egui::Context) {
        let stats = self.state.i18n.get_cache_stats();
        egui::Window::new("debug").default_open(false).show(ctx, |ui| {
            ui.label(format!("route: {:?}", self.state.route));
            ui.label(format!("active section: {:?}", self.state.active_section.active()));
            ui.label(format!("calendar: {:?}", self.state.calendar.cursor()));
            ui.label(format!("tooltip: {:?}", self.state.tooltip.anchor()));
            ui.label(format!("reveal armed: {}", self.state.reveal.is_armed()));
            ui.label(format!(
                "i18n: {} bundles, {} cached strings",
                stats.bundle_count, stats.string_cache_size
            ));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app(ctx: &egui::Context, extra: &[&str]) -> (FolioApp, tempfile::TempDir) {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = DataPath::new(tmp.path());
        let args: Vec<String> = extra.iter().map(|s| s.to_string()).collect();
        let (args, _) = Args::parse(&args);
        let catalog = Catalog::embedded().expect("catalog");
        (FolioApp::new(ctx, &path, &args, catalog), tmp)
    }

    fn frame(ctx: &egui::Context, app: &mut FolioApp) {
        let _ = ctx.run(egui::RawInput::default(), |ctx| app.render(ctx));
    }

    #[test]
    fn renders_both_pages() {
        let ctx = egui::Context::default();
        let (mut app, _tmp) = test_app(&ctx, &["--no-persist"]);
        frame(&ctx, &mut app);
        assert!(!app.state().reveal.is_armed());

        app.dispatch(&ctx, Action::Navigate(Route::Personal));
        assert!(app.scroll_to_top);
        frame(&ctx, &mut app);
        assert_eq!(app.state().route, Route::Personal);
        assert!(!app.scroll_to_top);
    }

    #[test]
    fn theme_toggle_reaches_egui() {
        let ctx = egui::Context::default();
        let (mut app, _tmp) = test_app(&ctx, &["--light", "--no-persist"]);
        assert_eq!(
            ctx.options(|o| o.theme_preference),
            egui::ThemePreference::Light
        );

        app.dispatch(&ctx, Action::ToggleTheme);
        assert_eq!(
            ctx.options(|o| o.theme_preference),
            egui::ThemePreference::Dark
        );
    }

    #[test]
    fn command_line_overrides_are_not_saved() {
        let ctx = egui::Context::default();
        let (app, tmp) = test_app(&ctx, &["--locale", "ja-JP", "--dark"]);
        assert_eq!(app.state().language(), folio::Language::Ja);
        assert_eq!(app.state().theme(), folio::Theme::Dark);

        let stored = FileStore::new(&DataPath::new(tmp.path())).load();
        assert_eq!(stored, folio::StoredPreferences::default());
    }

    #[test]
    fn active_filter_chip_collapses_the_list() {
        let ctx = egui::Context::default();
        let (mut app, _tmp) = test_app(&ctx, &["--no-persist"]);
        app.dispatch(&ctx, Action::TogglePublications);
        assert!(app.state().publications.is_expanded());

        let current = app.state().publications.filter();
        app.dispatch(&ctx, Action::SetFilter(current));
        assert!(!app.state().publications.is_expanded());
        assert_eq!(app.state().publications.filter(), current);
    }

    #[test]
    fn pointer_transitions_only() {
        let ctx = egui::Context::default();
        let (mut app, _tmp) = test_app(&ctx, &["--no-persist", "--route", "personal"]);
        let now = Instant::now();
        let day = NaiveDate::from_ymd_opt(2026, 2, 20).expect("date");
        let cell = Rect::from_min_size(egui::pos2(100.0, 300.0), egui::vec2(40.0, 40.0));

        let first = app.pointer_action(&ctx, now, None, Some((day, cell)));
        assert!(matches!(first, Some(Action::HoverDay { date, .. }) if date == day));
        assert_eq!(app.pointer_action(&ctx, now, None, Some((day, cell))), None);
        assert!(matches!(
            app.pointer_action(&ctx, now, None, None),
            Some(Action::LeaveHover { .. })
        ));
    }
}
