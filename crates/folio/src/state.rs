//! The single application state object. Every user interaction becomes an
//! [`Action`]; [`AppState::apply`] mutates the state and recomputes all
//! derived views before it returns, handing back the side effects the shell
//! still has to perform.

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use tracing::debug;

use crate::calendar::{CalendarView, YearMonth};
use crate::content::{last_restring, Activity, Catalog, Restring, Sport};
use crate::greeting::Greeting;
use crate::i18n::{Language, Localization};
use crate::persist::{PreferenceStore, SettingsHandler};
use crate::route::{Route, Section};
use crate::tooltip::{Bounds, HoverTooltip};
use crate::views::{ListSection, ListSections, PubFilter, PublicationView, SortOrder};
use crate::visibility::{ActiveSectionWatcher, RevealWatcher};
use crate::Theme;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    ToggleLanguage,
    ToggleTheme,
    SetFilter(PubFilter),
    SetSort(SortOrder),
    TogglePublications,
    ToggleSection(ListSection),
    Navigate(Route),
    PrevMonth,
    NextMonth,
    /// Back to the month containing today
    ShowToday,
    /// Pointer entered a calendar day.
    HoverDay { date: NaiveDate, bounds: Bounds },
    /// Pointer left a calendar day or its tooltip.
    LeaveHover { at: Instant },
    /// Pointer is over the tooltip panel.
    EnterTooltip,
    /// Once per frame: expire the hover grace timer, notice date changes.
    Tick { at: Instant, today: NaiveDate },
}

/// Work left for the shell after an action settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    ScrollToTop,
    /// New revealable elements may exist
    RearmReveal,
    ThemeChanged(Theme),
    LanguageChanged(Language),
    RepaintAfter(Duration),
}

/// Everything the tooltip of one calendar day shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayDetails<'a> {
    pub date: NaiveDate,
    pub activities: &'a [Activity],
    /// Latest restring on or before the day, for days with tennis
    pub restring: Option<&'a Restring>,
}

pub struct AppState<S: PreferenceStore> {
    pub settings: SettingsHandler<S>,
    pub i18n: Localization,
    pub catalog: Catalog,
    pub publications: PublicationView,
    pub sections: ListSections,
    pub calendar: CalendarView,
    pub tooltip: HoverTooltip<NaiveDate>,
    pub route: Route,
    pub reveal: RevealWatcher<String>,
    pub active_section: ActiveSectionWatcher<Section>,
    today: NaiveDate,
}

impl<S: PreferenceStore> AppState<S> {
    pub fn new(settings: SettingsHandler<S>, catalog: Catalog, today: NaiveDate) -> Self {
        let i18n = Localization::new(settings.language());
        let publications = PublicationView::new(catalog.publications.clone());
        let calendar = CalendarView::new(today, &catalog.activities);

        Self {
            settings,
            i18n,
            catalog,
            publications,
            sections: ListSections::default(),
            calendar,
            tooltip: HoverTooltip::default(),
            route: Route::default(),
            reveal: RevealWatcher::default(),
            active_section: ActiveSectionWatcher::default(),
            today,
        }
    }

    pub fn with_route(mut self, route: Route) -> Self {
        self.route = route;
        self
    }

    pub fn language(&self) -> Language {
        self.settings.language()
    }

    pub fn theme(&self) -> Theme {
        self.settings.theme()
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn apply(&mut self, action: Action) -> Vec<Effect> {
        debug!("apply {:?}", action);
        let mut effects = Vec::new();

        match action {
            Action::ToggleLanguage => {
                let language = self.settings.toggle_language();
                self.i18n.set_language(language);
                effects.push(Effect::LanguageChanged(language));
            }
            Action::ToggleTheme => {
                effects.push(Effect::ThemeChanged(self.settings.toggle_theme()));
            }
            Action::SetFilter(filter) => {
                self.publications.set_filter(filter);
                effects.push(Effect::RearmReveal);
            }
            Action::SetSort(order) => {
                self.publications.set_sort(order);
                effects.push(Effect::RearmReveal);
            }
            Action::TogglePublications => {
                self.publications.toggle_expand();
                effects.push(Effect::RearmReveal);
            }
            Action::ToggleSection(section) => {
                self.sections.toggle(section);
                effects.push(Effect::RearmReveal);
            }
            Action::Navigate(route) => {
                if route != self.route {
                    self.route = route;
                    self.tooltip.hide();
                    self.active_section.clear();
                    effects.push(Effect::ScrollToTop);
                    effects.push(Effect::RearmReveal);
                }
            }
            Action::PrevMonth => {
                if self.calendar.prev_month() {
                    self.tooltip.hide();
                }
            }
            Action::NextMonth => {
                if self.calendar.next_month() {
                    self.tooltip.hide();
                }
            }
            Action::ShowToday => {
                let month = YearMonth::of(self.today);
                if self.calendar.cursor() != month {
                    self.calendar.jump_to(month);
                    self.tooltip.hide();
                }
            }
            Action::HoverDay { date, bounds } => {
                let has_content = self.catalog.activities.has(date);
                self.tooltip.show(date, bounds, has_content);
            }
            Action::LeaveHover { at } => {
                self.tooltip.request_hide(at);
                if let Some(left) = self.tooltip.time_until_hide(at) {
                    effects.push(Effect::RepaintAfter(left));
                }
            }
            Action::EnterTooltip => {
                self.tooltip.cancel_hide();
            }
            Action::Tick { at, today } => {
                self.tooltip.tick(at);
                if today != self.today {
                    self.today = today;
                    self.calendar
                        .refresh_ceiling(today, &self.catalog.activities);
                }
                if let Some(left) = self.tooltip.time_until_hide(at) {
                    effects.push(Effect::RepaintAfter(left));
                }
            }
        }

        for effect in &effects {
            if *effect == Effect::RearmReveal {
                self.reveal.rearm();
            }
        }

        effects
    }

    /// Details for the day under the tooltip, if one is shown.
    pub fn hovered_day(&self) -> Option<DayDetails<'_>> {
        let date = *self.tooltip.anchor()?;
        Some(self.day_details(date))
    }

    pub fn day_details(&self, date: NaiveDate) -> DayDetails<'_> {
        let activities = self.catalog.activities.on(date);
        let restring = if activities.iter().any(|a| a.sport == Sport::Tennis) {
            last_restring(&self.catalog.restrings, date)
        } else {
            None
        };

        DayDetails {
            date,
            activities,
            restring,
        }
    }

    pub fn greeting(&mut self, hour: u32) -> String {
        self.i18n.tr(Greeting::for_hour(hour).key())
    }
}
