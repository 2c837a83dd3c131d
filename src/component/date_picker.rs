//! The `date-picker` element: an input field with a calendar popup.
//!
//! The element keeps a set of attributes the way a DOM element does. Changes
//! to the observed ones ([`ObservedAttribute`]) are forwarded to
//! [`DatePicker::attribute_changed`], so an owner only ever needs
//! [`DatePicker::set_attribute`] and [`DatePicker::remove_attribute`].
//!
//! Clicks are routed back to the element through actions tagged with its id.
//! Whenever the user picks a day, a [`ChangeEvent`] is sent exactly once; the
//! owner reads it with [`DatePicker::parse_change_action`].

pub(crate) mod calendar;
pub(crate) mod format;
pub(crate) mod view;

use std::{collections::BTreeMap, str::FromStr};

use chrono::NaiveDate;
use color_eyre::Result;
use crossterm::event::{MouseButton, MouseEventKind};
use ratatui::{
    Frame,
    layout::{Position, Rect},
};
use serde::Serialize;
use strum::{AsRefStr, Display, EnumIter, EnumString};
use tracing::{debug, info};

use crate::{
    actions::{Action, CompAction},
    app::RootState,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
};

use calendar::{MonthGrid, ViewCursor};
use format::{format_date, parse_date};
use view::{ClickTarget, HitRegions, InputView, View};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, AsRefStr, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub(crate) enum ObservedAttribute {
    Value,
    Min,
    Max,
    Disabled,
    Name,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum Visibility {
    #[default]
    Closed,
    Open,
}

/// Payload of a [`ChangeEvent`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct ChangeDetail {
    pub date: NaiveDate,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub(crate) struct ChangeEvent {
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub bubbles: bool,
    pub detail: ChangeDetail,
}

impl ChangeEvent {
    pub const NAME: &'static str = "change";

    fn new(date: NaiveDate) -> Self {
        Self {
            kind: Self::NAME,
            bubbles: true,
            detail: ChangeDetail { date },
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum DatePickerAction {
    Open,
    Dismiss,
    PrevMonth,
    NextMonth,
    SelectDay(u32),

    /// the event owner should pay attention to
    Change(ChangeEvent),
}

/// State mirrored onto the internal input field.
#[derive(Clone, Debug, Default)]
struct InputState {
    text: String,
    name: Option<String>,
    disabled: bool,
}

#[derive(Clone, Debug)]
pub(crate) struct DatePicker {
    id: u64,
    attributes: BTreeMap<String, String>,

    selected: NaiveDate,
    cursor: ViewCursor,
    visibility: Visibility,
    input: InputState,
    mounted: bool,

    hit_regions: HitRegions,
}

impl DatePicker {
    pub const TAG: &'static str = "date-picker";

    pub fn new(id: u64) -> Self {
        Self::with_today(id, chrono::Local::now().date_naive())
    }

    pub fn with_today(id: u64, today: NaiveDate) -> Self {
        let mut picker = Self {
            id,
            attributes: BTreeMap::new(),
            selected: today,
            cursor: today.into(),
            visibility: Visibility::default(),
            input: InputState::default(),
            mounted: false,
            hit_regions: HitRegions::default(),
        };
        picker.refresh_input();
        picker
    }

    /// Called by the owner once the element is placed on a page.
    pub fn mounted(&mut self) {
        let remount = std::mem::replace(&mut self.mounted, true);
        self.input.name = self
            .get_attribute(ObservedAttribute::Name.as_ref())
            .map(String::from);
        self.input.disabled = self.has_attribute(ObservedAttribute::Disabled.as_ref());
        self.refresh_input();
        info!(
            "{} <{}> #{} with value {}",
            if remount { "Re-mounted" } else { "Mounted" },
            Self::TAG,
            self.id,
            self.value()
        );
    }

    pub fn attribute_changed(
        &mut self,
        attribute: ObservedAttribute,
        old: Option<&str>,
        new: Option<&str>,
    ) {
        debug!(
            "<{}> #{} attribute {} changed: {:?} -> {:?}",
            Self::TAG,
            self.id,
            attribute,
            old,
            new
        );
        match attribute {
            ObservedAttribute::Value => match new.and_then(parse_date) {
                Some(date) => {
                    self.selected = date;
                    self.cursor = date.into();
                    self.refresh_input();
                }
                None => debug!("Ignoring invalid date value {:?}", new),
            },
            ObservedAttribute::Disabled => self.input.disabled = new.is_some(),
            ObservedAttribute::Name => self.input.name = new.map(String::from),
            // observed, not enforced
            ObservedAttribute::Min | ObservedAttribute::Max => {}
        }
    }

    pub fn set_attribute<T: Into<String>>(&mut self, name: &str, value: T) {
        let value = value.into();
        let old = self.attributes.insert(name.to_string(), value.clone());
        if let Ok(attribute) = ObservedAttribute::from_str(name) {
            self.attribute_changed(attribute, old.as_deref(), Some(&value));
        }
    }

    pub fn remove_attribute(&mut self, name: &str) {
        let Some(old) = self.attributes.remove(name) else {
            return;
        };
        if let Ok(attribute) = ObservedAttribute::from_str(name) {
            self.attribute_changed(attribute, Some(&old), None);
        }
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn has_attribute(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// The selected date as `YYYY-MM-DD`.
    pub fn value(&self) -> String {
        format_date(self.selected)
    }

    /// Set the `value` attribute. Strings that are not a valid date are ignored.
    pub fn set_value(&mut self, value: &str) {
        self.set_attribute(ObservedAttribute::Value.as_ref(), value);
    }

    pub fn enable(&mut self) {
        self.remove_attribute(ObservedAttribute::Disabled.as_ref());
    }

    pub fn disable(&mut self) {
        self.set_attribute(ObservedAttribute::Disabled.as_ref(), "");
    }

    pub fn is_disabled(&self) -> bool {
        self.input.disabled
    }

    pub fn is_open(&self) -> bool {
        self.visibility == Visibility::Open
    }

    fn refresh_input(&mut self) {
        self.input.text = self.value();
    }

    /// Describe what the element currently looks like.
    pub fn view(&self) -> View {
        View {
            input: InputView {
                text: self.input.text.clone(),
                name: self.input.name.clone(),
                disabled: self.input.disabled,
                open: self.is_open(),
            },
            popup: self
                .is_open()
                .then(|| MonthGrid::new(self.cursor, self.selected)),
        }
    }

    pub fn parse_change_action(&self, action: &Action) -> Option<ChangeEvent> {
        match self.unwrap_action(action)? {
            DatePickerAction::Change(event) => Some(event),
            _ => None,
        }
    }

    fn get_action(&self, action: DatePickerAction) -> Action {
        Action::Comp((CompAction::DatePicker(action), self.id))
    }

    fn unwrap_action(&self, action: &Action) -> Option<DatePickerAction> {
        let Action::Comp((CompAction::DatePicker(action), id)) = action else {
            return None;
        };
        (*id == self.id).then(|| action.clone())
    }

    pub fn get_help_msg(&self) -> HelpMsg {
        let mut msg = HelpMsg::default();
        if self.is_open() {
            msg.push(HelpEntry::new_plain("click < / >", "change month"));
            msg.push(HelpEntry::new_plain("click a day", "pick date"));
            msg.push(HelpEntry::new_plain("click outside", "close calendar"));
        } else if !self.is_disabled() {
            msg.push(HelpEntry::new_plain("click input", "open calendar"));
        }
        msg
    }
}

impl super::Component for DatePicker {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn handle_events(&self, event: &Event, app: &RootState) -> Result<()> {
        let Event::Mouse(mouse) = event else {
            return Ok(());
        };
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(());
        }

        let target = self
            .hit_regions
            .hit_test(Position::new(mouse.column, mouse.row));
        let action = match target {
            ClickTarget::Input => Some(DatePickerAction::Open),
            ClickTarget::PrevMonth => Some(DatePickerAction::PrevMonth),
            ClickTarget::NextMonth => Some(DatePickerAction::NextMonth),
            ClickTarget::Day(day) => Some(DatePickerAction::SelectDay(day)),
            ClickTarget::DisabledInput | ClickTarget::Popup => None,
            ClickTarget::Outside => self.is_open().then_some(DatePickerAction::Dismiss),
        };
        if let Some(action) = action {
            app.send_action(self.get_action(action));
        }
        Ok(())
    }

    fn update(&mut self, action: &Action, app: &RootState) -> Result<()> {
        let Some(action) = self.unwrap_action(action) else {
            return Ok(());
        };

        match action {
            DatePickerAction::Open => {
                self.visibility = Visibility::Open;
            }
            DatePickerAction::Dismiss => {
                debug!("Click outside of <{}> #{}, closing popup", Self::TAG, self.id);
                self.visibility = Visibility::Closed;
            }
            DatePickerAction::PrevMonth => {
                self.cursor = self.cursor.prev_month();
            }
            DatePickerAction::NextMonth => {
                self.cursor = self.cursor.next_month();
            }
            DatePickerAction::SelectDay(day) => {
                let Some(date) = self.cursor.date_of(day) else {
                    debug!("Day {} does not exist in {}", day, self.cursor.title());
                    return Ok(());
                };
                self.selected = date;
                self.cursor = date.into();
                self.refresh_input();
                app.send_action(self.get_action(DatePickerAction::Change(ChangeEvent::new(date))));
                self.visibility = Visibility::Closed;
            }
            DatePickerAction::Change(_) => {}
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame, area: &Rect, _app: &RootState) {
        self.hit_regions = view::paint(&self.view(), frame, *area);
    }
}

#[cfg(test)]
impl DatePicker {
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn selected(&self) -> NaiveDate {
        self.selected
    }

    pub fn input_name(&self) -> Option<&str> {
        self.input.name.as_deref()
    }

    pub fn cursor(&self) -> ViewCursor {
        self.cursor
    }

    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.hit_regions.area_of(target)
    }
}

#[cfg(test)]
pub mod test {
    use ratatui::{Terminal, backend::TestBackend, style::Modifier};

    use crate::{
        component::Component,
        page::Page,
        utils::key_events::test_utils::{get_char_evt, get_click_evt},
    };

    use super::*;

    /// Minimal owner of a date picker, recording every change event.
    struct TestPickerPage {
        picker: DatePicker,
        changes: Vec<ChangeEvent>,
    }

    impl Page for TestPickerPage {
        fn render(&mut self, frame: &mut Frame, app: &RootState) {
            let area = frame.area();
            self.picker.draw(frame, &area, app);
        }

        fn handle_events(&self, app: &RootState, event: Event) -> Result<()> {
            self.picker.handle_events(&event, app)
        }

        fn update(&mut self, app: &RootState, action: Action) -> Result<()> {
            if let Some(event) = self.picker.parse_change_action(&action) {
                self.changes.push(event);
            }
            self.picker.update(&action, app)
        }

        fn get_name(&self) -> String {
            "Test Picker Page".into()
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn get_test_page() -> (TestPickerPage, RootState, Terminal<TestBackend>) {
        let app = RootState::new(None);
        let mut page = TestPickerPage {
            picker: DatePicker::with_today(1, date(2024, 3, 15)),
            changes: vec![],
        };
        page.picker.mounted();
        let terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        (page, app, terminal)
    }

    fn redraw(page: &mut TestPickerPage, app: &RootState, terminal: &mut Terminal<TestBackend>) {
        terminal.draw(|f| page.render(f, app)).unwrap();
    }

    fn click(
        page: &mut TestPickerPage,
        app: &mut RootState,
        terminal: &mut Terminal<TestBackend>,
        target: ClickTarget,
    ) {
        redraw(page, app, terminal);
        let area = page.picker.area_of(target).unwrap();
        app.handle_event_and_update(page, get_click_evt(area.x, area.y));
        redraw(page, app, terminal);
    }

    fn screen_lines(terminal: &Terminal<TestBackend>) -> Vec<String> {
        let buffer = terminal.backend().buffer();
        (0..buffer.area.height)
            .map(|y| {
                (0..buffer.area.width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    #[test]
    fn test_defaults_to_today() {
        let picker = DatePicker::with_today(7, date(2025, 1, 9));
        assert_eq!(picker.value(), "2025-01-09");
        assert_eq!(picker.cursor(), ViewCursor::new(2025, 0));
        assert!(!picker.is_open());
        assert!(!picker.is_disabled());
        assert!(!picker.is_mounted());
    }

    #[test]
    fn test_value_round_trip() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        for value in ["2024-03-15", "1999-12-31", "2024-02-29"] {
            picker.set_value(value);
            assert_eq!(picker.value(), value);
        }
    }

    #[test]
    fn test_invalid_value_ignored() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_value("2024-03-15");
        for value in ["", "tomorrow", "2024-03-xx", "2024/03/20", "2024-03"] {
            picker.set_value(value);
            assert_eq!(picker.value(), "2024-03-15");
            assert_eq!(picker.cursor(), ViewCursor::new(2024, 2));
        }
        // the attribute itself still holds what was written
        assert_eq!(picker.get_attribute("value"), Some("2024-03"));
    }

    #[test]
    fn test_value_rolls_over() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_value("2024-03-15");
        picker.set_value("2024-02-30");
        assert_eq!(picker.value(), "2024-03-01");
        assert_eq!(picker.cursor(), ViewCursor::new(2024, 2));

        picker.set_value("2024-12-32");
        assert_eq!(picker.value(), "2025-01-01");

        picker.set_value("2024-03-15-01");
        assert_eq!(picker.value(), "2024-03-15");
    }

    #[test]
    fn test_value_attribute_moves_cursor() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_attribute("value", "2023-11-02");
        assert_eq!(picker.selected(), date(2023, 11, 2));
        assert_eq!(picker.cursor(), ViewCursor::new(2023, 10));
        assert_eq!(picker.view().input.text, "2023-11-02");
    }

    #[test]
    fn test_name_forwarded() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_attribute("name", "birthday");
        assert_eq!(picker.input_name(), Some("birthday"));
        picker.remove_attribute("name");
        assert_eq!(picker.input_name(), None);
    }

    #[test]
    fn test_attributes_before_mount() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_attribute("name", "start");
        picker.set_attribute("disabled", "");
        picker.set_attribute("min", "2024-01-01");
        picker.set_attribute("data-extra", "x");
        picker.mounted();
        assert!(picker.is_mounted());
        assert_eq!(picker.input_name(), Some("start"));
        assert!(picker.is_disabled());
        assert_eq!(
            picker.attributes().collect::<Vec<_>>(),
            vec![
                ("data-extra", "x"),
                ("disabled", ""),
                ("min", "2024-01-01"),
                ("name", "start"),
            ]
        );
    }

    #[test]
    fn test_observed_attribute_names() {
        use strum::IntoEnumIterator;

        let names: Vec<String> = ObservedAttribute::iter().map(|a| a.to_string()).collect();
        assert_eq!(names, ["value", "min", "max", "disabled", "name"]);
        assert_eq!(
            ObservedAttribute::from_str("disabled").unwrap(),
            ObservedAttribute::Disabled
        );
        assert!(ObservedAttribute::from_str("data-extra").is_err());
    }

    #[test]
    fn test_min_max_not_enforced() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        picker.set_attribute("min", "2024-03-01");
        picker.set_attribute("max", "2024-03-31");
        picker.set_value("2025-07-04");
        assert_eq!(picker.value(), "2025-07-04");
    }

    #[test]
    fn test_pick_day_scenario() {
        let (mut page, mut app, mut terminal) = get_test_page();
        page.picker.set_attribute("value", "2024-03-15");
        assert_eq!(page.picker.value(), "2024-03-15");

        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        assert!(page.picker.is_open());

        click(&mut page, &mut app, &mut terminal, ClickTarget::Day(20));
        assert_eq!(page.changes.len(), 1);
        assert_eq!(page.changes[0].detail.date, date(2024, 3, 20));
        assert_eq!(page.changes[0].kind, "change");
        assert!(page.changes[0].bubbles);
        assert!(!page.picker.is_open());
        assert_eq!(page.picker.value(), "2024-03-20");
        assert!(screen_lines(&terminal)[1].contains("2024-03-20"));
    }

    #[test]
    fn test_pick_day_after_navigation() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        click(&mut page, &mut app, &mut terminal, ClickTarget::NextMonth);
        click(&mut page, &mut app, &mut terminal, ClickTarget::NextMonth);
        assert!(page.picker.is_open());
        assert_eq!(page.picker.cursor(), ViewCursor::new(2024, 4));
        assert!(screen_lines(&terminal).iter().any(|l| l.contains("May 2024")));

        click(&mut page, &mut app, &mut terminal, ClickTarget::PrevMonth);
        assert_eq!(page.picker.cursor(), ViewCursor::new(2024, 3));

        click(&mut page, &mut app, &mut terminal, ClickTarget::Day(1));
        assert_eq!(page.picker.value(), "2024-04-01");
        assert_eq!(page.changes.len(), 1);
    }

    #[test]
    fn test_navigation_keeps_selection() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        click(&mut page, &mut app, &mut terminal, ClickTarget::PrevMonth);
        assert_eq!(page.picker.value(), "2024-03-15");
        assert!(page.changes.is_empty());
    }

    #[test]
    fn test_click_outside_closes() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        click(&mut page, &mut app, &mut terminal, ClickTarget::NextMonth);
        assert!(page.picker.is_open());

        app.handle_event_and_update(&mut page, get_click_evt(39, 15));
        assert!(!page.picker.is_open());
        assert_eq!(page.picker.value(), "2024-03-15");
        assert!(page.changes.is_empty());
    }

    #[test]
    fn test_click_inside_popup_is_noop() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        // the weekday row sits right below the month title
        let popup = page.picker.area_of(ClickTarget::Popup).unwrap();
        app.handle_event_and_update(&mut page, get_click_evt(popup.x + 3, popup.y + 2));
        assert!(page.picker.is_open());
        assert!(page.changes.is_empty());
    }

    #[test]
    fn test_click_input_while_open_stays_open() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        assert!(page.picker.is_open());
    }

    #[test]
    fn test_outside_click_while_closed() {
        let (mut page, mut app, mut terminal) = get_test_page();
        redraw(&mut page, &app, &mut terminal);
        app.handle_event_and_update(&mut page, get_click_evt(39, 15));
        assert!(!page.picker.is_open());
    }

    #[test]
    fn test_keys_ignored() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        app.handle_event_and_update(&mut page, get_char_evt('l'));
        assert!(page.picker.is_open());
        assert_eq!(page.picker.cursor(), ViewCursor::new(2024, 2));
    }

    #[test]
    fn test_disabled() {
        let (mut page, mut app, mut terminal) = get_test_page();
        page.picker.disable();
        assert!(page.picker.is_disabled());
        assert!(page.picker.has_attribute("disabled"));

        redraw(&mut page, &app, &mut terminal);
        assert_eq!(page.picker.area_of(ClickTarget::Input), None);
        assert!(page.picker.area_of(ClickTarget::DisabledInput).is_some());
        app.handle_event_and_update(&mut page, get_click_evt(1, 1));
        assert!(!page.picker.is_open());
        assert!(screen_lines(&terminal)[0].contains("(disabled)"));

        page.picker.enable();
        assert!(!page.picker.is_disabled());
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        assert!(page.picker.is_open());
    }

    #[test]
    fn test_disable_while_open() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        page.picker.disable();
        assert!(page.picker.is_disabled());
        assert!(page.picker.is_open());

        click(&mut page, &mut app, &mut terminal, ClickTarget::Day(3));
        assert_eq!(page.picker.value(), "2024-03-03");
        page.picker.enable();
        assert!(!page.picker.is_disabled());
    }

    #[test]
    fn test_click_disabled_input_while_open() {
        let (mut page, mut app, mut terminal) = get_test_page();
        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        click(&mut page, &mut app, &mut terminal, ClickTarget::NextMonth);
        page.picker.disable();

        click(&mut page, &mut app, &mut terminal, ClickTarget::DisabledInput);
        assert!(page.picker.is_open());
        assert_eq!(page.picker.cursor(), ViewCursor::new(2024, 3));
        assert!(page.changes.is_empty());

        app.handle_event_and_update(&mut page, get_click_evt(1, 1));
        assert!(page.picker.is_open());

        // outside clicks still dismiss while disabled
        app.handle_event_and_update(&mut page, get_click_evt(39, 15));
        assert!(!page.picker.is_open());
    }

    #[test]
    fn test_render_popup() {
        let (mut page, mut app, mut terminal) = get_test_page();
        redraw(&mut page, &app, &mut terminal);
        let lines = screen_lines(&terminal);
        assert!(lines[1].contains("2024-03-15"));
        assert!(!lines.iter().any(|l| l.contains("March 2024")));

        click(&mut page, &mut app, &mut terminal, ClickTarget::Input);
        let lines = screen_lines(&terminal);
        assert!(lines[4].contains("<"));
        assert!(lines[4].contains("March 2024"));
        assert!(lines[4].contains(">"));
        assert!(lines[5].contains("Su Mo Tu We Th Fr Sa"));
        assert!(lines[6].trim_end().ends_with("1  2│"));
        assert!(lines[11].contains("31"));

        let day = page.picker.area_of(ClickTarget::Day(15)).unwrap();
        let buffer = terminal.backend().buffer();
        assert!(buffer[(day.x, day.y)].modifier.contains(Modifier::REVERSED));
        let other = page.picker.area_of(ClickTarget::Day(16)).unwrap();
        assert!(!buffer[(other.x, other.y)].modifier.contains(Modifier::REVERSED));
    }

    #[test]
    fn test_change_detail_json() {
        let event = ChangeEvent::new(date(2024, 3, 20));
        assert_eq!(
            serde_json::to_string(&event.detail).unwrap(),
            r#"{"date":"2024-03-20"}"#
        );
    }

    #[test]
    fn test_actions_for_other_ids_ignored() {
        let (mut page, app, _) = get_test_page();
        let other = DatePicker::with_today(2, date(2024, 3, 15));
        let action = other.get_action(DatePickerAction::Open);
        page.picker.update(&action, &app).unwrap();
        assert!(!page.picker.is_open());
        assert!(page.picker.parse_change_action(&action).is_none());
    }

    #[test]
    fn test_help_msg() {
        let mut picker = DatePicker::with_today(1, date(2024, 1, 1));
        assert_eq!(String::from(picker.get_help_msg()), "open calendar: click input");
        picker.visibility = Visibility::Open;
        assert_eq!(
            String::from(picker.get_help_msg()),
            "change month: click < / > | pick date: click a day | close calendar: click outside"
        );
        picker.visibility = Visibility::Closed;
        picker.disable();
        assert_eq!(String::from(picker.get_help_msg()), "");
    }
}
