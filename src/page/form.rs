use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    text::Line,
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};
use tracing::info;

use crate::{
    actions::Action,
    app::RootState,
    component::{
        Component,
        date_picker::{DatePicker, ObservedAttribute},
        input::{TextInput, TextInputMode},
    },
    config::PickerConfig,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
};

use super::Page;

const PICKER_WIDTH: u16 = 32;

/// A form hosting one `date-picker` element.
///
/// The form owns the element the way a document owns its nodes: it writes
/// attributes, calls the public methods, and listens for change events.
pub(crate) struct Form {
    picker: DatePicker,
    value_input: TextInput,

    change_log: Vec<String>,
}

#[derive(Clone, Debug)]
pub(crate) enum FormAction {
    ToggleDisabled,
}

impl From<FormAction> for Action {
    fn from(value: FormAction) -> Self {
        Action::Form(value)
    }
}

impl Form {
    pub fn new(config: &PickerConfig) -> Self {
        Self::with_picker(DatePicker::new(rand::random::<u64>()), config)
    }

    /// Host `picker`, writing the configured attributes onto it.
    pub fn with_picker(mut picker: DatePicker, config: &PickerConfig) -> Self {
        let input_id = loop {
            let id = rand::random::<u64>();
            if id != picker.get_id() {
                break id;
            }
        };

        let attributes = [
            (ObservedAttribute::Value, config.value.as_deref()),
            (ObservedAttribute::Min, config.min.as_deref()),
            (ObservedAttribute::Max, config.max.as_deref()),
            (ObservedAttribute::Name, config.name.as_deref()),
            (ObservedAttribute::Disabled, config.disabled.then_some("")),
        ];
        for (attribute, value) in attributes {
            if let Some(value) = value {
                picker.set_attribute(attribute.as_ref(), value);
            }
        }

        Self {
            picker,
            value_input: TextInput::new(input_id, "value attribute (YYYY-MM-DD)"),
            change_log: vec![],
        }
    }

    fn describe_element(&self) -> String {
        let attributes = self
            .picker
            .attributes()
            .map(|(name, value)| {
                if value.is_empty() {
                    name.to_string()
                } else {
                    format!("{name}=\"{value}\"")
                }
            })
            .collect::<Vec<_>>();
        if attributes.is_empty() {
            format!("<{}>", DatePicker::TAG)
        } else {
            format!("<{} {}>", DatePicker::TAG, attributes.join(" "))
        }
    }

    fn help_msg(&self, app: &RootState) -> HelpMsg {
        let mut msg = self.value_input.get_help_msg(app.input_mode());
        if !app.input_mode() {
            msg.extend(&self.picker.get_help_msg());
            msg.push(HelpEntry::new(
                'd',
                if self.picker.is_disabled() {
                    "enable"
                } else {
                    "disable"
                },
            ));
            msg.push(HelpEntry::new('q', "quit"));
        }
        msg
    }

    fn render_log(&self, frame: &mut Frame, area: Rect) {
        let items = self
            .change_log
            .iter()
            .rev()
            .map(|entry| ListItem::new(entry.as_str()))
            .collect::<Vec<_>>();
        let list = List::new(items).block(
            Block::default()
                .title("change events")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        );
        frame.render_widget(list, area);
    }
}

impl Page for Form {
    fn render(&mut self, frame: &mut Frame, app: &RootState) {
        let outer = Block::default()
            .title(Line::from("date-picker").alignment(Alignment::Center))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded);
        let inner = outer.inner(frame.area());
        frame.render_widget(outer, frame.area());

        let [picker_area, input_area, element_area, log_area, help_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(3),
        ])
        .horizontal_margin(1)
        .areas(inner);

        self.value_input.draw(frame, &input_area, app);
        frame.render_widget(
            Paragraph::new(self.describe_element()).style(Style::default().fg(Color::Gray)),
            element_area,
        );
        self.render_log(frame, log_area);
        self.help_msg(app).render(frame, help_area);

        // drawn last, the calendar popup overlays everything below the input
        let picker_area = Rect {
            width: picker_area.width.min(PICKER_WIDTH),
            ..picker_area
        };
        self.picker.draw(frame, &picker_area, app);
    }

    fn handle_events(&self, app: &RootState, event: Event) -> Result<()> {
        if let Event::Key(key) = &event {
            if !app.input_mode() && key.code == KeyCode::Char('d') {
                app.send_action(FormAction::ToggleDisabled);
            }
        }
        self.value_input.handle_events(&event, app)?;
        self.picker.handle_events(&event, app)?;
        Ok(())
    }

    fn update(&mut self, app: &RootState, action: Action) -> Result<()> {
        if let Action::Form(FormAction::ToggleDisabled) = &action {
            if self.picker.is_disabled() {
                self.picker.enable();
            } else {
                self.picker.disable();
            }
        }

        if let Some(text) = self.value_input.parse_submit_action(&action) {
            self.picker
                .set_attribute(ObservedAttribute::Value.as_ref(), text.trim());
        }

        if let Some(event) = self.picker.parse_change_action(&action) {
            let detail = serde_json::to_string(&event.detail)?;
            info!("{} event dispatched with detail {}", event.kind, detail);
            self.change_log.push(format!("{} {}", event.kind, detail));
        }

        self.value_input.update(&action, app)?;
        self.picker.update(&action, app)?;
        Ok(())
    }

    fn get_name(&self) -> String {
        "Form".to_string()
    }

    fn init(&mut self, app: &RootState) {
        self.picker.mounted();
        app.send_action(
            self.value_input
                .get_switch_mode_action(TextInputMode::Focused),
        );
    }
}
