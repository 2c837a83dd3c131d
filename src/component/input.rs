use color_eyre::Result;
use crossterm::event::KeyCode;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders, Paragraph},
};
use tui_input::{Input, backend::crossterm::EventHandler};

use crate::{
    actions::{Action, CompAction},
    app::RootState,
    tui::Event,
    utils::help_msg::{HelpEntry, HelpMsg},
    utils::key_events::KeyEvent,
};

#[derive(Clone, Debug)]
/// A single line text field
///
/// Set the focus state: send a [`TextInput::get_switch_mode_action()`] Action
///
/// Get value: parse an action with [`TextInput::parse_submit_action`]
pub(crate) struct TextInput {
    id: u64,
    input: Input,
    mode: TextInputMode,

    title: String,
    control_keys: ControlKeys,
}

#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub(crate) enum TextInputMode {
    #[default]
    Idle,
    Focused,
}

#[derive(Clone, Debug)]
struct ControlKeys {
    enter_keys: Vec<KeyEvent>,
    submit_keys: Vec<KeyEvent>,
    exit_keys: Vec<KeyEvent>,
}

impl Default for ControlKeys {
    fn default() -> Self {
        Self {
            enter_keys: vec![KeyCode::Enter.into()],
            submit_keys: vec![KeyCode::Enter.into()],
            exit_keys: vec![KeyCode::Esc.into()],
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) enum TextInputAction {
    SwitchMode(TextInputMode),
    HandleKey(KeyEvent),
    HandlePaste(String),
    Exit,
    DirectExit,
    SubmitExit(String),

    /// the event owner should pay attention to
    Submit(String),
}

impl TextInput {
    pub fn new<T: Into<String>>(id: u64, title: T) -> Self {
        Self {
            id,
            input: Input::default(),
            mode: TextInputMode::default(),
            title: title.into(),
            control_keys: ControlKeys::default(),
        }
    }

    pub fn get_switch_mode_action(&self, mode: TextInputMode) -> Action {
        self.get_action(TextInputAction::SwitchMode(mode))
    }

    pub fn parse_submit_action(&self, action: &Action) -> Option<String> {
        match self.unwrap_action(action)? {
            TextInputAction::Submit(s) => Some(s),
            _ => None,
        }
    }

    fn get_action(&self, action: TextInputAction) -> Action {
        Action::Comp((CompAction::Input(action), self.id))
    }

    fn unwrap_action(&self, action: &Action) -> Option<TextInputAction> {
        let Action::Comp((CompAction::Input(action), id)) = action else {
            return None;
        };
        (*id == self.id).then(|| action.clone())
    }

    pub fn get_help_msg(&self, inputing: bool) -> HelpMsg {
        let mut msg = HelpMsg::default();
        if self.mode == TextInputMode::Focused {
            if inputing {
                msg.push(HelpEntry::new(
                    self.control_keys.exit_keys[0].clone(),
                    "cancel",
                ));
                msg.push(HelpEntry::new(
                    self.control_keys.submit_keys[0].clone(),
                    "set value",
                ));
            } else {
                msg.push(HelpEntry::new(
                    self.control_keys.enter_keys[0].clone(),
                    "edit value",
                ));
            }
        }
        msg
    }
}

impl super::Component for TextInput {
    fn get_id(&self) -> u64 {
        self.id
    }

    fn handle_events(&self, event: &Event, app: &RootState) -> Result<()> {
        if self.mode == TextInputMode::Idle {
            return Ok(());
        }
        if app.input_mode() {
            match event {
                Event::Key(key) => {
                    let key: KeyEvent = (*key).into();
                    if self.control_keys.submit_keys.contains(&key) {
                        app.send_action(self.get_action(TextInputAction::SubmitExit(
                            self.input.value().to_string(),
                        )))
                    } else if self.control_keys.exit_keys.contains(&key) {
                        app.send_action(self.get_action(TextInputAction::DirectExit))
                    } else {
                        app.send_action(self.get_action(TextInputAction::HandleKey(key)))
                    }
                }
                Event::Paste(s) => {
                    app.send_action(self.get_action(TextInputAction::HandlePaste(s.clone())))
                }
                _ => (),
            }
        } else if let Event::Key(key) = event {
            if self.control_keys.enter_keys.contains(&(*key).into()) {
                app.send_action(Action::SwitchInputMode(true))
            }
        }
        Ok(())
    }

    fn update(&mut self, action: &Action, app: &RootState) -> Result<()> {
        let Some(action) = self.unwrap_action(action) else {
            return Ok(());
        };

        match action {
            TextInputAction::SwitchMode(mode) => {
                self.mode = mode;
            }
            TextInputAction::HandleKey(key_event) => {
                self.input
                    .handle_event(&crossterm::event::Event::Key(key_event.into()));
            }
            TextInputAction::HandlePaste(string) => {
                string.chars().for_each(|c| {
                    self.input.handle(tui_input::InputRequest::InsertChar(c));
                });
            }
            TextInputAction::SubmitExit(string) => {
                self.input.reset();
                app.send_action(self.get_action(TextInputAction::Submit(string)));
                app.send_action(self.get_action(TextInputAction::Exit));
            }
            TextInputAction::DirectExit => {
                self.input.reset();
                app.send_action(self.get_action(TextInputAction::Exit));
            }
            TextInputAction::Exit => {
                app.send_action(Action::SwitchInputMode(false));
            }
            TextInputAction::Submit(_) => {}
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame, area: &Rect, app: &RootState) {
        let width = area.width.max(3) - 3;
        let scroll = self.input.visual_scroll(width as usize);
        let style = match self.mode {
            TextInputMode::Focused if app.input_mode() => Color::Yellow.into(),
            TextInputMode::Focused => Color::Cyan.into(),
            TextInputMode::Idle => Style::default(),
        };

        let input_widget = Paragraph::new(self.input.value())
            .style(style)
            .scroll((0, scroll as u16))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .title(self.title.as_str()),
            );
        frame.render_widget(input_widget, *area);

        if self.mode == TextInputMode::Focused && app.input_mode() {
            // Position the cursor past the end of the input text, one line below the border
            let x = self.input.visual_cursor().max(scroll) - scroll + 1;
            frame.set_cursor_position((area.x + x as u16, area.y + 1))
        }
    }
}

#[cfg(test)]
impl TextInput {
    pub fn get_mode(&self) -> TextInputMode {
        self.mode.clone()
    }
    pub fn get_value(&self) -> &str {
        self.input.value()
    }
}
