use std::ops::{Deref, DerefMut};

use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};

use super::key_events::KeyEvent;

#[derive(Debug, Clone)]
enum HelpKey {
    Key(KeyEvent),
    /// Anything that is not a key press, e.g. a mouse gesture
    Plain(String),
}

#[derive(Debug, Clone)]
pub(crate) struct HelpEntry {
    key: HelpKey,
    desc: String,
}

impl HelpEntry {
    pub(crate) fn new<T: Into<String>, K: Into<KeyEvent>>(event: K, desc: T) -> Self {
        Self {
            key: HelpKey::Key(event.into()),
            desc: desc.into(),
        }
    }
    pub(crate) fn new_plain<T: Into<String>>(event: T, desc: T) -> Self {
        Self {
            key: HelpKey::Plain(event.into()),
            desc: desc.into(),
        }
    }

    pub(crate) fn key(&self) -> String {
        match &self.key {
            HelpKey::Key(key) => key.to_string(),
            HelpKey::Plain(key) => key.clone(),
        }
    }

    pub(crate) fn desc(&self) -> &str {
        &self.desc
    }
}

impl std::fmt::Display for HelpEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.desc(), self.key())
    }
}

#[derive(Default, Clone, Debug)]
pub(crate) struct HelpMsg {
    slices: Vec<HelpEntry>,
}

impl From<Vec<HelpEntry>> for HelpMsg {
    fn from(slices: Vec<HelpEntry>) -> Self {
        Self { slices }
    }
}

impl HelpMsg {
    pub(crate) fn extend(&mut self, other: &HelpMsg) {
        self.slices.extend(other.slices.iter().cloned());
    }

    pub(crate) fn render(&self, frame: &mut ratatui::Frame, area: ratatui::layout::Rect) {
        let paragraph = Paragraph::new(self.to_string())
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .padding(Padding::horizontal(1)),
            );
        frame.render_widget(paragraph, area);
    }
}

impl Deref for HelpMsg {
    type Target = Vec<HelpEntry>;

    fn deref(&self) -> &Self::Target {
        &self.slices
    }
}

impl DerefMut for HelpMsg {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.slices
    }
}

impl std::fmt::Display for HelpMsg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries = self
            .slices
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>();
        write!(f, "{}", entries.join(" | "))
    }
}

impl From<HelpMsg> for String {
    fn from(val: HelpMsg) -> Self {
        val.to_string()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_help_entry_key() {
        let entry = HelpEntry::new('d', "disable");
        assert_eq!(entry.key(), "d");
        assert_eq!(entry.desc(), "disable");
        assert_eq!(entry.to_string(), "disable: d");
    }

    #[test]
    fn test_help_entry_plain() {
        let entry = HelpEntry::new_plain("click a day", "pick date");
        assert_eq!(entry.key(), "click a day");
        assert_eq!(entry.to_string(), "pick date: click a day");
    }

    #[test]
    fn test_help_msg_join() {
        let mut msg: HelpMsg = vec![HelpEntry::new('q', "quit")].into();
        msg.extend(&vec![HelpEntry::new_plain("click input", "open calendar")].into());
        assert_eq!(msg.len(), 2);
        assert_eq!(String::from(msg), "quit: q | open calendar: click input");
        assert_eq!(String::from(HelpMsg::default()), "");
    }
}
