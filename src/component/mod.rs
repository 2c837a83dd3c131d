pub(crate) mod date_picker;
pub(crate) mod input;

use color_eyre::eyre::Result;
use ratatui::{Frame, layout::Rect};

use crate::{actions::Action, app::RootState, tui::Event};

/// A reusable piece of UI owned by a page.
///
/// Components never mutate themselves while handling events. They send
/// actions tagged with their id instead, and apply them in [`Component::update`].
pub(crate) trait Component {
    fn get_id(&self) -> u64;

    fn handle_events(&self, event: &Event, app: &RootState) -> Result<()>;

    fn update(&mut self, action: &Action, app: &RootState) -> Result<()>;

    fn draw(&mut self, frame: &mut Frame, area: &Rect, app: &RootState);
}
