//! Pages are the top level screens of the application.
//!
//! The application only ever shows one page; the page owns its components,
//! routes events to them and reacts to what they report back.

use color_eyre::eyre::Result;
use ratatui::Frame;

use crate::{actions::Action, app::RootState, tui::Event};

pub(crate) mod form;

pub(crate) trait Page {
    fn render(&mut self, frame: &mut Frame, app: &RootState);

    fn handle_events(&self, app: &RootState, event: Event) -> Result<()>;

    fn update(&mut self, app: &RootState, action: Action) -> Result<()>;

    fn get_name(&self) -> String;

    /// Initialize the page
    fn init(&mut self, _app: &RootState) {}
}
