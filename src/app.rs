use color_eyre::eyre::Result;
use crossterm::event::KeyCode;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tracing::{error, info};

use crate::{actions::Action, config::Config, page::Page, tui};

pub(crate) struct RootState {
    pub should_quit: bool,
    action_tx: UnboundedSender<Action>,
    action_rx: UnboundedReceiver<Action>,
    input_mode: bool,

    pub config: Config,
}

impl RootState {
    pub fn new(config: Option<Config>) -> Self {
        let (action_tx, action_rx) = mpsc::unbounded_channel();
        Self {
            should_quit: false,
            action_tx,
            action_rx,
            input_mode: false,
            config: config.unwrap_or_default(),
        }
    }

    pub fn send_action<T: Into<Action>>(&self, action: T) {
        // the receiver lives as long as `self`, so this only fails while shutting down
        if let Err(e) = self.action_tx.send(action.into()) {
            error!("Failed to send action: {}", e);
        }
    }

    pub fn try_recv(&mut self) -> Result<Action, TryRecvError> {
        self.action_rx.try_recv()
    }

    /// Whether a text field currently captures the keyboard
    pub fn input_mode(&self) -> bool {
        self.input_mode
    }

    /// Apply the application-wide part of an action.
    pub fn update(&mut self, action: &Action) -> Result<()> {
        match action {
            Action::Quit => self.should_quit = true,
            Action::SwitchInputMode(mode) => self.input_mode = *mode,
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
impl RootState {
    /// Let the page handle `event`, then run every resulting action to completion.
    pub fn handle_event_and_update(&mut self, page: &mut dyn Page, event: tui::Event) {
        page.handle_events(self, event).unwrap();
        self.drain_actions(page);
    }

    pub fn drain_actions(&mut self, page: &mut dyn Page) {
        while let Ok(action) = self.try_recv() {
            self.update(&action).unwrap();
            page.update(self, action).unwrap();
        }
    }
}

pub(crate) struct App {
    page: Box<dyn Page>,
    state: RootState,
    tui: tui::Tui,
}

impl App {
    pub fn new(state: RootState, page: Box<dyn Page>, tui: tui::Tui) -> Self {
        Self { page, state, tui }
    }

    pub async fn run(&mut self) -> Result<()> {
        self.tui.enter()?;
        self.page.init(&self.state);
        info!("Showing page {}", self.page.get_name());

        loop {
            let event = self.tui.next().await?;
            self.handle_event(event)?;

            while let Ok(action) = self.state.try_recv() {
                self.perform_action(action)?;
            }

            // application exit
            if self.state.should_quit {
                break;
            }
        }

        self.tui.exit()?;
        Ok(())
    }

    /// Handle application-wide events like quitting and redrawing, and
    /// delegate everything else to the current page.
    fn handle_event(&self, event: tui::Event) -> Result<()> {
        match event {
            tui::Event::Render | tui::Event::Resize(_, _) => self.state.send_action(Action::Render),
            tui::Event::Error => self.state.send_action(Action::Quit),
            tui::Event::Tick => self.state.send_action(Action::Tick),
            tui::Event::Init | tui::Event::FocusGained | tui::Event::FocusLost => {}
            tui::Event::Key(key) if !self.state.input_mode() && key.code == KeyCode::Char('q') => {
                self.state.send_action(Action::Quit)
            }
            event => self.page.handle_events(&self.state, event)?,
        }
        Ok(())
    }

    /// Perform an action
    ///
    /// This SHOULD be the only place where the state of the application is changed.
    fn perform_action(&mut self, action: Action) -> Result<()> {
        self.state.update(&action)?;
        match action {
            Action::Render => {
                self.tui.draw(|f| {
                    self.page.render(f, &self.state);
                })?;
            }
            Action::Tick | Action::Quit | Action::SwitchInputMode(_) => {}
            _ => self.page.update(&self.state, action)?,
        }
        Ok(())
    }
}
