use modelman_core::{
    ClientState, HttpGateway, Theme, ThemePreference, DISCOVERABLE_MODELS,
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AppMode {
    Normal,
    Input,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tab {
    Local,
    Discover,
}

pub struct App {
    pub mode: AppMode,
    pub current_tab: Tab,

    // Shared client state rendered by the UI
    pub state: ClientState,

    // Selection per tab
    pub selected_local: usize,
    pub selected_discoverable: usize,

    // Theme
    pub theme_pref: ThemePreference,

    // Internal
    gateway: HttpGateway,
}

impl App {
    pub fn new(gateway: HttpGateway) -> Self {
        Self {
            mode: AppMode::Normal,
            current_tab: Tab::Local,
            state: ClientState::new(),
            selected_local: 0,
            selected_discoverable: 0,
            theme_pref: ThemePreference::load(),
            gateway,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme_pref.theme
    }

    pub fn next(&mut self) {
        match self.current_tab {
            Tab::Local => {
                if !self.state.models.is_empty() {
                    self.selected_local = (self.selected_local + 1) % self.state.models.len();
                }
            }
            Tab::Discover => {
                self.selected_discoverable =
                    (self.selected_discoverable + 1) % DISCOVERABLE_MODELS.len();
            }
        }
    }

    pub fn previous(&mut self) {
        match self.current_tab {
            Tab::Local => {
                if !self.state.models.is_empty() {
                    self.selected_local = self
                        .selected_local
                        .checked_sub(1)
                        .unwrap_or(self.state.models.len() - 1);
                }
            }
            Tab::Discover => {
                self.selected_discoverable = self
                    .selected_discoverable
                    .checked_sub(1)
                    .unwrap_or(DISCOVERABLE_MODELS.len() - 1);
            }
        }
    }

    pub fn next_tab(&mut self) {
        self.current_tab = match self.current_tab {
            Tab::Local => Tab::Discover,
            Tab::Discover => Tab::Local,
        };
    }

    pub fn toggle_theme(&mut self) {
        self.theme_pref.toggle();
    }

    /// Every workflow entry point guards on `busy`: a second call is not
    /// issued while one is outstanding.
    pub async fn refresh(&mut self) {
        if self.state.busy {
            return;
        }
        self.state.refresh_models(&self.gateway).await;
        if self.selected_local >= self.state.models.len() {
            self.selected_local = self.state.models.len().saturating_sub(1);
        }
    }

    pub async fn pull_selected(&mut self) {
        if self.state.busy || self.current_tab != Tab::Discover {
            return;
        }
        let target = DISCOVERABLE_MODELS[self.selected_discoverable].to_string();
        self.state.pull_model(&self.gateway, &target).await;
    }

    pub async fn submit_pending(&mut self) {
        if self.state.busy {
            return;
        }
        let target = self.state.pending_name.clone();
        self.state.pull_model(&self.gateway, &target).await;
    }
}
