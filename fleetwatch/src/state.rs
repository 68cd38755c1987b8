//! Dashboard state shared across panels: which server is selected and
//! which theme is active. Owned by the App and passed down to draw calls;
//! there is no process-wide store.

use crate::types::Server;

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    selected_server: Option<Server>,
    dark_mode: bool,
}

impl DashboardState {
    pub fn new(dark_mode: bool) -> Self {
        Self {
            selected_server: None,
            dark_mode,
        }
    }

    pub fn selected_server(&self) -> Option<&Server> {
        self.selected_server.as_ref()
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn select_server(&mut self, server: Option<Server>) {
        self.selected_server = server;
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Re-point the selection at the fresh snapshot of the same server,
    /// dropping it if the server disappeared from the fleet.
    pub fn resync(&mut self, servers: &[Server]) {
        if let Some(sel) = &self.selected_server {
            self.selected_server = servers.iter().find(|s| s.id == sel.id).cloned();
        }
    }
}
