//! App state and main loop: input handling, polling the API, deriving
//! health/insights, and drawing.

use std::{
    collections::VecDeque,
    io,
    path::PathBuf,
    time::{Duration, Instant},
};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::Style,
    widgets::Paragraph,
    Terminal,
};
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::api::ApiClient;
use crate::export::{self, ExportFormat};
use crate::health::{compute_health_score, count_active, generate_insights, Insight};
use crate::history::push_capped;
use crate::state::DashboardState;
use crate::types::{AlertCounts, MetricSample, Server, TrafficSample};
use crate::ui::{
    header::draw_header, insights::draw_insights, metrics::draw_metrics, net::draw_net_spark,
    overview::draw_overview, servers::draw_servers, theme::Theme,
};

const POLL_INTERVAL: Duration = Duration::from_secs(5);
const SCORE_HISTORY_CAP: usize = 600;

pub struct App {
    api: ApiClient,
    state: DashboardState,

    // Latest snapshots, replaced wholesale on each poll
    servers: Vec<Server>,
    alerts: Option<AlertCounts>,
    metrics: Vec<MetricSample>,
    traffic: Vec<TrafficSample>,

    // Derived per poll
    insights: Vec<Insight>,
    health_score: Option<u8>,
    score_hist: VecDeque<u64>,

    servers_loaded: bool,
    last_error: Option<String>,
    status: Option<String>,

    export_dir: PathBuf,
    last_poll: Instant,
    should_quit: bool,
}

impl App {
    pub fn new(api: ApiClient) -> Self {
        Self {
            api,
            state: DashboardState::new(true),
            servers: Vec::new(),
            alerts: None,
            metrics: Vec::new(),
            traffic: Vec::new(),
            insights: Vec::new(),
            health_score: None,
            score_hist: VecDeque::with_capacity(SCORE_HISTORY_CAP),
            servers_loaded: false,
            last_error: None,
            status: None,
            export_dir: std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
            last_poll: Instant::now()
                .checked_sub(POLL_INTERVAL)
                .unwrap_or_else(Instant::now), // trigger immediately on first loop
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Terminal setup
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        // Main loop
        let res = self.event_loop(&mut terminal).await;

        // Teardown
        disable_raw_mode()?;
        let backend = terminal.backend_mut();
        execute!(backend, LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        res
    }

    async fn event_loop<B: ratatui::backend::Backend>(
        &mut self,
        terminal: &mut Terminal<B>,
    ) -> Result<()> {
        loop {
            // Input (non-blocking)
            while event::poll(Duration::from_millis(10))? {
                if let Event::Key(k) = event::read()? {
                    match k.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                            self.should_quit = true;
                        }
                        KeyCode::Up => self.move_selection(-1),
                        KeyCode::Down => self.move_selection(1),
                        KeyCode::Char('d') => self.state.toggle_dark_mode(),
                        KeyCode::Char('c') => self.export(ExportFormat::Csv),
                        KeyCode::Char('j') => self.export(ExportFormat::Json),
                        KeyCode::Char('r') => self.export(ExportFormat::Report),
                        _ => {}
                    }
                }
            }
            if self.should_quit {
                break;
            }

            // Fixed 5s cadence, no backoff, no jitter
            if self.last_poll.elapsed() >= POLL_INTERVAL {
                self.refresh().await;
                self.last_poll = Instant::now();
            }

            // Draw
            terminal.draw(|f| self.draw(f))?;

            // Tick rate
            sleep(Duration::from_millis(150)).await;
        }

        Ok(())
    }

    /// Fetch fresh snapshots and recompute everything derived. Failed
    /// fetches keep the previous snapshot and surface an error message.
    async fn refresh(&mut self) {
        self.last_error = None;

        match self.api.servers().await {
            Ok(list) => {
                self.servers = list;
                self.servers_loaded = true;
                self.state.resync(&self.servers);
                // Default the selection to the first server once known
                if self.state.selected_server().is_none() {
                    self.state.select_server(self.servers.first().cloned());
                }
            }
            Err(e) => {
                warn!(%e, "servers fetch failed");
                self.last_error = Some(format!("servers: {e}"));
            }
        }

        match self.api.alerts().await {
            Ok(a) => self.alerts = Some(a),
            Err(e) => {
                warn!(%e, "alerts fetch failed");
                self.last_error = Some(format!("alerts: {e}"));
            }
        }

        if let Some(id) = self.state.selected_server().map(|s| s.id) {
            match self.api.server_usage(id).await {
                Ok(m) => self.metrics = m,
                Err(e) => {
                    warn!(%e, server_id = id, "usage fetch failed");
                    self.last_error = Some(format!("usage: {e}"));
                }
            }
            match self.api.network_traffic(id).await {
                Ok(t) => self.traffic = t,
                Err(e) => {
                    warn!(%e, server_id = id, "traffic fetch failed");
                    self.last_error = Some(format!("traffic: {e}"));
                }
            }
        }

        // Derived values for this render cycle
        if self.servers_loaded {
            if let Some(alerts) = &self.alerts {
                let score = compute_health_score(&self.servers, alerts);
                self.health_score = Some(score);
                push_capped(&mut self.score_hist, score as u64, SCORE_HISTORY_CAP);
            }
        }
        self.insights = generate_insights(&self.metrics);
        debug!(
            servers = self.servers.len(),
            score = self.health_score,
            insights = self.insights.len(),
            "poll complete"
        );
    }

    // Selection follows the cursor directly; switching servers resets the
    // per-server series until the next poll fills them.
    fn move_selection(&mut self, delta: i64) {
        if self.servers.is_empty() {
            return;
        }
        let current = self
            .state
            .selected_server()
            .and_then(|sel| self.servers.iter().position(|s| s.id == sel.id))
            .unwrap_or(0);
        let next = (current as i64 + delta).clamp(0, self.servers.len() as i64 - 1) as usize;
        if self.state.selected_server().is_some() && next == current {
            return;
        }
        self.state.select_server(Some(self.servers[next].clone()));
        self.metrics.clear();
        self.traffic.clear();
        self.insights.clear();
        // Refetch the new server's series right away
        self.last_poll = Instant::now()
            .checked_sub(POLL_INTERVAL)
            .unwrap_or_else(Instant::now);
    }

    fn export(&mut self, format: ExportFormat) {
        let Some(server) = self.state.selected_server() else {
            self.status = Some("Select a server before exporting".to_string());
            return;
        };
        match export::write_export(&self.export_dir, server, format, &self.metrics, &self.traffic)
        {
            Ok(path) => {
                debug!(path = %path.display(), "export written");
                self.status = Some(format!("Exported {} to {}", format.label(), path.display()));
            }
            Err(e) => {
                warn!(%e, "export failed");
                self.status = Some(format!("Export failed: {e}"));
            }
        }
    }

    pub fn draw(&mut self, f: &mut ratatui::Frame<'_>) {
        let theme = Theme::for_mode(self.state.dark_mode());
        let area = f.area();

        // Root rows: header, overview cards, main panels, status line
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Length(6),
                Constraint::Min(12),
                Constraint::Length(1),
            ])
            .split(area);

        let online = if self.servers_loaded {
            Some((count_active(&self.servers), self.servers.len()))
        } else {
            None
        };
        draw_header(
            f,
            rows[0],
            self.api.base_url(),
            online,
            self.last_error.is_some(),
            &theme,
        );

        draw_overview(
            f,
            rows[1],
            &self.servers,
            self.alerts.as_ref(),
            self.health_score,
            &self.score_hist,
            &theme,
        );

        // Main: server list left, per-server panels right
        let main = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
            .split(rows[2]);

        draw_servers(
            f,
            main[0],
            &self.servers,
            self.state.selected_server().map(|s| s.id),
            &theme,
        );

        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(6),
                Constraint::Length(4),
                Constraint::Length(10),
            ])
            .split(main[1]);

        draw_metrics(
            f,
            right[0],
            self.state.selected_server(),
            &self.metrics,
            &theme,
        );
        draw_net_spark(f, right[1], &self.traffic, &theme);
        draw_insights(
            f,
            right[2],
            &self.insights,
            self.state.selected_server().is_some(),
            &theme,
        );

        // Status line: fetch errors win over export feedback
        let (text, color) = match (&self.last_error, &self.status) {
            (Some(err), _) => (err.clone(), theme.critical),
            (None, Some(msg)) => (msg.clone(), theme.dim),
            (None, None) => (String::new(), theme.dim),
        };
        f.render_widget(
            Paragraph::new(text).style(Style::default().fg(color)),
            rows[3],
        );
    }
}
