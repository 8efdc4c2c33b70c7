use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    Event, EventStream, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use tokio::time::MissedTickBehavior;

use crate::catalog::{Catalog, ALL_CATEGORIES};
use crate::config::{Config, KeyCombo, KeyContext};
use crate::gallery::{Direction, Gallery, GalleryError};
use crate::ui::action::Action;
use crate::ui::components::{
    hints_for, lightbox_hit_test, render_key_hints, theme, ButtonBar, GalleryGrid, GridLayout,
    KeyHintBarStyle, LightboxHit, LightboxOverlay, SearchBar, SearchHit, TextInputState,
};
use crate::ui::events::InputMode;
use crate::ui::input::{close_lightbox, cycle, open_tile, step_lightbox, SwipeTracker};
use crate::ui::surface::TerminalSurface;
use crate::ui::terminal_guard::TerminalGuard;

/// Frame interval driving fades and entrance animations
const FRAME: Duration = Duration::from_millis(16);

/// Screen regions from the last draw, reused for mouse hit-testing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct ScreenLayout {
    full: Rect,
    header: Rect,
    categories: Rect,
    search: Rect,
    filters: Rect,
    status: Rect,
    grid: Rect,
    footer: Rect,
}

impl ScreenLayout {
    fn compute(area: Rect) -> Self {
        let [header, categories, search, filters, status, grid, footer] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);
        Self {
            full: area,
            header,
            categories,
            search,
            filters,
            status,
            grid,
            footer,
        }
    }
}

/// Main application state
pub struct App {
    config: Config,
    gallery: Gallery<TerminalSurface>,
    mode: InputMode,
    search: TextInputState,
    /// Focused tile, as an index into the visible set
    cursor: usize,
    grid: GridLayout,
    swipe: SwipeTracker,
    /// Category bar entries: the "all" sentinel, then catalog tags
    category_tags: Vec<String>,
    category_labels: Vec<String>,
    filter_labels: Vec<String>,
    screen: ScreenLayout,
    should_quit: bool,
}

impl App {
    /// Build the app and start the gallery's loading phase
    pub fn new(catalog: Catalog, config: Config) -> Self {
        let mut category_tags = vec![ALL_CATEGORIES.to_string()];
        category_tags.extend(catalog.categories().into_iter().map(str::to_string));
        let category_labels = category_tags
            .iter()
            .map(|tag| {
                if tag == ALL_CATEGORIES {
                    "All".to_string()
                } else {
                    tag.clone()
                }
            })
            .collect();
        let filter_labels = config.filters.iter().map(|f| f.label.clone()).collect();

        let surface = TerminalSurface::new(catalog.len());
        let mut gallery = Gallery::new(catalog, surface, config.timing);
        gallery.start();

        Self {
            grid: GridLayout::new(config.tile_width, config.tile_height),
            swipe: SwipeTracker::new(config.swipe_threshold),
            config,
            gallery,
            mode: InputMode::Browsing,
            search: TextInputState::new(),
            cursor: 0,
            category_tags,
            category_labels,
            filter_labels,
            screen: ScreenLayout::default(),
            should_quit: false,
        }
    }

    /// Apply the starting category, query and visual filter
    pub fn apply_initial(
        &mut self,
        category: Option<&str>,
        query: Option<&str>,
        filter: Option<&str>,
    ) -> Result<(), GalleryError> {
        if let Some(category) = category {
            self.gallery.set_category(category)?;
        }
        if let Some(query) = query {
            self.search.set(query);
            self.gallery.set_query(query);
        }
        if let Some(filter) = filter {
            self.gallery.set_visual_filter(filter);
        }
        Ok(())
    }

    pub fn gallery(&self) -> &Gallery<TerminalSurface> {
        &self.gallery
    }

    pub fn mode(&self) -> InputMode {
        self.mode
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn search_text(&self) -> &str {
        self.search.value()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        let mut guard = TerminalGuard::enter()?;
        let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
        terminal.clear()?;

        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        terminal.show_cursor()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut events = EventStream::new();
        let mut frames = tokio::time::interval(FRAME);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);
        let mut last_frame = Instant::now();

        while !self.should_quit {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                event = events.next() => match event {
                    Some(Ok(event)) => self.handle_event(event),
                    Some(Err(e)) => return Err(e.into()),
                    None => break,
                },
                _ = frames.tick() => {
                    let now = Instant::now();
                    self.tick(now.duration_since(last_frame));
                    last_frame = now;
                }
            }
        }

        Ok(())
    }

    /// Advance the clock: flush due transitions and step animations
    pub fn tick(&mut self, elapsed: Duration) {
        self.gallery.advance(elapsed);
        self.gallery.surface_mut().tick();
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
            Event::Mouse(mouse) => self.handle_mouse(mouse),
            _ => {}
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        let context = KeyContext::resolve(self.mode, self.gallery.is_open());
        let combo = KeyCombo::from_key_event(&key);

        if let Some(action) = self.config.keybindings.get_action(&combo, context).cloned() {
            self.dispatch(action);
            return;
        }

        if context == KeyContext::Search {
            if let KeyCode::Char(c) = key.code {
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
                {
                    self.search.insert_char(c);
                    self.update_query();
                }
            }
        }
    }

    /// Execute one action
    pub fn dispatch(&mut self, action: Action) {
        tracing::debug!(?action, "Dispatching action");
        match action {
            Action::Quit => self.should_quit = true,
            Action::Reset => {
                self.gallery.reset();
                self.search.clear();
                self.mode = InputMode::Browsing;
                self.reset_cursor();
            }

            Action::NextCategory => self.cycle_category(Direction::Next),
            Action::PrevCategory => self.cycle_category(Direction::Prev),
            Action::NextFilter => self.cycle_filter(Direction::Next),
            Action::PrevFilter => self.cycle_filter(Direction::Prev),

            Action::SelectLeft => self.move_cursor(-1),
            Action::SelectRight => self.move_cursor(1),
            Action::SelectUp => self.move_cursor_rows(-1),
            Action::SelectDown => self.move_cursor_rows(1),
            Action::OpenSelected => {
                open_tile(&mut self.gallery, self.cursor);
            }

            Action::FocusSearch => self.mode = InputMode::Searching,
            Action::ExitSearch => self.mode = InputMode::Browsing,
            Action::ClearSearch => {
                if !self.search.is_empty() || !self.gallery.state().query().is_empty() {
                    self.search.clear();
                    self.update_query();
                }
            }
            Action::Backspace => {
                self.search.delete_char();
                self.update_query();
            }
            Action::DeleteWordBack => {
                self.search.delete_word();
                self.update_query();
            }
            Action::MoveCursorLeft => self.search.move_left(),
            Action::MoveCursorRight => self.search.move_right(),
            Action::MoveCursorStart => self.search.move_start(),
            Action::MoveCursorEnd => self.search.move_end(),

            Action::CloseLightbox => {
                close_lightbox(&mut self.gallery);
            }
            Action::PrevImage => self.step(Direction::Prev),
            Action::NextImage => self.step(Direction::Next),
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let (column, row) = (mouse.column, mouse.row);

        if self.gallery.is_open() {
            match mouse.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    match lightbox_hit_test(self.screen.full, column, row) {
                        LightboxHit::Backdrop | LightboxHit::Close => {
                            close_lightbox(&mut self.gallery);
                        }
                        LightboxHit::Prev => self.step(Direction::Prev),
                        LightboxHit::Next => self.step(Direction::Next),
                        LightboxHit::Panel => self.swipe.begin(column),
                    }
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    if let Some(direction) = self.swipe.end(column) {
                        self.step(direction);
                    }
                }
                _ => {}
            }
            return;
        }
        self.swipe.cancel();

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => self.click(column, row),
            MouseEventKind::ScrollDown if !self.gallery.surface().is_scroll_locked() => {
                self.move_cursor_rows(1)
            }
            MouseEventKind::ScrollUp if !self.gallery.surface().is_scroll_locked() => {
                self.move_cursor_rows(-1)
            }
            _ => {}
        }
    }

    fn click(&mut self, column: u16, row: u16) {
        let screen = self.screen;

        let categories = ButtonBar::new("", &self.category_labels);
        if let Some(index) = categories.hit_test(screen.categories, column, row) {
            self.mode = InputMode::Browsing;
            let tag = self.category_tags[index].clone();
            self.select_category(&tag);
            return;
        }

        let filters = ButtonBar::new("Filter", &self.filter_labels);
        if let Some(index) = filters.hit_test(screen.filters, column, row) {
            self.mode = InputMode::Browsing;
            let token = self.config.filters[index].token.clone();
            self.gallery.set_visual_filter(&token);
            return;
        }

        let search = SearchBar::new(&self.search)
            .show_clear(self.gallery.surface().shows_clear_button());
        match search.hit_test(screen.search, column, row) {
            Some(SearchHit::Clear) => {
                self.search.clear();
                self.update_query();
                return;
            }
            Some(SearchHit::Input) => {
                self.mode = InputMode::Searching;
                return;
            }
            None => {}
        }

        self.mode = InputMode::Browsing;
        if let Some(slot) = self.grid.slot_at(screen.grid, column, row) {
            if open_tile(&mut self.gallery, slot) {
                self.cursor = slot;
            }
        }
    }

    fn select_category(&mut self, tag: &str) {
        match self.gallery.set_category(tag) {
            Ok(()) => self.reset_cursor(),
            Err(e) => tracing::warn!(error = %e, "Category selection rejected"),
        }
    }

    fn cycle_category(&mut self, direction: Direction) {
        let current = self
            .category_tags
            .iter()
            .position(|tag| tag == self.gallery.state().category().as_str())
            .unwrap_or(0);
        let next = cycle(current, self.category_tags.len(), direction);
        if let Some(tag) = self.category_tags.get(next).cloned() {
            self.select_category(&tag);
        }
    }

    fn cycle_filter(&mut self, direction: Direction) {
        let current = self
            .config
            .filter_index(self.gallery.state().visual_filter())
            .unwrap_or(0);
        let next = cycle(current, self.config.filters.len(), direction);
        if let Some(preset) = self.config.filters.get(next) {
            let token = preset.token.clone();
            self.gallery.set_visual_filter(&token);
        }
    }

    fn update_query(&mut self) {
        let text = self.search.value().to_string();
        self.gallery.set_query(&text);
        self.reset_cursor();
    }

    fn reset_cursor(&mut self) {
        self.cursor = 0;
        self.grid.scroll_row = 0;
    }

    fn step(&mut self, direction: Direction) {
        if step_lightbox(&mut self.gallery, direction) {
            // Keep grid focus on the image being viewed
            self.cursor = self.gallery.selected_index();
        }
    }

    fn move_cursor(&mut self, delta: isize) {
        let len = self.gallery.visible_len();
        if len == 0 {
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    fn move_cursor_rows(&mut self, rows: isize) {
        let columns = self.grid.columns(self.screen.grid);
        let target = self.cursor as isize + rows * columns as isize;
        if target >= 0 && (target as usize) < self.gallery.visible_len() {
            self.cursor = target as usize;
        }
    }

    /// Draw the whole screen
    pub fn draw(&mut self, f: &mut Frame) {
        self.screen = ScreenLayout::compute(f.area());
        let screen = self.screen;
        let surface = self.gallery.surface();
        let catalog = self.gallery.catalog();

        let shown = surface.shown_positions();
        if !shown.is_empty() {
            self.cursor = self.cursor.min(shown.len() - 1);
            if !surface.is_scroll_locked() {
                self.grid.scroll_to(screen.grid, self.cursor);
            }
        }

        // Header
        let header = Line::from(vec![
            Span::styled(
                " vitrine ",
                Style::default()
                    .fg(theme::ACCENT_PRIMARY)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{} of {} images", shown.len(), catalog.len()),
                Style::default().fg(theme::TEXT_MUTED),
            ),
        ]);
        f.render_widget(Paragraph::new(header), screen.header);

        // Category and filter bars
        let active_category = self
            .category_tags
            .iter()
            .position(|tag| tag == surface.active_category());
        f.render_widget(
            ButtonBar::new("", &self.category_labels).active(active_category),
            screen.categories,
        );
        f.render_widget(
            SearchBar::new(&self.search)
                .focused(self.mode == InputMode::Searching)
                .show_clear(surface.shows_clear_button()),
            screen.search,
        );
        f.render_widget(
            ButtonBar::new("Filter", &self.filter_labels)
                .active(self.config.filter_index(surface.active_filter())),
            screen.filters,
        );

        // Status line
        let status = if surface.is_loading() {
            Span::styled(" Loading gallery...", Style::default().fg(theme::TEXT_MUTED))
        } else if let Some(text) = surface.search_result() {
            Span::styled(format!(" {}", text), Style::default().fg(theme::TEXT_SECONDARY))
        } else {
            Span::raw("")
        };
        f.render_widget(Paragraph::new(Line::from(status)), screen.status);

        // Grid
        if surface.shows_no_results() {
            let message = Paragraph::new(vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No images match your search.",
                    Style::default().fg(theme::ACCENT_WARNING),
                )),
            ])
            .alignment(Alignment::Center);
            f.render_widget(message, screen.grid);
        } else {
            let tiles = shown
                .iter()
                .filter_map(|&position| Some((catalog.get(position)?, surface.tile(position)?)))
                .collect();
            let focused = (self.mode == InputMode::Browsing && !shown.is_empty())
                .then_some(self.cursor);
            f.render_widget(
                GalleryGrid::new(tiles, self.grid).focused(focused),
                screen.grid,
            );
        }

        // Footer
        let context = KeyContext::resolve(self.mode, self.gallery.is_open());
        let hints = hints_for(&self.config.keybindings, context);
        render_key_hints(
            screen.footer,
            f.buffer_mut(),
            &hints,
            KeyHintBarStyle::footer_bar(),
        );

        // Lightbox (kept on screen through its closing fade)
        if let Some(view) = surface.lightbox() {
            let filter = surface
                .tile(view.content.position)
                .map(|tile| tile.filter.as_str())
                .unwrap_or_default();
            f.render_widget(LightboxOverlay::new(view).filter(filter), screen.full);
        }
    }
}
