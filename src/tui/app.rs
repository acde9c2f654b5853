//! Main application logic for the terminal user interface.
//!
//! This module contains the `App` struct which manages the TUI state,
//! handles user input, renders the interface, and coordinates between the
//! phase list, task list and task detail screens. All task mutations go
//! through the reconciler and are saved to disk immediately.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use chrono::Local;
use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Row, Table, TableState},
    Frame, Terminal,
};

use crate::fields::{DueBucket, Status};
use crate::model::Task;
use crate::progress::{category_completion, task_completion};
use crate::reconcile;
use crate::store::{due_bucket, format_deadline_relative, format_status, JourneyStore};
use crate::tui::colors::{DARK_GREEN, DARK_PURPLE, DARK_RED, GOLD};
use crate::tui::enums::{AppState, DetailRow};
use crate::tui::input::InputField;

/// Main application state for the terminal user interface.
///
/// Manages the current screen, the loaded journey store, list selections and
/// the add-subtask input dialog.
pub struct App {
    state: AppState,
    store: JourneyStore,
    store_path: PathBuf,
    phase_state: TableState,
    task_state: TableState,
    detail_state: ListState,
    phase_task_ids: Vec<String>,
    selected_phase: Option<String>,
    selected_task: Option<String>,
    detail_rows: Vec<DetailRow>,
    subtask_input: InputField,
    input_target_category: Option<String>,
    help_return_state: AppState,
    status_message: String,
}

impl App {
    /// Create a new App instance, loading the journey from the specified path.
    pub fn new(store_path: &Path) -> io::Result<Self> {
        let store = JourneyStore::load(store_path);

        let mut app = App {
            state: AppState::PhaseList,
            store,
            store_path: store_path.to_path_buf(),
            phase_state: TableState::default(),
            task_state: TableState::default(),
            detail_state: ListState::default(),
            phase_task_ids: Vec::new(),
            selected_phase: None,
            selected_task: None,
            detail_rows: Vec::new(),
            subtask_input: InputField::new(),
            input_target_category: None,
            help_return_state: AppState::PhaseList,
            status_message: String::new(),
        };

        if !app.store.phases.is_empty() {
            app.phase_state.select(Some(0));
        }
        Ok(app)
    }

    /// Save the store to disk, reporting failures in the status bar.
    fn save_store(&mut self) {
        if let Err(e) = self.store.save(&self.store_path) {
            self.status_message = format!("Save failed: {e}");
        }
    }

    fn selected_task_value(&self) -> Option<Task> {
        self.selected_task
            .as_deref()
            .and_then(|id| self.store.get_task(id))
            .cloned()
    }

    /// Recompute the task ids attached to the selected phase's steps.
    fn update_phase_tasks(&mut self) {
        self.phase_task_ids.clear();
        let Some(phase) = self
            .selected_phase
            .as_deref()
            .and_then(|id| self.store.get_phase(id))
        else {
            self.task_state.select(None);
            return;
        };
        for step in &phase.steps {
            for task in self.store.tasks.iter().filter(|t| t.step_id.as_deref() == Some(step.id.as_str())) {
                self.phase_task_ids.push(task.id.clone());
            }
        }
        if self.phase_task_ids.is_empty() {
            self.task_state.select(None);
        } else if self
            .task_state
            .selected()
            .map_or(true, |i| i >= self.phase_task_ids.len())
        {
            self.task_state.select(Some(0));
        }
    }

    /// Rebuild the visible rows of the detail view from the selected task.
    /// Collapsed categories contribute only their header row.
    fn rebuild_detail_rows(&mut self) {
        self.detail_rows.clear();
        if let Some(task) = self.selected_task_value() {
            for cat in &task.categories {
                self.detail_rows.push(DetailRow::Category {
                    category_id: cat.id.clone(),
                });
                if !cat.collapsed {
                    for sub in &cat.subtasks {
                        self.detail_rows.push(DetailRow::Subtask {
                            category_id: cat.id.clone(),
                            subtask_id: sub.id.clone(),
                        });
                    }
                }
            }
        }
        if self.detail_rows.is_empty() {
            self.detail_state.select(None);
        } else if self
            .detail_state
            .selected()
            .map_or(true, |i| i >= self.detail_rows.len())
        {
            self.detail_state.select(Some(0));
        }
    }

    fn selected_detail_row(&self) -> Option<&DetailRow> {
        self.detail_state.selected().and_then(|i| self.detail_rows.get(i))
    }

    /// Apply a reconciler transform to the selected task and persist.
    fn mutate_selected_task<F>(&mut self, f: F)
    where
        F: FnOnce(&Task) -> Task,
    {
        if let Some(task) = self.selected_task_value() {
            let updated = f(&task);
            self.store.put_task(updated);
            self.save_store();
            self.rebuild_detail_rows();
        }
    }

    /// Cycle a task's status through the explicit transitions.
    fn cycle_status(&mut self, task_id: &str) {
        let Some(task) = self.store.get_task(task_id).cloned() else {
            return;
        };
        let next = match task.status {
            Status::Pending => Status::InProgress,
            Status::InProgress => Status::Completed,
            Status::Completed => Status::Pending,
        };
        let updated = reconcile::set_status(&task, next);
        self.store.put_task(updated);
        self.save_store();
        self.rebuild_detail_rows();
        self.status_message = format!("{} set to {}", task_id, format_status(next));
    }

    /// Handle keyboard input based on current state.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    return Ok(true);
                }
                self.status_message.clear();
                return Ok(match self.state {
                    AppState::PhaseList => self.handle_phase_list_input(key.code),
                    AppState::TaskList => self.handle_task_list_input(key.code),
                    AppState::TaskDetail => self.handle_task_detail_input(key.code),
                    AppState::AddSubtask => {
                        self.handle_add_subtask_input(key.code);
                        false
                    }
                    AppState::Help => {
                        self.state = self.help_return_state;
                        false
                    }
                });
            }
        }
        Ok(false)
    }

    fn handle_phase_list_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') | KeyCode::Esc => return true,
            KeyCode::Up => move_selection(&mut self.phase_state, self.store.phases.len(), -1),
            KeyCode::Down => move_selection(&mut self.phase_state, self.store.phases.len(), 1),
            KeyCode::Enter => {
                if let Some(idx) = self.phase_state.selected() {
                    if let Some(phase) = self.store.phases.get(idx) {
                        self.selected_phase = Some(phase.id.clone());
                        self.update_phase_tasks();
                        self.state = AppState::TaskList;
                    }
                }
            }
            KeyCode::Char('h') => self.open_help(AppState::PhaseList),
            _ => {}
        }
        false
    }

    fn handle_task_list_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                self.state = AppState::PhaseList;
            }
            KeyCode::Up => move_selection(&mut self.task_state, self.phase_task_ids.len(), -1),
            KeyCode::Down => move_selection(&mut self.task_state, self.phase_task_ids.len(), 1),
            KeyCode::Enter => {
                if let Some(id) = self.current_task_list_id() {
                    self.selected_task = Some(id);
                    self.detail_state.select(None);
                    self.rebuild_detail_rows();
                    self.state = AppState::TaskDetail;
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.current_task_list_id() {
                    self.cycle_status(&id);
                }
            }
            KeyCode::Char('h') => self.open_help(AppState::TaskList),
            _ => {}
        }
        false
    }

    fn current_task_list_id(&self) -> Option<String> {
        self.task_state
            .selected()
            .and_then(|i| self.phase_task_ids.get(i))
            .cloned()
    }

    fn handle_task_detail_input(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char('q') => return true,
            KeyCode::Esc => {
                self.state = AppState::TaskList;
                self.update_phase_tasks();
            }
            KeyCode::Up => move_list_selection(&mut self.detail_state, self.detail_rows.len(), -1),
            KeyCode::Down => move_list_selection(&mut self.detail_state, self.detail_rows.len(), 1),
            KeyCode::Char(' ') => {
                if let Some(DetailRow::Subtask { category_id, subtask_id }) =
                    self.selected_detail_row().cloned()
                {
                    if let Some(task) = self.selected_task_value() {
                        let currently = task
                            .all_subtasks()
                            .find(|s| s.id == subtask_id)
                            .map(|s| s.completed)
                            .unwrap_or(false);
                        self.mutate_selected_task(|t| {
                            reconcile::toggle_subtask(t, &category_id, &subtask_id, !currently)
                        });
                    }
                }
            }
            KeyCode::Char('c') => {
                if let Some(row) = self.selected_detail_row().cloned() {
                    let cat_id = row.category_id().to_string();
                    self.mutate_selected_task(|t| reconcile::toggle_category_collapsed(t, &cat_id));
                }
            }
            KeyCode::Char('s') => {
                if let Some(id) = self.selected_task.clone() {
                    self.cycle_status(&id);
                }
            }
            KeyCode::Char('a') => {
                if let Some(row) = self.selected_detail_row().cloned() {
                    self.input_target_category = Some(row.category_id().to_string());
                    self.subtask_input.clear();
                    self.subtask_input.active = true;
                    self.state = AppState::AddSubtask;
                } else {
                    self.status_message = "Select a category first".to_string();
                }
            }
            KeyCode::Char('d') | KeyCode::Delete => {
                if let Some(DetailRow::Subtask { category_id, subtask_id }) =
                    self.selected_detail_row().cloned()
                {
                    self.mutate_selected_task(|t| {
                        reconcile::remove_subtask(t, &category_id, &subtask_id)
                    });
                    self.status_message = format!("Removed {subtask_id}");
                }
            }
            KeyCode::Char('h') => self.open_help(AppState::TaskDetail),
            _ => {}
        }
        false
    }

    fn handle_add_subtask_input(&mut self, key: KeyCode) {
        match key {
            KeyCode::Esc => {
                self.subtask_input.clear();
                self.state = AppState::TaskDetail;
            }
            KeyCode::Enter => {
                let title = self.subtask_input.value.trim().to_string();
                if title.is_empty() {
                    self.status_message = "Subtask title must not be empty".to_string();
                    return;
                }
                if let Some(cat_id) = self.input_target_category.clone() {
                    let sub_id = self.store.next_subtask_id();
                    self.mutate_selected_task(|t| {
                        reconcile::add_subtask(t, &cat_id, &sub_id, &title)
                    });
                    self.status_message = format!("Added {sub_id}");
                }
                self.subtask_input.clear();
                self.state = AppState::TaskDetail;
            }
            KeyCode::Backspace => self.subtask_input.handle_backspace(),
            KeyCode::Left => self.subtask_input.move_cursor_left(),
            KeyCode::Right => self.subtask_input.move_cursor_right(),
            KeyCode::Char(c) => self.subtask_input.handle_char(c),
            _ => {}
        }
    }

    fn open_help(&mut self, return_state: AppState) {
        self.help_return_state = return_state;
        self.state = AppState::Help;
    }

    /// Render the phase overview with progress gauges.
    fn render_phase_list(&mut self, f: &mut Frame, area: Rect) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // overall gauge
                Constraint::Min(0),    // phase table
            ])
            .split(area);

        let header = Paragraph::new(Line::from(vec![
            Span::styled("VENTURE JOURNEY", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw("  "),
            Span::styled(
                "Your path from idea to business",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
            ),
        ]))
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Center);
        f.render_widget(header, chunks[0]);

        let overall = self.store.overall_progress();
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Overall progress"))
            .gauge_style(Style::default().fg(DARK_GREEN))
            .percent(overall as u16);
        f.render_widget(gauge, chunks[1]);

        let header_cells = ["Phase", "Done", "Steps", "Description"].iter().map(|h| {
            ratatui::widgets::Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
        });
        let header_row = Row::new(header_cells)
            .style(Style::default().bg(DARK_PURPLE).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .store
            .phases
            .iter()
            .map(|phase| {
                let pct = self.store.phase_progress(phase);
                let style = if pct == 100 {
                    Style::default().fg(DARK_GREEN)
                } else if pct > 0 {
                    Style::default().fg(GOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                Row::new(vec![
                    ratatui::widgets::Cell::from(phase.title.clone()),
                    ratatui::widgets::Cell::from(format!("{pct}%")),
                    ratatui::widgets::Cell::from(phase.steps.len().to_string()),
                    ratatui::widgets::Cell::from(phase.description.clone()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(14),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Min(30),
        ];
        let table = Table::new(rows, widths)
            .header(header_row)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "Phases ({}) - Press 'h' for help",
                self.store.phases.len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, chunks[2], &mut self.phase_state);
    }

    /// Render the task table for the selected phase.
    fn render_task_list(&mut self, f: &mut Frame, area: Rect) {
        let today = Local::now().date_naive();
        let phase_title = self
            .selected_phase
            .as_deref()
            .and_then(|id| self.store.get_phase(id))
            .map(|p| p.title.clone())
            .unwrap_or_else(|| "Phase".to_string());

        let header_cells = ["ID", "Status", "Done", "Deadline", "Step", "Title"].iter().map(|h| {
            ratatui::widgets::Cell::from(*h).style(Style::default().add_modifier(Modifier::BOLD))
        });
        let header_row = Row::new(header_cells)
            .style(Style::default().bg(DARK_PURPLE).fg(Color::White))
            .height(1);

        let rows: Vec<Row> = self
            .phase_task_ids
            .iter()
            .filter_map(|id| self.store.get_task(id))
            .map(|task| {
                let overdue = due_bucket(task.deadline, today) == Some(DueBucket::Overdue)
                    && task.status != Status::Completed;
                let style = if overdue {
                    Style::default().fg(DARK_RED).add_modifier(Modifier::BOLD)
                } else {
                    match task.status {
                        Status::Completed => Style::default().fg(Color::DarkGray),
                        Status::InProgress => Style::default().fg(GOLD).add_modifier(Modifier::BOLD),
                        Status::Pending => Style::default().fg(Color::White),
                    }
                };
                Row::new(vec![
                    ratatui::widgets::Cell::from(task.id.clone()),
                    ratatui::widgets::Cell::from(format_status(task.status)),
                    ratatui::widgets::Cell::from(format!("{}%", task_completion(task))),
                    ratatui::widgets::Cell::from(format_deadline_relative(task.deadline, today)),
                    ratatui::widgets::Cell::from(task.step_id.clone().unwrap_or_else(|| "-".into())),
                    ratatui::widgets::Cell::from(task.title.clone()),
                ])
                .style(style)
            })
            .collect();

        let widths = [
            Constraint::Length(10),
            Constraint::Length(11),
            Constraint::Length(6),
            Constraint::Length(12),
            Constraint::Length(16),
            Constraint::Min(25),
        ];
        let table = Table::new(rows, widths)
            .header(header_row)
            .block(Block::default().borders(Borders::ALL).title(format!(
                "{} tasks ({}) - Enter to open, 's' to cycle status",
                phase_title,
                self.phase_task_ids.len()
            )))
            .row_highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");

        f.render_stateful_widget(table, area, &mut self.task_state);
    }

    /// Render the detailed view of a single task with its categories and
    /// subtasks.
    fn render_task_detail(&mut self, f: &mut Frame, area: Rect) {
        let Some(task) = self.selected_task_value() else {
            let empty = Paragraph::new("Task not found")
                .block(Block::default().borders(Borders::ALL));
            f.render_widget(empty, area);
            return;
        };
        let today = Local::now().date_naive();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // summary
                Constraint::Length(3), // gauge
                Constraint::Min(0),    // category/subtask list
            ])
            .split(area);

        let mut text = vec![Line::from(vec![
            Span::styled("Title: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(task.title.clone()),
        ])];
        if !task.description.is_empty() {
            text.push(Line::from(task.description.clone()));
        }
        text.push(Line::from(vec![
            Span::styled("Status: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_status(task.status)),
            Span::raw("   "),
            Span::styled("Deadline: ", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format_deadline_relative(task.deadline, today)),
        ]));
        if !task.resources.is_empty() {
            text.push(Line::from(vec![
                Span::styled("Resources: ", Style::default().add_modifier(Modifier::BOLD)),
                Span::raw(task.resources.join(", ")),
            ]));
        }
        let summary = Paragraph::new(text)
            .block(Block::default().borders(Borders::ALL).title(task.id.clone()));
        f.render_widget(summary, chunks[0]);

        let pct = task_completion(&task);
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title("Completion"))
            .gauge_style(Style::default().fg(if pct == 100 { DARK_GREEN } else { GOLD }))
            .percent(pct as u16);
        f.render_widget(gauge, chunks[1]);

        let items: Vec<ListItem> = self
            .detail_rows
            .iter()
            .filter_map(|row| match row {
                DetailRow::Category { category_id } => {
                    let cat = task.categories.iter().find(|c| &c.id == category_id)?;
                    let marker = if cat.collapsed { "[+]" } else { "[-]" };
                    Some(ListItem::new(Line::from(vec![Span::styled(
                        format!("{marker} {} ({}%)", cat.title, category_completion(cat)),
                        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                    )])))
                }
                DetailRow::Subtask { category_id, subtask_id } => {
                    let cat = task.categories.iter().find(|c| &c.id == category_id)?;
                    let sub = cat.subtasks.iter().find(|s| &s.id == subtask_id)?;
                    let check = if sub.completed { "[x]" } else { "[ ]" };
                    let style = if sub.completed {
                        Style::default().fg(Color::DarkGray)
                    } else {
                        Style::default().fg(Color::White)
                    };
                    Some(ListItem::new(Line::from(vec![Span::styled(
                        format!("    {check} {}", sub.title),
                        style,
                    )])))
                }
            })
            .collect();

        let list = List::new(items)
            .block(Block::default().borders(Borders::ALL).title(
                "Checklist - space toggle, 'a' add, 'd' delete, 'c' collapse",
            ))
            .highlight_style(Style::default().bg(Color::Gray).fg(Color::Black))
            .highlight_symbol(">> ");
        f.render_stateful_widget(list, chunks[2], &mut self.detail_state);
    }

    /// Render the add-subtask popup over the detail view.
    fn render_add_subtask(&mut self, f: &mut Frame, area: Rect) {
        self.render_task_detail(f, area);

        let popup = centered_rect(60, 20, area);
        f.render_widget(Clear, popup);
        let input = Paragraph::new(self.subtask_input.value.clone())
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("New subtask title (Enter to add, Esc to cancel)"),
            )
            .style(Style::default().fg(GOLD));
        f.render_widget(input, popup);
        f.set_cursor_position((
            popup.x + 1 + self.subtask_input.cursor as u16,
            popup.y + 1,
        ));
    }

    fn render_help(&mut self, f: &mut Frame, area: Rect) {
        let lines = vec![
            Line::from("Navigation"),
            Line::from("  Up/Down    move selection"),
            Line::from("  Enter      open phase / task"),
            Line::from("  Esc        back (quit from phase list)"),
            Line::from(""),
            Line::from("Tasks"),
            Line::from("  space      toggle selected subtask"),
            Line::from("  s          cycle task status (pending → in-progress → completed)"),
            Line::from("  a          add a subtask to the selected category"),
            Line::from("  d          delete the selected subtask"),
            Line::from("  c          collapse/expand the selected category"),
            Line::from(""),
            Line::from("  q / Ctrl+C quit"),
            Line::from(""),
            Line::from("Press any key to return."),
        ];
        let help = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Help"));
        f.render_widget(help, area);
    }

    fn render_status_bar(&mut self, f: &mut Frame, area: Rect) {
        let status_text = if !self.status_message.is_empty() {
            self.status_message.clone()
        } else {
            match self.state {
                AppState::PhaseList => {
                    format!("Phases: {} | Press 'h' for help", self.store.phases.len())
                }
                AppState::TaskList => {
                    format!("Tasks: {} | Press 'h' for help", self.phase_task_ids.len())
                }
                AppState::TaskDetail => "Task Details".to_string(),
                AppState::AddSubtask => "Add Subtask".to_string(),
                AppState::Help => "Help".to_string(),
            }
        };

        let status = Paragraph::new(status_text)
            .style(Style::default().bg(DARK_PURPLE).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    /// Main render function that dispatches to appropriate view renderers.
    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)].as_ref())
            .split(f.area());

        match self.state {
            AppState::PhaseList => self.render_phase_list(f, chunks[0]),
            AppState::TaskList => self.render_task_list(f, chunks[0]),
            AppState::TaskDetail => self.render_task_detail(f, chunks[0]),
            AppState::AddSubtask => self.render_add_subtask(f, chunks[0]),
            AppState::Help => self.render_help(f, chunks[0]),
        }

        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the TUI application.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}

/// Move a table selection by delta, clamped to the collection bounds.
fn move_selection(state: &mut TableState, len: usize, delta: i64) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1) as usize;
    state.select(Some(next));
}

/// Move a list selection by delta, clamped to the collection bounds.
fn move_list_selection(state: &mut ListState, len: usize, delta: i64) {
    if len == 0 {
        state.select(None);
        return;
    }
    let current = state.selected().unwrap_or(0) as i64;
    let next = (current + delta).clamp(0, len as i64 - 1) as usize;
    state.select(Some(next));
}

/// Create a centered rectangle with the given percentage dimensions.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
