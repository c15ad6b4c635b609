use super::ui;
use crate::config::TuiSettings;
use crate::error::Result;
use crate::explorer::{Explorer, Section};
use crate::schema::SchemaIndex;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend, widgets::ListState};
use std::io;

/// A navigation action a rendered row carries. Activating a link feeds
/// exactly one transition into the engine, passing back the raw strings
/// the engine put into the page descriptor.
#[derive(Debug, Clone)]
pub enum Link {
    /// A type link under its raw display name (wrappers intact).
    Type { raw_name: String },
    /// A field link; `Enter` opens it as a call, `t` opens its type.
    Field {
        declaring_type: String,
        field_name: String,
        type_name: String,
    },
}

/// One rendered line of the explorer page.
#[derive(Debug, Clone)]
pub enum Row {
    /// Page title or section label.
    Header(String),
    /// Back-link line; activated with Backspace, not selectable.
    Back(String),
    /// A selectable navigation link.
    Link { label: String, link: Link },
    /// Plain text (descriptions, enum values).
    Text(String),
    Blank,
}

pub struct App<'a> {
    pub explorer: Explorer<'a>,
    pub rows: Vec<Row>,
    /// Indices into `rows` that hold links, in display order.
    pub selectable: Vec<usize>,
    pub selected: usize,
    pub list_state: ListState,
    pub expanded: bool,
    pub show_help: bool,
}

impl<'a> App<'a> {
    pub fn new(schema: &'a SchemaIndex, settings: &TuiSettings) -> Self {
        let mut explorer = Explorer::new(schema);
        if settings.start_expanded {
            explorer.toggle();
        }

        let mut app = Self {
            explorer,
            rows: Vec::new(),
            selectable: Vec::new(),
            selected: 0,
            list_state: ListState::default(),
            expanded: false,
            show_help: false,
        };
        app.rebuild();
        app
    }

    /// Re-derive the display rows from the engine. Called after every
    /// transition; the page is never kept across state changes.
    pub fn rebuild(&mut self) {
        self.rows.clear();
        self.selectable.clear();
        self.expanded = self.explorer.is_expanded();

        let Some(page) = self.explorer.current_page() else {
            self.list_state.select(None);
            return;
        };

        if let Some(label) = self.explorer.back_label() {
            self.rows.push(Row::Back(format!("Back to {}", label)));
            self.rows.push(Row::Blank);
        }

        match &page.return_type {
            Some(return_type) => self
                .rows
                .push(Row::Header(format!("{} : {}", page.title, return_type))),
            None => self.rows.push(Row::Header(page.title.clone())),
        }
        if let Some(description) = &page.description {
            self.rows.push(Row::Text(description.clone()));
        }

        for section in &page.sections {
            self.push_section(section);
        }

        if self.selected >= self.selectable.len() {
            self.selected = self.selectable.len().saturating_sub(1);
        }
        self.sync_selection();
    }

    fn push_section(&mut self, section: &Section) {
        self.rows.push(Row::Blank);
        match section {
            Section::Types { label, types } => {
                self.rows.push(Row::Header(label.clone()));
                for type_ref in types {
                    self.push_link(
                        type_ref.name.clone(),
                        Link::Type {
                            raw_name: type_ref.name.clone(),
                        },
                    );
                }
            }
            Section::Fields { fields } => {
                self.rows.push(Row::Header("fields".to_string()));
                for field in fields {
                    self.push_link(
                        format!("{} : {}", field.name, field.type_name),
                        Link::Field {
                            declaring_type: field.declaring_type.clone(),
                            field_name: field.name.clone(),
                            type_name: field.type_name.clone(),
                        },
                    );
                    if let Some(description) = &field.description {
                        self.rows.push(Row::Text(format!("  {}", description)));
                    }
                }
            }
            Section::Values { values } => {
                self.rows.push(Row::Header("values".to_string()));
                for value in values {
                    self.rows.push(Row::Text(value.name.clone()));
                    if let Some(description) = &value.description {
                        self.rows.push(Row::Text(format!("  {}", description)));
                    }
                }
            }
            Section::Args { args } => {
                self.rows.push(Row::Header("arguments".to_string()));
                for arg in args {
                    self.push_link(
                        format!("{} {}", arg.type_name, arg.name),
                        Link::Type {
                            raw_name: arg.type_name.clone(),
                        },
                    );
                    if let Some(description) = &arg.description {
                        self.rows.push(Row::Text(format!("  {}", description)));
                    }
                }
            }
        }
    }

    fn push_link(&mut self, label: String, link: Link) {
        self.selectable.push(self.rows.len());
        self.rows.push(Row::Link { label, link });
    }

    fn sync_selection(&mut self) {
        self.list_state
            .select(self.selectable.get(self.selected).copied());
    }

    pub fn next(&mut self) {
        if !self.selectable.is_empty() {
            self.selected = (self.selected + 1) % self.selectable.len();
            self.sync_selection();
        }
    }

    pub fn previous(&mut self) {
        if !self.selectable.is_empty() {
            self.selected = if self.selected == 0 {
                self.selectable.len() - 1
            } else {
                self.selected - 1
            };
            self.sync_selection();
        }
    }

    fn selected_link(&self) -> Option<&Link> {
        let row_index = *self.selectable.get(self.selected)?;
        match &self.rows[row_index] {
            Row::Link { link, .. } => Some(link),
            _ => None,
        }
    }

    /// Follow the selected link: types open type pages, fields open call
    /// pages.
    pub fn activate(&mut self) {
        let Some(link) = self.selected_link().cloned() else {
            return;
        };
        match link {
            Link::Type { raw_name } => self.explorer.open_type(&raw_name),
            Link::Field {
                declaring_type,
                field_name,
                ..
            } => self.explorer.open_call(&declaring_type, &field_name),
        }
        self.selected = 0;
        self.rebuild();
    }

    /// Open the type of the selected row; on a field row this follows
    /// the field's return type instead of the call.
    pub fn open_selected_type(&mut self) {
        let Some(link) = self.selected_link().cloned() else {
            return;
        };
        match link {
            Link::Type { raw_name } => self.explorer.open_type(&raw_name),
            Link::Field { type_name, .. } => self.explorer.open_type(&type_name),
        }
        self.selected = 0;
        self.rebuild();
    }

    pub fn go_back(&mut self) {
        self.explorer.go_back();
        self.selected = 0;
        self.rebuild();
    }

    pub fn reset_to_start(&mut self) {
        self.explorer.reset_to_start();
        self.selected = 0;
        self.rebuild();
    }

    pub fn toggle(&mut self) {
        self.explorer.toggle();
        self.rebuild();
    }
}

pub fn run_tui(schema: &SchemaIndex, settings: &TuiSettings) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(schema, settings);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {}", err);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Esc => {
                    if app.show_help {
                        app.show_help = false;
                    } else {
                        return Ok(());
                    }
                }
                KeyCode::Char('?') => app.show_help = !app.show_help,
                KeyCode::Down | KeyCode::Char('j') => app.next(),
                KeyCode::Up | KeyCode::Char('k') => app.previous(),
                KeyCode::Enter => app.activate(),
                KeyCode::Char('t') => app.open_selected_type(),
                KeyCode::Backspace | KeyCode::Left | KeyCode::Char('h') => app.go_back(),
                KeyCode::Char('m') => app.reset_to_start(),
                KeyCode::Tab | KeyCode::Char('d') => app.toggle(),
                _ => {}
            }
        }
    }
}
