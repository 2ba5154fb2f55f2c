use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Borders, List, ListItem, ListState, Paragraph, Wrap},
};
use std::{env, io::stdout, path::PathBuf, process};
use tripnote_config::Config;
use tripnote_engine::{
    Block, BodyLine, ChecklistItem, ChecklistState, ColorKey, IconId, InlineSpan, LabeledLine,
    RuleSet, SectionBody, io, parse_memo, scan_inline,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Files,
    Memo,
}

struct App {
    memo_files: Vec<PathBuf>,
    file_list_state: ListState,
    rules: RuleSet,
    blocks: Vec<Block>,
    checklist: ChecklistState,
    checklist_cursor: usize,
    focus: Pane,
    load_error: Option<String>,
}

impl App {
    fn new(memo_files: Vec<PathBuf>, rules: RuleSet) -> Self {
        let mut app = Self {
            memo_files,
            file_list_state: ListState::default(),
            rules,
            blocks: Vec::new(),
            checklist: ChecklistState::default(),
            checklist_cursor: 0,
            focus: Pane::Files,
            load_error: None,
        };

        if !app.memo_files.is_empty() {
            app.file_list_state.select(Some(0));
            app.load_selected_memo();
        }

        app
    }

    fn next_file(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => (i + 1) % self.memo_files.len(),
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected_memo();
    }

    fn previous_file(&mut self) {
        let i = match self.file_list_state.selected() {
            Some(i) => {
                if i == 0 {
                    self.memo_files.len() - 1
                } else {
                    i - 1
                }
            }
            None => 0,
        };
        self.file_list_state.select(Some(i));
        self.load_selected_memo();
    }

    fn next_item(&mut self) {
        if self.checklist.is_empty() {
            return;
        }
        self.checklist_cursor = (self.checklist_cursor + 1) % self.checklist.len();
    }

    fn previous_item(&mut self) {
        if self.checklist.is_empty() {
            return;
        }
        self.checklist_cursor = if self.checklist_cursor == 0 {
            self.checklist.len() - 1
        } else {
            self.checklist_cursor - 1
        };
    }

    /// Flip the checklist item under the cursor. Session-scoped only;
    /// the memo file is never written.
    fn toggle_current_item(&mut self) {
        if let Some(item) = self.checklist.items().get(self.checklist_cursor) {
            let id = item.id.clone();
            self.checklist.toggle(&id);
        }
    }

    fn load_selected_memo(&mut self) {
        let Some(index) = self.file_list_state.selected() else {
            return;
        };
        let Some(path) = self.memo_files.get(index) else {
            return;
        };

        match io::read_memo(path) {
            Ok(content) => {
                self.blocks = parse_memo(&content, &self.rules);
                self.checklist = ChecklistState::from_blocks(&self.blocks);
                self.load_error = None;
            }
            Err(e) => {
                self.blocks = Vec::new();
                self.checklist = ChecklistState::default();
                self.load_error = Some(format!("Error reading memo: {e}"));
            }
        }
        self.checklist_cursor = 0;
    }

    fn cursor_item_id(&self) -> Option<&str> {
        if self.focus != Pane::Memo {
            return None;
        }
        self.checklist
            .items()
            .get(self.checklist_cursor)
            .map(|item| item.id.as_str())
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    let dump = args.iter().skip(1).any(|arg| arg == "--dump");
    let positional: Vec<&String> = args.iter().skip(1).filter(|arg| *arg != "--dump").collect();

    if positional.len() > 1 {
        eprintln!("Usage: {} [--dump] [memo-file-or-folder]", args[0]);
        process::exit(1);
    }

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let memos_path;
    let from_config;

    if let Some(arg) = positional.first() {
        memos_path = PathBuf::from(arg);
        from_config = false;
    } else if let Some(config) = &config {
        memos_path = config.memos_path.clone();
        from_config = true;
    } else {
        eprintln!("Error: No memo path provided and no config file found");
        eprintln!("Usage: {} [--dump] <memo-file-or-folder>", args[0]);
        eprintln!("Or create a config file at {}", config_path.display());
        process::exit(1);
    }

    let rules = config.as_ref().map(Config::rule_set).unwrap_or_default();

    // A file argument views one memo; a folder shows everything in it
    let memo_files = if memos_path.is_file() {
        vec![memos_path.clone()]
    } else {
        if let Err(e) = io::validate_memos_dir(&memos_path) {
            let source = if from_config {
                format!(" from config file '{}'", config_path.display())
            } else {
                String::new()
            };
            eprintln!(
                "Error: Memo path '{}'{} is invalid: {e}",
                memos_path.display(),
                source
            );
            process::exit(1);
        }
        io::scan_memo_files(&memos_path)?
    };

    if memo_files.is_empty() {
        eprintln!("Error: No memo files found under '{}'", memos_path.display());
        process::exit(1);
    }

    if dump {
        return dump_memos(&memo_files, &rules);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(memo_files, rules);

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        println!("{err:?}");
    }

    Ok(())
}

/// Print each memo's classified blocks as plain text and exit.
fn dump_memos(memo_files: &[PathBuf], rules: &RuleSet) -> Result<()> {
    for path in memo_files {
        let content = io::read_memo(path)?;
        let blocks = parse_memo(&content, rules);
        let checklist = ChecklistState::from_blocks(&blocks);

        println!("== {} ==", path.display());
        let mut lines = Vec::new();
        for block in &blocks {
            render_block(block, &checklist, None, &mut lines);
            lines.push(Line::default());
        }
        for line in &lines {
            let text: String = line.spans.iter().map(|span| span.content.as_ref()).collect();
            println!("{text}");
        }
    }
    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()? {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => {
                    app.focus = match app.focus {
                        Pane::Files => Pane::Memo,
                        Pane::Memo => Pane::Files,
                    };
                }
                KeyCode::Down | KeyCode::Char('j') => match app.focus {
                    Pane::Files => app.next_file(),
                    Pane::Memo => app.next_item(),
                },
                KeyCode::Up | KeyCode::Char('k') => match app.focus {
                    Pane::Files => app.previous_file(),
                    Pane::Memo => app.previous_item(),
                },
                KeyCode::Enter | KeyCode::Char(' ') => match app.focus {
                    Pane::Files => app.focus = Pane::Memo,
                    Pane::Memo => app.toggle_current_item(),
                },
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .margin(1)
        .constraints([Constraint::Percentage(30), Constraint::Percentage(70)].as_ref())
        .split(f.area());

    // Memo list panel
    let file_items: Vec<ListItem> = app
        .memo_files
        .iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string());
            ListItem::new(vec![Line::from(vec![Span::raw(format!("📄 {name}"))])])
        })
        .collect();

    let files_list = List::new(file_items)
        .block(
            ratatui::widgets::Block::default()
                .borders(Borders::ALL)
                .title("Memos")
                .border_style(pane_border(app.focus == Pane::Files)),
        )
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));

    f.render_stateful_widget(files_list, chunks[0], &mut app.file_list_state);

    // Block panel
    let content_text = if let Some(error) = &app.load_error {
        vec![Line::styled(error.clone(), Style::default().fg(Color::Red))]
    } else if app.blocks.is_empty() {
        vec![Line::from("Select a memo to view its blocks")]
    } else {
        let mut lines = Vec::new();
        for block in &app.blocks {
            render_block(block, &app.checklist, app.cursor_item_id(), &mut lines);
            lines.push(Line::default());
        }
        lines.pop();
        lines
    };

    let content = Paragraph::new(content_text)
        .block(
            ratatui::widgets::Block::default()
                .borders(Borders::ALL)
                .title("Blocks")
                .border_style(pane_border(app.focus == Pane::Memo)),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(content, chunks[1]);

    // Instructions
    let help_text = Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab: Switch pane | "),
        Span::raw("↑/k ↓/j: Move | "),
        Span::raw("Enter/Space: Open or toggle"),
    ]);

    let help = Paragraph::new(vec![help_text]).block(ratatui::widgets::Block::default());

    let bottom_chunk = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(3)].as_ref())
        .split(f.area());

    f.render_widget(help, bottom_chunk[1]);
}

fn pane_border(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Map one block to display lines. `cursor_id` marks the checklist item
/// under the cursor, when the memo pane has focus.
fn render_block(
    block: &Block,
    checklist: &ChecklistState,
    cursor_id: Option<&str>,
    out: &mut Vec<Line<'static>>,
) {
    match block {
        Block::Separator => {
            out.push(Line::styled(
                "─".repeat(24),
                Style::default().fg(Color::DarkGray),
            ));
        }
        Block::Table { header, rows } => {
            out.push(Line::styled(
                header.join("  |  "),
                Style::default().add_modifier(Modifier::BOLD),
            ));
            for row in rows {
                out.push(Line::raw(row.join("  |  ")));
            }
        }
        Block::Blockquote { lines } => {
            for line in lines {
                out.push(Line::from(vec![
                    Span::styled("▎ ", Style::default().fg(Color::DarkGray)),
                    Span::styled(line.clone(), Style::default().fg(Color::DarkGray)),
                ]));
            }
        }
        Block::SectionHeader { title, rule, body } => {
            out.push(Line::from(vec![
                Span::raw(format!("{} ", glyph_for(rule.icon))),
                Span::styled(
                    title.clone(),
                    Style::default()
                        .fg(color_for(rule.color))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            match body {
                SectionBody::Checklist(items) => {
                    for item in items {
                        out.push(checklist_line(item, checklist, cursor_id, "  "));
                    }
                }
                SectionBody::Lines(lines) => {
                    for line in lines {
                        out.push(body_line(line));
                    }
                }
            }
        }
        Block::Checklist { items } => {
            for item in items {
                out.push(checklist_line(item, checklist, cursor_id, ""));
            }
        }
        Block::Label { label, value, rule } => {
            out.push(label_line(label, value, Some(rule.icon), rule.color, ""));
        }
        Block::LabelGroup {
            label,
            value,
            rule,
            continuation,
        } => {
            out.push(label_line(label, value, Some(rule.icon), rule.color, ""));
            for line in continuation {
                if line.is_empty() {
                    out.push(Line::default());
                } else {
                    let mut spans = vec![Span::raw("  ")];
                    spans.extend(inline_spans(line));
                    out.push(Line::from(spans));
                }
            }
        }
        Block::SimpleLabel { lines } => {
            for line in lines {
                match line {
                    LabeledLine::Label { label, value } => {
                        out.push(Line::from(vec![
                            Span::styled(
                                format!("{label}: "),
                                Style::default().add_modifier(Modifier::BOLD),
                            ),
                            Span::raw(value.clone()),
                        ]));
                    }
                    LabeledLine::Text(text) => out.push(Line::from(inline_spans(text))),
                }
            }
        }
        Block::List { items } => {
            for item in items {
                let mut spans = vec![Span::raw("• ")];
                spans.extend(inline_spans(item));
                out.push(Line::from(spans));
            }
        }
        Block::Paragraph { text } => {
            for line in text.lines() {
                if line.is_empty() {
                    out.push(Line::default());
                } else {
                    out.push(Line::from(inline_spans(line)));
                }
            }
        }
    }
}

fn body_line(line: &BodyLine) -> Line<'static> {
    match line {
        BodyLine::Label { label, value, rule } => match rule {
            Some(rule) => label_line(label, value, Some(rule.icon), rule.color, "  "),
            None => Line::from(vec![
                Span::raw("  ".to_string()),
                Span::styled(
                    format!("{label}: "),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.clone()),
            ]),
        },
        BodyLine::Item(item) => {
            let mut spans = vec![Span::raw("  • ")];
            spans.extend(inline_spans(item));
            Line::from(spans)
        }
        BodyLine::Text(text) => {
            let mut spans = vec![Span::raw("  ")];
            spans.extend(inline_spans(text));
            Line::from(spans)
        }
    }
}

fn label_line(
    label: &str,
    value: &str,
    icon: Option<IconId>,
    color: ColorKey,
    indent: &str,
) -> Line<'static> {
    let mut spans = vec![Span::raw(indent.to_string())];
    if let Some(icon) = icon {
        spans.push(Span::raw(format!("{} ", glyph_for(icon))));
    }
    spans.push(Span::styled(
        format!("{label}: "),
        Style::default()
            .fg(color_for(color))
            .add_modifier(Modifier::BOLD),
    ));
    spans.push(Span::raw(value.to_string()));
    Line::from(spans)
}

fn checklist_line(
    item: &ChecklistItem,
    checklist: &ChecklistState,
    cursor_id: Option<&str>,
    indent: &str,
) -> Line<'static> {
    let checked = checklist.is_checked(&item.id).unwrap_or(item.checked);
    let marker = if checked { "[x] " } else { "[ ] " };

    let text_style = if checked {
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut line = Line::from(vec![
        Span::raw(indent.to_string()),
        Span::styled(marker, Style::default().fg(Color::Green)),
        Span::styled(item.text.clone(), text_style),
    ]);
    if cursor_id == Some(item.id.as_str()) {
        line.style = Style::default().bg(Color::Yellow).fg(Color::Black);
    }
    line
}

fn inline_spans(text: &str) -> Vec<Span<'static>> {
    scan_inline(text)
        .into_iter()
        .map(|span| match span {
            InlineSpan::Text(text) => Span::raw(text),
            InlineSpan::Bold(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::BOLD))
            }
            InlineSpan::Italic(text) => {
                Span::styled(text, Style::default().add_modifier(Modifier::ITALIC))
            }
        })
        .collect()
}

/// Terminal stand-ins for the icon identifiers.
fn glyph_for(icon: IconId) -> &'static str {
    match icon {
        IconId::MapPin => "📍",
        IconId::Clock => "🕐",
        IconId::Wallet => "💰",
        IconId::Coins => "🪙",
        IconId::Phone => "📞",
        IconId::Bus => "🚌",
        IconId::Train => "🚆",
        IconId::CalendarCheck => "📅",
        IconId::CalendarDays => "🗓️",
        IconId::Globe => "🌐",
        IconId::Lightbulb => "💡",
        IconId::AlertTriangle => "⚠️",
        IconId::UtensilsCrossed => "🍽️",
        IconId::Coffee => "☕",
        IconId::BedDouble => "🛏️",
        IconId::CloudSun => "⛅",
        IconId::Route => "🧭",
        IconId::Wifi => "📶",
        IconId::SquareParking => "🅿️",
        IconId::Ticket => "🎫",
        IconId::CheckSquare => "✅",
        IconId::ShoppingBag => "🛍️",
        IconId::Backpack => "🎒",
        IconId::Camera => "📷",
        IconId::Gift => "🎁",
    }
}

fn color_for(color: ColorKey) -> Color {
    match color {
        ColorKey::Primary => Color::Cyan,
        ColorKey::Success => Color::Green,
        ColorKey::Warning => Color::Yellow,
        ColorKey::Danger => Color::Red,
        ColorKey::Info => Color::Blue,
        ColorKey::Muted => Color::DarkGray,
    }
}
