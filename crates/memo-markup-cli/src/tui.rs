//! Full-screen previewer: the rendered note on one tab, the styled source on the other.

use anyhow::Result;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use memo_markup_engine::{
    DisplayBlock, Document, InlineStyle, ListMarker, OffsetUnit, RenderOptions, StyledText,
    TextAttributes, parse, render_blocks, render_styled_runs,
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};
use std::{
    io::{Stdout, stdout},
    path::Path,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tab {
    Preview,
    Source,
}

struct App {
    title: String,
    preview: Vec<Line<'static>>,
    source: Vec<Line<'static>>,
    tab: Tab,
    scroll: u16,
}

impl App {
    fn new(path: &Path, text: String, options: &RenderOptions) -> Self {
        let doc = parse(&text);
        let title = doc
            .title()
            .unwrap_or_else(|| path.display().to_string());
        Self {
            title,
            preview: preview_lines(&render_blocks(&doc, &options.display)),
            source: source_lines(&doc),
            tab: Tab::Preview,
            scroll: 0,
        }
    }

    fn lines(&self) -> &[Line<'static>] {
        match self.tab {
            Tab::Preview => &self.preview,
            Tab::Source => &self.source,
        }
    }

    fn switch_tab(&mut self) {
        self.tab = match self.tab {
            Tab::Preview => Tab::Source,
            Tab::Source => Tab::Preview,
        };
        self.scroll = 0;
    }

    fn scroll_down(&mut self) {
        let max = self.lines().len().saturating_sub(1);
        if usize::from(self.scroll) < max {
            self.scroll = self.scroll.saturating_add(1);
        }
    }

    fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }
}

fn inline_style(style: Option<InlineStyle>) -> Style {
    match style {
        None => Style::default(),
        Some(InlineStyle::Bold) => Style::default().add_modifier(Modifier::BOLD),
        Some(InlineStyle::Italic) => Style::default().add_modifier(Modifier::ITALIC),
        Some(InlineStyle::Code) => Style::default().fg(Color::Yellow),
    }
}

fn styled_spans(text: &StyledText, base: Style) -> Vec<Span<'static>> {
    text.runs()
        .into_iter()
        .map(|run| Span::styled(run.text, base.patch(inline_style(run.style))))
        .collect()
}

fn preview_lines(blocks: &[DisplayBlock]) -> Vec<Line<'static>> {
    let mut lines = vec![];
    for block in blocks {
        match block {
            DisplayBlock::Heading { level, text } => {
                let mut base = Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD);
                if *level == 1 {
                    base = base.add_modifier(Modifier::UNDERLINED);
                }
                lines.push(Line::from(styled_spans(text, base)));
            }
            DisplayBlock::Paragraph { text } => {
                lines.push(Line::from(styled_spans(text, Style::default())));
            }
            DisplayBlock::Quote { text } => {
                let base = Style::default()
                    .fg(Color::Gray)
                    .add_modifier(Modifier::ITALIC);
                let mut spans = vec![Span::styled("│ ", Style::default().fg(Color::Blue))];
                spans.extend(styled_spans(text, base));
                lines.push(Line::from(spans));
            }
            DisplayBlock::ListItem { marker, text } => {
                let marker = match marker {
                    ListMarker::Bullet => "•".to_string(),
                    ListMarker::Number(number) => number.clone(),
                };
                let mut spans = vec![Span::raw(format!("{marker} "))];
                spans.extend(styled_spans(text, Style::default()));
                lines.push(Line::from(spans));
            }
            DisplayBlock::Divider => {
                lines.push(Line::styled("─".repeat(40), Style::default().fg(Color::DarkGray)));
            }
            // Terminal rows are the smallest unit of height.
            DisplayBlock::Spacer { .. } => lines.push(Line::default()),
            DisplayBlock::CodeBlock { info, code } => {
                let code_style = Style::default().fg(Color::Yellow);
                if let Some(info) = info {
                    lines.push(Line::styled(
                        format!("  [{info}]"),
                        Style::default().fg(Color::DarkGray),
                    ));
                }
                lines.extend(
                    code.split('\n')
                        .map(|line| Line::styled(format!("  {line}"), code_style)),
                );
            }
        }
    }
    lines
}

fn attribute_style(attributes: &TextAttributes) -> Style {
    let mut style = Style::default();
    if attributes.heading.is_some() {
        style = style.fg(Color::Cyan).add_modifier(Modifier::BOLD);
    }
    if attributes.quote {
        style = style.fg(Color::Gray).add_modifier(Modifier::ITALIC);
    }
    if attributes.code || attributes.code_block {
        style = style.fg(Color::Yellow);
    }
    if attributes.bold {
        style = style.add_modifier(Modifier::BOLD);
    }
    if attributes.italic {
        style = style.add_modifier(Modifier::ITALIC);
    }
    if attributes.syntax || attributes.rule {
        style = style.fg(Color::DarkGray);
    }
    style
}

/// One line per source line, painted with byte-offset styled runs.
fn source_lines(doc: &Document) -> Vec<Line<'static>> {
    let runs = render_styled_runs(doc, OffsetUnit::Utf8);
    let mut runs = runs.iter().peekable();

    doc.blocks
        .iter()
        .map(|block| {
            let local = |byte: usize| byte - block.line.start;
            let mut spans = vec![];
            let mut at = block.line.start;
            while let Some(run) = runs.next_if(|run| run.range.end <= block.line.end) {
                if run.range.start > at {
                    spans.push(Span::raw(
                        block.text[local(at)..local(run.range.start)].to_string(),
                    ));
                }
                spans.push(Span::styled(
                    block.text[local(run.range.start)..local(run.range.end)].to_string(),
                    attribute_style(&run.attributes),
                ));
                at = run.range.end;
            }
            if at < block.line.end {
                spans.push(Span::raw(block.text[local(at)..].to_string()));
            }
            Line::from(spans)
        })
        .collect()
}

pub fn run(path: &Path, text: String, options: &RenderOptions) -> Result<()> {
    let mut app = App::new(path, text, options);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            match key.code {
                KeyCode::Char('q') => return Ok(()),
                KeyCode::Tab => app.switch_tab(),
                KeyCode::Down | KeyCode::Char('j') => app.scroll_down(),
                KeyCode::Up | KeyCode::Char('k') => app.scroll_up(),
                _ => {}
            }
        }
    }
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(f.area());

    let selected = match app.tab {
        Tab::Preview => 0,
        Tab::Source => 1,
    };
    let tabs = Tabs::new(vec!["Preview", "Source"])
        .block(Block::default().borders(Borders::ALL).title(app.title.clone()))
        .select(selected)
        .highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    f.render_widget(tabs, chunks[0]);

    let content = Paragraph::new(app.lines().to_vec())
        .block(Block::default().borders(Borders::ALL))
        .wrap(Wrap { trim: false })
        .scroll((app.scroll, 0));
    f.render_widget(content, chunks[1]);

    let help = Paragraph::new(Line::from(vec![
        Span::raw("q: Quit | "),
        Span::raw("Tab: Preview/Source | "),
        Span::raw("↑/k ↓/j: Scroll"),
    ]));
    f.render_widget(help, chunks[2]);
}
