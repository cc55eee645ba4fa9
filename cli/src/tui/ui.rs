use modelman_core::{StatusKind, Theme, DISCOVERABLE_MODELS};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Tabs},
    Frame,
};

use super::app::{App, AppMode, Tab};

/// Theme-dependent palette consumed by every widget.
struct Palette {
    fg: Color,
    dim: Color,
    highlight: Color,
    accent: Color,
}

fn palette(theme: Theme) -> Palette {
    match theme {
        Theme::Dark => Palette {
            fg: Color::White,
            dim: Color::DarkGray,
            highlight: Color::Cyan,
            accent: Color::Green,
        },
        Theme::Light => Palette {
            fg: Color::Black,
            dim: Color::Gray,
            highlight: Color::Blue,
            accent: Color::Green,
        },
    }
}

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tabs
            Constraint::Min(0),    // Content
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    draw_tabs(f, app, chunks[0]);
    draw_content(f, app, chunks[1]);
    draw_status_bar(f, app, chunks[2]);
}

fn draw_tabs(f: &mut Frame, app: &App, area: Rect) {
    let p = palette(app.theme());
    let titles = vec!["Local", "Discover"];
    let selected = match app.current_tab {
        Tab::Local => 0,
        Tab::Discover => 1,
    };

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" modelman "))
        .select(selected)
        .style(Style::default().fg(p.fg))
        .highlight_style(Style::default().fg(p.highlight).add_modifier(Modifier::BOLD));

    f.render_widget(tabs, area);
}

fn draw_content(f: &mut Frame, app: &App, area: Rect) {
    match app.current_tab {
        Tab::Local => draw_local_tab(f, app, area),
        Tab::Discover => draw_discover_tab(f, app, area),
    }
}

fn draw_local_tab(f: &mut Frame, app: &App, area: Rect) {
    let p = palette(app.theme());

    if app.state.models.is_empty() {
        let message = Paragraph::new(vec![
            Line::from(""),
            Line::from("No models on the backend yet.").centered(),
            Line::from("").centered(),
            Line::from("Switch to the Discover tab and press Enter to pull one.").centered(),
            Line::from("Or use: modelman pull <model-name>").centered(),
        ])
        .block(Block::default().borders(Borders::ALL).title(" Local models "));
        f.render_widget(message, area);
        return;
    }

    let items: Vec<ListItem> = app
        .state
        .models
        .iter()
        .enumerate()
        .map(|(i, model)| {
            let style = if i == app.selected_local {
                Style::default().fg(p.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.fg)
            };

            let size = format_size(model.size);
            let digest: String = model.digest.chars().take(12).collect();
            let content = Line::from(vec![
                Span::styled(if i == app.selected_local { "> " } else { "  " }, style),
                Span::styled(&model.name, style),
                Span::raw("  "),
                Span::styled(digest, Style::default().fg(p.dim)),
                Span::raw("  "),
                Span::styled(size, Style::default().fg(p.accent)),
                Span::raw("  "),
                Span::styled(
                    model.modified_at.format("%Y-%m-%d").to_string(),
                    Style::default().fg(p.dim),
                ),
            ]);

            ListItem::new(content)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Local models (r: refresh) "),
    );

    f.render_widget(list, area);
}

fn draw_discover_tab(f: &mut Frame, app: &App, area: Rect) {
    let p = palette(app.theme());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    // Free-text model name input
    let input_style = if app.mode == AppMode::Input {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(p.fg)
    };

    let input_text = if app.mode == AppMode::Input {
        format!("{}▋", app.state.pending_name)
    } else if app.state.pending_name.is_empty() {
        "Press 'i' to type a model name...".to_string()
    } else {
        app.state.pending_name.clone()
    };

    let input = Paragraph::new(input_text)
        .style(input_style)
        .block(Block::default().borders(Borders::ALL).title(" Pull by name "));

    f.render_widget(input, chunks[0]);

    let items: Vec<ListItem> = DISCOVERABLE_MODELS
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let style = if i == app.selected_discoverable {
                Style::default().fg(p.highlight).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(p.fg)
            };

            let installed = app.state.models.iter().any(|m| m.name == *name);
            let marker = if app.state.pulling_target == *name {
                Span::styled("pulling...", Style::default().fg(Color::Yellow))
            } else if installed {
                Span::styled("installed", Style::default().fg(p.accent))
            } else {
                Span::raw("")
            };

            let content = Line::from(vec![
                Span::styled(
                    if i == app.selected_discoverable { "> " } else { "  " },
                    style,
                ),
                Span::styled(*name, style),
                Span::raw("  "),
                marker,
            ]);

            ListItem::new(content)
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Discover (Enter: pull) "),
    );

    f.render_widget(list, chunks[1]);
}

fn draw_status_bar(f: &mut Frame, app: &App, area: Rect) {
    let p = palette(app.theme());

    let (status_text, status_style) = match &app.state.status {
        Some(status) => {
            let color = match status.kind {
                StatusKind::Info => Color::Yellow,
                StatusKind::Success => p.accent,
                StatusKind::Error => Color::Red,
            };
            (status.text.as_str(), Style::default().fg(color))
        }
        None => ("", Style::default().fg(p.dim)),
    };

    let busy_indicator = if app.state.busy { "⏳ " } else { "" };

    let help_text = match app.mode {
        AppMode::Normal => " q: quit | Tab: switch | j/k: navigate | Enter: pull | r: refresh | i: type name | t: theme ",
        AppMode::Input => " Enter: pull | Esc: cancel ",
    };

    let status = Paragraph::new(Line::from(vec![
        Span::styled(busy_indicator, Style::default().fg(Color::Yellow)),
        Span::styled(status_text, status_style),
        Span::raw("  "),
        Span::styled(help_text, Style::default().fg(p.dim)),
    ]))
    .block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}

fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.1}GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.1}MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1}KB", bytes as f64 / KB as f64)
    } else {
        format!("{}B", bytes)
    }
}
