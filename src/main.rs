//! Teesmith - terminal t-shirt customizer
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine over the shared shirt store
//! - Network Layer (Tokio) - generation requests and file decodes

mod app;
mod constants;
mod decals;
mod messages;
mod network;
mod store;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use constants::PALETTE;
use decals::FilterTab;
use messages::ui_events::{key_to_ui_event, EditorTool};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::NetworkActor;
use store::Screen;
use ui::{decal_label, hex_to_color};

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "teesmith.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx);
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor, wiring a store observer first. This subscription is
    // where a rendering surface would attach; here it feeds the log.
    let mut app_actor = AppActor::new(net_cmd_tx, render_tx);
    let mut shirt_rx = app_actor.subscribe_store();
    tokio::spawn(async move {
        while let Some(shirt) = shirt_rx.recv().await {
            tracing::debug!(
                color = %shirt.color,
                logo = shirt.logo_texture,
                full = shirt.full_texture,
                "shirt state changed"
            );
        }
    });
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.shirt.screen,
                    current_state.active_tool,
                    current_state.alert.is_some(),
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    match state.shirt.screen {
        Screen::Intro => draw_home(f, state, area),
        Screen::Customizing => draw_customizer(f, state, area),
    }

    if state.show_help {
        draw_help_popup(f, area);
    }

    if let Some(message) = &state.alert {
        draw_alert_popup(f, message, area);
    }
}

fn draw_home(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Min(9),
            Constraint::Percentage(25),
        ])
        .split(area);

    let accent = hex_to_color(&state.shirt.color);

    let lines = vec![
        Line::from(Span::styled(
            "DISCOVER YOUR STYLE.",
            Style::default().fg(accent).bold(),
        )),
        Line::from(""),
        Line::from("Craft one-of-a-kind t-shirts with our customization tool."),
        Line::from("Empower your creativity and express your distinct style."),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                " Customize It ",
                Style::default().fg(Color::Black).bg(accent).bold(),
            ),
            Span::styled("  (press Enter)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "?:help  q:quit",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let home = Paragraph::new(lines).alignment(Alignment::Center);
    f.render_widget(home, chunks[1]);
}

fn draw_customizer(f: &mut Frame, state: &RenderState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(8),    // Tool pane + preview
            Constraint::Length(3), // Filter tabs
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let header = Line::from(vec![
        Span::styled(" Teesmith ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw(" customizer"),
    ]);
    f.render_widget(Paragraph::new(header), chunks[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(38), Constraint::Min(20)])
        .split(chunks[1]);

    draw_tool_pane(f, state, middle[0]);
    draw_preview(f, state, middle[1]);
    draw_filter_bar(f, state, chunks[2]);
    draw_status_bar(f, state, chunks[3]);
}

fn draw_tool_pane(f: &mut Frame, state: &RenderState, area: Rect) {
    let is_open = state.active_tool.is_some();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if is_open {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        })
        .title(" Editor Tools ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(3)])
        .split(inner);

    // Tool tab row
    let tools = [
        EditorTool::ColorPicker,
        EditorTool::FilePicker,
        EditorTool::ImageGenerator,
    ];
    let mut spans = Vec::new();
    for (i, tool) in tools.iter().enumerate() {
        let label = format!(" {}:{} ", i + 1, tool.label());
        let style = if state.active_tool == Some(*tool) {
            Style::default().fg(Color::Black).bg(Color::Cyan).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }
    f.render_widget(Paragraph::new(Line::from(spans)), chunks[0]);

    match state.active_tool {
        Some(EditorTool::ColorPicker) => draw_color_picker(f, state, chunks[1]),
        Some(EditorTool::FilePicker) => {
            draw_text_picker(f, chunks[1], " File path ", &state.file_path, state.target, "Enter:upload");
        }
        Some(EditorTool::ImageGenerator) => {
            let action = if state.is_generating {
                "generating..."
            } else {
                "Enter:generate"
            };
            draw_text_picker(f, chunks[1], " Prompt ", &state.prompt, state.target, action);
        }
        None => {
            let hint = Paragraph::new("Open a tool with 1, 2 or 3.")
                .style(Style::default().fg(Color::DarkGray))
                .wrap(Wrap { trim: false });
            f.render_widget(hint, chunks[1]);
        }
    }
}

fn draw_color_picker(f: &mut Frame, state: &RenderState, area: Rect) {
    let mut lines = Vec::new();
    let mut row = Vec::new();
    for (i, hex) in PALETTE.iter().enumerate() {
        let swatch = if i == state.palette_index {
            Span::styled("[██]", Style::default().fg(hex_to_color(hex)).bold())
        } else {
            Span::styled(" ██ ", Style::default().fg(hex_to_color(hex)))
        };
        row.push(swatch);
        if row.len() == 6 {
            lines.push(Line::from(std::mem::take(&mut row)));
        }
    }
    if !row.is_empty() {
        lines.push(Line::from(row));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::raw("selected: "),
        Span::styled(
            PALETTE[state.palette_index],
            Style::default().fg(hex_to_color(PALETTE[state.palette_index])),
        ),
    ]));
    lines.push(Line::from(Span::styled(
        "arrows:pick  Enter/Esc:done",
        Style::default().fg(Color::DarkGray),
    )));

    f.render_widget(Paragraph::new(lines), area);
}

fn draw_text_picker(
    f: &mut Frame,
    area: Rect,
    title: &str,
    input: &str,
    target: &str,
    action: &str,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(1)])
        .split(area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(title.to_string());
    f.render_widget(Paragraph::new(input).block(block), chunks[0]);

    // Cursor at end of input, clamped to the box
    let max_x = chunks[0].x + chunks[0].width.saturating_sub(2);
    let cursor_x = (chunks[0].x + input.len() as u16 + 1).min(max_x);
    f.set_cursor_position(Position::new(cursor_x, chunks[0].y + 1));

    let info = vec![
        Line::from(vec![
            Span::raw("target decal: "),
            Span::styled(target.to_string(), Style::default().fg(Color::Cyan).bold()),
            Span::styled("  (Tab switches)", Style::default().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("{action}  Esc:close"),
            Style::default().fg(Color::DarkGray),
        )),
    ];
    f.render_widget(Paragraph::new(info), chunks[1]);
}

fn draw_preview(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default().borders(Borders::ALL).title(" Preview ");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let shirt = &state.shirt;
    let c = hex_to_color(&shirt.color);
    let body = Style::default().fg(c);

    let mut lines = vec![
        Line::from(Span::styled("  ██▄  ▄▄▄▄▄▄  ▄██  ", body)),
        Line::from(Span::styled("  ████████████████  ", body)),
        Line::from(Span::styled("  ▀██▀██████████▀██▀ ", body)),
        Line::from(Span::styled("     ████████████    ", body)),
        Line::from(Span::styled("     ████████████    ", body)),
        Line::from(Span::styled("     ▀▀▀▀▀▀▀▀▀▀▀▀    ", body)),
        Line::from(""),
        Line::from(vec![Span::raw("color: "), Span::styled(shirt.color.clone(), body)]),
    ];

    let decal_line = |name: &str, shown: bool, image: &str| {
        let marker = if shown {
            Span::styled("[shown] ", Style::default().fg(Color::Green))
        } else {
            Span::styled("[hidden]", Style::default().fg(Color::DarkGray))
        };
        Line::from(vec![
            Span::raw(format!("{name:<10}")),
            marker,
            Span::raw(" "),
            Span::styled(decal_label(image, 24), Style::default().fg(Color::Gray)),
        ])
    };
    lines.push(decal_line("logo", shirt.logo_texture, &shirt.logo_decal));
    lines.push(decal_line("full wrap", shirt.full_texture, &shirt.full_decal));

    if state.is_generating {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "generating image...",
            Style::default().fg(Color::Yellow),
        )));
    }

    f.render_widget(Paragraph::new(lines).alignment(Alignment::Left), inner);
}

fn draw_filter_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Filter Tabs (l/f:toggle r:reset) ");

    let tab = |label: &str, active: bool, color: Color| {
        if active {
            Span::styled(format!(" {label} "), Style::default().fg(Color::Black).bg(color).bold())
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(Color::Gray))
        }
    };

    let line = Line::from(vec![
        tab(FilterTab::Logo.label(), state.shirt.logo_texture, Color::Cyan),
        Span::raw(" "),
        tab(
            FilterTab::FullTexture.label(),
            state.shirt.full_texture,
            Color::Magenta,
        ),
    ]);
    f.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let status = if state.is_generating {
        " Generating... "
    } else {
        match state.active_tool {
            None => " 1/2/3:tools | l/f:tabs r:reset | b:back ?:help q:quit ",
            Some(EditorTool::ColorPicker) => " arrows:pick color | Enter/Esc:done ",
            Some(EditorTool::FilePicker) => " type a path | Tab:target Enter:upload Esc:close ",
            Some(EditorTool::ImageGenerator) => " type a prompt | Tab:target Enter:generate Esc:close ",
        }
    };

    let bar = Paragraph::new(status).style(Style::default().fg(Color::DarkGray));
    f.render_widget(bar, area);
}

fn draw_alert_popup(f: &mut Frame, message: &str, area: Rect) {
    let popup_area = centered_rect(50, 20, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Notice ")
        .style(Style::default().bg(Color::Black));

    let text = format!("{message}\n\nPress any key to dismiss.");
    let alert = Paragraph::new(text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(alert, popup_area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = r#"
 TEESMITH - Keyboard Shortcuts

 INTRO
   Enter / c          Start customizing

 CUSTOMIZER
   1                  Color picker
   2                  File picker (upload artwork)
   3                  Image generator (text prompt)
   l / f              Toggle logo / full-texture tab
   r                  Reset tabs (logo on, full off)
   b / Esc            Back to intro

 PICKERS
   Tab                Switch target decal (logo/full)
   Enter              Apply / submit
   Esc                Close tool

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text).block(block).wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

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
