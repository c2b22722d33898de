//! Rendering for the interactive display.
//!
//! Draws the scatter plot (one marker on a bounded canvas), the status bar
//! and the optional help overlay into a ratatui frame.

use chrono::DateTime;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    symbols,
    text::{Line, Span},
    widgets::{canvas::Canvas, Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::plot::context::{Marker, PlotContext};
use crate::plot::state::ViewState;
use crate::theme::Theme;

/// Glyph used for the marker: a filled circle.
pub const MARKER_SYMBOL: &str = "●";

/// Help text lines for the help overlay.
pub const HELP_LINES: &[&str] = &[
    "",
    "  Space   Pause / Resume",
    "  + / -   Speed up / down",
    "  ?       Show this help",
    "  q / Esc Close",
    "",
    "  Press any key to close",
];

/// Everything the status bar shows.
#[derive(Debug, Clone, Default)]
pub struct StatusInfo {
    pub marker: Option<Marker>,
    /// 1-based position of the last tick within the current pass
    pub position: Option<usize>,
    pub ticks_per_cycle: usize,
    pub cycle: u64,
    pub paused: bool,
    pub finished: bool,
    pub speed: f64,
    /// Capture time of the marker's frame, seconds since the Unix epoch
    pub captured_at: Option<f64>,
}

/// Build the status bar text.
pub fn format_status(info: &StatusInfo) -> String {
    let icon = if info.finished {
        "■"
    } else if info.paused {
        "⏸"
    } else {
        "▶"
    };

    let frame = match info.marker {
        Some(marker) => marker.frame.to_string(),
        None => "-".to_string(),
    };
    let position = info
        .position
        .map_or_else(|| "-".to_string(), |p| p.to_string());
    let coords = match info.marker {
        Some(marker) if marker.is_visible() => format!("x={:.2} z={:.2}", marker.x, marker.z),
        _ => "x=-- z=--".to_string(),
    };

    let mut status = format!(
        "{} frame {}  tick {}/{}  cycle {}  {}  spd:{:.1}x",
        icon, frame, position, info.ticks_per_cycle, info.cycle, coords, info.speed
    );
    if let Some(captured) = info.captured_at.and_then(format_capture_time) {
        status.push_str("  at ");
        status.push_str(&captured);
    }
    status.push_str("  ? help");
    status
}

/// Format a capture timestamp as UTC wall-clock time with milliseconds.
pub fn format_capture_time(seconds: f64) -> Option<String> {
    if !seconds.is_finite() || seconds < 0.0 {
        return None;
    }
    let secs = seconds.trunc() as i64;
    let nanos = (seconds.fract() * 1e9).round().min(999_999_999.0) as u32;
    DateTime::from_timestamp(secs, nanos).map(|t| t.format("%H:%M:%S%.3f").to_string())
}

/// Draw the whole display.
pub fn draw(
    frame: &mut Frame,
    ctx: &PlotContext,
    status: &StatusInfo,
    show_help: bool,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(ViewState::STATUS_LINES),
        ])
        .split(frame.area());

    frame.render_widget(Block::default().style(theme.background_style()), frame.area());
    draw_plot(frame, chunks[0], ctx, theme);

    let status_bar = Paragraph::new(format_status(status)).style(theme.text_style());
    frame.render_widget(status_bar, chunks[1]);

    if show_help {
        draw_help(frame, theme);
    }
}

/// Draw the bounded canvas with the marker on it.
fn draw_plot(frame: &mut Frame, area: Rect, ctx: &PlotContext, theme: &Theme) {
    let bounds = ctx.bounds();
    let marker = ctx.marker().copied().filter(Marker::is_visible);
    let marker_style = theme.marker_style();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(Span::styled(
            format!(" {} position (x, z) ", ctx.player()),
            theme.accent_bold_style(),
        ))
        .title_bottom(Line::styled(
            format!(
                " x [{:.2}, {:.2}]  z [{:.2}, {:.2}] ",
                bounds.x[0], bounds.x[1], bounds.z[0], bounds.z[1]
            ),
            theme.text_secondary_style(),
        ));

    let canvas = Canvas::default()
        .block(block)
        .marker(symbols::Marker::Braille)
        .background_color(theme.background)
        .x_bounds(bounds.x)
        .y_bounds(bounds.z)
        .paint(move |c| {
            if let Some(m) = marker {
                c.print(m.x, m.z, Span::styled(MARKER_SYMBOL, marker_style));
            }
        });

    frame.render_widget(canvas, area);
}

/// Draw the help overlay centered over the plot.
fn draw_help(frame: &mut Frame, theme: &Theme) {
    let area = centered_rect(50, 50, frame.area());
    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|line| Line::styled(*line, theme.text_style()))
        .collect();

    let help = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(theme.accent_style())
            .title(Span::styled(" Help ", theme.accent_bold_style())),
    );

    frame.render_widget(Clear, area);
    frame.render_widget(help, area);
}

/// Create a centered rect taking the given percentage of `area`.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical_layout[1])[1]
}
