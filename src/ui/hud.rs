use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::config::Theme;
use crate::game::Snapshot;

const HUD_SEPARATOR: &str = " │ ";

/// Labelled HUD values in display order.
struct HudField {
    label: &'static str,
    short_label: &'static str,
    value: String,
    highlight: bool,
}

/// Renders the one-line HUD and returns the remaining area above it.
#[must_use]
pub fn render_hud(frame: &mut Frame<'_>, area: Rect, snapshot: &Snapshot, theme: &Theme) -> Rect {
    let [board_area, hud_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

    let fields = hud_fields(snapshot);
    let compact = line_width(&fields, false) > usize::from(hud_area.width);

    frame.render_widget(
        Paragraph::new(hud_line(&fields, compact, theme))
            .alignment(Alignment::Center)
            .style(Style::default().fg(theme.hud_muted)),
        hud_area,
    );

    board_area
}

fn hud_fields(snapshot: &Snapshot) -> Vec<HudField> {
    let record = snapshot.score > 0 && snapshot.score >= snapshot.high_score;
    vec![
        HudField {
            label: "Score",
            short_label: "S",
            value: snapshot.score.to_string(),
            highlight: record,
        },
        HudField {
            label: "Hi",
            short_label: "H",
            value: snapshot.high_score.max(snapshot.score).to_string(),
            highlight: record,
        },
        HudField {
            label: "Length",
            short_label: "L",
            value: snapshot.snake_len().to_string(),
            highlight: false,
        },
        HudField {
            label: "Tick",
            short_label: "T",
            value: format!("{}ms", snapshot.tick_interval.as_millis()),
            highlight: false,
        },
    ]
}

fn hud_line(fields: &[HudField], compact: bool, theme: &Theme) -> Line<'static> {
    let mut spans = Vec::with_capacity(fields.len() * 3);
    for (index, field) in fields.iter().enumerate() {
        if index > 0 {
            spans.push(Span::raw(HUD_SEPARATOR));
        }
        let label = if compact { field.short_label } else { field.label };
        let color = if field.highlight {
            theme.hud_accent
        } else {
            theme.hud_value
        };
        spans.push(Span::raw(format!("{label}: ")));
        spans.push(Span::styled(field.value.clone(), Style::default().fg(color)));
    }
    Line::from(spans)
}

fn line_width(fields: &[HudField], compact: bool) -> usize {
    let separators = HUD_SEPARATOR.width() * fields.len().saturating_sub(1);
    fields
        .iter()
        .map(|field| {
            let label = if compact { field.short_label } else { field.label };
            label.width() + 2 + field.value.width()
        })
        .sum::<usize>()
        + separators
}
