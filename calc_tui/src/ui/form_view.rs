//! Input form view - attacker and enemy parameter cards

use crate::app::{App, ENEMY_SECTION_START, FORM_FIELDS};
use calc_core::Field;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let mut lines = vec![Line::from(Span::styled(
        "═══ Attacker ═══",
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    ))];

    for (i, field) in FORM_FIELDS.iter().enumerate() {
        if i == ENEMY_SECTION_START {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                "═══ Enemy ═══",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )));
        }
        lines.push(format_row(app, *field, i == app.selected));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Parameters "),
    );

    f.render_widget(paragraph, area);
}

fn format_row(app: &App, field: Field, selected: bool) -> Line<'static> {
    let marker = if selected { "▶ " } else { "  " };
    let label_style = if selected {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let value_span = if field == Field::Broken {
        let checked = if app.calc.params().broken { "[x]" } else { "[ ]" };
        Span::styled(checked.to_string(), Style::default().fg(Color::Magenta))
    } else {
        let editing_here = app.editing && selected;
        let text = format!(
            "{}{}{}",
            app.display_value(field),
            if editing_here { "_" } else { "" },
            App::field_suffix(field),
        );
        let style = if editing_here {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        Span::styled(text, style)
    };

    Line::from(vec![
        Span::styled(marker.to_string(), label_style),
        Span::styled(format!("{:<18}", App::field_label(field)), label_style),
        value_span,
    ])
}
