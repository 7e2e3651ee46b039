//! Results view - the damage triple plus the derived-quantity breakdown

use crate::app::App;
use crate::format::{format_damage, format_factor};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let result = app.calc.result();
    let derived = app.calc.derived();

    let lines = vec![
        Line::from(Span::styled(
            "═══ Damage ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        format_output("Non-crit", format_damage(result.min_damage), Color::White),
        format_output("Crit", format_damage(result.max_damage), Color::Red),
        format_output("Expected", format_damage(result.expected_damage), Color::Yellow),
        Line::from(""),
        Line::from(Span::styled(
            "═══ Breakdown ═══",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        format_output("Enemy DEF", format!("{:.0}", derived.enemy_def), Color::Gray),
        format_output("DEF Multiplier", format_factor(derived.def_multiplier), Color::Gray),
        format_output("Base Damage", format!("{:.0}", derived.base_damage), Color::Gray),
        format_output("DMG Multiplier", format_factor(derived.damage_multiplier), Color::Gray),
        format_output("RES Multiplier", format_factor(derived.res_multiplier), Color::Gray),
        format_output(
            "Toughness",
            format_factor(derived.toughness_multiplier),
            Color::Gray,
        ),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Results "),
    );

    f.render_widget(paragraph, area);
}

fn format_output(label: &str, value: String, color: Color) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {label:<16}"), Style::default().fg(Color::White)),
        Span::styled(value, Style::default().fg(color).add_modifier(Modifier::BOLD)),
    ])
}
