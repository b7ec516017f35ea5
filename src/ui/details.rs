//! Details screen for one boss, with the weapon stats popup.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Gauge, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;

use super::helpers::{centered_rect, pagination_dots, spinner_frame, star_spans};
use super::theme::{weapon_color, Palette, COLOR_HEALTH, COLOR_HEALTH_TRACK, COLOR_POPUP_BG};
use crate::app::{App, DetailsState};
use crate::models::Weapon;
use crate::views::{health_ratio, star_render_plan, weapon_lookup, MAX_HEALTH};

pub fn render_details(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let Some(details) = &app.details else {
        return;
    };
    let boss = &details.boss;

    let [carousel_area, stats_area, text_area, weapons_area] = Layout::vertical([
        Constraint::Length(5),
        Constraint::Length(3),
        Constraint::Min(3),
        Constraint::Length(weapons_height(details)),
    ])
    .areas(area);

    render_carousel(frame, carousel_area, details, palette);
    render_stats(frame, stats_area, app, details, palette);

    let mut lines = vec![Line::from(Span::styled(
        boss.description.clone(),
        Style::default().fg(palette.text),
    ))];
    for (label, value) in [("Appearance", &boss.appearance), ("Personality", &boss.personality)] {
        if let Some(value) = value {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled(
                    format!("{}: ", label),
                    Style::default().fg(palette.accent).add_modifier(Modifier::BOLD),
                ),
                Span::raw(value.clone()),
            ]));
        }
    }
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(Block::default().borders(Borders::TOP).border_style(Style::default().fg(palette.dim))),
        text_area,
    );

    render_weapons(frame, weapons_area, app, details, palette);

    if let Some(weapon) = details.selected_weapon.and_then(|id| app.weapons.get(id)) {
        render_weapon_popup(frame, area, weapon, palette);
    }
}

fn weapons_height(details: &DetailsState) -> u16 {
    let rows = details.boss.recommended_weapons.len().max(1) as u16;
    rows.saturating_add(2).min(8)
}

fn render_carousel(frame: &mut Frame, area: Rect, details: &DetailsState, palette: &Palette) {
    let boss = &details.boss;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = boss
        .images
        .get(details.image_index)
        .or(boss.cover_image.as_ref())
        .map(|key| format!("[ {} ]", key))
        .unwrap_or_else(|| "[ no image ]".to_string());

    let mut lines = vec![Line::from(Span::styled(
        current,
        Style::default().fg(palette.text).add_modifier(Modifier::BOLD),
    ))
    .centered()];
    if boss.images.len() > 1 {
        lines.push(
            Line::from(Span::styled(
                pagination_dots(boss.images.len(), details.image_index),
                Style::default().fg(palette.dim),
            ))
            .centered(),
        );
    }
    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_stats(frame: &mut Frame, area: Rect, app: &App, details: &DetailsState, palette: &Palette) {
    let boss = &details.boss;
    let [difficulty_area, health_area] =
        Layout::horizontal([Constraint::Length(24), Constraint::Min(0)]).areas(area);

    let favorite = if app.preferences.is_favorite(boss.id) {
        Span::styled(" ♥", Style::default().fg(palette.star))
    } else {
        Span::styled(" ♡", Style::default().fg(palette.dim))
    };
    let mut spans = star_spans(star_render_plan(boss.difficulty), palette);
    spans.push(Span::styled(format!(" {}", boss.isle.title()), Style::default().fg(palette.dim)));
    spans.push(favorite);
    frame.render_widget(
        Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::ALL).title(" Difficulty ")),
        difficulty_area,
    );

    // No bar at all when the catalog has no health for this boss
    if let (Some(ratio), Some(health)) = (health_ratio(boss.health, MAX_HEALTH), boss.health) {
        let gauge = Gauge::default()
            .block(Block::default().borders(Borders::ALL).title(" Health "))
            .gauge_style(Style::default().fg(COLOR_HEALTH).bg(COLOR_HEALTH_TRACK))
            .ratio(ratio)
            .label(format!("{} HP", health));
        frame.render_widget(gauge, health_area);
    }
}

fn render_weapons(frame: &mut Frame, area: Rect, app: &App, details: &DetailsState, palette: &Palette) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent))
        .title(" Recommended weapons ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let ids = &details.boss.recommended_weapons;
    if ids.is_empty() {
        frame.render_widget(
            Paragraph::new("None").style(Style::default().fg(palette.dim)),
            inner,
        );
        return;
    }

    let items: Vec<ListItem> = weapon_lookup(&app.weapons, ids)
        .into_iter()
        .zip(ids)
        .map(|(weapon, id)| match weapon {
            Some(weapon) => ListItem::new(Line::from(vec![
                Span::styled("■ ", Style::default().fg(weapon_color(&weapon.color))),
                Span::styled(weapon.name.clone(), Style::default().fg(palette.text)),
            ])),
            None if app.weapons_loading() => ListItem::new(Span::styled(
                format!("{} weapon {}", spinner_frame(app.tick_count), id),
                Style::default().fg(palette.dim),
            )),
            None => ListItem::new(Span::styled(
                format!("  unknown weapon {}", id),
                Style::default().fg(palette.dim),
            )),
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().bg(palette.surface));
    let mut state = ListState::default().with_selected(Some(details.weapon_cursor));
    frame.render_stateful_widget(list, inner, &mut state);
}

fn render_weapon_popup(frame: &mut Frame, area: Rect, weapon: &Weapon, palette: &Palette) {
    let popup = centered_rect(36, 8, area);
    frame.render_widget(Clear, popup);

    let color = weapon_color(&weapon.color);
    let stat = |label: &str, value: f64| {
        Line::from(vec![
            Span::styled(format!("{:<10}", label), Style::default().fg(palette.dim)),
            Span::styled(format!("{}", value), Style::default().fg(ratatui::style::Color::White)),
        ])
    };

    let lines = vec![
        Line::from(Span::styled(
            weapon.name.clone(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ))
        .centered(),
        Line::default(),
        stat("Damage", weapon.damage),
        stat("EX", weapon.ex_damage),
        stat("DPS", weapon.dps),
    ];

    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(COLOR_POPUP_BG)),
        ),
        popup,
    );
}
