//! Neon Clicker rendering: orb display, store, settings, particles, toasts.

use std::cell::RefCell;
use std::rc::Rc;

use ratzilla::ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratzilla::ratatui::style::{Color, Modifier, Style};
use ratzilla::ratatui::text::{Line, Span};
use ratzilla::ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratzilla::ratatui::Frame;

use crate::input::{is_narrow_layout, ClickState};
use crate::widgets::{ClickableList, TabBar};

use super::actions::*;
use super::logic::format_number;
use super::state::{
    tier_indices, GameState, ParticleStyle, Tier, Toast, ToastKind, CATALOG,
};

/// Neon orb art — 3 lines, shared across all screen sizes.
const ORB_ART: &[&[&str]] = &[
    &["  ╭─◉─╮  ", " ◉  ✦  ◉ ", "  ╰─◉─╯  "],
    &["  ╭─◎─╮  ", " ◎  ✧  ◎ ", "  ╰─◎─╯  "],
    &["  ╭─●─╮  ", " ●  ✦  ● ", "  ╰─●─╯  "],
    &["  ╭─◎─╮  ", " ◎  ✧  ◎ ", "  ╰─◎─╯  "],
];

/// Orb art — "pressed" state right after a click.
const ORB_CLICK_ART: &[&[&str]] = &[
    &[" ╭─◉◉◉─╮ ", " ◉◉ ✦ ◉◉ ", " ╰─◉◉◉─╯ "],
    &["   ╭─╮   ", "  ─✦✦─   ", "   ╰─╯   "],
];

/// Spinner characters for the auto-yield indicator.
const SPINNER: &[char] = &['◐', '◓', '◑', '◒'];

pub fn render(state: &GameState, f: &mut Frame, area: Rect, click_state: &Rc<RefCell<ClickState>>) {
    // Log panel on the right when wide enough
    let (main_area, log_area) = if !is_narrow_layout(area.width) {
        let h_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(area);
        (h_chunks[0], Some(h_chunks[1]))
    } else {
        (area, None)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(12), // orb display
            Constraint::Length(1),  // toast line
            Constraint::Min(7),     // store / settings / home panel
            Constraint::Length(3),  // help bar
        ])
        .split(main_area);

    render_orb_display(state, f, chunks[0], click_state);
    render_toast_line(state, f, chunks[1]);
    if state.show_settings {
        render_settings(state, f, chunks[2], click_state);
    } else if state.show_store {
        render_store(state, f, chunks[2], click_state);
    } else {
        render_home(state, f, chunks[2], click_state);
    }
    render_help(state, f, chunks[3], click_state);

    if let Some(log_area) = log_area {
        render_log(state, f, log_area);
    }
}

/// The clickable orb surface with score, yields, and floating particles.
fn render_orb_display(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let score_str = format_number(state.score);
    let spinner_idx = (state.anim_frame / 3) as usize % SPINNER.len();
    let spinner = if state.auto_yield > 0 {
        SPINNER[spinner_idx]
    } else {
        ' '
    };

    let orb_color = if state.click_flash > 0 {
        Color::White
    } else {
        Color::Magenta
    };
    let border_color = if state.purchase_flash > 0 {
        Color::White
    } else {
        Color::Magenta
    };
    let title = if state.purchase_flash > 0 {
        " ✦ ネオンクリッカー ✦ "
    } else {
        " ネオンクリッカー "
    };

    let orb_art = if state.click_flash > 0 {
        let idx = state.click_flash as usize % ORB_CLICK_ART.len();
        ORB_CLICK_ART[idx]
    } else {
        let idx = (state.anim_frame / 5) as usize % ORB_ART.len();
        ORB_ART[idx]
    };

    let click_style = if state.click_flash > 0 {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD | Modifier::REVERSED)
    } else {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    };
    let click_label = format!("[C] クリック +{}", format_number(state.per_click_yield));

    let mut lines: Vec<Line> = Vec::new();

    // Row 0: art + score
    let score_span = format!(" ⚡ {}", score_str);
    lines.push(Line::from(vec![
        Span::styled(orb_art[0], Style::default().fg(orb_color)),
        Span::styled(
            score_span,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]));

    // Row 1: art + auto yield
    let auto_span = if state.auto_yield > 0 {
        format!(" {} 毎秒 +{}", spinner, format_number(state.auto_yield))
    } else {
        "   毎秒 +0".to_string()
    };
    lines.push(Line::from(vec![
        Span::styled(orb_art[1], Style::default().fg(orb_color)),
        Span::styled(auto_span, Style::default().fg(Color::White)),
    ]));

    // Row 2: art + click button
    lines.push(Line::from(vec![
        Span::styled(orb_art[2], Style::default().fg(orb_color)),
        Span::styled(" ", Style::default()),
        Span::styled(click_label, click_style),
    ]));

    // Row 3: session stats
    lines.push(Line::from(vec![
        Span::styled(
            format!(" 👆{}", format_number(state.total_clicks)),
            Style::default().fg(Color::Cyan),
        ),
        Span::styled(
            format!("  ✦{}/{}ブースト", state.purchased_count(), CATALOG.len()),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    let widget = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .title(title),
    );
    f.render_widget(widget, area);

    render_particles(state, f, area);

    // The whole orb display is one big click surface
    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, CLICK_ORB);
}

/// Render floating "+N" particles over the orb display area.
fn render_particles(state: &GameState, f: &mut Frame, area: Rect) {
    let center_x = area.x + area.width / 2;
    let base_y = area.y + area.height;

    for particle in &state.particles {
        let progress = 1.0 - (particle.life as f32 / particle.max_life as f32);
        let rise = (progress * 5.0) as u16;
        let y = base_y.saturating_sub(2 + rise);
        let x = (center_x as i16 + particle.col_offset).max(area.x as i16) as u16;

        let color = match particle.style {
            ParticleStyle::Click => {
                if particle.life > particle.max_life * 2 / 3 {
                    Color::White
                } else if particle.life > particle.max_life / 3 {
                    Color::Magenta
                } else {
                    Color::DarkGray
                }
            }
            ParticleStyle::Auto => {
                if particle.life > particle.max_life / 2 {
                    Color::Cyan
                } else {
                    Color::DarkGray
                }
            }
        };

        if y <= area.y || y >= base_y {
            continue;
        }
        let max_w = (area.x + area.width).saturating_sub(x);
        if max_w == 0 {
            continue;
        }
        let text: String = particle.text.chars().take(max_w as usize).collect();
        let w = text.chars().count() as u16;
        let rect = Rect::new(x, y, w, 1);
        f.render_widget(
            Paragraph::new(Span::styled(
                text,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            rect,
        );
    }
}

/// One-line toast between the orb and the panels.
fn render_toast_line(state: &GameState, f: &mut Frame, area: Rect) {
    let Some(Toast {
        text,
        kind,
        ticks_left,
    }) = &state.toast
    else {
        return;
    };

    let color = match kind {
        ToastKind::Success => Color::Green,
        ToastKind::Error => Color::Red,
        ToastKind::Info => Color::Cyan,
    };
    // Fade out: drop the bold in the final ticks
    let style = if *ticks_left > 5 {
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(color)
    };
    let widget = Paragraph::new(Line::from(Span::styled(format!("▸ {}", text), style)))
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}

/// Default panel: session overview plus store/settings entry points.
fn render_home(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(vec![
        Span::styled("クリック +", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_number(state.per_click_yield),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::styled("  毎秒 +", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format_number(state.auto_yield),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ]));
    cl.push(Line::from(""));

    let store_label = "[S] ストアを開く";
    let next_affordable = CATALOG
        .iter()
        .zip(&state.purchased)
        .any(|(spec, purchased)| !purchased && state.score >= spec.cost);
    let store_style = if next_affordable {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    cl.push_clickable(Line::from(Span::styled(store_label, store_style)), OPEN_STORE);

    let settings_label = "[X] 設定";
    cl.push_clickable(
        Line::from(Span::styled(
            settings_label,
            Style::default().fg(Color::White),
        )),
        OPEN_SETTINGS,
    );

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" ステータス "),
    );
    f.render_widget(widget, area);
}

/// Store overlay: tier tabs plus one clickable row per boost.
fn render_store(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(5)])
        .split(area);

    let tab_style = |tier: Tier| -> Style {
        if tier == state.store_tab {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Magenta)
        }
    };

    {
        let mut cs = click_state.borrow_mut();
        TabBar::new(" │ ")
            .tab(Tier::Basic.label(), tab_style(Tier::Basic), TAB_BASIC)
            .tab(Tier::Premium.label(), tab_style(Tier::Premium), TAB_PREMIUM)
            .render(f, chunks[0], &mut cs);
    }

    let mut cl = ClickableList::new();
    for (display_idx, catalog_idx) in tier_indices(state.store_tab).enumerate() {
        let spec = &CATALOG[catalog_idx];
        let purchased = state.purchased[catalog_idx];
        let affordable = state.score >= spec.cost;
        let key = (b'1' + display_idx as u8) as char;

        let (marker, name_style, cost_style) = if purchased {
            (
                "✔",
                Style::default().fg(Color::DarkGray),
                Style::default().fg(Color::DarkGray),
            )
        } else if affordable {
            (
                "・",
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )
        } else {
            (
                "・",
                Style::default().fg(Color::Gray),
                Style::default().fg(Color::Red),
            )
        };

        let row_prefix = format!(" [{}] {}{} ", key, marker, spec.name);
        let cost_text = if purchased {
            "購入済み".to_string()
        } else {
            format!("{}pt", format_number(spec.cost))
        };
        let line = Line::from(vec![
            Span::styled(row_prefix, name_style),
            Span::styled(cost_text, cost_style),
            Span::styled(
                format!("  {}", spec.description),
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        cl.push_clickable(line, BUY_BOOST_BASE + catalog_idx as u16);
    }
    cl.push(Line::from(""));
    let close_label = " [Q] 閉じる";
    cl.push_clickable(
        Line::from(Span::styled(close_label, Style::default().fg(Color::DarkGray))),
        CLOSE_STORE,
    );

    cl.register_targets(chunks[1], &mut click_state.borrow_mut(), 1, 1, 0);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta))
            .title(format!(" ストア ⚡{} ", format_number(state.score))),
    );
    f.render_widget(widget, chunks[1]);
}

/// Settings overlay with the game reset entry.
fn render_settings(
    _state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let mut cl = ClickableList::new();
    cl.push(Line::from(Span::styled(
        "進行状況はこのブラウザに自動保存されます。",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));
    let reset_label = " [R] ゲームをリセット";
    cl.push_clickable(
        Line::from(Span::styled(
            reset_label,
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        RESET_GAME,
    );
    cl.push(Line::from(Span::styled(
        "     スコアと購入済みブーストが全て消えます",
        Style::default().fg(Color::DarkGray),
    )));
    cl.push(Line::from(""));
    let close_label = " [Q] 閉じる";
    cl.push_clickable(
        Line::from(Span::styled(close_label, Style::default().fg(Color::White))),
        CLOSE_SETTINGS,
    );

    cl.register_targets(area, &mut click_state.borrow_mut(), 1, 1, 0);
    let widget = Paragraph::new(cl.into_lines()).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" 設定 "),
    );
    f.render_widget(widget, area);
}

/// Context-sensitive help bar. The whole bar is a tap target for the most
/// useful action in the current mode.
fn render_help(
    state: &GameState,
    f: &mut Frame,
    area: Rect,
    click_state: &Rc<RefCell<ClickState>>,
) {
    let (help_text, action) = if state.show_settings {
        ("[R] リセット / [Q] 閉じる", CLOSE_SETTINGS)
    } else if state.show_store {
        ("[B]/[P] タブ切替 / [1-9] 購入 / [Q] 閉じる", CLOSE_STORE)
    } else {
        ("[C] クリック / [S] ストア / [X] 設定", OPEN_STORE)
    };

    let help = Paragraph::new(Line::from(Span::styled(
        help_text,
        Style::default().fg(Color::DarkGray),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    )
    .alignment(Alignment::Center);
    f.render_widget(help, area);

    let mut cs = click_state.borrow_mut();
    cs.add_click_target(area, action);
}

/// Message log panel (wide layouts only).
fn render_log(state: &GameState, f: &mut Frame, area: Rect) {
    let visible_height = area.height.saturating_sub(2) as usize;
    let start = state.log.len().saturating_sub(visible_height);

    let log_lines: Vec<Line> = state.log[start..]
        .iter()
        .map(|entry| {
            let style = if entry.is_important {
                Style::default()
                    .fg(Color::Magenta)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            Line::from(Span::styled(&entry.text, style))
        })
        .collect();

    let widget = Paragraph::new(log_lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" ログ "),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}
