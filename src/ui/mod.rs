use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::app::{AppState, OverlayState, PaneKind};
use crate::config::ThemeName;
use crate::note::compose::{compose_preview, split_at_plan, PLAN_SENTINEL};
use crate::note::Section;
use crate::storage::NoteIndexEntry;

/// Resolved colors for the configured theme.
struct Palette {
    accent: Color,
    muted: Color,
    selected: Color,
    highlight_fg: Color,
}

impl Palette {
    fn for_theme(theme: ThemeName) -> Self {
        match theme {
            ThemeName::Dark => Self {
                accent: Color::Cyan,
                muted: Color::Gray,
                selected: Color::Green,
                highlight_fg: Color::Black,
            },
            ThemeName::Light => Self {
                accent: Color::Blue,
                muted: Color::DarkGray,
                selected: Color::Green,
                highlight_fg: Color::White,
            },
        }
    }
}

pub fn draw_app(frame: &mut Frame, state: &AppState) {
    let palette = Palette::for_theme(state.theme());

    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(4)])
        .split(frame.size());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(34), Constraint::Percentage(66)])
        .split(vertical[0]);

    draw_step_sidebar(frame, state, &palette, columns[0]);
    draw_preview(frame, state, &palette, columns[1]);
    draw_footer(frame, state, &palette, vertical[1]);

    if state.modal().is_some() {
        draw_modal(frame, state, &palette, vertical[0]);
    }

    if state.overlay().is_some() {
        draw_overlay(frame, state, &palette, vertical[0]);
    }
}

fn draw_step_sidebar(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let current = state.wizard.current();
    let mut lines = Vec::with_capacity(Section::STEP_ORDER.len() * 2);
    for (index, section) in Section::STEP_ORDER.iter().copied().enumerate() {
        let committed = state.sections().get(section).len();
        let marker = if committed > 0 { "✓" } else { " " };
        let title_style = if section == current {
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let cursor = if section == current { "▸ " } else { "  " };
        lines.push(Line::from(vec![
            Span::styled(cursor.to_string(), Style::default().fg(palette.accent)),
            Span::styled(
                format!("{marker} {}. {}", index + 1, section.title()),
                title_style,
            ),
            Span::styled(
                format!(" ({committed}/{})", section.max_items()),
                Style::default().fg(palette.muted),
            ),
        ]));
        lines.push(Line::from(Span::styled(
            format!("     {}", section.step_hint()),
            Style::default()
                .fg(palette.muted)
                .add_modifier(Modifier::ITALIC),
        )));
    }

    let sidebar = Paragraph::new(Text::from(lines))
        .block(
            Block::default()
                .title(format!("Steps ({})", state.category().label()))
                .borders(Borders::ALL),
        )
        .wrap(Wrap { trim: false });
    frame.render_widget(sidebar, area);
}

fn draw_preview(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let preview = compose_preview(state.section_order(), state.sections());
    let (body, plan_tail) = split_at_plan(&preview);

    let mut lines = Vec::new();
    if body.is_empty() && plan_tail.is_none() {
        lines.push(Line::from(Span::styled(
            "Nothing selected yet. Press Enter to open the current step.",
            Style::default().fg(palette.muted),
        )));
    } else {
        lines.push(Line::from(body));
    }
    if let Some(tail) = plan_tail {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            PLAN_SENTINEL,
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(tail));
    }

    let preview_widget = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Note Preview").borders(Borders::ALL))
        .wrap(Wrap { trim: false });
    frame.render_widget(preview_widget, area);
}

fn draw_footer(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let message_line = if let Some(message) = state.global_error() {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = state.section_error() {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(Color::Yellow),
        ))
    } else if let Some(message) = state.status_message() {
        Line::from(Span::styled(
            message.to_string(),
            Style::default().fg(palette.accent),
        ))
    } else {
        Line::from("")
    };

    let hints = if state.modal().is_some() {
        "Space: toggle  Enter: commit  Tab/Shift-Tab: pane  j/k: move  m: measurable  n/p: step  Esc: back"
    } else {
        "Enter: open step  n/p: step  1-6: quick add  s: save  l: load  t: templates  c: category  Ctrl+C: copy  Ctrl+X: clear  q: quit"
    };

    let footer = Paragraph::new(Text::from(vec![
        message_line,
        Line::from(Span::styled(hints, Style::default().fg(palette.muted))),
    ]))
    .block(Block::default().borders(Borders::ALL))
    .wrap(Wrap { trim: true });
    frame.render_widget(footer, area);
}

fn draw_modal(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    let Some(section) = state.modal() else { return };
    let modal_area = centered_rect(area, 90, 80);
    frame.render_widget(Clear, modal_area);

    let title = if state.wizard.in_measurable_outcomes() {
        "Measurable Outcomes"
    } else {
        section.title()
    };
    let outer = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(palette.accent));
    let inner = outer.inner(modal_area);
    frame.render_widget(outer, modal_area);

    let panes = state.pane_count();
    if panes == 0 {
        return;
    }
    let constraints: Vec<Constraint> = (0..panes)
        .map(|_| Constraint::Ratio(1, panes as u32))
        .collect();
    let pane_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(inner);

    for (index, pane_area) in pane_areas.iter().enumerate() {
        let Some(kind) = state.pane_kind_at(index) else {
            continue;
        };
        let focused = state.modal_cursor.pane == index;
        if kind == PaneKind::MeasurementValue {
            draw_value_pane(frame, state, palette, *pane_area, focused);
        } else {
            draw_list_pane(frame, state, palette, *pane_area, kind, focused, panes > 1);
        }
    }
}

fn draw_list_pane(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    area: Rect,
    kind: PaneKind,
    focused: bool,
    bordered: bool,
) {
    let items: Vec<ListItem> = state
        .pane_items(kind)
        .iter()
        .map(|item| {
            if state.is_item_selected(kind, item) {
                ListItem::new(Line::from(vec![
                    Span::styled("✓ ", Style::default().fg(palette.selected)),
                    Span::styled(item.to_string(), Style::default().fg(palette.selected)),
                ]))
            } else {
                ListItem::new(format!("  {item}"))
            }
        })
        .collect();

    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };
    let block = if bordered {
        Block::default()
            .title(pane_title(kind))
            .borders(Borders::ALL)
            .border_style(border_style)
    } else {
        Block::default()
    };

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if focused {
        list_state.select(Some(state.modal_cursor.row));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_value_pane(
    frame: &mut Frame,
    state: &AppState,
    palette: &Palette,
    area: Rect,
    focused: bool,
) {
    let border_style = if focused {
        Style::default().fg(palette.accent)
    } else {
        Style::default().fg(palette.muted)
    };
    let measurable = &state.drafts.measurable;
    let mut spans = vec![Span::raw(measurable.measurement_value.clone())];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(palette.accent)));
    }
    let mut lines = vec![Line::from(spans)];
    if !measurable.measurement_unit.is_empty() {
        lines.push(Line::from(Span::styled(
            measurable.measurement_unit.clone(),
            Style::default().fg(palette.muted),
        )));
    }
    let input = Paragraph::new(Text::from(lines)).block(
        Block::default()
            .title(pane_title(PaneKind::MeasurementValue))
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(input, area);
}

fn pane_title(kind: PaneKind) -> &'static str {
    match kind {
        PaneKind::Phrases(section) => section.title(),
        PaneKind::AssistanceLevel => "Level",
        PaneKind::AssistanceReasons => "Reasons",
        PaneKind::CueingTypes => "Cueing Types",
        PaneKind::CueingLevel => "Cueing Level",
        PaneKind::CueingReasons => "Cueing Reason",
        PaneKind::OutcomeType => "Type",
        PaneKind::OutcomePhrase => "Outcome",
        PaneKind::OutcomeComponent => "Component",
        PaneKind::OutcomePerformance => "Performance",
        PaneKind::MeasurableOutcomes => "Outcome Categories",
        PaneKind::MeasurementType => "Measurement",
        PaneKind::MeasurementUnit => "Unit",
        PaneKind::MeasurementValue => "Value",
    }
}

fn draw_overlay(frame: &mut Frame, state: &AppState, palette: &Palette, area: Rect) {
    match state.overlay() {
        Some(OverlayState::SaveNote { name }) => {
            let overlay_area = centered_rect(area, 60, 20);
            frame.render_widget(Clear, overlay_area);
            frame.render_widget(
                name_input("Save Note", name, "Enter: save  Esc: cancel", palette),
                overlay_area,
            );
        }
        Some(OverlayState::LoadNote { selected }) => {
            let overlay_area = centered_rect(area, 70, 60);
            frame.render_widget(Clear, overlay_area);
            draw_snapshot_list(
                frame,
                palette,
                overlay_area,
                "Saved Notes",
                state.saved_notes(),
                *selected,
                "Enter: load  d: delete  Esc: close",
            );
        }
        Some(OverlayState::Templates { selected, naming }) => {
            let overlay_area = centered_rect(area, 70, 60);
            frame.render_widget(Clear, overlay_area);
            if let Some(name) = naming {
                frame.render_widget(
                    name_input("Save Template", name, "Enter: save  Esc: back", palette),
                    overlay_area,
                );
            } else {
                draw_snapshot_list(
                    frame,
                    palette,
                    overlay_area,
                    "Templates",
                    state.templates(),
                    *selected,
                    "Enter: apply  s: save current  d: delete  Esc: close",
                );
            }
        }
        None => {}
    }
}

fn name_input<'a>(title: &'a str, name: &str, hints: &'a str, palette: &Palette) -> Paragraph<'a> {
    let text = Text::from(vec![
        Line::from(vec![
            Span::raw("Name: "),
            Span::raw(name.to_string()),
            Span::styled("▏", Style::default().fg(palette.accent)),
        ]),
        Line::from(""),
        Line::from(Span::styled(hints, Style::default().fg(palette.muted))),
    ]);
    Paragraph::new(text).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.accent)),
    )
}

fn draw_snapshot_list(
    frame: &mut Frame,
    palette: &Palette,
    area: Rect,
    title: &str,
    entries: &[NoteIndexEntry],
    selected: usize,
    hints: &str,
) {
    let name_width = area.width.saturating_sub(26) as usize;
    let mut items: Vec<ListItem> = entries
        .iter()
        .map(|entry| {
            ListItem::new(Line::from(vec![
                Span::raw(fit_to_width(&entry.name, name_width)),
                Span::styled(
                    format!("  {}", entry.updated_at),
                    Style::default().fg(palette.muted),
                ),
            ]))
        })
        .collect();
    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "Nothing saved yet.",
            Style::default().fg(palette.muted),
        )));
    }

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!("{title} ({hints})"))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.accent)),
        )
        .highlight_style(
            Style::default()
                .bg(palette.accent)
                .fg(palette.highlight_fg)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▸ ");

    let mut list_state = ListState::default();
    if !entries.is_empty() {
        list_state.select(Some(selected.min(entries.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

/// Truncates to the given display width, appending an ellipsis when cut.
fn fit_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    for ch in text.chars() {
        if out.width() + 2 > max_width {
            break;
        }
        out.push(ch);
    }
    out.push('…');
    out
}

fn centered_rect(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}
