//! Ratatui rendering for the three screens.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use ratatui::Frame;
use strum::IntoEnumIterator;
use yahoozy_core::scoring;
use yahoozy_core::{Category, Phase, Player, Roll, ScoreSheet, TurnEngine};

use crate::app::{App, NameDialog, Screen};

const TITLE: &str = "⚀ ⚀ ⚀   Yahoozy — Yatzy not Yahtzee   ⚅ ⚅ ⚅";

/// Three pip-art rows per face, faces 1..=6.
const DIE_FACES: [[&str; 3]; 6] = [
    ["     ", "  •  ", "     "],
    [" •   ", "     ", "   • "],
    ["   • ", "  •  ", " •   "],
    [" • • ", "     ", " • • "],
    [" • • ", "  •  ", " • • "],
    [" • • ", " • • ", " • • "],
];

pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(10),
            Constraint::Length(2),
        ])
        .split(frame.area());

    draw_title(frame, chunks[0]);
    match app.screen {
        Screen::Roster => draw_roster(frame, chunks[1], app),
        Screen::Game => draw_game(frame, chunks[1], app),
        Screen::GameOver => draw_game_over(frame, chunks[1], app),
    }
    draw_help(frame, chunks[2], app);

    if let Some(dialog) = &app.dialog {
        draw_dialog(frame, chunks[1], dialog);
    }
}

fn draw_title(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(TITLE)
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, area);
}

// --- Roster screen ------------------------------------------------------

fn draw_roster(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let items: Vec<ListItem> = app
        .roster
        .names()
        .iter()
        .map(|n| ListItem::new(format!("[{}]", n)))
        .collect();
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Players "))
        .highlight_style(Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED));
    let mut state = ListState::default();
    if !app.roster.is_empty() && app.dialog.is_none() {
        state.select(Some(app.roster_sel));
    }
    frame.render_stateful_widget(list, halves[0], &mut state);

    draw_top10(frame, halves[1], app);
}

fn draw_top10(frame: &mut Frame, area: Rect, app: &App) {
    let mut lines = Vec::new();
    for entry in &app.top {
        lines.push(Line::from(format!("{:3}  {}", entry.score, entry.name)));
    }
    if app.top.is_empty() {
        lines.push(Line::from(Span::styled(
            "No games played yet",
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    let list = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" All-Time Top 10 "));
    frame.render_widget(list, area);
}

fn draw_dialog(frame: &mut Frame, area: Rect, dialog: &NameDialog) {
    let popup = centered_rect(area, 60, 7);
    frame.render_widget(Clear, popup);

    let title = if dialog.renaming.is_some() {
        " Rename Player "
    } else {
        " New Player "
    };

    let mut lines = vec![Line::default()];
    if dialog.text.is_empty() {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled("Johnny Appleseed", Style::default().add_modifier(Modifier::DIM)),
            Span::styled("█", Style::default().add_modifier(Modifier::BOLD)),
        ]));
    } else {
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::raw(dialog.text.clone()),
            Span::styled("█", Style::default().add_modifier(Modifier::BOLD)),
        ]));
    }
    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        format!("  {}", dialog.diag),
        Style::default().add_modifier(Modifier::DIM),
    )));
    lines.push(Line::from(Span::styled(
        "  ^A Add Player    ^E Exit Dialog",
        Style::default().add_modifier(Modifier::DIM),
    )));

    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(body, popup);
}

// --- Game screen --------------------------------------------------------

fn draw_game(frame: &mut Frame, area: Rect, app: &App) {
    let Some(engine) = app.engine.as_ref() else {
        return;
    };
    let picking = engine.phase() == Phase::PickingCategory;

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(44), Constraint::Min(30)])
        .split(area);
    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(5),
            Constraint::Length(8),
        ])
        .split(columns[1]);

    draw_sheet(frame, columns[0], app, engine, picking);
    draw_turn_header(frame, right[0], engine, picking);
    draw_tally(frame, right[1], &engine.standings());
    draw_dice(frame, right[2], app, engine, picking);
}

fn draw_turn_header(
    frame: &mut Frame,
    area: Rect,
    engine: &TurnEngine,
    picking: bool,
) {
    let mut lines = vec![Line::from(vec![
        Span::styled("Current Player", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!("   {}", engine.active_player().name)),
    ])];
    if !picking {
        lines.push(Line::from(vec![
            Span::styled("Rolls Remaining", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(format!("  {}\u{2044}3", engine.rolls_left())),
        ]));
    }
    frame.render_widget(Paragraph::new(lines).block(Block::default().borders(Borders::ALL)), area);
}

fn draw_sheet(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    engine: &TurnEngine,
    picking: bool,
) {
    let player = engine.active_player();
    let roll = engine.roll();
    let open = engine.open_categories();

    let mut lines = Vec::new();
    for category in Category::iter() {
        let scored = player.sheet.get(category);
        let selected = picking && open.get(app.cat_sel) == Some(&category);
        let highlighted = engine.highlight() == Some(category);

        let mut style = Style::default();
        if selected {
            style = style.add_modifier(Modifier::REVERSED);
        }
        if highlighted {
            style = style.add_modifier(Modifier::BOLD);
        }

        let mut spans = Vec::new();
        if picking && scored.is_none() {
            spans.push(Span::styled(
                if highlighted { "[×] " } else { "[ ] " },
                style,
            ));
        } else if picking {
            spans.push(Span::styled("    ", style));
        }
        spans.push(Span::styled(format!("{:<16}", category.to_string()), style));
        match scored {
            Some(points) => spans.push(Span::styled(format!("    {:2}", points), style)),
            None => {
                spans.push(Span::styled("     —", style));
                if picking {
                    let preview = scoring::score(category, roll);
                    spans.push(Span::styled(format!(" → {:2}", preview), style));
                }
            }
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from("─".repeat(30)));
    lines.push(total_line(&player.sheet, engine, roll, picking));

    let sheet = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Score Sheet ", Style::default().add_modifier(Modifier::BOLD))),
    );
    frame.render_widget(sheet, area);
}

fn total_line(
    sheet: &ScoreSheet,
    engine: &TurnEngine,
    roll: &Roll,
    picking: bool,
) -> Line<'static> {
    let mut spans = vec![
        Span::raw(format!("{:<16}", "Total")),
        Span::raw(format!("  {:4}", sheet.total())),
    ];
    if picking {
        if let Some(category) = engine.highlight() {
            let points = scoring::score(category, roll);
            spans.push(Span::raw(format!(
                " → {}",
                sheet.projected_total(category, points)
            )));
        }
    }
    Line::from(spans)
}

fn draw_tally(frame: &mut Frame, area: Rect, standings: &[&Player]) {
    let lines: Vec<Line> = standings
        .iter()
        .map(|p| Line::from(format!("{:3}  {}", p.total(), p.name)))
        .collect();
    let tally = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Running Tally "));
    frame.render_widget(tally, area);
}

fn draw_dice(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    engine: &TurnEngine,
    picking: bool,
) {
    let outer = Block::default().borders(Borders::ALL);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);

    for (die, slot) in slots.iter().enumerate() {
        let face = engine.roll().face(die);
        let art = DIE_FACES[(face - 1) as usize];
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(5), Constraint::Length(1)])
            .split(*slot);

        let pips = Paragraph::new(vec![
            Line::from(art[0]),
            Line::from(art[1]),
            Line::from(art[2]),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(pips, parts[0]);

        if !picking {
            let marked = engine.is_die_marked(die);
            let style = if app.die_sel == die {
                Style::default().add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().add_modifier(Modifier::BOLD)
            };
            let caption = Paragraph::new(Span::styled(
                format!("{} Reroll", if marked { "[×]" } else { "[ ]" }),
                style,
            ))
            .alignment(Alignment::Center);
            frame.render_widget(caption, parts[1]);
        }
    }
}

// --- Game-over screen ---------------------------------------------------

fn draw_game_over(frame: &mut Frame, area: Rect, app: &App) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let mut lines = vec![
        Line::from(Span::styled(
            "Game Over!",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
    ];
    for entry in &app.last_results {
        lines.push(Line::from(format!("{:3}  {}", entry.score, entry.name)));
    }
    let results = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Final Results "));
    frame.render_widget(results, halves[0]);

    draw_top10(frame, halves[1], app);
}

// --- Chrome -------------------------------------------------------------

fn draw_help(frame: &mut Frame, area: Rect, app: &App) {
    let shortcuts = if app.dialog.is_some() {
        "^A  Add Player    ^E  Exit Dialog"
    } else {
        match app.screen {
            Screen::Roster => "^A  Add Player    ^S  Start Game    ^Q  Quit Program",
            Screen::Game => match app.engine.as_ref().map(|e| e.phase()) {
                Some(Phase::PickingCategory) => "^S  Select Category    ^Q  Quit Program",
                _ => "^A  Mark All    ^K  Keep All    ^R  Reroll    ^Q  Quit Program",
            },
            Screen::GameOver => "^N  New Game    ^Q  Quit Program",
        }
    };

    let mut lines = Vec::new();
    if app.diag.is_empty() {
        lines.push(Line::default());
    } else {
        lines.push(Line::from(Span::styled(
            format!("{}.", app.diag),
            Style::default().add_modifier(Modifier::DIM),
        )));
    }
    lines.push(Line::from(Span::styled(
        shortcuts,
        Style::default().add_modifier(Modifier::DIM),
    )));
    frame.render_widget(Paragraph::new(lines), area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    Rect {
        x: area.x + (area.width - w) / 2,
        y: area.y + (area.height - h) / 2,
        width: w,
        height: h,
    }
}
