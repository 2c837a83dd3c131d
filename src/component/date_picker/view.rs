//! Declarative description of the date picker and how it is painted.
//!
//! [`View`] is rebuilt from the component state on every draw; [`paint`]
//! turns it into ratatui widgets and reports where the clickable parts ended
//! up so mouse events can be routed back to them.

use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Widget},
};

use super::calendar::{GridCell, MonthGrid, WEEKDAY_NAMES};

pub(crate) const INPUT_HEIGHT: u16 = 3;
const CELL_WIDTH: u16 = 3;
const NAV_WIDTH: u16 = 2;
// 7 day columns of width 2 with single spaces in between, plus borders
pub(crate) const POPUP_WIDTH: u16 = 7 * CELL_WIDTH - 1 + 2;

#[derive(Clone, Debug)]
pub(crate) struct View {
    pub input: InputView,
    pub popup: Option<MonthGrid>,
}

/// The internal input field.
#[derive(Clone, Debug)]
pub(crate) struct InputView {
    pub text: String,
    pub name: Option<String>,
    pub disabled: bool,
    pub open: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ClickTarget {
    Input,
    /// The input while `disabled`; swallows the click
    DisabledInput,
    PrevMonth,
    NextMonth,
    Day(u32),
    /// Inside the popup, but not on anything clickable
    Popup,
    Outside,
}

/// Clickable areas recorded by the last paint, in priority order.
#[derive(Clone, Debug, Default)]
pub(crate) struct HitRegions(Vec<(Rect, ClickTarget)>);

impl HitRegions {
    fn push(&mut self, area: Rect, target: ClickTarget) {
        if !area.is_empty() {
            self.0.push((area, target));
        }
    }

    pub fn hit_test(&self, position: Position) -> ClickTarget {
        self.0
            .iter()
            .find(|(area, _)| area.contains(position))
            .map_or(ClickTarget::Outside, |(_, target)| *target)
    }

    #[cfg(test)]
    pub fn area_of(&self, target: ClickTarget) -> Option<Rect> {
        self.0
            .iter()
            .find(|(_, t)| *t == target)
            .map(|(area, _)| *area)
    }
}

fn put<W: Widget>(frame: &mut Frame, widget: W, area: Rect) -> Rect {
    let area = area.intersection(frame.area());
    if !area.is_empty() {
        frame.render_widget(widget, area);
    }
    area
}

/// Paint `view` with its input field at the top of `area`; the popup is
/// drawn as an overlay right below the input.
pub(crate) fn paint(view: &View, frame: &mut Frame, area: Rect) -> HitRegions {
    let mut regions = HitRegions::default();

    let input_area = Rect {
        height: area.height.min(INPUT_HEIGHT),
        ..area
    };
    let input_area = paint_input(&view.input, frame, input_area);
    regions.push(
        input_area,
        if view.input.disabled {
            ClickTarget::DisabledInput
        } else {
            ClickTarget::Input
        },
    );

    if let Some(grid) = &view.popup {
        let popup_area = Rect {
            x: input_area.x,
            y: input_area.bottom(),
            width: POPUP_WIDTH,
            height: grid.week_count() as u16 + 4,
        };
        paint_popup(grid, frame, popup_area, &mut regions);
    }

    regions
}

fn paint_input(input: &InputView, frame: &mut Frame, area: Rect) -> Rect {
    let mut title = input.name.clone().unwrap_or_else(|| "date".to_string());
    if input.disabled {
        title.push_str(" (disabled)");
    }

    let (text_style, border_style) = if input.disabled {
        (
            Style::default().fg(Color::DarkGray),
            Style::default().fg(Color::DarkGray),
        )
    } else if input.open {
        (Style::default(), Style::default().fg(Color::Cyan))
    } else {
        (Style::default(), Style::default())
    };

    let widget = Paragraph::new(input.text.as_str()).style(text_style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border_style)
            .title(title),
    );
    put(frame, widget, area)
}

fn paint_popup(grid: &MonthGrid, frame: &mut Frame, area: Rect, regions: &mut HitRegions) {
    let area = put(frame, Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    put(frame, block, area);

    let header = Rect { height: 1, ..inner };
    put(
        frame,
        Paragraph::new(grid.title())
            .alignment(Alignment::Center)
            .style(Style::default().add_modifier(Modifier::BOLD)),
        header,
    );

    let prev = Rect {
        width: NAV_WIDTH,
        ..header
    };
    let next = Rect {
        x: header.right().saturating_sub(NAV_WIDTH),
        width: NAV_WIDTH,
        ..header
    };
    regions.push(put(frame, Paragraph::new("<"), prev), ClickTarget::PrevMonth);
    regions.push(
        put(
            frame,
            Paragraph::new(">").alignment(Alignment::Right),
            next,
        ),
        ClickTarget::NextMonth,
    );

    let weekdays = Rect {
        y: inner.y + 1,
        height: 1,
        ..inner
    };
    put(
        frame,
        Paragraph::new(WEEKDAY_NAMES.join(" ")).style(Style::default().fg(Color::Gray)),
        weekdays,
    );

    for (row, week) in grid.weeks().enumerate() {
        for (col, cell) in week.iter().enumerate() {
            let GridCell::Day { day, selected } = *cell else {
                continue;
            };
            let cell_area = Rect {
                x: inner.x + col as u16 * CELL_WIDTH,
                y: inner.y + 2 + row as u16,
                width: CELL_WIDTH - 1,
                height: 1,
            };
            let style = if selected {
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            regions.push(
                put(
                    frame,
                    Paragraph::new(format!("{day:>2}")).style(style),
                    cell_area,
                ),
                ClickTarget::Day(day),
            );
        }
    }

    regions.push(area, ClickTarget::Popup);
}
