//! Plain-text month calendar.
//!
//! ```text
//!                                     December 2024
//! Mon         Tue         Wed         Thu         Fri         Sat         Sun
//! ·25         ·26         ·27         ·28         ·29         ·30         01
//! ...
//! 23          24          25*         26          27          28          29
//!                         Christmas
//! ```
//!
//! Each week is two lines: day numbers with markers, then holiday labels.
//! `*` marks a holiday, `[dd]` marks today, `·dd` is a neighbouring-month day.

use chrono::{Datelike, NaiveDate};
use hcal_core::HolidayRecord;
use unicode_width::UnicodeWidthStr;

use crate::grid::{month_grid, GridDay, DAYS_PER_WEEK, WEEKDAY_HEADERS};
use crate::tile::{decorate_tile, TileDecoration, TILE_LABEL_WIDTH};

/// Column width of one tile, label plus gutter.
pub const CELL_WIDTH: usize = TILE_LABEL_WIDTH + 2;

/// `MMMM yyyy` title for the month containing `month`.
pub fn month_title(month: NaiveDate) -> String {
    month.format("%B %Y").to_string()
}

fn day_token(day: &GridDay, tile: &TileDecoration) -> String {
    if !day.in_month {
        return format!("·{:02}", day.date.day());
    }
    let mut token = if tile.style.today {
        format!("[{:02}]", day.date.day())
    } else {
        format!("{:02}", day.date.day())
    };
    if tile.style.holiday {
        token.push('*');
    }
    token
}

/// Pad each cell to `CELL_WIDTH` terminal columns.
fn push_row(out: &mut String, cells: &[String]) {
    let mut line = String::new();
    for cell in cells {
        line.push_str(cell);
        let pad = CELL_WIDTH.saturating_sub(cell.width());
        line.extend(std::iter::repeat(' ').take(pad));
    }
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Render the month containing `month` with `holidays` overlaid.
pub fn render_month(month: NaiveDate, holidays: &[HolidayRecord], today: NaiveDate) -> String {
    let grid = month_grid(month);
    let mut out = String::new();

    let title = format!(
        "{:^w$}",
        month_title(grid.month),
        w = CELL_WIDTH * DAYS_PER_WEEK
    );
    out.push_str(title.trim_end());
    out.push('\n');

    let headers: Vec<String> = WEEKDAY_HEADERS.iter().map(|h| h.to_string()).collect();
    push_row(&mut out, &headers);

    for week in &grid.weeks {
        let tiles: Vec<TileDecoration> = week
            .iter()
            .map(|day| decorate_tile(day.date, holidays, today))
            .collect();

        let numbers: Vec<String> = week
            .iter()
            .zip(&tiles)
            .map(|(day, tile)| day_token(day, tile))
            .collect();
        push_row(&mut out, &numbers);

        // Neighbouring-month days stay unlabelled.
        let labels: Vec<String> = week
            .iter()
            .zip(&tiles)
            .map(|(day, tile)| match (&tile.label, day.in_month) {
                (Some(label), true) => label.clone(),
                _ => String::new(),
            })
            .collect();
        if labels.iter().any(|l| !l.is_empty()) {
            push_row(&mut out, &labels);
        }
    }

    out
}
