//! Per-day tile decoration.
//!
//! Holiday and today styles are independent flags; a tile that is both
//! carries both.

use chrono::NaiveDate;
use hcal_core::HolidayRecord;
use serde::Serialize;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Terminal columns available for a label inside one tile.
pub const TILE_LABEL_WIDTH: usize = 10;

const ELLIPSIS: char = '…';

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TileStyle {
    pub holiday: bool,
    pub today: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TileDecoration {
    pub date: NaiveDate,
    pub label: Option<String>,
    pub style: TileStyle,
}

/// Clip `text` to `width` terminal columns, ending in an ellipsis when cut.
///
/// A wide character that would straddle the limit is dropped whole, so the
/// result can be one column narrower than `width`.
pub fn clip_label(text: &str, width: usize) -> String {
    if text.width() <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }
    let budget = width - 1;
    let mut used = 0;
    let mut clipped = String::new();
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        clipped.push(c);
    }
    clipped.push(ELLIPSIS);
    clipped
}

/// First holiday on `date`, in upstream order.
pub fn holiday_on(date: NaiveDate, holidays: &[HolidayRecord]) -> Option<&HolidayRecord> {
    holidays.iter().find(|h| h.date == date)
}

/// Decorate the tile for `date`.
pub fn decorate_tile(
    date: NaiveDate,
    holidays: &[HolidayRecord],
    today: NaiveDate,
) -> TileDecoration {
    let holiday = holiday_on(date, holidays);
    TileDecoration {
        date,
        label: holiday.map(|h| clip_label(&h.local_name, TILE_LABEL_WIDTH)),
        style: TileStyle {
            holiday: holiday.is_some(),
            today: date == today,
        },
    }
}
