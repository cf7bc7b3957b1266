//! # hcal-render: Calendar Presentation
//!
//! Pure functions from holiday data to display structures and text. Nothing
//! here performs I/O or reads the clock; "today" is always a parameter.
//!
//! - `grid.rs`: Monday-first month layout with neighbouring-month padding.
//! - `tile.rs`: per-day label and style flags.
//! - `text.rs`: the month as a fixed-width text calendar.
//! - `detail.rs`: the selected holiday's detail panel.

pub mod detail;
pub mod grid;
pub mod text;
pub mod tile;

pub use detail::{DetailAction, DetailField, DetailList, DetailPanel};
pub use grid::{month_grid, GridDay, MonthGrid, DAYS_PER_WEEK, WEEKDAY_HEADERS};
pub use text::{month_title, render_month, CELL_WIDTH};
pub use tile::{clip_label, decorate_tile, holiday_on, TileDecoration, TileStyle, TILE_LABEL_WIDTH};
