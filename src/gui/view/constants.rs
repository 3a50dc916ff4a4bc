//! View constants (layout/sizing).

pub(crate) const MENU_H: f32 = 34.0;
pub(crate) const CONTROLS_H: f32 = 52.0;

pub(crate) const QUERY_W: f32 = 280.0;
pub(crate) const LIMIT_W: f32 = 70.0;
pub(crate) const TIME_W: f32 = 110.0;

pub(crate) const STATUS_TEXT: f32 = 13.0;
pub(crate) const HINT_TEXT: f32 = 16.0;

// picker
pub(crate) const PICKER_W: f32 = 520.0;
pub(crate) const PICKER_LIST_H: f32 = 320.0;
pub(crate) const PICKER_ROW_TEXT: f32 = 14.0;
pub(crate) const BACKDROP_ALPHA: f32 = 0.8;
