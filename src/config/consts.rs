// src/config/consts.rs

// Overview resource bar (each box's `title` holds a tooltip table)
pub const METAL_BOX: &str = "div#metal_box";
pub const CRYSTAL_BOX: &str = "div#crystal_box";
pub const DEUTERIUM_BOX: &str = "div#deuterium_box";
pub const ENERGY_BOX: &str = "div#energy_box";
pub const DARKMATTER_BOX: &str = "div#darkmatter_box";
pub const TOOLTIP_ROWS: &str = "table tr";

// Construction regions
pub const CONSTRUCTION_TABLE: &str = "table.construction";
pub const ACTIVE_LINK: &str = "td a";
pub const ACTIVE_COUNT: &str = "div.shipSumCount";
pub const QUEUE_CELLS: &str = "table.queue td";
pub const ABORT_LINK: &str = "a.abortNow";

// Espionage report
pub const REPORT_ROOT: &str = "div.detail_msg";
pub const REPORT_TITLE_LINK: &str = "span.msg_title a";
pub const REPORT_DATE: &str = "span.msg_date";
pub const ACTION_MARKER: &str = "span.espionageDefText";
pub const DETAIL_TXT: &str = "div.detail_txt";
pub const API_KEY_ICON: &str = "span.icon_apikey";
pub const DETAIL_LIST: &str = "ul.detail_list";
pub const DETAIL_FAIL: &str = "li.detail_list_fail";
pub const DETAIL_ENTRY: &str = "li.detail_list_el";
pub const DETAIL_VALUE: &str = "span.fright";

/// Marker that precedes an inactivity suffix in the username line, e.g. `Fritz (i)`.
pub const USERNAME_STATUS_MARKER: &str = "(i";

// Empire page
pub const EMPIRE_ENERGY_VALUE: &str = "div span";
