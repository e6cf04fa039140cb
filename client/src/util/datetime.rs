//! Viewer-local time helpers.

/// Minutes east of UTC for the browser's local zone; 0 on the server.
pub fn viewer_offset_minutes() -> i32 {
    #[cfg(feature = "hydrate")]
    {
        // getTimezoneOffset is minutes *west* of UTC.
        #[allow(clippy::cast_possible_truncation)]
        let west = js_sys::Date::new_0().get_timezone_offset() as i32;
        -west
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0
    }
}

/// `best_before` as shown on the map popup.
pub fn best_before_label(raw: &str) -> String {
    domain::datetime::format_best_before(raw, viewer_offset_minutes())
}

/// History timestamps on the profile page.
pub fn history_date_label(raw: &str) -> String {
    domain::datetime::format_history_date(raw, viewer_offset_minutes())
}
