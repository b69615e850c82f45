// SPDX-FileCopyrightText: 2026 Link Clean Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Calendar of "손없는날" (lucky moving days) backing the lucky-days category.

/// Month label (as shown on the site) and its lucky days of month.
const LUCKY_DAYS: &[(&str, &[u32])] = &[
    ("26년 2월", &[6, 7, 16, 17, 25, 26]),
    ("26년 3월", &[7, 8, 17, 18, 27, 28]),
    ("26년 4월", &[6, 7, 15, 16, 25, 26]),
    ("26년 5월", &[5, 6, 15, 16, 25, 26]),
    ("26년 6월", &[4, 5, 13, 14, 23, 24]),
    ("26년 7월", &[3, 4, 13, 14, 22, 23]),
];

/// Month labels in calendar order.
pub fn months() -> impl Iterator<Item = &'static str> {
    LUCKY_DAYS.iter().map(|(month, _)| *month)
}

/// Lucky days for a month label, or `None` if the month is not published.
pub fn lucky_days(month: &str) -> Option<&'static [u32]> {
    LUCKY_DAYS
        .iter()
        .find(|(label, _)| *label == month)
        .map(|(_, days)| *days)
}

pub fn is_lucky_day(month: &str, day: u32) -> bool {
    lucky_days(month).is_some_and(|days| days.contains(&day))
}
