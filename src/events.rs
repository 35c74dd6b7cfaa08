/*
 *  events.rs
 *
 *  Festivo - every day has a face
 *  (c) 2023-26 Festivo authors
 *
 *  Calendar event resolver - picks the background artwork and event
 *  caption for a given day
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use crate::birthdays::BirthdayTable;

/// Calendar date snapshot the resolver works from. Weekday 0 is Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceDate {
    pub month: u32,
    pub day: u32,
    pub weekday: u32,
}

/// Symbolic selector for the background artwork bound to a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundImage {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Birthday,
    NewYear,
    Valentine,
    StPatrick,
    Spring,
    AprilFools,
    CincoDeMayo,
    Summer,
    IndependenceDay,
    Fall,
    HalloweenSoon,
    Halloween,
    Rabbit,
    Turkey,
    Winter,
    Christmas,
}

/// What the face should show for a day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventResult {
    pub image: BackgroundImage,
    /// Event line text. `None` must clear any previously shown caption.
    pub caption: Option<String>,
}

/// One fixed-date rule: month plus an inclusive day range.
struct HolidayRule {
    month: u32,
    days: (u32, u32),
    image: BackgroundImage,
    caption: Option<&'static str>,
}

/// Evaluated top to bottom; earlier rules shadow later ones. Christmas
/// days 23-24 share the day-25 artwork but carry no caption.
const HOLIDAYS: &[HolidayRule] = &[
    HolidayRule { month: 1, days: (1, 1), image: BackgroundImage::NewYear, caption: Some("Happy New Year!") },
    HolidayRule { month: 2, days: (14, 14), image: BackgroundImage::Valentine, caption: Some("Happy Valentine's Day!") },
    HolidayRule { month: 3, days: (17, 17), image: BackgroundImage::StPatrick, caption: Some("Happy St. Patrick's Day!") },
    HolidayRule { month: 3, days: (20, 21), image: BackgroundImage::Spring, caption: Some("Spring has Sprung!") },
    HolidayRule { month: 4, days: (1, 1), image: BackgroundImage::AprilFools, caption: Some("April Fools!") },
    HolidayRule { month: 5, days: (5, 5), image: BackgroundImage::CincoDeMayo, caption: Some("Happy Cinco de Mayo!") },
    HolidayRule { month: 6, days: (22, 23), image: BackgroundImage::Summer, caption: Some("Hello Summer!") },
    HolidayRule { month: 7, days: (4, 4), image: BackgroundImage::IndependenceDay, caption: Some("Happy 4th of July!") },
    HolidayRule { month: 9, days: (22, 23), image: BackgroundImage::Fall, caption: Some("Hello Fall!") },
    HolidayRule { month: 10, days: (25, 30), image: BackgroundImage::HalloweenSoon, caption: None },
    HolidayRule { month: 10, days: (31, 31), image: BackgroundImage::Halloween, caption: Some("Happy Halloween!") },
    HolidayRule { month: 12, days: (21, 22), image: BackgroundImage::Winter, caption: Some("Hello Winter!") },
    HolidayRule { month: 12, days: (23, 24), image: BackgroundImage::Christmas, caption: None },
    HolidayRule { month: 12, days: (25, 25), image: BackgroundImage::Christmas, caption: Some("Merry Christmas!") },
];

/// Decide the artwork and caption for `date`.
///
/// Priority: birthday match, fixed holiday, whole-month artwork, weekday
/// default. Pure function; identical inputs give identical results.
pub fn resolve(date: FaceDate, birthdays: &BirthdayTable) -> EventResult {
    for rec in birthdays.records() {
        if rec.month_day() == Some((date.month, date.day)) {
            return EventResult {
                image: BackgroundImage::Birthday,
                caption: Some(format!("{}'s Birthday!", rec.name)),
            };
        }
    }

    for rule in HOLIDAYS {
        if rule.month == date.month && date.day >= rule.days.0 && date.day <= rule.days.1 {
            return EventResult {
                image: rule.image,
                caption: rule.caption.map(str::to_owned),
            };
        }
    }

    // Whole-month artwork; the fixed days above have already matched.
    match date.month {
        4 => {
            return EventResult {
                image: BackgroundImage::Rabbit,
                caption: None,
            };
        }
        11 => {
            return EventResult {
                image: BackgroundImage::Turkey,
                caption: None,
            };
        }
        _ => {}
    }

    EventResult {
        image: weekday_image(date.weekday),
        caption: None,
    }
}

/// Artwork for an ordinary day of the week. Weekday 0 is Sunday.
pub fn weekday_image(weekday: u32) -> BackgroundImage {
    match weekday {
        0 => BackgroundImage::Sunday,
        1 => BackgroundImage::Monday,
        2 => BackgroundImage::Tuesday,
        3 => BackgroundImage::Wednesday,
        4 => BackgroundImage::Thursday,
        5 => BackgroundImage::Friday,
        _ => BackgroundImage::Saturday,
    }
}
