//! Calendar labelling: season, weekday, and localized date strings used in prompts.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use thiserror::Error;

/// Language used for prompt text, calendar labels, and the model's explanations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    English,
    Korean,
}

#[derive(Debug, Error, PartialEq)]
#[error("Unknown locale '{0}' (expected 'en' or 'ko')")]
pub struct UnknownLocale(String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::English),
            "ko" | "korean" => Ok(Locale::Korean),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Season {
    Spring,
    Summer,
    Fall,
    Winter,
}

impl Season {
    pub fn label(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (Season::Spring, Locale::English) => "Spring",
            (Season::Summer, Locale::English) => "Summer",
            (Season::Fall, Locale::English) => "Fall",
            (Season::Winter, Locale::English) => "Winter",
            (Season::Spring, Locale::Korean) => "봄",
            (Season::Summer, Locale::Korean) => "여름",
            (Season::Fall, Locale::Korean) => "가을",
            (Season::Winter, Locale::Korean) => "겨울",
        }
    }
}

/// Maps a month to its season: 3–5 Spring, 6–8 Summer, 9–11 Fall, otherwise Winter.
pub fn season_of_month(month: u32) -> Season {
    match month {
        3..=5 => Season::Spring,
        6..=8 => Season::Summer,
        9..=11 => Season::Fall,
        _ => Season::Winter,
    }
}

pub fn season_of(date: NaiveDate) -> Season {
    season_of_month(date.month())
}

/// Monday-first.
const WEEKDAYS_EN: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

const WEEKDAYS_KO: [&str; 7] = [
    "월요일",
    "화요일",
    "수요일",
    "목요일",
    "금요일",
    "토요일",
    "일요일",
];

pub fn weekday_name(date: NaiveDate, locale: Locale) -> &'static str {
    let idx = date.weekday().num_days_from_monday() as usize;
    match locale {
        Locale::English => WEEKDAYS_EN[idx],
        Locale::Korean => WEEKDAYS_KO[idx],
    }
}

pub fn format_date(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::English => date.format("%B %-d, %Y").to_string(),
        Locale::Korean => date.format("%Y년 %m월 %d일").to_string(),
    }
}

pub fn format_month(date: NaiveDate, locale: Locale) -> String {
    match locale {
        Locale::English => date.format("%B").to_string(),
        Locale::Korean => date.format("%m월").to_string(),
    }
}
