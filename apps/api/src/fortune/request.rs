//! Fortune Request Builder: turns a life path number and a reference date into the prompt pair.

use chrono::NaiveDate;

use crate::fortune::prompts::{
    FORTUNE_PROMPT_TEMPLATE_EN, FORTUNE_PROMPT_TEMPLATE_KO, FORTUNE_SYSTEM_EN, FORTUNE_SYSTEM_KO,
};
use crate::llm_client::prompts::JSON_ONLY_SYSTEM;
use crate::numerology::calendar::{format_date, format_month, season_of, weekday_name};
use crate::numerology::{LifePathNumber, Locale, Season};

/// Everything the prompt embeds, captured once per lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FortuneRequest {
    life_path: LifePathNumber,
    reference_date: NaiveDate,
    weekday: &'static str,
    month: String,
    season: Season,
    locale: Locale,
}

impl FortuneRequest {
    pub fn new(life_path: LifePathNumber, reference_date: NaiveDate, locale: Locale) -> Self {
        Self {
            life_path,
            reference_date,
            weekday: weekday_name(reference_date, locale),
            month: format_month(reference_date, locale),
            season: season_of(reference_date),
            locale,
        }
    }

    pub fn weekday(&self) -> &'static str {
        self.weekday
    }

    pub fn month(&self) -> &str {
        &self.month
    }

    pub fn season(&self) -> Season {
        self.season
    }

    pub fn season_label(&self) -> &'static str {
        self.season.label(self.locale)
    }

    /// The user-role instruction sent to the model.
    pub fn build_prompt(&self) -> String {
        let template = match self.locale {
            Locale::English => FORTUNE_PROMPT_TEMPLATE_EN,
            Locale::Korean => FORTUNE_PROMPT_TEMPLATE_KO,
        };

        template
            .replace("{life_path}", &self.life_path.to_string())
            .replace("{date}", &format_date(self.reference_date, self.locale))
            .replace("{weekday}", self.weekday)
            .replace("{month}", &self.month)
            .replace("{season}", self.season_label())
    }

    /// The system-role instruction: numerologist persona plus JSON-only output.
    pub fn system_prompt(&self) -> String {
        let persona = match self.locale {
            Locale::English => FORTUNE_SYSTEM_EN,
            Locale::Korean => FORTUNE_SYSTEM_KO,
        };
        format!("{persona} {JSON_ONLY_SYSTEM}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numerology::compute_life_path_number;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn life_path_3() -> LifePathNumber {
        compute_life_path_number(date(1990, 5, 15))
    }

    fn build_prompt(life_path: LifePathNumber, reference_date: NaiveDate, locale: Locale) -> String {
        FortuneRequest::new(life_path, reference_date, locale).build_prompt()
    }

    #[test]
    fn test_english_prompt_embeds_all_factors() {
        let prompt = build_prompt(life_path_3(), date(2024, 6, 10), Locale::English);

        assert!(prompt.contains("Life path number: 3"));
        assert!(prompt.contains("Date: June 10, 2024"));
        assert!(prompt.contains("Weekday: Monday"));
        assert!(prompt.contains("Month: June"));
        assert!(prompt.contains("Season: Summer"));
    }

    #[test]
    fn test_prompt_names_the_reply_fields_and_bounds() {
        let prompt = build_prompt(life_path_3(), date(2024, 6, 10), Locale::English);

        assert!(prompt.contains("\"numbers\""));
        assert!(prompt.contains("\"explanations\""));
        assert!(prompt.contains("\"overall_explanation\""));
        assert!(prompt.contains("exactly 6 distinct integers, each between 1 and 45"));
    }

    #[test]
    fn test_prompt_has_no_unfilled_placeholders() {
        for locale in [Locale::English, Locale::Korean] {
            let prompt = build_prompt(life_path_3(), date(2024, 12, 25), locale);
            for placeholder in ["{life_path}", "{date}", "{weekday}", "{month}", "{season}"] {
                assert!(!prompt.contains(placeholder), "{placeholder} left in {locale:?}");
            }
        }
    }

    #[test]
    fn test_korean_prompt_uses_korean_labels() {
        let prompt = build_prompt(life_path_3(), date(2024, 6, 10), Locale::Korean);

        assert!(prompt.contains("생명수: 3"));
        assert!(prompt.contains("날짜: 2024년 06월 10일"));
        assert!(prompt.contains("요일: 월요일"));
        assert!(prompt.contains("월: 06월"));
        assert!(prompt.contains("계절: 여름"));
    }

    #[test]
    fn test_request_captures_calendar_fields() {
        let request = FortuneRequest::new(life_path_3(), date(2024, 10, 3), Locale::English);

        assert_eq!(request.weekday(), "Thursday");
        assert_eq!(request.month(), "October");
        assert_eq!(request.season(), Season::Fall);
        assert_eq!(request.season_label(), "Fall");
    }

    #[test]
    fn test_system_prompt_sets_persona_and_json_only() {
        let request = FortuneRequest::new(life_path_3(), date(2024, 6, 10), Locale::English);
        let system = request.system_prompt();

        assert!(system.contains("numerology"));
        assert!(system.contains("valid JSON only"));
    }
}
