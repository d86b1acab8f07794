// All LLM prompt constants for fortune lookups.
// Reuses the JSON-only fragment from llm_client::prompts.

/// Persona for the system message (English).
pub const FORTUNE_SYSTEM_EN: &str = "You are a world-renowned doctor of numerology \
    with an unmatched record of predictions. You are a seasoned numerologist who \
    derives lucky numbers from a person's life path number and a given date.";

/// Persona for the system message (Korean).
pub const FORTUNE_SYSTEM_KO: &str = "당신은 세계 최고의 예측력을 지닌 수비학 박사입니다. \
    생명수와 주어진 날짜로 행운의 숫자를 뽑아내는 노련한 수비학자입니다.";

/// Fortune prompt template (English).
/// Replace: {life_path}, {date}, {weekday}, {month}, {season}
pub const FORTUNE_PROMPT_TEMPLATE_EN: &str = r#"As a numerology expert, generate 6 lucky numbers between 1 and 45 for a person with life path number {life_path}, for {date}.

Consider the following:
1. Life path number: {life_path}
2. Date: {date}
3. Weekday: {weekday}
4. Month: {month}
5. Season: {season}

Give a detailed, long-form explanation of each number and what it means. Also explain overall why these 6 numbers were chosen together.

Return a JSON object with this EXACT schema (no extra fields):
{
  "numbers": [7, 12, 19, 23, 34, 41],
  "explanations": [
    "Long-form meaning of the first number",
    "...one entry per number, in the same order..."
  ],
  "overall_explanation": "Why these 6 numbers were selected"
}

HARD RULES:
1. `numbers` MUST contain exactly 6 distinct integers, each between 1 and 45 inclusive
2. `explanations` MUST contain exactly 6 strings, aligned by index with `numbers`
3. `overall_explanation` MUST be a single non-empty string
4. Write every explanation in English"#;

/// Fortune prompt template (Korean).
/// Replace: {life_path}, {date}, {weekday}, {month}, {season}
pub const FORTUNE_PROMPT_TEMPLATE_KO: &str = r#"수비학 전문가로서, 생명수가 {life_path}인 사람을 위해 {date}의 행운의 숫자 6개를 1부터 45 사이에서 골라주세요.

다음 요소를 고려해주세요:
1. 생명수: {life_path}
2. 날짜: {date}
3. 요일: {weekday}
4. 월: {month}
5. 계절: {season}

숫자마다 그 의미를 자세한 장문으로 설명하고, 이 6개의 숫자를 함께 고른 이유도 전체적으로 설명해주세요.

다음 스키마를 정확히 따르는 JSON 객체로 응답하세요 (다른 필드 금지):
{
  "numbers": [7, 12, 19, 23, 34, 41],
  "explanations": [
    "첫 번째 숫자의 의미에 대한 장문 설명",
    "...숫자마다 하나씩, 같은 순서로..."
  ],
  "overall_explanation": "이 6개의 숫자를 고른 이유"
}

필수 규칙:
1. `numbers`는 1 이상 45 이하의 서로 다른 정수 정확히 6개
2. `explanations`는 `numbers`와 같은 순서의 문자열 정확히 6개
3. `overall_explanation`은 비어 있지 않은 문자열 하나
4. 모든 설명은 한국어로 작성"#;
