//! Localized question dictionaries.
//!
//! The quiz frontend ships one question set per language. The CRM comment
//! needs the canonical question wording, so the same JSON sets are compiled
//! into the binary and parsed once on first access. The default language is
//! therefore guaranteed present at compile time, and a malformed resource
//! fails the process at startup rather than one request at a time.

use lazy_static::lazy_static;
use serde::Deserialize;
use std::collections::HashMap;

/// cohort key -> test key -> ordered question list
pub type QuestionDictionary = HashMap<String, HashMap<String, Vec<Question>>>;

/// One dictionary entry. The JSON carries ids and question types as well;
/// only the wording matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct Question {
    pub question: String,
}

/// Languages the quiz ships with. Anything else maps to Ukrainian.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lang {
    Ua,
    Ru,
    En,
}

impl Lang {
    pub fn from_code(code: Option<&str>) -> Self {
        match code {
            Some("ru") => Lang::Ru,
            Some("en") => Lang::En,
            _ => Lang::Ua,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Lang::Ua => "ua",
            Lang::Ru => "ru",
            Lang::En => "en",
        }
    }

    /// Header above the AI report section of the CRM comment.
    pub fn report_header(&self) -> &'static str {
        match self {
            Lang::Ua => "--- AI-ЗВІТ ---",
            Lang::Ru => "--- AI-ОТЧЕТ ---",
            Lang::En => "--- AI REPORT ---",
        }
    }

    /// Header above the open answers section of the CRM comment.
    pub fn open_answers_header(&self) -> &'static str {
        match self {
            Lang::Ua => "--- ВІДПОВІДІ НА ВІДКРИТІ ПИТАННЯ ---",
            Lang::Ru => "--- ОТВЕТЫ НА ОТКРЫТЫЕ ВОПРОСЫ ---",
            Lang::En => "--- OPEN ANSWERS ---",
        }
    }

    /// Subject line of the report email.
    pub fn email_subject(&self) -> &'static str {
        match self {
            Lang::Ua => "Ваші персональні результати тесту з профорієнтації",
            Lang::Ru => "Ваши персональные результаты теста по профориентации",
            Lang::En => "Your personalized career guidance test results",
        }
    }
}

lazy_static! {
    static ref DICT_UA: QuestionDictionary =
        serde_json::from_str(include_str!("../../data/questions_ua.json"))
            .expect("bundled ua question dictionary must parse");
    static ref DICT_RU: QuestionDictionary =
        serde_json::from_str(include_str!("../../data/questions_ru.json"))
            .expect("bundled ru question dictionary must parse");
    static ref DICT_EN: QuestionDictionary =
        serde_json::from_str(include_str!("../../data/questions_en.json"))
            .expect("bundled en question dictionary must parse");
}

/// The question dictionary for `lang`. Infallible: the data is compiled in.
pub fn dictionary(lang: Lang) -> &'static QuestionDictionary {
    match lang {
        Lang::Ua => &DICT_UA,
        Lang::Ru => &DICT_RU,
        Lang::En => &DICT_EN,
    }
}

/// Linear scan of cohort -> test -> question list for an exact match.
/// First match wins, in the maps' natural iteration order.
pub fn find_question_text<'a>(dict: &'a QuestionDictionary, question: &str) -> Option<&'a str> {
    for cohort in dict.values() {
        for test in cohort.values() {
            if let Some(found) = test.iter().find(|q| q.question == question) {
                return Some(&found.question);
            }
        }
    }
    None
}
