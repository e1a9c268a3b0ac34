//! Request Validation
//!
//! Turns untrusted JSON request bodies into well-formed commands before any
//! store access. Every failure carries the exact client-facing message of the
//! rule it violated.

use serde_json::{Map, Value};
use thiserror::Error;

use kernel::id::{CategoryId, QuestionId};

use crate::domain::entities::{Category, NewQuestion};
use crate::domain::value_objects::{CategoryFilter, Difficulty, QuizQuery, SearchQuery};

const NEW_QUESTION_FIELDS: [&str; 4] = ["question", "answer", "category", "difficulty"];
const QUIZ_FIELDS: [&str; 2] = ["previous_questions", "quiz_category"];
const SEARCH_TERM_FIELD: &str = "searchTerm";

/// Which request body was being validated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Payload {
    NewQuestion,
    QuizQuery,
    Search,
}

impl Payload {
    fn empty_body_message(&self) -> &'static str {
        match self {
            Payload::NewQuestion | Payload::Search => "Data is empty!",
            Payload::QuizQuery => "No data provided!",
        }
    }

    fn missing_field_message(&self, body: &str) -> String {
        match self {
            Payload::NewQuestion => "Invalid data format!".to_string(),
            Payload::QuizQuery => {
                format!("{body},'previous_questions' and/or 'quiz_category' are missing!")
            }
            Payload::Search => "Search term is missing!".to_string(),
        }
    }
}

/// Free-text fields of a new question
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Question,
    Answer,
}

impl TextField {
    fn key(&self) -> &'static str {
        match self {
            TextField::Question => "question",
            TextField::Answer => "answer",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            TextField::Question => "Question",
            TextField::Answer => "Answer",
        }
    }
}

/// Client input errors produced by validation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No body, or the body is not a JSON object
    #[error("{}", .0.empty_body_message())]
    EmptyBody(Payload),

    /// A required key is absent
    #[error("{}", .payload.missing_field_message(.body))]
    MissingField {
        payload: Payload,
        field: &'static str,
        body: String,
    },

    /// Question or answer is not a string
    #[error("{} must be text!", .0.label())]
    InvalidText(TextField),

    /// Question or answer is empty after trimming
    #[error("{} is empty!", .0.label())]
    EmptyText(TextField),

    /// Category does not denote a known category
    #[error("Invalid category value!")]
    InvalidCategory,

    /// Difficulty is not an integer in 1..=5
    #[error("Invalid difficulty value!")]
    InvalidDifficulty,

    /// `quiz_category` is not `{"id": <integer>, ...}`
    #[error(transparent)]
    InvalidCategoryShape(#[from] CategoryShape),

    /// `previous_questions` is not a list of question ids
    #[error("{previous}, 'previous_questions' is not a list!")]
    InvalidPreviousList { previous: String },
}

/// Ways `quiz_category` can be malformed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CategoryShape {
    #[error("{body},'quiz_category' is None or not a dictionary!")]
    NotAnObject { body: String },

    #[error("{category}, 'id' key is missing!")]
    MissingId { category: String },

    #[error("{category}, 'id' is not an integer!")]
    IdNotInteger { category: String },
}

/// Validate an add-question body against the current categories.
///
/// `category` may be given as a category id or as its exact label; either
/// way the result holds the id. Texts are trimmed.
pub fn validate_new_question(
    body: Option<&Value>,
    known_categories: &[Category],
) -> Result<NewQuestion, ValidationError> {
    let data = object_body(body, Payload::NewQuestion)?;
    require_fields(data, &NEW_QUESTION_FIELDS, Payload::NewQuestion)?;

    let question = required_text(data, TextField::Question)?;
    let answer = required_text(data, TextField::Answer)?;

    let category = resolve_category(&data["category"], known_categories)
        .ok_or(ValidationError::InvalidCategory)?;

    let difficulty = data["difficulty"]
        .as_i64()
        .and_then(Difficulty::new)
        .ok_or(ValidationError::InvalidDifficulty)?;

    Ok(NewQuestion {
        question,
        answer,
        category,
        difficulty,
    })
}

/// Validate a "next quiz question" body.
///
/// `quiz_category.id == 0` selects every category. Duplicate ids in
/// `previous_questions` collapse.
pub fn validate_quiz_query(body: Option<&Value>) -> Result<QuizQuery, ValidationError> {
    let data = object_body(body, Payload::QuizQuery)?;
    require_fields(data, &QUIZ_FIELDS, Payload::QuizQuery)?;

    let quiz_category = &data["quiz_category"];
    let category = quiz_category
        .as_object()
        .ok_or_else(|| CategoryShape::NotAnObject {
            body: render(body),
        })?;

    let previous = &data["previous_questions"];
    let invalid_previous = || ValidationError::InvalidPreviousList {
        previous: previous.to_string(),
    };
    let exclude = previous
        .as_array()
        .ok_or_else(invalid_previous)?
        .iter()
        .map(|v| {
            v.as_i64()
                .and_then(|id| i32::try_from(id).ok())
                .map(QuestionId::new)
                .ok_or_else(invalid_previous)
        })
        .collect::<Result<Vec<_>, _>>()?;

    let raw_id = category.get("id").ok_or_else(|| CategoryShape::MissingId {
        category: quiz_category.to_string(),
    })?;
    let id = raw_id
        .as_i64()
        .and_then(|id| i32::try_from(id).ok())
        .ok_or_else(|| CategoryShape::IdNotInteger {
            category: quiz_category.to_string(),
        })?;

    Ok(QuizQuery::new(CategoryFilter::from_raw(id), exclude))
}

/// Validate a search body. The category filter comes from the query string
/// and is optional.
pub fn validate_search_request(
    body: Option<&Value>,
    category: Option<CategoryId>,
) -> Result<SearchQuery, ValidationError> {
    let data = object_body(body, Payload::Search)?;
    let term = data
        .get(SEARCH_TERM_FIELD)
        .and_then(Value::as_str)
        .ok_or_else(|| ValidationError::MissingField {
            payload: Payload::Search,
            field: SEARCH_TERM_FIELD,
            body: render(body),
        })?;

    Ok(SearchQuery {
        term: term.to_string(),
        category,
    })
}

fn object_body(body: Option<&Value>, payload: Payload) -> Result<&Map<String, Value>, ValidationError> {
    body.and_then(Value::as_object)
        .ok_or(ValidationError::EmptyBody(payload))
}

/// Each key is checked on its own; all must be present.
fn require_fields(
    data: &Map<String, Value>,
    fields: &[&'static str],
    payload: Payload,
) -> Result<(), ValidationError> {
    match fields.iter().copied().find(|field| !data.contains_key(*field)) {
        Some(field) => Err(ValidationError::MissingField {
            payload,
            field,
            body: Value::Object(data.clone()).to_string(),
        }),
        None => Ok(()),
    }
}

fn required_text(data: &Map<String, Value>, field: TextField) -> Result<String, ValidationError> {
    let text = data[field.key()]
        .as_str()
        .ok_or(ValidationError::InvalidText(field))?
        .trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText(field));
    }
    Ok(text.to_string())
}

fn resolve_category(value: &Value, known: &[Category]) -> Option<CategoryId> {
    match value {
        Value::Number(n) => {
            let id = i32::try_from(n.as_i64()?).ok()?;
            known.iter().find(|c| c.id.get() == id).map(|c| c.id)
        }
        Value::String(label) => known.iter().find(|c| c.label == *label).map(|c| c.id),
        _ => None,
    }
}

fn render(body: Option<&Value>) -> String {
    body.map(Value::to_string).unwrap_or_else(|| "null".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn categories() -> Vec<Category> {
        vec![
            Category::new(CategoryId::new(1), "Science"),
            Category::new(CategoryId::new(6), "Sports"),
        ]
    }

    fn valid_question() -> Value {
        json!({
            "question": "Which country won the 2018 World Cup?",
            "answer": "France",
            "category": 6,
            "difficulty": 1
        })
    }

    fn new_question_error(body: Value) -> ValidationError {
        validate_new_question(Some(&body), &categories()).unwrap_err()
    }

    #[test]
    fn test_valid_question_is_normalized() {
        let body = json!({
            "question": "  Who discovered penicillin? ",
            "answer": "Alexander Fleming\n",
            "category": 1,
            "difficulty": 3
        });
        let cmd = validate_new_question(Some(&body), &categories()).unwrap();

        assert_eq!(cmd.question, "Who discovered penicillin?");
        assert_eq!(cmd.answer, "Alexander Fleming");
        assert_eq!(cmd.category, CategoryId::new(1));
        assert_eq!(cmd.difficulty.level(), 3);
    }

    #[test]
    fn test_category_label_resolves_to_id() {
        let mut body = valid_question();
        body["category"] = json!("Sports");
        let cmd = validate_new_question(Some(&body), &categories()).unwrap();
        assert_eq!(cmd.category, CategoryId::new(6));
    }

    #[test]
    fn test_absent_or_non_object_body() {
        let err = validate_new_question(None, &categories()).unwrap_err();
        assert_eq!(err, ValidationError::EmptyBody(Payload::NewQuestion));
        assert_eq!(err.to_string(), "Data is empty!");

        let err = new_question_error(json!("data"));
        assert_eq!(err.to_string(), "Data is empty!");
    }

    #[test]
    fn test_each_missing_key_is_detected() {
        for key in NEW_QUESTION_FIELDS {
            let mut body = valid_question();
            body.as_object_mut().unwrap().remove(key);

            match new_question_error(body) {
                ValidationError::MissingField { field, .. } => assert_eq!(field, key),
                other => panic!("expected MissingField for {key}, got {other:?}"),
            }
        }
        assert_eq!(
            new_question_error(json!({"data": 1})).to_string(),
            "Invalid data format!"
        );
    }

    #[test]
    fn test_empty_texts() {
        let mut body = valid_question();
        body["question"] = json!("");
        assert_eq!(new_question_error(body).to_string(), "Question is empty!");

        let mut body = valid_question();
        body["answer"] = json!("   ");
        assert_eq!(new_question_error(body).to_string(), "Answer is empty!");

        let mut body = valid_question();
        body["answer"] = json!(42);
        assert_eq!(
            new_question_error(body),
            ValidationError::InvalidText(TextField::Answer)
        );
    }

    #[test]
    fn test_unknown_category() {
        for category in [json!(200), json!("History"), json!(null), json!(1.5)] {
            let mut body = valid_question();
            body["category"] = category;
            assert_eq!(new_question_error(body).to_string(), "Invalid category value!");
        }
    }

    #[test]
    fn test_difficulty_out_of_range() {
        for difficulty in [json!(0), json!(6), json!(1000), json!("3"), json!(3.5), json!(true)] {
            let mut body = valid_question();
            body["difficulty"] = difficulty;
            assert_eq!(
                new_question_error(body),
                ValidationError::InvalidDifficulty
            );
        }
    }

    #[test]
    fn test_quiz_query_any_category() {
        let body = json!({"previous_questions": [4, 9, 4], "quiz_category": {"type": "all", "id": 0}});
        let query = validate_quiz_query(Some(&body)).unwrap();

        assert_eq!(query.filter, CategoryFilter::Any);
        assert_eq!(query.exclude.len(), 2);
        assert!(query.exclude.contains(&QuestionId::new(4)));
        assert!(query.exclude.contains(&QuestionId::new(9)));
    }

    #[test]
    fn test_quiz_query_specific_category() {
        let body = json!({"previous_questions": [], "quiz_category": {"type": "Science", "id": 1}});
        let query = validate_quiz_query(Some(&body)).unwrap();

        assert_eq!(query.filter, CategoryFilter::Only(CategoryId::new(1)));
        assert!(query.exclude.is_empty());
    }

    #[test]
    fn test_quiz_query_missing_body() {
        let err = validate_quiz_query(None).unwrap_err();
        assert_eq!(err.to_string(), "No data provided!");
    }

    #[test]
    fn test_quiz_query_missing_each_key() {
        let err = validate_quiz_query(Some(&json!({"A": "B"}))).unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"{"A":"B"},'previous_questions' and/or 'quiz_category' are missing!"#
        );

        // Only the second key missing must still be caught
        let err = validate_quiz_query(Some(&json!({"previous_questions": []}))).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::MissingField {
                field: "quiz_category",
                ..
            }
        ));
    }

    #[test]
    fn test_quiz_category_shape() {
        let body = json!({"previous_questions": [], "quiz_category": "quiz_1"});
        let err = validate_quiz_query(Some(&body)).unwrap_err();
        assert!(err
            .to_string()
            .ends_with(",'quiz_category' is None or not a dictionary!"));

        let body = json!({"previous_questions": [], "quiz_category": null});
        assert!(matches!(
            validate_quiz_query(Some(&body)).unwrap_err(),
            ValidationError::InvalidCategoryShape(CategoryShape::NotAnObject { .. })
        ));

        let body = json!({"previous_questions": [], "quiz_category": {"type": "Science", "not_id": 1}});
        let err = validate_quiz_query(Some(&body)).unwrap_err();
        assert!(err.to_string().contains("'id' key is missing!"));

        let body = json!({"previous_questions": [], "quiz_category": {"type": "Science", "id": "id_1"}});
        let err = validate_quiz_query(Some(&body)).unwrap_err();
        assert!(err.to_string().contains("'id' is not an integer!"));
    }

    #[test]
    fn test_previous_questions_must_be_id_list() {
        let body = json!({"previous_questions": "Q1", "quiz_category": {"id": 1}});
        let err = validate_quiz_query(Some(&body)).unwrap_err();
        assert_eq!(err.to_string(), r#""Q1", 'previous_questions' is not a list!"#);

        let body = json!({"previous_questions": [1, "two"], "quiz_category": {"id": 1}});
        assert!(matches!(
            validate_quiz_query(Some(&body)).unwrap_err(),
            ValidationError::InvalidPreviousList { .. }
        ));
    }

    #[test]
    fn test_quiz_check_order() {
        // the object check comes first
        let body = json!({"previous_questions": 5, "quiz_category": null});
        assert!(matches!(
            validate_quiz_query(Some(&body)).unwrap_err(),
            ValidationError::InvalidCategoryShape(CategoryShape::NotAnObject { .. })
        ));

        // then the previous list, before the id of the category
        let body = json!({"previous_questions": 5, "quiz_category": {"type": "Art"}});
        let err = validate_quiz_query(Some(&body)).unwrap_err();
        assert_eq!(err.to_string(), "5, 'previous_questions' is not a list!");

        let body = json!({"previous_questions": [1, "two"], "quiz_category": {"id": "x"}});
        assert!(matches!(
            validate_quiz_query(Some(&body)).unwrap_err(),
            ValidationError::InvalidPreviousList { .. }
        ));
    }

    #[test]
    fn test_search_request() {
        let body = json!({"searchTerm": " Peanut "});
        let query = validate_search_request(Some(&body), Some(CategoryId::new(4))).unwrap();
        assert_eq!(query.term, " Peanut ");
        assert_eq!(query.category, Some(CategoryId::new(4)));

        let err = validate_search_request(Some(&json!({"term": "x"})), None).unwrap_err();
        assert_eq!(err.to_string(), "Search term is missing!");

        let err = validate_search_request(None, None).unwrap_err();
        assert_eq!(err.to_string(), "Data is empty!");
    }
}
