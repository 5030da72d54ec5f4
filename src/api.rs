//! Request and response types for transports built on a [`RelationStore`].
//!
//! A transport (HTTP route, stdin loop, RPC handler) decodes its input into
//! these types, calls [`add_synonym`] or [`search_synonyms`], and encodes the
//! response. Failures are reported in the response body (`success: false`
//! plus a message) rather than as Rust errors, and [`ResponseStatus`] tells
//! the transport which status code to use.

use log::warn;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Value, json};

use crate::error::SynonymousError;
use crate::synonym::{RelationStore, SearchResult};

/// A word and one of its synonyms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynonymPair {
    pub word: String,
    pub synonym: String,
}

/// Request to add a synonym pair.
pub type AddSynonymRequest = SynonymPair;

/// Response to an add request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddSynonymResponse {
    pub success: bool,
    pub message: String,
}

/// Response to a search request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<SearchResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// HTTP-style status for a response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseStatus {
    Ok,
    BadRequest,
}

impl ResponseStatus {
    pub fn code(&self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::BadRequest => 400,
        }
    }

    fn from_success(success: bool) -> Self {
        if success {
            ResponseStatus::Ok
        } else {
            ResponseStatus::BadRequest
        }
    }
}

impl AddSynonymResponse {
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::from_success(self.success)
    }

    fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            message: message.into(),
        }
    }
}

impl ApiResponse {
    pub fn status(&self) -> ResponseStatus {
        ResponseStatus::from_success(self.success)
    }

    fn failure<S: Into<String>>(message: S) -> Self {
        Self {
            success: false,
            data: None,
            message: Some(message.into()),
        }
    }
}

/// Add the pair in `request` to `store`.
pub fn add_synonym(store: &RelationStore, request: &AddSynonymRequest) -> AddSynonymResponse {
    if request.word.is_empty() || request.synonym.is_empty() {
        return AddSynonymResponse::failure("Both word and synonym are required");
    }

    match store.add_pair(&request.word, &request.synonym) {
        Ok(()) => AddSynonymResponse {
            success: true,
            message: format!(
                "Successfully added \"{}\" ⟷ \"{}\"",
                request.word, request.synonym
            ),
        },
        Err(e) => {
            warn!(
                "Rejected synonym pair {:?} / {:?}: {}",
                request.word, request.synonym, e
            );
            AddSynonymResponse::failure(error_message(e))
        }
    }
}

/// Search `store` for the synonyms of `word`.
///
/// A missing or empty parameter is rejected here. A whitespace-only word is
/// passed through and finds nothing.
pub fn search_synonyms(store: &RelationStore, word: Option<&str>) -> ApiResponse {
    match word {
        Some(word) if !word.is_empty() => ApiResponse {
            success: true,
            data: Some(store.search(word)),
            message: None,
        },
        _ => ApiResponse::failure("Word parameter is required"),
    }
}

fn error_message(error: SynonymousError) -> String {
    match error {
        SynonymousError::InvalidInput(message) => message,
        other => other.to_string(),
    }
}

/// A decoded request line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    Add(AddSynonymRequest),
    Search { word: Option<String> },
}

/// Fields of a request line before it is classified.
#[derive(Debug, Deserialize)]
struct RawRequest {
    #[serde(default)]
    word: Option<Value>,
    /// `None` only when the key is absent; an explicit `null` is `Some(Value::Null)`.
    #[serde(default, deserialize_with = "present")]
    synonym: Option<Value>,
}

fn present<'de, D>(deserializer: D) -> std::result::Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl Request {
    /// Decode a JSON request.
    ///
    /// A `synonym` key makes it an add request whatever its value; non-string
    /// values decode as empty strings and are rejected by [`add_synonym`].
    /// Without a `synonym` key it is a search, and a non-string `word` counts
    /// as missing.
    pub fn from_json(line: &str) -> serde_json::Result<Self> {
        let raw: RawRequest = serde_json::from_str(line)?;
        let word = raw.word.as_ref().and_then(Value::as_str).map(str::to_string);

        Ok(match raw.synonym {
            Some(synonym) => Request::Add(SynonymPair {
                word: word.unwrap_or_default(),
                synonym: synonym.as_str().unwrap_or_default().to_string(),
            }),
            None => Request::Search { word },
        })
    }
}

/// Decode one JSON request, run it against `store`, and return the JSON response.
///
/// `{"word": .., "synonym": ..}` adds a pair; `{"word": ..}` searches.
pub fn handle_request_line(store: &RelationStore, line: &str) -> Value {
    let request = match Request::from_json(line) {
        Ok(request) => request,
        Err(e) => {
            warn!("Undecodable request {line:?}: {e}");
            return json!({
                "success": false,
                "message": format!("Invalid request: {e}"),
            });
        }
    };

    let response = match request {
        Request::Add(pair) => serde_json::to_value(add_synonym(store, &pair)),
        Request::Search { word } => serde_json::to_value(search_synonyms(store, word.as_deref())),
    };

    response.unwrap_or_else(|e| {
        json!({
            "success": false,
            "message": format!("Failed to encode response: {e}"),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::synonym::GraphBackend;

    fn pair(word: &str, synonym: &str) -> AddSynonymRequest {
        SynonymPair {
            word: word.to_string(),
            synonym: synonym.to_string(),
        }
    }

    #[test]
    fn test_add_synonym_success() {
        let store = RelationStore::default();
        let response = add_synonym(&store, &pair("Joyful", "content"));

        assert!(response.success);
        assert_eq!(response.message, "Successfully added \"Joyful\" ⟷ \"content\"");
        assert_eq!(response.status().code(), 200);
        assert_eq!(
            store.search("happy").synonyms,
            vec!["content", "glad", "joyful"]
        );
    }

    #[test]
    fn test_add_synonym_missing_fields() {
        let store = RelationStore::with_backend(GraphBackend::Clique);
        let response = add_synonym(&store, &pair("", "x"));

        assert!(!response.success);
        assert_eq!(response.message, "Both word and synonym are required");
        assert_eq!(response.status(), ResponseStatus::BadRequest);
    }

    #[test]
    fn test_add_synonym_invalid_input() {
        let store = RelationStore::with_backend(GraphBackend::Clique);

        let response = add_synonym(&store, &pair("  ", "x"));
        assert!(!response.success);
        assert_eq!(response.message, "Word and synonym cannot be empty");

        let response = add_synonym(&store, &pair("Same", "same "));
        assert!(!response.success);
        assert_eq!(response.message, "Word and synonym cannot be the same");
        assert!(store.is_empty());
    }

    #[test]
    fn test_search_synonyms() {
        let store = RelationStore::default();

        let response = search_synonyms(&store, Some("Happy"));
        assert!(response.success);
        assert_eq!(
            response.data,
            Some(SearchResult {
                word: "happy".to_string(),
                synonyms: vec!["glad".to_string(), "joyful".to_string()],
            })
        );

        let response = search_synonyms(&store, Some("zzz"));
        assert_eq!(response.data.unwrap().synonyms, Vec::<String>::new());
    }

    #[test]
    fn test_search_synonyms_requires_word() {
        let store = RelationStore::default();
        for word in [None, Some("")] {
            let response = search_synonyms(&store, word);
            assert!(!response.success);
            assert_eq!(response.message.as_deref(), Some("Word parameter is required"));
            assert_eq!(response.status().code(), 400);
        }

        let response = search_synonyms(&store, Some("   "));
        assert!(response.success);
        assert!(response.data.unwrap().synonyms.is_empty());
    }

    #[test]
    fn test_api_response_json_shape() {
        let store = RelationStore::default();
        let value = serde_json::to_value(search_synonyms(&store, Some("big"))).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "data": {"word": "big", "synonyms": ["large"]}})
        );

        let value = serde_json::to_value(search_synonyms(&store, None)).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "message": "Word parameter is required"})
        );
    }

    #[test]
    fn test_request_from_json() {
        assert_eq!(
            Request::from_json(r#"{"word": "big", "synonym": "huge"}"#).unwrap(),
            Request::Add(pair("big", "huge"))
        );
        assert_eq!(
            Request::from_json(r#"{"word": "big", "synonym": null}"#).unwrap(),
            Request::Add(pair("big", ""))
        );
        assert_eq!(
            Request::from_json(r#"{"word": 3, "synonym": 7}"#).unwrap(),
            Request::Add(pair("", ""))
        );
        assert_eq!(
            Request::from_json(r#"{"word": "big"}"#).unwrap(),
            Request::Search {
                word: Some("big".to_string())
            }
        );
        assert_eq!(
            Request::from_json(r#"{"word": false}"#).unwrap(),
            Request::Search { word: None }
        );
        assert!(Request::from_json("search big").is_err());
    }

    #[test]
    fn test_handle_request_line_non_string_synonym() {
        let store = RelationStore::default();
        for line in [
            r#"{"word": "big", "synonym": null}"#,
            r#"{"word": "big", "synonym": 7}"#,
        ] {
            let response = handle_request_line(&store, line);
            assert_eq!(
                response,
                json!({"success": false, "message": "Both word and synonym are required"})
            );
        }
        assert_eq!(store.search("big").synonyms, vec!["large"]);
    }

    #[test]
    fn test_handle_request_line() {
        let store = RelationStore::default();

        let response = handle_request_line(&store, r#"{"word": "fast", "synonym": "rapid"}"#);
        assert_eq!(response["success"], json!(true));

        let response = handle_request_line(&store, r#"{"word": "quick"}"#);
        assert_eq!(response["data"]["synonyms"], json!(["fast", "rapid"]));

        let response = handle_request_line(&store, r#"{}"#);
        assert_eq!(response["message"], json!("Word parameter is required"));

        let response = handle_request_line(&store, "add fast rapid");
        assert_eq!(response["success"], json!(false));
        assert!(
            response["message"]
                .as_str()
                .unwrap()
                .starts_with("Invalid request")
        );
    }
}
