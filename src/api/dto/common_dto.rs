//! Shared DTO types used across multiple endpoints.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use utoipa::ToSchema;

use crate::domain::genres::GENRE_CHOICES;
use crate::domain::validation::STATE_CHOICES;

/// Urlencoded body of `POST /venues/search` and `POST /artists/search`.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct SearchForm {
    /// Substring to look for in names. Missing or empty matches everything.
    #[serde(default)]
    pub search_term: String,
}

/// Search response: the echoed term plus the matches.
#[derive(Debug, Serialize, ToSchema)]
pub struct SearchResponse<T> {
    /// The term as submitted.
    pub search_term: String,
    /// Number of matches.
    pub count: usize,
    /// The matches.
    pub data: Vec<T>,
}

/// Response to a successful write.
#[derive(Debug, Serialize, ToSchema)]
pub struct WriteResponse {
    /// Key of the record written.
    pub id: i64,
    /// User-facing confirmation.
    pub message: String,
}

impl WriteResponse {
    /// Creates a response for record `id`.
    #[must_use]
    pub fn new(id: impl Into<i64>, message: String) -> Self {
        Self {
            id: id.into(),
            message,
        }
    }
}

/// The fixed choice lists offered by the venue and artist forms.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormChoices {
    /// Selectable genres.
    pub genres: Vec<String>,
    /// Selectable state codes.
    pub states: Vec<String>,
}

impl Default for FormChoices {
    fn default() -> Self {
        Self {
            genres: GENRE_CHOICES.iter().map(|g| (*g).to_string()).collect(),
            states: STATE_CHOICES.iter().map(|s| (*s).to_string()).collect(),
        }
    }
}

/// A form to render: blank for creation, prefilled for editing.
#[derive(Debug, Serialize, ToSchema)]
pub struct FormPage<T> {
    /// Key of the record being edited; absent on creation forms.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Current field values.
    pub form: T,
    /// Choice lists for the select fields.
    pub choices: FormChoices,
}

impl<T> FormPage<T> {
    /// A creation form.
    #[must_use]
    pub fn blank(form: T) -> Self {
        Self {
            id: None,
            form,
            choices: FormChoices::default(),
        }
    }

    /// An edit form for record `id`.
    #[must_use]
    pub fn prefilled(id: impl Into<i64>, form: T) -> Self {
        Self {
            id: Some(id.into()),
            form,
            choices: FormChoices::default(),
        }
    }
}

/// Reads a checkbox: a JSON boolean, or the string an HTML form posts for
/// a ticked box (`y`, `on`, `true`, `1`). Leave the field out for unticked.
pub(crate) fn checkbox<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    struct CheckboxVisitor;

    impl Visitor<'_> for CheckboxVisitor {
        type Value = bool;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a boolean or a checkbox value")
        }

        fn visit_bool<E: de::Error>(self, value: bool) -> Result<bool, E> {
            Ok(value)
        }

        fn visit_str<E: de::Error>(self, value: &str) -> Result<bool, E> {
            match value.trim().to_ascii_lowercase().as_str() {
                "y" | "yes" | "on" | "true" | "1" => Ok(true),
                "" | "n" | "no" | "off" | "false" | "0" => Ok(false),
                other => Err(E::invalid_value(de::Unexpected::Str(other), &self)),
            }
        }
    }

    deserializer.deserialize_any(CheckboxVisitor)
}
