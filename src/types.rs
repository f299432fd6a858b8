//! API types for the mem.ai SDK.

use serde::{Deserialize, Serialize};

/// Request for the mem-it endpoint.
#[derive(Debug, Clone, Serialize, Default)]
pub struct MemItRequest {
    /// Free-form input: plain text, Markdown, HTML, or a URL.
    pub input: String,
    /// Instructions for how the service should process the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instructions: Option<String>,
    /// Additional context to interpret the input against.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// ISO 8601 timestamp to associate with the input.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

/// Response from the mem-it endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct MemItResponse {
    /// Unique identifier of the processed request.
    pub request_id: String,
    /// Processing status reported by the service.
    pub status: String,
    /// Operations the service performed for this input.
    pub operations: Vec<Operation>,
}

/// An operation performed by the service while processing a request.
///
/// The service adds operation kinds over time; unrecognized kinds
/// deserialize as [`Operation::Other`] instead of failing.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Operation {
    /// A new note was created.
    CreatedNote {
        /// ID of the created note.
        note_id: String,
        /// Title derived from the content.
        title: String,
        /// URL of the note in the app.
        url: String,
    },
    /// An existing note was added to a collection.
    AddedNoteToCollection {
        /// ID of the collection.
        collection_id: String,
        /// Title of the collection.
        collection_title: String,
    },
    /// An operation kind this SDK does not know about.
    #[serde(other)]
    Other,
}

/// A toggle-or-instruction value accepted by note creation options.
///
/// The API accepts either a boolean (use the default behavior or not) or a
/// free-text instruction refining the behavior.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Directive {
    /// Enable or disable the default behavior.
    Enabled(bool),
    /// Free-text instruction refining the behavior.
    Instruction(String),
}

impl From<bool> for Directive {
    fn from(enabled: bool) -> Self {
        Directive::Enabled(enabled)
    }
}

impl From<&str> for Directive {
    fn from(instruction: &str) -> Self {
        Directive::Instruction(instruction.to_string())
    }
}

impl From<String> for Directive {
    fn from(instruction: String) -> Self {
        Directive::Instruction(instruction)
    }
}

/// Request to create a note.
#[derive(Debug, Clone, Serialize, Default)]
pub struct CreateNoteRequest {
    /// Markdown content of the note.
    pub content: String,
    /// Collection titles or IDs to add the note to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub add_to_collections: Option<Vec<String>>,
    /// Let the service organize the note, or tell it how.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_organize: Option<Directive>,
    /// Template title or ID to apply to the note.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_template: Option<String>,
    /// Let the service format the note, or tell it how.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_format: Option<Directive>,
    /// Creation timestamp override (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// Update timestamp override (ISO 8601).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// A note as returned by the API.
#[derive(Debug, Clone, Deserialize)]
pub struct Note {
    /// Note ID.
    pub id: String,
    /// Title derived from the content.
    pub title: String,
    /// URL of the note in the app.
    pub url: String,
    /// Markdown content as stored.
    pub content: String,
    /// Operations performed while creating the note.
    pub operations: Vec<Operation>,
    /// Creation timestamp (ISO 8601).
    pub created_at: String,
    /// Last update timestamp (ISO 8601).
    pub updated_at: String,
}
