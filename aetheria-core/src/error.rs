//! Error types for aetheria-core

use thiserror::Error;
use uuid::Uuid;

use crate::types::QuestStatus;

/// Errors from the evaluation oracle.
#[derive(Error, Debug)]
pub enum OracleError {
    /// Transport failure reaching the oracle. Retried with backoff.
    #[error("request failed: {0}")]
    Request(String),

    /// The oracle answered with a non-success status. Retried with backoff.
    #[error("oracle API error: {0}")]
    Api(String),

    /// The oracle answered, but the payload was not the expected structure.
    /// Never retried.
    #[error("malformed oracle response: {0}")]
    Parse(String),
}

/// Errors from the content store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors from the progression controller.
#[derive(Error, Debug)]
pub enum ProgressionError {
    #[error("quest not found: {0}")]
    QuestNotFound(Uuid),

    #[error("crystal not found: {0}")]
    CrystalNotFound(Uuid),

    #[error("submission not found: {0}")]
    SubmissionNotFound(Uuid),

    #[error("quest {quest_id} is {status}, submissions are not accepted")]
    InvalidQuestState { quest_id: Uuid, status: QuestStatus },

    #[error("submission content is empty")]
    EmptySubmission,

    #[error("score {0} is out of range (0-100)")]
    ScoreOutOfRange(u32),

    #[error(transparent)]
    Oracle(#[from] OracleError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors validating an import package.
#[derive(Error, Debug)]
pub enum ImportError {
    #[error("malformed package: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("unsupported package version: {0}")]
    UnsupportedVersion(String),

    #[error("quest \"{quest_name}\" references unknown realm {realm_id}")]
    UnknownRealm { quest_name: String, realm_id: Uuid },
}
