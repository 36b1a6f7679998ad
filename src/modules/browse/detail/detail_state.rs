use serde::Serialize;

use crate::modules::catalog::MovieDetail;
use crate::shared::errors::FetchErrorKind;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum DetailStatus {
    /// No identifier in the route; terminal until one arrives.
    NoId,
    Loading,
    Ready,
    Error,
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetailState {
    /// Route parameter as received.
    pub id: Option<String>,
    pub record: Option<MovieDetail>,
    pub status: DetailStatus,
    pub error_message: Option<String>,
    pub error_kind: Option<FetchErrorKind>,
}

impl Default for DetailState {
    fn default() -> Self {
        Self::no_id()
    }
}

impl DetailState {
    pub fn no_id() -> Self {
        Self {
            id: None,
            record: None,
            status: DetailStatus::NoId,
            error_message: None,
            error_kind: None,
        }
    }

    pub fn loading(id: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            status: DetailStatus::Loading,
            ..Self::no_id()
        }
    }

    pub fn not_found(id: &str, message: &str) -> Self {
        Self {
            id: Some(id.to_string()),
            status: DetailStatus::NotFound,
            error_message: Some(message.to_string()),
            error_kind: Some(FetchErrorKind::NotFound),
            ..Self::no_id()
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == DetailStatus::Loading
    }

    /// True when this state already belongs to `id` and is not in a failed state.
    pub fn settled_for(&self, id: &str) -> bool {
        self.id.as_deref() == Some(id)
            && matches!(self.status, DetailStatus::Loading | DetailStatus::Ready)
    }
}
