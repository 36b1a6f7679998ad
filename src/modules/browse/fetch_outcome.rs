use serde::Serialize;

/// What happened to a user action once its fetch settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FetchOutcome {
    /// The response (success or failure) was committed to state.
    Applied,
    /// A newer request was issued meanwhile; the response was dropped.
    Superseded,
    /// The action was not valid in the current state; nothing was fetched.
    Skipped,
}

impl FetchOutcome {
    pub fn from_commit(committed: bool) -> Self {
        if committed {
            FetchOutcome::Applied
        } else {
            FetchOutcome::Superseded
        }
    }
}
