//! Transient snackbar notices.
//!
//! DESIGN
//! ======
//! Notices are keyed by id: adding a notice under an id that is already
//! present replaces that notice in place instead of stacking a duplicate,
//! so repeated invocations of the same action surface exactly one entry.
//! Callers that do not care about replacement pass `None` and get a
//! generated id.

#[cfg(test)]
#[path = "notices_test.rs"]
mod notices_test;

/// Notice id shared by the reusable-block delete action so repeated
/// deletes replace the previous outcome notice.
pub const REUSABLE_BLOCK_NOTICE_ID: &str = "REUSABLE_BLOCK_NOTICE_ID";

/// Visual category of a notice.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// One snackbar entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Replacement key; stable for repeated actions, generated otherwise.
    pub id: String,
    pub kind: NoticeKind,
    pub message: String,
}

/// Ordered snackbar notices, oldest first.
#[derive(Clone, Debug, Default)]
pub struct NoticesState {
    pub notices: Vec<Notice>,
}

impl NoticesState {
    /// Add a success notice, replacing any notice with the same id.
    pub fn add_success(&mut self, id: Option<&str>, message: impl Into<String>) {
        self.upsert(id, NoticeKind::Success, message.into());
    }

    /// Add an error notice, replacing any notice with the same id.
    pub fn add_error(&mut self, id: Option<&str>, message: impl Into<String>) {
        self.upsert(id, NoticeKind::Error, message.into());
    }

    /// Remove a notice by id. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: &str) {
        self.notices.retain(|n| n.id != id);
    }

    fn upsert(&mut self, id: Option<&str>, kind: NoticeKind, message: String) {
        let id = id.map_or_else(|| uuid::Uuid::new_v4().to_string(), ToOwned::to_owned);
        if let Some(existing) = self.notices.iter_mut().find(|n| n.id == id) {
            existing.kind = kind;
            existing.message = message;
            return;
        }
        self.notices.push(Notice { id, kind, message });
    }
}
