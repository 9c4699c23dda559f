//! Add-song form.
//!
//! Editing → Validating → Submitting → (Success | Failed) → Editing.
//! Validation failures never reach the network.

use songbook_core::{NewSong, SongSubmission, SongbookApi, SongbookError};
use tracing::{debug, info};

pub const CREATED_MESSAGE: &str = "Song has created";
const SUBMIT_ERROR: &str = "Error submitting form.";

/// Phase of the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Editing,
    Submitting,
}

/// Whether a notice reports success or a problem.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Message shown above the form buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

#[derive(Debug)]
pub struct AddSongPage {
    pub draft: NewSong,
    notice: Option<Notice>,
    phase: FormPhase,
}

impl Default for AddSongPage {
    fn default() -> Self {
        Self {
            draft: NewSong::default(),
            notice: None,
            phase: FormPhase::Editing,
        }
    }
}

impl AddSongPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// The save button is disabled while a submission is pending.
    pub fn can_submit(&self) -> bool {
        self.phase == FormPhase::Editing
    }

    /// Validate and enter `Submitting`.
    ///
    /// Returns the payload to send, or `None` when validation failed (the
    /// notice says why) or a submission is already pending.
    pub fn begin_submit(&mut self) -> Option<SongSubmission> {
        if !self.can_submit() {
            return None;
        }
        self.notice = None;

        match self.draft.validate() {
            Ok(submission) => {
                self.phase = FormPhase::Submitting;
                Some(submission)
            }
            Err(e) => {
                debug!(error = %e, "Song rejected before submit");
                self.notice = Some(Notice::error(e.to_string()));
                None
            }
        }
    }

    /// Apply the server's answer and return to `Editing`.
    pub fn finish_submit(&mut self, result: songbook_core::Result<()>) {
        self.phase = FormPhase::Editing;

        match result {
            Ok(()) => {
                info!("Song created");
                self.draft = NewSong::default();
                self.notice = Some(Notice::success(CREATED_MESSAGE));
            }
            Err(SongbookError::Application(message)) => {
                self.notice = Some(Notice::error(message));
            }
            Err(e) => {
                debug!(error = %e, "Song submission failed");
                self.notice = Some(Notice::error(SUBMIT_ERROR));
            }
        }
    }

    /// Validate, send and apply the outcome.
    pub async fn submit<A>(&mut self, api: &A)
    where
        A: SongbookApi + ?Sized,
    {
        let Some(submission) = self.begin_submit() else {
            return;
        };
        let result = api.create_song(&submission).await;
        self.finish_submit(result);
    }

    /// Clear every field and the notice, whatever the phase.
    pub fn cancel(&mut self) {
        self.draft = NewSong::default();
        self.notice = None;
    }
}
