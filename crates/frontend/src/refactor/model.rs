//! Upload lifecycle state machine.
//!
//! All UI state lives in one [`UploadModel`]. The view layer translates DOM
//! events into [`UploadEvent`]s and executes the [`UploadAction`]s returned
//! by the pure [`UploadModel::apply`] step (network call, copy-reset timer).
//! Keeping the transitions free of browser types makes each of them
//! testable on the host target.

use contracts::refactor::{RefactorResponse, DEFAULT_OUTPUT_FILENAME};

/// Shown when the service is unreachable or replies without a structured
/// `detail` message.
pub const FALLBACK_ERROR: &str = "Failed to connect to the refactoring backend.";

/// Delay before the copy confirmation indicator resets.
pub const COPY_CONFIRM_MS: u32 = 2000;

/// Status of the in-flight or completed refactor request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestStatus {
    Idle,
    Loading,
    Succeeded,
    Failed,
}

/// Metadata of the picked file.
///
/// The raw `web_sys::File` handle never enters the model; it stays in the
/// view layer and is only touched when a submit actually fires.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileMeta {
    pub name: String,
    pub size: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// The service replied with a structured detail message.
    Service(String),
    /// Network failure, or a reply that could not be parsed.
    Transport,
}

impl UploadError {
    pub fn message(&self) -> String {
        match self {
            UploadError::Service(detail) => detail.clone(),
            UploadError::Transport => FALLBACK_ERROR.to_string(),
        }
    }
}

/// The closed set of events the controller reacts to.
#[derive(Debug, Clone)]
pub enum UploadEvent {
    FileSelected { name: String, size: u64 },
    SubmitRequested,
    ResponseReceived(Result<RefactorResponse, UploadError>),
    CopyRequested,
    CopyResetElapsed { token: u64 },
}

/// Side effect requested by a transition, executed by the view layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadAction {
    /// Post the selected file to the service.
    SubmitUpload,
    /// Clear the copy confirmation after [`COPY_CONFIRM_MS`], unless a newer
    /// copy bumped the token in the meantime.
    ScheduleCopyReset { token: u64 },
}

#[derive(Debug, Clone)]
pub struct UploadModel {
    pub selected_file: Option<FileMeta>,
    pub status: RequestStatus,
    pub result_text: Option<String>,
    pub output_filename: String,
    pub error_message: Option<String>,
    pub copy_confirmed: bool,
    copy_token: u64,
}

impl Default for UploadModel {
    fn default() -> Self {
        Self {
            selected_file: None,
            status: RequestStatus::Idle,
            result_text: None,
            output_filename: DEFAULT_OUTPUT_FILENAME.to_string(),
            error_message: None,
            copy_confirmed: false,
            copy_token: 0,
        }
    }
}

impl UploadModel {
    /// Apply one event and return the side effect it asks for, if any.
    pub fn apply(&mut self, event: UploadEvent) -> Option<UploadAction> {
        match event {
            UploadEvent::FileSelected { name, size } => {
                // Picking a file invalidates any previous output or error,
                // so right after selection neither is populated.
                self.selected_file = Some(FileMeta { name, size });
                self.result_text = None;
                self.error_message = None;
                // A completed status describes data that no longer exists;
                // an in-flight request keeps Loading so the submit guard
                // still holds and only one request is ever in flight.
                if self.status != RequestStatus::Loading {
                    self.status = RequestStatus::Idle;
                }
                None
            }
            UploadEvent::SubmitRequested => {
                if self.selected_file.is_none() || self.status == RequestStatus::Loading {
                    return None;
                }
                self.status = RequestStatus::Loading;
                self.error_message = None;
                Some(UploadAction::SubmitUpload)
            }
            UploadEvent::ResponseReceived(result) => {
                match result {
                    Ok(response) => {
                        self.result_text = Some(response.improved_code);
                        self.output_filename = response.filename;
                        self.error_message = None;
                        self.status = RequestStatus::Succeeded;
                    }
                    Err(err) => {
                        // A prior successful result stays visible; only a
                        // new file selection clears it.
                        self.error_message = Some(err.message());
                        self.status = RequestStatus::Failed;
                    }
                }
                None
            }
            UploadEvent::CopyRequested => {
                self.result_text.as_ref()?;
                self.copy_confirmed = true;
                self.copy_token += 1;
                Some(UploadAction::ScheduleCopyReset {
                    token: self.copy_token,
                })
            }
            UploadEvent::CopyResetElapsed { token } => {
                // A stale timer from an earlier copy must not cut a newer
                // confirmation window short.
                if token == self.copy_token {
                    self.copy_confirmed = false;
                }
                None
            }
        }
    }

    /// Trigger-site guard for the submit control.
    pub fn can_submit(&self) -> bool {
        self.selected_file.is_some() && self.status != RequestStatus::Loading
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn select(model: &mut UploadModel, name: &str) {
        model.apply(UploadEvent::FileSelected {
            name: name.to_string(),
            size: 42,
        });
    }

    fn ok_response(code: &str, filename: &str) -> Result<RefactorResponse, UploadError> {
        Ok(RefactorResponse {
            filename: filename.to_string(),
            original_code: String::new(),
            improved_code: code.to_string(),
        })
    }

    #[test]
    fn test_default_model() {
        let model = UploadModel::default();
        assert_eq!(model.status, RequestStatus::Idle);
        assert_eq!(model.output_filename, "improved_code.txt");
        assert!(model.selected_file.is_none());
        assert!(!model.can_submit());
    }

    #[test]
    fn test_selecting_file_clears_previous_output_and_error() {
        let mut model = UploadModel::default();
        model.result_text = Some("old".to_string());
        model.error_message = Some("old error".to_string());
        model.status = RequestStatus::Failed;

        select(&mut model, "messy.py");

        assert_eq!(model.selected_file.as_ref().unwrap().name, "messy.py");
        assert!(model.result_text.is_none());
        assert!(model.error_message.is_none());
        assert_eq!(model.status, RequestStatus::Idle);
    }

    #[test]
    fn test_submit_without_file_is_a_noop() {
        let mut model = UploadModel::default();
        let action = model.apply(UploadEvent::SubmitRequested);
        assert!(action.is_none());
        assert_eq!(model.status, RequestStatus::Idle);
        assert!(model.error_message.is_none());
    }

    #[test]
    fn test_submit_while_loading_is_a_noop() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        assert_eq!(model.apply(UploadEvent::SubmitRequested), Some(UploadAction::SubmitUpload));
        assert!(model.apply(UploadEvent::SubmitRequested).is_none());
        assert!(!model.can_submit());
    }

    #[test]
    fn test_reselecting_while_loading_keeps_submit_disabled() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        assert_eq!(model.status, RequestStatus::Loading);

        // Re-selection during a request is allowed, but it must not re-arm
        // the trigger and race a second request against the first.
        select(&mut model, "other.py");
        assert_eq!(model.status, RequestStatus::Loading);
        assert!(!model.can_submit());
        assert!(model.apply(UploadEvent::SubmitRequested).is_none());

        // The new selection still cleared the previous output and error.
        assert_eq!(model.selected_file.as_ref().unwrap().name, "other.py");
        assert!(model.result_text.is_none());
        assert!(model.error_message.is_none());
    }

    #[test]
    fn test_successful_response() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(ok_response("print(1)", "out.py")));

        assert_eq!(model.result_text.as_deref(), Some("print(1)"));
        assert_eq!(model.output_filename, "out.py");
        assert_eq!(model.status, RequestStatus::Succeeded);
        assert!(model.error_message.is_none());
    }

    #[test]
    fn test_service_error_surfaces_detail_verbatim() {
        let mut model = UploadModel::default();
        select(&mut model, "image.png");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(Err(UploadError::Service(
            "unsupported file type".to_string(),
        ))));

        assert_eq!(model.error_message.as_deref(), Some("unsupported file type"));
        assert_eq!(model.status, RequestStatus::Failed);
        assert!(model.result_text.is_none());
    }

    #[test]
    fn test_transport_error_uses_fallback_message() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(Err(UploadError::Transport)));

        assert_eq!(model.error_message.as_deref(), Some(FALLBACK_ERROR));
        assert_eq!(model.status, RequestStatus::Failed);
    }

    #[test]
    fn test_failed_resubmit_keeps_prior_result() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(ok_response("print(1)", "out.py")));

        // Same file submitted again, this time the service fails.
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(Err(UploadError::Transport)));

        assert_eq!(model.result_text.as_deref(), Some("print(1)"));
        assert_eq!(model.error_message.as_deref(), Some(FALLBACK_ERROR));
        assert_eq!(model.status, RequestStatus::Failed);
    }

    #[test]
    fn test_copy_confirmation_sets_and_resets() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(ok_response("print(1)", "out.py")));

        let action = model.apply(UploadEvent::CopyRequested);
        let Some(UploadAction::ScheduleCopyReset { token }) = action else {
            panic!("expected a copy-reset action, got {action:?}");
        };
        assert!(model.copy_confirmed);

        model.apply(UploadEvent::CopyResetElapsed { token });
        assert!(!model.copy_confirmed);
    }

    #[test]
    fn test_stale_copy_timer_does_not_clear_newer_window() {
        let mut model = UploadModel::default();
        select(&mut model, "messy.py");
        model.apply(UploadEvent::SubmitRequested);
        model.apply(UploadEvent::ResponseReceived(ok_response("print(1)", "out.py")));

        let first = model.apply(UploadEvent::CopyRequested);
        let second = model.apply(UploadEvent::CopyRequested);
        let Some(UploadAction::ScheduleCopyReset { token: stale }) = first else {
            panic!("expected a copy-reset action");
        };
        let Some(UploadAction::ScheduleCopyReset { token: current }) = second else {
            panic!("expected a copy-reset action");
        };

        model.apply(UploadEvent::CopyResetElapsed { token: stale });
        assert!(model.copy_confirmed, "stale timer must not end the new window");

        model.apply(UploadEvent::CopyResetElapsed { token: current });
        assert!(!model.copy_confirmed);
    }

    #[test]
    fn test_copy_without_result_is_a_noop() {
        let mut model = UploadModel::default();
        assert!(model.apply(UploadEvent::CopyRequested).is_none());
        assert!(!model.copy_confirmed);
    }
}
