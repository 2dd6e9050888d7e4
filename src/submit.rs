//! Form Submission
//!
//! The write side of the panel: validate what the user entered, send it,
//! and report the server's answer. Nothing here touches the DOM; components
//! read the field values and hand them in.

use crate::api::{BookmarkApi, ConfigApi};
use crate::error::{ApiError, ValidationError};
use crate::models::{ApiReply, BookmarkSubmission};
use crate::notify::{self, Notifier};

/// Shown when the server's reply carries no message
const NO_MESSAGE: &str = "The server did not return a message";

/// Raw values of the add-bookmark form at submit time
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BookmarkForm {
    /// Value of the group dropdown ("" = placeholder)
    pub selected_group: String,
    /// Free-text group name, used when no group is selected
    pub new_group_name: String,
    pub service_name: String,
    pub abbr: String,
    pub url: String,
}

impl BookmarkForm {
    /// Selected group, or the free-text one if nothing is selected
    pub fn effective_group_name(&self) -> &str {
        if self.selected_group.is_empty() {
            &self.new_group_name
        } else {
            &self.selected_group
        }
    }

    /// Build the request body. Only the group name is required; the other
    /// fields pass through as typed, empty or not.
    pub fn prepare(&self) -> Result<BookmarkSubmission, ValidationError> {
        let group_name = self.effective_group_name();
        if group_name.is_empty() {
            return Err(ValidationError::MissingGroupName);
        }
        Ok(BookmarkSubmission {
            group_name: group_name.to_string(),
            service_name: self.service_name.clone(),
            abbr: self.abbr.clone(),
            url: self.url.clone(),
        })
    }
}

/// How a submit ended
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Rejected before sending; validation notice shown
    Rejected(ValidationError),
    /// Server replied; its message was shown
    Answered(ApiReply),
    /// Request failed; failure notice shown
    Failed(ApiError),
}

fn report_reply<N: Notifier + ?Sized>(notifier: &N, log_prefix: &str, reply: ApiReply) -> SubmitOutcome {
    if reply.message.is_empty() {
        notifier.notify(NO_MESSAGE);
    } else {
        notifier.notify(&reply.message);
    }
    if reply.is_success() {
        notify::log(&format!("{} Done: {}", log_prefix, reply.message));
    } else {
        notify::warn(&format!("{} Server reported failure: {:?}", log_prefix, reply));
    }
    SubmitOutcome::Answered(reply)
}

fn report_failure<N: Notifier + ?Sized>(notifier: &N, log_prefix: &str, action: &str, err: ApiError) -> SubmitOutcome {
    notify::error(&format!("{} {} failed: {}", log_prefix, action, err));
    notifier.notify(&format!("{} failed: {}", action, err.user_message()));
    SubmitOutcome::Failed(err)
}

/// Submit the add-bookmark form.
///
/// The page is left as-is afterwards, even on success.
pub async fn submit_bookmark<A, N>(api: &A, notifier: &N, form: &BookmarkForm) -> SubmitOutcome
where
    A: BookmarkApi + ?Sized,
    N: Notifier + ?Sized,
{
    const LOG: &str = "[AddBookmark]";

    let submission = match form.prepare() {
        Ok(submission) => submission,
        Err(e) => {
            notify::warn(&format!("{} Rejected: {}", LOG, e));
            notifier.notify(&e.to_string());
            return SubmitOutcome::Rejected(e);
        }
    };

    notify::log(&format!(
        "{} Adding '{}' to group '{}'",
        LOG, submission.service_name, submission.group_name
    ));
    match api.create_bookmark(&submission).await {
        Ok(reply) => report_reply(notifier, LOG, reply),
        Err(e) => report_failure(notifier, LOG, "Adding bookmark", e),
    }
}

/// Make the selected config file the active one
pub async fn switch_config_file<A, N>(api: &A, notifier: &N, file_name: &str) -> SubmitOutcome
where
    A: ConfigApi + ?Sized,
    N: Notifier + ?Sized,
{
    const LOG: &str = "[ConfigSwitcher]";

    if file_name.is_empty() {
        let e = ValidationError::MissingConfigFile;
        notify::warn(&format!("{} Rejected: {}", LOG, e));
        notifier.notify(&e.to_string());
        return SubmitOutcome::Rejected(e);
    }

    notify::log(&format!("{} Switching to '{}'", LOG, file_name));
    match api.switch_config(file_name).await {
        Ok(reply) => report_reply(notifier, LOG, reply),
        Err(e) => report_failure(notifier, LOG, "Switching config", e),
    }
}
