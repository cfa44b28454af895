use super::{Generation, Phase, Ticket};
use crate::types::{ResumeFile, SkillsResponse};
use crate::{ApiClient, Result};
use tracing::{debug, warn};

pub const STATUS_NO_FILE: &str = "Please choose a PDF file.";
pub const STATUS_UPLOADING: &str = "Uploading & processing...";
pub const STATUS_DONE: &str = "Done!";
pub const STATUS_FAILED: &str = "Something went wrong while processing the CV.";

/// Resume Upload page: one selected file, a status line and the extracted skills.
#[derive(Debug)]
pub struct UploadView {
    client: ApiClient,
    selected: Option<ResumeFile>,
    status: String,
    skills: Vec<String>,
    phase: Phase,
    generation: Generation,
}

impl UploadView {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            selected: None,
            status: String::new(),
            skills: Vec::new(),
            phase: Phase::Idle,
            generation: Generation::default(),
        }
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn select_file(&mut self, file: Option<ResumeFile>) {
        self.selected = file;
    }

    pub fn selected(&self) -> Option<&ResumeFile> {
        self.selected.as_ref()
    }

    /// Upload the selected file and replace the skill list with the result.
    ///
    /// Without a PDF selected only the status changes; no request is made.
    pub async fn submit(&mut self) {
        let Some((ticket, file)) = self.begin() else {
            return;
        };
        let result = self.client.upload_resume(file).await;
        self.settle(ticket, result);
    }

    /// Check the precondition and move to `Pending`, handing back the file to upload.
    pub fn begin(&mut self) -> Option<(Ticket, ResumeFile)> {
        let file = match &self.selected {
            Some(f) if f.is_pdf() => f.clone(),
            _ => {
                self.status = STATUS_NO_FILE.to_string();
                self.phase = Phase::Idle;
                return None;
            }
        };
        self.status = STATUS_UPLOADING.to_string();
        self.skills.clear();
        self.phase = Phase::Pending;
        Some((self.generation.issue(), file))
    }

    /// Apply a result. Returns `false` if a newer upload or an unmount made it stale.
    pub fn settle(&mut self, ticket: Ticket, result: Result<SkillsResponse>) -> bool {
        if !self.generation.is_current(ticket) {
            debug!(?ticket, "dropping stale upload result");
            return false;
        }
        match result {
            Ok(resp) => {
                self.skills = resp.into_skills();
                self.status = STATUS_DONE.to_string();
                self.phase = Phase::Success;
            }
            Err(e) => {
                warn!(error = %e, "resume upload failed");
                self.status = STATUS_FAILED.to_string();
                self.phase = Phase::Failure(STATUS_FAILED.to_string());
            }
        }
        true
    }

    pub fn unmount(&mut self) {
        self.generation.unmount();
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }
}
