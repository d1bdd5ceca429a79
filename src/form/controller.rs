use super::render::{Notice, Page, render_page};
use crate::completion::{Completer, Prompt};
use crate::session::{Record, SessionStore};

/// Warning shown when a required field is empty.
pub const MISSING_FIELDS_WARNING: &str =
    "성취기준과 학생의 성취 수준 및 관찰 내용을 모두 입력해주세요.";

/// Prefix of the message shown when the completion call fails.
pub const FAILURE_PREFIX: &str = "OpenAI API 호출 중 오류가 발생했습니다: ";

/// Editable fields of the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    /// 성취기준
    pub achievement_standards: String,
    /// 학생의 성취 수준 및 관찰 내용
    pub student_achievement: String,
    /// 관찰된 역량, in selection order. May be empty.
    pub competencies: Vec<String>,
}

impl FormState {
    /// Returns `true` if both required text fields have content.
    pub fn is_complete(&self) -> bool {
        !self.achievement_standards.trim().is_empty()
            && !self.student_achievement.trim().is_empty()
    }
}

/// Where the form is in its submit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Submitting,
    Success,
    Failed,
}

/// Result of one submit action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A required field was empty; nothing was sent.
    Rejected(&'static str),
    /// The service answered and the record was appended.
    Completed(Record),
    /// The service call failed; the message is ready to show.
    Failed(String),
}

/// Drives the `Idle -> Submitting -> (Success | Failed) -> Idle` cycle for
/// one session.
///
/// Field values are kept across every outcome so a rejected or failed
/// submission can be fixed and resent without retyping.
#[derive(Debug)]
pub struct FormController<C> {
    completer: C,
    store: SessionStore,
    form: FormState,
    phase: Phase,
    latest_output: Option<String>,
}

impl<C: Completer> FormController<C> {
    pub fn new(completer: C) -> Self {
        let mut store = SessionStore::new();
        store.ensure_initialized();
        Self {
            completer,
            store,
            form: FormState::default(),
            phase: Phase::Idle,
            latest_output: None,
        }
    }

    pub async fn submit(&mut self) -> SubmitOutcome {
        if !self.form.is_complete() {
            self.phase = Phase::Idle;
            tracing::debug!("submission rejected: required field empty");
            return SubmitOutcome::Rejected(MISSING_FIELDS_WARNING);
        }

        self.phase = Phase::Submitting;
        let prompt = Prompt::from_form(&self.form);

        match self.completer.complete(&prompt).await {
            Ok(output) => {
                let record = Record::new(self.form.student_achievement.clone(), output.clone());
                self.store.append(record.clone());
                self.latest_output = Some(output);
                self.phase = Phase::Success;
                SubmitOutcome::Completed(record)
            }
            Err(e) => {
                self.phase = Phase::Failed;
                SubmitOutcome::Failed(format!("{FAILURE_PREFIX}{e}"))
            }
        }
    }

    /// Returns to `Idle` once the outcome has been rendered.
    pub const fn finish(&mut self) {
        self.phase = Phase::Idle;
    }

    pub const fn phase(&self) -> Phase {
        self.phase
    }

    pub const fn form(&self) -> &FormState {
        &self.form
    }

    pub fn set_achievement_standards(&mut self, text: impl Into<String>) {
        self.form.achievement_standards = text.into();
    }

    pub fn set_student_achievement(&mut self, text: impl Into<String>) {
        self.form.student_achievement = text.into();
    }

    pub fn set_competencies(&mut self, competencies: Vec<String>) {
        self.form.competencies = competencies;
    }

    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn history(&self) -> &[Record] {
        self.store.history()
    }

    /// The output of the most recent successful submission.
    pub fn latest_output(&self) -> Option<&str> {
        self.latest_output.as_deref()
    }

    pub const fn completer(&self) -> &C {
        &self.completer
    }

    /// Renders the current form and session state.
    pub fn page(&self, notice: Option<Notice>) -> Page<'_> {
        render_page(
            &self.form,
            self.phase,
            &self.store,
            self.latest_output(),
            notice,
        )
    }
}
