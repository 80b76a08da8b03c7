use crate::content::AyahEntry;

/// Wizard position. Steps only advance in order; `reset` is valid from
/// anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Step {
    #[default]
    Intro,
    Question,
    Selecting,
    Result,
}

impl Step {
    /// 1-based position for display.
    pub fn number(self) -> u8 {
        match self {
            Step::Intro => 1,
            Step::Question => 2,
            Step::Selecting => 3,
            Step::Result => 4,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("لطفاً موضوع استخاره را وارد کنید")]
    EmptyQuestion,
}

/// State of one Estekhara run.
#[derive(Debug, Default)]
pub struct EstekharaWizard {
    step: Step,
    question: String,
    selected: Option<AyahEntry>,
}

impl EstekharaWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> Step {
        self.step
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn selected(&self) -> Option<&AyahEntry> {
        self.selected.as_ref()
    }

    /// Intro → Question. Ignored from any other step.
    pub fn start(&mut self) {
        if self.step == Step::Intro {
            self.step = Step::Question;
        }
    }

    /// Question → Selecting, keeping the trimmed question. A blank
    /// question keeps the wizard at the prompt and reports the
    /// validation failure. Ignored from any other step.
    pub fn submit_question(&mut self, question: &str) -> Result<(), WizardError> {
        if self.step != Step::Question {
            return Ok(());
        }

        let trimmed = question.trim();
        if trimmed.is_empty() {
            return Err(WizardError::EmptyQuestion);
        }

        self.question = trimmed.to_string();
        self.step = Step::Selecting;
        Ok(())
    }

    /// Selecting → Result with the picked entry. Ignored from any other
    /// step so a stale delivery cannot overwrite a reset run.
    pub fn deliver(&mut self, entry: AyahEntry) {
        if self.step == Step::Selecting {
            self.selected = Some(entry);
            self.step = Step::Result;
        }
    }

    /// Back to Intro from anywhere, clearing the question and selection.
    pub fn reset(&mut self) {
        self.step = Step::Intro;
        self.question.clear();
        self.selected = None;
    }
}
