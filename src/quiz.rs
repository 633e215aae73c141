//! Gear finder quiz.
//!
//! A linear three-question machine: use case, then budget, then priority.
//! There is no backward transition; restarting discards the answers and
//! returns to the first question. Reaching the result step computes a
//! rule-table recommendation list.
//!
//! Candidate order is fixed: use-case picks first, then priority picks, then
//! budget picks, duplicates suppressed by first occurrence. Only the first
//! four candidates are displayed.

use crate::constants::QUIZ_RESULT_LIMIT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UseCase {
    Gaming,
    Fitness,
    Cinema,
}

impl UseCase {
    pub const ALL: [UseCase; 3] = [UseCase::Gaming, UseCase::Fitness, UseCase::Cinema];

    pub fn label(&self) -> &'static str {
        match self {
            UseCase::Gaming => "Gaming",
            UseCase::Fitness => "Fitness",
            UseCase::Cinema => "Cinema",
        }
    }

    fn picks(&self) -> &'static [&'static str] {
        match self {
            UseCase::Gaming => &["VR Gun Stock (AMVR)", "Shadow Shot VR Bow"],
            UseCase::Fitness => &["VR Ease Silicone Face Cover", "AMVR Controller Grips"],
            UseCase::Cinema => &["Logitech Chorus Off-Ear Audio", "Prescription Lens Inserts"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Budget {
    Low,
    Mid,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Mid, Budget::High];

    pub fn label(&self) -> &'static str {
        match self {
            Budget::Low => "Low",
            Budget::Mid => "Mid",
            Budget::High => "High",
        }
    }

    fn picks(&self) -> &'static [&'static str] {
        match self {
            Budget::Low => &["Lens Cleaning Kit", "Wall Mount Storage Hook"],
            Budget::Mid => &["AMVR Controller Grips", "VR Ease Silicone Face Cover"],
            Budget::High => &["Roto VR Explorer Chair", "VIVE Ultimate Tracker"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Priority {
    Comfort,
    Performance,
    Immersion,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Comfort, Priority::Performance, Priority::Immersion];

    pub fn label(&self) -> &'static str {
        match self {
            Priority::Comfort => "Comfort",
            Priority::Performance => "Performance",
            Priority::Immersion => "Immersion",
        }
    }

    fn picks(&self) -> &'static [&'static str] {
        match self {
            Priority::Comfort => &[
                "KIWI Design K4 Mini Head Strap",
                "BOBOVR M3 Pro Head Strap",
            ],
            Priority::Performance => &[
                "SlimeVR Full-Body Tracker Set",
                "BOBOVR S3 Pro Head Strap",
            ],
            Priority::Immersion => &["KIWI Design On-Ear Audio Strap", "Shadow Shot VR Bow"],
        }
    }
}

/// Current quiz step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizStep {
    UseCase,
    Budget,
    Priority,
    Result,
}

impl QuizStep {
    pub fn prompt(&self) -> &'static str {
        match self {
            QuizStep::UseCase => "What will you mostly use VR for?",
            QuizStep::Budget => "What's your budget?",
            QuizStep::Priority => "What matters most to you?",
            QuizStep::Result => "Your recommendations",
        }
    }

    /// 1-based question number for the progress display.
    pub fn number(&self) -> usize {
        match self {
            QuizStep::UseCase => 1,
            QuizStep::Budget => 2,
            QuizStep::Priority => 3,
            QuizStep::Result => 3,
        }
    }
}

/// Outcome of answering the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAdvance {
    NextQuestion,
    /// The final answer was just given; the caller grants the completion
    /// reward exactly once per completion.
    Completed,
    /// Already at the result step; answering is a no-op.
    Ignored,
}

/// Quiz session state. Transient: answers are discarded on restart.
#[derive(Debug, Clone)]
pub struct Quiz {
    pub step: QuizStep,
    pub cursor: usize,
    use_case: Option<UseCase>,
    budget: Option<Budget>,
    priority: Option<Priority>,
}

impl Default for Quiz {
    fn default() -> Self {
        Self::new()
    }
}

impl Quiz {
    pub fn new() -> Self {
        Self {
            step: QuizStep::UseCase,
            cursor: 0,
            use_case: None,
            budget: None,
            priority: None,
        }
    }

    /// Number of options at the current step.
    pub fn option_count(&self) -> usize {
        match self.step {
            QuizStep::UseCase => UseCase::ALL.len(),
            QuizStep::Budget => Budget::ALL.len(),
            QuizStep::Priority => Priority::ALL.len(),
            QuizStep::Result => 0,
        }
    }

    /// Option labels for the current step.
    pub fn option_labels(&self) -> Vec<&'static str> {
        match self.step {
            QuizStep::UseCase => UseCase::ALL.iter().map(|o| o.label()).collect(),
            QuizStep::Budget => Budget::ALL.iter().map(|o| o.label()).collect(),
            QuizStep::Priority => Priority::ALL.iter().map(|o| o.label()).collect(),
            QuizStep::Result => Vec::new(),
        }
    }

    /// Record the answer at `choice` and advance one step. An out-of-range
    /// `choice` is ignored without advancing, so completion always carries a
    /// full answer set.
    pub fn answer(&mut self, choice: usize) -> QuizAdvance {
        if choice >= self.option_count() {
            return QuizAdvance::Ignored;
        }
        match self.step {
            QuizStep::UseCase => {
                self.use_case = Some(UseCase::ALL[choice]);
                self.step = QuizStep::Budget;
                self.cursor = 0;
                QuizAdvance::NextQuestion
            }
            QuizStep::Budget => {
                self.budget = Some(Budget::ALL[choice]);
                self.step = QuizStep::Priority;
                self.cursor = 0;
                QuizAdvance::NextQuestion
            }
            QuizStep::Priority => {
                self.priority = Some(Priority::ALL[choice]);
                self.step = QuizStep::Result;
                self.cursor = 0;
                QuizAdvance::Completed
            }
            QuizStep::Result => QuizAdvance::Ignored,
        }
    }

    /// Discard all answers and return to the first question.
    pub fn restart(&mut self) {
        *self = Self::new();
    }

    /// Full deduplicated candidate list: use-case picks, then priority picks,
    /// then budget picks, first occurrence wins.
    pub fn candidates(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        let tables: [&[&'static str]; 3] = [
            self.use_case.map(|a| a.picks()).unwrap_or(&[]),
            self.priority.map(|a| a.picks()).unwrap_or(&[]),
            self.budget.map(|a| a.picks()).unwrap_or(&[]),
        ];
        for table in tables {
            for &name in table {
                if !names.contains(&name) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// The displayed recommendations: first four candidates.
    pub fn recommendations(&self) -> Vec<&'static str> {
        let mut names = self.candidates();
        names.truncate(QUIZ_RESULT_LIMIT);
        names
    }
}
