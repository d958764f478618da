//! Linear cursor over a recipe's preparation steps.

/// User action in the step browser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavAction {
    Next,
    Previous,
    Exit,
}

impl NavAction {
    /// Maps a menu choice (`1`, `2`, `3`) to an action
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice.trim() {
            "1" => Some(NavAction::Next),
            "2" => Some(NavAction::Previous),
            "3" => Some(NavAction::Exit),
            _ => None,
        }
    }
}

/// Outcome of applying an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Moved(usize),
    AtFirstStep,
    AtLastStep,
    Exited,
}

impl NavEvent {
    /// Boundary notice shown to the user, if the event carries one
    pub fn notice(&self) -> Option<&'static str> {
        match self {
            NavEvent::AtFirstStep => Some("This is the first step."),
            NavEvent::AtLastStep => Some("This is the last step."),
            NavEvent::Exited => Some("Exiting..."),
            NavEvent::Moved(_) => None,
        }
    }
}

/// Cursor clamped to `[0, steps.len())`; never wraps around.
#[derive(Debug)]
pub struct StepNavigator<'a> {
    steps: &'a [String],
    index: usize,
    finished: bool,
}

impl<'a> StepNavigator<'a> {
    pub fn new(steps: &'a [String]) -> Self {
        Self {
            steps,
            index: 0,
            finished: false,
        }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// The step under the cursor; `None` when there are no steps
    pub fn current(&self) -> Option<&'a str> {
        self.steps.get(self.index).map(String::as_str)
    }

    /// Display line for the current step
    pub fn render_current(&self) -> String {
        match self.current() {
            Some(step) => format!("Step {}: {}", self.index + 1, step),
            None => "Invalid step index.".to_string(),
        }
    }

    pub fn apply(&mut self, action: NavAction) -> NavEvent {
        match action {
            NavAction::Next if self.index + 1 < self.steps.len() => {
                self.index += 1;
                NavEvent::Moved(self.index)
            }
            NavAction::Next => NavEvent::AtLastStep,
            NavAction::Previous if self.index > 0 => {
                self.index -= 1;
                NavEvent::Moved(self.index)
            }
            NavAction::Previous => NavEvent::AtFirstStep,
            NavAction::Exit => {
                self.finished = true;
                NavEvent::Exited
            }
        }
    }
}
