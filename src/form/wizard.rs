//! Step Wizard
//!
//! Four steps walk through the analysis: joke, premisa, ruptura, remate.
//! Moving past either end is a no-op.

/// Number of wizard steps
pub const STEP_COUNT: u8 = 4;

/// Panel anchored by each step, in step order
pub const STEP_PANELS: [&str; STEP_COUNT as usize] =
    ["card-joke", "card-premisa", "card-ruptura", "card-remate"];

/// Short label for each step
pub const STEP_LABELS: [&str; STEP_COUNT as usize] = ["Chiste", "Premisa", "Ruptura", "Remate"];

/// Marker shown on completed steps
pub const COMPLETED_MARKER: &str = "✓";

/// Visual state of a step indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepStatus {
    Pending,
    Active,
    Completed,
}

impl StepStatus {
    /// CSS class applied to the indicator
    pub fn class(&self) -> &'static str {
        match self {
            StepStatus::Pending => "",
            StepStatus::Active => "active",
            StepStatus::Completed => "completed",
        }
    }
}

/// One rendered step indicator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepIndicator {
    pub number: u8,
    pub label: &'static str,
    pub status: StepStatus,
    /// Check mark for completed steps, the step number otherwise
    pub marker: String,
}

/// Wizard position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepWizard {
    current: u8,
}

impl Default for StepWizard {
    fn default() -> Self {
        Self { current: 1 }
    }
}

impl StepWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> u8 {
        self.current
    }

    /// Advance one step. Returns false when already on the last step.
    pub fn next(&mut self) -> bool {
        if self.current < STEP_COUNT {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one step. Returns false when already on the first step.
    pub fn prev(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    pub fn is_last(&self) -> bool {
        self.current == STEP_COUNT
    }

    pub fn status_of(&self, step: u8) -> StepStatus {
        if step < self.current {
            StepStatus::Completed
        } else if step == self.current {
            StepStatus::Active
        } else {
            StepStatus::Pending
        }
    }

    /// Indicators for all steps, recomputed from the current position
    pub fn indicators(&self) -> Vec<StepIndicator> {
        (1..=STEP_COUNT)
            .map(|number| {
                let status = self.status_of(number);
                let marker = match status {
                    StepStatus::Completed => COMPLETED_MARKER.to_string(),
                    _ => number.to_string(),
                };
                StepIndicator {
                    number,
                    label: STEP_LABELS[usize::from(number - 1)],
                    status,
                    marker,
                }
            })
            .collect()
    }

    /// Panel to scroll to for the current step
    pub fn panel_id(&self) -> &'static str {
        STEP_PANELS[usize::from(self.current - 1)]
    }

    /// Label of the forward control
    pub fn forward_label(&self) -> &'static str {
        if self.is_last() {
            "Finalizar"
        } else {
            "Siguiente →"
        }
    }

    /// The back control is hidden on the first step
    pub fn show_prev(&self) -> bool {
        self.current > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_on_first_step() {
        let wizard = StepWizard::new();
        assert_eq!(wizard.current(), 1);
        assert_eq!(wizard.panel_id(), "card-joke");
        assert!(!wizard.show_prev());
        assert_eq!(wizard.forward_label(), "Siguiente →");
    }

    #[test]
    fn test_next_saturates_at_last_step() {
        let mut wizard = StepWizard::new();
        for _ in 0..10 {
            wizard.next();
        }
        assert_eq!(wizard.current(), STEP_COUNT);
        assert!(!wizard.next());
        assert_eq!(wizard.forward_label(), "Finalizar");
        assert_eq!(wizard.panel_id(), "card-remate");
    }

    #[test]
    fn test_prev_saturates_at_first_step() {
        let mut wizard = StepWizard::new();
        wizard.next();
        wizard.next();
        for _ in 0..10 {
            wizard.prev();
        }
        assert_eq!(wizard.current(), 1);
        assert!(!wizard.prev());
    }

    #[test]
    fn test_indicators_follow_position() {
        let mut wizard = StepWizard::new();
        wizard.next();
        wizard.next();

        let indicators = wizard.indicators();
        let statuses: Vec<_> = indicators.iter().map(|i| i.status).collect();
        assert_eq!(
            statuses,
            vec![
                StepStatus::Completed,
                StepStatus::Completed,
                StepStatus::Active,
                StepStatus::Pending
            ]
        );

        let markers: Vec<_> = indicators.iter().map(|i| i.marker.as_str()).collect();
        assert_eq!(markers, vec!["✓", "✓", "3", "4"]);
        assert_eq!(indicators[2].label, "Ruptura");
    }

    #[test]
    fn test_going_back_restores_numbers() {
        let mut wizard = StepWizard::new();
        wizard.next();
        wizard.next();
        wizard.prev();

        let markers: Vec<_> = wizard.indicators().into_iter().map(|i| i.marker).collect();
        assert_eq!(markers, vec!["✓", "2", "3", "4"]);
        assert_eq!(wizard.panel_id(), "card-premisa");
    }
}
