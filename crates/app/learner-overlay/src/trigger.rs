/// Fire-and-forget notifications the UI listens for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Trigger {
    Screenshot,
    DeleteLastScreenshot,
    ProcessScreenshots,
    StartNewProblem,
}

impl Trigger {
    pub const ALL: [Trigger; 4] = [
        Trigger::Screenshot,
        Trigger::DeleteLastScreenshot,
        Trigger::ProcessScreenshots,
        Trigger::StartNewProblem,
    ];

    pub const fn event_name(self) -> &'static str {
        match self {
            Trigger::Screenshot => "screenshot-triggered",
            Trigger::DeleteLastScreenshot => "delete-last-screenshot-triggered",
            Trigger::ProcessScreenshots => "process-screenshots-triggered",
            Trigger::StartNewProblem => "start-new-problem-triggered",
        }
    }
}

impl std::fmt::Display for Trigger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.event_name())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn event_names_are_distinct() {
        let names: HashSet<_> = Trigger::ALL.iter().map(|t| t.event_name()).collect();
        assert_eq!(names.len(), Trigger::ALL.len());
        assert!(names.iter().all(|name| name.ends_with("-triggered")));
    }
}
