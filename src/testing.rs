//! Test doubles shared by the unit tests.

use std::cell::RefCell;
use std::collections::HashMap;
use std::time::Duration;

use crate::network::Probe;

/// Answers from a per-URL script; once a script runs out the last answer repeats.
/// URLs without a script always fail.
#[derive(Default)]
pub struct ScriptedProbe {
    script: HashMap<String, Vec<bool>>,
    calls: RefCell<Vec<(String, Duration)>>,
}

impl ScriptedProbe {
    pub fn with(mut self, url: &str, answers: &[bool]) -> Self {
        self.script.insert(url.to_string(), answers.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<(String, Duration)> {
        self.calls.borrow().clone()
    }

    pub fn calls_for(&self, url: &str) -> Vec<Duration> {
        self.calls
            .borrow()
            .iter()
            .filter(|(u, _)| u == url)
            .map(|(_, t)| *t)
            .collect()
    }
}

impl Probe for ScriptedProbe {
    async fn check_reachable(&self, url: &str, timeout: Duration) -> bool {
        let seen = self.calls_for(url).len();
        self.calls.borrow_mut().push((url.to_string(), timeout));
        match self.script.get(url) {
            Some(answers) if !answers.is_empty() => answers[seen.min(answers.len() - 1)],
            _ => false,
        }
    }
}
