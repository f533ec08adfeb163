//! Execution traces shared by every validator.
//!
//! A trace is the ordered log of what a recognizer consumed and what its
//! stack looked like right afterwards. Snapshots are owned copies, so a
//! finished trace never changes when the live stack does.

use std::fmt;

use serde::{Serialize, Serializer};

// ============================================================================
// STEP INPUT - What a single step consumed
// ============================================================================

/// The input recorded by a trace step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepInput {
    /// A symbol read from the input string.
    Symbol(char),
    /// A synthetic marker that does not correspond to one input symbol.
    Annotation(&'static str),
}

impl fmt::Display for StepInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StepInput::Symbol(c) => write!(f, "{c}"),
            StepInput::Annotation(text) => f.write_str(text),
        }
    }
}

impl Serialize for StepInput {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

// ============================================================================
// TRACE STEP AND TRACE
// ============================================================================

/// One consumed input paired with the stack contents right after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TraceStep {
    pub input: StepInput,
    pub stack: Vec<char>,
}

impl TraceStep {
    pub fn new(input: StepInput, stack: &[char]) -> Self {
        Self {
            input,
            stack: stack.to_vec(),
        }
    }

    /// The stack joined bottom to top, e.g. `([{`.
    pub fn joined_stack(&self) -> String {
        self.stack.iter().collect()
    }
}

/// Ordered, append-only record of a validation run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Trace {
    steps: Vec<TraceStep>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step holding a copy of `stack`.
    pub fn record(&mut self, input: StepInput, stack: &[char]) {
        self.steps.push(TraceStep::new(input, stack));
    }

    pub fn record_symbol(&mut self, symbol: char, stack: &[char]) {
        self.record(StepInput::Symbol(symbol), stack);
    }

    pub fn steps(&self) -> &[TraceStep] {
        &self.steps
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn last(&self) -> Option<&TraceStep> {
        self.steps.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TraceStep> {
        self.steps.iter()
    }

    /// Flattens the trace into `(symbol, stack snapshot)` string pairs.
    pub fn to_pairs(&self) -> Vec<(String, Vec<String>)> {
        self.steps
            .iter()
            .map(|step| {
                let stack = step.stack.iter().map(char::to_string).collect();
                (step.input.to_string(), stack)
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a Trace {
    type Item = &'a TraceStep;
    type IntoIter = std::slice::Iter<'a, TraceStep>;

    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
