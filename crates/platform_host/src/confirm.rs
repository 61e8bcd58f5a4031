//! User confirmation prompts.

use std::{cell::RefCell, rc::Rc};

/// Host service that asks the user a yes/no question and blocks until answered.
pub trait ConfirmService {
    /// Returns `true` when the user accepts `message`.
    fn confirm(&self, message: &str) -> bool;
}

#[derive(Debug, Clone, Copy)]
/// Confirmation service that always gives the same answer.
pub struct FixedConfirmService(pub bool);

impl ConfirmService for FixedConfirmService {
    fn confirm(&self, _message: &str) -> bool {
        self.0
    }
}

#[derive(Debug, Clone)]
/// Confirmation service that answers with a fixed value and records every prompt.
pub struct RecordingConfirmService {
    answer: bool,
    prompts: Rc<RefCell<Vec<String>>>,
}

impl RecordingConfirmService {
    /// Creates a recorder that answers `answer`.
    pub fn new(answer: bool) -> Self {
        Self {
            answer,
            prompts: Rc::default(),
        }
    }

    /// Prompts shown so far, oldest first.
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.borrow().clone()
    }
}

impl ConfirmService for RecordingConfirmService {
    fn confirm(&self, message: &str) -> bool {
        self.prompts.borrow_mut().push(message.to_string());
        self.answer
    }
}
