//! # Mocks & Testing Guide
//!
//! Test doubles for the two patterns that wrap another object: the
//! [`protection_proxy`](crate::protection_proxy) and the [`decorator`](crate::decorator).
//! Both patterns are about *which calls reach the wrapped object*, so the doubles
//! work on expectations: you queue the calls you expect and what each one returns,
//! run the code under test, then [`verify`](MockFile::verify) that nothing is left.
//!
//! | | Mock | Real object |
//! |---|---|---|
//! | **Observes calls** | Yes, in order | No |
//! | **Error injection** | `return_err` | Not possible |
//! | **Use case** | Proving delegation or gating | End-to-end behaviour |
//!
//! ## Example: the proxy never touches a locked file
//!
//! ```rust
//! use patterns_recipe::mock::MockFile;
//! use patterns_recipe::protection_proxy::{File, SecuredFile};
//!
//! let mut secured = SecuredFile::new(MockFile::new());
//! assert!(secured.read("readme.md").is_err());
//!
//! // Only now is a read expected to reach the wrapped file.
//! secured.inner().expect_read("readme.md").return_content("contents");
//! secured.set_password("secret");
//! assert_eq!(secured.read("readme.md").unwrap(), "contents");
//!
//! secured.inner().verify();
//! ```
//!
//! An unexpected call panics on the spot, naming the call. That makes the test fail
//! at the line that broke the expectation.

use crate::decorator::CoffeeMachine;
use crate::protection_proxy::{File, FileError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;

// =============================================================================
// EXPECTATION QUEUE
// =============================================================================

/// Calls expected so far, each paired with the response to give.
///
/// Shared between a mock and the builders it hands out.
struct Expectations<C, R> {
    queue: Rc<RefCell<VecDeque<(C, R)>>>,
}

impl<C, R> Clone for Expectations<C, R> {
    fn clone(&self) -> Self {
        Self {
            queue: Rc::clone(&self.queue),
        }
    }
}

impl<C: Debug + PartialEq, R> Expectations<C, R> {
    fn new() -> Self {
        Self {
            queue: Rc::new(RefCell::new(VecDeque::new())),
        }
    }

    fn push(&self, call: C, response: R) {
        self.queue.borrow_mut().push_back((call, response));
    }

    /// Pop the next expectation, panicking if `call` is not it.
    fn answer(&self, call: C) -> R {
        let next = self.queue.borrow_mut().pop_front();
        match next {
            Some((expected, response)) if expected == call => response,
            Some((expected, _)) => {
                panic!("Unexpected call {call:?}, expected {expected:?}")
            }
            None => panic!("Unexpected call {call:?}, no expectations left"),
        }
    }

    fn remaining(&self) -> usize {
        self.queue.borrow().len()
    }

    fn verify(&self) {
        let remaining = self.remaining();
        if remaining > 0 {
            panic!("Not all expectations were met. {remaining} remaining");
        }
    }
}

// =============================================================================
// FILE MOCK
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum FileCall {
    Read(String),
}

/// A [`File`] that answers reads from queued expectations.
pub struct MockFile {
    expectations: Expectations<FileCall, Result<String, FileError>>,
}

impl Default for MockFile {
    fn default() -> Self {
        Self::new()
    }
}

impl MockFile {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
        }
    }

    /// Expects a `read` of `name`.
    pub fn expect_read(&self, name: impl Into<String>) -> ReadExpectationBuilder {
        ReadExpectationBuilder {
            name: name.into(),
            expectations: self.expectations.clone(),
        }
    }

    /// Number of expectations not yet consumed.
    pub fn remaining(&self) -> usize {
        self.expectations.remaining()
    }

    /// Panics unless every expectation was consumed.
    pub fn verify(&self) {
        self.expectations.verify();
    }
}

impl File for MockFile {
    fn read(&self, name: &str) -> Result<String, FileError> {
        self.expectations.answer(FileCall::Read(name.to_string()))
    }
}

/// Builder for `read` expectations.
pub struct ReadExpectationBuilder {
    name: String,
    expectations: Expectations<FileCall, Result<String, FileError>>,
}

impl ReadExpectationBuilder {
    pub fn return_content(self, content: impl Into<String>) {
        self.expectations
            .push(FileCall::Read(self.name), Ok(content.into()));
    }

    pub fn return_err(self, error: FileError) {
        self.expectations.push(FileCall::Read(self.name), Err(error));
    }
}

// =============================================================================
// COFFEE MACHINE MOCK
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoffeeCall {
    Small,
    Large,
}

/// A [`CoffeeMachine`] that answers from queued expectations.
pub struct MockCoffeeMachine {
    expectations: Expectations<CoffeeCall, String>,
}

impl Default for MockCoffeeMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl MockCoffeeMachine {
    pub fn new() -> Self {
        Self {
            expectations: Expectations::new(),
        }
    }

    pub fn expect_small_coffee(&self) -> CoffeeExpectationBuilder {
        CoffeeExpectationBuilder {
            call: CoffeeCall::Small,
            expectations: self.expectations.clone(),
        }
    }

    pub fn expect_large_coffee(&self) -> CoffeeExpectationBuilder {
        CoffeeExpectationBuilder {
            call: CoffeeCall::Large,
            expectations: self.expectations.clone(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.expectations.remaining()
    }

    pub fn verify(&self) {
        self.expectations.verify();
    }
}

impl CoffeeMachine for MockCoffeeMachine {
    fn make_small_coffee(&self) -> String {
        self.expectations.answer(CoffeeCall::Small)
    }

    fn make_large_coffee(&self) -> String {
        self.expectations.answer(CoffeeCall::Large)
    }
}

/// Builder for coffee expectations.
pub struct CoffeeExpectationBuilder {
    call: CoffeeCall,
    expectations: Expectations<CoffeeCall, String>,
}

impl CoffeeExpectationBuilder {
    pub fn return_line(self, line: impl Into<String>) {
        self.expectations.push(self.call, line.into());
    }
}
