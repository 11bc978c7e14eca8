//! User interaction.
//! The [`Prompter`] trait separates the question flow from the terminal so
//! that answers can come from dialoguer or from defaults alone.

use crate::error::Result;
use dialoguer::{Confirm, Input};

/// Validation applied to a text answer before it is accepted.
pub struct Validation {
    pub check: fn(&str) -> bool,
    /// Shown when `check` rejects the answer
    pub message: &'static str,
}

pub trait Prompter {
    /// Asks for a line of text.
    fn input(&self, prompt: &str, default: &str, validation: Option<&Validation>)
        -> Result<String>;

    /// Asks a yes/no question. Returns `true` without asking when `skip` is set.
    fn confirm(&self, skip: bool, prompt: &str, default: bool) -> Result<bool>;
}

/// Interactive prompter backed by dialoguer.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn input(
        &self,
        prompt: &str,
        default: &str,
        validation: Option<&Validation>,
    ) -> Result<String> {
        let mut input = Input::<String>::new().with_prompt(prompt).default(default.to_string());
        if let Some(validation) = validation {
            let check = validation.check;
            let message = validation.message;
            input = input.validate_with(move |value: &String| -> std::result::Result<(), &'static str> {
                if check(value) {
                    Ok(())
                } else {
                    Err(message)
                }
            });
        }
        Ok(input.interact_text()?)
    }

    fn confirm(&self, skip: bool, prompt: &str, default: bool) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        Ok(Confirm::new().with_prompt(prompt).default(default).interact()?)
    }
}

/// Non-interactive prompter answering every question with its default.
#[derive(Debug, Default)]
pub struct DefaultsPrompter;

impl DefaultsPrompter {
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DefaultsPrompter {
    fn input(
        &self,
        _prompt: &str,
        default: &str,
        _validation: Option<&Validation>,
    ) -> Result<String> {
        Ok(default.to_string())
    }

    fn confirm(&self, skip: bool, _prompt: &str, default: bool) -> Result<bool> {
        Ok(skip || default)
    }
}
