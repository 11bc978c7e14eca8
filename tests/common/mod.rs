#![allow(dead_code)]

use create_component::error::Result;
use create_component::prompt::{Prompter, Validation};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

/// Prompter replaying scripted answers. `None` entries take the default.
#[derive(Default)]
pub struct ScriptedPrompter {
    inputs: RefCell<VecDeque<Option<String>>>,
    confirms: RefCell<VecDeque<bool>>,
    pub asked: RefCell<Vec<String>>,
}

impl ScriptedPrompter {
    pub fn new(inputs: &[Option<&str>], confirms: &[bool]) -> Self {
        Self {
            inputs: RefCell::new(inputs.iter().map(|i| i.map(str::to_string)).collect()),
            confirms: RefCell::new(confirms.iter().copied().collect()),
            asked: RefCell::new(Vec::new()),
        }
    }
}

impl Prompter for ScriptedPrompter {
    fn input(
        &self,
        prompt: &str,
        default: &str,
        validation: Option<&Validation>,
    ) -> Result<String> {
        self.asked.borrow_mut().push(prompt.to_string());
        let answer = self
            .inputs
            .borrow_mut()
            .pop_front()
            .flatten()
            .unwrap_or_else(|| default.to_string());
        if let Some(validation) = validation {
            assert!((validation.check)(&answer), "{}: {}", validation.message, answer);
        }
        Ok(answer)
    }

    fn confirm(&self, skip: bool, prompt: &str, default: bool) -> Result<bool> {
        if skip {
            return Ok(true);
        }
        self.asked.borrow_mut().push(prompt.to_string());
        Ok(self.confirms.borrow_mut().pop_front().unwrap_or(default))
    }
}

pub fn shipped_template() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("template")
}

pub fn write<P: AsRef<Path>>(path: P, content: &str) {
    let path = path.as_ref();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}
