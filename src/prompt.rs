//! Operator prompts
//!
//! The wizard only talks to [`Prompter`]; [`TerminalPrompter`] backs it with
//! dialoguer. A Ctrl-C at any prompt surfaces as [`AppError::Interrupted`].

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Error as DialoguerError, Input, Select};
use std::io::ErrorKind;

use crate::error::AppError;

pub trait Prompter {
    /// Free-text answer; the terminal implementation refuses empty input.
    fn input_text(&mut self, message: &str) -> Result<String, AppError>;

    /// Whole-number answer, `default` when the operator just presses enter.
    fn input_number(&mut self, message: &str, default: u64) -> Result<u64, AppError>;

    /// Index into `options` of the chosen entry.
    fn select(&mut self, message: &str, options: &[String], default: usize) -> Result<usize, AppError>;

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError>;
}

fn map_prompt_error(err: DialoguerError) -> AppError {
    match err {
        DialoguerError::IO(e) if e.kind() == ErrorKind::Interrupted => AppError::Interrupted,
        DialoguerError::IO(e) => AppError::Prompt(e.to_string()),
    }
}

pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn input_text(&mut self, message: &str) -> Result<String, AppError> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(message)
            .validate_with(|v: &String| -> Result<(), &'static str> {
                if v.trim().is_empty() {
                    Err("Value is required")
                } else {
                    Ok(())
                }
            })
            .interact_text()
            .map(|v| v.trim().to_string())
            .map_err(map_prompt_error)
    }

    fn input_number(&mut self, message: &str, default: u64) -> Result<u64, AppError> {
        Input::<u64>::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact_text()
            .map_err(map_prompt_error)
    }

    fn select(&mut self, message: &str, options: &[String], default: usize) -> Result<usize, AppError> {
        if options.is_empty() {
            return Err(AppError::Validation(format!("No options available for: {}", message)));
        }
        Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(options)
            .default(default.min(options.len() - 1))
            .interact()
            .map_err(map_prompt_error)
    }

    fn confirm(&mut self, message: &str, default: bool) -> Result<bool, AppError> {
        Confirm::with_theme(&self.theme)
            .with_prompt(message)
            .default(default)
            .interact()
            .map_err(map_prompt_error)
    }
}
