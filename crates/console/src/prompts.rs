//! Typed input prompts. Bad numeric input re-prompts instead of aborting
//! the whole entry flow.

use anyhow::Result;
use dialoguer::{Input, theme::ColorfulTheme};

/// Prompt for free-form text.
pub fn text(theme: &ColorfulTheme, prompt: &str) -> Result<String> {
    Ok(Input::<String>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()?)
}

/// Prompt for a finite, non-negative real number.
pub fn non_negative(theme: &ColorfulTheme, prompt: &str) -> Result<f64> {
    Ok(Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &f64| {
            if value.is_finite() && *value >= 0.0 {
                Ok(())
            } else {
                Err("enter a non-negative number")
            }
        })
        .interact_text()?)
}

/// Prompt for a positive integer.
pub fn positive_int(theme: &ColorfulTheme, prompt: &str) -> Result<u32> {
    Ok(Input::<u32>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(|value: &u32| {
            if *value >= 1 {
                Ok(())
            } else {
                Err("enter a positive integer")
            }
        })
        .interact_text()?)
}
