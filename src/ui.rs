// Terminal layer: screen clearing, the boxed header, and the input
// primitives built on `dialoguer`. The functions are small and
// synchronous to make the flows easy to follow.
//
// Menus are keyboard-driven `Select` lists, so a menu choice is always
// a valid index into the items the caller passed in. Free-form fields
// validate and re-prompt inline.

use std::io;

use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use dialoguer::{Input, Password, Select};

/// Interior width of the boxed banners and tables.
pub const BOX_WIDTH: usize = 38;

/// Clear the screen and print a boxed title banner.
pub fn header(title: &str) -> Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))?;
    println!("╔{}╗", "═".repeat(BOX_WIDTH));
    println!("║ {:<width$}║", title, width = BOX_WIDTH - 1);
    println!("╚{}╝", "═".repeat(BOX_WIDTH));
    Ok(())
}

/// Keyboard-navigable menu over `items`; returns the selected index.
///
/// `Select::interact()` is arrow-key driven: up/down to move, Enter to
/// choose.
pub fn menu<T: ToString>(items: &[T]) -> Result<usize> {
    let selection = Select::new().items(items).default(0).interact()?;
    Ok(selection)
}

/// Prompt for one table field. Table records are whitespace-delimited,
/// so the value must be a single non-empty token.
pub fn prompt_field(prompt: &str) -> Result<String> {
    let value: String = Input::new()
        .with_prompt(prompt)
        .validate_with(|input: &String| -> Result<(), &str> {
            let token = input.trim();
            if token.is_empty() {
                Err("value cannot be empty")
            } else if token.split_whitespace().count() > 1 {
                Err("value cannot contain spaces")
            } else {
                Ok(())
            }
        })
        .interact_text()?;
    Ok(value.trim().to_owned())
}

/// Hidden-input password prompt, returned as typed. Login compares it
/// against stored credentials; use `prompt_new_password` for a value
/// headed into a table.
pub fn prompt_password(prompt: &str) -> Result<String> {
    let value = Password::new().with_prompt(prompt).interact()?;
    Ok(value)
}

/// Hidden-input password prompt that loops until the value is a single
/// non-empty token, so it can be stored in a table record.
pub fn prompt_new_password(prompt: &str) -> Result<String> {
    loop {
        let value = Password::new().with_prompt(prompt).interact()?;
        let token = value.trim();
        if !token.is_empty() && token.split_whitespace().count() == 1 {
            return Ok(token.to_owned());
        }
        println!("Password must be a single non-empty word.");
    }
}

/// Prompt for a score in 0-100. `None` means the operator cancelled
/// with -1. Anything else re-prompts.
pub fn prompt_mark(prompt: &str) -> Result<Option<u8>> {
    let value: i64 = Input::new()
        .with_prompt(prompt)
        .validate_with(|mark: &i64| -> Result<(), &str> {
            if (-1..=100).contains(mark) {
                Ok(())
            } else {
                Err("Invalid mark! Please enter value between 0-100.")
            }
        })
        .interact_text()?;
    if value < 0 {
        Ok(None)
    } else {
        Ok(Some(value as u8))
    }
}

/// Block until Enter so the operator can read what is on screen.
pub fn pause() -> Result<()> {
    let _: String = Input::new()
        .with_prompt("Press Enter to continue")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}
