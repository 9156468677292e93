use color_eyre::Result;
use dialoguer::{Confirm, Input, Select};

/// Prompt for a string value with optional default
pub fn prompt_string(prompt: &str, default: Option<&str>) -> Result<String> {
    let mut input_builder = Input::<String>::new()
        .with_prompt(prompt)
        .allow_empty(true);

    if let Some(default_value) = default {
        input_builder = input_builder.default(default_value.to_string());
    }

    input_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))
}

/// Prompt for yes/no with optional default
pub fn prompt_yes_no(prompt: &str, default: Option<bool>) -> Result<bool> {
    let mut confirm_builder = Confirm::new().with_prompt(prompt);

    if let Some(default_value) = default {
        confirm_builder = confirm_builder.default(default_value);
    }

    confirm_builder
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read confirmation: {}", e))
}

/// Pick one of `items` with the arrow keys; returns the selected index.
pub fn prompt_select<T: ToString>(prompt: &str, items: &[T]) -> Result<usize> {
    Select::new()
        .with_prompt(prompt)
        .items(items)
        .default(0)
        .interact()
        .map_err(|e| color_eyre::eyre::eyre!("Failed to read selection: {}", e))
}

/// Prompt for a decimal value with optional default, retrying on bad input
pub fn prompt_float(prompt: &str, default: Option<f64>) -> Result<f64> {
    loop {
        let mut input_builder = Input::<String>::new().with_prompt(prompt);

        if let Some(default_value) = default {
            input_builder = input_builder.default(default_value.to_string());
        }

        let input_str = input_builder
            .interact()
            .map_err(|e| color_eyre::eyre::eyre!("Failed to read input: {}", e))?;

        match input_str.trim().parse::<f64>() {
            Ok(value) => return Ok(value),
            Err(_) => {
                eprintln!("Invalid input. Please enter a number.");
                continue;
            }
        }
    }
}
