//! Interactive namespace picker

use dialoguer::{theme::ColorfulTheme, Select};
use log::debug;

use crate::error::{NsError, Result};
use crate::namespace::NamespacePicker;

/// Terminal picker built on `dialoguer::Select`
#[derive(Debug, Default, Clone, Copy)]
pub struct DialoguerPicker;

impl NamespacePicker for DialoguerPicker {
    fn pick_with_default(
        &self,
        options: &[String],
        prompt: &str,
        default: &str,
        help: &str,
    ) -> Result<String> {
        if options.is_empty() {
            return Err(NsError::Selection("no namespaces to choose from".to_string()));
        }

        eprintln!("{}", help);

        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(prompt)
            .items(options)
            .default(default_index(options, default))
            .interact_opt()
            .map_err(|e| NsError::Selection(e.to_string()))?;

        let index = selection.ok_or_else(|| NsError::Selection("cancelled".to_string()))?;
        let choice = options
            .get(index)
            .cloned()
            .ok_or_else(|| NsError::Selection(format!("invalid selection {}", index)))?;
        debug!("User selected namespace: {}", choice);
        Ok(choice)
    }
}

/// Position of `default` in `options`, or the first entry
fn default_index(options: &[String], default: &str) -> usize {
    options.iter().position(|o| o == default).unwrap_or(0)
}
