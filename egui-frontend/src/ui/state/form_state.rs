//! # Form State Module
//!
//! Editable text for each category row. The model owns the amounts; the form
//! only keeps what the user typed until the next recalculation.

use std::collections::HashMap;

use shared::CategorySnapshot;

/// One row of the category form
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryField {
    pub name: String,
    /// Raw text in the field, not validated
    pub text: String,
}

impl CategoryField {
    /// Row label, e.g. `"Sales Tax:"`
    pub fn label(&self) -> String {
        format!("{}:", self.name)
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryFormState {
    pub fields: Vec<CategoryField>,
}

impl CategoryFormState {
    /// Seed one field per category, pre-filled with its current amount
    pub fn from_categories(categories: &[CategorySnapshot]) -> Self {
        let fields = categories
            .iter()
            .map(|category| CategoryField {
                name: category.name.clone(),
                text: format_amount(category.amount),
            })
            .collect();

        Self { fields }
    }

    /// Current raw text of every field, keyed by category name
    pub fn raw_values(&self) -> HashMap<String, String> {
        self.fields
            .iter()
            .map(|field| (field.name.clone(), field.text.clone()))
            .collect()
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut CategoryField> {
        self.fields.iter_mut().find(|field| field.name == name)
    }

    /// Overwrite one field's text as if the user had typed it
    pub fn set_text(&mut self, name: &str, text: &str) -> bool {
        match self.field_mut(name) {
            Some(field) => {
                field.text = text.to_string();
                true
            }
            None => false,
        }
    }
}

/// Plain number without grouping or trailing zeros (`5000000`, `12.5`)
pub fn format_amount(amount: f64) -> String {
    format!("{}", amount)
}
