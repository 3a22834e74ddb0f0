//! Customer directory
//!
//! The selectable customer list comes from outside the form: a YAML file
//! holding an ordered sequence of `{id, label}` entries. The directory is
//! informational only; choosing a customer id that is not listed is
//! allowed everywhere.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, Default)]
pub struct CustomerDirectory {
    customers: Vec<Customer>,
}

impl CustomerDirectory {
    /// Load a directory from a YAML file. File order is preserved.
    ///
    /// ```yaml
    /// - id: cliente1
    ///   label: Cliente 1
    /// - id: cliente2
    ///   label: Cliente 2
    /// ```
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let customers: Vec<Customer> = serde_yaml::from_str(&text)?;
        Ok(Self { customers })
    }

    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        Self {
            customers: pairs
                .into_iter()
                .map(|(id, label)| Customer { id, label })
                .collect(),
        }
    }

    pub fn customers(&self) -> &[Customer] {
        &self.customers
    }

    pub fn label_for(&self, id: &str) -> Option<&str> {
        self.customers
            .iter()
            .find(|c| c.id == id)
            .map(|c| c.label.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.customers.is_empty()
    }
}
