use serde::{Deserialize, Serialize};

/// A staff member. The name is the identity; only the salary is editable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub name: String,
    pub base_salary: f64,
}

impl Employee {
    pub fn new(name: impl Into<String>, base_salary: f64) -> Self {
        Self {
            name: name.into(),
            base_salary,
        }
    }
}
