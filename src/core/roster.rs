use crate::errors::{AppError, AppResult};
use crate::models::employee::Employee;

/// Salaries must be finite and not negative.
pub fn check_salary(base_salary: f64) -> AppResult<()> {
    if !base_salary.is_finite() || base_salary < 0.0 {
        return Err(AppError::InvalidSalary(base_salary.to_string()));
    }
    Ok(())
}

/// The fixed set of employees, in seed order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    pub fn new(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn get(&self, name: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.name == name)
    }

    /// Resolve a name typed on the command line (case-insensitive).
    pub fn resolve(&self, name: &str) -> AppResult<&Employee> {
        let wanted = name.trim();
        self.get(wanted)
            .or_else(|| {
                self.employees
                    .iter()
                    .find(|e| e.name.eq_ignore_ascii_case(wanted))
            })
            .ok_or_else(|| AppError::UnknownEmployee(name.to_string()))
    }

    /// Change the base salary of an existing employee. Names cannot be added.
    pub fn set_salary(&mut self, name: &str, base_salary: f64) -> AppResult<&Employee> {
        check_salary(base_salary)?;

        let resolved = self.resolve(name)?.name.clone();
        let emp = self
            .employees
            .iter_mut()
            .find(|e| e.name == resolved)
            .ok_or_else(|| AppError::UnknownEmployee(name.to_string()))?;
        emp.base_salary = base_salary;
        Ok(emp)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter()
    }

    pub fn names(&self) -> Vec<&str> {
        self.employees.iter().map(|e| e.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}
