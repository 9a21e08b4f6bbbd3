use std::error::Error;
use std::fmt;

pub const DEFAULT_BUDGET_OPTIONS: [u32; 3] = [100, 200, 300];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IterationBudgetError {
    Zero,
    NotAllowed { requested: u32, allowed: Vec<u32> },
    NoOptions,
}

impl fmt::Display for IterationBudgetError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zero => write!(f, "iteration budget must be greater than zero"),
            Self::NotAllowed { requested, allowed } => {
                write!(
                    f,
                    "iteration budget {} is not one of the allowed values {:?}",
                    requested, allowed
                )
            }
            Self::NoOptions => write!(f, "at least one iteration budget option is required"),
        }
    }
}

impl Error for IterationBudgetError {}

/// Maximum number of z ← z² + c steps before a point counts as bounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct IterationBudget(u32);

impl IterationBudget {
    pub fn new(value: u32) -> Result<Self, IterationBudgetError> {
        if value == 0 {
            return Err(IterationBudgetError::Zero);
        }

        Ok(Self(value))
    }

    #[must_use]
    pub fn get(&self) -> u32 {
        self.0
    }
}

/// The enumerated set of budgets a user may pick from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BudgetOptions {
    values: Vec<u32>,
}

impl Default for BudgetOptions {
    fn default() -> Self {
        Self {
            values: DEFAULT_BUDGET_OPTIONS.to_vec(),
        }
    }
}

impl BudgetOptions {
    pub fn new(values: Vec<u32>) -> Result<Self, IterationBudgetError> {
        if values.is_empty() {
            return Err(IterationBudgetError::NoOptions);
        }

        if values.contains(&0) {
            return Err(IterationBudgetError::Zero);
        }

        Ok(Self { values })
    }

    #[must_use]
    pub fn values(&self) -> &[u32] {
        &self.values
    }

    #[must_use]
    pub fn first(&self) -> IterationBudget {
        // non-empty and zero-free by construction
        IterationBudget(self.values[0])
    }

    #[must_use]
    pub fn nth(&self, index: usize) -> Option<IterationBudget> {
        self.values.get(index).copied().map(IterationBudget)
    }

    pub fn select(&self, requested: u32) -> Result<IterationBudget, IterationBudgetError> {
        if !self.values.contains(&requested) {
            return Err(IterationBudgetError::NotAllowed {
                requested,
                allowed: self.values.clone(),
            });
        }

        IterationBudget::new(requested)
    }
}
