use crate::core::data::iteration_budget::IterationBudgetError;
use std::error::Error;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ControllerError {
    Budget(IterationBudgetError),
    NonFiniteWheelDelta,
}

impl fmt::Display for ControllerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Budget(err) => write!(f, "budget selection rejected: {}", err),
            Self::NonFiniteWheelDelta => write!(f, "wheel delta must be finite"),
        }
    }
}

impl Error for ControllerError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Budget(err) => Some(err),
            Self::NonFiniteWheelDelta => None,
        }
    }
}

impl From<IterationBudgetError> for ControllerError {
    fn from(err: IterationBudgetError) -> Self {
        Self::Budget(err)
    }
}
