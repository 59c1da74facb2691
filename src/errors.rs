use thiserror::Error;

use crate::ledger::split::SplitId;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("Invalid value: {0}")]
    Parse(String),
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("No split with id {0}")]
    UnknownSplit(SplitId),
    #[error("{friend} is not part of split {split}")]
    UnknownFriend { split: SplitId, friend: String },
    #[error("Could not set up logging: {0}")]
    Logging(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Deserialization error: {0}")]
    Deserialization(#[from] toml::de::Error),
}

/// Validation failures of the input forms, shown to the user as a toast.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Missing Information")]
    MissingInformation,
    #[error("No Friends Added")]
    NoFriends,
    #[error("Nothing to Add")]
    NothingToAdd,
    #[error("Invalid Amount")]
    InvalidAmount { field: &'static str, reason: String },
    #[error("Invalid Amount")]
    NegativeAmount { field: &'static str },
    #[error("Invalid Date")]
    InvalidDate { field: &'static str },
    #[error("Missing Information")]
    MissingCredentials,
    #[error("Invalid Email")]
    InvalidEmail,
}

impl FormError {
    pub fn title(&self) -> String {
        self.to_string()
    }

    pub fn description(&self) -> String {
        match self {
            Self::MissingInformation => "Please fill in all required fields".into(),
            Self::NoFriends => "Please add at least one friend".into(),
            Self::NothingToAdd => "Enter an income or an expense amount".into(),
            Self::InvalidAmount { field, reason } => {
                format!("{field} is not a valid amount: {reason}")
            }
            Self::NegativeAmount { field } => format!("{field} cannot be negative"),
            Self::InvalidDate { field } => format!("{field} must be a date like 2024-01-31"),
            Self::MissingCredentials => "Please enter your email and password".into(),
            Self::InvalidEmail => "Please enter a valid email address".into(),
        }
    }
}
