use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Authorization level attached to every account.
///
/// Stored as lowercase TEXT in the `users` table; `FromStr` is the single
/// place an incoming role string is checked against the closed set, so an
/// unknown role can never reach storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    #[default]
    Clinician,
    Viewer,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown role: {0:?} (expected admin, clinician or viewer)")]
pub struct ParseRoleError(String);

impl Role {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Clinician => "clinician",
            Self::Viewer => "viewer",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ParseRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Self::Admin),
            "clinician" => Ok(Self::Clinician),
            "viewer" => Ok(Self::Viewer),
            other => Err(ParseRoleError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_member() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!("clinician".parse::<Role>().unwrap(), Role::Clinician);
        assert_eq!("viewer".parse::<Role>().unwrap(), Role::Viewer);
    }

    #[test]
    fn rejects_unknown_and_mixed_case() {
        assert!("bogus".parse::<Role>().is_err());
        assert!("Admin".parse::<Role>().is_err());
        assert!("".parse::<Role>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for role in [Role::Admin, Role::Clinician, Role::Viewer] {
            assert_eq!(role.to_string().parse::<Role>().unwrap(), role);
        }
    }

    #[test]
    fn default_is_clinician() {
        assert_eq!(Role::default(), Role::Clinician);
    }
}
