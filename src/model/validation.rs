use thiserror::Error;

pub const TEAM_NAME_MAX: usize = 50;
pub const USERNAME_MAX: usize = 20;

/// Form-layer input errors. These never cross the repository boundary;
/// they are rendered inline next to the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{0}")]
    Required(&'static str),
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
}

pub fn validate_team_name(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Required("Team name is required"));
    }
    if name.chars().count() > TEAM_NAME_MAX {
        return Err(ValidationError::TooLong {
            field: "Team name",
            max: TEAM_NAME_MAX,
        });
    }
    Ok(())
}

/// The assign dialog's team select; only emptiness is worth checking
/// since the choices come from the stored collection.
pub fn validate_team_choice(name: &str) -> Result<(), ValidationError> {
    if name.is_empty() {
        return Err(ValidationError::Required("Select team name"));
    }
    Ok(())
}

pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    if username.is_empty() {
        return Err(ValidationError::Required("Username is required"));
    }
    if username.chars().count() > USERNAME_MAX {
        return Err(ValidationError::TooLong {
            field: "Username",
            max: USERNAME_MAX,
        });
    }
    Ok(())
}
