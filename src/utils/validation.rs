use crate::utils::error::{Result, WaitError};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_negative(field_name: &str, value: i64) -> Result<()> {
    if value < 0 {
        return Err(WaitError::InvalidParameter {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value must be at least 0".to_string(),
        });
    }
    Ok(())
}
