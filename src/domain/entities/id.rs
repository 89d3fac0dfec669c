use crate::application::app_error::AppError;
use std::marker::PhantomData;

/// Typed wrapper over the database's integer surrogate keys.
#[derive(Debug, Clone)]
pub struct Id<T> {
    pub value: i64,
    _marker: PhantomData<T>,
}

impl<T> Id<T> {
    pub fn new(value: i64) -> Self {
        Self {
            value,
            _marker: PhantomData,
        }
    }
}

impl<T> TryFrom<String> for Id<T> {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        let id = value
            .parse::<i64>()
            .map_err(|e| AppError::InvalidId(format!("Invalid id `{}`: {}", value, e)))?;
        Ok(Id::new(id))
    }
}
