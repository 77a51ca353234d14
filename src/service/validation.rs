//! Presence and format checks on submitted fields.

use crate::error::AppError;
use crate::model::{KurbanForm, NewKurban};

pub struct RequestValidator;

impl RequestValidator {
    /// Path id for read/delete. Empty means not provided; anything else that is not an
    /// integer cannot exist in the table, so it is reported as not found.
    pub fn id(raw: &str) -> Result<i32, AppError> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Err(AppError::MissingId);
        }
        raw.parse().map_err(|_| AppError::NotFound)
    }

    /// All four fields are required; whitespace-only counts as missing.
    pub fn form(form: KurbanForm) -> Result<NewKurban, AppError> {
        let name = required(form.name)?;
        let kind = required(form.kind)?;
        let weight = required(form.weight)?;
        let price = required(form.price)?;
        Ok(NewKurban {
            name,
            kind,
            weight: integer("weight", &weight)?,
            price: integer("price", &price)?,
        })
    }
}

fn required(value: Option<String>) -> Result<String, AppError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingData)
}

fn integer(field: &'static str, value: &str) -> Result<i32, AppError> {
    value.parse().map_err(|_| AppError::InvalidData(field))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(name: &str, kind: &str, weight: &str, price: &str) -> KurbanForm {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        KurbanForm {
            name: opt(name),
            kind: opt(kind),
            weight: opt(weight),
            price: opt(price),
        }
    }

    #[test]
    fn complete_form_is_accepted() {
        let new = RequestValidator::form(form("Sapi", "Besar", "300", "15000000")).unwrap();
        assert_eq!(new.name, "Sapi");
        assert_eq!(new.kind, "Besar");
        assert_eq!(new.weight, 300);
        assert_eq!(new.price, 15_000_000);
    }

    #[test]
    fn any_missing_field_is_rejected() {
        for f in [
            form("", "Besar", "300", "1"),
            form("Sapi", "", "300", "1"),
            form("Sapi", "Besar", "", "1"),
            form("Sapi", "Besar", "300", ""),
            form("   ", "Besar", "300", "1"),
        ] {
            assert!(matches!(RequestValidator::form(f), Err(AppError::MissingData)));
        }
    }

    #[test]
    fn presence_is_checked_before_format() {
        let err = RequestValidator::form(form("Sapi", "", "heavy", "1")).unwrap_err();
        assert!(matches!(err, AppError::MissingData));
    }

    #[test]
    fn non_integer_weight_is_invalid() {
        let err = RequestValidator::form(form("Sapi", "Besar", "heavy", "1")).unwrap_err();
        assert!(matches!(err, AppError::InvalidData("weight")));
    }

    #[test]
    fn price_outside_int_range_is_invalid() {
        let err = RequestValidator::form(form("Sapi", "Besar", "300", "99999999999")).unwrap_err();
        assert!(matches!(err, AppError::InvalidData("price")));
    }

    #[test]
    fn id_rules() {
        assert!(matches!(RequestValidator::id(""), Err(AppError::MissingId)));
        assert!(matches!(RequestValidator::id("abc"), Err(AppError::NotFound)));
        assert_eq!(RequestValidator::id("7").unwrap(), 7);
    }
}
