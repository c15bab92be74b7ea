//! Domain & parameter models for quote requests

use chrono::{DateTime, Utc};

use crate::{
    model::quote::{CreateQuoteDto, QuoteDto, QuoteStatus},
    server::{
        error::AppError,
        util::validate::{is_valid_email, optional_length, require_length},
    },
};

const MAX_NAME_LENGTH: usize = 100;
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_PHONE_LENGTH: usize = 40;
const MAX_MESSAGE_LENGTH: usize = 5000;

#[derive(Debug, Clone, PartialEq)]
pub struct Quote {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub product_id: Option<i32>,
    pub message: String,
    pub budget_cents: Option<i64>,
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl Quote {
    /// Converts an entity model to the quote domain model.
    ///
    /// Unrecognized stored statuses are read as `New` so they stay visible in the inbox.
    pub fn from_entity(entity: entity::quote::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
            phone: entity.phone,
            product_id: entity.product_id,
            message: entity.message,
            budget_cents: entity.budget_cents,
            status: QuoteStatus::parse(&entity.status).unwrap_or(QuoteStatus::New),
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> QuoteDto {
        QuoteDto {
            id: self.id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            product_id: self.product_id,
            message: self.message,
            budget_cents: self.budget_cents,
            status: self.status,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateQuoteParams {
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub product_id: Option<i32>,
    pub message: String,
    pub budget_cents: Option<i64>,
}

impl CreateQuoteParams {
    pub fn from_dto(dto: CreateQuoteDto) -> Result<Self, AppError> {
        require_length("name", &dto.name, MAX_NAME_LENGTH)?;
        require_length("message", &dto.message, MAX_MESSAGE_LENGTH)?;

        let email = dto.email.trim().to_string();
        if email.len() > MAX_EMAIL_LENGTH || !is_valid_email(&email) {
            return Err(AppError::BadRequest("A valid email is required".to_string()));
        }

        let phone = dto
            .phone
            .map(|p| p.trim().to_string())
            .filter(|p| !p.is_empty());
        optional_length("phone", phone.as_deref(), MAX_PHONE_LENGTH)?;

        if matches!(dto.budget_cents, Some(budget) if budget < 0) {
            return Err(AppError::BadRequest(
                "budget_cents must not be negative".to_string(),
            ));
        }

        Ok(Self {
            name: dto.name.trim().to_string(),
            email,
            phone,
            product_id: dto.product_id,
            message: dto.message.trim().to_string(),
            budget_cents: dto.budget_cents,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> CreateQuoteDto {
        CreateQuoteDto {
            name: "Priya".to_string(),
            email: "priya@example.com".to_string(),
            phone: Some(" ".to_string()),
            product_id: None,
            message: "Looking for a custom emerald pendant".to_string(),
            budget_cents: Some(300_000),
        }
    }

    #[test]
    fn accepts_valid_quote() {
        let params = CreateQuoteParams::from_dto(payload()).unwrap();
        assert_eq!(params.phone, None);
        assert_eq!(params.budget_cents, Some(300_000));
    }

    #[test]
    fn rejects_bad_email() {
        let mut dto = payload();
        dto.email = "priya@example".to_string();
        assert!(matches!(
            CreateQuoteParams::from_dto(dto),
            Err(AppError::BadRequest(_))
        ));
    }

    #[test]
    fn requires_message() {
        let mut dto = payload();
        dto.message = String::new();
        assert!(CreateQuoteParams::from_dto(dto).is_err());
    }

    #[test]
    fn unknown_status_reads_as_new() {
        let quote = Quote::from_entity(entity::quote::Model {
            id: 1,
            name: "A".to_string(),
            email: "a@b.co".to_string(),
            phone: None,
            product_id: None,
            message: "m".to_string(),
            budget_cents: None,
            status: "archived".to_string(),
            created_at: Utc::now(),
        });
        assert_eq!(quote.status, QuoteStatus::New);
    }
}
