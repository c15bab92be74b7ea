//! Domain & parameter models for discount codes

use chrono::{DateTime, Utc};

use crate::{
    model::discount::{
        CreateDiscountCodeDto, DiscountCodeDto, UpdateDiscountCodeDto, ValidDiscountDto,
    },
    server::error::AppError,
};

const MIN_CODE_LENGTH: usize = 3;
const MAX_CODE_LENGTH: usize = 32;

#[derive(Debug, Clone, PartialEq)]
pub struct DiscountCode {
    pub id: i32,
    pub code: String,
    pub percent_off: i16,
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
    pub times_used: i32,
    pub created_at: DateTime<Utc>,
}

impl DiscountCode {
    pub fn from_entity(entity: entity::discount_code::Model) -> Self {
        Self {
            id: entity.id,
            code: entity.code,
            percent_off: entity.percent_off,
            active: entity.active,
            expires_at: entity.expires_at,
            max_uses: entity.max_uses,
            times_used: entity.times_used,
            created_at: entity.created_at,
        }
    }

    /// Whether the code can be applied to an order at `now`.
    ///
    /// A code is redeemable when active, not past its expiry and below its use limit.
    pub fn is_redeemable(&self, now: DateTime<Utc>) -> bool {
        if !self.active {
            return false;
        }
        if matches!(self.expires_at, Some(expires_at) if expires_at <= now) {
            return false;
        }
        if matches!(self.max_uses, Some(max_uses) if self.times_used >= max_uses) {
            return false;
        }
        true
    }

    pub fn into_dto(self) -> DiscountCodeDto {
        DiscountCodeDto {
            id: self.id,
            code: self.code,
            percent_off: self.percent_off,
            active: self.active,
            expires_at: self.expires_at,
            max_uses: self.max_uses,
            times_used: self.times_used,
            created_at: self.created_at,
        }
    }

    pub fn into_valid_dto(self) -> ValidDiscountDto {
        ValidDiscountDto {
            code: self.code,
            percent_off: self.percent_off,
        }
    }
}

/// Normalizes a customer-entered code: trimmed and upper-cased.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_ascii_uppercase()
}

fn validate_code(code: &str) -> Result<(), AppError> {
    let valid_chars = code
        .chars()
        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !valid_chars || code.len() < MIN_CODE_LENGTH || code.len() > MAX_CODE_LENGTH {
        return Err(AppError::BadRequest(format!(
            "code must be {}-{} characters of A-Z, 0-9, '-' or '_'",
            MIN_CODE_LENGTH, MAX_CODE_LENGTH
        )));
    }
    Ok(())
}

fn validate_limits(percent_off: i16, max_uses: Option<i32>) -> Result<(), AppError> {
    if !(1..=100).contains(&percent_off) {
        return Err(AppError::BadRequest(
            "percent_off must be between 1 and 100".to_string(),
        ));
    }
    if matches!(max_uses, Some(max) if max < 1) {
        return Err(AppError::BadRequest(
            "max_uses must be at least 1".to_string(),
        ));
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct CreateDiscountCodeParams {
    /// Normalized code, or `None` to have one generated.
    pub code: Option<String>,
    pub percent_off: i16,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
}

impl CreateDiscountCodeParams {
    pub fn from_dto(dto: CreateDiscountCodeDto) -> Result<Self, AppError> {
        validate_limits(dto.percent_off, dto.max_uses)?;

        let code = dto
            .code
            .map(|c| normalize_code(&c))
            .filter(|c| !c.is_empty());
        if let Some(code) = &code {
            validate_code(code)?;
        }

        Ok(Self {
            code,
            percent_off: dto.percent_off,
            expires_at: dto.expires_at,
            max_uses: dto.max_uses,
        })
    }
}

#[derive(Debug, Clone)]
pub struct UpdateDiscountCodeParams {
    pub active: bool,
    pub expires_at: Option<DateTime<Utc>>,
    pub max_uses: Option<i32>,
}

impl UpdateDiscountCodeParams {
    pub fn from_dto(dto: UpdateDiscountCodeDto) -> Result<Self, AppError> {
        if matches!(dto.max_uses, Some(max) if max < 1) {
            return Err(AppError::BadRequest(
                "max_uses must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            active: dto.active,
            expires_at: dto.expires_at,
            max_uses: dto.max_uses,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn code() -> DiscountCode {
        DiscountCode {
            id: 1,
            code: "SPRING10".to_string(),
            percent_off: 10,
            active: true,
            expires_at: None,
            max_uses: None,
            times_used: 0,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn active_unlimited_code_is_redeemable() {
        assert!(code().is_redeemable(Utc::now()));
    }

    #[test]
    fn inactive_expired_and_exhausted_are_not_redeemable() {
        let now = Utc::now();

        let mut inactive = code();
        inactive.active = false;
        assert!(!inactive.is_redeemable(now));

        let mut expired = code();
        expired.expires_at = Some(now - Duration::minutes(1));
        assert!(!expired.is_redeemable(now));

        let mut exhausted = code();
        exhausted.max_uses = Some(3);
        exhausted.times_used = 3;
        assert!(!exhausted.is_redeemable(now));
    }

    #[test]
    fn normalizes_and_validates_codes() {
        assert_eq!(normalize_code("  spring10 "), "SPRING10");

        let params = CreateDiscountCodeParams::from_dto(CreateDiscountCodeDto {
            code: Some("vip-2026".to_string()),
            percent_off: 15,
            expires_at: None,
            max_uses: Some(50),
        })
        .unwrap();
        assert_eq!(params.code.as_deref(), Some("VIP-2026"));

        assert!(CreateDiscountCodeParams::from_dto(CreateDiscountCodeDto {
            code: Some("no spaces".to_string()),
            percent_off: 15,
            expires_at: None,
            max_uses: None,
        })
        .is_err());
    }

    #[test]
    fn rejects_out_of_range_percent() {
        for percent_off in [0, 101] {
            assert!(CreateDiscountCodeParams::from_dto(CreateDiscountCodeDto {
                code: None,
                percent_off,
                expires_at: None,
                max_uses: None,
            })
            .is_err());
        }
    }
}
