use chrono::{DateTime, Utc};
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::discount_code::DiscountCodeRepository,
    error::AppError,
    model::discount::{
        normalize_code, CreateDiscountCodeParams, DiscountCode, UpdateDiscountCodeParams,
    },
};

/// Message returned for every unusable code so callers can't probe which codes exist.
pub const INVALID_CODE_MESSAGE: &str = "Invalid or expired discount code";

const GENERATED_CODE_LENGTH: usize = 8;
const GENERATE_ATTEMPTS: usize = 5;

pub struct DiscountService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscountService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Looks up a customer-entered code and checks it can be applied at `now`.
    ///
    /// # Returns
    /// - `Ok(DiscountCode)` - Code is active, unexpired and under its use limit
    /// - `Err(AppError::NotFound)` - Unknown, inactive, expired or exhausted code
    pub async fn validate(&self, code: &str, now: DateTime<Utc>) -> Result<DiscountCode, AppError> {
        let code = normalize_code(code);
        if code.is_empty() {
            return Err(AppError::NotFound(INVALID_CODE_MESSAGE.to_string()));
        }

        match DiscountCodeRepository::new(self.db)
            .find_by_code(&code)
            .await?
        {
            Some(discount) if discount.is_redeemable(now) => Ok(discount),
            _ => Err(AppError::NotFound(INVALID_CODE_MESSAGE.to_string())),
        }
    }

    pub async fn list(&self) -> Result<Vec<DiscountCode>, AppError> {
        Ok(DiscountCodeRepository::new(self.db).get_all().await?)
    }

    /// Creates a code, generating a random one when none was given.
    ///
    /// # Returns
    /// - `Ok(DiscountCode)` - The created code
    /// - `Err(AppError::BadRequest)` - Explicit code already exists
    /// - `Err(AppError::InternalError)` - No free random code found
    pub async fn create(&self, params: CreateDiscountCodeParams) -> Result<DiscountCode, AppError> {
        let repo = DiscountCodeRepository::new(self.db);

        let code = match params.code {
            Some(code) => {
                if repo.code_exists(&code).await? {
                    return Err(code_conflict(&code));
                }
                code
            }
            None => self.generate_unused_code().await?,
        };

        repo.create(
            code.clone(),
            params.percent_off,
            params.expires_at,
            params.max_uses,
        )
        .await
        .map_err(|err| AppError::on_unique_violation(err, || code_conflict(&code)))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateDiscountCodeParams,
    ) -> Result<DiscountCode, AppError> {
        DiscountCodeRepository::new(self.db)
            .update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound("Discount code not found".to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !DiscountCodeRepository::new(self.db).delete(id).await? {
            return Err(AppError::NotFound("Discount code not found".to_string()));
        }
        Ok(())
    }

    /// Counts one redemption after a successful payment. Unknown codes are ignored.
    pub async fn redeem(&self, code: &str) -> Result<bool, AppError> {
        Ok(DiscountCodeRepository::new(self.db)
            .increment_times_used(&normalize_code(code))
            .await?)
    }

    async fn generate_unused_code(&self) -> Result<String, AppError> {
        let repo = DiscountCodeRepository::new(self.db);

        for _ in 0..GENERATE_ATTEMPTS {
            let code = generate_random_code();
            if !repo.code_exists(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::InternalError(
            "Failed to generate a unique discount code".to_string(),
        ))
    }
}

/// Generates an 8-character code of upper-case letters and digits.
fn code_conflict(code: &str) -> AppError {
    AppError::BadRequest(format!("Discount code '{}' already exists", code))
}

fn generate_random_code() -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

    let mut rng = rand::rng();

    (0..GENERATED_CODE_LENGTH)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
