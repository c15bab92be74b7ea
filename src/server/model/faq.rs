//! Domain & parameter models for FAQ entries

use crate::{
    model::faq::{FaqDto, UpsertFaqDto},
    server::{error::AppError, util::validate::require_length},
};

const MAX_QUESTION_LENGTH: usize = 500;
const MAX_ANSWER_LENGTH: usize = 10_000;

#[derive(Debug, Clone, PartialEq)]
pub struct Faq {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub active: bool,
}

impl Faq {
    pub fn from_entity(entity: entity::faq::Model) -> Self {
        Self {
            id: entity.id,
            question: entity.question,
            answer: entity.answer,
            sort_order: entity.sort_order,
            active: entity.active,
        }
    }

    pub fn into_dto(self) -> FaqDto {
        FaqDto {
            id: self.id,
            question: self.question,
            answer: self.answer,
            sort_order: self.sort_order,
            active: self.active,
        }
    }
}

#[derive(Debug, Clone)]
pub struct UpsertFaqParams {
    pub question: String,
    pub answer: String,
    pub sort_order: i32,
    pub active: bool,
}

impl UpsertFaqParams {
    pub fn from_dto(dto: UpsertFaqDto) -> Result<Self, AppError> {
        require_length("question", &dto.question, MAX_QUESTION_LENGTH)?;
        require_length("answer", &dto.answer, MAX_ANSWER_LENGTH)?;

        Ok(Self {
            question: dto.question.trim().to_string(),
            answer: dto.answer.trim().to_string(),
            sort_order: dto.sort_order,
            active: dto.active,
        })
    }
}
