//! Testimonial models.

use kilap_db::queries::testimonials::{TestimonialFields, TestimonialRow};
use serde::{Deserialize, Serialize};

use crate::error::{KilapError, KilapResult};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub image: String,
    /// 0 to 5 in half steps.
    pub rating: f64,
    pub text: String,
}

impl Testimonial {
    /// Create a Testimonial from a database row.
    pub fn from_row(row: TestimonialRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            image: row.image,
            rating: row.rating,
            text: row.text,
        }
    }

    /// Number of full stars, and whether a half star follows.
    pub fn stars(&self) -> (u8, bool) {
        let halves = (self.rating * 2.0).round() as u8;
        (halves / 2, halves % 2 == 1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestimonialInput {
    pub name: String,
    #[serde(default)]
    pub image: String,
    pub rating: f64,
    pub text: String,
}

impl TestimonialInput {
    pub fn into_fields(self) -> KilapResult<TestimonialFields> {
        if self.name.trim().is_empty() || self.text.trim().is_empty() {
            return Err(KilapError::validation("Testimonial name and text are required"));
        }
        let doubled = self.rating * 2.0;
        if !(0.0..=10.0).contains(&doubled) || doubled.fract() != 0.0 {
            return Err(KilapError::validation(format!(
                "Rating must be between 0 and 5 in half steps, got {}",
                self.rating
            )));
        }

        Ok(TestimonialFields {
            name: self.name,
            image: self.image,
            rating: self.rating,
            text: self.text,
        })
    }
}
