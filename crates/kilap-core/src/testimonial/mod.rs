//! Customer testimonials shown on the public site.

pub mod model;

use kilap_db::queries::testimonials as queries;
use kilap_db::DocumentStore;
use tracing::info;

use crate::error::KilapResult;
use model::{Testimonial, TestimonialInput};

/// Testimonials, highest rated first.
pub async fn list_testimonials(store: &dyn DocumentStore) -> KilapResult<Vec<Testimonial>> {
    let rows = queries::list_testimonials(store).await?;
    Ok(rows.into_iter().map(Testimonial::from_row).collect())
}

pub async fn create_testimonial(
    store: &dyn DocumentStore,
    input: TestimonialInput,
) -> KilapResult<Testimonial> {
    let fields = input.into_fields()?;
    let row = queries::insert_testimonial(store, &fields).await?;
    info!(testimonial_id = %row.id, "Testimonial created");
    Ok(Testimonial::from_row(row))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kilap_db::MemoryStore;

    #[tokio::test]
    async fn test_highest_rating_first() {
        let store = MemoryStore::new();
        for (name, rating) in [("Citra", 4.5), ("Andi", 5.0), ("Dodi", 3.0)] {
            create_testimonial(
                &store,
                TestimonialInput {
                    name: name.to_string(),
                    image: String::new(),
                    rating,
                    text: "Mantap".to_string(),
                },
            )
            .await
            .unwrap();
        }

        let names: Vec<_> = list_testimonials(&store)
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.name)
            .collect();
        assert_eq!(names, vec!["Andi", "Citra", "Dodi"]);
    }
}
