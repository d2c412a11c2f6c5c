//! Stock catalogue and testimonials for a fresh store.
//!
//! Seeding is not deduplicated: running it twice inserts everything twice.

use kilap_db::DocumentStore;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::KilapResult;
use crate::service::{create_service, model::ServiceInput};
use crate::testimonial::{create_testimonial, model::TestimonialInput};

const STOCK_SERVICES: &[(&str, i64, &str, &str)] = &[
    (
        "Cuci Dasar",
        25000,
        "Pembersihan dasar bagian luar sepatu dengan bahan khusus.",
        "/services/cuci-dasar.jpg",
    ),
    (
        "Cuci Premium",
        50000,
        "Pembersihan menyeluruh luar dalam termasuk deodorisasi.",
        "/services/cuci-premium.jpg",
    ),
    (
        "Repaint & Restoration",
        150000,
        "Perbaikan warna dan kondisi sepatu seperti baru.",
        "/services/repaint.jpg",
    ),
];

const STOCK_TESTIMONIALS: &[(&str, &str, f64, &str)] = &[
    (
        "Andi Wijaya",
        "/testimonials/person1.jpg",
        5.0,
        "Sepatu sneaker putih saya yang sudah kuning kembali bersih seperti baru. Proses trackingnya juga sangat membantu!",
    ),
    (
        "Budi Santoso",
        "/testimonials/person2.jpg",
        5.0,
        "Pelayanan cepat dan hasilnya memuaskan. Sekarang semua sepatu koleksi saya rutin dicuci di sini.",
    ),
    (
        "Citra Dewi",
        "/testimonials/person3.jpg",
        4.5,
        "Sangat praktis bisa booking via website dan dijemput di rumah. Hasil cuciannya bersih dan wangi.",
    ),
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedReport {
    pub services: usize,
    pub testimonials: usize,
}

pub async fn seed_services(store: &dyn DocumentStore) -> KilapResult<usize> {
    for (name, price, description, image_url) in STOCK_SERVICES {
        create_service(
            store,
            ServiceInput {
                name: name.to_string(),
                price: Some(*price),
                description: description.to_string(),
                image_url: image_url.to_string(),
            },
        )
        .await?;
    }
    info!(count = STOCK_SERVICES.len(), "Seeded services");
    Ok(STOCK_SERVICES.len())
}

pub async fn seed_testimonials(store: &dyn DocumentStore) -> KilapResult<usize> {
    for (name, image, rating, text) in STOCK_TESTIMONIALS {
        create_testimonial(
            store,
            TestimonialInput {
                name: name.to_string(),
                image: image.to_string(),
                rating: *rating,
                text: text.to_string(),
            },
        )
        .await?;
    }
    info!(count = STOCK_TESTIMONIALS.len(), "Seeded testimonials");
    Ok(STOCK_TESTIMONIALS.len())
}

pub async fn seed_all(store: &dyn DocumentStore) -> KilapResult<SeedReport> {
    Ok(SeedReport {
        services: seed_services(store).await?,
        testimonials: seed_testimonials(store).await?,
    })
}
