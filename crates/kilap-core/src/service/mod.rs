//! Service catalogue management.

pub mod model;

use kilap_db::queries::services as queries;
use kilap_db::DocumentStore;
use tracing::{info, instrument};

use crate::error::{KilapError, KilapResult};
use model::{Service, ServiceInput};

/// All services, ordered by name.
pub async fn list_services(store: &dyn DocumentStore) -> KilapResult<Vec<Service>> {
    let rows = queries::list_services(store).await?;
    Ok(rows.into_iter().map(Service::from_row).collect())
}

/// Get a service by ID.
pub async fn get_service(store: &dyn DocumentStore, id: &str) -> KilapResult<Service> {
    queries::get_service(store, id)
        .await?
        .map(Service::from_row)
        .ok_or_else(|| KilapError::not_found(format!("Service {}", id)))
}

/// Create a new service.
#[instrument(skip(store, input), fields(name = %input.name))]
pub async fn create_service(store: &dyn DocumentStore, input: ServiceInput) -> KilapResult<Service> {
    let fields = input.into_fields()?;
    let row = queries::insert_service(store, &fields).await?;
    info!(service_id = %row.id, "Service created");
    Ok(Service::from_row(row))
}

/// Replace the editable fields of a service.
#[instrument(skip(store, input))]
pub async fn update_service(
    store: &dyn DocumentStore,
    id: &str,
    input: ServiceInput,
) -> KilapResult<Service> {
    let fields = input.into_fields()?;
    queries::update_service(store, id, &fields)
        .await
        .map_err(|e| KilapError::from_store_lookup(e, format!("Service {}", id)))?;
    info!("Service updated");
    get_service(store, id).await
}

/// Delete a service. Bookings that reference it are left untouched.
#[instrument(skip(store))]
pub async fn delete_service(store: &dyn DocumentStore, id: &str) -> KilapResult<()> {
    queries::delete_service(store, id)
        .await
        .map_err(|e| KilapError::from_store_lookup(e, format!("Service {}", id)))?;
    info!("Service deleted");
    Ok(())
}
