//! Dashboard command.

use anyhow::Result;
use kilap_db::DocumentStore;

use crate::output;

pub async fn execute(store: &dyn DocumentStore) -> Result<()> {
    let summary = kilap_core::dashboard::summary(store).await?;
    output::print_dashboard(&summary);
    Ok(())
}
