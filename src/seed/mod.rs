//! Startup seeding from bundled flat-file snapshots.
//!
//! Reference collections ship with a compiled-in JSON snapshot so a fresh
//! database starts usable. Seeding skips any collection that already has at
//! least one record, making it safe to run on every startup; the forced
//! reseed variant clears and reloads unconditionally and is only reachable
//! through an explicit administrative endpoint.

use crate::db::Repository;
use crate::errors::AppError;
use crate::models::{CreateMappingRequest, ReferenceEntry, ReferenceKind};

/// Outcome of seeding a single collection.
#[derive(Debug)]
pub struct SeedOutcome {
    pub seeded: bool,
    pub count: usize,
}

fn snapshot(kind: ReferenceKind) -> &'static str {
    match kind {
        ReferenceKind::EcountStores => include_str!("../../seeds/ecount_stores.json"),
        ReferenceKind::StaticManagers => include_str!("../../seeds/static_managers.json"),
        ReferenceKind::EcountWarehouses => include_str!("../../seeds/ecount_warehouses.json"),
        ReferenceKind::ItemCodes => include_str!("../../seeds/item_codes.json"),
    }
}

fn mapping_snapshot() -> &'static str {
    include_str!("../../seeds/mappings.json")
}

/// Seed one reference collection if it is empty.
pub async fn seed_reference(
    repo: &Repository,
    kind: ReferenceKind,
) -> Result<SeedOutcome, AppError> {
    if repo.count_reference(kind).await? > 0 {
        return Ok(SeedOutcome {
            seeded: false,
            count: 0,
        });
    }

    let entries: Vec<ReferenceEntry> = serde_json::from_str(snapshot(kind))?;
    let count = repo.replace_reference(kind, &entries).await?;
    tracing::info!(collection = kind.table(), count, "seeded reference collection");

    Ok(SeedOutcome {
        seeded: true,
        count,
    })
}

/// Seed the mapping collection if it is empty.
pub async fn seed_mappings(repo: &Repository) -> Result<SeedOutcome, AppError> {
    if repo.count_mappings().await? > 0 {
        return Ok(SeedOutcome {
            seeded: false,
            count: 0,
        });
    }

    let count = load_mappings(repo).await?;
    tracing::info!(count, "seeded manager/store mappings");
    Ok(SeedOutcome {
        seeded: true,
        count,
    })
}

/// Forced variant: clear and reload the mapping collection unconditionally.
pub async fn reseed_mappings(repo: &Repository) -> Result<usize, AppError> {
    repo.clear_mappings().await?;
    load_mappings(repo).await
}

async fn load_mappings(repo: &Repository) -> Result<usize, AppError> {
    let requests: Vec<CreateMappingRequest> = serde_json::from_str(mapping_snapshot())?;
    repo.import_mappings(&requests).await
}

/// Run all startup seeding. Idempotent; called on every boot.
pub async fn seed_all(repo: &Repository) -> Result<(), AppError> {
    let mut total = 0;

    for kind in ReferenceKind::ALL {
        let outcome = seed_reference(repo, kind).await?;
        if outcome.seeded {
            total += outcome.count;
        }
    }

    let outcome = seed_mappings(repo).await?;
    if outcome.seeded {
        total += outcome.count;
    }

    if total > 0 {
        tracing::info!(total, "startup seeding complete");
    }
    Ok(())
}
