use engine::{ExpenseStore, FileBlobStore, JsonExpenseStore, Ledger, MemoryBlobStore, stats};
use settings::{Settings, Storage};

mod settings;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let settings = Settings::new()?;

    tracing_subscriber::fmt()
        .with_env_filter(format!(
            "expense_peek={level},engine={level}",
            level = settings.app.level
        ))
        .init();

    match &settings.storage {
        Storage::Memory => {
            tracing::info!("Using in-memory storage, nothing will be persisted");
            let store = JsonExpenseStore::with_key(MemoryBlobStore::new(), &settings.storage_key);
            run(store, &settings).await
        }
        Storage::File(dir) => {
            let blob = FileBlobStore::new(dir);
            tracing::info!("Using file storage in {}", blob.dir().display());
            let store = JsonExpenseStore::with_key(blob, &settings.storage_key);
            run(store, &settings).await
        }
    }
}

/// Builds the single ledger of this session and loads it.
async fn run<S: ExpenseStore>(
    store: S,
    settings: &Settings,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let mut ledger = Ledger::builder(store).range(settings.range).build();
    if let Err(err) = ledger.refresh().await {
        tracing::error!("failed to load expenses: {err}");
        return Err(err.into());
    }

    let visible = ledger.visible();
    tracing::info!(
        range = ledger.range().label(),
        items = ledger.items().len(),
        visible = visible.len(),
        total_cents = stats::grand_total(visible.iter().copied()),
        "ledger ready"
    );
    for total in stats::by_category(visible) {
        tracing::info!(
            category = %total.category,
            total_cents = total.total_cents,
            "category total"
        );
    }

    Ok(())
}
