use async_trait::async_trait;

use crate::{EngineError, Expense, ResultEngine};

use super::{BlobStore, ExpenseStore};

/// Slot key the collection is stored under unless configured otherwise.
pub const DEFAULT_KEY: &str = "EXPENSES_V1";

/// Reference [`ExpenseStore`]: the whole collection serialized as a JSON array
/// in a single blob slot.
///
/// Every mutation reads the collection, changes it and overwrites the slot, so
/// each write costs O(collection size) and two racing mutations can lose one
/// of the updates.
#[derive(Debug)]
pub struct JsonExpenseStore<B> {
    blob: B,
    key: String,
}

impl<B: BlobStore> JsonExpenseStore<B> {
    pub fn new(blob: B) -> Self {
        Self::with_key(blob, DEFAULT_KEY)
    }

    pub fn with_key(blob: B, key: impl Into<String>) -> Self {
        Self {
            blob,
            key: key.into(),
        }
    }

    pub fn blob(&self) -> &B {
        &self.blob
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    async fn read(&self) -> ResultEngine<Vec<Expense>> {
        match self.blob.get(&self.key).await? {
            Some(raw) => serde_json::from_str(&raw).map_err(|err| {
                EngineError::StorageRead(format!("corrupt slot {}: {err}", self.key))
            }),
            None => Ok(Vec::new()),
        }
    }

    async fn write(&self, expenses: &[Expense]) -> ResultEngine<()> {
        let payload = serde_json::to_string(expenses)
            .map_err(|err| EngineError::StorageWrite(err.to_string()))?;
        self.blob.set(&self.key, payload).await
    }
}

#[async_trait]
impl<B: BlobStore> ExpenseStore for JsonExpenseStore<B> {
    async fn get_all(&self) -> ResultEngine<Vec<Expense>> {
        self.read().await
    }

    async fn add(&self, expense: Expense) -> ResultEngine<()> {
        let mut expenses = self.read().await?;
        expenses.push(expense);
        self.write(&expenses).await
    }

    async fn update(&self, expense: Expense) -> ResultEngine<()> {
        let mut expenses = self.read().await?;
        if let Some(slot) = expenses.iter_mut().find(|e| e.id == expense.id) {
            *slot = expense;
        }
        self.write(&expenses).await
    }

    async fn remove(&self, id: &str) -> ResultEngine<()> {
        let mut expenses = self.read().await?;
        expenses.retain(|e| e.id != id);
        self.write(&expenses).await
    }

    async fn replace_all(&self, expenses: Vec<Expense>) -> ResultEngine<()> {
        self.write(&expenses).await
    }
}
