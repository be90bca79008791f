use std::{fs, marker::PhantomData, path::PathBuf};

/// Filesystem changes that can be undone if scaffolding fails partway.
pub enum RollbackOperation {
    RemoveFile(PathBuf),
    RemoveDir(PathBuf),
}

/// Transaction still collecting operations.
pub struct Active;
/// Transaction whose changes are final.
pub struct Committed;

pub trait TransactionState {
    const SHOULD_ROLLBACK: bool;
}
impl TransactionState for Active {
    const SHOULD_ROLLBACK: bool = true;
}
impl TransactionState for Committed {
    const SHOULD_ROLLBACK: bool = false;
}

/// Tracks every directory and file the scaffolder creates so that dropping
/// an uncommitted transaction removes them again, most recent first. The
/// destination root is registered first, so the final rollback step removes
/// the project directory wholesale.
///
/// Rollback failures are reported on stderr but never replace the error that
/// triggered the rollback.
pub struct Transaction<State: TransactionState> {
    rollback_operations: Vec<RollbackOperation>,
    state: PhantomData<State>,
}

impl Transaction<Active> {
    pub fn new() -> Self {
        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }

    /// Registers an operation to undo if the transaction is dropped without
    /// being committed.
    pub fn add_operation(&mut self, operation: RollbackOperation) {
        self.rollback_operations.push(operation);
    }

    /// Finalizes the transaction, preventing any rollback from occurring.
    pub fn commit(mut self) -> Transaction<Committed> {
        self.rollback_operations.clear();

        Transaction {
            rollback_operations: vec![],
            state: PhantomData,
        }
    }
}

impl Default for Transaction<Active> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: TransactionState> Drop for Transaction<S> {
    fn drop(&mut self) {
        if S::SHOULD_ROLLBACK && !self.rollback_operations.is_empty() {
            log::debug!("rolling back {} operations", self.rollback_operations.len());

            while let Some(operation) = self.rollback_operations.pop() {
                let (path, result) = match operation {
                    RollbackOperation::RemoveDir(path) => {
                        log::debug!("removing dir: {}", path.display());
                        let result = fs::remove_dir_all(&path);
                        (path, result)
                    }
                    RollbackOperation::RemoveFile(path) => {
                        log::debug!("removing file: {}", path.display());
                        let result = fs::remove_file(&path);
                        (path, result)
                    }
                };

                // a later-registered operation may already have removed the path
                if let Err(error) = result {
                    if error.kind() != std::io::ErrorKind::NotFound {
                        eprintln!("Failed to clean up {}: {}", path.display(), error);
                    }
                }
            }
        }
    }
}
