/// Where a dataset is in its one-shot load.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Pending,
    Loaded,
    Failed(String),
}

/// Records of one kind plus a generation counter bumped on every replacement.
///
/// Filtered views compare generations instead of record contents to notice
/// that the source data changed.
#[derive(Clone, Debug)]
pub struct Dataset<T> {
    records: Vec<T>,
    generation: u64,
    state: LoadState,
}

impl<T> Default for Dataset<T> {
    fn default() -> Self {
        Self {
            records: Vec::new(),
            generation: 0,
            state: LoadState::Pending,
        }
    }
}

impl<T> Dataset<T> {
    pub fn records(&self) -> &[T] {
        &self.records
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Install freshly loaded records.
    pub fn replace(&mut self, records: Vec<T>) {
        self.records = records;
        self.generation += 1;
        self.state = LoadState::Loaded;
    }

    /// Record a load failure. The dataset stays empty.
    pub fn fail(&mut self, message: impl Into<String>) {
        if !self.records.is_empty() {
            self.records.clear();
            self.generation += 1;
        }
        self.state = LoadState::Failed(message.into());
    }
}
