use std::collections::HashSet;
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::tiles::TileResult;
use crate::traffic::{
    BuildingRecord, DatasetError, DatasetKind, DatasetSource, HotspotRecord, load_dataset,
};

pub(crate) enum JobMessage {
    DatasetLoaded(DatasetLoadResult),
    TileLoaded(TileResult),
}

#[derive(Debug)]
pub(crate) enum DatasetRecords {
    Buildings(Vec<BuildingRecord>),
    Hotspots(Vec<HotspotRecord>),
}

#[derive(Debug)]
pub(crate) struct DatasetLoadResult {
    pub(crate) kind: DatasetKind,
    pub(crate) source: String,
    pub(crate) result: Result<DatasetRecords, DatasetError>,
    pub(crate) elapsed: Duration,
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    datasets_in_flight: HashSet<DatasetKind>,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = std::sync::mpsc::channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            datasets_in_flight: HashSet::new(),
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    pub(super) fn forward_tile_results(&self, rx: Receiver<TileResult>) {
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            while let Ok(message) = rx.recv() {
                if tx.send(JobMessage::TileLoaded(message)).is_err() {
                    break;
                }
            }
        });
    }

    pub(super) fn dataset_load_in_progress(&self, kind: DatasetKind) -> bool {
        self.datasets_in_flight.contains(&kind)
    }

    pub(super) fn any_dataset_loading(&self) -> bool {
        !self.datasets_in_flight.is_empty()
    }

    pub(super) fn begin_dataset_load(
        &mut self,
        kind: DatasetKind,
        source: DatasetSource,
        max_bytes: usize,
    ) {
        self.datasets_in_flight.insert(kind);
        let tx = self.message_tx.clone();
        thread::spawn(move || {
            let start = Instant::now();
            let result = match kind {
                DatasetKind::Buildings => {
                    load_dataset(&source, max_bytes).map(DatasetRecords::Buildings)
                }
                DatasetKind::Hotspots => {
                    load_dataset(&source, max_bytes).map(DatasetRecords::Hotspots)
                }
            };
            let _ = tx.send(JobMessage::DatasetLoaded(DatasetLoadResult {
                kind,
                source: source.to_string(),
                result,
                elapsed: start.elapsed(),
            }));
        });
    }

    pub(super) fn finish_dataset_load(&mut self, kind: DatasetKind) {
        self.datasets_in_flight.remove(&kind);
    }
}
