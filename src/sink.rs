//! Channel for handing datasets to the plot UI.
//!
//! Loading raw text (from disk, the network, ...) happens outside the UI. Loaders
//! hold a cloneable [`DatasetSink`]; the UI drains the matching receiver once per
//! frame and replaces its dataset with each resolved result.
//!
//! A sink can be tagged with a load generation ([`DatasetSink::tagged`]). The UI
//! drops tagged commands that belong to an older generation than the last load it
//! started, so a slow loader cannot overwrite a newer dataset.

use std::sync::mpsc::{Receiver, SendError, Sender};

use crate::data::records::{parse_report, ParseReport};

/// Messages sent over the channel to drive the UI.
pub enum DatasetCommand {
    /// Replace the dataset with already parsed records.
    Replace {
        /// Human-readable origin of the data, e.g. a file name.
        source: Option<String>,
        dataset: ParseReport,
        generation: Option<u64>,
    },
    /// A loader failed; the current dataset stays in place.
    LoadFailed {
        source: Option<String>,
        error: String,
        generation: Option<u64>,
    },
}

impl DatasetCommand {
    pub fn generation(&self) -> Option<u64> {
        match self {
            DatasetCommand::Replace { generation, .. }
            | DatasetCommand::LoadFailed { generation, .. } => *generation,
        }
    }
}

/// Convenience sender for feeding datasets into the plot.
#[derive(Clone)]
pub struct DatasetSink {
    tx: Sender<DatasetCommand>,
    generation: Option<u64>,
}

impl DatasetSink {
    /// A sink on the same channel whose commands carry `generation`.
    pub fn tagged(&self, generation: u64) -> Self {
        Self {
            tx: self.tx.clone(),
            generation: Some(generation),
        }
    }

    /// Parse `text` on the calling thread and send the result.
    pub fn send_text(
        &self,
        source: Option<String>,
        text: &str,
    ) -> Result<(), SendError<DatasetCommand>> {
        self.send_dataset(source, parse_report(text))
    }

    /// Send an already parsed dataset.
    pub fn send_dataset(
        &self,
        source: Option<String>,
        dataset: ParseReport,
    ) -> Result<(), SendError<DatasetCommand>> {
        self.tx.send(DatasetCommand::Replace {
            source,
            dataset,
            generation: self.generation,
        })
    }

    /// Report a loading failure to the UI.
    pub fn send_error(
        &self,
        source: Option<String>,
        error: impl Into<String>,
    ) -> Result<(), SendError<DatasetCommand>> {
        self.tx.send(DatasetCommand::LoadFailed {
            source,
            error: error.into(),
            generation: self.generation,
        })
    }
}

/// Create a new channel pair: a `DatasetSink` for loaders and a `Receiver` for the UI.
pub fn channel_dataset() -> (DatasetSink, Receiver<DatasetCommand>) {
    let (tx, rx) = std::sync::mpsc::channel();
    (
        DatasetSink {
            tx,
            generation: None,
        },
        rx,
    )
}
