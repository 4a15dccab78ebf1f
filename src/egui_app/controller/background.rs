use super::jobs::JobMessage;
use super::*;

impl MapController {
    /// Drain finished background work. Call once per frame.
    pub fn poll_background(&mut self, ctx: &egui::Context) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(
                    std::sync::mpsc::TryRecvError::Empty
                    | std::sync::mpsc::TryRecvError::Disconnected,
                ) => {
                    break;
                }
            };
            match message {
                JobMessage::DatasetLoaded(message) => self.handle_dataset_loaded(message),
                JobMessage::TileLoaded(message) => self.handle_tile_loaded(ctx, message),
            }
        }
    }
}
