//! Terminal spinner shown while a load cycle is running.

use indicatif::{ProgressBar, ProgressStyle};
use sharestat::LoadObserver;
use std::time::Duration;

/// Spinner driven by load notifications; cleared when loading finishes.
#[derive(Debug, Default)]
pub(crate) struct Spinner {
    bar: Option<ProgressBar>,
}

impl Spinner {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl LoadObserver for Spinner {
    fn loading(&mut self, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .expect("valid template"),
        );
        pb.enable_steady_tick(Duration::from_millis(100));
        pb.set_message(message.to_string());
        self.bar = Some(pb);
    }

    fn finished(&mut self) {
        if let Some(pb) = self.bar.take() {
            pb.finish_and_clear();
        }
    }
}
