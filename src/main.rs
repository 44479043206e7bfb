mod dsp;
mod model;
mod presets;
mod scheduler;
mod ui;

use model::Model;
use presets::PresetStore;
use tracing::error;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let model = Model::new(PresetStore::load_or_default());

    if let Err(err) = ui::run(model) {
        error!("[ui] application failed: {err:?}");
    }
}
