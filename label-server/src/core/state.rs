use std::sync::Arc;
use std::time::Duration;

use super::Config;
use crate::document::DocumentBuilder;
use crate::printing::PrintDispatcher;
use crate::store::LabelStore;
use crate::symbol::Code128Renderer;

/// Shared application state, cloned into every handler
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: LabelStore,
    pub renderer: Arc<Code128Renderer>,
    pub builder: DocumentBuilder,
    pub dispatcher: Arc<PrintDispatcher>,
}

impl AppState {
    /// Open the store and assemble the rendering/printing components
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let store = LabelStore::open(config.db_path())?
            .with_max_print_quantity(config.max_print_quantity);

        let renderer = Code128Renderer::new(config.symbol.clone());
        let builder = DocumentBuilder::new(config.layout);
        let dispatcher = PrintDispatcher::new(config.spool_dir())
            .with_command(config.print_command.clone())
            .with_delay(Duration::from_millis(config.print_delay_ms));

        tracing::info!(
            counter = store.counter(),
            history = store.history_len(),
            "Store ready"
        );

        Ok(Self {
            config: Arc::new(config.clone()),
            store,
            renderer: Arc::new(renderer),
            builder,
            dispatcher: Arc::new(dispatcher),
        })
    }
}
