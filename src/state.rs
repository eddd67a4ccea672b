use std::sync::Arc;
use std::time::Duration;

use crate::config::Config;
use crate::notify::system_event::SystemEventNotifier;
use crate::notify::webhook::WebhookNotifier;
use crate::notify::Notifier;
use crate::store::IntakeStore;
use crate::submission::identity::IdGenerator;

pub type SharedState = Arc<AppState>;

pub struct AppState {
    pub config: Config,
    pub store: IntakeStore,
    pub ids: IdGenerator,
    pub webhook: Option<Arc<dyn Notifier>>,
    pub system_event: Option<Arc<dyn Notifier>>,
}

impl AppState {
    /// Wire up the store and notifiers described by `config`.
    pub fn from_config(config: Config) -> Result<Self, String> {
        let webhook: Option<Arc<dyn Notifier>> = match &config.webhook_url {
            Some(url) => Some(Arc::new(WebhookNotifier::new(
                url.clone(),
                config.studio_name.clone(),
                Duration::from_secs(config.webhook_timeout_secs),
            )?)),
            None => {
                tracing::warn!("INTAKER_WEBHOOK_URL not set, webhook notifications disabled");
                None
            }
        };

        let system_event: Option<Arc<dyn Notifier>> = config
            .notify
            .command
            .clone()
            .map(|program| Arc::new(SystemEventNotifier::new(program, &config.notify)) as Arc<dyn Notifier>);

        Ok(Self {
            store: IntakeStore::new(config.storage_dir.clone()),
            ids: IdGenerator::new(),
            webhook,
            system_event,
            config,
        })
    }
}
