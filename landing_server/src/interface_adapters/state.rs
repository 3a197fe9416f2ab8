use crate::domain::StatsProvider;
use crate::use_cases::LandingCopy;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    // Any provider implementation can back the widgets.
    pub provider: Arc<dyn StatsProvider>,
    pub copy: Arc<LandingCopy>,
}
