use std::sync::Arc;

use tokio::sync::Mutex;

use diascreen_remote::RemoteClient;

use crate::navigator::Navigator;

/// Everything a command needs: the screen state behind a lock and the
/// remote service handle. Cloning shares both.
#[derive(Clone)]
pub struct AppState {
    pub navigator: Arc<Mutex<Navigator>>,
    pub remote: Arc<dyn RemoteClient>,
}

impl AppState {
    pub fn new(remote: Arc<dyn RemoteClient>) -> Self {
        Self {
            navigator: Arc::new(Mutex::new(Navigator::new())),
            remote,
        }
    }
}
