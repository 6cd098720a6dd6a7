use crate::color::ColorScale;
use crate::models::DayView;
use crate::navigator::{Navigator, Ticket};
use crate::pager::DatePager;
use crate::storage::SlateStore;
use std::{path::PathBuf, sync::Arc};
use tokio::sync::Mutex;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<SlateStore>,
    pub scale: ColorScale,
    pub logo_dir: PathBuf,
    pub navigator: Arc<Mutex<Navigator>>,
}

impl AppState {
    pub fn new(store: SlateStore, scale: ColorScale, logo_dir: PathBuf, pager: DatePager) -> Self {
        Self {
            store: Arc::new(store),
            scale,
            logo_dir,
            navigator: Arc::new(Mutex::new(Navigator::new(pager))),
        }
    }

    /// Reads the ticket's slate without holding the lock, then commits it.
    pub async fn fetch(&self, ticket: Ticket) -> DayView {
        let result = self.store.load(&ticket.key).await;
        let mut navigator = self.navigator.lock().await;
        navigator.commit(ticket, result, &self.scale);
        navigator.view()
    }

    pub async fn reload(&self) -> DayView {
        let ticket = self.navigator.lock().await.current_ticket();
        self.fetch(ticket).await
    }
}
