use crate::best::{parse_best, BestTimeStore};

/// Best time kept in `localStorage`, read once when constructed.
pub struct LocalStorageBest {
    raw: Option<String>,
}

impl LocalStorageBest {
    pub fn new(key: &str) -> Self {
        let raw = web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .and_then(|s| s.get_item(key).ok().flatten());
        LocalStorageBest { raw }
    }
}

impl BestTimeStore for LocalStorageBest {
    fn read(&self) -> Option<f64> {
        parse_best(self.raw.as_deref())
    }
}
