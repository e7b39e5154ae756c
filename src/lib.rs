//! A start-light reaction timer that never lets you win: after the fifth
//! strip lights up, no "go" ever comes and new strips keep spawning to the
//! right until they run off the screen.

pub mod best;
pub mod config;
pub mod error;
pub mod format;
pub mod geometry;
pub mod schedule;
pub mod sequencer;
pub mod session;
pub mod spawner;
pub mod surface;

pub use config::Config;
pub use error::{Error, Result};
pub use session::{Controller, Disposition, Outcome, Phase, Tap};

// Only compile browser glue when targeting wasm32.

#[cfg(target_arch = "wasm32")]
pub mod wasm {
    use std::cell::RefCell;
    use std::rc::Rc;

    use log::{info, Level};
    use wasm_bindgen::prelude::*;

    use crate::{Config, Controller, Error};

    mod input;
    mod render;
    mod storage;
    mod timers;

    pub use render::DomSurface;
    pub use storage::LocalStorageBest;
    pub use timers::{FrameTask, TimerTask, WebScheduler};

    pub type App = Controller<DomSurface, WebScheduler>;

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();

        console_log::init_with_level(Level::Trace).ok();

        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let config = Config::apply_query(&window.location().search().unwrap_or_default());

        let document = window.document().ok_or(Error::NoDocument)?;
        let surface = DomSurface::from_document(&document, config.lights_per_strip)?;
        let best = LocalStorageBest::new(&config.best_time_key);

        let app = Controller::new(surface, WebScheduler::detached(), config, &best)?;
        let app: Rc<RefCell<App>> = Rc::new(RefCell::new(app));
        WebScheduler::attach(&app)?;
        input::listen(&app)?;

        info!("start lights ready");
        Ok(())
    }
}
