mod app;
mod gpu;

use std::sync::Arc;
use std::time::Instant;

use winit::event_loop::{ControlFlow, EventLoop};

use waves::config::{FIELD_HEIGHT, FIELD_WIDTH};
use waves::{Session, TrigCache};

use crate::app::App;

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let start = Instant::now();
    let cache = Arc::new(TrigCache::new());
    log::info!("Trig cache built in {} ms", start.elapsed().as_millis());

    let session = Session::new(FIELD_WIDTH, FIELD_HEIGHT, cache)?;

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Wait);

    let mut app = App::new(session);
    event_loop.run_app(&mut app)?;

    if let Some(e) = app.take_failure() {
        return Err(e.into());
    }
    Ok(())
}
