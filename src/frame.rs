use crate::constants::FRAME_STATS_INTERVAL_SEC;
use crate::dom::ResizeListener;
use crate::SphereLoop;
use glowsphere_core::FrameStatus;
use instant::Instant;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// Rolling frame-rate summary, reported at debug level.
struct FrameStats {
    since: Instant,
    frames: u32,
    drawn: usize,
}

impl FrameStats {
    fn new() -> Self {
        Self {
            since: Instant::now(),
            frames: 0,
            drawn: 0,
        }
    }

    fn record(&mut self, drawn: usize) {
        self.frames += 1;
        self.drawn += drawn;
        let elapsed = self.since.elapsed().as_secs_f32();
        if elapsed >= FRAME_STATS_INTERVAL_SEC {
            log::debug!(
                "[frame] {:.1} fps, {:.0} particles drawn per frame",
                self.frames as f32 / elapsed,
                self.drawn as f32 / self.frames as f32
            );
            *self = Self::new();
        }
    }
}

/// One animation frame: follow canvas resizes, then draw.
fn frame(render_loop: &RefCell<SphereLoop>, stats: &mut FrameStats) -> FrameStatus {
    let mut rl = render_loop.borrow_mut();
    let size = rl.surface().size();
    rl.field_mut().resize(size);
    let status = rl.frame();
    if let FrameStatus::Continue { drawn } = status {
        stats.record(drawn);
    }
    status
}

fn request_frame(callback: &Closure<dyn FnMut()>) {
    if let Some(w) = web::window() {
        _ = w.request_animation_frame(callback.as_ref().unchecked_ref());
    }
}

/// Drive `render_loop` from requestAnimationFrame until its handle is cancelled.
///
/// On cancel the frame closure is released together with everything it owns
/// (the loop, its canvas and `resize`), so nothing outlives the effect.
pub fn start_loop(render_loop: Rc<RefCell<SphereLoop>>, resize: ResizeListener) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    let mut stats = FrameStats::new();
    let mut resize = Some(resize);
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        match frame(&render_loop, &mut stats) {
            FrameStatus::Cancelled => {
                log::info!(
                    "[frame] loop cancelled after {} frames",
                    render_loop.borrow().frames()
                );
                drop(resize.take());
                // The closure is still executing; drop it once this call has returned.
                if let Some(finished) = tick_clone.borrow_mut().take() {
                    spawn_local(async move { drop(finished) });
                }
            }
            FrameStatus::Idle | FrameStatus::Continue { .. } => {
                if let Some(cb) = tick_clone.borrow().as_ref() {
                    request_frame(cb);
                }
            }
        }
    }) as Box<dyn FnMut()>));
    if let Some(cb) = tick.borrow().as_ref() {
        request_frame(cb);
    }
}
