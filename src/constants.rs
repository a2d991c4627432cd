/// Host-page wiring and frame bookkeeping constants.
///
/// Element ids match `index.html`; hosts embedding the effect elsewhere call
/// `start(canvas_id)` instead of relying on auto-start.
// Canvas the effect auto-starts on when present
pub const CANVAS_ID: &str = "canvasOne";

// Range inputs feeding the two control values
pub const RADIUS_SLIDER_ID: &str = "slider-range";
pub const SCALE_SLIDER_ID: &str = "slider-test";

// DOM event the sliders report on (fires continuously while dragging)
pub const SLIDER_EVENT: &str = "input";

// Frame-rate summary cadence for debug logging
pub const FRAME_STATS_INTERVAL_SEC: f32 = 5.0;
