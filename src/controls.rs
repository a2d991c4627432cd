use crate::constants::{RADIUS_SLIDER_ID, SCALE_SLIDER_ID, SLIDER_EVENT};
use crate::dom;
use crate::values::parse_slider_value;
use crate::SphereLoop;
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub enum Control {
    SphereRadius,
    ProjectionScale,
}

/// Apply one control value to the running field.
pub fn apply(render_loop: &RefCell<SphereLoop>, control: Control, value: f32) {
    let Ok(mut rl) = render_loop.try_borrow_mut() else {
        log::warn!("[controls] render loop busy; dropped {:?} = {}", control, value);
        return;
    };
    let field = rl.field_mut();
    match control {
        Control::SphereRadius => field.set_sphere_radius(value),
        Control::ProjectionScale => field.set_projection_scale(value),
    }
}

/// Hook the page's range inputs, if present, to the render loop.
pub fn wire_sliders(document: &web::Document, render_loop: &Rc<RefCell<SphereLoop>>) {
    let (radius, scale) = {
        let rl = render_loop.borrow();
        let cfg = rl.field().config();
        (cfg.sphere_radius, cfg.projection_scale)
    };
    wire_slider(document, RADIUS_SLIDER_ID, Control::SphereRadius, radius, render_loop);
    wire_slider(document, SCALE_SLIDER_ID, Control::ProjectionScale, scale, render_loop);
}

fn wire_slider(
    document: &web::Document,
    id: &str,
    control: Control,
    initial: f32,
    render_loop: &Rc<RefCell<SphereLoop>>,
) {
    let Some(input) = dom::input_by_id(document, id) else {
        log::info!("[controls] no #{id}; {:?} stays at {}", control, initial);
        return;
    };
    input.set_value(&initial.to_string());
    let rl = render_loop.clone();
    dom::add_value_listener(&input, SLIDER_EVENT, move |raw| {
        match parse_slider_value(&raw) {
            Some(v) => apply(&rl, control, v),
            None => log::warn!("[controls] ignoring {:?} value {:?}", control, raw),
        }
    });
}
