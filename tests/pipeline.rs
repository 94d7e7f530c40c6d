//! End-to-end tests of the drawing input pipeline: raw device events flow
//! through the pointer tracker into the tool state machine, mutate the
//! surface, and export as PNG.

use inkpad::draw::color::{BLACK, RED};
use inkpad::draw::Surface;
use inkpad::export;
use inkpad::input::{
    DeviceEvent, InputState, PointerTracker, SurfaceRect, Tool, TouchContact,
};
use inkpad::util;

fn rect_for(surface: &Surface) -> SurfaceRect {
    SurfaceRect {
        left: 16.0,
        top: 16.0,
        width: surface.width() as f64,
        height: surface.height() as f64,
    }
}

fn deliver(tracker: &mut PointerTracker, input: &mut InputState, event: DeviceEvent) {
    let rect = rect_for(&input.surface);
    if let Some(pointer) = tracker.normalize(&event, rect).event {
        input.on_pointer_event(pointer);
    }
}

fn session(tool: Tool) -> (PointerTracker, InputState) {
    let (w, h) = util::surface_size(600);
    (
        PointerTracker::new(),
        InputState::with_defaults(Surface::new(w, h), tool, RED, 10),
    )
}

#[test]
fn mouse_stroke_paints_only_while_pressed() {
    let (mut tracker, mut input) = session(Tool::Brush);

    // Move before any press: nothing painted.
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 66.0, y: 66.0 });
    assert!(input.surface.pixels().iter().all(|&b| b == 0));

    // Press at client (66, 66) = surface (50, 50), drag, release.
    deliver(&mut tracker, &mut input, DeviceEvent::MouseDown { x: 66.0, y: 66.0 });
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 96.0, y: 66.0 });
    deliver(&mut tracker, &mut input, DeviceEvent::MouseUp);
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 66.0, y: 96.0 });

    assert_eq!(input.surface.pixel(50, 50), Some([255, 0, 0, 255]));
    assert_eq!(input.surface.pixel(80, 50), Some([255, 0, 0, 255]));
    // The post-release move at surface (50, 80) painted nothing.
    assert_eq!(input.surface.pixel(50, 80), Some([0, 0, 0, 0]));
}

#[test]
fn mouse_leaving_surface_ends_stroke() {
    let (mut tracker, mut input) = session(Tool::Brush);

    deliver(&mut tracker, &mut input, DeviceEvent::MouseDown { x: 66.0, y: 66.0 });
    deliver(&mut tracker, &mut input, DeviceEvent::MouseOut);
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 96.0, y: 96.0 });

    assert_eq!(input.surface.pixel(80, 80), Some([0, 0, 0, 0]));
}

#[test]
fn touch_stroke_follows_first_contact() {
    let (mut tracker, mut input) = session(Tool::Brush);

    deliver(
        &mut tracker,
        &mut input,
        DeviceEvent::TouchStart {
            contacts: vec![TouchContact { id: 4, x: 66.0, y: 66.0 }],
        },
    );
    // A second finger lands and moves; only contact 4 paints.
    deliver(
        &mut tracker,
        &mut input,
        DeviceEvent::TouchMove {
            contacts: vec![
                TouchContact { id: 9, x: 116.0, y: 116.0 },
                TouchContact { id: 4, x: 96.0, y: 66.0 },
            ],
        },
    );
    deliver(&mut tracker, &mut input, DeviceEvent::TouchEnd);

    assert_eq!(input.surface.pixel(50, 50), Some([255, 0, 0, 255]));
    assert_eq!(input.surface.pixel(80, 50), Some([255, 0, 0, 255]));
    assert_eq!(input.surface.pixel(100, 100), Some([0, 0, 0, 0]));
}

#[test]
fn fill_then_export_round_trips() {
    let (mut tracker, mut input) = session(Tool::Fill);

    deliver(&mut tracker, &mut input, DeviceEvent::MouseDown { x: 20.0, y: 20.0 });
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 40.0, y: 40.0 });
    deliver(&mut tracker, &mut input, DeviceEvent::MouseUp);

    let bytes = export::encode_png(&input.surface).unwrap();
    let decoded = image::load_from_memory(&bytes).unwrap().to_rgba8();
    assert_eq!(
        decoded.dimensions(),
        (input.surface.width(), input.surface.height())
    );
    assert!(decoded.pixels().all(|px| px.0 == [255, 0, 0, 255]));
}

#[test]
fn resize_mid_stroke_keeps_pipeline_consistent() {
    let (mut tracker, mut input) = session(Tool::Brush);
    input.set_color(BLACK);

    deliver(&mut tracker, &mut input, DeviceEvent::MouseDown { x: 66.0, y: 66.0 });
    input.resize_viewport(300);
    assert_eq!(input.surface.width(), 220);

    // The rect shrank with the surface; the live stroke keeps painting at
    // positions mapped against the fresh rect.
    deliver(&mut tracker, &mut input, DeviceEvent::MouseMove { x: 116.0, y: 116.0 });
    assert_eq!(input.surface.pixel(50, 50), Some([0, 0, 0, 255]));
    assert_eq!(input.surface.pixel(100, 100), Some([0, 0, 0, 255]));
}
