//! End-to-end coordination scenarios driven through a recording surface.
//!
//! These mirror the behavior of the hand-written platform redraw loops this
//! kernel replaces: pan-and-patch scrolling, clamped overscroll, bounded
//! damage slots, and the empty-tab no-op.

use reblit_core::geometry::{Point, Rect, Size};
use reblit_core::surface::SurfaceOp;
use reblit_render::damage::DamageList;
use reblit_render::headless::RecordingSurface;
use reblit_render::viewport::Viewport;

/// An 800x600 viewport over 2000px-tall content, scrolled to y=100 with the
/// initial repaints already flushed.
fn scrolled_viewport() -> (Viewport, RecordingSurface) {
    let mut vp = Viewport::new(Size::new(800, 600));
    vp.set_content(Size::new(800, 2000));
    let mut surface = RecordingSurface::new();
    assert!(vp.tick(&mut surface));
    vp.request_scroll(0, 100);
    assert!(vp.tick(&mut surface));
    assert_eq!(vp.offset(), Point::new(0, 100));
    surface.clear();
    (vp, surface)
}

#[test]
fn small_scroll_pans_and_patches_the_exposed_strip() {
    let (mut vp, mut surface) = scrolled_viewport();

    vp.request_scroll(0, 50);
    assert!(vp.tick(&mut surface));

    assert_eq!(vp.offset(), Point::new(0, 150));
    assert_eq!(
        surface.ops(),
        &[
            SurfaceOp::Blit {
                src: Rect::new(0, 50, 800, 600),
                dst: Point::ZERO,
            },
            SurfaceOp::Render(Rect::new(0, 550, 800, 600)),
            SurfaceOp::Present(Rect::new(0, 550, 800, 600)),
        ]
    );
}

#[test]
fn scroll_exceeding_viewport_repaints_everything() {
    let (mut vp, mut surface) = scrolled_viewport();

    vp.request_scroll(0, 700);
    assert!(vp.tick(&mut surface));

    // max_scroll is 2000 - 600 = 1400; 100 + 700 stays inside it.
    assert_eq!(vp.offset(), Point::new(0, 800));
    assert!(surface.blits().is_empty());
    surface.assert_rendered_exactly(&[Rect::new(0, 0, 800, 600)]);
    assert_eq!(surface.presented(), vec![Rect::new(0, 0, 800, 600)]);
}

#[test]
fn ninth_disjoint_damage_rect_coarsens_the_last_slot() {
    let mut list = DamageList::with_capacity(8);
    for i in 0..9i32 {
        let x = i * 60;
        list.insert(Rect::new(x, 0, x + 40, 40));
    }
    assert_eq!(list.len(), 8);
    let slots: Vec<Rect> = list.drain().collect();
    assert_eq!(slots[7], Rect::new(420, 0, 520, 40));
    for (i, slot) in slots.iter().take(7).enumerate() {
        let x = i as i32 * 60;
        assert_eq!(*slot, Rect::new(x, 0, x + 40, 40));
    }
}

#[test]
fn tick_without_content_touches_nothing() {
    let mut vp = Viewport::new(Size::new(800, 600));
    vp.notify_content_changed(Rect::new(0, 0, 400, 300));
    vp.request_scroll(0, 50);

    let mut surface = RecordingSurface::new();
    assert!(!vp.tick(&mut surface));
    surface.assert_no_calls();
}

#[test]
fn scroll_and_damage_in_one_pass_blit_first() {
    let (mut vp, mut surface) = scrolled_viewport();

    vp.notify_content_changed(Rect::new(10, 10, 20, 20));
    vp.request_scroll(0, 50);
    assert!(vp.tick(&mut surface));

    // The blit must precede every render: panning after a repaint would
    // shift freshly rendered pixels.
    let ops = surface.ops();
    assert!(matches!(ops[0], SurfaceOp::Blit { .. }));
    let rendered = surface.rendered();
    assert!(rendered.contains(&Rect::new(10, 10, 20, 20)));
    assert!(rendered.contains(&Rect::new(0, 550, 800, 600)));
    assert_eq!(surface.presented().len(), rendered.len());
}

#[test]
fn repeated_wheel_events_collapse_into_one_pan() {
    let (mut vp, mut surface) = scrolled_viewport();

    for _ in 0..5 {
        vp.request_scroll(0, 10);
    }
    assert!(vp.tick(&mut surface));

    assert_eq!(vp.offset(), Point::new(0, 150));
    assert_eq!(surface.blits().len(), 1);
    surface.assert_rendered_exactly(&[Rect::new(0, 550, 800, 600)]);
}

#[test]
fn opposing_requests_cancel_before_the_pass() {
    let (mut vp, mut surface) = scrolled_viewport();

    vp.request_scroll(0, 40);
    vp.request_scroll(0, -40);
    assert!(!vp.tick(&mut surface));
    assert_eq!(vp.offset(), Point::new(0, 100));
    surface.assert_no_calls();
}

#[test]
fn navigation_replaces_content_and_repaints() {
    let (mut vp, mut surface) = scrolled_viewport();

    vp.set_content(Size::new(800, 900));
    assert!(vp.tick(&mut surface));
    // Old offset survives (it fits the new range); the full viewport is
    // repainted for the new page.
    assert_eq!(vp.offset(), Point::new(0, 100));
    surface.assert_rendered_exactly(&[Rect::new(0, 0, 800, 600)]);
}
