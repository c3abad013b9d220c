use motion_core::graph::{EffectGraph, EffectGroup, GraphError, PropertyConfig, StyleProperty};
use motion_core::scroll::{ScrollTrack, TrackRect};
use motion_core::spring::SpringParams;

const VIEWPORT_H: f32 = 800.0;

fn rect_at(doc_top: f32, height: f32, scroll_y: f32) -> TrackRect {
    TrackRect {
        top: doc_top - scroll_y,
        height,
    }
}

fn parallax_group() -> EffectGroup {
    EffectGroup::new(
        ScrollTrack::enter_to_exit(),
        &[
            PropertyConfig::new(StyleProperty::TranslateY, vec![(0.0, 0.0), (1.0, 200.0)]),
            PropertyConfig::new(StyleProperty::Opacity, vec![(0.0, 0.0), (0.3, 1.0)]),
        ],
    )
}

#[test]
fn group_outputs_follow_scroll_progress() {
    let mut group = parallax_group();
    let doc_top = 2000.0;
    let height = 600.0;
    // 30% through the enter-to-exit window.
    let start = doc_top - VIEWPORT_H;
    let end = doc_top + height;
    let scroll = start + 0.3 * (end - start);
    let values = group
        .advance(rect_at(doc_top, height, scroll), VIEWPORT_H, scroll, 1.0 / 60.0)
        .to_vec();
    assert!((group.progress() - 0.3).abs() < 1e-4);

    let y = values
        .iter()
        .find(|(p, _)| *p == StyleProperty::TranslateY)
        .unwrap()
        .1;
    assert!((y - 60.0).abs() < 1e-2);
    let opacity = values
        .iter()
        .find(|(p, _)| *p == StyleProperty::Opacity)
        .unwrap()
        .1;
    assert!((opacity - 1.0).abs() < 1e-4); // 0.3 is the end of its ramp
}

#[test]
fn smoothed_property_lags_then_settles() {
    let mut group = EffectGroup::new(
        ScrollTrack::enter_to_exit(),
        &[PropertyConfig::new(
            StyleProperty::TranslateX,
            vec![(0.0, 0.0), (1.0, 100.0)],
        )
        .smoothed(SpringParams::critically_damped(120.0, 1.0))],
    );
    let doc_top = 2000.0;
    let height = 600.0;
    let scroll = doc_top + height; // progress 1, target 100

    let first = group.advance(rect_at(doc_top, height, scroll), VIEWPORT_H, scroll, 1.0 / 60.0)[0].1;
    assert!(first < 100.0, "spring output jumped to target");

    let mut last = first;
    for _ in 0..600 {
        last = group.advance(rect_at(doc_top, height, scroll), VIEWPORT_H, scroll, 1.0 / 60.0)[0].1;
    }
    assert!((last - 100.0).abs() < 1e-2);
}

#[test]
fn same_snapshot_reproduces_same_unsmoothed_output() {
    let mut group = parallax_group();
    let rect = rect_at(2000.0, 600.0, 1700.0);
    let a = group.advance(rect, VIEWPORT_H, 1700.0, 1.0 / 60.0).to_vec();
    let b = group.advance(rect, VIEWPORT_H, 1700.0, 1.0 / 60.0).to_vec();
    assert_eq!(a, b);
}

#[test]
fn graph_looks_up_groups_by_name() {
    let mut graph = EffectGraph::new();
    graph.insert("craft-image", parallax_group());
    assert_eq!(graph.len(), 1);

    let rect = rect_at(2000.0, 600.0, 2600.0);
    let values = graph
        .advance("craft-image", rect, VIEWPORT_H, 2600.0, 1.0 / 60.0)
        .unwrap();
    assert_eq!(values.len(), 2);

    match graph.advance("missing", rect, VIEWPORT_H, 2600.0, 1.0 / 60.0) {
        Err(GraphError::UnknownGroup(name)) => assert_eq!(name, "missing"),
        other => panic!("expected UnknownGroup, got {other:?}"),
    }

    assert!(graph.remove("craft-image").is_some());
    assert!(graph.is_empty());
}

#[test]
fn malformed_tunnel_fade_knots_are_repaired() {
    // The stacked-showcase fade ramps can collide when an item's window is
    // short; the interpolator has to coalesce them without NaN.
    let mut group = EffectGroup::new(
        ScrollTrack::pinned(),
        &[PropertyConfig::new(
            StyleProperty::Opacity,
            vec![(0.2, 0.0), (0.25, 1.0), (0.25, 1.0), (0.6, 0.0)],
        )],
    );
    let doc_top = 0.0;
    let height = 4.0 * VIEWPORT_H;
    for i in 0..=40 {
        let scroll = i as f32 / 40.0 * (height - VIEWPORT_H);
        let v = group.advance(rect_at(doc_top, height, scroll), VIEWPORT_H, scroll, 1.0 / 60.0)[0].1;
        assert!(v.is_finite());
        assert!((0.0..=1.0).contains(&v));
    }
}
