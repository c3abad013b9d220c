//! Scene discovery: scan the document for annotated elements and compile
//! them into an effect graph plus the per-element bindings that paint it.
//!
//! Annotations are plain classes and data attributes, so the page markup
//! stays declarative:
//!   - `.fx-rise` / `.fx-sink` — parallax columns drifting against scroll
//!   - `.fx-fade` — opacity ramp while the element crosses the viewport
//!   - `#tunnel` with `.tunnel-item` children — pinned stacked fly-through
//!   - `.ticker-row` (`data-velocity` optional) — continuous marquee strip
//!   - `.magnetic` — pointer-follow element

use crate::bindings::{MagneticBinding, MarqueeBinding, SectionBinding};
use glam::Vec2;
use motion_core::{
    EffectGraph, EffectGroup, Marquee, MarqueeParams, PropertyConfig, ScrollTrack, StyleProperty,
    PARALLAX_TRAVEL_PX, TUNNEL_FADE_SPAN, TUNNEL_ITEM_SPAN, TUNNEL_ITEM_STAGGER, TUNNEL_SCALE_FAR,
    TUNNEL_SCALE_NEAR, TUNNEL_TWIST_DEG,
};
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct Scene {
    pub graph: EffectGraph,
    pub sections: Vec<SectionBinding>,
    pub marquees: Vec<MarqueeBinding>,
    pub magnetics: Vec<MagneticBinding>,
}

impl Scene {
    pub fn build(document: &web::Document, viewport: Vec2) -> Self {
        let mut graph = EffectGraph::new();
        let mut sections = Vec::new();

        for (idx, el) in elements_by_class(document, "fx-rise").enumerate() {
            bind_section(
                &mut graph,
                &mut sections,
                format!("rise-{idx}"),
                &el,
                ScrollTrack::enter_to_exit(),
                &[PropertyConfig::new(
                    StyleProperty::TranslateY,
                    vec![(0.0, 0.0), (1.0, -PARALLAX_TRAVEL_PX)],
                )],
            );
        }

        for (idx, el) in elements_by_class(document, "fx-sink").enumerate() {
            bind_section(
                &mut graph,
                &mut sections,
                format!("sink-{idx}"),
                &el,
                ScrollTrack::enter_to_exit(),
                &[PropertyConfig::new(
                    StyleProperty::TranslateY,
                    vec![(0.0, 0.0), (1.0, PARALLAX_TRAVEL_PX)],
                )],
            );
        }

        for (idx, el) in elements_by_class(document, "fx-fade").enumerate() {
            bind_section(
                &mut graph,
                &mut sections,
                format!("fade-{idx}"),
                &el,
                ScrollTrack::enter_to_exit(),
                &[PropertyConfig::new(
                    StyleProperty::Opacity,
                    vec![(0.0, 0.0), (0.35, 1.0), (0.75, 1.0), (1.0, 0.0)],
                )],
            );
        }

        if let Some(container) = document.get_element_by_id("tunnel") {
            for (idx, el) in elements_by_class(document, "tunnel-item").enumerate() {
                let (key, group, target) = tunnel_item(idx, &el, viewport);
                if let Some(target) = target {
                    graph.insert(key.clone(), group);
                    sections.push(SectionBinding {
                        key,
                        target,
                        tracked: container.clone(),
                    });
                }
            }
        }

        let marquees = elements_by_class(document, "ticker-row")
            .filter_map(|el| {
                let target: web::HtmlElement = el.dyn_into().ok()?;
                let mut params = MarqueeParams::default();
                if let Some(v) = target
                    .get_attribute("data-velocity")
                    .and_then(|s| s.parse::<f32>().ok())
                {
                    params.base_velocity = v;
                }
                Some(MarqueeBinding {
                    element: target,
                    marquee: Marquee::new(params),
                })
            })
            .collect();

        let magnetics = elements_by_class(document, "magnetic")
            .filter_map(|el| {
                let target: web::HtmlElement = el.dyn_into().ok()?;
                Some(MagneticBinding::new(target))
            })
            .collect();

        Self {
            graph,
            sections,
            marquees,
            magnetics,
        }
    }
}

fn bind_section(
    graph: &mut EffectGraph,
    sections: &mut Vec<SectionBinding>,
    key: String,
    element: &web::Element,
    track: ScrollTrack,
    configs: &[PropertyConfig],
) {
    let Ok(target) = element.clone().dyn_into::<web::HtmlElement>() else {
        return;
    };
    graph.insert(key.clone(), EffectGroup::new(track, configs));
    sections.push(SectionBinding {
        key,
        target,
        tracked: element.clone(),
    });
}

/// Per-item fly-through choreography inside the pinned tunnel: each item owns
/// a staggered progress window; inside it the item scales up from the far
/// plane, untwists, and fades in then out at the window edges.
fn tunnel_item(
    idx: usize,
    element: &web::Element,
    viewport: Vec2,
) -> (String, EffectGroup, Option<web::HtmlElement>) {
    let start = idx as f32 * TUNNEL_ITEM_STAGGER;
    let end = start + TUNNEL_ITEM_SPAN;
    let twist = if idx % 2 == 0 {
        -TUNNEL_TWIST_DEG
    } else {
        TUNNEL_TWIST_DEG
    };

    let configs = [
        PropertyConfig::new(
            StyleProperty::Scale,
            vec![(start, TUNNEL_SCALE_FAR), (end, TUNNEL_SCALE_NEAR)],
        ),
        PropertyConfig::new(StyleProperty::Rotate, vec![(start, twist), (end, 0.0)]),
        PropertyConfig::new(
            StyleProperty::TranslateY,
            vec![(start, viewport.y), (end, -viewport.y)],
        ),
        PropertyConfig::new(
            StyleProperty::Opacity,
            vec![
                (start, 0.0),
                (start + TUNNEL_FADE_SPAN, 1.0),
                (end - TUNNEL_FADE_SPAN, 1.0),
                (end, 0.0),
            ],
        ),
    ];

    let group = EffectGroup::new(ScrollTrack::pinned(), &configs);
    let target = element.clone().dyn_into::<web::HtmlElement>().ok();
    (format!("tunnel-{idx}"), group, target)
}

/// Snapshot a live HtmlCollection into an iterator of elements.
fn elements_by_class(document: &web::Document, class: &str) -> impl Iterator<Item = web::Element> {
    let collection = document.get_elements_by_class_name(class);
    let mut out = Vec::with_capacity(collection.length() as usize);
    for i in 0..collection.length() {
        if let Some(el) = collection.item(i) {
            out.push(el);
        }
    }
    out.into_iter()
}
