//! Derived-value graph: declarative per-property animation configuration
//! composed from range maps and optional spring smoothing, grouped per
//! effect and keyed by name.
//!
//! Each group is evaluated at most once per tick with that tick's geometry
//! snapshot; outputs are pure functions of the snapshot apart from spring
//! state, which is the intentionally stateful part.

use crate::interp::RangeMap;
use crate::scroll::{ScrollTrack, TrackRect};
use crate::spring::{Spring, SpringParams};
use fnv::FnvHashMap;
use thiserror::Error;

/// The closed set of visual outputs a property can drive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StyleProperty {
    /// Horizontal offset, px.
    TranslateX,
    /// Vertical offset, px.
    TranslateY,
    /// Uniform scale factor.
    Scale,
    /// Rotation, degrees.
    Rotate,
    /// Opacity in [0, 1].
    Opacity,
}

/// Declarative description of one animated property.
#[derive(Clone, Debug)]
pub struct PropertyConfig {
    pub property: StyleProperty,
    pub breakpoints: Vec<(f32, f32)>,
    pub clamp: bool,
    pub smoothing: Option<SpringParams>,
}

impl PropertyConfig {
    pub fn new(property: StyleProperty, breakpoints: Vec<(f32, f32)>) -> Self {
        Self {
            property,
            breakpoints,
            clamp: true,
            smoothing: None,
        }
    }

    pub fn smoothed(mut self, params: SpringParams) -> Self {
        self.smoothing = Some(params);
        self
    }
}

/// One property with its compiled map and spring state.
#[derive(Clone, Debug)]
struct DrivenProperty {
    property: StyleProperty,
    map: RangeMap<f32>,
    spring: Option<Spring>,
    value: f32,
}

impl DrivenProperty {
    fn new(config: &PropertyConfig) -> Self {
        let map = RangeMap::new(config.breakpoints.iter().copied(), config.clamp);
        let initial = map.sample(0.0);
        Self {
            property: config.property,
            map,
            spring: config.smoothing.map(|p| Spring::new(p, initial)),
            value: initial,
        }
    }

    fn advance(&mut self, input: f32, dt: f32) -> f32 {
        let target = self.map.sample(input);
        self.value = match &mut self.spring {
            Some(spring) => spring.advance(target, dt),
            None => target,
        };
        self.value
    }
}

/// A scroll-tracked element's worth of driven properties.
pub struct EffectGroup {
    track: ScrollTrack,
    props: Vec<DrivenProperty>,
    values: Vec<(StyleProperty, f32)>,
    progress: f32,
}

impl EffectGroup {
    pub fn new(track: ScrollTrack, configs: &[PropertyConfig]) -> Self {
        let props: Vec<DrivenProperty> = configs.iter().map(DrivenProperty::new).collect();
        let values = props.iter().map(|p| (p.property, p.value)).collect();
        Self {
            track,
            props,
            values,
            progress: 0.0,
        }
    }

    /// Evaluate against this tick's geometry and return the output values.
    pub fn advance(
        &mut self,
        rect: TrackRect,
        viewport_h: f32,
        scroll_y: f32,
        dt: f32,
    ) -> &[(StyleProperty, f32)] {
        self.progress = self.track.progress(rect, viewport_h, scroll_y);
        for (prop, out) in self.props.iter_mut().zip(self.values.iter_mut()) {
            out.1 = prop.advance(self.progress, dt);
        }
        &self.values
    }

    #[inline]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    #[inline]
    pub fn values(&self) -> &[(StyleProperty, f32)] {
        &self.values
    }
}

#[derive(Debug, Error)]
pub enum GraphError {
    #[error("unknown effect group: {0}")]
    UnknownGroup(String),
}

/// Named registry of effect groups, one per bound element.
#[derive(Default)]
pub struct EffectGraph {
    groups: FnvHashMap<String, EffectGroup>,
}

impl EffectGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, group: EffectGroup) {
        self.groups.insert(key.into(), group);
    }

    pub fn remove(&mut self, key: &str) -> Option<EffectGroup> {
        self.groups.remove(key)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Evaluate one group by name against this tick's geometry.
    pub fn advance(
        &mut self,
        key: &str,
        rect: TrackRect,
        viewport_h: f32,
        scroll_y: f32,
        dt: f32,
    ) -> Result<&[(StyleProperty, f32)], GraphError> {
        let group = self
            .groups
            .get_mut(key)
            .ok_or_else(|| GraphError::UnknownGroup(key.to_owned()))?;
        Ok(group.advance(rect, viewport_h, scroll_y, dt))
    }

    pub fn get(&self, key: &str) -> Option<&EffectGroup> {
        self.groups.get(key)
    }
}
