//! One-shot viewport triggers for deferred images and scroll-reveal animations.

use std::collections::BTreeMap;

/// Attribute keying a deferred image back to its registry entry.
pub const LAZY_KEY_ATTR: &str = "data-lazy-key";

/// Attribute keying a reveal target back to its registry entry.
pub const REVEAL_KEY_ATTR: &str = "data-reveal-key";

/// Class added to a deferred image once its real source is applied.
pub const LAZY_LOADED_CLASS: &str = "animate-fadeIn";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ObserveKey(pub u64);

impl ObserveKey {
    pub fn parse(raw: &str) -> Option<Self> {
        raw.parse().ok().map(Self)
    }
}

#[derive(Debug, Clone)]
/// Targets that fire once on first intersection and are then forgotten.
///
/// Keys are only unique within one registry, so each registry tags elements through its own
/// attribute.
pub struct OneShotRegistry<T> {
    key_attr: &'static str,
    next_key: u64,
    pending: BTreeMap<ObserveKey, T>,
}

impl<T> OneShotRegistry<T> {
    pub fn new(key_attr: &'static str) -> Self {
        Self {
            key_attr,
            next_key: 0,
            pending: BTreeMap::new(),
        }
    }

    /// Attribute holding this registry's key on observed elements.
    pub fn key_attr(&self) -> &'static str {
        self.key_attr
    }

    /// Registers a target and returns the key to tag its element with.
    pub fn observe(&mut self, payload: T) -> ObserveKey {
        self.next_key += 1;
        let key = ObserveKey(self.next_key);
        self.pending.insert(key, payload);
        key
    }

    /// Consumes the target on intersection. Later calls for the same key return `None`.
    pub fn trigger(&mut self, key: ObserveKey, is_intersecting: bool) -> Option<T> {
        if !is_intersecting {
            return None;
        }
        self.pending.remove(&key)
    }

    pub fn is_observed(&self, key: ObserveKey) -> bool {
        self.pending.contains_key(&key)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl OneShotRegistry<LazyImage> {
    pub fn lazy_images() -> Self {
        Self::new(LAZY_KEY_ATTR)
    }
}

impl OneShotRegistry<RevealTarget> {
    pub fn reveal_targets() -> Self {
        Self::new(REVEAL_KEY_ATTR)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `img[data-src]`: the source to swap in.
pub struct LazyImage {
    pub source: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// `[data-reveal]`: the animation class and delay to apply.
pub struct RevealTarget {
    pub animation: String,
    pub delay_ms: u64,
}

impl RevealTarget {
    /// Builds a target from `data-reveal` / `data-reveal-delay`.
    ///
    /// An empty animation falls back to `default_animation`; a missing or unparsable delay is 0.
    pub fn from_attributes(
        reveal: Option<&str>,
        reveal_delay: Option<&str>,
        default_animation: &str,
    ) -> Self {
        let animation = reveal
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .unwrap_or(default_animation)
            .to_string();
        let delay_ms = reveal_delay
            .and_then(|raw| raw.trim().parse::<f64>().ok())
            .filter(|delay| delay.is_finite() && *delay > 0.0)
            .map(|delay| delay as u64)
            .unwrap_or(0);
        Self {
            animation,
            delay_ms,
        }
    }

    pub fn class_name(&self) -> String {
        format!("animate-{}", self.animation)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use pretty_assertions::assert_eq;

    use super::*;

    /// Attribute map of one element, as the installers tag it.
    type Attributes = HashMap<&'static str, String>;

    fn tag<T>(element: &mut Attributes, registry: &mut OneShotRegistry<T>, payload: T) {
        let key = registry.observe(payload);
        element.insert(registry.key_attr(), key.0.to_string());
    }

    fn fire<T>(element: &Attributes, registry: &mut OneShotRegistry<T>) -> Option<T> {
        let key = ObserveKey::parse(element.get(registry.key_attr())?)?;
        registry.trigger(key, true)
    }

    #[test]
    fn deferred_image_fires_exactly_once_on_intersection() {
        let mut registry = OneShotRegistry::lazy_images();
        let key = registry.observe(LazyImage {
            source: "/media/games/fifa.jpg".to_string(),
        });

        assert_eq!(registry.trigger(key, false), None);
        assert!(registry.is_observed(key));

        assert_eq!(
            registry.trigger(key, true),
            Some(LazyImage {
                source: "/media/games/fifa.jpg".to_string()
            })
        );
        assert!(!registry.is_observed(key));
        assert_eq!(registry.trigger(key, true), None);
        assert!(registry.is_empty());
    }

    #[test]
    fn keys_are_unique_and_round_trip_through_attribute_text() {
        let mut registry = OneShotRegistry::new("data-test-key");
        let first = registry.observe(());
        let second = registry.observe(());

        assert_ne!(first, second);
        assert_eq!(ObserveKey::parse(&second.0.to_string()), Some(second));
        assert_eq!(ObserveKey::parse("x"), None);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn reveal_attributes_fall_back_to_defaults() {
        assert_eq!(
            RevealTarget::from_attributes(Some(""), None, "fadeInUp"),
            RevealTarget {
                animation: "fadeInUp".to_string(),
                delay_ms: 0
            }
        );
        let target = RevealTarget::from_attributes(Some("zoomIn"), Some("250"), "fadeInUp");
        assert_eq!(target.delay_ms, 250);
        assert_eq!(target.class_name(), "animate-zoomIn");
        assert_eq!(
            RevealTarget::from_attributes(None, Some("soon"), "fadeInUp").delay_ms,
            0
        );
    }

    #[test]
    fn lazy_and_reveal_tags_on_one_image_stay_independent() {
        let mut lazy = OneShotRegistry::lazy_images();
        let mut reveal = OneShotRegistry::reveal_targets();
        let mut hero = Attributes::new();
        let mut card = Attributes::new();

        tag(&mut hero, &mut lazy, LazyImage { source: "/hero.jpg".to_string() });
        tag(&mut card, &mut lazy, LazyImage { source: "/card.jpg".to_string() });
        tag(
            &mut card,
            &mut reveal,
            RevealTarget::from_attributes(Some("zoomIn"), None, "fadeInUp"),
        );

        assert_eq!(
            fire(&card, &mut lazy).map(|image| image.source),
            Some("/card.jpg".to_string())
        );
        assert_eq!(
            fire(&card, &mut reveal).map(|target| target.class_name()),
            Some("animate-zoomIn".to_string())
        );
        assert_eq!(
            fire(&hero, &mut lazy).map(|image| image.source),
            Some("/hero.jpg".to_string())
        );
        assert!(lazy.is_empty());
        assert!(reveal.is_empty());
    }
}
