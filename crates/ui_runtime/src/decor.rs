//! Cosmetic geometry: particle fields, click ripples, and in-page anchor targets.

use crate::config::ParticleConfig;

/// Number of particles for a container at the given viewport width.
pub fn particle_count(viewport_width: u32, config: &ParticleConfig) -> usize {
    if viewport_width < config.mobile_breakpoint_px {
        config.mobile_count
    } else {
        config.desktop_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Randomized inline style of one `div.particle`.
pub struct ParticleStyle {
    pub width_px: f64,
    pub height_px: f64,
    pub alpha: f64,
    pub left_pct: f64,
    pub top_pct: f64,
    pub duration_s: f64,
    pub delay_s: f64,
}

impl ParticleStyle {
    /// Draws a style from `random`, which must yield values in `[0, 1)`.
    pub fn sample(random: &mut impl FnMut() -> f64) -> Self {
        Self {
            width_px: random() * 4.0 + 1.0,
            height_px: random() * 4.0 + 1.0,
            alpha: random() * 0.5 + 0.2,
            left_pct: random() * 100.0,
            top_pct: random() * 100.0,
            duration_s: random() * 10.0 + 10.0,
            delay_s: random() * 5.0,
        }
    }

    pub fn to_css(&self) -> String {
        format!(
            "position:absolute;width:{}px;height:{}px;background:rgba(255, 255, 255, {});\
             border-radius:50%;left:{}%;top:{}%;animation:float {}s ease-in-out infinite;\
             animation-delay:{}s;",
            self.width_px,
            self.height_px,
            self.alpha,
            self.left_pct,
            self.top_pct,
            self.duration_s,
            self.delay_s
        )
    }
}

/// Styles for a whole particle field.
pub fn particle_field(
    viewport_width: u32,
    config: &ParticleConfig,
    random: &mut impl FnMut() -> f64,
) -> Vec<ParticleStyle> {
    (0..particle_count(viewport_width, config))
        .map(|_| ParticleStyle::sample(random))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Size and position of a `span.ripple` inside its button.
pub struct RippleGeometry {
    pub diameter: f64,
    pub left: f64,
    pub top: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
/// Button box and click point needed to place a ripple.
pub struct RippleInput {
    pub client_width: f64,
    pub client_height: f64,
    pub offset_left: f64,
    pub offset_top: f64,
    pub click_x: f64,
    pub click_y: f64,
}

/// Centers a circle covering the button's larger edge on the click point.
pub fn ripple_geometry(input: RippleInput) -> RippleGeometry {
    let diameter = input.client_width.max(input.client_height);
    let radius = diameter / 2.0;
    RippleGeometry {
        diameter,
        left: input.click_x - input.offset_left - radius,
        top: input.click_y - input.offset_top - radius,
    }
}

/// Selector for an in-page anchor `href`, or `None` for a bare `#` / external link.
pub fn anchor_selector(href: &str) -> Option<&str> {
    (href.starts_with('#') && href.len() > 1).then_some(href)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn sequence(values: &[f64]) -> impl FnMut() -> f64 + '_ {
        let mut index = 0;
        move || {
            let value = values[index % values.len()];
            index += 1;
            value
        }
    }

    #[test]
    fn particle_count_scales_with_viewport() {
        let config = ParticleConfig::default();
        assert_eq!(particle_count(375, &config), 30);
        assert_eq!(particle_count(767, &config), 30);
        assert_eq!(particle_count(768, &config), 50);
        assert_eq!(particle_field(1440, &config, &mut sequence(&[0.5])).len(), 50);
    }

    #[test]
    fn particle_style_stays_within_ranges() {
        let low = ParticleStyle::sample(&mut sequence(&[0.0]));
        assert_eq!(low.width_px, 1.0);
        assert_eq!(low.alpha, 0.2);
        assert_eq!(low.duration_s, 10.0);

        let high = ParticleStyle::sample(&mut sequence(&[0.999]));
        assert!(high.width_px < 5.0);
        assert!(high.alpha < 0.7);
        assert!(high.left_pct < 100.0);
        assert!(high.delay_s < 5.0);
    }

    #[test]
    fn particle_css_contains_animation() {
        let css = ParticleStyle::sample(&mut sequence(&[0.0])).to_css();
        assert!(css.contains("animation:float 10s ease-in-out infinite;"));
        assert!(css.contains("width:1px;"));
    }

    #[test]
    fn ripple_is_centered_on_click() {
        let geometry = ripple_geometry(RippleInput {
            client_width: 120.0,
            client_height: 40.0,
            offset_left: 10.0,
            offset_top: 20.0,
            click_x: 70.0,
            click_y: 40.0,
        });

        assert_eq!(
            geometry,
            RippleGeometry {
                diameter: 120.0,
                left: 0.0,
                top: -40.0,
            }
        );
    }

    #[test]
    fn bare_hash_and_external_links_are_not_scroll_targets() {
        assert_eq!(anchor_selector("#pricing"), Some("#pricing"));
        assert_eq!(anchor_selector("#"), None);
        assert_eq!(anchor_selector("/games"), None);
    }
}
