// Scroll-driven page chrome decisions: which nav link is active, whether the
// sticky panel shows, and where an in-page anchor click should land. All
// positions here are document-space pixels; the DOM layer converts viewport
// rects before calling in.

use crate::config;

pub const HERO_SECTION_ID: &str = "home-hero";

/// A section's vertical span in document space.
#[derive(Clone, Debug)]
pub struct Section {
    pub id: String,
    pub top: f64,
    pub bottom: f64,
}

/// Pick the section whose span crosses the activation offset (a fixed margin
/// below the header), scanning bottom-most first so nested/adjacent spans
/// resolve to the lowest section on screen. While the viewport is still
/// within the hero (minus a little slack), the hero wins regardless.
pub fn active_section_id<'a>(
    sections: &'a [Section],
    scroll_y: f64,
    header_height: f64,
    hero_height: f64,
) -> Option<&'a str> {
    let offset = header_height + config::NAV_ACTIVATION_OFFSET;

    let mut active = None;
    for section in sections.iter().rev() {
        let viewport_top = section.top - scroll_y;
        let viewport_bottom = section.bottom - scroll_y;
        if viewport_top <= offset && viewport_bottom > offset {
            active = Some(section.id.as_str());
            break;
        }
    }

    if scroll_y < hero_height - config::HERO_SCROLL_SLACK {
        active = Some(HERO_SECTION_ID);
    }

    active
}

/// The sticky nav panel shows once the hero has scrolled past the header
/// (less a small slack so the panel arrives just before it is needed).
pub fn sticky_panel_visible(scroll_y: f64, hero_bottom: f64, header_height: f64) -> bool {
    scroll_y > hero_bottom - header_height - config::STICKY_PANEL_SLACK
}

/// Offset-compensated smooth-scroll destination for an in-page anchor.
/// The hero link always goes to the very top; other sections land just below
/// the fixed header, clamped so short pages cannot scroll to a negative
/// position.
pub fn smooth_scroll_target(target_id: &str, section_top: f64, header_height: f64) -> f64 {
    if target_id == HERO_SECTION_ID {
        return 0.0;
    }
    (section_top - header_height + config::SMOOTH_SCROLL_NUDGE).max(0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sections() -> Vec<Section> {
        vec![
            Section {
                id: "home-hero".into(),
                top: 0.0,
                bottom: 700.0,
            },
            Section {
                id: "about".into(),
                top: 700.0,
                bottom: 1400.0,
            },
            Section {
                id: "projects".into(),
                top: 1400.0,
                bottom: 2600.0,
            },
        ]
    }

    #[test]
    fn hero_stays_active_near_the_top() {
        let s = sections();
        // Even though "about" technically crosses the offset here, the hero
        // override holds until most of it has scrolled away.
        assert_eq!(active_section_id(&s, 600.0, 80.0, 700.0), Some("home-hero"));
        assert_eq!(active_section_id(&s, 0.0, 80.0, 700.0), Some("home-hero"));
    }

    #[test]
    fn lower_sections_take_over_as_they_cross_the_offset() {
        let s = sections();
        // offset = 80 + 50 = 130; at scroll 700 "about" spans viewport 0..700
        assert_eq!(active_section_id(&s, 700.0, 80.0, 700.0), Some("about"));
        assert_eq!(active_section_id(&s, 1350.0, 80.0, 700.0), Some("projects"));
    }

    #[test]
    fn bottom_most_crossing_section_wins() {
        let mut s = sections();
        // Overlapping spans: the later section shadows the earlier one.
        s.push(Section {
            id: "contact".into(),
            top: 1500.0,
            bottom: 2600.0,
        });
        assert_eq!(active_section_id(&s, 1500.0, 80.0, 700.0), Some("contact"));
    }

    #[test]
    fn nothing_active_below_the_last_section() {
        let s = sections();
        assert_eq!(active_section_id(&s, 3000.0, 80.0, 700.0), None);
    }

    #[test]
    fn sticky_panel_appears_once_the_hero_clears_the_header() {
        let hero_bottom = 700.0;
        let header = 80.0;
        assert!(!sticky_panel_visible(0.0, hero_bottom, header));
        assert!(!sticky_panel_visible(600.0, hero_bottom, header));
        assert!(sticky_panel_visible(601.0, hero_bottom, header));
    }

    #[test]
    fn smooth_scroll_compensates_for_the_header() {
        assert_eq!(smooth_scroll_target("about", 700.0, 80.0), 625.0);
        assert_eq!(smooth_scroll_target(HERO_SECTION_ID, 700.0, 80.0), 0.0);
        // Clamped for sections that sit above the header offset.
        assert_eq!(smooth_scroll_target("about", 20.0, 80.0), 0.0);
    }
}
