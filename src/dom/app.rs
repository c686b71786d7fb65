// Page wiring: element lookup, theme restore, layout bookkeeping, event
// listeners, the staged reveal, and the render loop itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use palette::Srgb;
use ultraviolet::Vec2;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlElement, HtmlInputElement, MouseEvent, ScrollBehavior,
    ScrollToOptions, Window,
};

use crate::chrome::{self, Section};
use crate::color;
use crate::config::{self, FIELD_CONFIG};
use crate::field::ParticleField;
use crate::theme::Theme;

use super::canvas::Canvas2d;
use super::events::{after, listen, listen0};
use super::frame_loop::FrameLoop;

const CANVAS_ID: &str = "interactiveCanvas";
const HEADER_ID: &str = "main-header";
const OVERLAY_ID: &str = "loading-overlay";
const THEME_TOGGLE_ID: &str = "checkbox";
const STICKY_PANEL_ID: &str = "sticky-nav-panel";
const HI_THERE_ID: &str = "hi-there-text";
const NAV_LINK_SELECTOR: &str = ".nav-link";
const STICKY_NAV_LINK_SELECTOR: &str = ".nav-link-sticky";
const SECTION_SELECTOR: &str = "section[id]:not(#sticky-nav-panel)";
const ANCHOR_SELECTOR: &str = "a[href^=\"#\"]";
const HERO_TEXT_SELECTOR: &str = "#home-hero h1, #home-hero p:not(#hi-there-text)";

thread_local! {
    static RENDER_LOOP: RefCell<Option<FrameLoop>> = RefCell::new(None);
}

/// The fixed page elements the chrome works against, resolved once at load.
struct Page {
    window: Window,
    document: Document,
    header: HtmlElement,
    hero: HtmlElement,
    overlay: Element,
    sticky_panel: Element,
    toggle: HtmlInputElement,
    accent_warned: Cell<bool>,
}

pub fn run() -> Result<(), JsValue> {
    let page = Rc::new(Page::lookup()?);
    let canvas = Rc::new(RefCell::new(Canvas2d::from_element_id(
        &page.document,
        CANVAS_ID,
    )?));
    let field = Rc::new(RefCell::new(ParticleField::new(Vec2::zero())));

    let bounds = canvas.borrow().resize_to_page(&page.window, &page.document)?;
    field.borrow_mut().resize(bounds);

    // Restore the persisted theme (default light) and build the first field.
    let stored = page
        .window
        .local_storage()
        .ok()
        .flatten()
        .and_then(|s| s.get_item(config::THEME_STORAGE_KEY).ok().flatten());
    page.apply_theme(Theme::from_storage(stored.as_deref()))?;
    rebuild_field(&page, &field);

    // Pointer tracking; the update step reads this, never writes it.
    {
        let field = field.clone();
        listen(&page.window, "mousemove", move |e: MouseEvent| {
            field.borrow_mut().pointer.pos =
                Some(Vec2::new(e.client_x() as f32, e.client_y() as f32));
        })?;
    }
    {
        let field = field.clone();
        listen0(&page.window, "mouseout", move || {
            field.borrow_mut().pointer.pos = None;
        })?;
    }

    {
        let page2 = page.clone();
        listen0(&page.window, "scroll", move || {
            if let Err(err) = page2.update_active_link() {
                log::error!("nav highlight failed: {err:?}");
            }
            if let Err(err) = page2.toggle_sticky_panel() {
                log::error!("sticky panel toggle failed: {err:?}");
            }
        })?;
    }

    {
        let (page2, canvas, field) = (page.clone(), canvas.clone(), field.clone());
        listen0(&page.window, "resize", move || {
            if let Err(err) = setup_layout(&page2, &canvas, &field) {
                log::error!("layout setup failed: {err:?}");
            }
        })?;
    }

    {
        let (page2, field) = (page.clone(), field.clone());
        listen(&page.toggle, "change", move |_: web_sys::Event| {
            let theme = if page2.toggle.checked() {
                Theme::Dark
            } else {
                Theme::Light
            };
            if let Err(err) = page2.apply_theme(theme) {
                log::error!("theme apply failed: {err:?}");
            }
            rebuild_field(&page2, &field);
        })?;
    }

    attach_anchor_handlers(&page)?;
    staged_reveal(page, canvas, field)?;
    Ok(())
}

/// Stop the background animation. The loop otherwise runs until the page
/// unloads.
pub fn stop_render_loop() {
    RENDER_LOOP.with(|slot| {
        if let Some(handle) = slot.borrow_mut().take() {
            handle.stop();
        }
    });
}

fn start_render_loop(
    page: Rc<Page>,
    canvas: Rc<RefCell<Canvas2d>>,
    field: Rc<RefCell<ParticleField>>,
) {
    let tick = move || {
        // Theme and accent are re-resolved every frame so a theme change is
        // picked up on the next frame without restarting the loop.
        let cfg = FIELD_CONFIG.lock().clone();
        let theme = page.theme();
        let accent = page.accent();
        field
            .borrow_mut()
            .render_frame(&mut *canvas.borrow_mut(), &cfg, accent, theme);
    };
    match FrameLoop::start(tick) {
        Ok(handle) => RENDER_LOOP.with(|slot| *slot.borrow_mut() = Some(handle)),
        Err(err) => log::error!("could not start the render loop: {err:?}"),
    }
}

/// Hide the loading overlay after a fixed delay, then kick off layout, the
/// render loop, and the hero text animations after a second one. The delays
/// are a staged reveal, not a correctness requirement.
fn staged_reveal(
    page: Rc<Page>,
    canvas: Rc<RefCell<Canvas2d>>,
    field: Rc<RefCell<ParticleField>>,
) -> Result<(), JsValue> {
    after(config::OVERLAY_HIDE_DELAY_MS, move || {
        let _ = page.overlay.class_list().add_1("hidden");

        let chain = after(config::LAYOUT_KICKOFF_DELAY_MS, move || {
            if let Err(err) = setup_layout(&page, &canvas, &field) {
                log::error!("layout setup failed: {err:?}");
            }
            if let Err(err) = page.attach_hero_animations() {
                log::error!("hero animations failed: {err:?}");
            }
            start_render_loop(page, canvas, field);
        });
        if let Err(err) = chain {
            log::error!("reveal timer failed: {err:?}");
        }
    })
}

/// Full layout pass: body padding, nav state, canvas size, field rebuild.
/// Runs after the reveal and again on every resize.
fn setup_layout(
    page: &Page,
    canvas: &RefCell<Canvas2d>,
    field: &RefCell<ParticleField>,
) -> Result<(), JsValue> {
    page.set_body_padding()?;
    page.update_active_link()?;
    page.toggle_sticky_panel()?;

    let bounds = canvas.borrow().resize_to_page(&page.window, &page.document)?;
    field.borrow_mut().resize(bounds);
    rebuild_field(page, field);
    Ok(())
}

fn rebuild_field(page: &Page, field: &RefCell<ParticleField>) {
    let cfg = FIELD_CONFIG.lock().clone();
    field.borrow_mut().init(&cfg, page.accent(), page.theme());
}

fn attach_anchor_handlers(page: &Rc<Page>) -> Result<(), JsValue> {
    let anchors = page.document.query_selector_all(ANCHOR_SELECTOR)?;
    for i in 0..anchors.length() {
        let Some(anchor) = anchors.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
            continue;
        };
        let Some(href) = anchor.get_attribute("href") else {
            continue;
        };
        let target_id = href.trim_start_matches('#').to_string();
        let page = page.clone();
        listen(&anchor, "click", move |e: MouseEvent| {
            e.prevent_default();
            if let Err(err) = page.smooth_scroll_to(&target_id) {
                log::error!("smooth scroll failed: {err:?}");
            }
        })?;
    }
    Ok(())
}

impl Page {
    fn lookup() -> Result<Self, JsValue> {
        let window = super::window()?;
        let document = super::document()?;
        Ok(Self {
            header: html_element(&document, HEADER_ID)?,
            hero: html_element(&document, chrome::HERO_SECTION_ID)?,
            overlay: element(&document, OVERLAY_ID)?,
            sticky_panel: element(&document, STICKY_PANEL_ID)?,
            toggle: element(&document, THEME_TOGGLE_ID)?.dyn_into()?,
            accent_warned: Cell::new(false),
            window,
            document,
        })
    }

    /// The root element's class list is the theme source of truth; storage
    /// only seeds it across reloads.
    fn theme(&self) -> Theme {
        let dark = self
            .document
            .document_element()
            .map(|root| root.class_list().contains(config::DARK_MODE_CLASS))
            .unwrap_or(false);
        if dark {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    fn apply_theme(&self, theme: Theme) -> Result<(), JsValue> {
        if let Some(root) = self.document.document_element() {
            if theme.is_dark() {
                root.class_list().add_1(config::DARK_MODE_CLASS)?;
            } else {
                root.class_list().remove_1(config::DARK_MODE_CLASS)?;
            }
        }
        if let Ok(Some(storage)) = self.window.local_storage() {
            let _ = storage.set_item(config::THEME_STORAGE_KEY, theme.storage_value());
        }
        self.toggle.set_checked(theme.is_dark());
        Ok(())
    }

    /// Accent color from the theme's CSS variable, parsed once per call.
    /// Falls back to the default accent (with a single warning) rather than
    /// emitting a malformed draw command.
    fn accent(&self) -> Srgb<u8> {
        let css = self
            .document
            .document_element()
            .and_then(|root| self.window.get_computed_style(&root).ok().flatten())
            .and_then(|style| style.get_property_value(config::ACCENT_CSS_VAR).ok())
            .unwrap_or_default();
        match color::parse_rgb(&css) {
            Ok(rgb) => rgb,
            Err(err) => {
                if !self.accent_warned.replace(true) {
                    log::warn!("accent color unusable ({err}); using the default");
                }
                config::DEFAULT_ACCENT
            }
        }
    }

    fn header_height(&self) -> f64 {
        self.header.offset_height() as f64
    }

    /// Push the page body below the fixed header and size the hero to fill
    /// the remaining viewport.
    fn set_body_padding(&self) -> Result<(), JsValue> {
        let h = self.header_height();
        if let Some(body) = self.document.body() {
            body.style().set_property("padding-top", &format!("{h}px"))?;
        }
        self.hero
            .style()
            .set_property("min-height", &format!("calc(100vh - {h}px)"))?;
        Ok(())
    }

    fn sections(&self, scroll_y: f64) -> Result<Vec<Section>, JsValue> {
        let nodes = self.document.query_selector_all(SECTION_SELECTOR)?;
        let mut sections = Vec::with_capacity(nodes.length() as usize);
        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let rect = el.get_bounding_client_rect();
            sections.push(Section {
                id: el.id(),
                top: rect.top() + scroll_y,
                bottom: rect.bottom() + scroll_y,
            });
        }
        Ok(sections)
    }

    fn update_active_link(&self) -> Result<(), JsValue> {
        let scroll_y = self.window.scroll_y()?;
        let sections = self.sections(scroll_y)?;
        let hero_height = self.hero.offset_height() as f64;
        let active =
            chrome::active_section_id(&sections, scroll_y, self.header_height(), hero_height);

        for selector in [NAV_LINK_SELECTOR, STICKY_NAV_LINK_SELECTOR] {
            self.mark_active_links(selector, active)?;
        }
        Ok(())
    }

    fn mark_active_links(&self, selector: &str, active: Option<&str>) -> Result<(), JsValue> {
        let links = self.document.query_selector_all(selector)?;
        for i in 0..links.length() {
            let Some(link) = links.get(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            link.class_list().remove_1("active")?;
            let matches = link
                .get_attribute("href")
                .map(|href| Some(href.trim_start_matches('#')) == active)
                .unwrap_or(false);
            if matches {
                link.class_list().add_1("active")?;
            }
        }
        Ok(())
    }

    fn toggle_sticky_panel(&self) -> Result<(), JsValue> {
        let hero_bottom = (self.hero.offset_top() + self.hero.offset_height()) as f64;
        let visible = chrome::sticky_panel_visible(
            self.window.scroll_y()?,
            hero_bottom,
            self.header_height(),
        );
        if visible {
            self.sticky_panel.class_list().add_1("show")?;
        } else {
            self.sticky_panel.class_list().remove_1("show")?;
        }
        Ok(())
    }

    fn smooth_scroll_to(&self, target_id: &str) -> Result<(), JsValue> {
        let Some(section) = self.document.get_element_by_id(target_id) else {
            return Ok(());
        };
        let scroll_y = self.window.scroll_y()?;
        let section_top = section.get_bounding_client_rect().top() + scroll_y;
        let top = chrome::smooth_scroll_target(target_id, section_top, self.header_height());

        let opts = ScrollToOptions::new();
        opts.set_top(top);
        opts.set_behavior(ScrollBehavior::Smooth);
        self.window.scroll_to_with_scroll_to_options(&opts);
        Ok(())
    }

    /// Entrance/glow animations for the hero text, attached once after the
    /// reveal. Each element's pre-existing animation delay is preserved and
    /// the glow starts a second after it.
    fn attach_hero_animations(&self) -> Result<(), JsValue> {
        let nodes = self.document.query_selector_all(HERO_TEXT_SELECTOR)?;
        for i in 0..nodes.length() {
            let Some(el) = nodes.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) else {
                continue;
            };
            let glow_start = inline_animation_delay(&el) + 1.0;
            el.style().set_property(
                "animation",
                &format!(
                    "fadeInSlideUp 1s ease-out forwards, \
                     heroTextGlow 2s ease-in-out infinite alternate {glow_start}s"
                ),
            )?;
        }

        if let Some(hi_there) = self
            .document
            .get_element_by_id(HI_THERE_ID)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
        {
            let cycle_start = inline_animation_delay(&hi_there) + 1.0;
            hi_there.style().set_property(
                "animation",
                &format!(
                    "fadeInSlideUp 1s ease-out forwards, \
                     hiThereColorCycle 6s infinite alternate {cycle_start}s"
                ),
            )?;
        }
        Ok(())
    }
}

fn inline_animation_delay(el: &HtmlElement) -> f32 {
    el.style()
        .get_property_value("animation-delay")
        .ok()
        .and_then(|v| v.trim().trim_end_matches('s').parse::<f32>().ok())
        .unwrap_or(0.0)
}

fn element(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("missing #{id}")))
}

fn html_element(document: &Document, id: &str) -> Result<HtmlElement, JsValue> {
    element(document, id)?.dyn_into().map_err(JsValue::from)
}
