use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use crate::error::{Error, Result};
use crate::geometry::Rect;
use crate::spawner::Placement;
use crate::surface::Surface;

const CONTAINER: &str = ".f1-lights";
const STRIP: &str = ".light-strip";
const EXTRA: &str = ".light-strip.extra";
const TIME: &str = ".time";
const BEST: &str = ".best span";
const BRIDGE: &str = ".bridge-extra";

/// The light board as laid out in the page.
pub struct DomSurface {
    window: Window,
    document: Document,
    container: Element,
    fixed: Vec<Element>,
    time: Element,
    best: Option<Element>,
    bridge: Option<HtmlElement>,
    lights_per_strip: usize,
}

impl DomSurface {
    /// Look up the board. Must run before any extra strip exists, since
    /// every `.light-strip` found here is taken as a fixed strip.
    pub fn from_document(document: &Document, lights_per_strip: usize) -> Result<Self> {
        let window = web_sys::window().ok_or(Error::NoWindow)?;
        let container = document
            .query_selector(CONTAINER)?
            .ok_or(Error::MissingElement(CONTAINER))?;
        let time = document
            .query_selector(TIME)?
            .ok_or(Error::MissingElement(TIME))?;
        let best = document.query_selector(BEST).ok().flatten();
        let bridge = container
            .query_selector(BRIDGE)
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        let list = container.query_selector_all(STRIP)?;
        let fixed = (0..list.length())
            .filter_map(|i| list.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect();

        Ok(DomSurface {
            window,
            document: document.clone(),
            container,
            fixed,
            time,
            best,
            bridge,
            lights_per_strip,
        })
    }

    fn create_strip(&self, on: bool) -> Result<HtmlElement> {
        let strip: HtmlElement = self.document.create_element("div")?.unchecked_into();
        strip.set_class_name(if on { "light-strip on" } else { "light-strip" });
        for _ in 0..self.lights_per_strip {
            let light = self.document.create_element("div")?;
            light.set_class_name("light");
            strip.append_child(&light)?;
        }
        Ok(strip)
    }

    fn ensure_bridge(&mut self) -> Result<HtmlElement> {
        if let Some(bridge) = &self.bridge {
            return Ok(bridge.clone());
        }
        let bridge: HtmlElement = self.document.create_element("div")?.unchecked_into();
        bridge.set_class_name("bridge-extra");
        self.container.append_child(&bridge)?;
        self.bridge = Some(bridge.clone());
        Ok(bridge)
    }
}

fn rect_of(el: &Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.width())
}

impl Surface for DomSurface {
    fn container_rect(&self) -> Rect {
        rect_of(&self.container)
    }

    fn fixed_strip_rects(&self) -> Vec<Rect> {
        self.fixed.iter().map(rect_of).collect()
    }

    fn fixed_strip_count(&self) -> usize {
        self.fixed.len()
    }

    fn viewport_width(&self) -> f64 {
        self.window
            .inner_width()
            .ok()
            .and_then(|w| w.as_f64())
            .unwrap_or_else(|| {
                self.document
                    .document_element()
                    .map_or(0.0, |el| el.client_width() as f64)
            })
    }

    fn light_fixed(&mut self, index: usize) -> Result<()> {
        if let Some(strip) = self.fixed.get(index) {
            strip.class_list().add_1("on")?;
        }
        Ok(())
    }

    fn reset_fixed(&mut self) -> Result<()> {
        for strip in &self.fixed {
            strip.class_list().remove_1("on")?;
        }
        Ok(())
    }

    fn append_extra(&mut self, placement: &Placement) -> Result<f64> {
        let strip = self.create_strip(true)?;
        strip.class_list().add_1("extra")?;
        let style = strip.style();
        style.set_property("left", &format!("{}px", placement.left))?;
        style.set_property("width", &format!("{}px", placement.width))?;
        self.container.append_child(&strip)?;
        Ok(strip.get_bounding_client_rect().right())
    }

    fn clear_extras(&mut self) -> Result<()> {
        let list = self.container.query_selector_all(EXTRA)?;
        for node in (0..list.length()).filter_map(|i| list.get(i)) {
            if let Ok(el) = node.dyn_into::<Element>() {
                el.remove();
            }
        }
        Ok(())
    }

    fn set_bridge_width(&mut self, width: f64) -> Result<()> {
        let bridge = self.ensure_bridge()?;
        bridge.style().set_property("width", &format!("{width}px"))?;
        Ok(())
    }

    fn show_time(&mut self, text: &str) -> Result<()> {
        self.time.set_text_content(Some(text));
        self.time.class_list().remove_1("anim")?;
        Ok(())
    }

    fn show_verdict(&mut self, text: &str) -> Result<()> {
        self.time.set_text_content(Some(text));
        self.time.class_list().add_1("anim")?;
        Ok(())
    }

    fn show_best(&mut self, text: &str) -> Result<()> {
        if let Some(best) = &self.best {
            best.set_text_content(Some(text));
        }
        Ok(())
    }
}
