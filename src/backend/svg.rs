//! SVG backend.
//!
//! Static primitives become plain SVG elements. A keyframe chain becomes one
//! element carrying its first key's attributes, plus one `<animate>` child per
//! attribute that changes along the chain. The animation timeline starts at
//! `min(0, first key time)` so chains that begin late hold their first key
//! until then; all animations freeze on their last key.

use super::{AnimatedBackend, Backend};
use crate::color::Rgba;
use crate::error::Result;
use crate::geometry::BBox;
use crate::vector::Vec2;
use std::fmt::Write as FmtWrite;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// One key of an open chain: its time and `(attribute, value)` pairs, in a
/// fixed attribute order.
type Key = (f32, Vec<(&'static str, String)>);

/// SVG document builder implementing [`AnimatedBackend`].
#[derive(Debug, Clone)]
pub struct SvgBackend {
    width: u32,
    height: u32,
    background: Option<Rgba>,
    elements: Vec<String>,
    fill: Rgba,
    stroke: Rgba,
    stroke_width: f32,
    circle_chain: Vec<Key>,
    rect_chain: Vec<Key>,
    path_chain: Vec<Key>,
}

impl Default for SvgBackend {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

impl SvgBackend {
    /// Empty document of the given size.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            background: Some(Rgba::WHITE),
            elements: Vec::new(),
            fill: Rgba::BLACK,
            stroke: Rgba::BLACK,
            stroke_width: 1.0,
            circle_chain: Vec::new(),
            rect_chain: Vec::new(),
            path_chain: Vec::new(),
        }
    }

    /// Set the background color (`None` for transparent).
    #[must_use]
    pub fn background(mut self, color: Option<Rgba>) -> Self {
        self.background = color;
        self
    }

    /// Number of finished elements.
    #[must_use]
    pub fn element_count(&self) -> usize {
        self.elements.len()
    }

    /// Render the document.
    #[must_use]
    pub fn render(&self) -> String {
        let mut svg = String::with_capacity(4096);

        let _ = writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            self.width, self.height, self.width, self.height
        );

        if let Some(bg) = self.background {
            let _ = writeln!(svg, r#"  <rect width="100%" height="100%" fill="{}"/>"#, bg.to_css());
        }

        for element in &self.elements {
            let _ = writeln!(svg, "  {element}");
        }

        svg.push_str("</svg>\n");
        svg
    }

    /// Write the rendered document to a file.
    ///
    /// # Errors
    ///
    /// Returns an error if file writing fails.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut file = File::create(path)?;
        file.write_all(self.render().as_bytes())?;
        Ok(())
    }

    fn circle_attrs(&self, centre: Vec2, radius: f32) -> Vec<(&'static str, String)> {
        vec![
            ("cx", centre[0].to_string()),
            ("cy", centre[1].to_string()),
            ("r", radius.to_string()),
            ("fill", self.fill.to_css()),
        ]
    }

    fn rect_attrs(&self, bounds: BBox<f32, 2>) -> Vec<(&'static str, String)> {
        let size = bounds.delta();
        vec![
            ("x", bounds.bmin[0].to_string()),
            ("y", bounds.bmin[1].to_string()),
            ("width", size[0].to_string()),
            ("height", size[1].to_string()),
            ("fill", self.fill.to_css()),
        ]
    }

    fn path_attrs(&self, points: &[Vec2]) -> Vec<(&'static str, String)> {
        vec![
            ("points", points_to_svg(points)),
            ("stroke", self.stroke.to_css()),
            ("stroke-width", self.stroke_width.to_string()),
        ]
    }
}

fn points_to_svg(points: &[Vec2]) -> String {
    points
        .iter()
        .map(|p| format!("{},{}", p[0], p[1]))
        .collect::<Vec<_>>()
        .join(" ")
}

fn static_element(tag: &str, attrs: &[(&'static str, String)], fixed: &str) -> String {
    let mut out = format!("<{tag}");
    for (name, value) in attrs {
        let _ = write!(out, r#" {name}="{value}""#);
    }
    out.push_str(fixed);
    out.push_str("/>");
    out
}

/// Turn a finished chain into one element with `<animate>` children.
fn chain_to_svg(tag: &str, keys: &[Key], fixed: &str) -> Option<String> {
    let (first_time, first_attrs) = keys.first()?;
    let last_time = keys.last().map_or(*first_time, |(time, _)| *time);
    let start = first_time.min(0.0);
    let dur = last_time - start;

    if dur.is_nan() || dur <= 0.0 {
        return Some(static_element(tag, first_attrs, fixed));
    }

    let mut timeline: Vec<(f32, &[(&'static str, String)])> = Vec::with_capacity(keys.len() + 1);
    if *first_time > start {
        timeline.push((start, first_attrs.as_slice()));
    }
    timeline.extend(keys.iter().map(|(time, attrs)| (*time, attrs.as_slice())));

    let key_times = timeline
        .iter()
        .map(|(time, _)| ((time - start) / dur).to_string())
        .collect::<Vec<_>>()
        .join(";");

    let mut animations = String::new();
    for (i, (name, first)) in first_attrs.iter().enumerate() {
        let values: Vec<&str> = timeline
            .iter()
            .map(|(_, attrs)| attrs.get(i).map_or(first.as_str(), |(_, v)| v.as_str()))
            .collect();
        if values.iter().any(|v| v != first) {
            let _ = write!(
                animations,
                r#"<animate attributeName="{name}" dur="{dur}s" values="{}" keyTimes="{key_times}" fill="freeze"/>"#,
                values.join(";")
            );
        }
    }

    if animations.is_empty() {
        return Some(static_element(tag, first_attrs, fixed));
    }

    let mut out = format!("<{tag}");
    for (name, value) in first_attrs {
        let _ = write!(out, r#" {name}="{value}""#);
    }
    let _ = write!(out, "{fixed}>{animations}</{tag}>");
    Some(out)
}

impl Backend for SvgBackend {
    fn stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }

    fn stroke_color(&mut self, color: Rgba) {
        self.stroke = color;
    }

    fn fill_color(&mut self, color: Rgba) {
        self.fill = color;
    }

    fn circle(&mut self, centre: Vec2, radius: f32) {
        let attrs = self.circle_attrs(centre, radius);
        self.elements.push(static_element("circle", &attrs, ""));
    }

    fn line(&mut self, from: Vec2, to: Vec2) {
        let element = format!(
            r#"<line x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"/>"#,
            from[0],
            from[1],
            to[0],
            to[1],
            self.stroke.to_css(),
            self.stroke_width
        );
        self.elements.push(element);
    }

    fn rect(&mut self, bounds: BBox<f32, 2>) {
        let attrs = self.rect_attrs(bounds);
        self.elements.push(static_element("rect", &attrs, ""));
    }

    fn polyline(&mut self, points: &[Vec2]) {
        let attrs = self.path_attrs(points);
        self.elements
            .push(static_element("polyline", &attrs, r#" fill="none""#));
    }
}

impl AnimatedBackend for SvgBackend {
    fn add_animated_circle(&mut self, centre: Vec2, radius: f32, time: f32) {
        let attrs = self.circle_attrs(centre, radius);
        self.circle_chain.push((time, attrs));
    }

    fn end_animated_circle(&mut self) {
        let keys = std::mem::take(&mut self.circle_chain);
        self.elements.extend(chain_to_svg("circle", &keys, ""));
    }

    fn add_animated_rect(&mut self, bounds: BBox<f32, 2>, time: f32) {
        let attrs = self.rect_attrs(bounds);
        self.rect_chain.push((time, attrs));
    }

    fn end_animated_rect(&mut self) {
        let keys = std::mem::take(&mut self.rect_chain);
        self.elements.extend(chain_to_svg("rect", &keys, ""));
    }

    fn add_animated_path(&mut self, points: &[Vec2], time: f32) {
        let attrs = self.path_attrs(points);
        self.path_chain.push((time, attrs));
    }

    fn end_animated_path(&mut self) {
        let keys = std::mem::take(&mut self.path_chain);
        self.elements
            .extend(chain_to_svg("polyline", &keys, r#" fill="none""#));
    }
}

impl batuta_common::display::WithDimensions for SvgBackend {
    fn set_dimensions(&mut self, width: u32, height: u32) {
        self.width = width;
        self.height = height;
    }
}
