use std::sync::Arc;

use pdf_font::font::Font;

use crate::{
    external_graphics_state::GraphicState, image::Image, pattern::Pattern, shading::Shading,
};

/// Named resource registries for one page.
///
/// Every registration is idempotent: registering the same font name, the
/// same `Arc` or an equal graphics state again returns the name assigned the
/// first time. Names must be registered before the operator referencing them
/// is emitted; the canvas layer guarantees this ordering.
#[derive(Default)]
pub struct Resources {
    fonts: Vec<(String, Arc<dyn Font>)>,
    xobjects: Vec<(String, Arc<Image>)>,
    shadings: Vec<(String, Arc<Shading>)>,
    patterns: Vec<(String, Arc<Pattern>)>,
    graphic_states: Vec<(String, GraphicState)>,
}

impl Resources {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `font` under `/F{n}`, keyed by the font's own name.
    pub fn add_font(&mut self, font: &Arc<dyn Font>) -> String {
        if let Some((name, _)) = self.fonts.iter().find(|(_, f)| f.name() == font.name()) {
            return name.clone();
        }
        let name = format!("F{}", self.fonts.len());
        self.fonts.push((name.clone(), Arc::clone(font)));
        name
    }

    /// Registers `image` under `/I{n}`, keyed by object identity.
    pub fn add_xobject(&mut self, image: &Arc<Image>) -> String {
        if let Some((name, _)) = self.xobjects.iter().find(|(_, i)| Arc::ptr_eq(i, image)) {
            return name.clone();
        }
        let name = format!("I{}", self.xobjects.len());
        self.xobjects.push((name.clone(), Arc::clone(image)));
        name
    }

    /// Registers `shading` under `/S{n}`, keyed by object identity.
    pub fn add_shading(&mut self, shading: &Arc<Shading>) -> String {
        if let Some((name, _)) = self.shadings.iter().find(|(_, s)| Arc::ptr_eq(s, shading)) {
            return name.clone();
        }
        let name = format!("S{}", self.shadings.len());
        self.shadings.push((name.clone(), Arc::clone(shading)));
        name
    }

    /// Registers `pattern` under `/P{n}`, keyed by object identity.
    pub fn add_pattern(&mut self, pattern: &Arc<Pattern>) -> String {
        if let Some((name, _)) = self.patterns.iter().find(|(_, p)| Arc::ptr_eq(p, pattern)) {
            return name.clone();
        }
        let name = format!("P{}", self.patterns.len());
        self.patterns.push((name.clone(), Arc::clone(pattern)));
        name
    }

    /// Registers `state` under `/a{n}`, keyed by value equality.
    pub fn state_name(&mut self, state: &GraphicState) -> String {
        if let Some((name, _)) = self.graphic_states.iter().find(|(_, s)| s == state) {
            return name.clone();
        }
        let name = format!("a{}", self.graphic_states.len());
        self.graphic_states.push((name.clone(), *state));
        name
    }

    pub fn fonts(&self) -> &[(String, Arc<dyn Font>)] {
        &self.fonts
    }

    pub fn xobjects(&self) -> &[(String, Arc<Image>)] {
        &self.xobjects
    }

    pub fn shadings(&self) -> &[(String, Arc<Shading>)] {
        &self.shadings
    }

    pub fn patterns(&self) -> &[(String, Arc<Pattern>)] {
        &self.patterns
    }

    pub fn graphic_states(&self) -> &[(String, GraphicState)] {
        &self.graphic_states
    }
}
