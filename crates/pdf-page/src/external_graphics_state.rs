use pdf_graphics::BlendMode;

/// Parameters for an external graphics state dictionary (`/ExtGState`).
///
/// States are value types: registering an equal state twice yields the same
/// resource name.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GraphicState {
    /// Non-stroking alpha (`/ca`), 0.0 transparent to 1.0 opaque.
    pub fill_opacity: Option<f32>,
    /// Stroking alpha (`/CA`).
    pub stroke_opacity: Option<f32>,
    /// Blend mode (`/BM`).
    pub blend_mode: Option<BlendMode>,
}

impl GraphicState {
    pub fn opacity(opacity: f32) -> Self {
        Self {
            fill_opacity: Some(opacity),
            stroke_opacity: Some(opacity),
            blend_mode: None,
        }
    }

    /// The dictionary body a document serializer embeds for this state.
    pub fn to_dictionary_string(&self) -> String {
        let mut entries = String::new();
        if let Some(ca) = self.fill_opacity {
            entries.push_str(&format!("/ca {ca} "));
        }
        if let Some(ca) = self.stroke_opacity {
            entries.push_str(&format!("/CA {ca} "));
        }
        if let Some(mode) = self.blend_mode {
            entries.push_str(&format!("/BM /{} ", mode.name()));
        }
        format!("<< {entries}>>")
    }
}
