use serde::{Deserialize, Serialize};

use super::Language;

/// Global render options appended to composed output, in fixed order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Toggle {
    StaticCamera,
    BlackBackground,
    UltraSharp,
    DiagonalLighting,
}

impl Toggle {
    /// All toggles in append order.
    pub const ALL: [Toggle; 4] = [
        Toggle::StaticCamera,
        Toggle::BlackBackground,
        Toggle::UltraSharp,
        Toggle::DiagonalLighting,
    ];

    /// The fixed sentence appended to composed output when the toggle is on.
    pub fn sentence(&self, language: Language) -> &'static str {
        match (self, language) {
            (Toggle::StaticCamera, Language::En) => {
                "Camera: perfectly static tripod; no pan, no zoom."
            }
            (Toggle::BlackBackground, Language::En) => {
                "Background: pure solid black to isolate subjects; avoid ambient fog."
            }
            (Toggle::UltraSharp, Language::En) => {
                "Rendering: cinematic composition, ultra-sharp focus, clean edges, no blur."
            }
            (Toggle::DiagonalLighting, Language::En) => {
                "Lighting: dramatic diagonal from bottom-left to top-right."
            }
            (Toggle::StaticCamera, Language::Id) => {
                "Kamera: statis sempurna dengan tripod; tanpa pan, tanpa zoom."
            }
            (Toggle::BlackBackground, Language::Id) => {
                "Latar: hitam pekat untuk fokus karakter; hindari kabut ambient."
            }
            (Toggle::UltraSharp, Language::Id) => {
                "Rendering: komposisi sinematik, fokus sangat tajam, tepi bersih, tanpa blur."
            }
            (Toggle::DiagonalLighting, Language::Id) => {
                "Pencahayaan: diagonal dramatis dari kiri-bawah ke kanan-atas."
            }
        }
    }
}

/// The four boolean render options, keyed as in the export payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Toggles {
    pub static_camera: bool,
    pub black_bg: bool,
    pub ultra_sharp: bool,
    pub diag_lighting: bool,
}

impl Toggles {
    pub fn is_set(&self, toggle: Toggle) -> bool {
        match toggle {
            Toggle::StaticCamera => self.static_camera,
            Toggle::BlackBackground => self.black_bg,
            Toggle::UltraSharp => self.ultra_sharp,
            Toggle::DiagonalLighting => self.diag_lighting,
        }
    }

    /// The enabled toggles in append order.
    pub fn enabled(self) -> impl Iterator<Item = Toggle> {
        Toggle::ALL.into_iter().filter(move |toggle| self.is_set(*toggle))
    }
}
