//! Instruction templates for the LLM-backed operations.
//!
//! Each operation sends one fixed instruction with the caller's text
//! substituted in. The theme-expansion instruction is in Indonesian and
//! demands the exact English section labels so its response feeds straight
//! into the section parser.

use std::sync::OnceLock;

use minijinja::{Environment, UndefinedBehavior, context};

use crate::domain::AppError;

const THEME_EXPANSION: &str = "\
Anda adalah seniman konsep sangat berpengalaman dan bersertifikat international. Buat prompt scene rinci berdasarkan tema: {{ theme }}.
Gunakan STRUKTUR PERSIS BERIKUT (hanya gunakan label ini, satu per baris):

Foreground: [deskripsi karakter utama]
Midground: [elemen pendukung]
Background: [lingkungan jauh]
Floating Elements: [elemen mengambang seperti balon, neon]
Central Banner: [judul utama + gaya]
Text & Effects: [teks promosi + efek visual]
Background Style: [gaya latar belakang]
Style & Lighting: [gaya visual dan pencahayaan]

Gunakan bahasa Indonesia. Jangan gunakan bold, jangan tambahkan komentar.
Tambahkan detail visual yang menyenangkan anak-anak atau dewasa sesuai dengan tema yang di inginkan.
{{ style_bias }}";

const ENHANCE: &str = "Act as a senior prompt engineer. Polish the following prompt without \
changing structure:\n\n{{ prompt }}";

const VARIATIONS: &str = "Produce {{ count }} alternative prompts following the same structure \
and kid-safe tone:\n\n{{ prompt }}";

const TRANSLATION: &str = "Translate the following structured prompt to natural English. \
Convert section labels to EXACTLY these: Foreground, Midground, Background, Floating Elements, \
Central Banner, Text & Effects, Background Style, Style & Lighting. Preserve order and details. \
Do not add commentary.\n{{ prompt }}";

/// Instruction asking the model to draft all eight sections from a theme.
pub fn theme_expansion(theme: &str, style_bias: &str) -> Result<String, AppError> {
    render("theme_expansion", context! { theme, style_bias })
}

/// Instruction asking the model to polish a composed prompt.
pub fn enhance(prompt: &str) -> Result<String, AppError> {
    render("enhance", context! { prompt })
}

/// Instruction asking the model for `count` alternative prompts.
pub fn variations(prompt: &str, count: u32) -> Result<String, AppError> {
    render("variations", context! { prompt, count })
}

/// Instruction asking the model to translate an Indonesian prompt,
/// converting labels to the canonical English set.
pub fn translation(prompt: &str) -> Result<String, AppError> {
    render("translation", context! { prompt })
}

fn environment() -> &'static Environment<'static> {
    static ENV: OnceLock<Environment<'static>> = OnceLock::new();
    ENV.get_or_init(|| {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_template("theme_expansion", THEME_EXPANSION)
            .expect("theme_expansion template must parse");
        env.add_template("enhance", ENHANCE).expect("enhance template must parse");
        env.add_template("variations", VARIATIONS).expect("variations template must parse");
        env.add_template("translation", TRANSLATION).expect("translation template must parse");
        env
    })
}

fn render(name: &str, ctx: minijinja::Value) -> Result<String, AppError> {
    let template = environment()
        .get_template(name)
        .map_err(|e| AppError::Template { name: name.to_string(), reason: e.to_string() })?;
    template
        .render(ctx)
        .map_err(|e| AppError::Template { name: name.to_string(), reason: e.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Field;

    #[test]
    fn theme_expansion_lists_every_english_label() {
        let instruction = theme_expansion("Pesta Buah", "3D Pixar").unwrap();
        for field in Field::ALL {
            assert!(
                instruction.contains(&format!("{}: [", field.label_en())),
                "missing label line for {}",
                field.label_en()
            );
        }
        assert!(instruction.contains("tema: Pesta Buah."));
        assert!(instruction.ends_with("3D Pixar"));
    }

    #[test]
    fn theme_expansion_forbids_bold_and_commentary() {
        let instruction = theme_expansion("Safari Malam", "").unwrap();
        assert!(instruction.contains("Jangan gunakan bold, jangan tambahkan komentar."));
    }

    #[test]
    fn enhance_embeds_the_prompt_after_the_instruction() {
        let instruction = enhance("Foreground: A cat").unwrap();
        assert!(instruction.starts_with("Act as a senior prompt engineer."));
        assert!(instruction.ends_with("\n\nForeground: A cat"));
    }

    #[test]
    fn variations_carries_the_requested_count() {
        let instruction = variations("Foreground: A cat", 5).unwrap();
        assert!(instruction.starts_with("Produce 5 alternative prompts"));
    }

    #[test]
    fn translation_demands_exact_labels() {
        let instruction = translation("Latar Depan: Kucing").unwrap();
        assert!(instruction.contains("Convert section labels to EXACTLY these:"));
        assert!(instruction.ends_with("\nLatar Depan: Kucing"));
    }
}
