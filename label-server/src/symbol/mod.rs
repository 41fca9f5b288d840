//! Code 128 symbol rendering
//!
//! Encoding is delegated to `barcoders` (checksum, character-set handling);
//! this module turns the encoded module pattern into a self-contained SVG
//! snippet that can be embedded in previews and print documents.

use std::fmt::Write;

use barcoders::sym::code128::Code128;
use thiserror::Error;

use shared::{AppError, ErrorCode};

/// Code 128 character-set B selector understood by barcoders.
/// Set B accepts digit strings of any length, which sequential barcode
/// values need (set C only encodes digit pairs).
const CHARSET_B: char = '\u{0181}';

/// Symbol rendering parameters
#[derive(Debug, Clone)]
pub struct SymbolOptions {
    /// Width of one barcode module in pixels
    pub module_width: u32,
    /// Bar height in pixels
    pub height: u32,
    /// Render the encoded value under the bars
    pub display_value: bool,
    /// Font size of the human-readable value
    pub font_size: u32,
    /// Quiet zone around the symbol in pixels
    pub margin: u32,
    /// Bar color
    pub foreground: String,
    /// Background color
    pub background: String,
}

impl Default for SymbolOptions {
    fn default() -> Self {
        Self {
            module_width: 2,
            height: 80,
            display_value: true,
            font_size: 12,
            margin: 5,
            foreground: "#000000".to_string(),
            background: "#ffffff".to_string(),
        }
    }
}

/// Symbol rendering errors
#[derive(Debug, Error)]
pub enum SymbolError {
    #[error("Value cannot be encoded: {0}")]
    Encoding(String),
}

impl From<SymbolError> for AppError {
    fn from(err: SymbolError) -> Self {
        AppError::with_message(ErrorCode::SymbolUnavailable, err.to_string())
    }
}

/// Code 128 SVG renderer
#[derive(Debug, Clone)]
pub struct Code128Renderer {
    options: SymbolOptions,
}

impl Code128Renderer {
    pub fn new(options: SymbolOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SymbolOptions {
        &self.options
    }

    /// Render `value` as a standalone SVG snippet
    pub fn render(&self, value: &str) -> Result<String, SymbolError> {
        if value.is_empty() {
            return Err(SymbolError::Encoding("empty value".to_string()));
        }

        let code = Code128::new(format!("{}{}", CHARSET_B, value))
            .map_err(|e| SymbolError::Encoding(format!("{}: {:?}", value, e)))?;
        let modules = code.encode();

        Ok(self.to_svg(value, &modules))
    }

    fn to_svg(&self, value: &str, modules: &[u8]) -> String {
        let o = &self.options;
        let text_area = if o.display_value { o.font_size + 4 } else { 0 };
        let width = modules.len() as u32 * o.module_width + 2 * o.margin;
        let height = o.height + text_area + 2 * o.margin;

        let mut svg = String::new();
        let _ = write!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height,
        );
        let _ = write!(
            svg,
            r#"<rect width="{}" height="{}" fill="{}"/>"#,
            width, height, o.background,
        );

        // One rect per run of set modules
        let mut x = o.margin;
        let mut run = 0u32;
        for &module in modules {
            if module == 1 {
                run += 1;
                continue;
            }
            if run > 0 {
                let _ = write!(
                    svg,
                    r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                    x,
                    o.margin,
                    run * o.module_width,
                    o.height,
                    o.foreground,
                );
            }
            x += (run + 1) * o.module_width;
            run = 0;
        }
        if run > 0 {
            let _ = write!(
                svg,
                r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
                x,
                o.margin,
                run * o.module_width,
                o.height,
                o.foreground,
            );
        }

        if o.display_value {
            let _ = write!(
                svg,
                r#"<text x="{}" y="{}" text-anchor="middle" font-family="monospace" font-size="{}" fill="{}">{}</text>"#,
                width / 2,
                o.margin + o.height + o.font_size,
                o.font_size,
                o.foreground,
                value,
            );
        }

        svg.push_str("</svg>");
        svg
    }
}
