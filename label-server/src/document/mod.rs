//! Printable label document builder
//!
//! Takes one product record plus its already-rendered symbol markup and
//! produces a standalone HTML document with one label block per requested
//! copy. Two layout presets exist: `thermal` targets 38x25mm label stock
//! (one label per page, the DT38x25 format), `page` lays bordered blocks
//! out on A4.

use std::fmt::Write;
use std::str::FromStr;

use serde::Serialize;

use crate::utils::price::format_amount;
use shared::models::product::ProductRecord;
use shared::{AppError, AppResult, ErrorCode};

/// Print document layout preset
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LabelLayout {
    /// 38x25mm thermal label stock, one label per page
    #[default]
    Thermal,
    /// A4 page with bordered label blocks
    Page,
}

impl FromStr for LabelLayout {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "thermal" => Ok(Self::Thermal),
            "page" => Ok(Self::Page),
            other => Err(format!("unknown label layout: {}", other)),
        }
    }
}

/// On-screen label preview: the record plus its symbol markup
#[derive(Debug, Clone, Serialize)]
pub struct LabelPreview {
    pub product: ProductRecord,
    /// Formatted `$`-prefixed amount, ready for display
    pub amount_display: String,
    pub symbol_svg: String,
}

impl LabelPreview {
    pub fn new(product: ProductRecord, symbol_svg: String) -> Self {
        let amount_display = format_amount(&product.amount);
        Self {
            product,
            amount_display,
            symbol_svg,
        }
    }
}

/// Builds standalone printable HTML documents
#[derive(Debug, Clone, Copy)]
pub struct DocumentBuilder {
    layout: LabelLayout,
}

impl DocumentBuilder {
    pub fn new(layout: LabelLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> LabelLayout {
        self.layout
    }

    /// Produce `print_quantity` repeated label blocks wrapped in a printable
    /// document. Fails with `SymbolUnavailable` when no symbol markup was
    /// obtained; nothing is mutated in that case.
    pub fn build(&self, product: &ProductRecord, symbol_markup: &str) -> AppResult<String> {
        if symbol_markup.trim().is_empty() {
            return Err(AppError::with_message(
                ErrorCode::SymbolUnavailable,
                "Barcode symbol not available, generate a label first",
            ));
        }

        let label = self.label_block(product, symbol_markup);

        let mut body = String::new();
        for _ in 0..product.print_quantity.max(1) {
            body.push_str(&label);
        }

        Ok(format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>Print Labels - {}</title>\n<style>\n{}\n</style>\n</head>\n<body>\n{}</body>\n</html>\n",
            escape_html(&product.product_name),
            self.stylesheet(),
            body,
        ))
    }

    fn label_block(&self, product: &ProductRecord, symbol_markup: &str) -> String {
        let mut block = String::new();
        let _ = write!(
            block,
            concat!(
                "<div class=\"label\">\n",
                "  <h3 class=\"company\">{company}</h3>\n",
                "  <p class=\"product\">{product}</p>\n",
                "  <p class=\"amount\">{amount}</p>\n",
                "  <div class=\"symbol\">{symbol}</div>\n",
                "  <p class=\"barcode\">{barcode}</p>\n",
                "</div>\n",
            ),
            company = escape_html(&product.company_name),
            product = escape_html(&product.product_name),
            amount = format_amount(&product.amount),
            symbol = symbol_markup,
            barcode = product.barcode,
        );
        block
    }

    fn stylesheet(&self) -> &'static str {
        match self.layout {
            LabelLayout::Thermal => THERMAL_CSS,
            LabelLayout::Page => PAGE_CSS,
        }
    }
}

/// 38x25mm label stock, everything centered, one label per page
const THERMAL_CSS: &str = "\
@page { size: 38mm 25mm; margin: 0; }
body { margin: 0; padding: 0; width: 38mm; font-family: Arial, sans-serif; }
.label {
  width: 38mm; height: 25mm;
  display: flex; flex-direction: column;
  justify-content: center; align-items: center;
  overflow: hidden; page-break-after: always;
}
.company { margin: 0; font-size: 6pt; font-weight: bold; text-align: center; line-height: 1.1; }
.product { margin: 0.3mm 0; font-size: 6pt; font-weight: 600; text-align: center; line-height: 1.1; }
.amount { margin: 0.3mm 0; font-size: 7pt; font-weight: bold; text-align: center; line-height: 1.1; }
.symbol { margin-top: 0.5mm; display: flex; justify-content: center; }
.symbol svg { width: 95%; height: 10mm; }
.barcode { margin: 0; font-size: 5pt; text-align: center; }
";

/// A4 sheet with bordered label blocks
const PAGE_CSS: &str = "\
@page { size: A4; margin: 10mm; }
body { margin: 0; font-family: Arial, sans-serif; display: flex; flex-wrap: wrap; gap: 4mm; }
.label {
  width: 60mm; border: 0.3mm solid #000; padding: 2mm;
  display: flex; flex-direction: column; align-items: center;
  break-inside: avoid;
}
.company { margin: 0; font-size: 10pt; font-weight: bold; text-align: center; }
.product { margin: 1mm 0; font-size: 10pt; text-align: center; }
.amount { margin: 1mm 0; font-size: 11pt; font-weight: bold; text-align: center; }
.symbol { margin-top: 1mm; display: flex; justify-content: center; }
.symbol svg { max-width: 100%; }
.barcode { margin: 1mm 0 0; font-size: 8pt; text-align: center; }
";

/// Minimal HTML escaping for user-entered text
fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn product(quantity: u32) -> ProductRecord {
        ProductRecord {
            id: 1,
            company_name: "Acme".to_string(),
            product_name: "Widget".to_string(),
            amount: Decimal::from_str("9.99").unwrap(),
            barcode: 1_000_000_000_000,
            print_quantity: quantity,
            date: "2026-08-27 10:00:00".to_string(),
        }
    }

    #[test]
    fn test_repeats_one_block_per_copy() {
        let builder = DocumentBuilder::new(LabelLayout::Thermal);
        let doc = builder.build(&product(2), "<svg/>").unwrap();

        assert_eq!(doc.matches("class=\"label\"").count(), 2);
        assert_eq!(doc.matches("Acme").count(), 2);
        assert_eq!(doc.matches("Widget").count(), 2 + 1); // +1 for the title
        assert_eq!(doc.matches("$9.99").count(), 2);
        assert_eq!(doc.matches("1000000000000").count(), 2);
    }

    #[test]
    fn test_missing_symbol_fails() {
        let builder = DocumentBuilder::new(LabelLayout::Thermal);

        let err = builder.build(&product(1), "").unwrap_err();
        assert_eq!(err.code, ErrorCode::SymbolUnavailable);

        let err = builder.build(&product(1), "   ").unwrap_err();
        assert_eq!(err.code, ErrorCode::SymbolUnavailable);
    }

    #[test]
    fn test_layout_presets_pick_page_size() {
        let thermal = DocumentBuilder::new(LabelLayout::Thermal)
            .build(&product(1), "<svg/>")
            .unwrap();
        assert!(thermal.contains("size: 38mm 25mm"));

        let page = DocumentBuilder::new(LabelLayout::Page)
            .build(&product(1), "<svg/>")
            .unwrap();
        assert!(page.contains("size: A4"));
        assert!(page.contains("border"));
    }

    #[test]
    fn test_user_text_is_escaped() {
        let mut p = product(1);
        p.company_name = "Bob's <Tools>".to_string();
        let doc = DocumentBuilder::new(LabelLayout::Thermal)
            .build(&p, "<svg/>")
            .unwrap();

        assert!(doc.contains("Bob&#39;s &lt;Tools&gt;"));
        assert!(!doc.contains("<Tools>"));
    }

    #[test]
    fn test_layout_parsing() {
        assert_eq!("thermal".parse::<LabelLayout>().unwrap(), LabelLayout::Thermal);
        assert_eq!("PAGE".parse::<LabelLayout>().unwrap(), LabelLayout::Page);
        assert!("roll".parse::<LabelLayout>().is_err());
    }

    #[test]
    fn test_preview_formats_amount() {
        let preview = LabelPreview::new(product(1), "<svg/>".to_string());
        assert_eq!(preview.amount_display, "$9.99");
    }
}
