//! Code 128 (code set B) symbols.
//!
//! `encode` produces the raw module pattern (1 px per module, 1 px tall)
//! through rxing's Code 128 writer, `scale` blows it up to a pixel box with
//! an integer module width so every bar keeps the same width after
//! rasterising.

use image::{GrayImage, Luma};
use rxing::oned::{Code128Writer, OneDimensionalCodeWriter};
use rxing::{EncodeHintValue, EncodeHints};

use crate::error::SymbolError;

const BAR: Luma<u8> = Luma([0]);
const SPACE: Luma<u8> = Luma([255]);

/// A rendered symbol: the module pattern plus its bitmap.
#[derive(Debug, Clone, PartialEq)]
pub struct EncodedSymbol {
    code: String,
    modules: Vec<bool>,
    module_px: u32,
    bitmap: GrayImage,
}

impl EncodedSymbol {
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Bar (`true`) / space (`false`) sequence, one entry per module.
    pub fn modules(&self) -> &[bool] {
        &self.modules
    }

    pub fn module_px(&self) -> u32 {
        self.module_px
    }

    pub fn width(&self) -> u32 {
        self.bitmap.width()
    }

    pub fn height(&self) -> u32 {
        self.bitmap.height()
    }

    pub fn bitmap(&self) -> &GrayImage {
        &self.bitmap
    }
}

/// Encode `code` as Code 128 set B: start B, data, mod-103 check, stop.
///
/// Characters outside set B (ASCII 32..=127) are rejected up front so the
/// error names the first offending character and its position.
pub fn encode(code: &str) -> Result<EncodedSymbol, SymbolError> {
    if code.is_empty() {
        return Err(SymbolError::Empty);
    }
    if let Some((position, ch)) = code.chars().enumerate().find(|&(_, ch)| !is_set_b(ch)) {
        return Err(SymbolError::Encoding { code: code.to_string(), ch, position });
    }

    let hints = EncodeHints::default().with(EncodeHintValue::ForceCodeSet("B".into()));
    let modules = Code128Writer
        .encode_oned_with_hints(code, &hints)
        .map_err(|err| SymbolError::Writer { code: code.to_string(), reason: err.to_string() })?;

    let bitmap = GrayImage::from_fn(modules.len() as u32, 1, |x, _| {
        if modules[x as usize] { BAR } else { SPACE }
    });

    Ok(EncodedSymbol { code: code.to_string(), modules, module_px: 1, bitmap })
}

/// Resize a symbol to exactly `width` x `height`.
///
/// Each module becomes `width / modules` pixels (integer), the pattern is
/// centred horizontally and bars run the full height. Fails when a module
/// would be narrower than `min_module_px` (and never allows less than 1 px).
pub fn scale(
    symbol: &EncodedSymbol,
    width: u32,
    height: u32,
    min_module_px: u32,
) -> Result<EncodedSymbol, SymbolError> {
    let modules = symbol.modules.len() as u32;
    let fail = |reason| SymbolError::Scaling {
        code: symbol.code.clone(),
        modules,
        width,
        height,
        reason,
    };

    if height == 0 {
        return Err(fail("target height is zero"));
    }
    let factor = width / modules;
    if factor == 0 {
        return Err(fail("target narrower than one pixel per module"));
    }
    if factor < min_module_px {
        return Err(fail("module width below the configured minimum"));
    }

    let offset = (width - modules * factor) / 2;
    let end = offset + modules * factor;
    let bitmap = GrayImage::from_fn(width, height, |x, _| {
        if x < offset || x >= end {
            return SPACE;
        }
        if symbol.modules[((x - offset) / factor) as usize] { BAR } else { SPACE }
    });

    Ok(EncodedSymbol {
        code: symbol.code.clone(),
        modules: symbol.modules.clone(),
        module_px: factor,
        bitmap,
    })
}

fn is_set_b(ch: char) -> bool {
    (' '..='\u{7f}').contains(&ch)
}
