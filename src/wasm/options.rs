//! Settings taken from the canvas element, e.g.
//! `<canvas id="hero-canvas" data-cell-size="90" data-seed="7">`.

use web_sys::HtmlCanvasElement;

use crate::config::HeroConfig;

pub fn from_dataset(canvas: &HtmlCanvasElement) -> HeroConfig {
    let dataset = canvas.dataset();
    let mut config = HeroConfig::default();
    for key in HeroConfig::KEYS {
        let Some(value) = dataset.get(&camel_case(key)) else {
            continue;
        };
        if let Err(err) = config.apply_override(key, &value) {
            log::warn!("ignoring data-{key}: {err}");
        }
    }
    match config.validate() {
        Ok(()) => config,
        Err(err) => {
            log::warn!("hero settings rejected ({err}), falling back to defaults");
            HeroConfig {
                seed: config.seed,
                ..HeroConfig::default()
            }
        }
    }
}

/// The configured seed, or a fresh one from `Math.random()`.
pub fn seed(config: &HeroConfig) -> u64 {
    config
        .seed
        .unwrap_or_else(|| (js_sys::Math::random() * (1u64 << 53) as f64) as u64)
}

// data-cell-size is exposed as dataset.cellSize
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut upper = false;
    for c in key.chars() {
        if c == '-' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}
