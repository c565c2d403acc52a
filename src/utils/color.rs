use eframe::egui::Color32;

/// Named colors understood on the command line and shown in the item list.
const NAMED: &[(&str, Color32)] = &[
    ("black", Color32::BLACK),
    ("white", Color32::WHITE),
    ("red", Color32::from_rgb(255, 0, 0)),
    ("green", Color32::from_rgb(0, 128, 0)),
    ("blue", Color32::from_rgb(0, 0, 255)),
    ("yellow", Color32::from_rgb(255, 255, 0)),
    ("orange", Color32::from_rgb(255, 165, 0)),
    ("purple", Color32::from_rgb(160, 32, 240)),
    ("gray", Color32::from_rgb(190, 190, 190)),
];

/// HSVA and hex helpers on top of egui's 8-bit color.
pub trait ColorManipulation: Sized {
    /// Build from HSVA values in 0..1; hue wraps.
    fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> Self;
    /// Split into HSVA values in 0..1.
    fn to_hsva(&self) -> (f32, f32, f32, f32);
    /// `#rrggbb`, alpha dropped.
    fn to_hex(&self) -> String;
}

impl ColorManipulation for Color32 {
    fn from_hsva(h: f32, s: f32, v: f32, a: f32) -> Self {
        // h is wrapped into [0,1) so callers can pass any float
        let h = ((h % 1.0) + 1.0) % 1.0;
        let s = s.clamp(0.0, 1.0);
        let v = v.clamp(0.0, 1.0);
        let a = a.clamp(0.0, 1.0);

        let c = v * s;
        let x = c * (1.0 - (((h * 6.0) % 2.0) - 1.0).abs());
        let m = v - c;

        let (r1, g1, b1) = match (h * 6.0).floor() as i32 {
            0 => (c, x, 0.0),
            1 => (x, c, 0.0),
            2 => (0.0, c, x),
            3 => (0.0, x, c),
            4 => (x, 0.0, c),
            _ => (c, 0.0, x),
        };

        let to_u8 = |f: f32| (f * 255.0).round().clamp(0.0, 255.0) as u8;
        Color32::from_rgba_unmultiplied(to_u8(r1 + m), to_u8(g1 + m), to_u8(b1 + m), to_u8(a))
    }

    fn to_hsva(&self) -> (f32, f32, f32, f32) {
        let [r, g, b, a] = self.to_srgba_unmultiplied();
        let (r, g, b) = (r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let delta = max - min;

        let mut h = if delta == 0.0 {
            0.0
        } else if max == r {
            ((g - b) / delta) % 6.0
        } else if max == g {
            ((b - r) / delta) + 2.0
        } else {
            ((r - g) / delta) + 4.0
        };

        h /= 6.0;
        if h < 0.0 {
            h += 1.0;
        }

        let s = if max == 0.0 { 0.0 } else { delta / max };
        (h, s, max, a as f32 / 255.0)
    }

    fn to_hex(&self) -> String {
        let [r, g, b, _] = self.to_srgba_unmultiplied();
        format!("#{r:02x}{g:02x}{b:02x}")
    }
}

/// Parse `#rgb`, `#rrggbb` or one of the known color names.
pub fn parse_color(text: &str) -> Option<Color32> {
    let text = text.trim();
    if let Some(hex) = text.strip_prefix('#') {
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        return match hex.len() {
            3 => {
                let digit = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|d| d * 17);
                Some(Color32::from_rgb(digit(0)?, digit(1)?, digit(2)?))
            }
            6 => {
                let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
                Some(Color32::from_rgb(byte(0)?, byte(2)?, byte(4)?))
            }
            _ => None,
        };
    }
    NAMED
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case(text))
        .map(|(_, color)| *color)
}

/// Named colors in table order, used for the chooser's swatches.
pub fn palette() -> impl Iterator<Item = (&'static str, Color32)> {
    NAMED.iter().copied()
}

/// Name for a color when it has one, hex otherwise.
pub fn describe(color: Color32) -> String {
    NAMED
        .iter()
        .find(|(_, c)| *c == color)
        .map(|(name, _)| name.to_string())
        .unwrap_or_else(|| color.to_hex())
}
