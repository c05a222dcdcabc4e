//! 8-bit RGB ⇄ HSV conversion.
//!
//! All three HSV channels live on the 0–255 scale. Hue is the position on the
//! color circle scaled so that 0 is red, ~85 green, ~170 blue, and 255 wraps
//! back to red.
//!
//! The round trip is lossy by a few levels per channel at most: hue and
//! saturation are truncated to integers on the way in. Value is exact, since
//! HSV→RGB always reproduces `v` as the largest output channel.

/// One pixel in HSV, each channel 0–255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hsv {
    pub h: u8,
    pub s: u8,
    pub v: u8,
}

/// Convert an RGB pixel to HSV.
pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);

    if max == min {
        return Hsv { h: 0, s: 0, v: max };
    }

    let chroma = f32::from(max - min);
    let s = chroma / f32::from(max);
    let rc = f32::from(max - r) / chroma;
    let gc = f32::from(max - g) / chroma;
    let bc = f32::from(max - b) / chroma;

    // The offset sums are taken in f64 and rounded to f32 once; summing in
    // f32 lands some hues one level low.
    let sector = if r == max {
        bc - gc
    } else if g == max {
        (2.0 + f64::from(rc) - f64::from(bc)) as f32
    } else {
        (4.0 + f64::from(gc) - f64::from(rc)) as f32
    };
    // Shift by a full turn so negative sectors (magenta side of red) land in 0..1.
    // Stored as f32 so thirds of the circle land exactly on 85 and 170.
    let h = ((f64::from(sector) / 6.0 + 1.0) % 1.0) as f32;

    Hsv {
        h: to_channel(f64::from(h) * 255.0),
        s: to_channel(f64::from(s) * 255.0),
        v: max,
    }
}

/// Convert an HSV pixel back to RGB.
pub fn hsv_to_rgb(hsv: Hsv) -> (u8, u8, u8) {
    let Hsv { h, s, v } = hsv;
    if s == 0 {
        return (v, v, v);
    }

    let h6 = f64::from(h) * 6.0 / 255.0;
    let sector = h6.floor();
    let f = h6 - sector;
    let fs = f64::from(s) / 255.0;
    let vf = f64::from(v);

    let p = round_channel(vf * (1.0 - fs));
    let q = round_channel(vf * (1.0 - fs * f));
    let t = round_channel(vf * (1.0 - fs * (1.0 - f)));

    // h == 255 gives sector 6, which is red again
    match sector as u8 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    }
}

/// Truncate toward zero and clamp to a channel value.
fn to_channel(x: f64) -> u8 {
    x.clamp(0.0, 255.0) as u8
}

fn round_channel(x: f64) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}
