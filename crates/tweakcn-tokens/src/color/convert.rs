//! Pairwise colour-space transforms.
//!
//! All paths go through normalized sRGB ([`Rgba`]). OKLCH uses Björn
//! Ottosson's OKLab matrices: sRGB is linearized with the piecewise sRGB
//! transfer function, mapped into an LMS-like cone space, compressed with a
//! cube root, and mapped again into `L, a, b` before the polar step.
//!
//! Only the final RGB output of [`oklch_to_rgb`] is clamped. OKLCH values
//! themselves are never clamped, since valid OKLCH coordinates can lie
//! outside the sRGB gamut.

use super::{Hsl, Oklch, Rgba};

/// Channel spread below which an RGB colour counts as gray.
const GRAY_EPSILON: f64 = 1e-9;

/// OKLCH chroma below which hue is meaningless. The OKLab matrices leave
/// about 4e-8 of chroma on pure white.
const CHROMA_EPSILON: f64 = 1e-7;

/// Grid the OKLab outputs are rounded to. The matrices are not exact
/// inverses, so white otherwise lands at `0.9999999999999999`.
const RESIDUE_GRID: f64 = 1e12;

fn snap(value: f64) -> f64 {
    (value * RESIDUE_GRID).round() / RESIDUE_GRID
}

// ─── sRGB transfer function ─────────────────────────────────────────────────

/// Convert an sRGB component (0.0–1.0) to linear light.
fn srgb_to_linear(c: f64) -> f64 {
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert a linear light value back to an sRGB component, clamped to 0.0–1.0.
fn linear_to_srgb(c: f64) -> f64 {
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    s.clamp(0.0, 1.0)
}

/// Keeps a hue in `[0, 360)`.
fn wrap_hue(h: f64) -> f64 {
    let h = if h < 0.0 { h + 360.0 } else { h };
    if h >= 360.0 {
        h - 360.0
    } else {
        h
    }
}

// ─── HSL ────────────────────────────────────────────────────────────────────

/// Converts normalized RGB to HSL.
///
/// Achromatic colours (all channels equal, up to float noise) report hue
/// `0` and saturation `0`.
pub fn rgb_to_hsl(color: Rgba) -> Hsl {
    let Rgba { r, g, b, a } = color;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    if max - min < GRAY_EPSILON {
        return Hsl { h: 0.0, s: 0.0, l, a };
    }

    let d = max - min;
    let s = if l > 0.5 {
        d / (2.0 - max - min)
    } else {
        d / (max + min)
    };

    let h = if max == r {
        ((g - b) / d + if g < b { 6.0 } else { 0.0 }) / 6.0
    } else if max == g {
        ((b - r) / d + 2.0) / 6.0
    } else {
        ((r - g) / d + 4.0) / 6.0
    };

    Hsl {
        h: wrap_hue(h * 360.0),
        s,
        l,
        a,
    }
}

/// Converts HSL to normalized RGB.
pub fn hsl_to_rgb(hsl: Hsl) -> Rgba {
    let h = hsl.h.rem_euclid(360.0) / 360.0;
    let Hsl { s, l, a, .. } = hsl;

    if s == 0.0 {
        return Rgba { r: l, g: l, b: l, a };
    }

    let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
    let p = 2.0 * l - q;

    Rgba {
        r: hue_to_channel(p, q, h + 1.0 / 3.0),
        g: hue_to_channel(p, q, h),
        b: hue_to_channel(p, q, h - 1.0 / 3.0),
        a,
    }
}

fn hue_to_channel(p: f64, q: f64, t: f64) -> f64 {
    let t = if t < 0.0 {
        t + 1.0
    } else if t > 1.0 {
        t - 1.0
    } else {
        t
    };

    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── OKLCH ──────────────────────────────────────────────────────────────────

/// Converts normalized RGB to OKLCH.
///
/// Grays report chroma `0` and hue `0`.
pub fn rgb_to_oklch(color: Rgba) -> Oklch {
    let lr = srgb_to_linear(color.r);
    let lg = srgb_to_linear(color.g);
    let lb = srgb_to_linear(color.b);

    // Linear sRGB → LMS
    let l = 0.4122214708 * lr + 0.5363325363 * lg + 0.0514459929 * lb;
    let m = 0.2119034982 * lr + 0.6806995451 * lg + 0.1073969566 * lb;
    let s = 0.0883024619 * lr + 0.2817188376 * lg + 0.6299787005 * lb;

    let l_ = l.cbrt();
    let m_ = m.cbrt();
    let s_ = s.cbrt();

    // LMS' → OKLab
    let big_l = 0.2104542553 * l_ + 0.7936177850 * m_ - 0.0040720468 * s_;
    let a = 1.9779984951 * l_ - 2.4285922050 * m_ + 0.4505937099 * s_;
    let b = 0.0259040371 * l_ + 0.7827717662 * m_ - 0.8086757660 * s_;

    let big_l = snap(big_l);
    let c = (a * a + b * b).sqrt();
    if c < CHROMA_EPSILON {
        return Oklch {
            l: big_l,
            c: 0.0,
            h: 0.0,
            a: color.a,
        };
    }

    Oklch {
        l: big_l,
        c,
        h: wrap_hue(b.atan2(a).to_degrees()),
        a: color.a,
    }
}

/// Converts OKLCH to normalized RGB, clamping each channel to `[0, 1]`.
pub fn oklch_to_rgb(oklch: Oklch) -> Rgba {
    let h = oklch.h.to_radians();
    let a = oklch.c * h.cos();
    let b = oklch.c * h.sin();

    // OKLab → LMS'
    let l_ = oklch.l + 0.3963377774 * a + 0.2158037573 * b;
    let m_ = oklch.l - 0.1055613458 * a - 0.0638541728 * b;
    let s_ = oklch.l - 0.0894841775 * a - 1.2914855480 * b;

    let l = l_ * l_ * l_;
    let m = m_ * m_ * m_;
    let s = s_ * s_ * s_;

    // LMS → linear sRGB
    let r = 4.0767416621 * l - 3.3077115913 * m + 0.2309699292 * s;
    let g = -1.2684380046 * l + 2.6097574011 * m - 0.3413193965 * s;
    let b = -0.0041960863 * l - 0.7034186147 * m + 1.7076147010 * s;

    Rgba {
        r: snap(linear_to_srgb(r)),
        g: snap(linear_to_srgb(g)),
        b: snap(linear_to_srgb(b)),
        a: oklch.a,
    }
}

// ─── Tests ──────────────────────────────────────────────────────────────────
