//! RGB to CMYK conversion.

use serde::{Deserialize, Serialize};

use super::normalized_rgb;
use crate::buffer::Bgra;

/// Cyan, magenta, yellow and key, each in percent `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

/// Convert `pixel` to CMYK. Alpha is ignored.
///
/// ```text
/// K = 1 − max(R, G, B)
/// C = (1 − R − K) / (1 − K)
/// M = (1 − G − K) / (1 − K)
/// Y = (1 − B − K) / (1 − K)
/// ```
///
/// Pure black (K = 1) would make C, M, Y `0 / 0`; they are defined as 0.
pub fn to_cmyk(pixel: Bgra) -> Cmyk {
    let [r, g, b] = normalized_rgb(pixel);
    let c_max = r.max(g).max(b);
    let key = 1.0 - c_max;

    if c_max == 0.0 {
        return Cmyk {
            cyan: 0.0,
            magenta: 0.0,
            yellow: 0.0,
            key: 100.0,
        };
    }

    let ink = |channel: f64| (1.0 - channel - key) / (1.0 - key) * 100.0;

    Cmyk {
        cyan: ink(r),
        magenta: ink(g),
        yellow: ink(b),
        key: key * 100.0,
    }
}
