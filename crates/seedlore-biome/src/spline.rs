//! Single-precision terrain offset spline.
//!
//! Every operation here is carried out in f32 on purpose: the reference
//! evaluates the offset curves in single precision, and the quantized
//! depth parameter is sensitive to the difference near band edges.

/// Input axis a curve node reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum SplineCoord {
    Continentalness = 0,
    Erosion = 1,
    Ridges = 2,
    #[allow(dead_code)]
    Weirdness = 3,
}

/// Piecewise-cubic spline over the climate inputs. Leaves are constants;
/// interior nodes pick an axis and interpolate child splines.
#[derive(Debug, Clone)]
pub(crate) enum Spline {
    Constant(f32),
    Curve {
        coord: SplineCoord,
        locations: Vec<f32>,
        values: Vec<Spline>,
        derivatives: Vec<f32>,
    },
}

fn flerp(t: f32, a: f32, b: f32) -> f32 {
    a + t * (b - a)
}

impl Spline {
    fn curve(coord: SplineCoord) -> Self {
        Self::Curve {
            coord,
            locations: Vec::new(),
            values: Vec::new(),
            derivatives: Vec::new(),
        }
    }

    fn add(&mut self, location: f32, value: Spline, derivative: f32) {
        if let Self::Curve {
            locations,
            values,
            derivatives,
            ..
        } = self
        {
            locations.push(location);
            values.push(value);
            derivatives.push(derivative);
        }
    }

    fn add_const(&mut self, location: f32, value: f32, derivative: f32) {
        self.add(location, Self::Constant(value), derivative);
    }

    /// Evaluates against `[continentalness, erosion, ridges, weirdness]`.
    pub(crate) fn get(&self, vals: &[f32; 4]) -> f32 {
        match self {
            Self::Constant(v) => *v,
            Self::Curve {
                coord,
                locations,
                values,
                derivatives,
            } => {
                let f = vals[*coord as usize];
                let n = locations.len();
                let mut i = 0;
                while i < n && locations[i] < f {
                    i += 1;
                }
                if i == 0 || i == n {
                    let i = i.saturating_sub(1);
                    let v = values[i].get(vals);
                    return v + derivatives[i] * (f - locations[i]);
                }
                let g = locations[i - 1];
                let h = locations[i];
                let t = (f - g) / (h - g);
                let l = values[i - 1].get(vals);
                let m = values[i].get(vals);
                let p = derivatives[i - 1] * (h - g) - (m - l);
                let q = -derivatives[i] * (h - g) + (m - l);
                flerp(t, l, m) + t * (1.0 - t) * flerp(t, p, q)
            }
        }
    }
}

fn mountain_continentalness(weirdness: f32, continentalness: f32, threshold: f32) -> f32 {
    let f0 = 1.0 - (1.0 - continentalness) * 0.5;
    let f1 = 0.5 * (1.0 - continentalness);
    let off = (weirdness + 1.17) * 0.460_829_47 * f0 - f1;
    if weirdness < threshold {
        off.max(-0.2222)
    } else {
        off.max(0.0)
    }
}

fn ridge_zero_point(continentalness: f32) -> f32 {
    let f0 = 1.0 - (1.0 - continentalness) * 0.5;
    let f1 = 0.5 * (1.0 - continentalness);
    f1 / (0.460_829_47 * f0) - 1.17
}

fn mountain_ridge_spline(f: f32, amplified: bool) -> Spline {
    let mut sp = Spline::curve(SplineCoord::Ridges);
    let i = mountain_continentalness(-1.0, f, -0.7);
    let k = mountain_continentalness(1.0, f, -0.7);
    let l = ridge_zero_point(f);
    if -0.65 < l && l < 1.0 {
        let u = mountain_continentalness(-0.65, f, -0.7);
        let p = mountain_continentalness(-0.75, f, -0.7);
        let q = (p - i) * 4.0;
        let r = mountain_continentalness(l, f, -0.7);
        let s = (k - r) / (1.0 - l);
        sp.add_const(-1.0, i, q);
        sp.add_const(-0.75, p, 0.0);
        sp.add_const(-0.65, u, 0.0);
        sp.add_const(l - 0.01, r, 0.0);
        sp.add_const(l, r, s);
        sp.add_const(1.0, k, s);
    } else {
        let u = (k - i) * 0.5;
        if amplified {
            sp.add_const(-1.0, i.max(0.2), 0.0);
            sp.add_const(0.0, flerp(0.5, i, k), u);
        } else {
            sp.add_const(-1.0, i, u);
        }
        sp.add_const(1.0, k, u);
    }
    sp
}

fn flat_offset_spline(f: f32, g: f32, h: f32, i: f32, j: f32, k: f32) -> Spline {
    let mut sp = Spline::curve(SplineCoord::Ridges);
    let l = (0.5 * (g - f)).max(k);
    let m = 5.0 * (h - g);
    sp.add_const(-1.0, f, l);
    sp.add_const(-0.4, g, l.min(m));
    sp.add_const(0.0, h, m);
    sp.add_const(0.4, i, 2.0 * (i - h));
    sp.add_const(1.0, j, 0.7 * (j - i));
    sp
}

#[allow(clippy::many_single_char_names)]
fn land_spline(f: f32, g: f32, h: f32, i: f32, j: f32, k: f32, amplified: bool) -> Spline {
    let sp1 = mountain_ridge_spline(flerp(i, 0.6, 1.5), amplified);
    let sp2 = mountain_ridge_spline(flerp(i, 0.6, 1.0), amplified);
    let sp3 = mountain_ridge_spline(i, amplified);
    let ih = 0.5 * i;
    let sp4 = flat_offset_spline(f - 0.15, ih, ih, ih, i * 0.6, 0.5);
    let sp5 = flat_offset_spline(f, j * i, g * i, ih, i * 0.6, 0.5);
    let sp6 = flat_offset_spline(f, j, j, g, h, 0.5);
    let sp7 = flat_offset_spline(f, j, j, g, h, 0.5);
    let mut sp8 = Spline::curve(SplineCoord::Ridges);
    sp8.add_const(-1.0, f, 0.0);
    sp8.add(-0.4, sp6.clone(), 0.0);
    sp8.add_const(0.0, h + 0.07, 0.0);
    let sp9 = flat_offset_spline(-0.02, k, k, g, h, 0.0);
    let mut sp = Spline::curve(SplineCoord::Erosion);
    sp.add(-0.85, sp1, 0.0);
    sp.add(-0.7, sp2, 0.0);
    sp.add(-0.4, sp3, 0.0);
    sp.add(-0.35, sp4, 0.0);
    sp.add(-0.1, sp5, 0.0);
    sp.add(0.2, sp6, 0.0);
    if amplified {
        sp.add(0.4, sp7.clone(), 0.0);
        sp.add(0.45, sp8.clone(), 0.0);
        sp.add(0.55, sp8, 0.0);
        sp.add(0.58, sp7, 0.0);
    }
    sp.add(0.7, sp9, 0.0);
    sp
}

/// Builds the full overworld terrain offset spline.
pub(crate) fn offset_spline() -> Spline {
    let sp1 = land_spline(-0.15, 0.00, 0.0, 0.1, 0.00, -0.03, false);
    let sp2 = land_spline(-0.10, 0.03, 0.1, 0.1, 0.01, -0.03, false);
    let sp3 = land_spline(-0.10, 0.03, 0.1, 0.7, 0.01, -0.03, true);
    let sp4 = land_spline(-0.05, 0.03, 0.1, 1.0, 0.01, 0.01, true);
    let mut sp = Spline::curve(SplineCoord::Continentalness);
    sp.add_const(-1.10, 0.044, 0.0);
    sp.add_const(-1.02, -0.2222, 0.0);
    sp.add_const(-0.51, -0.2222, 0.0);
    sp.add_const(-0.44, -0.12, 0.0);
    sp.add_const(-0.18, -0.12, 0.0);
    sp.add(-0.16, sp1.clone(), 0.0);
    sp.add(-0.15, sp1, 0.0);
    sp.add(-0.10, sp2, 0.0);
    sp.add(0.25, sp3, 0.0);
    sp.add(1.00, sp4, 0.0);
    sp
}

/// Triangular fold of the weirdness value into the ridges input.
pub(crate) fn fold_ridges(weirdness: f32) -> f32 {
    -3.0 * (((weirdness.abs() - 0.666_666_7).abs()) - 0.333_333_34)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fold_ridges() {
        assert_eq!(fold_ridges(0.0), -1.0);
        assert_eq!(fold_ridges(0.666_666_7), 1.0);
        assert_eq!(fold_ridges(-0.666_666_7), 1.0);
    }

    #[test]
    fn test_constant_extrapolation() {
        let mut sp = Spline::curve(SplineCoord::Continentalness);
        sp.add_const(-0.5, 1.0, 2.0);
        sp.add_const(0.5, 3.0, 0.0);
        // below the first node: value + derivative * overshoot
        assert_eq!(sp.get(&[-1.0, 0.0, 0.0, 0.0]), 1.0 + 2.0 * -0.5);
        // above the last node: flat derivative
        assert_eq!(sp.get(&[2.0, 0.0, 0.0, 0.0]), 3.0);
        // at an interior node location the node value is exact
        assert_eq!(sp.get(&[0.5, 0.0, 0.0, 0.0]), 3.0);
    }

    #[test]
    fn test_offset_spline_validated_point() {
        // continentalness/erosion/weirdness from the seeded climate field
        // at quart (72, 496) of seed 1234567890
        let sp = offset_spline();
        let c = 0.275_408_69_f32;
        let e = -0.184_242_14_f32;
        let w = 0.177_319_09_f32;
        let v = sp.get(&[c, e, fold_ridges(w), w]);
        assert_eq!(v, 0.089_936_16);
        assert_eq!(v + 0.015, 0.104_936_16);
    }
}
