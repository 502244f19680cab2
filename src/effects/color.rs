//! "Pig vision" color transform: scale down the red channel and soften the
//! frame with a small Gaussian blur. Stateless and landmark-independent.

use crate::foundation::core::FrameRgb;

/// Per-pixel recolor plus fixed-radius blur.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PigVision {
    /// Red-channel factor in `[0, 1]`: 0 removes red entirely, 1 leaves it
    /// unchanged.
    pub intensity: f64,
    /// Blur radius in pixels; 0 disables the blur.
    pub blur_radius: u32,
    /// Gaussian sigma for the blur kernel.
    pub blur_sigma: f32,
}

impl Default for PigVision {
    /// The shipped look: strong red suppression and a 3x3 blur.
    fn default() -> Self {
        Self {
            intensity: 0.2,
            blur_radius: 1,
            blur_sigma: 0.8,
        }
    }
}

impl PigVision {
    /// Apply the transform in place. Always executes; dimensions never
    /// change.
    pub fn apply(&self, frame: &mut FrameRgb) {
        let intensity = self.intensity.clamp(0.0, 1.0);
        for px in frame.data_mut().chunks_exact_mut(3) {
            px[0] = (f64::from(px[0]) * intensity).round().clamp(0.0, 255.0) as u8;
        }
        if self.blur_radius > 0 {
            blur_rgb_in_place(frame, self.blur_radius, self.blur_sigma);
        }
    }
}

/// Separable Gaussian blur over an RGB8 frame using a Q16 integer kernel.
fn blur_rgb_in_place(frame: &mut FrameRgb, radius: u32, sigma: f32) {
    let kernel = gaussian_kernel_q16(radius, sigma);
    let (w, h) = (frame.width(), frame.height());
    let mut tmp = vec![0u8; frame.data().len()];
    horizontal_pass(frame.data(), &mut tmp, w, h, &kernel);
    let mut out = vec![0u8; frame.data().len()];
    vertical_pass(&tmp, &mut out, w, h, &kernel);
    frame.data_mut().copy_from_slice(&out);
}

/// Normalized Gaussian weights in Q16 fixed point, always summing to 65536.
fn gaussian_kernel_q16(radius: u32, sigma: f32) -> Vec<u32> {
    if radius == 0 {
        return vec![1 << 16];
    }
    let sigma = f64::from(sigma.max(f32::MIN_POSITIVE));
    let r = radius as i32;
    let denom = 2.0 * sigma * sigma;
    let weights_f: Vec<f64> = (-r..=r).map(|i| (-(f64::from(i).powi(2)) / denom).exp()).collect();
    let sum: f64 = weights_f.iter().sum();

    let mut weights: Vec<u32> = Vec::with_capacity(weights_f.len());
    let mut acc: i64 = 0;
    for wf in &weights_f {
        let q = ((wf / sum) * 65536.0).round().clamp(0.0, 65536.0) as i64;
        weights.push(q as u32);
        acc += q;
    }
    // Dump rounding residue into the center tap so the kernel stays unit-sum.
    let delta = 65536 - acc;
    let mid = weights.len() / 2;
    weights[mid] = (i64::from(weights[mid]) + delta).clamp(0, 65536) as u32;
    weights
}

fn horizontal_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    for y in 0..height as i32 {
        for x in 0..w {
            let mut acc = [0u64; 3];
            for (ki, &kw) in k.iter().enumerate() {
                let sx = (x + ki as i32 - radius).clamp(0, w - 1);
                let idx = ((y * w + sx) as usize) * 3;
                for c in 0..3 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 3;
            for c in 0..3 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn vertical_pass(src: &[u8], dst: &mut [u8], width: u32, height: u32, k: &[u32]) {
    let radius = (k.len() / 2) as i32;
    let w = width as i32;
    let h = height as i32;
    for y in 0..h {
        for x in 0..w {
            let mut acc = [0u64; 3];
            for (ki, &kw) in k.iter().enumerate() {
                let sy = (y + ki as i32 - radius).clamp(0, h - 1);
                let idx = ((sy * w + x) as usize) * 3;
                for c in 0..3 {
                    acc[c] += u64::from(kw) * u64::from(src[idx + c]);
                }
            }
            let out_idx = ((y * w + x) as usize) * 3;
            for c in 0..3 {
                dst[out_idx + c] = q16_to_u8(acc[c]);
            }
        }
    }
}

fn q16_to_u8(acc: u64) -> u8 {
    (((acc + 32768) >> 16).min(255)) as u8
}
