//! Placement arithmetic for the nth roots of unity.
//!
//! Everything a scene draws is derived here: points on the unit circle,
//! angle labels, primitivity, and the classical sum/product identities.
//! Keeping the math separate from the drawing code lets tests check the
//! identities numerically without rendering anything.

use std::f64::consts::PI;

/// A point in the complex plane, `re + im·i`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub re: f64,
    pub im: f64,
}

impl Point {
    pub fn modulus(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// One of the nth roots of unity: `e^(2πik/n)`.
#[derive(Debug, Clone, Copy)]
pub struct Root {
    pub n: u32,
    pub k: u32,
    pub point: Point,
}

impl Root {
    /// Angle from the positive real axis, in radians, in `[0, 2π)`.
    pub fn angle(&self) -> f64 {
        2.0 * PI * f64::from(self.k) / f64::from(self.n)
    }

    /// A root generates all n roots by repeated multiplication exactly
    /// when its index is coprime with n.
    pub fn is_primitive(&self) -> bool {
        gcd(self.k, self.n) == 1
    }

    /// The exponent label `2πk/n` as display text.
    pub fn angle_label(&self) -> String {
        match self.k {
            0 => "0".to_string(),
            _ => format!("2π·{}/{}", self.k, self.n),
        }
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}

/// The point `e^(2πik/n)` on the unit circle.
pub fn root_point(n: u32, k: u32) -> Point {
    let theta = 2.0 * PI * f64::from(k) / f64::from(n);
    Point {
        re: theta.cos(),
        im: theta.sin(),
    }
}

/// All nth roots of unity, k = 0..n, counter-clockwise from 1 + 0i.
pub fn nth_roots(n: u32) -> Vec<Root> {
    (0..n)
        .map(|k| Root {
            n,
            k,
            point: root_point(n, k),
        })
        .collect()
}

/// The primitive nth roots: indices coprime with n. There are φ(n) of them.
pub fn primitive_roots(n: u32) -> Vec<Root> {
    nth_roots(n).into_iter().filter(Root::is_primitive).collect()
}

/// Euler's totient, by trial over the indices. Scene-scale n only.
pub fn totient(n: u32) -> u32 {
    (1..=n).filter(|&k| gcd(k, n) == 1).count() as u32
}

/// Sum of all nth roots. Exactly 1 for n = 1, numerically 0 otherwise.
pub fn roots_sum(n: u32) -> Point {
    let (re, im) = nth_roots(n)
        .iter()
        .fold((0.0, 0.0), |(re, im), r| (re + r.point.re, im + r.point.im));
    Point { re, im }
}

/// Product of all nth roots: `(-1)^(n+1)`, so 1 for odd n, -1 for even n.
pub fn roots_product(n: u32) -> Point {
    nth_roots(n)
        .iter()
        .fold(Point { re: 1.0, im: 0.0 }, |acc, r| Point {
            re: acc.re * r.point.re - acc.im * r.point.im,
            im: acc.re * r.point.im + acc.im * r.point.re,
        })
}
