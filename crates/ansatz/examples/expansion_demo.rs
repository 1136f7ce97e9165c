//! Laurent expansion and algebraic-number inversion.
//!
//! Run with: cargo run --example expansion_demo

use ansatz::prelude::*;

fn q(n: i64) -> Q {
    Q::from_integer(n)
}

fn poly(coeffs: &[i64]) -> Polynomial<Q> {
    Polynomial::from_coeffs(&q(0), coeffs.iter().map(|&n| q(n)))
}

fn main() -> Result<(), AlgebraError> {
    let p1 = poly(&[-2, 0, 1]);
    let q1 = poly(&[2, 1, -4, 1]);
    let p2 = poly(&[1, 1]);

    let r1 = RationalFunction::new(p1.clone(), q1)?;
    println!("r1 = {r1}");

    let series = r1.to_laurent_series(&q(1))?;
    println!("r1 about x = 1: {series}");
    println!("  valuation {}, residue {}", series.valuation(), series.residue());

    let num = AlgebraicNumber::new(p2, p1)?;
    let inv = num.inv()?;
    println!("({num})^-1 = {inv}");
    println!("s: {}", inv.mul(&num));

    Ok(())
}
