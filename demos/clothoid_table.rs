//! Prints points along a clothoid and recovers its parameter from a chord.
//!
//! Run with `RUST_LOG=geonum=debug` to see the root finder converge.

use geonum::geometry::clothoid::{
    clotho, clotho_l, clotho_radius, clotho_tangent, max_length, solve_param, solve_param_approx,
};
use geonum::math::PointOps;
use geonum::numeric::SolverOptions;

const A: f64 = 5.0;
const STEPS: u32 = 10;

fn main() -> geonum::Result<()> {
    // Default: WARN for everything, INFO for geonum.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("clothoid_table=info".parse().unwrap_or_default())
        .add_directive("geonum=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    println!("clothoid a = {A}");
    println!("{:>8} {:>12} {:>12} {:>12} {:>10}", "s", "x", "y", "radius", "tangent");
    let length = max_length(A) * 0.25;
    for i in 0..=STEPS {
        let s = length * f64::from(i) / f64::from(STEPS);
        let p = clotho(s, false, A);
        let r = clotho_radius(s, false, A);
        let t = clotho_tangent(s, false, A).to_degrees();
        println!("{s:>8.3} {:>12.6} {:>12.6} {r:>12.4} {t:>10.3}", p.x, p.y);
    }

    let (r1, r2) = (10.0, 4.0);
    let arc = clotho_l(r2, false, A) - clotho_l(r1, false, A);
    let chord = clotho(clotho_l(r1, false, A), false, A)
        .distance(&clotho(clotho_l(r2, false, A), false, A));
    println!();
    println!("radius {r1} -> {r2}: arc {arc:.6}, chord {chord:.6}");
    println!("a from arc length: {:.9}", solve_param(arc, r1, r2));
    println!(
        "a from chord:      {:.9}",
        solve_param_approx(chord, r1, r2, &SolverOptions::default())?
    );
    Ok(())
}
