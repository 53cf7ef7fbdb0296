//! Extracts the outer and inner walls of a dense spherical shell of points.
//!
//! ```text
//! cargo run --release --example density_shell
//! ```

use pointcloud_isosurface::{
    CoordinateSpace, IsoRange, IsosurfaceConfig, IsosurfaceEngine, Result, Value,
};

/// Uniform background noise plus a thick shell of extra points between radii 6 and 9.
fn shell_cloud() -> Vec<[Value; 3]> {
    let mut points = Vec::new();
    let step = 0.25;
    let n = (24. / step) as usize;
    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                let p = [
                    -12. + i as Value * step,
                    -12. + j as Value * step,
                    -12. + k as Value * step,
                ];
                let r = p.iter().map(|v| v * v).sum::<Value>().sqrt();
                // one background point per 8 lattice sites
                if (i + j + k) % 8 == 0 {
                    points.push(p);
                }
                if (6. ..9.).contains(&r) {
                    points.push(p);
                }
            }
        }
    }
    points
}

fn main() -> Result<()> {
    let points = shell_cloud();
    println!("Shell Example: {} points", points.len());

    let engine = IsosurfaceEngine::new(
        IsosurfaceConfig::default()
            .with_bin(1.)
            .with_space(CoordinateSpace::World),
    );

    // the shell holds 64 points per unit voxel, the background about 8
    for (lower, upper) in [(32., 1_000.), (4., 32.)] {
        let mesh = engine.run(ndarray::aview2(&points), IsoRange::new(lower, upper)?)?;
        println!(
            "band [{lower}, {upper}): {} vertices, {} faces",
            mesh.vertices.len(),
            mesh.faces.len()
        );
    }

    Ok(())
}
