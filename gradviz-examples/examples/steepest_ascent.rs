//! Walks the function catalog at one point and prints each evaluation,
//! demonstrating `inspect` as the way to watch a pipeline run.

use gradviz_components::{
    scene::{Scene, SceneInput},
    surface::{FunctionId, Point2D},
};
use gradviz_core::Component;

fn main() {
    let point = Point2D::new(1.0, 1.0);

    let scene = Scene::default().inspect(
        |input: &SceneInput| {
            println!(
                "--- {} at ({}, {})",
                input.function, input.point.x, input.point.y
            );
        },
        |output| {
            println!("    {}", output.evaluation.formula);
            println!("    z = {:.4}", output.evaluation.z);
            println!(
                "    ∇f = ({:.4}, {:.4}), |∇f| = {:.4}",
                output.evaluation.dz_dx, output.evaluation.dz_dy, output.summary.magnitude
            );
            match output.summary.direction {
                Some([ux, uy]) => println!("    steepest ascent along ({ux:.4}, {uy:.4})"),
                None => println!("    critical point, no ascent direction"),
            }
        },
    );

    for function in FunctionId::ALL {
        scene.call(SceneInput { function, point }).unwrap();
    }
}
