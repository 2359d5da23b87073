use gradviz_components::sampler::GridConfig;
use gradviz_plot::SurfaceApp;

fn main() {
    let app = SurfaceApp::new(GridConfig::default());

    app.run("Gradient & Steepest Ascent").unwrap();
}
