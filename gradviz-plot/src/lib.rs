mod colormap;

use eframe::egui;
use egui_plot::{Arrows, Legend, Plot, PlotImage, PlotPoint, Points};
use gradviz_components::{
    sampler::GridConfig,
    scene::{Scene, SceneInput, SceneOutput},
    surface::{FunctionId, Point2D},
};
use gradviz_core::Component;

/// Half-step scale for the on-plot ascent arrow, in domain units.
const ARROW_LENGTH: f64 = 0.5;

/// A runnable egui application for exploring surface gradients.
///
/// Shows the sampled surface as a colormapped top-down view with a marker at
/// the evaluation point and an arrow along the steepest-ascent direction.
/// The arrow is the horizontal-plane projection of the gradient, matching
/// the textual summary in the side panel.
///
/// Every control change runs one full [`Scene`] cycle. If a cycle fails the
/// previous result stays on screen, so a bad input never blanks the view.
pub struct SurfaceApp {
    scene: Scene,
    function: FunctionId,
    x: f64,
    y: f64,
    current: Option<SceneOutput>,
    texture: Option<(FunctionId, egui::TextureHandle)>,
}

impl SurfaceApp {
    #[must_use]
    pub fn new(config: GridConfig) -> Self {
        Self {
            scene: Scene::new(config),
            function: FunctionId::Peak,
            x: 0.5,
            y: 0.5,
            current: None,
            texture: None,
        }
    }

    #[allow(clippy::missing_errors_doc)]
    pub fn run(self, name: &str) -> Result<(), eframe::Error> {
        eframe::run_native(
            name,
            eframe::NativeOptions::default(),
            Box::new(|_cc| Ok(Box::new(self))),
        )
    }

    fn controls(&mut self, ui: &mut egui::Ui) -> bool {
        let mut changed = false;

        egui::ComboBox::from_label("Function")
            .selected_text(self.function.display_name())
            .show_ui(ui, |ui| {
                for id in FunctionId::ALL {
                    changed |= ui
                        .selectable_value(&mut self.function, id, id.display_name())
                        .changed();
                }
            });

        changed |= ui
            .add(egui::Slider::new(&mut self.x, -2.0..=2.0).step_by(0.1).text("x"))
            .changed();
        changed |= ui
            .add(egui::Slider::new(&mut self.y, -2.0..=2.0).step_by(0.1).text("y"))
            .changed();

        changed
    }

    fn summary_panel(ui: &mut egui::Ui, output: &SceneOutput) {
        ui.separator();
        ui.label(egui::RichText::new(output.evaluation.formula).strong());
        ui.add_space(4.0);
        ui.monospace(format!("z     = {:.4}", output.evaluation.z));
        ui.monospace(format!("∂f/∂x = {:.4}", output.evaluation.dz_dx));
        ui.monospace(format!("∂f/∂y = {:.4}", output.evaluation.dz_dy));
        ui.monospace(format!("|∇f|  = {:.4}", output.summary.magnitude));

        if output.summary.is_critical {
            ui.add_space(4.0);
            ui.label("Critical point: the gradient vanishes here.");
        }
    }

    fn recompute(&mut self, ctx: &egui::Context) {
        let input = SceneInput {
            function: self.function,
            point: Point2D::new(self.x, self.y),
        };

        // On failure the previous output stays on screen.
        if let Ok(output) = self.scene.call(input) {
            let fresh = !matches!(&self.texture, Some((id, _)) if *id == input.function);
            if fresh {
                let image = colormap::grid_image(&output.grid);
                let handle = ctx.load_texture("surface", image, egui::TextureOptions::LINEAR);
                self.texture = Some((input.function, handle));
            }
            self.current = Some(output);
        }
    }
}

impl eframe::App for SurfaceApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut dirty = self.current.is_none();

        egui::SidePanel::left("controls").show(ctx, |ui| {
            ui.heading("Gradient & Steepest Ascent");
            dirty |= self.controls(ui);

            if let Some(output) = &self.current {
                Self::summary_panel(ui, output);
            }
        });

        if dirty {
            self.recompute(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            let (Some(output), Some((_, texture))) = (&self.current, &self.texture) else {
                return;
            };

            let (x_min, x_max) = output.grid.x_bounds();
            let (y_min, y_max) = output.grid.y_bounds();
            let center = PlotPoint::new((x_min + x_max) / 2.0, (y_min + y_max) / 2.0);
            let size = egui::vec2((x_max - x_min) as f32, (y_max - y_min) as f32);

            Plot::new("surface")
                .data_aspect(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(texture, center, size).name("Surface height"));

                    plot_ui.points(
                        Points::new(vec![[self.x, self.y]])
                            .radius(5.0)
                            .color(egui::Color32::RED)
                            .name("Current point"),
                    );

                    if let Some([ux, uy]) = output.summary.direction {
                        let tip = [self.x + ARROW_LENGTH * ux, self.y + ARROW_LENGTH * uy];
                        plot_ui.arrows(
                            Arrows::new(vec![[self.x, self.y]], vec![tip])
                                .color(egui::Color32::RED)
                                .name("Steepest ascent"),
                        );
                    }
                });
        });
    }
}
