//! Interactive viewer: renders the simulation and forwards every state
//! change through the `Simulation` entry points.

use chrono::{Days, Local, NaiveDate};
use eframe::egui;
use notify::{Event, RecommendedWatcher, Watcher};
use orrery_core::{parse_scenario, BodySpec, Simulation, StepClock, TraceWindow, AU};
use std::path::{Path, PathBuf};
use std::sync::mpsc;
use std::time::Instant;

/// Initial scale in px per metre: the whole solar system fits the canvas.
const INITIAL_ZOOM: f64 = 1e-10;
const MIN_ZOOM: f64 = 1e-13;
const MAX_ZOOM: f64 = 1e-2;
/// Multiplicative zoom change per scroll point.
const ZOOM_RATE: f64 = 0.002;
/// Bodies stay visible as dots however far out the camera sits.
const MIN_BODY_RADIUS: f32 = 2.0;
/// Slider positions above 1000 mean an unbounded trace window.
const TRACE_SLIDER_MAX: u32 = 1010;

pub struct ViewerApp {
    specs: Vec<BodySpec>,
    sim: Simulation,
    clock: StepClock,
    last_poll: Instant,
    start_date: NaiveDate,
    // Camera: screen = rect.center + offset + world * zoom.
    zoom: f64,
    offset: egui::Vec2,
    trace_slider: u32,
    scenario_path: Option<PathBuf>,
    #[allow(dead_code)] // Kept alive to maintain file watching
    file_watcher: Option<RecommendedWatcher>,
    file_receiver: Option<mpsc::Receiver<notify::Result<Event>>>,
    needs_reload: bool,
    last_load_error: Option<String>,
}

impl ViewerApp {
    pub fn new(
        specs: Vec<BodySpec>,
        sim: Simulation,
        scenario_path: Option<PathBuf>,
        _cc: &eframe::CreationContext<'_>,
    ) -> Self {
        let (file_watcher, file_receiver) = match &scenario_path {
            Some(path) => spawn_watcher(path),
            None => (None, None),
        };

        Self {
            specs,
            sim,
            clock: StepClock::new(),
            last_poll: Instant::now(),
            start_date: Local::now().date_naive(),
            zoom: INITIAL_ZOOM,
            offset: egui::Vec2::ZERO,
            trace_slider: TRACE_SLIDER_MAX,
            scenario_path,
            file_watcher,
            file_receiver,
            needs_reload: false,
            last_load_error: None,
        }
    }

    /// Rebuild the simulation from the loaded specs. The camera survives a
    /// reset; everything else returns to its defaults.
    fn reset(&mut self) {
        match Simulation::new(&self.specs) {
            Ok(sim) => {
                self.sim = sim;
                self.clock = StepClock::new();
                self.start_date = Local::now().date_naive();
                self.trace_slider = TRACE_SLIDER_MAX;
                self.last_load_error = None;
            }
            Err(e) => {
                self.last_load_error = Some(e.to_string());
            }
        }
    }

    fn reload_scenario(&mut self) {
        let path = match &self.scenario_path {
            Some(path) => path.clone(),
            None => return,
        };
        let reloaded = std::fs::read_to_string(&path)
            .map_err(|e| format!("{}: {}", path.display(), e))
            .and_then(|source| {
                parse_scenario(&source).map_err(|e| format!("{}: {}", path.display(), e))
            });
        match reloaded {
            Ok(specs) => {
                self.specs = specs;
                self.reset();
            }
            Err(message) => self.last_load_error = Some(message),
        }
    }

    fn check_file_changes(&mut self) {
        if let Some(rx) = &self.file_receiver {
            while let Ok(event) = rx.try_recv() {
                match event {
                    // Only one file is watched, so any modify event is ours.
                    Ok(Event {
                        kind: notify::EventKind::Modify(_),
                        ..
                    }) => self.needs_reload = true,
                    Ok(_) => {}
                    Err(e) => self.last_load_error = Some(format!("watch error: {}", e)),
                }
            }
        }
        if self.needs_reload {
            self.needs_reload = false;
            self.reload_scenario();
        }
    }

    fn controls(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let pause_label = if self.sim.is_paused() {
                "▶ Play"
            } else {
                "⏸ Pause"
            };
            if ui.button(pause_label).clicked() {
                self.sim.toggle_paused();
            }
            if ui.button("⏮ Reset").clicked() {
                self.reset();
            }
            if ui.button("⏭ Step").clicked() {
                self.sim.step_once();
            }

            ui.separator();

            ui.label("Speed:");
            let mut multiplier = self.sim.time_multiplier();
            if ui
                .add(egui::Slider::new(&mut multiplier, 0.0..=10.0).step_by(0.1))
                .changed()
            {
                self.sim.set_time_multiplier(multiplier);
            }
            if multiplier <= 0.0 {
                ui.label("stopped");
            } else {
                ui.label(format!("{:.0} days/sec", multiplier * 25.0));
            }

            ui.separator();
            ui.label(format!("Day {}", self.sim.elapsed_days()));
        });
    }

    fn settings_panel(&mut self, ui: &mut egui::Ui) {
        ui.heading("Simulation");
        ui.add_space(4.0);

        ui.label("Trace length (days):");
        let slider = egui::Slider::new(&mut self.trace_slider, 0..=TRACE_SLIDER_MAX)
            .step_by(10.0)
            .custom_formatter(|v, _| {
                if v <= 0.0 {
                    "hidden".to_string()
                } else if v > 1000.0 {
                    "all".to_string()
                } else {
                    format!("{:.0}", v)
                }
            });
        if ui.add(slider).changed() {
            let window = if self.trace_slider > 1000 {
                TraceWindow::Unbounded
            } else {
                TraceWindow::Last(self.trace_slider as usize)
            };
            self.sim.set_trace_window(window);
        }

        ui.add_space(8.0);
        ui.separator();
        ui.heading("Bodies");

        let names: Vec<String> = self
            .sim
            .bodies()
            .iter()
            .map(|b| b.name().to_string())
            .collect();
        for name in &names {
            egui::CollapsingHeader::new(name).show(ui, |ui| {
                let mut multiplier = self.sim.mass_multiplier(name).unwrap_or(1.0);
                if ui
                    .add(
                        egui::Slider::new(&mut multiplier, 0.1..=10.0)
                            .step_by(0.1)
                            .text("mass ×"),
                    )
                    .changed()
                {
                    if let Err(e) = self.sim.set_mass_multiplier(name, multiplier) {
                        self.last_load_error = Some(e.to_string());
                    }
                }

                let mut show = self
                    .sim
                    .appearances()
                    .iter()
                    .find(|a| &a.name == name)
                    .map(|a| a.show_trace)
                    .unwrap_or(false);
                if ui.checkbox(&mut show, "show trace").changed() {
                    if let Err(e) = self.sim.set_show_trace(name, show) {
                        self.last_load_error = Some(e.to_string());
                    }
                }

                if let Some(body) = self.sim.body(name) {
                    ui.label(format!("mass {:.3e} kg", body.mass()));
                    ui.label(format!("r {:.3} au", body.position().length() / AU));
                    ui.label(format!("v {:.2} km/s", body.velocity().length() / 1000.0));
                }
            });
        }

        if let Some(error) = &self.last_load_error {
            ui.add_space(8.0);
            ui.separator();
            ui.colored_label(egui::Color32::RED, format!("Error: {}", error));
        }
    }

    fn canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let rect = response.rect;
        painter.rect_filled(rect, 0.0, egui::Color32::BLACK);

        if response.dragged() {
            self.offset += response.drag_delta();
        }

        // Zoom about the cursor: the world point under the pointer stays
        // fixed while the scale changes.
        if let Some(pointer) = response.hover_pos() {
            let scroll = ui.input(|i| i.raw_scroll_delta.y);
            if scroll != 0.0 {
                let center = rect.center() + self.offset;
                let world_x = (pointer.x - center.x) as f64 / self.zoom;
                let world_y = (pointer.y - center.y) as f64 / self.zoom;
                let new_zoom =
                    (self.zoom * (1.0 + scroll as f64 * ZOOM_RATE)).clamp(MIN_ZOOM, MAX_ZOOM);
                self.offset.x -= (world_x * (new_zoom - self.zoom)) as f32;
                self.offset.y -= (world_y * (new_zoom - self.zoom)) as f32;
                self.zoom = new_zoom;
            }
        }

        let zoom = self.zoom;
        let center = rect.center() + self.offset;
        let to_screen =
            |x: f64, y: f64| egui::pos2(center.x + (x * zoom) as f32, center.y + (y * zoom) as f32);

        // Traces first so bodies draw on top of them.
        let window = self.sim.trace_window();
        for (body, appearance) in self.sim.bodies().iter().zip(self.sim.appearances()) {
            if !appearance.show_trace {
                continue;
            }
            let points: Vec<egui::Pos2> = body
                .trace()
                .window(window)
                .iter()
                .map(|p| to_screen(p.x, p.y))
                .collect();
            if points.len() >= 2 {
                let color = egui::Color32::from_rgb(
                    appearance.color[0],
                    appearance.color[1],
                    appearance.color[2],
                );
                painter.add(egui::Shape::line(points, egui::Stroke::new(0.5, color)));
            }
        }

        for (body, appearance) in self.sim.bodies().iter().zip(self.sim.appearances()) {
            let color = egui::Color32::from_rgb(
                appearance.color[0],
                appearance.color[1],
                appearance.color[2],
            );
            let screen = to_screen(body.position().x, body.position().y);
            let radius = ((appearance.size * zoom) as f32).max(MIN_BODY_RADIUS);
            painter.circle_filled(screen, radius, color);
            painter.text(
                egui::pos2(screen.x, screen.y - radius - 4.0),
                egui::Align2::CENTER_BOTTOM,
                body.name(),
                egui::FontId::proportional(12.0),
                egui::Color32::WHITE,
            );
        }

        // Simulated date, one day per completed step.
        let date = self
            .start_date
            .checked_add_days(Days::new(self.sim.elapsed_days()))
            .unwrap_or(self.start_date);
        painter.text(
            rect.left_top() + egui::vec2(12.0, 10.0),
            egui::Align2::LEFT_TOP,
            date.format("%d/%m/%Y").to_string(),
            egui::FontId::proportional(16.0),
            egui::Color32::WHITE,
        );
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_file_changes();

        // Convert wall time into due steps; paused or stopped runs get
        // nothing and accumulate nothing.
        let now = Instant::now();
        let elapsed = now - self.last_poll;
        self.last_poll = now;
        let due = self
            .clock
            .tick(elapsed, self.sim.time_multiplier(), self.sim.is_paused());
        for _ in 0..due {
            self.sim.advance();
        }

        egui::TopBottomPanel::top("controls").show(ctx, |ui| self.controls(ui));
        egui::SidePanel::right("settings")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| self.settings_panel(ui));
            });
        egui::CentralPanel::default().show(ctx, |ui| self.canvas(ui));

        // Keep frames coming while the simulation is running; paused or
        // stopped viewers repaint only on input.
        if !self.sim.is_paused() && self.sim.time_multiplier() > 0.0 {
            ctx.request_repaint();
        }
    }
}

fn spawn_watcher(
    path: &Path,
) -> (
    Option<RecommendedWatcher>,
    Option<mpsc::Receiver<notify::Result<Event>>>,
) {
    let (tx, rx) = mpsc::channel();
    let mut watcher = match notify::recommended_watcher(move |res| {
        // Silently ignore send failures - they can happen during shutdown
        let _ = tx.send(res);
    }) {
        Ok(watcher) => watcher,
        Err(_) => return (None, None),
    };
    // Live reload is optional; the viewer works without it.
    if watcher
        .watch(path, notify::RecursiveMode::NonRecursive)
        .is_err()
    {
        return (None, None);
    }
    (Some(watcher), Some(rx))
}
