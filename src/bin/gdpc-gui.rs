/*!
 * GUI dashboard for gdp-compare - GDP history of two countries side by side
 *
 * A cross-platform desktop window providing:
 * - Two country selectors (the same country can't be picked twice)
 * - A line chart that reloads whenever the selection changes
 * - CSV export and chart export of the current data
 *
 * Platform support: Windows, macOS, Linux
 */

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};
use gdp_compare::dashboard::{LoadOutcome, LoadTicket, run_load};
use gdp_compare::format::format_value;
use gdp_compare::models::{COUNTRIES, Slot};
use gdp_compare::{Client, Config, CountryPair, Dashboard, storage, viz};
use std::path::PathBuf;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread;

const SLOT_COLORS: [egui::Color32; 2] = [
    egui::Color32::from_rgb(59, 130, 246),
    egui::Color32::from_rgb(16, 185, 129),
];

fn main() -> Result<(), eframe::Error> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1100.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("GDP Comparison - gdp-compare"),
        ..Default::default()
    };

    eframe::run_native(
        "GDP Comparison",
        options,
        Box::new(|_cc| Ok(Box::new(GdpApp::new(Config::from_env())))),
    )
}

/// Main application state
struct GdpApp {
    dashboard: Dashboard,
    client: Option<Arc<Client>>,

    // UI state
    notice: Option<String>,
    status_message: String,
    error_message: String,
    output_dir: PathBuf,

    // Background loads; every message carries the ticket it was issued for.
    sender: mpsc::Sender<(LoadTicket, LoadOutcome)>,
    receiver: mpsc::Receiver<(LoadTicket, LoadOutcome)>,
}

impl GdpApp {
    fn new(config: Config) -> Self {
        let (sender, receiver) = mpsc::channel();
        let mut error_message = String::new();
        let client = match Client::new(config) {
            Ok(c) => Some(Arc::new(c)),
            Err(e) => {
                log::error!("could not create API client: {e}");
                error_message = format!("Could not create API client: {e}");
                None
            }
        };

        let mut app = Self {
            dashboard: Dashboard::new(CountryPair::default()),
            client,
            notice: None,
            status_message: String::new(),
            error_message,
            output_dir: dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")),
            sender,
            receiver,
        };
        let ticket = app.dashboard.begin_load();
        app.spawn_load(ticket);
        app
    }

    fn spawn_load(&self, ticket: LoadTicket) {
        let sender = self.sender.clone();
        match &self.client {
            Some(client) => {
                let client = Arc::clone(client);
                thread::spawn(move || {
                    let outcome = run_load(client.as_ref(), &ticket);
                    let _ = sender.send((ticket, outcome));
                });
            }
            None => {
                let _ = sender.send((ticket, LoadOutcome::Failed("no API client".to_string())));
            }
        }
    }

    fn handle_selection(&mut self, slot: Slot, country: &str) {
        match self.dashboard.select(slot, country) {
            Ok(Some(ticket)) => {
                self.status_message.clear();
                self.spawn_load(ticket);
            }
            Ok(None) => {}
            Err(e) => self.notice = Some(e.to_string()),
        }
    }

    fn check_load_results(&mut self) {
        while let Ok((ticket, outcome)) = self.receiver.try_recv() {
            self.dashboard.complete(&ticket, outcome);
        }
    }

    fn country_selector(&mut self, ui: &mut egui::Ui, slot: Slot, label: &str) {
        let pair = self.dashboard.pair().clone();
        let mut picked: Option<&'static str> = None;
        ui.horizontal(|ui| {
            ui.label(label);
            egui::ComboBox::from_id_salt(label)
                .width(180.0)
                .selected_text(pair.get(slot))
                .show_ui(ui, |ui| {
                    for country in COUNTRIES {
                        let enabled = pair.is_selectable(slot, country);
                        let selected = pair.get(slot) == country;
                        if ui
                            .add_enabled(enabled, egui::SelectableLabel::new(selected, country))
                            .clicked()
                        {
                            picked = Some(country);
                        }
                    }
                });
        });
        if let Some(country) = picked {
            self.handle_selection(slot, country);
        }
    }

    fn export_csv(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.output_dir)
            .set_file_name("gdp_data.csv")
            .add_filter("CSV", &["csv"])
            .save_file()
        else {
            return;
        };
        match storage::save_csv(self.dashboard.rows(), self.dashboard.pair(), &path) {
            Ok(()) => self.status_message = format!("Saved {}", path.display()),
            Err(e) => self.error_message = format!("Failed to save CSV: {e}"),
        }
    }

    fn export_chart(&mut self) {
        let Some(path) = rfd::FileDialog::new()
            .set_directory(&self.output_dir)
            .set_file_name("gdp_chart.png")
            .add_filter("PNG", &["png"])
            .add_filter("SVG", &["svg"])
            .save_file()
        else {
            return;
        };
        match viz::plot_rows(self.dashboard.rows(), self.dashboard.pair(), &path, 1200, 700) {
            Ok(()) => self.status_message = format!("Saved {}", path.display()),
            Err(e) => self.error_message = format!("Failed to create chart: {e}"),
        }
    }

    fn chart(&self, ui: &mut egui::Ui) {
        let rows = self.dashboard.rows();
        let dates = self.dashboard.date_labels().to_vec();
        let axis_dates = dates.clone();

        Plot::new("gdp_chart")
            .height(ui.available_height().max(300.0))
            .legend(Legend::default().position(egui_plot::Corner::LeftTop))
            .y_axis_label("GDP")
            .allow_scroll(false)
            .x_axis_formatter(move |mark, _range| {
                let i = mark.value.round();
                if i < 0.0 || (mark.value - i).abs() > 1e-6 {
                    return String::new();
                }
                axis_dates.get(i as usize).cloned().unwrap_or_default()
            })
            .label_formatter(move |name, value| {
                let i = value.x.round();
                let date = if i >= 0.0 {
                    dates.get(i as usize).cloned().unwrap_or_default()
                } else {
                    String::new()
                };
                if name.is_empty() {
                    date
                } else {
                    format!("{date}\n{name}: {}", format_value(value.y, "en"))
                }
            })
            .show(ui, |plot_ui| {
                for (idx, country) in self.dashboard.pair().as_slice().iter().enumerate() {
                    let points: PlotPoints = viz::series_points(rows, country)
                        .into_iter()
                        .map(|(x, y)| [x, y])
                        .collect();
                    plot_ui.line(
                        Line::new(points)
                            .color(SLOT_COLORS[idx % SLOT_COLORS.len()])
                            .width(2.0)
                            .name(format!("{country} GDP")),
                    );
                }
            });
    }
}

impl eframe::App for GdpApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.check_load_results();

        // Keep polling the channel while a load is in flight.
        if self.dashboard.is_loading() {
            ctx.request_repaint();
        }

        if let Some(msg) = self.notice.clone() {
            egui::Window::new("Notice")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(msg);
                    ui.add_space(8.0);
                    if ui.button("OK").clicked() {
                        self.notice = None;
                    }
                });
        }
        let blocked = self.notice.is_some();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_enabled_ui(!blocked, |ui| {
                ui.heading("GDP Comparison");
                ui.add_space(10.0);

                ui.group(|ui| {
                    ui.horizontal(|ui| {
                        self.country_selector(ui, Slot::First, "Country 1");
                        ui.add_space(24.0);
                        self.country_selector(ui, Slot::Second, "Country 2");

                        if self.dashboard.is_loading() {
                            ui.spinner();
                        }
                    });
                });

                ui.add_space(10.0);

                let has_rows = !self.dashboard.rows().is_empty();
                ui.horizontal(|ui| {
                    if ui.add_enabled(has_rows, egui::Button::new("Export CSV")).clicked() {
                        self.export_csv();
                    }
                    if ui.add_enabled(has_rows, egui::Button::new("Save chart")).clicked() {
                        self.export_chart();
                    }
                });

                if !self.status_message.is_empty() {
                    ui.colored_label(egui::Color32::DARK_GREEN, &self.status_message);
                }
                if !self.error_message.is_empty() {
                    ui.colored_label(egui::Color32::RED, &self.error_message);
                }

                ui.add_space(10.0);

                match self.dashboard.placeholder() {
                    Some(text) => {
                        ui.vertical_centered(|ui| {
                            ui.add_space(200.0);
                            ui.weak(text);
                        });
                    }
                    None => self.chart(ui),
                }
            });
        });
    }
}
