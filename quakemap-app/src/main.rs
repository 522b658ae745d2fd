use quakemap::{
    core::map::{Map, MapOptions},
    data::fetch::{FeedBundle, FeedClient},
    layers::{base::Layer, plates::PlateBoundaryLayer, quakes::EarthquakeLayer, tile::TileLayer},
    ui::widget::MapWidget,
    MapConfig, Point,
};
use std::sync::mpsc;

/// Weekly earthquake map viewer
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_title("Earthquake Map - Past 7 Days"),
        ..Default::default()
    };

    eframe::run_native(
        "quakemap-app",
        options,
        Box::new(|cc| Box::new(QuakeMapApp::new(cc))),
    )?;

    Ok(())
}

struct QuakeMapApp {
    map: Map,
    widget: MapWidget,
    feeds: mpsc::Receiver<FeedBundle>,
}

impl QuakeMapApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = MapConfig::default();

        let mut map = Map::new(MapOptions {
            center: config.center,
            zoom: config.zoom,
            size: Point::new(1200.0, 800.0),
            ..Default::default()
        });

        // Satellite is the default base layer, streets starts hidden
        map.add_layer(Box::new(TileLayer::usgs_imagery("satellite", "Satellite")));
        let mut streets = TileLayer::openstreetmap("streets", "Streets");
        streets.set_visible(false);
        map.add_layer(Box::new(streets));

        map.add_layer(Box::new(PlateBoundaryLayer::new(Vec::new())));
        map.add_layer(Box::new(EarthquakeLayer::new(Vec::new())));
        map.process_events();

        let (tx, rx) = mpsc::channel();
        let ctx = cc.egui_ctx.clone();
        tokio::spawn(async move {
            let bundle = FeedClient::new(config).fetch_all().await;
            if tx.send(bundle).is_ok() {
                ctx.request_repaint();
            }
        });

        Self {
            map,
            widget: MapWidget::new(),
            feeds: rx,
        }
    }

    fn apply_feeds(&mut self, bundle: FeedBundle) {
        match bundle.earthquakes {
            Ok(quakes) => {
                self.map
                    .layers
                    .with_layer_mut(EarthquakeLayer::ID, |layer| {
                        if let Some(layer) = layer.as_any_mut().downcast_mut::<EarthquakeLayer>() {
                            layer.set_quakes(quakes);
                        }
                    });
            }
            Err(err) => log::error!("earthquake feed failed: {}", err),
        }

        match bundle.plates {
            Ok(plates) => {
                self.map
                    .layers
                    .with_layer_mut(PlateBoundaryLayer::ID, |layer| {
                        if let Some(layer) =
                            layer.as_any_mut().downcast_mut::<PlateBoundaryLayer>()
                        {
                            layer.set_boundaries(plates);
                        }
                    });
            }
            Err(err) => log::error!("plate boundary feed failed: {}", err),
        }
    }
}

impl eframe::App for QuakeMapApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        while let Ok(bundle) = self.feeds.try_recv() {
            self.apply_feeds(bundle);
        }

        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                self.widget.show(ui, &mut self.map);
            });
    }
}
