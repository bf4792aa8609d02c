mod app;
mod feed;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Records feed location: an http(s) URL or a local JSON file.
    #[arg(long, default_value = "interfaces.json")]
    feed: String,

    /// Minutes between automatic feed refreshes.
    #[arg(long, default_value_t = 10)]
    refresh_minutes: u64,
}

fn main() -> eframe::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let options = eframe::NativeOptions {
        viewport: eframe::egui::ViewportBuilder::default().with_inner_size([1440.0, 920.0]),
        ..Default::default()
    };

    eframe::run_native(
        "interlink",
        options,
        Box::new(move |cc| {
            Ok(Box::new(app::LinkViewerApp::new(
                cc,
                &args.feed,
                args.refresh_minutes,
            )))
        }),
    )
}
