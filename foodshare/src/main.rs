use clap::Parser;
use foodshare::app::FoodshareApp;

fn main() {
    env_logger::init();
    let args = FoodshareApp::parse();
    match args.run() {
        Ok(_) => log::info!("finished."),
        Err(e) => {
            log::error!("failed running foodshare: {e}");
            std::process::exit(1);
        }
    }
}
