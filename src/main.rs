use std::io;
use std::process;

use dotenv::dotenv;
use periplus::external::google_maps::GoogleMaps;
use periplus::input::Collector;
use periplus::trip::plan_trip;

#[tokio::main]
async fn main() {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let stdin = io::stdin();
    let mut collector = Collector::new(stdin.lock(), io::stdout());

    let itinerary = match collector.collect() {
        Ok(itinerary) => itinerary,
        Err(err) => {
            eprintln!("could not read the itinerary: {}", err);
            process::exit(1);
        }
    };

    let api = GoogleMaps::from_env();

    match plan_trip(&api, &itinerary).await {
        Ok(summary) => println!("{}", summary),
        Err(err) => {
            eprintln!("no route was found: {}", err);
            process::exit(1);
        }
    }
}
