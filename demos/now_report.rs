//! Fetch the ephemeris once and print where the ISS is right now.
//!
//! ```bash
//! cargo run --example now_report -- [source-descriptor]
//! ```

use iss_tracker::tracker::IssTracker;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let source = std::env::args()
        .nth(1)
        .unwrap_or_else(|| format!("url:{}", iss_tracker::constants::ISS_OEM_URL));

    let tracker = IssTracker::new(&source)?;
    let records = tracker.refresh()?;
    println!("loaded {records} state vectors");

    let query = tracker.query();
    let report = query.now()?;
    println!(
        "closest epoch: {}\nposition (km): {:?}\nvelocity (km/s): {:?}\nspeed: {:.4} km/s",
        report.epoch, report.position, report.velocity, report.speed
    );
    println!("average speed over the window: {:.4} km/s", query.average_speed());

    Ok(())
}
