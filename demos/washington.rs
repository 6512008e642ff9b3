#![allow(missing_docs)]
use astrotime::{next_sunrise, next_sunset, solar_noon, sunrise, sunset, CalculationError, GeoCoordinate};
use chrono::Utc;
use chrono_tz::America::New_York;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // Washington Monument
    let location = GeoCoordinate::new(38.8895, -77.0352)?;
    let now = Utc::now().with_timezone(&New_York);

    println!("Sunrise and Sunset - Washington Monument");
    println!("Location: {location}");
    println!("Date: {}", now.format("%B %d, %Y"));
    println!("{:=<60}", "");

    let (lat, lon) = (location.latitude(), location.longitude());
    match (sunrise(&now, lat, lon), sunset(&now, lat, lon)) {
        (Ok(rise), Ok(set)) => {
            println!("Sunrise:    {}", rise.format("%H:%M:%S %Z"));
            println!("Solar Noon: {}", solar_noon(&now, lon)?.format("%H:%M:%S %Z"));
            println!("Sunset:     {}", set.format("%H:%M:%S %Z"));
            let length = set - rise;
            println!("Day length: {}h {:02}m", length.num_hours(), length.num_minutes() % 60);
        }
        (Err(CalculationError::NoSunriseOrSunset(condition)), _)
        | (_, Err(CalculationError::NoSunriseOrSunset(condition))) => {
            println!("No sunrise or sunset today ({condition})");
        }
        (Err(e), _) | (_, Err(e)) => return Err(e.into()),
    }
    println!();

    let rise = next_sunrise(&now, lat, lon)?;
    let set = next_sunset(&now, lat, lon)?;
    println!(
        "The next sunrise at the Washington Monument is {} on {}.",
        rise.format("%-H:%M %Z"),
        rise.format("%-m/%-d/%Y")
    );
    println!(
        "The next sunset at the Washington Monument is {} on {}.",
        set.format("%-H:%M %Z"),
        set.format("%-m/%-d/%Y")
    );
    Ok(())
}
