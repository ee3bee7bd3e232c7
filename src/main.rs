use chrono::NaiveDate;
use clap::Parser;
use log::{info, warn};
use std::io::BufRead;
use std::path::PathBuf;

use solar_alt_az::config::Config;
use solar_alt_az::position::SolarPositionCalculator;
use solar_alt_az::profile::{day_profile, minutes_to_time};
use solar_alt_az::wire::{format_result, parse_line};

#[derive(Parser)]
#[clap(author, version, about)]
struct Args {
    /// TOML file with an [observer] section
    #[clap(long)]
    config: Option<PathBuf>,
    /// Print a whole-day profile for this date (YYYY-MM-DD)
    #[clap(long)]
    profile: Option<NaiveDate>,
    /// Sampling interval for --profile, in minutes
    #[clap(long, default_value_t = 60)]
    interval: u32,
    /// Lines of the form year,month,day,hour,minute,second; read from
    /// stdin when none are given
    lines: Vec<String>,
}

fn handle_line(calculator: &SolarPositionCalculator, line: &str) {
    if line.trim().is_empty() {
        return;
    }
    match parse_line(line) {
        Ok(dt) => println!("{}\n", format_result(&dt, &calculator.compute(&dt))),
        Err(err) => {
            warn!("rejected input: {}", err);
            eprintln!("error: {}", err);
        }
    }
}

fn print_profile(
    calculator: &SolarPositionCalculator,
    date: NaiveDate,
    interval: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let profile = day_profile(calculator, date, interval)?;
    println!("{} every {} minutes", profile.date, profile.interval_minutes);
    for entry in &profile.entries {
        let (hour, minute) = minutes_to_time(entry.minutes);
        let pos = &entry.position;
        println!(
            "{:02}:{:02}  elevation {:7.2}°  azimuth {:6.2}°  irradiance {:7.2} W/m²",
            hour, minute, pos.elevation_deg, pos.azimuth_deg, pos.irradiance_wm2
        );
    }
    if let Some(peak) = profile.peak() {
        let (hour, minute) = minutes_to_time(peak.minutes);
        println!(
            "Peak: {:02}:{:02} at {:.2}°",
            hour, minute, peak.position.elevation_deg
        );
    }
    match profile.daylight_span() {
        Some((first, last)) => {
            let (h0, m0) = minutes_to_time(first);
            let (h1, m1) = minutes_to_time(last);
            println!("Sun up: {:02}:{:02} - {:02}:{:02}", h0, m0, h1, m1);
        }
        None => println!("Sun up: never"),
    }
    println!(
        "Clear-sky insolation: {:.0} Wh/m²",
        profile.clear_sky_insolation()
    );
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    let config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    let observer = config.observer;
    info!(
        "Observer at {:.4}, {:.4} (UTC{:+} standard, UTC{:+} daylight)",
        observer.latitude_deg(),
        observer.longitude_deg(),
        observer.standard_utc_offset_hours(),
        observer.daylight_utc_offset_hours()
    );
    let calculator = SolarPositionCalculator::new(observer);

    if let Some(date) = args.profile {
        print_profile(&calculator, date, args.interval)?;
    }

    if !args.lines.is_empty() {
        for line in &args.lines {
            handle_line(&calculator, line);
        }
    } else if args.profile.is_none() {
        for line in std::io::stdin().lock().lines() {
            handle_line(&calculator, &line?);
        }
    }
    Ok(())
}
