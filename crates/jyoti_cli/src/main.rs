use std::error::Error;

use clap::{Args, Parser, Subcommand};
use jyoti_ephem::{
    AnalyticEphemeris, AyanamshaSystem, Body, EphemerisContext, EphemerisProvider,
};
use jyoti_time::{jd_to_calendar, LocalMoment};
use jyoti_vedic::{
    compute_mandi, panchanga_at, sign_index, solar_day_for_date, vimshottari_snapshot,
    DashaLevel, GeoLocation, Rashi,
};

#[derive(Parser)]
#[command(name = "jyoti", about = "Vedic ephemeris CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Civil moment shared by the time-based subcommands.
#[derive(Args)]
struct MomentArgs {
    /// Local date as YYYY-MM-DD
    #[arg(long)]
    date: String,
    /// Local time as hh:mm or hh:mm:ss
    #[arg(long)]
    time: String,
    /// UTC offset in hours, east positive (e.g. 5.5 for IST)
    #[arg(long, default_value = "0")]
    offset: f64,
}

/// Observer location shared by the horizon-based subcommands.
#[derive(Args)]
struct PlaceArgs {
    /// Latitude in degrees, north positive
    #[arg(long)]
    lat: f64,
    /// Longitude in degrees, east positive
    #[arg(long)]
    lon: f64,
}

#[derive(Subcommand)]
enum Commands {
    /// The five panchanga elements for a moment
    Panchanga {
        #[command(flatten)]
        moment: MomentArgs,
        /// Ayanamsha system: lahiri, kp, raman, fagan-bradley, yukteshwar
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
    /// Mandi instant and longitude for a birth
    Mandi {
        #[command(flatten)]
        moment: MomentArgs,
        #[command(flatten)]
        place: PlaceArgs,
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
    /// Active Vimshottari periods for a birth at a query date
    Dasha {
        #[command(flatten)]
        moment: MomentArgs,
        /// Query date as YYYY-MM-DD (defaults to the birth date)
        #[arg(long)]
        at: Option<String>,
        /// Depth: 1 Mahadasha .. 4 Sookshmadasha
        #[arg(long, default_value = "2")]
        depth: u8,
        #[arg(long, default_value = "lahiri")]
        ayanamsha: String,
    },
    /// Divisional chart sign for a sidereal longitude
    Varga {
        /// Sidereal ecliptic longitude in degrees
        lon: f64,
        /// Chart code: 1, 2, 3, 9, 12, 30
        #[arg(long, default_value = "9")]
        chart: u16,
    },
    /// Sunrise and sunset for a civil date
    Riseset {
        /// Local date as YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// UTC offset in hours, east positive
        #[arg(long, default_value = "0")]
        offset: f64,
        #[command(flatten)]
        place: PlaceArgs,
    },
}

fn parse_date(s: &str) -> Result<(i32, u32, u32), Box<dyn Error>> {
    let parts: Vec<&str> = s.split('-').collect();
    if parts.len() != 3 {
        return Err(format!("expected YYYY-MM-DD, got {s:?}").into());
    }
    Ok((parts[0].parse()?, parts[1].parse()?, parts[2].parse()?))
}

fn parse_time(s: &str) -> Result<(u32, u32, f64), Box<dyn Error>> {
    let parts: Vec<&str> = s.split(':').collect();
    match parts.len() {
        2 => Ok((parts[0].parse()?, parts[1].parse()?, 0.0)),
        3 => Ok((parts[0].parse()?, parts[1].parse()?, parts[2].parse()?)),
        _ => Err(format!("expected hh:mm or hh:mm:ss, got {s:?}").into()),
    }
}

fn parse_ayanamsha(s: &str) -> Result<AyanamshaSystem, Box<dyn Error>> {
    AyanamshaSystem::all()
        .iter()
        .copied()
        .find(|sys| sys.name() == s)
        .ok_or_else(|| format!("unknown ayanamsha {s:?}").into())
}

fn moment_from_args(args: &MomentArgs) -> Result<LocalMoment, Box<dyn Error>> {
    let (y, mo, d) = parse_date(&args.date)?;
    let (h, mi, s) = parse_time(&args.time)?;
    Ok(LocalMoment::new(y, mo, d, h, mi, s, args.offset)?)
}

/// Format a JD UTC as a local calendar date and time.
fn format_jd_local(jd_utc: f64, offset_hours: f64) -> String {
    let (y, m, dfrac) = jd_to_calendar(jd_utc + offset_hours / 24.0);
    let d = dfrac.trunc() as u32;
    let secs = (dfrac - d as f64) * 86_400.0;
    let hh = (secs / 3600.0) as u32;
    let mm = ((secs - hh as f64 * 3600.0) / 60.0) as u32;
    let ss = secs - hh as f64 * 3600.0 - mm as f64 * 60.0;
    format!("{y:04}-{m:02}-{d:02} {hh:02}:{mm:02}:{ss:04.1}")
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let eph = AnalyticEphemeris::new();

    match cli.command {
        Commands::Panchanga { moment, ayanamsha } => {
            let m = moment_from_args(&moment)?;
            let ctx = EphemerisContext::new(parse_ayanamsha(&ayanamsha)?);
            let p = panchanga_at(&eph, &m, &ctx)?;
            println!("Tithi:     {} {} ({:.1}% elapsed)", p.tithi.paksha.name(), p.tithi.name(), p.tithi.fraction * 100.0);
            println!("Vaar:      {} ({})", p.vaar.name(), p.vaar.english_name());
            println!(
                "Nakshatra: {} pada {} ({:.1}% elapsed)",
                p.nakshatra.nakshatra.name(),
                p.nakshatra.pada,
                p.nakshatra.fraction * 100.0
            );
            println!(
                "           from {} to {}",
                format_jd_local(p.nakshatra.start_jd, m.utc_offset_hours),
                format_jd_local(p.nakshatra.end_jd, m.utc_offset_hours)
            );
            println!("Yoga:      {}", p.yoga.name());
            println!("Karana:    {}", p.karana.name());
        }

        Commands::Mandi {
            moment,
            place,
            ayanamsha,
        } => {
            let m = moment_from_args(&moment)?;
            let ctx = EphemerisContext::new(parse_ayanamsha(&ayanamsha)?);
            let loc = GeoLocation::new(place.lat, place.lon);
            let r = compute_mandi(&eph, &loc, &m, &ctx)?;
            println!("Birth period: {:?} ({})", r.birth_period, r.vaar.name());
            println!(
                "Mandi at:     {}",
                format_jd_local(r.mandi_jd, m.utc_offset_hours)
            );
            println!(
                "Longitude:    {:.4} deg ({})",
                r.longitude_deg,
                jyoti_vedic::rashi_from_longitude(r.longitude_deg).name()
            );
        }

        Commands::Dasha {
            moment,
            at,
            depth,
            ayanamsha,
        } => {
            let m = moment_from_args(&moment)?;
            let ctx = EphemerisContext::new(parse_ayanamsha(&ayanamsha)?);
            let birth_jd = m.to_jd_utc();
            let moon = eph.sidereal_longitude_deg(Body::Chandra, birth_jd, &ctx)?;
            let query_jd = match at {
                Some(s) => {
                    let (y, mo, d) = parse_date(&s)?;
                    LocalMoment::new(y, mo, d, 12, 0, 0.0, m.utc_offset_hours)?.to_jd_utc()
                }
                None => birth_jd,
            };
            let level = match depth {
                1 => DashaLevel::Mahadasha,
                2 => DashaLevel::Antardasha,
                3 => DashaLevel::Pratyantardasha,
                4 => DashaLevel::Sookshmadasha,
                _ => return Err(format!("depth {depth} outside 1..=4").into()),
            };
            let chain = vimshottari_snapshot(birth_jd, moon, query_jd, level)?;
            for p in chain {
                println!(
                    "{:<16} {:<8} {} .. {}",
                    p.level.name(),
                    p.graha.name(),
                    format_jd_local(p.start_jd, m.utc_offset_hours),
                    format_jd_local(p.end_jd, m.utc_offset_hours)
                );
            }
        }

        Commands::Varga { lon, chart } => {
            let idx = sign_index(lon, chart)?;
            let rashi = Rashi::from_index(idx as usize);
            println!("D{chart}: {} ({})", rashi.name(), rashi.english_name());
        }

        Commands::Riseset {
            date,
            offset,
            place,
        } => {
            let (y, mo, d) = parse_date(&date)?;
            let loc = GeoLocation::new(place.lat, place.lon);
            let day = solar_day_for_date(&eph, &loc, y, mo, d, offset)?;
            println!("Sunrise: {}", format_jd_local(day.sunrise_jd, offset));
            println!("Sunset:  {}", format_jd_local(day.sunset_jd, offset));
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
