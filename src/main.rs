use tracing_subscriber::EnvFilter;

use hamlink::{
    format_point, AppState, CsvFormatter, GeoPoint, JsonFormatter, PathAnalyzer, RadioConfig,
    RecordingMapView, TextFormatter,
};

/// Canned walkthrough: a 2 m handheld path from New York to London
fn demo() {
    let current = GeoPoint::named(40.7128, -74.0060, "New York");
    let destination = GeoPoint::named(51.5074, -0.1278, "London");

    println!("Current position:     {}", format_point(&current));
    println!("Destination position: {}", format_point(&destination));
    println!();

    let state = AppState::new()
        .with_current(current)
        .with_destination(destination);

    let mut view = RecordingMapView::new();
    state.sync_map(&mut view);
    println!(
        "Map backend received {} operations ({} markers visible, line: {})",
        view.operations.len(),
        view.visible_markers().len(),
        view.line_visible()
    );
    println!();

    match state.report() {
        Some(Ok(report)) => print!("{}", TextFormatter::new().format(&report)),
        Some(Err(e)) => eprintln!("Analysis failed: {}", e),
        None => eprintln!("Both endpoints required"),
    }
}

fn usage(program: &str) {
    eprintln!(
        "Usage: {} <lat> <lon> <dest_lat> <dest_lon> [--json|--csv]",
        program
    );
    eprintln!("   or: {} --demo", program);
    eprintln!();
    eprintln!("Radio settings come from HAMLINK_CONFIG (JSON file) or the defaults");
    eprintln!("(146.52 MHz, 5 W, 2 m antenna height).");
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().collect();
    let program = args
        .first()
        .map_or("hamlink", |s| s.as_str())
        .to_string();

    if args.len() == 2 && args[1] == "--demo" {
        demo();
        return Ok(());
    }

    if args.len() < 5 || args.len() > 6 {
        usage(&program);
        return Err("invalid arguments".into());
    }

    let lat = args[1].parse::<f64>()?;
    let lon = args[2].parse::<f64>()?;
    let dest_lat = args[3].parse::<f64>()?;
    let dest_lon = args[4].parse::<f64>()?;

    let radio = match std::env::var("HAMLINK_CONFIG") {
        Ok(path) => RadioConfig::load_from_file(&path)?,
        Err(_) => RadioConfig::default(),
    };

    let analyzer = PathAnalyzer::new(radio);
    let report = analyzer.analyze(&GeoPoint::new(lat, lon), &GeoPoint::new(dest_lat, dest_lon))?;

    match args.get(5).map(|s| s.as_str()) {
        Some("--json") => println!("{}", JsonFormatter::pretty().format(&report)?),
        Some("--csv") => println!("{}", CsvFormatter::new().format(&report)),
        Some(other) => {
            eprintln!("Unknown option: {}", other);
            usage(&program);
            return Err("invalid arguments".into());
        }
        None => print!("{}", TextFormatter::new().format(&report)),
    }

    Ok(())
}
