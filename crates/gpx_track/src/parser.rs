//! Streaming-Parser für GPX auf Basis von `quick-xml`.

use crate::{Gpx, Route, Track, TrackPoint, TrackSegment};
use anyhow::{bail, Context, Result};
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;


/// Text-Element, dessen Inhalt gerade gelesen wird.
#[derive(Debug, Clone, Copy, PartialEq)]
enum TextField {
    Name,
    Elevation,
    Time,
}

/// Container, in dem sich der Parser gerade befindet.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Container {
    Root,
    Metadata,
    Track,
    Route,
}

/// Parsed eine GPX-Datei aus einem XML-String.
pub fn parse_gpx(xml_content: &str) -> Result<Gpx> {
    let mut reader = Reader::from_str(xml_content);
    reader.config_mut().trim_text(true);

    let mut buffer = Vec::new();
    let mut gpx = Gpx::default();

    let mut container = Container::Root;
    let mut current_point: Option<TrackPoint> = None;
    let mut current_field: Option<TextField> = None;

    loop {
        match reader.read_event_into(&mut buffer) {
            Ok(Event::Start(ref e)) => {
                let local = e.local_name();
                let tag = reader.decoder().decode(local.as_ref())?;

                match tag.as_ref() {
                    "metadata" => container = Container::Metadata,
                    "trk" => {
                        container = Container::Track;
                        gpx.tracks.push(Track::default());
                    }
                    "trkseg" => {
                        if let Some(track) = gpx.tracks.last_mut() {
                            track.segments.push(TrackSegment::default());
                        }
                    }
                    "rte" => {
                        container = Container::Route;
                        gpx.routes.push(Route::default());
                    }
                    "trkpt" | "rtept" => current_point = Some(parse_point(&reader, e)?),
                    "name" => current_field = Some(TextField::Name),
                    "ele" => current_field = Some(TextField::Elevation),
                    "time" => current_field = Some(TextField::Time),
                    _ => {}
                }
            }
            Ok(Event::Empty(ref e)) => {
                // Selbstschliessende Punkte: <trkpt lat=".." lon=".."/>
                let local = e.local_name();
                let tag = reader.decoder().decode(local.as_ref())?;
                if tag == "trkpt" || tag == "rtept" {
                    let point = parse_point(&reader, e)?;
                    push_point(&mut gpx, container, point);
                }
            }
            Ok(Event::Text(e)) => {
                let text = e.xml_content()?.into_owned();

                match current_field {
                    Some(TextField::Name) => {
                        if current_point.is_none() {
                            assign_name(&mut gpx, container, text);
                        }
                    }
                    Some(TextField::Elevation) => {
                        if let Some(point) = current_point.as_mut() {
                            let ele = text
                                .trim()
                                .parse::<f64>()
                                .with_context(|| format!("Ungueltige Hoehe: '{}'", text))?;
                            point.elevation = Some(ele);
                        }
                    }
                    Some(TextField::Time) => {
                        if let Some(point) = current_point.as_mut() {
                            point.time = Some(text);
                        }
                    }
                    None => {}
                }
            }
            Ok(Event::End(ref e)) => {
                let local = e.local_name();
                let tag = reader.decoder().decode(local.as_ref())?;

                match tag.as_ref() {
                    "trkpt" | "rtept" => {
                        if let Some(point) = current_point.take() {
                            push_point(&mut gpx, container, point);
                        }
                    }
                    "metadata" | "trk" | "rte" => container = Container::Root,
                    "name" | "ele" | "time" => current_field = None,
                    _ => {}
                }
            }
            Ok(Event::Eof) => break,
            Err(err) => return Err(err).context("Fehler beim Parsen des GPX"),
            _ => {}
        }

        buffer.clear();
    }

    Ok(gpx)
}

/// Liest `lat`/`lon` (und nichts sonst) aus den Attributen eines Punkt-Tags.
fn parse_point(reader: &Reader<&[u8]>, e: &BytesStart) -> Result<TrackPoint> {
    let mut lat: Option<f64> = None;
    let mut lon: Option<f64> = None;

    for attr in e.attributes().with_checks(false) {
        let attr = attr?;
        let key = reader.decoder().decode(attr.key.as_ref())?;
        let value = attr.unescape_value()?;
        match key.as_ref() {
            "lat" => lat = Some(parse_coordinate(&value, "lat")?),
            "lon" => lon = Some(parse_coordinate(&value, "lon")?),
            _ => {}
        }
    }

    match (lat, lon) {
        (Some(lat), Some(lon)) => Ok(TrackPoint::new(lat, lon)),
        (None, _) => bail!("Trackpunkt ohne lat-Attribut"),
        (_, None) => bail!("Trackpunkt ohne lon-Attribut"),
    }
}

fn parse_coordinate(value: &str, name: &str) -> Result<f64> {
    let parsed = value
        .trim()
        .parse::<f64>()
        .with_context(|| format!("Ungueltiger Wert fuer {}: '{}'", name, value))?;
    if !parsed.is_finite() {
        bail!("Nicht-endlicher Wert fuer {}: '{}'", name, value);
    }
    Ok(parsed)
}

fn push_point(gpx: &mut Gpx, container: Container, point: TrackPoint) {
    match container {
        Container::Track => {
            let Some(track) = gpx.tracks.last_mut() else {
                return;
            };
            // <trkpt> ohne umschliessendes <trkseg> tolerieren
            if track.segments.is_empty() {
                track.segments.push(TrackSegment::default());
            }
            if let Some(segment) = track.segments.last_mut() {
                segment.points.push(point);
            }
        }
        Container::Route => {
            if let Some(route) = gpx.routes.last_mut() {
                route.points.push(point);
            }
        }
        Container::Root | Container::Metadata => {
            log::warn!(
                "Punkt ausserhalb von <trk>/<rte> ignoriert ({}, {})",
                point.latitude,
                point.longitude
            );
        }
    }
}

fn assign_name(gpx: &mut Gpx, container: Container, name: String) {
    match container {
        Container::Track => {
            if let Some(track) = gpx.tracks.last_mut() {
                track.name = Some(name);
            }
        }
        Container::Route => {
            if let Some(route) = gpx.routes.last_mut() {
                route.name = Some(name);
            }
        }
        Container::Root | Container::Metadata => {
            if gpx.name.is_none() {
                gpx.name = Some(name);
            }
        }
    }
}
