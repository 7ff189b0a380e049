use std::io::{self, Write};

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

use crate::error::{ConvertError, Result};
use crate::heartrate_merger::EnrichedPoint;

pub const CREATOR: &str = "FestinaFitness2GPX";

const GPX_NAMESPACE: &str = "http://www.topografix.com/GPX/1/1";
const XSI_NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema-instance";
const GPXTPX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/TrackPointExtension/v1";
const GPXX_NAMESPACE: &str = "http://www.garmin.com/xmlschemas/GpxExtensions/v3";
const SCHEMA_LOCATION: &str = "http://www.topografix.com/GPX/1/1 \
    http://www.topografix.com/GPX/1/1/gpx.xsd \
    http://www.garmin.com/xmlschemas/GpxExtensions/v3 \
    http://www.garmin.com/xmlschemas/GpxExtensionsv3.xsd \
    http://www.garmin.com/xmlschemas/TrackPointExtension/v1 \
    http://www.garmin.com/xmlschemas/TrackPointExtensionv1.xsd";

// Activity type code the Festina app uses for its tracks.
const TRACK_TYPE: &str = "9";

/// Writes `points` as a single-segment GPX 1.1 track with Garmin
/// TrackPointExtension heart rates. The metadata time is the time of the
/// first point, so an empty `points` is rejected.
pub fn write_gpx<W: Write>(points: &[EnrichedPoint], writer: W) -> Result<()> {
    let first = points.first().ok_or(ConvertError::NoTrackPoints)?;
    let mut writer = Writer::new_with_indent(writer, b' ', 2);
    write_document(&mut writer, &first.time, points).map_err(ConvertError::Xml)?;
    writer.into_inner().flush().map_err(ConvertError::Xml)
}

pub fn gpx_string_from_points(points: &[EnrichedPoint]) -> Result<String> {
    let mut buf = Vec::new();
    write_gpx(points, &mut buf)?;
    String::from_utf8(buf)
        .map_err(|e| ConvertError::Xml(io::Error::new(io::ErrorKind::InvalidData, e)))
}

fn write_document<W: Write>(
    writer: &mut Writer<W>,
    metadata_time: &str,
    points: &[EnrichedPoint],
) -> io::Result<()> {
    writer.write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))?;
    writer.write_event(Event::Start(BytesStart::new("gpx").with_attributes([
        ("creator", CREATOR),
        ("version", "1.1"),
        ("xmlns", GPX_NAMESPACE),
        ("xmlns:xsi", XSI_NAMESPACE),
        ("xsi:schemaLocation", SCHEMA_LOCATION),
        ("xmlns:gpxtpx", GPXTPX_NAMESPACE),
        ("xmlns:gpxx", GPXX_NAMESPACE),
    ])))?;

    start(writer, "metadata")?;
    text_element(writer, "time", metadata_time)?;
    end(writer, "metadata")?;

    start(writer, "trk")?;
    text_element(writer, "type", TRACK_TYPE)?;
    start(writer, "trkseg")?;
    for point in points {
        write_track_point(writer, point)?;
    }
    end(writer, "trkseg")?;
    end(writer, "trk")?;

    end(writer, "gpx")
}

fn write_track_point<W: Write>(writer: &mut Writer<W>, point: &EnrichedPoint) -> io::Result<()> {
    let lat = point.latitude.to_string();
    let lon = point.longitude.to_string();
    writer.write_event(Event::Start(
        BytesStart::new("trkpt").with_attributes([("lat", lat.as_str()), ("lon", lon.as_str())]),
    ))?;
    text_element(writer, "ele", &point.altitude.to_string())?;
    text_element(writer, "time", &point.time)?;
    start(writer, "extensions")?;
    start(writer, "gpxtpx:TrackPointExtension")?;
    text_element(writer, "gpxtpx:hr", &point.heartrate.to_string())?;
    end(writer, "gpxtpx:TrackPointExtension")?;
    end(writer, "extensions")?;
    end(writer, "trkpt")
}

fn start<W: Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::Start(BytesStart::new(name)))
}

fn end<W: Write>(writer: &mut Writer<W>, name: &str) -> io::Result<()> {
    writer.write_event(Event::End(BytesEnd::new(name)))
}

fn text_element<W: Write>(writer: &mut Writer<W>, name: &str, text: &str) -> io::Result<()> {
    start(writer, name)?;
    writer.write_event(Event::Text(BytesText::new(text)))?;
    end(writer, name)
}
