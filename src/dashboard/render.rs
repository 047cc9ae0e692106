use crate::report::{PlanetReport, SystemReport};

use super::client::DashboardError;

pub const INVALID_KEPID: &str = "Please enter a positive whole-number Kepler ID.";

/// What the page shows below the form.
#[derive(Debug)]
pub enum Lookup {
    Idle,
    Invalid,
    Report(Box<SystemReport>),
    Failed(DashboardError),
}

impl Lookup {
    pub fn outcome(&self) -> &'static str {
        match self {
            Lookup::Idle => "idle",
            Lookup::Invalid => "invalid",
            Lookup::Report(_) => "report",
            Lookup::Failed(DashboardError::Connect) => "connect_error",
            Lookup::Failed(DashboardError::Timeout) => "timeout",
            Lookup::Failed(DashboardError::Request(_)) => "request_error",
        }
    }
}

const STYLE: &str = r#"
body {
    margin: 0;
    min-height: 100vh;
    font-family: "Source Sans Pro", Helvetica, Arial, sans-serif;
    color: white;
    background: radial-gradient(ellipse at top, #1b2735 0%, #090a0f 100%);
}
main { max-width: 760px; margin: 0 auto; padding: 2rem 1rem; }
h1 { text-shadow: 2px 2px 4px #000000; }
input[type=number] { color: black; padding: 8px; font-size: 16px; width: 12rem; }
.custom-button {
    background-color: white;
    color: black;
    padding: 10px 20px;
    font-size: 16px;
    margin: 4px 2px;
    cursor: pointer;
    border: none;
    border-radius: 4px;
}
.error {
    background-color: rgba(255, 75, 75, 0.2);
    border-left: 4px solid #ff4b4b;
    padding: 0.75rem 1rem;
}
details {
    background-color: rgba(0, 0, 0, 0.3);
    border-radius: 4px;
    margin: 0.5rem 0;
    padding: 0.5rem 1rem;
}
summary { cursor: pointer; font-weight: bold; }
"#;

pub fn page(kepid: Option<&str>, lookup: &Lookup) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    html.push_str("<title>Kepler Data Explorer</title>\n");
    html.push_str(&format!("<style>{STYLE}</style>\n"));
    html.push_str("</head>\n<body>\n<main>\n<h1>Kepler Data Explorer</h1>\n");

    html.push_str("<form method=\"get\" action=\"/\">\n");
    html.push_str("<label for=\"kepid\">Enter Kepler ID</label><br>\n");
    html.push_str(&format!(
        "<input type=\"number\" id=\"kepid\" name=\"kepid\" min=\"1\" step=\"1\" required value=\"{}\">\n",
        escape_html(kepid.unwrap_or("1"))
    ));
    html.push_str("<button class=\"custom-button\" type=\"submit\">Get Kepler Data</button>\n");
    html.push_str("</form>\n");

    match lookup {
        Lookup::Idle => {}
        Lookup::Invalid => push_error(&mut html, INVALID_KEPID),
        Lookup::Failed(err) => push_error(&mut html, &err.to_string()),
        Lookup::Report(report) => push_report(&mut html, report),
    }

    html.push_str("</main>\n</body>\n</html>\n");
    html
}

fn push_error(html: &mut String, message: &str) {
    html.push_str(&format!(
        "<div class=\"error\" role=\"alert\">{}</div>\n",
        escape_html(message)
    ));
}

fn push_line(html: &mut String, label: &str, value: &str) {
    html.push_str(&format!(
        "<p><strong>{}:</strong> {}</p>\n",
        escape_html(label),
        escape_html(value)
    ));
}

fn push_report(html: &mut String, report: &SystemReport) {
    html.push_str(&format!(
        "<h2>Star System: {}</h2>\n",
        escape_html(&report.star_system)
    ));
    push_line(html, "Number of Planets", &report.number_of_planets.to_string());
    push_line(html, "Star Temperature", &report.star_temperature);
    push_line(html, "Star Size", &report.star_size);
    if let Some(mass) = report.star_mass.as_deref().filter(|m| !m.is_empty()) {
        push_line(html, "Star Mass", mass);
    }
    if let Some(age) = report.star_age.as_deref().filter(|a| !a.is_empty()) {
        push_line(html, "Star Age", age);
    }
    push_line(html, "RA/Dec", &report.ra_dec);
    push_line(html, "Discovery Date", &report.discovery_date);
    push_line(html, "Last Update", &report.last_update);

    html.push_str("<h3>Smart Summary</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", escape_html(&report.smart_summary)));

    if let Some(note) = report.system_note.as_deref().filter(|n| !n.is_empty()) {
        html.push_str("<h3>System Note</h3>\n");
        html.push_str(&format!("<p>{}</p>\n", escape_html(note)));
    }

    html.push_str("<h3>Potential Planets</h3>\n");
    for planet in &report.potential_planets {
        push_planet(html, planet);
    }
}

fn push_planet(html: &mut String, planet: &PlanetReport) {
    html.push_str(&format!(
        "<details>\n<summary>Planet {}</summary>\n",
        planet.planet_number
    ));
    push_line(html, "Orbit", &planet.orbit);
    push_line(html, "Size", &planet.size);
    push_line(html, "Temperature", &planet.temperature);
    push_line(html, "Sunlight Received", &planet.sunlight_received);
    push_line(html, "Transit Duration", &planet.transit_duration);
    push_line(html, "Transit Depth", &planet.transit_depth);
    push_line(html, "Detection SNR", &raw_number(planet.detection_snr));
    push_line(html, "Impact Parameter", &raw_number(planet.impact_parameter));

    html.push_str("<p>Interesting Features:</p>\n<ul>\n");
    for feature in &planet.interesting_features {
        html.push_str(&format!("<li>{}</li>\n", escape_html(feature)));
    }
    html.push_str("</ul>\n</details>\n");
}

fn raw_number(value: Option<f64>) -> String {
    value.map_or_else(|| "Unknown".to_string(), |v| v.to_string())
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
