//! Plain-text rendering of session and dashboard snapshots.

use std::fmt::Write;

use agri_advisor::{DashboardSnapshot, SessionSnapshot, Speaker, Turn};

pub fn turn(turn: &Turn) -> String {
    let label = match turn.speaker {
        Speaker::Farmer => "you",
        Speaker::Advisor => "advisor",
    };
    let mut out = format!("[{label}] {}", turn.text);
    if turn.search_triggered == Some(true) {
        out.push_str("\n  (searched the web)");
    }
    for citation in &turn.citations {
        match &citation.page {
            Some(page) => {
                let _ = write!(out, "\n  source: {} p.{page}", citation.document);
            }
            None => {
                let _ = write!(out, "\n  source: {}", citation.document);
            }
        }
    }
    out
}

pub fn history(session: &SessionSnapshot) -> String {
    let mut out = String::new();
    for (i, t) in session.history.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        out.push_str(&turn(t));
    }
    if session.pending {
        out.push_str("\n... waiting for an answer");
    }
    out
}

pub fn dashboard(snapshot: &DashboardSnapshot) -> String {
    if snapshot.is_empty() {
        return "Dashboard unavailable.".into();
    }

    let mut out = String::new();
    match &snapshot.weather {
        Some(w) => {
            let _ = write!(
                out,
                "Weather, {}: {:.0}°C {}",
                w.location, w.temperature, w.condition
            );
            if let Some(humidity) = w.humidity {
                let _ = write!(out, ", humidity {humidity:.0}%");
            }
            if let Some(wind) = w.wind_speed {
                let _ = write!(out, ", wind {wind:.0} km/h");
            }
            for day in &w.forecast {
                let _ = write!(out, "\n  {}: {:.0}°C {}", day.day, day.temp, day.condition);
            }
        }
        None => out.push_str("Weather unavailable."),
    }

    match &snapshot.market {
        Some(items) => {
            out.push_str("\nMandi prices:");
            for item in items {
                let arrow = if item.is_rising() { '▲' } else { '▼' };
                let unit = item.unit.as_deref().unwrap_or("Quintal");
                let _ = write!(
                    out,
                    "\n  {} @ {}: ₹{:.0}/{unit} {arrow} {:.1}%",
                    item.crop,
                    item.mandi,
                    item.price,
                    item.change.abs()
                );
            }
        }
        None => out.push_str("\nMarket prices unavailable."),
    }

    if let Some(news) = &snapshot.news {
        out.push_str("\nNews:");
        for item in news {
            let _ = write!(out, "\n  {} ({}, {})", item.title, item.source, item.time);
        }
    }
    out
}
