// Chart figures for the Dashboard
//
// Turns aggregator views into Plotly figure JSON ({"data": [...], "layout": {...}})

use crate::aggregator::{CorrelationView, SuccessDistribution};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

// (category, payloads, outcomes, flight numbers)
type TraceColumns<'a> = (&'a str, Vec<f64>, Vec<u8>, Vec<i64>);

/// Plotly figure: traces plus layout
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Value>,
    pub layout: Value,
}

/// Pie chart of the success distribution
pub fn pie_figure(dist: &SuccessDistribution) -> Figure {
    let labels: Vec<&str> = dist.slices.iter().map(|s| s.label.as_str()).collect();
    let values: Vec<u64> = dist.slices.iter().map(|s| s.value).collect();

    Figure {
        data: vec![json!({
            "type": "pie",
            "labels": labels,
            "values": values,
        })],
        layout: json!({
            "title": { "text": dist.title },
        }),
    }
}

/// Scatter chart of payload vs. outcome, one trace per booster version category
pub fn scatter_figure(view: &CorrelationView) -> Figure {
    // Colour groups in first-appearance order
    let mut groups: Vec<TraceColumns<'_>> = Vec::new();
    for point in &view.points {
        let category = point.booster_version_category.as_str();
        let idx = match groups.iter().position(|(name, ..)| *name == category) {
            Some(idx) => idx,
            None => {
                groups.push((category, Vec::new(), Vec::new(), Vec::new()));
                groups.len() - 1
            }
        };
        let (_, xs, ys, flights) = &mut groups[idx];
        xs.push(point.payload_mass_kg);
        ys.push(point.class);
        flights.push(point.flight_number);
    }

    let data = groups
        .into_iter()
        .map(|(name, xs, ys, flights)| {
            json!({
                "type": "scatter",
                "mode": "markers",
                "name": name,
                "legendgroup": name,
                "x": xs,
                "y": ys,
                "customdata": flights,
                "hovertemplate": "Payload Mass (kg)=%{x}<br>class=%{y}<br>Flight Number=%{customdata}<extra></extra>",
            })
        })
        .collect();

    Figure {
        data,
        layout: json!({
            "title": { "text": view.title },
            "legend": { "title": { "text": "Booster Version Category" } },
            "xaxis": {
                "title": { "text": "Payload Mass (kg)" },
                "range": [view.x_range.0, view.x_range.1],
            },
            "yaxis": { "title": { "text": "class" } },
        }),
    }
}
