use crate::types::{DeltaStatus, DetectedEvent, EventKind, PointThresholds, ShiftDelta};

/// Applies the threshold rules to a matched delta, in a fixed order. Rules
/// are independent except that major tardiness suppresses minor. A shift
/// inside every tolerance yields no events.
pub fn classify(delta: &ShiftDelta, thresholds: &PointThresholds) -> Vec<DetectedEvent> {
    if delta.status != DeltaStatus::Matched {
        return Vec::new();
    }
    let (Some(start), Some(end)) = (delta.start_variance, delta.end_variance) else {
        return Vec::new();
    };

    let mut events = Vec::new();
    if start >= thresholds.tardiness_major_min {
        events.push(DetectedEvent::auto(
            EventKind::TardinessMajor,
            format!("Arrived {} min late", start),
        ));
    } else if start >= thresholds.tardiness_minor_min {
        events.push(DetectedEvent::auto(
            EventKind::TardinessMinor,
            format!("Arrived {} min late", start),
        ));
    }
    if end <= -thresholds.early_departure_min {
        events.push(DetectedEvent::auto(
            EventKind::EarlyDeparture,
            format!("Left {} min early", end.abs()),
        ));
    }
    if start <= -thresholds.arrived_early_min {
        events.push(DetectedEvent::auto(
            EventKind::ArrivedEarly,
            format!("Arrived {} min early", start.abs()),
        ));
    }
    if end >= thresholds.stayed_late_min {
        events.push(DetectedEvent::auto(
            EventKind::StayedLate,
            format!("Stayed {} min past scheduled end", end),
        ));
    }
    events
}
