use std::collections::BTreeMap;

use crate::classify::classify;
use crate::types::{
    DateRange, DeltaStatus, DetectedEvent, EventKind, ImportResult, ParsedShift, PointThresholds,
    ShiftDelta,
};

/// Joins the two aligned sets over the union of their match keys. Every
/// shift from either side appears in exactly one delta.
pub fn reconcile_shifts(
    scheduled: Vec<ParsedShift>,
    worked: Vec<ParsedShift>,
    thresholds: &PointThresholds,
) -> ImportResult {
    let scheduled_count = scheduled.len();
    let worked_count = worked.len();

    let scheduled: BTreeMap<String, ParsedShift> = scheduled
        .into_iter()
        .map(|shift| (shift.match_key.clone(), shift))
        .collect();
    let mut worked: BTreeMap<String, ParsedShift> = worked
        .into_iter()
        .map(|shift| (shift.match_key.clone(), shift))
        .collect();

    let mut deltas = Vec::with_capacity(scheduled.len() + worked.len());
    for (key, sched) in scheduled {
        match worked.remove(&key) {
            Some(work) => deltas.push(matched_delta(key, sched, work, thresholds)),
            None => deltas.push(no_show_delta(key, sched)),
        }
    }
    for (key, work) in worked {
        deltas.push(unscheduled_delta(key, work));
    }

    // Presentational order; match key breaks employee-name ties so the
    // output is reproducible.
    deltas.sort_by(|a, b| {
        a.date
            .cmp(&b.date)
            .then_with(|| a.employee_name.cmp(&b.employee_name))
            .then_with(|| a.match_key.cmp(&b.match_key))
    });

    let matched_count = count_status(&deltas, DeltaStatus::Matched);
    let no_show_count = count_status(&deltas, DeltaStatus::NoShow);
    let unscheduled_count = count_status(&deltas, DeltaStatus::Unscheduled);
    let date_range = match (deltas.first(), deltas.last()) {
        (Some(first), Some(last)) => Some(DateRange {
            start: first.date,
            end: last.date,
        }),
        _ => None,
    };

    ImportResult {
        deltas,
        scheduled_count,
        worked_count,
        matched_count,
        no_show_count,
        unscheduled_count,
        date_range,
        errors: Vec::new(),
    }
}

fn count_status(deltas: &[ShiftDelta], status: DeltaStatus) -> usize {
    deltas.iter().filter(|delta| delta.status == status).count()
}

fn matched_delta(
    key: String,
    sched: ParsedShift,
    work: ParsedShift,
    thresholds: &PointThresholds,
) -> ShiftDelta {
    let start_variance = (work.in_time - sched.in_time).num_minutes();
    let end_variance = (work.out_time - sched.out_time).num_minutes();
    let mut delta = ShiftDelta {
        match_key: key,
        employee_id: sched.employee_id,
        employee_name: sched.employee_name,
        date: sched.date,
        role: if sched.role.is_empty() {
            work.role
        } else {
            sched.role
        },
        scheduled_in: Some(sched.in_time),
        scheduled_out: Some(sched.out_time),
        scheduled_minutes: Some(sched.scheduled_minutes),
        worked_in: Some(work.in_time),
        worked_out: Some(work.out_time),
        worked_minutes: Some(work.scheduled_minutes),
        start_variance: Some(start_variance),
        end_variance: Some(end_variance),
        status: DeltaStatus::Matched,
        events: Vec::new(),
    };
    delta.events = classify(&delta, thresholds);
    delta
}

fn no_show_delta(key: String, sched: ParsedShift) -> ShiftDelta {
    ShiftDelta {
        match_key: key,
        employee_id: sched.employee_id,
        employee_name: sched.employee_name,
        date: sched.date,
        role: sched.role,
        scheduled_in: Some(sched.in_time),
        scheduled_out: Some(sched.out_time),
        scheduled_minutes: Some(sched.scheduled_minutes),
        worked_in: None,
        worked_out: None,
        worked_minutes: None,
        start_variance: None,
        end_variance: None,
        status: DeltaStatus::NoShow,
        events: vec![DetectedEvent::auto(
            EventKind::NoCallNoShow,
            "No call/no show for scheduled shift".to_string(),
        )],
    }
}

fn unscheduled_delta(key: String, work: ParsedShift) -> ShiftDelta {
    ShiftDelta {
        match_key: key,
        employee_id: work.employee_id,
        employee_name: work.employee_name,
        date: work.date,
        role: work.role,
        scheduled_in: None,
        scheduled_out: None,
        scheduled_minutes: None,
        worked_in: Some(work.in_time),
        worked_out: Some(work.out_time),
        worked_minutes: Some(work.scheduled_minutes),
        start_variance: None,
        end_variance: None,
        status: DeltaStatus::Unscheduled,
        events: vec![DetectedEvent::auto(
            EventKind::UnscheduledWorked,
            "Worked without a scheduled shift".to_string(),
        )],
    }
}
