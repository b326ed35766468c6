use chrono::Utc;
use uuid::Uuid;

use crate::calendar::{self, MAX_OCCURRENCES};
use crate::error::CoreError;
use crate::models::{NewTaskRequest, TaskInstance, TaskStatus, GENERIC_KIND};

/// Expands a task request into concrete instances: one per target per
/// occurrence date, every due date normalized to noon UTC. Pure; the caller
/// persists the result as one batch.
///
/// A recurring request yields a fresh shared recurrence id. An end date that
/// is absent or earlier than the start degrades the request to a one-off.
pub fn generate(request: &NewTaskRequest) -> Result<Vec<TaskInstance>, CoreError> {
    if request.targets.is_empty() {
        return Err(CoreError::InvalidInput("no target selected".to_string()));
    }
    let title = resolve_title(request)?;

    let series = request
        .recurrence
        .as_ref()
        .and_then(|r| r.until.map(|until| (r.frequency, until)))
        .filter(|(_, until)| *until >= request.date);

    let (dates, recurrence_id) = match series {
        Some((frequency, until)) => (
            calendar::occurrences_between(request.date, until, frequency, MAX_OCCURRENCES),
            Some(Uuid::now_v7()),
        ),
        None => (vec![request.date], None),
    };

    let now = Utc::now();
    let mut instances = Vec::with_capacity(dates.len() * request.targets.len());
    for date in dates {
        let due_at = calendar::normalize_to_noon(date);
        for target in &request.targets {
            instances.push(TaskInstance {
                id: Uuid::now_v7(),
                title: title.clone(),
                description: request.description.clone(),
                kind: request.kind.clone(),
                status: TaskStatus::Pending,
                due_at,
                plant_id: target.plant_id(),
                space_id: target.space_id(),
                recurrence_id,
                created_at: now,
                updated_at: now,
            });
        }
    }
    Ok(instances)
}

/// The generic kind carries no label of its own, so it demands an explicit
/// title; any other kind falls back to its capitalized tag.
fn resolve_title(request: &NewTaskRequest) -> Result<String, CoreError> {
    let explicit = request
        .title
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string);

    let title = if request.kind == GENERIC_KIND {
        explicit
    } else {
        explicit.or_else(|| {
            let mut chars = request.kind.trim().chars();
            chars.next().map(|first| {
                first.to_uppercase().collect::<String>() + chars.as_str()
            })
        })
    };

    title.ok_or_else(|| CoreError::InvalidInput("the task needs a title".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, Recurrence, TargetRef};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    fn d(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn request(targets: usize) -> NewTaskRequest {
        NewTaskRequest {
            kind: "irrigation".to_string(),
            title: None,
            description: None,
            date: d("2024-01-01"),
            targets: (0..targets).map(|_| TargetRef::Plant(Uuid::now_v7())).collect(),
            recurrence: None,
        }
    }

    #[test]
    fn one_off_fans_out_per_target() {
        let instances = generate(&request(3)).unwrap();
        assert_eq!(instances.len(), 3);
        for instance in &instances {
            assert_eq!(instance.due_at.date_naive(), d("2024-01-01"));
            assert!(instance.recurrence_id.is_none());
            assert_eq!(instance.status, TaskStatus::Pending);
            assert_eq!(instance.title, "Irrigation");
        }
    }

    #[test]
    fn daily_series_yields_every_date_once_per_target() {
        let mut req = request(2);
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Daily,
            until: Some(d("2024-01-05")),
        });

        let instances = generate(&req).unwrap();
        assert_eq!(instances.len(), 10); // 5 dates x 2 targets

        let recurrence_ids: HashSet<_> =
            instances.iter().map(|i| i.recurrence_id).collect();
        assert_eq!(recurrence_ids.len(), 1);
        assert!(recurrence_ids.iter().next().unwrap().is_some());

        let dates: HashSet<_> = instances.iter().map(|i| i.due_at.date_naive()).collect();
        assert_eq!(dates.len(), 5);
    }

    #[test]
    fn due_dates_are_noon_normalized() {
        let instances = generate(&request(1)).unwrap();
        assert_eq!(
            instances[0].due_at.format("%H:%M:%S").to_string(),
            "12:00:00"
        );
    }

    #[test]
    fn end_before_start_degrades_to_one_off() {
        let mut req = request(1);
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Weekly,
            until: Some(d("2023-12-01")),
        });

        let instances = generate(&req).unwrap();
        assert_eq!(instances.len(), 1);
        assert!(instances[0].recurrence_id.is_none());
    }

    #[test]
    fn missing_end_degrades_to_one_off() {
        let mut req = request(1);
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Weekly,
            until: None,
        });

        let instances = generate(&req).unwrap();
        assert_eq!(instances.len(), 1);
        assert!(instances[0].recurrence_id.is_none());
    }

    #[test]
    fn end_equal_to_start_still_forms_a_series() {
        let mut req = request(1);
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Monthly,
            until: Some(d("2024-01-01")),
        });

        let instances = generate(&req).unwrap();
        assert_eq!(instances.len(), 1);
        assert!(instances[0].recurrence_id.is_some());
    }

    #[test]
    fn expansion_stops_at_the_safety_cap() {
        let mut req = request(1);
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Daily,
            until: Some(d("2025-12-31")),
        });

        let instances = generate(&req).unwrap();
        assert_eq!(instances.len(), MAX_OCCURRENCES);
    }

    #[test]
    fn rejects_empty_target_set() {
        let err = generate(&request(0)).unwrap_err();
        assert!(matches!(err, CoreError::InvalidInput(msg) if msg.contains("no target")));
    }

    #[test]
    fn generic_kind_requires_explicit_title() {
        let mut req = request(1);
        req.kind = GENERIC_KIND.to_string();
        assert!(matches!(
            generate(&req),
            Err(CoreError::InvalidInput(msg)) if msg.contains("title")
        ));

        req.title = Some("Check trellis netting".to_string());
        let instances = generate(&req).unwrap();
        assert_eq!(instances[0].title, "Check trellis netting");
    }

    #[test]
    fn explicit_title_overrides_the_kind_label() {
        let mut req = request(1);
        req.title = Some("Deep watering".to_string());
        let instances = generate(&req).unwrap();
        assert_eq!(instances[0].title, "Deep watering");
    }

    #[test]
    fn series_dates_strictly_increase() {
        let mut req = request(1);
        req.date = d("2024-01-31");
        req.recurrence = Some(Recurrence {
            frequency: Frequency::Monthly,
            until: Some(d("2024-06-30")),
        });

        let instances = generate(&req).unwrap();
        let dates: Vec<_> = instances.iter().map(|i| i.due_at).collect();
        for pair in dates.windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }
}
