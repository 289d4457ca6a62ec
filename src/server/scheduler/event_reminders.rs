use chrono::{DateTime, Datelike, Duration, Utc};
use sea_orm::DatabaseConnection;
use tokio::task::JoinSet;
use tokio_cron_scheduler::{Job, JobScheduler};

use crate::server::{
    data::event::EventRepository,
    error::AppError,
    gateway::registry::ConnectionRegistry,
    model::event::Event,
    service::notification::NotificationService,
};

/// Maximum number of events processed concurrently per sweep cycle.
const SWEEP_CONCURRENCY: usize = 4;

/// Lead time to the start of the reminder window, in days.
const WINDOW_START_DAYS: i64 = 2;

/// Lead time to the end of the reminder window, in days.
const WINDOW_END_DAYS: i64 = 3;

/// Outcome of one reminder sweep.
///
/// Failures carry the event id and a description; one event's failure never
/// aborts the rest of the batch.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    /// Events whose participants were reminded.
    pub reminded: usize,
    /// Events marked done because their target day-of-month had passed.
    pub marked_done: usize,
    /// Per-event failures collected without aborting the batch.
    pub failures: Vec<(i32, String)>,
}

/// Starts the daily event reminder scheduler
///
/// This scheduler runs once a day at midnight and sweeps for events whose
/// target date falls inside the reminder lead-time window, fanning a reminder
/// notification out to every participant of each matched event.
///
/// # Arguments
/// - `db`: Database connection
/// - `registry`: Connection registry for live delivery
pub async fn start_scheduler(
    db: DatabaseConnection,
    registry: ConnectionRegistry,
) -> Result<(), AppError> {
    let scheduler = JobScheduler::new().await?;

    // Clone resources for the job
    let job_db = db.clone();
    let job_registry = registry.clone();

    // Schedule job to run every day at midnight
    let job = Job::new_async("0 0 0 * * *", move |_uuid, _lock| {
        let db = job_db.clone();
        let registry = job_registry.clone();

        Box::pin(async move {
            match run_daily_sweep(&db, &registry, Utc::now()).await {
                Ok(outcome) => {
                    if !outcome.failures.is_empty() {
                        tracing::error!(
                            "Reminder sweep finished with {} failure(s): {:?}",
                            outcome.failures.len(),
                            outcome.failures
                        );
                    }
                }
                Err(e) => {
                    tracing::error!("Error running reminder sweep: {}", e);
                }
            }
        })
    })?;

    scheduler.add(job).await?;
    scheduler.start().await?;

    tracing::info!("Event reminder scheduler started");

    Ok(())
}

/// Runs one reminder sweep for the given reference time
///
/// Selects all events with a target date in `[now + 2 days, now + 3 days]`
/// (both ends inclusive) and processes each matched event in a bounded task
/// group: mark it done when its target day-of-month lies behind today's, then
/// fan a reminder out to every participant. A failure processing one event is
/// recorded in the outcome and does not block the others. An empty window is
/// a no-op.
///
/// # Arguments
/// - `db`: Database connection
/// - `registry`: Connection registry for live delivery
/// - `now`: Reference time the window is computed from
///
/// # Returns
/// - `Ok(SweepOutcome)`: Counts of reminded and done-marked events plus per-event failures
/// - `Err(AppError)`: The window query itself failed
pub async fn run_daily_sweep(
    db: &DatabaseConnection,
    registry: &ConnectionRegistry,
    now: DateTime<Utc>,
) -> Result<SweepOutcome, AppError> {
    tracing::info!("Notify users about upcoming events");

    let window_start = now + Duration::days(WINDOW_START_DAYS);
    let window_end = now + Duration::days(WINDOW_END_DAYS);

    let events = EventRepository::new(db)
        .find_in_reminder_window(window_start, window_end)
        .await?;

    if events.is_empty() {
        tracing::debug!("No events in reminder window");
        return Ok(SweepOutcome::default());
    }

    let mut outcome = SweepOutcome::default();
    let mut tasks: JoinSet<(i32, Result<bool, AppError>)> = JoinSet::new();

    for event in events {
        while tasks.len() >= SWEEP_CONCURRENCY {
            if let Some(result) = tasks.join_next().await {
                record(&mut outcome, result);
            }
        }

        let event_id = event.id;
        let task_db = db.clone();
        let task_registry = registry.clone();
        tasks.spawn(async move {
            (
                event_id,
                process_event(&task_db, &task_registry, event, now).await,
            )
        });
    }

    while let Some(result) = tasks.join_next().await {
        record(&mut outcome, result);
    }

    Ok(outcome)
}

/// Processes one matched event: done-marking plus reminder fan-out.
///
/// Returns whether the event was marked done. The done check compares
/// day-of-month only, ignoring month and year.
async fn process_event(
    db: &DatabaseConnection,
    registry: &ConnectionRegistry,
    event: entity::event::Model,
    now: DateTime<Utc>,
) -> Result<bool, AppError> {
    let marked_done = if event.target_date.day() < now.day() {
        EventRepository::new(db).set_done(event.id).await?;
        true
    } else {
        false
    };

    let event = Event::from_entity(event);
    let notified = NotificationService::new(db, registry)
        .event_reminder(&event)
        .await?;

    tracing::info!(
        "Reminded {} participant(s) of event {} ({})",
        notified,
        event.id,
        event.name
    );

    Ok(marked_done)
}

/// Folds one finished task into the sweep outcome.
fn record(
    outcome: &mut SweepOutcome,
    result: Result<(i32, Result<bool, AppError>), tokio::task::JoinError>,
) {
    match result {
        Ok((_, Ok(marked_done))) => {
            outcome.reminded += 1;
            if marked_done {
                outcome.marked_done += 1;
            }
        }
        Ok((event_id, Err(e))) => {
            tracing::error!("Failed to process reminders for event {}: {}", event_id, e);
            outcome.failures.push((event_id, e.to_string()));
        }
        Err(e) => {
            tracing::error!("Reminder task panicked: {}", e);
            outcome.failures.push((0, e.to_string()));
        }
    }
}
