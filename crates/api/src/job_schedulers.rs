use crate::{event::send_event_reminders::SendEventRemindersUseCase, shared::usecase::execute};
use actix_web::rt::time::{interval_at, Instant};
use orgreminders_infra::OrgRemindersContext;
use std::time::Duration;
use tracing::info;

/// Seconds to wait from `now_ts` (millis) until `secs_before_min` seconds
/// before the start of the next minute
pub fn get_start_delay(now_ts: usize, secs_before_min: usize) -> usize {
    let secs_to_next_minute = 60 - (now_ts / 1000) % 60;
    if secs_to_next_minute > secs_before_min {
        secs_to_next_minute - secs_before_min
    } else {
        secs_to_next_minute + (60 - secs_before_min)
    }
}

/// Runs the reminder sweep at the start of every minute
pub fn start_send_reminders_job(ctx: OrgRemindersContext) {
    actix_web::rt::spawn(async move {
        let now = ctx.sys.get_timestamp_millis();
        let secs_to_next_run = get_start_delay(now as usize, 0);
        let start = Instant::now() + Duration::from_secs(secs_to_next_run as u64);
        info!("Reminder job starts in {} seconds", secs_to_next_run);

        let mut minutely_interval = interval_at(start, Duration::from_secs(60));
        loop {
            minutely_interval.tick().await;
            let context = ctx.clone();
            actix_web::rt::spawn(send_reminders(context));
        }
    });
}

async fn send_reminders(context: OrgRemindersContext) {
    let _ = execute(SendEventRemindersUseCase {}, &context).await;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_delay_works() {
        assert_eq!(get_start_delay(50 * 1000, 5), 5);
        assert_eq!(get_start_delay(50 * 1000, 10), 60);
        assert_eq!(get_start_delay(50 * 1000, 15), 55);
        assert_eq!(get_start_delay(60 * 1000, 60), 60);
        assert_eq!(get_start_delay(60 * 1000, 10), 50);
        assert_eq!(get_start_delay(59 * 1000, 0), 1);
        assert_eq!(get_start_delay(59 * 1000, 1), 60);
    }
}
