//! A task that fires forever at times chosen by a next-fire function.
//!
//! Each cycle goes `Waiting -> Sleeping -> Firing -> Waiting`. Time comes from
//! a [`Clock`] so cycles can be driven in tests without real sleeping.

use anyhow::Result;
use async_trait::async_trait;
use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

#[async_trait]
pub trait Clock: Send + Sync {
    /// Local wall-clock time.
    fn now(&self) -> NaiveDateTime;

    async fn sleep_until(&self, deadline: NaiveDateTime);
}

#[async_trait]
impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn now(&self) -> NaiveDateTime {
        (**self).now()
    }

    async fn sleep_until(&self, deadline: NaiveDateTime) {
        (**self).sleep_until(deadline).await
    }
}

pub struct SystemClock;

#[async_trait]
impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }

    async fn sleep_until(&self, deadline: NaiveDateTime) {
        let wait = (deadline - self.now()).to_std().unwrap_or(Duration::ZERO);
        tokio::time::sleep(wait).await;
    }
}

#[async_trait]
pub trait TaskAction: Send + Sync {
    async fn fire(&self) -> Result<()>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Waiting,
    Sleeping { until: NaiveDateTime },
    Firing,
}

pub struct RecurringTask<C, N, A> {
    name: String,
    clock: C,
    next_fire: N,
    action: A,
    state: TaskState,
}

impl<C, N, A> RecurringTask<C, N, A>
where
    C: Clock,
    N: Fn(NaiveDateTime) -> NaiveDateTime + Send + Sync,
    A: TaskAction,
{
    pub fn new(name: impl Into<String>, clock: C, next_fire: N, action: A) -> Self {
        Self {
            name: name.into(),
            clock,
            next_fire,
            action,
            state: TaskState::Waiting,
        }
    }

    pub fn state(&self) -> TaskState {
        self.state
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    /// One full cycle. An action error is logged and returned; the task itself
    /// is back in `Waiting` either way.
    pub async fn run_once(&mut self) -> Result<()> {
        self.state = TaskState::Waiting;
        let until = (self.next_fire)(self.clock.now());

        self.state = TaskState::Sleeping { until };
        info!("Task '{}' sleeping until {}", self.name, until);
        self.clock.sleep_until(until).await;

        self.state = TaskState::Firing;
        let result = self.action.fire().await;
        if let Err(e) = &result {
            error!("Task '{}' failed: {:#}", self.name, e);
        }

        self.state = TaskState::Waiting;
        result
    }

    /// Runs cycles until the process exits.
    pub async fn run(mut self) {
        loop {
            // failures are logged in run_once; the schedule keeps going
            let _ = self.run_once().await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::anyhow;
    use chrono::{NaiveDate, NaiveTime};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use crate::utils::datetime::next_daily_occurrence;

    struct FakeClock {
        now: Mutex<NaiveDateTime>,
        sleeps: Mutex<Vec<NaiveDateTime>>,
    }

    impl FakeClock {
        fn starting_at(now: NaiveDateTime) -> Arc<Self> {
            Arc::new(Self {
                now: Mutex::new(now),
                sleeps: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl Clock for FakeClock {
        fn now(&self) -> NaiveDateTime {
            *self.now.lock().unwrap()
        }

        async fn sleep_until(&self, deadline: NaiveDateTime) {
            self.sleeps.lock().unwrap().push(deadline);
            // a few seconds of work after waking
            *self.now.lock().unwrap() = deadline + chrono::Duration::seconds(3);
        }
    }

    #[derive(Default)]
    struct CountingAction {
        fired: AtomicUsize,
        fail_on: Option<usize>,
    }

    #[async_trait]
    impl TaskAction for CountingAction {
        async fn fire(&self) -> Result<()> {
            let n = self.fired.fetch_add(1, Ordering::SeqCst) + 1;
            if self.fail_on == Some(n) {
                return Err(anyhow!("boom on {}", n));
            }
            Ok(())
        }
    }

    fn start() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 5, 10)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[tokio::test]
    async fn test_fires_daily_at_target_time() {
        let clock = FakeClock::starting_at(start());
        let target = NaiveTime::from_hms_opt(7, 30, 0).unwrap();
        let mut task = RecurringTask::new(
            "daily",
            Arc::clone(&clock),
            move |now| next_daily_occurrence(now, target),
            CountingAction::default(),
        );

        for _ in 0..3 {
            task.run_once().await.unwrap();
        }

        let sleeps = clock.sleeps.lock().unwrap().clone();
        let day = |d| NaiveDate::from_ymd_opt(2024, 5, d).unwrap().and_time(target);
        assert_eq!(sleeps, vec![day(11), day(12), day(13)]);
        assert_eq!(task.action().fired.load(Ordering::SeqCst), 3);
        assert_eq!(task.state(), TaskState::Waiting);
    }

    #[tokio::test]
    async fn test_first_fire_same_day_when_target_ahead() {
        let clock = FakeClock::starting_at(start());
        let target = NaiveTime::from_hms_opt(21, 0, 0).unwrap();
        let mut task = RecurringTask::new(
            "daily",
            Arc::clone(&clock),
            move |now| next_daily_occurrence(now, target),
            CountingAction::default(),
        );

        task.run_once().await.unwrap();

        let sleeps = clock.sleeps.lock().unwrap().clone();
        assert_eq!(sleeps, vec![start().date().and_time(target)]);
    }

    #[tokio::test]
    async fn test_failed_action_does_not_stop_schedule() {
        let clock = FakeClock::starting_at(start());
        let target = NaiveTime::from_hms_opt(7, 0, 0).unwrap();
        let action = CountingAction {
            fail_on: Some(1),
            ..Default::default()
        };
        let mut task = RecurringTask::new(
            "daily",
            Arc::clone(&clock),
            move |now| next_daily_occurrence(now, target),
            action,
        );

        assert!(task.run_once().await.is_err());
        assert_eq!(task.state(), TaskState::Waiting);
        assert!(task.run_once().await.is_ok());
        assert_eq!(task.action().fired.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_system_clock_past_deadline_returns_immediately() {
        let clock = SystemClock;
        let past = clock.now() - chrono::Duration::hours(1);
        tokio::time::timeout(Duration::from_secs(1), clock.sleep_until(past))
            .await
            .unwrap();
    }
}
