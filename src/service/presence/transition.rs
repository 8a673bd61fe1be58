//! Pure presence state machine.
//!
//! Every function takes the current session by reference and returns the next
//! one, leaving the input untouched. Button handlers and admin commands share
//! this single implementation.

use chrono::{DateTime, Utc};
use entity::session::{Model, Status};

use crate::{
    error::presence::PresenceError,
    model::session::{elapsed_seconds, Transition},
};

/// Applies `transition` to `session` at instant `now`.
///
/// | Transition | Allowed from   | Effect                                         |
/// |------------|----------------|------------------------------------------------|
/// | `Online`   | Offline, Afk   | flush AFK interval if any, open online interval |
/// | `Afk`      | Online         | flush online interval, open AFK interval        |
/// | `Back`     | Afk            | flush AFK interval, open online interval        |
/// | `Offline`  | Online, Afk    | flush the open interval, clear both markers     |
///
/// # Returns
/// - `Ok(Model)` - The session after the transition
/// - `Err(PresenceError::InvalidTransition)` - Precondition not met
pub fn apply(
    session: &Model,
    transition: Transition,
    now: DateTime<Utc>,
) -> Result<Model, PresenceError> {
    let allowed = match transition {
        Transition::Online => session.status != Status::Online,
        Transition::Afk => session.status == Status::Online,
        Transition::Back => session.status == Status::Afk,
        Transition::Offline => session.status != Status::Offline,
    };

    if !allowed {
        return Err(PresenceError::InvalidTransition {
            transition,
            status: session.status,
        });
    }

    let mut next = session.clone();
    flush_open_interval(&mut next, now);

    match transition.target() {
        Status::Online => next.online_start = Some(now),
        Status::Afk => next.afk_start = Some(now),
        Status::Offline => {}
    }
    next.status = transition.target();

    Ok(next)
}

/// Adds `seconds` to the accumulated online total without touching the status.
pub fn add_online_time(session: &Model, seconds: u64) -> Model {
    let mut next = session.clone();
    next.online_total = next.online_total.saturating_add(seconds);
    next
}

/// Removes `seconds` from the accumulated online total, stopping at zero.
///
/// An open online interval is not affected.
pub fn remove_online_time(session: &Model, seconds: u64) -> Model {
    let mut next = session.clone();
    next.online_total = next.online_total.saturating_sub(seconds);
    next
}

/// Commits the open interval into its total and clears both markers.
fn flush_open_interval(session: &mut Model, now: DateTime<Utc>) {
    if let Some(start) = session.online_start.take() {
        session.online_total = session
            .online_total
            .saturating_add(elapsed_seconds(start, now));
    }
    if let Some(start) = session.afk_start.take() {
        session.afk_total = session.afk_total.saturating_add(elapsed_seconds(start, now));
    }
}

#[cfg(test)]
mod tests {
    use chrono::Duration;
    use test_utils::factory::{self, session::SessionFactory};

    use super::*;
    use crate::model::session::LiveTotals;

    fn at(seconds: i64) -> DateTime<Utc> {
        factory::base_time() + Duration::seconds(seconds)
    }

    #[test]
    fn offline_to_online_opens_interval() {
        let session = factory::create_offline_session(1);

        let next = apply(&session, Transition::Online, at(0)).unwrap();

        assert_eq!(next.status, Status::Online);
        assert_eq!(next.online_start, Some(at(0)));
        assert!(next.is_consistent());
    }

    #[test]
    fn online_to_online_is_rejected() {
        let session = factory::create_online_session(1, at(0));

        let err = apply(&session, Transition::Online, at(5)).unwrap_err();

        assert_eq!(
            err,
            PresenceError::InvalidTransition {
                transition: Transition::Online,
                status: Status::Online,
            }
        );
    }

    #[test]
    fn afk_to_online_flushes_afk_interval() {
        let session = SessionFactory::new().afk_total(10).afk_since(at(0)).build();

        let next = apply(&session, Transition::Online, at(30)).unwrap();

        assert_eq!(next.afk_total, 40);
        assert_eq!(next.afk_start, None);
        assert_eq!(next.online_start, Some(at(30)));
        assert_eq!(next.status, Status::Online);
    }

    #[test]
    fn offline_to_afk_is_always_rejected() {
        let session = SessionFactory::new().online_total(99).build();

        let result = apply(&session, Transition::Afk, at(0));

        assert!(matches!(
            result,
            Err(PresenceError::InvalidTransition {
                transition: Transition::Afk,
                status: Status::Offline,
            })
        ));
    }

    #[test]
    fn afk_to_afk_is_rejected() {
        let session = factory::create_afk_session(1, at(0));

        assert!(apply(&session, Transition::Afk, at(1)).is_err());
    }

    #[test]
    fn online_to_afk_flushes_online_interval() {
        let session = factory::create_online_session(1, at(0));

        let next = apply(&session, Transition::Afk, at(10)).unwrap();

        assert_eq!(next.online_total, 10);
        assert_eq!(next.online_start, None);
        assert_eq!(next.afk_start, Some(at(10)));
        assert_eq!(next.status, Status::Afk);
    }

    #[test]
    fn back_requires_afk() {
        let offline = factory::create_offline_session(1);
        let online = factory::create_online_session(2, at(0));

        assert!(apply(&offline, Transition::Back, at(1)).is_err());
        assert!(apply(&online, Transition::Back, at(1)).is_err());
    }

    #[test]
    fn back_flushes_afk_and_reopens_online() {
        let session = factory::create_afk_session(1, at(0));

        let next = apply(&session, Transition::Back, at(45)).unwrap();

        assert_eq!(next.afk_total, 45);
        assert_eq!(next.online_start, Some(at(45)));
        assert_eq!(next.status, Status::Online);
    }

    #[test]
    fn offline_from_online_flushes_and_clears() {
        let session = SessionFactory::new()
            .online_total(5)
            .online_since(at(0))
            .build();

        let next = apply(&session, Transition::Offline, at(20)).unwrap();

        assert_eq!(next.online_total, 25);
        assert_eq!(next.status, Status::Offline);
        assert!(next.online_start.is_none() && next.afk_start.is_none());
    }

    #[test]
    fn offline_from_afk_flushes_afk() {
        let session = factory::create_afk_session(1, at(0));

        let next = apply(&session, Transition::Offline, at(7)).unwrap();

        assert_eq!(next.afk_total, 7);
        assert_eq!(next.online_total, 0);
        assert_eq!(next.status, Status::Offline);
    }

    #[test]
    fn offline_to_offline_is_rejected() {
        let session = factory::create_offline_session(1);

        assert!(apply(&session, Transition::Offline, at(0)).is_err());
    }

    #[test]
    fn rejection_leaves_input_untouched() {
        let session = SessionFactory::new().online_total(3).build();
        let before = session.clone();

        let _ = apply(&session, Transition::Back, at(100));

        assert_eq!(session, before);
    }

    #[test]
    fn live_total_is_monotonic_across_transitions() {
        let mut session = factory::create_offline_session(1);
        let mut last = 0;
        let steps = [
            (Transition::Online, 0),
            (Transition::Afk, 12),
            (Transition::Back, 20),
            (Transition::Afk, 21),
            (Transition::Online, 60),
            (Transition::Offline, 75),
            (Transition::Online, 90),
        ];

        for (transition, t) in steps {
            session = apply(&session, transition, at(t)).unwrap();
            let live = LiveTotals::at(&session, at(t));
            let sum = live.online + live.afk;
            assert!(sum >= last, "total shrank after {:?}", transition);
            last = sum;
            assert!(session.is_consistent());
        }

        assert_eq!(session.online_total, 12 + 1 + 15);
        assert_eq!(session.afk_total, 8 + 39);
    }

    #[test]
    fn add_time_keeps_status() {
        let session = factory::create_afk_session(1, at(0));

        let next = add_online_time(&session, 600);

        assert_eq!(next.online_total, 600);
        assert_eq!(next.status, Status::Afk);
        assert_eq!(next.afk_start, Some(at(0)));
    }

    #[test]
    fn add_time_saturates() {
        let session = SessionFactory::new().online_total(u64::MAX - 1).build();

        assert_eq!(add_online_time(&session, 10).online_total, u64::MAX);
    }

    #[test]
    fn remove_time_never_goes_negative() {
        let session = SessionFactory::new().online_total(500).build();

        assert_eq!(remove_online_time(&session, 1000).online_total, 0);
        assert_eq!(remove_online_time(&session, 200).online_total, 300);
    }
}
