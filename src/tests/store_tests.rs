#[cfg(test)]
mod tests {
    use crate::{
        errors::{AppError, ValidationError},
        shapes::roster::{Roster, RosterAction},
        store::RosterStore,
    };
    use chrono::NaiveDate;
    use std::sync::Arc;

    #[test]
    fn starts_from_the_seeded_roster() {
        let store = RosterStore::default();
        assert_eq!(*store.snapshot(), Roster::seeded());
    }

    #[test]
    fn accepted_actions_are_published() {
        let store = RosterStore::default();
        let mut rx = store.subscribe();
        let next = store
            .dispatch(RosterAction::AddPlayer)
            .expect("expected the action to be accepted");
        assert!(rx.has_changed().expect("expected the store to be alive"));
        assert!(Arc::ptr_eq(&rx.borrow_and_update(), &next));
        assert_eq!(store.snapshot().players().len(), 4);
    }

    #[test]
    fn rejected_actions_leave_the_snapshot_untouched() {
        let store = RosterStore::default();
        let mut rx = store.subscribe();
        let before = store.snapshot();
        let date = NaiveDate::from_ymd_opt(2025, 8, 2).expect("expected a valid date");
        let result = store.dispatch(RosterAction::AddTrainingDate(date));
        assert!(matches!(
            result,
            Err(AppError::Validation(ValidationError::DuplicateDate(_)))
        ));
        assert!(!rx.has_changed().expect("expected the store to be alive"));
        assert!(Arc::ptr_eq(&before, &rx.borrow_and_update()));
    }

    #[test]
    fn earlier_snapshots_are_immutable() {
        let store = RosterStore::default();
        let before = store.snapshot();
        store
            .dispatch(RosterAction::RemovePlayer(1))
            .expect("expected the action to be accepted");
        assert_eq!(before.players().len(), 3);
        assert_eq!(store.snapshot().players().len(), 2);
    }
}
